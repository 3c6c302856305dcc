//! Main module for the Kitchen Timer application using Yew.
//! Wires the timer hook into the page components.

use kitchen_timer::config::APPLICATION_NAME;
use log::Level;
use yew::prelude::*;

mod components;
mod dom;
mod hooks;

use components::{ClockFace, TimerSound, WindUpForm};
use hooks::use_kitchen_timer;

/// Page component: clock readout, wind-up form and the alert sound.
#[function_component]
pub fn App() -> Html {
    let timer = use_kitchen_timer();

    html! {
        <main class="kitchen-timer">
            <h1>{ APPLICATION_NAME }</h1>
            <ClockFace minutes={timer.minutes.clone()} seconds={timer.seconds.clone()} />
            <WindUpForm number_input={timer.number_input.clone()} onsubmit={timer.on_submit.clone()} />
            <TimerSound sound_ref={timer.timer_sound.clone()} />
        </main>
    }
}

fn log_level() -> Level {
    if cfg!(debug_assertions) {
        Level::Debug
    } else {
        Level::Info
    }
}

/// Entry point: installs panic and log hooks, then renders the App.
fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(log_level()));
    yew::Renderer::<App>::new().render();
}

