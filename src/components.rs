//! Pure Yew view components for the kitchen timer page.
//!
//! These render from props only; all timing lives in the view-model.

use kitchen_timer::config::{
    MINUTES_REMAINING_ID, NUMBER_INPUT_ID, SECONDS_REMAINING_ID, SOUND_URL, TIMER_SOUND_ID,
    TIMER_SUBMIT_FORM_ID,
};
use yew::prelude::*;

/// Big `M:SS` readout.
#[derive(Properties, PartialEq)]
pub struct ClockFaceProps {
    pub minutes: AttrValue,
    pub seconds: AttrValue,
}

#[function_component(ClockFace)]
pub fn clock_face(props: &ClockFaceProps) -> Html {
    html! {
        <div class="clock-face">
            <span id={MINUTES_REMAINING_ID} class="minutes">{ props.minutes.clone() }</span>
            <span class="separator">{ ":" }</span>
            <span id={SECONDS_REMAINING_ID} class="seconds">{ props.seconds.clone() }</span>
        </div>
    }
}

/// Minutes input plus start button. The input is left uncontrolled so the
/// view-model can read and normalize it directly.
#[derive(Properties, PartialEq)]
pub struct WindUpFormProps {
    pub number_input: NodeRef,
    pub onsubmit: Callback<SubmitEvent>,
}

#[function_component(WindUpForm)]
pub fn wind_up_form(props: &WindUpFormProps) -> Html {
    html! {
        <form id={TIMER_SUBMIT_FORM_ID} class="wind-up-form" onsubmit={props.onsubmit.clone()}>
            <label for={NUMBER_INPUT_ID}>{ "Minutes:" }</label>
            <input
                id={NUMBER_INPUT_ID}
                ref={props.number_input.clone()}
                type="number"
                min="0"
                step="1"
                placeholder="5"
            />
            <button type="submit" class="btn-primary">{ "Start" }</button>
        </form>
    }
}

#[derive(Properties, PartialEq)]
pub struct TimerSoundProps {
    pub sound_ref: NodeRef,
}

#[function_component(TimerSound)]
pub fn timer_sound(props: &TimerSoundProps) -> Html {
    html! {
        <audio id={TIMER_SOUND_ID} ref={props.sound_ref.clone()} src={SOUND_URL} preload="auto"></audio>
    }
}
