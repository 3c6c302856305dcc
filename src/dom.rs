//! [`TimerView`] over the browser DOM.
//!
//! Display surfaces are Yew state handles and node refs; the page title,
//! notifications and audio go straight through web-sys. Browser failures are
//! logged and swallowed so a missing capability never breaks the countdown.

use kitchen_timer::{Alerting, NotificationGate, Permission, SubmitHandler, TimerView};
use log::{debug, warn};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{
    HtmlAudioElement, HtmlInputElement, Notification, NotificationOptions, NotificationPermission,
};
use yew::prelude::{NodeRef, UseStateHandle};

/// Where the form's submit callback finds the handler installed by
/// [`TimerView::set_form_submit_event`].
pub type SubmitSlot = Rc<RefCell<Option<SubmitHandler>>>;

#[derive(Debug)]
pub enum DomError {
    Unsupported(&'static str),
    Js(String),
}

impl fmt::Display for DomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomError::Unsupported(what) => write!(f, "{} is not available in this browser", what),
            DomError::Js(detail) => write!(f, "browser call failed: {}", detail),
        }
    }
}

impl std::error::Error for DomError {}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

pub struct DomView {
    seconds_remaining: UseStateHandle<String>,
    minutes_remaining: UseStateHandle<String>,
    number_input: NodeRef,
    timer_sound: NodeRef,
    submit: SubmitSlot,
    notifications: NotificationGate,
}

impl DomView {
    pub fn new(
        seconds_remaining: UseStateHandle<String>,
        minutes_remaining: UseStateHandle<String>,
        number_input: NodeRef,
        timer_sound: NodeRef,
        submit: SubmitSlot,
    ) -> Self {
        Self {
            seconds_remaining,
            minutes_remaining,
            number_input,
            timer_sound,
            submit,
            notifications: NotificationGate::new(),
        }
    }

    fn chime(&self) -> Alerting<HtmlAudioElement> {
        Alerting::from_option(self.timer_sound.cast::<HtmlAudioElement>())
    }

    fn input(&self) -> Option<HtmlInputElement> {
        self.number_input.cast::<HtmlInputElement>()
    }
}

impl TimerView for DomView {
    fn can_play_sound(&self) -> bool {
        self.chime().is_enabled()
    }

    fn load_audio(&self) {
        self.chime().fire(|audio| audio.load());
    }

    fn play_audio(&self) {
        self.chime().fire(|audio| match audio.play() {
            Ok(playing) => spawn_local(async move {
                if let Err(e) = JsFuture::from(playing).await {
                    warn!("alert sound refused: {}", DomError::from(e));
                }
            }),
            Err(e) => warn!("alert sound failed: {}", DomError::from(e)),
        });
    }

    fn send_notification(&self, title: &str, body: &str) {
        self.notifications.alerting().fire(|_| {
            if let Err(e) = show_notification(title, body) {
                warn!("notification failed: {}", e);
            }
        });
    }

    fn notifications_check(&mut self) {
        let current = host_permission()
            .map_err(|e| debug!("{}", e))
            .ok();
        self.notifications.check(current, request_permission);
    }

    fn set_title(&mut self, title: &str) -> &mut Self {
        gloo_utils::document().set_title(title);
        self
    }

    fn write_seconds(&mut self, text: &str) {
        self.seconds_remaining.set(text.to_string());
    }

    fn write_minutes(&mut self, text: &str) {
        self.minutes_remaining.set(text.to_string());
    }

    fn set_form_submit_event(&mut self, handler: SubmitHandler) -> &mut Self {
        *self.submit.borrow_mut() = Some(handler);
        self
    }

    fn focus_number_input(&self) {
        if let Some(input) = self.input() {
            if let Err(e) = input.focus() {
                warn!("could not focus minutes input: {}", DomError::from(e));
            }
        }
    }

    fn get_minutes_to_wind_up_to(&self) -> String {
        self.input().map(|input| input.value()).unwrap_or_default()
    }

    fn set_number_input(&mut self, value: &str) -> &mut Self {
        if let Some(input) = self.input() {
            input.set_value(value);
        }
        self
    }
}

fn show_notification(title: &str, body: &str) -> Result<(), DomError> {
    let options = NotificationOptions::new();
    options.set_body(body);
    Notification::new_with_options(title, &options)?;
    Ok(())
}

fn host_permission() -> Result<Permission, DomError> {
    let window = gloo_utils::window();
    let supported = js_sys::Reflect::has(&window, &JsValue::from_str("Notification"))?;
    if !supported {
        return Err(DomError::Unsupported("Notification"));
    }
    Ok(match Notification::permission() {
        NotificationPermission::Granted => Permission::Granted,
        NotificationPermission::Denied => Permission::Denied,
        _ => Permission::Default,
    })
}

fn request_permission(reply: Box<dyn FnOnce(Permission)>) {
    let pending = match Notification::request_permission() {
        Ok(promise) => promise,
        Err(e) => {
            warn!("{}", DomError::from(e));
            return;
        }
    };
    spawn_local(async move {
        match JsFuture::from(pending).await {
            Ok(answer) => reply(Permission::from_host(&answer.as_string().unwrap_or_default())),
            Err(e) => warn!("notification prompt failed: {}", DomError::from(e)),
        }
    });
}
