//! The display side of the timer.
//!
//! A [`TimerView`] formats values onto display surfaces, reads the minutes
//! input and owns the capability-gated effects. It holds no timing logic.
//! Setters return the view so configuration calls can be chained.

use crate::config::SECONDS_WIDTH;
use crate::utils::{format_title, zero_pad};

/// Invoked when the user submits the wind-up form.
pub type SubmitHandler = Box<dyn FnMut()>;

pub trait TimerView {
    /// True only when an audio element is available.
    fn can_play_sound(&self) -> bool;

    /// Raw audio load; only reached through [`TimerView::load_sound`].
    fn load_audio(&self);

    /// Raw audio playback; only reached through [`TimerView::play_sound`].
    fn play_audio(&self);

    /// Prime the audio element while a user gesture is in progress.
    fn load_sound(&self) {
        if self.can_play_sound() {
            self.load_audio();
        }
    }

    fn play_sound(&self) {
        if self.can_play_sound() {
            self.play_audio();
        }
    }

    /// Show a notification if permission was granted, otherwise do nothing.
    fn send_notification(&self, title: &str, body: &str);

    /// Resolve notification permission, prompting the user when undecided.
    fn notifications_check(&mut self);

    fn set_title(&mut self, title: &str) -> &mut Self;

    fn set_title_by_time(&mut self, minutes: u64, seconds: u64, postfix: &str) -> &mut Self
    where
        Self: Sized,
    {
        self.set_title(&format_title(minutes, seconds, postfix))
    }

    /// Write already formatted text into the seconds display.
    fn write_seconds(&mut self, text: &str);

    /// Write already formatted text into the minutes display.
    fn write_minutes(&mut self, text: &str);

    fn set_seconds_remaining(&mut self, seconds: u64) -> &mut Self
    where
        Self: Sized,
    {
        self.write_seconds(&zero_pad(seconds, SECONDS_WIDTH));
        self
    }

    fn set_minutes_remaining(&mut self, minutes: u64) -> &mut Self
    where
        Self: Sized,
    {
        self.write_minutes(&minutes.to_string());
        self
    }

    /// Replace the form's default submit action with `handler`.
    fn set_form_submit_event(&mut self, handler: SubmitHandler) -> &mut Self;

    fn focus_number_input(&self);

    /// Raw, unparsed contents of the minutes input.
    fn get_minutes_to_wind_up_to(&self) -> String;

    fn set_number_input(&mut self, value: &str) -> &mut Self;
}
