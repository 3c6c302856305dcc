//! Application-level configuration constants.

// Naming
pub const APPLICATION_NAME: &str = "Kitchen Timer";
pub const TIME_IS_UP: &str = "Time is up";

// Timing
pub const TICK_INTERVAL_MS: u32 = 1_000;
pub const SECONDS_PER_MINUTE: u64 = 60;

// Formatting
pub const SECONDS_WIDTH: usize = 2;

// DOM ids of the display surfaces
pub const SECONDS_REMAINING_ID: &str = "seconds-remaining";
pub const MINUTES_REMAINING_ID: &str = "minutes-remaining";
pub const TIMER_SUBMIT_FORM_ID: &str = "timer-submit-form";
pub const NUMBER_INPUT_ID: &str = "number-input";
pub const TIMER_SOUND_ID: &str = "timer-sound";

// Alert sound, served next to index.html
pub const SOUND_URL: &str = "sounds/timer.wav";
