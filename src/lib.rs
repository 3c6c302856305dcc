//! Kitchen timer: a countdown in the browser.
//!
//! The crate splits into a pure [`timer::Timer`] model, the [`view::TimerView`]
//! display contract, and the [`view_model::ViewModel`] that wires user input
//! to the timer and refreshes the screen from a one-second
//! [`driver::Driver`]. Browser bindings live in the binary.

pub mod alert;
pub mod config;
pub mod driver;
pub mod timer;
pub mod utils;
pub mod view;
pub mod view_model;

pub use alert::{Alerting, NotificationGate, Permission};
pub use driver::{Driver, DriverHandle, IntervalDriver};
pub use timer::Timer;
pub use view::{SubmitHandler, TimerView};
pub use view_model::{enable_form_submit, start_ticking, ViewModel};
