//! Glue between the [`Timer`] and a [`TimerView`].
//!
//! The view-model owns both, plus the handle of the single active driver.
//! It is shared as `Rc<RefCell<ViewModel<V>>>` so the submit handler and the
//! driver task can reach it; both hold weak references only.

use crate::config::{APPLICATION_NAME, TIME_IS_UP};
use crate::driver::{drive, Driver, DriverHandle};
use crate::timer::Timer;
use crate::view::TimerView;
use log::{debug, info};
use std::cell::RefCell;
use std::ops::ControlFlow;
use std::rc::Rc;

pub struct ViewModel<V: TimerView> {
    application_name: &'static str,
    timer: Timer,
    view: V,
    driver: Option<DriverHandle>,
    // alert already fired for the current countdown
    alerted: bool,
}

impl<V: TimerView> ViewModel<V> {
    /// Take ownership of `view`, run its one-time notification check and
    /// focus the minutes input.
    pub fn new(mut view: V) -> Self {
        view.notifications_check();
        view.focus_number_input();
        Self {
            application_name: APPLICATION_NAME,
            timer: Timer::new(),
            view,
            driver: None,
            alerted: false,
        }
    }

    #[cfg(test)]
    pub(crate) fn timer(&self) -> &Timer {
        &self.timer
    }

    #[cfg(test)]
    pub(crate) fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// True while a driver is counting this view-model down.
    #[cfg(test)]
    pub(crate) fn is_driving(&self) -> bool {
        self.driver.as_ref().is_some_and(DriverHandle::is_active)
    }

    /// Reset the countdown from the minutes input and redraw.
    pub fn wind_up(&mut self) {
        let raw = self.view.get_minutes_to_wind_up_to();
        self.timer.wind_up_from_input(&raw);
        self.alerted = false;
        info!(
            "wound up to {} minute(s) from input {:?}",
            self.timer.minutes_remaining(),
            raw
        );

        self.view.load_sound();
        let minutes = self.timer.minutes_remaining().to_string();
        self.view.set_number_input(&minutes);
        self.refresh();
    }

    /// Advance one second and redraw. Alerts the user the first time the
    /// timer reports stopped after a wind-up. Returns whether it is stopped.
    pub fn tick(&mut self) -> bool {
        self.timer.tick();
        let stopped = self.timer.stopped();

        if stopped && !self.alerted {
            self.alerted = true;
            info!("{}", TIME_IS_UP);
            self.view.send_notification(self.application_name, TIME_IS_UP);
            self.view.play_sound();
        }

        self.refresh();
        stopped
    }

    fn refresh(&mut self) {
        let (minutes, seconds) = (
            self.timer.minutes_remaining(),
            self.timer.seconds_remaining(),
        );
        self.view
            .set_seconds_remaining(seconds)
            .set_minutes_remaining(minutes)
            .set_title_by_time(minutes, seconds, self.application_name);
    }

    fn replace_driver(&mut self, next: Option<DriverHandle>) {
        if let Some(previous) = std::mem::replace(&mut self.driver, next) {
            previous.cancel();
        }
    }
}

/// Cancel any running driver, then start one that ticks `vm` once per period
/// and ends itself as soon as the timer reports stopped.
pub fn start_ticking<V, D>(vm: &Rc<RefCell<ViewModel<V>>>, driver: &D)
where
    V: TimerView + 'static,
    D: Driver + ?Sized,
{
    vm.borrow_mut().replace_driver(None);

    let weak = Rc::downgrade(vm);
    let handle = drive(driver, move || match weak.upgrade() {
        Some(vm) if !vm.borrow_mut().tick() => ControlFlow::Continue(()),
        _ => ControlFlow::Break(()),
    });
    debug!("driver started");
    vm.borrow_mut().replace_driver(Some(handle));
}

/// Bind form submission to wind-up followed by [`start_ticking`].
pub fn enable_form_submit<V, D>(vm: &Rc<RefCell<ViewModel<V>>>, driver: D)
where
    V: TimerView + 'static,
    D: Driver + 'static,
{
    let weak = Rc::downgrade(vm);
    vm.borrow_mut()
        .view_mut()
        .set_form_submit_event(Box::new(move || {
            if let Some(vm) = weak.upgrade() {
                vm.borrow_mut().wind_up();
                start_ticking(&vm, &driver);
            }
        }));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alert::{Alerting, NotificationGate, Permission};
    use crate::driver::testing::ManualDriver;
    use crate::view::SubmitHandler;
    use futures::executor::LocalPool;
    use std::cell::Cell;

    #[derive(Default)]
    struct Surfaces {
        title: String,
        seconds: String,
        minutes: String,
        input: String,
    }

    struct RecordingView {
        surfaces: Surfaces,
        sound: Alerting<()>,
        permission: Option<Permission>,
        gate: NotificationGate,
        submit: Option<SubmitHandler>,
        checks: usize,
        focused: Cell<usize>,
        loads: Rc<RefCell<usize>>,
        plays: Rc<RefCell<usize>>,
        notifications: Rc<RefCell<Vec<(String, String)>>>,
    }

    impl RecordingView {
        fn new(input: &str) -> Self {
            Self {
                surfaces: Surfaces {
                    input: input.to_string(),
                    ..Surfaces::default()
                },
                sound: Alerting::Enabled(()),
                permission: Some(Permission::Granted),
                gate: NotificationGate::new(),
                submit: None,
                checks: 0,
                focused: Cell::new(0),
                loads: Rc::default(),
                plays: Rc::default(),
                notifications: Rc::default(),
            }
        }

        fn silent(input: &str) -> Self {
            Self {
                sound: Alerting::Disabled,
                permission: None,
                ..Self::new(input)
            }
        }
    }

    impl TimerView for RecordingView {
        fn can_play_sound(&self) -> bool {
            self.sound.is_enabled()
        }

        fn load_audio(&self) {
            *self.loads.borrow_mut() += 1;
        }

        fn play_audio(&self) {
            *self.plays.borrow_mut() += 1;
        }

        fn send_notification(&self, title: &str, body: &str) {
            self.gate.alerting().fire(|_| {
                self.notifications
                    .borrow_mut()
                    .push((title.to_string(), body.to_string()))
            });
        }

        fn notifications_check(&mut self) {
            self.checks += 1;
            self.gate.check(self.permission, |reply| reply(Permission::Denied));
        }

        fn set_title(&mut self, title: &str) -> &mut Self {
            self.surfaces.title = title.to_string();
            self
        }

        fn write_seconds(&mut self, text: &str) {
            self.surfaces.seconds = text.to_string();
        }

        fn write_minutes(&mut self, text: &str) {
            self.surfaces.minutes = text.to_string();
        }

        fn set_form_submit_event(&mut self, handler: SubmitHandler) -> &mut Self {
            self.submit = Some(handler);
            self
        }

        fn focus_number_input(&self) {
            self.focused.set(self.focused.get() + 1);
        }

        fn get_minutes_to_wind_up_to(&self) -> String {
            self.surfaces.input.clone()
        }

        fn set_number_input(&mut self, value: &str) -> &mut Self {
            self.surfaces.input = value.to_string();
            self
        }
    }

    fn shared(view: RecordingView) -> Rc<RefCell<ViewModel<RecordingView>>> {
        Rc::new(RefCell::new(ViewModel::new(view)))
    }

    /// Simulate the user pressing submit with `input` in the field.
    fn submit(vm: &Rc<RefCell<ViewModel<RecordingView>>>, input: &str) {
        let mut handler = {
            let mut vm = vm.borrow_mut();
            vm.view_mut().surfaces.input = input.to_string();
            vm.view_mut().submit.take().expect("form submit enabled")
        };
        handler();
        vm.borrow_mut().view_mut().submit = Some(handler);
    }

    #[test]
    fn construction_checks_notifications_once() {
        let vm = ViewModel::new(RecordingView::new("5"));
        assert_eq!(vm.view().checks, 1);
        assert_eq!(vm.view().focused.get(), 1);
        assert!(vm.view().gate.is_enabled());
        assert!(!vm.is_driving());
    }

    #[test]
    fn wind_up_refreshes_every_surface() {
        let mut vm = ViewModel::new(RecordingView::new("  7 minutes"));
        vm.wind_up();

        let s = &vm.view().surfaces;
        assert_eq!(s.input, "7");
        assert_eq!(s.minutes, "7");
        assert_eq!(s.seconds, "00");
        assert_eq!(s.title, "7:00 - Kitchen Timer");
        assert_eq!(*vm.view().loads.borrow(), 1);
        assert!(vm.timer().stopped());
    }

    #[test]
    fn wind_up_normalizes_invalid_input_to_zero() {
        let mut vm = ViewModel::new(RecordingView::new("-4"));
        vm.wind_up();
        assert_eq!(vm.view().surfaces.input, "0");
        assert_eq!(vm.view().surfaces.title, "0:00 - Kitchen Timer");
        assert_eq!(vm.timer().total_seconds(), 0);
    }

    #[test]
    fn tick_formats_minutes_and_padded_seconds() {
        let mut vm = ViewModel::new(RecordingView::new("10"));
        vm.wind_up();
        for _ in 0..51 {
            vm.tick();
        }
        let s = &vm.view().surfaces;
        assert_eq!(s.minutes, "9");
        assert_eq!(s.seconds, "09");
        assert_eq!(s.title, "9:09 - Kitchen Timer");
    }

    #[test]
    fn alert_fires_on_the_tick_after_reaching_zero() {
        let mut vm = ViewModel::new(RecordingView::new("1"));
        vm.wind_up();
        assert_eq!(vm.timer().minutes_remaining(), 1);
        assert_eq!(vm.timer().seconds_remaining(), 0);

        for _ in 0..60 {
            assert!(!vm.tick());
        }
        assert_eq!(vm.timer().total_seconds(), 0);
        assert!(vm.view().notifications.borrow().is_empty());
        assert_eq!(*vm.view().plays.borrow(), 0);

        assert!(vm.tick());
        assert_eq!(
            *vm.view().notifications.borrow(),
            vec![("Kitchen Timer".to_string(), "Time is up".to_string())]
        );
        assert_eq!(*vm.view().plays.borrow(), 1);

        vm.tick();
        assert_eq!(vm.view().notifications.borrow().len(), 1);
        assert_eq!(*vm.view().plays.borrow(), 1);
        assert_eq!(vm.view().surfaces.title, "0:00 - Kitchen Timer");
    }

    #[test]
    fn missing_capabilities_degrade_silently() {
        let mut vm = ViewModel::new(RecordingView::silent("0"));
        vm.wind_up();
        assert!(vm.tick());
        assert!(!vm.view().can_play_sound());
        assert_eq!(*vm.view().loads.borrow(), 0);
        assert_eq!(*vm.view().plays.borrow(), 0);
        assert!(vm.view().notifications.borrow().is_empty());
    }

    #[test]
    fn driver_counts_down_and_stops_itself() {
        let mut pool = LocalPool::new();
        let driver = ManualDriver::new(&pool);
        let vm = shared(RecordingView::new("1"));
        enable_form_submit(&vm, driver.clone());

        submit(&vm, "1");
        assert!(vm.borrow().is_driving());

        driver.advance(&mut pool, 60);
        assert!(vm.borrow().timer().ticking());
        assert!(vm.borrow().view().notifications.borrow().is_empty());

        driver.advance(&mut pool, 1);
        assert!(vm.borrow().timer().stopped());
        assert!(!vm.borrow().is_driving());
        assert_eq!(vm.borrow().view().notifications.borrow().len(), 1);
        assert_eq!(*vm.borrow().view().plays.borrow(), 1);

        driver.advance(&mut pool, 5);
        assert_eq!(vm.borrow().view().notifications.borrow().len(), 1);
        assert_eq!(driver.live_streams(), 0);
    }

    #[test]
    fn new_wind_up_supersedes_running_driver() {
        let mut pool = LocalPool::new();
        let driver = ManualDriver::new(&pool);
        let vm = shared(RecordingView::new("2"));
        enable_form_submit(&vm, driver.clone());

        submit(&vm, "2");
        driver.advance(&mut pool, 10);
        assert_eq!(vm.borrow().timer().total_seconds(), 110);

        submit(&vm, "2");
        assert_eq!(vm.borrow().timer().total_seconds(), 120);
        driver.advance(&mut pool, 1);
        assert_eq!(vm.borrow().timer().total_seconds(), 119);
        driver.advance(&mut pool, 9);
        assert_eq!(vm.borrow().timer().total_seconds(), 110);
        assert_eq!(driver.live_streams(), 1);
    }

    #[test]
    fn rewinding_after_time_up_alerts_again() {
        let mut pool = LocalPool::new();
        let driver = ManualDriver::new(&pool);
        let vm = shared(RecordingView::new("0"));
        enable_form_submit(&vm, driver.clone());

        submit(&vm, "0");
        driver.advance(&mut pool, 1);
        assert_eq!(vm.borrow().view().notifications.borrow().len(), 1);

        submit(&vm, "1");
        driver.advance(&mut pool, 61);
        assert_eq!(vm.borrow().view().notifications.borrow().len(), 2);
        assert_eq!(*vm.borrow().view().loads.borrow(), 2);
    }

    #[test]
    fn dropped_view_model_ends_its_driver() {
        let mut pool = LocalPool::new();
        let driver = ManualDriver::new(&pool);
        let vm = shared(RecordingView::new("1"));
        start_ticking(&vm, &driver);
        drop(vm);
        driver.advance(&mut pool, 2);
        assert_eq!(driver.live_streams(), 0);
    }
}
