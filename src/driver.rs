//! The repeating one-second driver.
//!
//! A driver is a spawned task consuming a stream of ticks. It is wrapped in
//! [`futures::future::Abortable`] so the returned [`DriverHandle`] acts as a
//! cancellation token; dropping the handle cancels the task too.

use futures::future::{abortable, AbortHandle, LocalBoxFuture};
use futures::stream::LocalBoxStream;
use futures::{FutureExt, StreamExt};
use gloo_timers::future::IntervalStream;
use log::debug;
use std::cell::Cell;
use std::ops::ControlFlow;
use std::rc::Rc;

/// Source of ticks plus a way to run the task that consumes them.
pub trait Driver {
    /// A fresh stream yielding once per period.
    fn ticks(&self) -> LocalBoxStream<'static, ()>;

    fn spawn(&self, task: LocalBoxFuture<'static, ()>);
}

/// Browser driver backed by `setInterval`.
#[derive(Debug, Clone, Copy)]
pub struct IntervalDriver {
    period_ms: u32,
}

impl IntervalDriver {
    pub fn new(period_ms: u32) -> Self {
        Self { period_ms }
    }
}

impl Driver for IntervalDriver {
    fn ticks(&self) -> LocalBoxStream<'static, ()> {
        IntervalStream::new(self.period_ms).boxed_local()
    }

    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        wasm_bindgen_futures::spawn_local(task);
    }
}

/// Cancellation token for a running driver.
#[derive(Debug)]
pub struct DriverHandle {
    abort: AbortHandle,
    active: Rc<Cell<bool>>,
}

impl DriverHandle {
    pub fn cancel(&self) {
        if self.active.replace(false) {
            debug!("driver cancelled");
        }
        self.abort.abort();
    }

    /// False once the driver was cancelled or ended on its own.
    pub fn is_active(&self) -> bool {
        self.active.get()
    }
}

impl Drop for DriverHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Spawn a task calling `on_tick` for every tick until it breaks, the tick
/// stream ends, or the returned handle cancels it.
pub fn drive<D, F>(driver: &D, mut on_tick: F) -> DriverHandle
where
    D: Driver + ?Sized,
    F: FnMut() -> ControlFlow<()> + 'static,
{
    let active = Rc::new(Cell::new(true));
    let mut ticks = driver.ticks();
    let finished = active.clone();
    let (task, abort) = abortable(async move {
        while ticks.next().await.is_some() {
            if on_tick().is_break() {
                break;
            }
        }
        finished.set(false);
        debug!("driver finished");
    });
    driver.spawn(
        async move {
            // Aborted is the normal way a superseded driver ends.
            let _ = task.await;
        }
        .boxed_local(),
    );
    DriverHandle { abort, active }
}
