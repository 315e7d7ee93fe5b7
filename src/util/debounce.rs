//! Trailing-edge debounce.
//!
//! Every call drops the pending timer handle, which cancels it, and arms a new
//! one. Only the last call inside a quiet window reaches the callback, with
//! that call's arguments. Dropping the [`Debouncer`] cancels whatever is still
//! pending.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

use std::cell::RefCell;
use std::rc::Rc;

/// Timer source for [`Debouncer`].
///
/// Dropping the returned handle must cancel the task if it has not run yet.
pub trait Scheduler {
    type Handle;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Browser `setTimeout` via `gloo-timers`.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

#[cfg(feature = "hydrate")]
impl Scheduler for BrowserScheduler {
    type Handle = gloo_timers::callback::Timeout;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle {
        gloo_timers::callback::Timeout::new(delay_ms, task)
    }
}

pub struct Debouncer<A, S: Scheduler> {
    callback: Rc<dyn Fn(A)>,
    wait_ms: u32,
    scheduler: S,
    // Left in place after firing; the stale handle is dropped by the next call.
    pending: RefCell<Option<S::Handle>>,
}

impl<A: 'static, S: Scheduler> Debouncer<A, S> {
    pub fn new(scheduler: S, callback: impl Fn(A) + 'static, wait_ms: u32) -> Self {
        Self {
            callback: Rc::new(callback),
            wait_ms,
            scheduler,
            pending: RefCell::new(None),
        }
    }

    pub fn wait_ms(&self) -> u32 {
        self.wait_ms
    }

    /// Supersede any pending call with one carrying `args`.
    pub fn call(&self, args: A) {
        self.pending.borrow_mut().take();
        let callback = Rc::clone(&self.callback);
        let handle = self.scheduler.schedule(self.wait_ms, Box::new(move || callback(args)));
        *self.pending.borrow_mut() = Some(handle);
    }
}

/// Wrap `callback` so it runs `wait_ms` after the last of a burst of calls.
#[cfg(feature = "hydrate")]
pub fn debounce<A: 'static>(callback: impl Fn(A) + 'static, wait_ms: u32) -> impl Fn(A) {
    debounce_with(BrowserScheduler, callback, wait_ms)
}

/// [`debounce`] with an explicit timer source.
pub fn debounce_with<A: 'static, S: Scheduler>(
    scheduler: S,
    callback: impl Fn(A) + 'static,
    wait_ms: u32,
) -> impl Fn(A) {
    let debouncer = Debouncer::new(scheduler, callback, wait_ms);
    move |args| debouncer.call(args)
}
