//! One-shot timer abstraction.
//!
//! [`BrowserTimer`] backs the page with `setTimeout` through `gloo-timers`.
//! With the `mock` feature (or under `cfg(test)`), [`mock::ManualTimer`]
//! provides a virtual clock that only moves when told to.

use gloo_timers::callback::Timeout;

/// Schedules a callback once after a delay.
pub trait Timer {
    /// Token returned by [`Timer::schedule`], consumed by [`Timer::cancel`].
    type Handle;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Handle;

    /// Cancel a pending callback. Cancelling one that already fired is a no-op.
    fn cancel(&self, handle: Self::Handle);
}

/// `setTimeout`-backed timer.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTimer;

impl Timer for BrowserTimer {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, callback)
    }

    fn cancel(&self, handle: Timeout) {
        // Dropping the returned closure releases it after clearTimeout.
        let _ = handle.cancel();
    }
}

#[cfg(any(test, feature = "mock"))]
pub mod mock {
    //! Deterministic timer for tests.

    use std::cell::RefCell;
    use std::rc::Rc;

    use super::Timer;

    struct Pending {
        id: u64,
        due_ms: u64,
        callback: Box<dyn FnOnce()>,
    }

    #[derive(Default)]
    struct Clock {
        now_ms: u64,
        next_id: u64,
        pending: Vec<Pending>,
    }

    /// Virtual clock. Clones share the same clock.
    #[derive(Clone, Default)]
    pub struct ManualTimer {
        clock: Rc<RefCell<Clock>>,
    }

    impl ManualTimer {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn now_ms(&self) -> u64 {
            self.clock.borrow().now_ms
        }

        /// Number of callbacks still waiting to fire.
        pub fn pending(&self) -> usize {
            self.clock.borrow().pending.len()
        }

        /// Move the clock forward, firing due callbacks in deadline order.
        pub fn advance(&self, ms: u64) {
            let target = self.clock.borrow().now_ms + ms;

            loop {
                let next = {
                    let mut clock = self.clock.borrow_mut();
                    let due = clock
                        .pending
                        .iter()
                        .enumerate()
                        .filter(|(_, p)| p.due_ms <= target)
                        .min_by_key(|(_, p)| (p.due_ms, p.id))
                        .map(|(i, _)| i);
                    due.map(|i| {
                        let pending = clock.pending.remove(i);
                        clock.now_ms = pending.due_ms;
                        pending.callback
                    })
                };

                // Borrow released: callbacks may schedule or cancel.
                match next {
                    Some(callback) => callback(),
                    None => break,
                }
            }

            self.clock.borrow_mut().now_ms = target;
        }
    }

    impl Timer for ManualTimer {
        type Handle = u64;

        fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> u64 {
            let mut clock = self.clock.borrow_mut();
            let id = clock.next_id;
            clock.next_id += 1;
            let due_ms = clock.now_ms + u64::from(delay_ms);
            clock.pending.push(Pending {
                id,
                due_ms,
                callback,
            });
            id
        }

        fn cancel(&self, handle: u64) {
            self.clock.borrow_mut().pending.retain(|p| p.id != handle);
        }
    }

    #[cfg(test)]
    mod tests {
        use std::cell::Cell;

        use super::*;

        #[test]
        fn test_fires_at_deadline() {
            let timer = ManualTimer::new();
            let fired = Rc::new(Cell::new(false));
            let flag = fired.clone();
            timer.schedule(100, Box::new(move || flag.set(true)));

            timer.advance(99);
            assert!(!fired.get());
            timer.advance(1);
            assert!(fired.get());
            assert_eq!(timer.pending(), 0);
            assert_eq!(timer.now_ms(), 100);
        }

        #[test]
        fn test_cancel() {
            let timer = ManualTimer::new();
            let fired = Rc::new(Cell::new(false));
            let flag = fired.clone();
            let handle = timer.schedule(10, Box::new(move || flag.set(true)));
            timer.cancel(handle);
            timer.advance(1000);
            assert!(!fired.get());
        }

        #[test]
        fn test_fires_in_deadline_order() {
            let timer = ManualTimer::new();
            let order = Rc::new(RefCell::new(Vec::new()));
            for (delay, label) in [(30, "c"), (10, "a"), (20, "b")] {
                let order = order.clone();
                timer.schedule(delay, Box::new(move || order.borrow_mut().push(label)));
            }
            timer.advance(30);
            assert_eq!(*order.borrow(), vec!["a", "b", "c"]);
        }
    }
}
