//! Loading placeholder to content transition.
//!
//! A [`RevealScheduler`] flips the page from its loading placeholder to the
//! real content once, a fixed delay after mount. Unmounting first cancels the
//! timer, and the callback itself re-checks the phase, so nothing is written
//! after teardown even if a timer implementation fires late.

use std::cell::Cell;
use std::rc::Rc;

use crate::utils::Timer;

/// Lifecycle of one page mount.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealPhase {
    /// Not mounted yet.
    #[default]
    Idle,
    /// Placeholder showing, timer pending.
    Loading,
    /// Content showing. Terminal.
    Revealed,
    /// Torn down before the delay elapsed. Terminal.
    Cancelled,
}

/// One-shot delayed reveal.
pub struct RevealScheduler<T: Timer> {
    timer: T,
    delay_ms: u32,
    handle: Option<T::Handle>,
    phase: Rc<Cell<RevealPhase>>,
}

impl<T: Timer> RevealScheduler<T> {
    pub fn new(timer: T, delay_ms: u32) -> Self {
        Self {
            timer,
            delay_ms,
            handle: None,
            phase: Rc::new(Cell::new(RevealPhase::Idle)),
        }
    }

    pub fn phase(&self) -> RevealPhase {
        self.phase.get()
    }

    /// True until the content has been revealed.
    pub fn is_loading(&self) -> bool {
        matches!(self.phase(), RevealPhase::Idle | RevealPhase::Loading)
    }

    /// Start the delay. `on_reveal` runs exactly once, after `delay_ms`,
    /// unless [`Self::unmount`] is called first.
    ///
    /// Mounting twice is ignored.
    pub fn mount(&mut self, on_reveal: impl FnOnce() + 'static) {
        if self.phase() != RevealPhase::Idle {
            return;
        }
        self.phase.set(RevealPhase::Loading);

        let phase = Rc::clone(&self.phase);
        let handle = self.timer.schedule(
            self.delay_ms,
            Box::new(move || {
                if phase.get() == RevealPhase::Loading {
                    phase.set(RevealPhase::Revealed);
                    on_reveal();
                }
            }),
        );
        self.handle = Some(handle);
    }

    /// Tear down. A pending reveal is cancelled and will never run.
    pub fn unmount(&mut self) {
        if self.phase() == RevealPhase::Loading {
            self.phase.set(RevealPhase::Cancelled);
        }
        if let Some(handle) = self.handle.take() {
            self.timer.cancel(handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::utils::timer::mock::ManualTimer;

    const DELAY: u32 = 1500;

    fn counter() -> (Rc<Cell<u32>>, impl FnOnce() + 'static) {
        let count = Rc::new(Cell::new(0));
        let c = count.clone();
        (count, move || c.set(c.get() + 1))
    }

    #[test]
    fn test_loading_until_delay() {
        let timer = ManualTimer::new();
        let mut reveal = RevealScheduler::new(timer.clone(), DELAY);
        let (count, on_reveal) = counter();

        assert!(reveal.is_loading());
        reveal.mount(on_reveal);
        assert_eq!(reveal.phase(), RevealPhase::Loading);

        timer.advance(1499);
        assert!(reveal.is_loading());
        assert_eq!(count.get(), 0);

        timer.advance(1);
        assert_eq!(reveal.phase(), RevealPhase::Revealed);
        assert!(!reveal.is_loading());
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_reveals_exactly_once() {
        let timer = ManualTimer::new();
        let mut reveal = RevealScheduler::new(timer.clone(), DELAY);
        let (count, on_reveal) = counter();
        reveal.mount(on_reveal);

        // Second mount must not schedule another reveal
        let (second, on_second) = counter();
        reveal.mount(on_second);
        assert_eq!(timer.pending(), 1);

        timer.advance(10_000);
        assert_eq!(count.get(), 1);
        assert_eq!(second.get(), 0);
        assert!(!reveal.is_loading());
    }

    #[test]
    fn test_unmount_before_delay_cancels() {
        let timer = ManualTimer::new();
        let mut reveal = RevealScheduler::new(timer.clone(), DELAY);
        let (count, on_reveal) = counter();
        reveal.mount(on_reveal);

        timer.advance(700);
        reveal.unmount();
        assert_eq!(reveal.phase(), RevealPhase::Cancelled);
        assert_eq!(timer.pending(), 0);

        timer.advance(5000);
        assert_eq!(count.get(), 0);
        assert_eq!(reveal.phase(), RevealPhase::Cancelled);
    }

    #[test]
    fn test_unmount_after_reveal_keeps_revealed() {
        let timer = ManualTimer::new();
        let mut reveal = RevealScheduler::new(timer.clone(), DELAY);
        let (count, on_reveal) = counter();
        reveal.mount(on_reveal);
        timer.advance(1500);
        reveal.unmount();
        assert_eq!(reveal.phase(), RevealPhase::Revealed);
        assert_eq!(count.get(), 1);
    }

    /// A timer that ignores cancellation, to check the phase guard alone.
    struct LeakyTimer(ManualTimer);

    impl Timer for LeakyTimer {
        type Handle = u64;

        fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> u64 {
            self.0.schedule(delay_ms, callback)
        }

        fn cancel(&self, _handle: u64) {}
    }

    #[test]
    fn test_late_fire_after_unmount_is_ignored() {
        let clock = ManualTimer::new();
        let mut reveal = RevealScheduler::new(LeakyTimer(clock.clone()), DELAY);
        let (count, on_reveal) = counter();
        reveal.mount(on_reveal);
        reveal.unmount();

        clock.advance(DELAY.into());
        assert_eq!(count.get(), 0);
        assert_eq!(reveal.phase(), RevealPhase::Cancelled);
    }
}
