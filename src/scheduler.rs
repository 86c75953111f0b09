// File: src/scheduler.rs
//! Timing and viewport capabilities the session is driven by. Both are
//! injected so tests can step time and fire viewport signals by hand.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Holds at most one pending re-render.
pub trait Scheduler {
    /// Replaces any pending render with one for `text`, due after `delay`.
    fn schedule(&mut self, delay: Duration, text: String);
    fn cancel_pending(&mut self);
    /// Takes the pending text once its deadline has passed.
    fn take_due(&mut self) -> Option<String>;
    fn has_pending(&self) -> bool;
}

/// Monotonic time since some fixed origin.
pub trait Clock {
    fn now(&self) -> Duration;
}

#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self { origin: Instant::now() }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Hand-stepped clock. Clones share the same time.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

/// Single-slot debounce timer over any clock.
#[derive(Debug)]
pub struct TimerScheduler<C: Clock> {
    clock: C,
    pending: Option<(Duration, String)>,
}

pub type ClockScheduler = TimerScheduler<SystemClock>;
pub type ManualScheduler = TimerScheduler<ManualClock>;

impl<C: Clock> TimerScheduler<C> {
    pub fn with_clock(clock: C) -> Self {
        Self { clock, pending: None }
    }
}

impl ClockScheduler {
    pub fn new() -> Self {
        Self::with_clock(SystemClock::new())
    }
}

impl Default for ClockScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Scheduler for TimerScheduler<C> {
    fn schedule(&mut self, delay: Duration, text: String) {
        self.pending = Some((self.clock.now() + delay, text));
    }

    fn cancel_pending(&mut self) {
        self.pending = None;
    }

    fn take_due(&mut self) -> Option<String> {
        let now = self.clock.now();
        if matches!(&self.pending, Some((due, _)) if *due <= now) {
            self.pending.take().map(|(_, text)| text)
        } else {
            None
        }
    }

    fn has_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// Reports when the end of the loaded list nears the viewport. The session
/// hands it an epoch on every (re)start; near-edge signals carry it back.
pub trait VisibilityObserver {
    fn observe(&mut self, epoch: u64);
    fn stop(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObserverEvent {
    Observe(u64),
    Stop,
}

/// Records every call. Clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    events: Rc<RefCell<Vec<ObserverEvent>>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes everything recorded so far.
    pub fn drain(&self) -> Vec<ObserverEvent> {
        self.events.borrow_mut().drain(..).collect()
    }
}

impl VisibilityObserver for RecordingObserver {
    fn observe(&mut self, epoch: u64) {
        self.events.borrow_mut().push(ObserverEvent::Observe(epoch));
    }

    fn stop(&mut self) {
        self.events.borrow_mut().push(ObserverEvent::Stop);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEBOUNCE: Duration = Duration::from_millis(60);

    #[test]
    fn nothing_fires_before_the_deadline() {
        let clock = ManualClock::new();
        let mut scheduler = ManualScheduler::with_clock(clock.clone());
        scheduler.schedule(DEBOUNCE, "a".to_string());
        clock.advance(Duration::from_millis(59));
        assert_eq!(scheduler.take_due(), None);
        clock.advance(Duration::from_millis(1));
        assert_eq!(scheduler.take_due().as_deref(), Some("a"));
        assert!(!scheduler.has_pending());
    }

    #[test]
    fn rescheduling_replaces_and_restarts() {
        let clock = ManualClock::new();
        let mut scheduler = ManualScheduler::with_clock(clock.clone());
        scheduler.schedule(DEBOUNCE, "h".to_string());
        clock.advance(Duration::from_millis(40));
        scheduler.cancel_pending();
        scheduler.schedule(DEBOUNCE, "hi".to_string());
        clock.advance(Duration::from_millis(40));
        assert_eq!(scheduler.take_due(), None);
        clock.advance(Duration::from_millis(20));
        assert_eq!(scheduler.take_due().as_deref(), Some("hi"));
        assert_eq!(scheduler.take_due(), None);
    }

    #[test]
    fn recording_observer_shares_its_log() {
        let observer = RecordingObserver::new();
        let mut handle = observer.clone();
        handle.observe(3);
        handle.stop();
        assert_eq!(observer.drain(), vec![ObserverEvent::Observe(3), ObserverEvent::Stop]);
        assert!(observer.drain().is_empty());
    }
}
