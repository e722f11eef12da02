//! Time sources for the overlay's frame clock.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

/// A monotonic source of seconds.
pub trait Clock {
    /// Seconds since an arbitrary, fixed origin.
    fn now(&self) -> f64;
}

/// Wall-clock time measured from the moment the clock was created.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

/// A clock that only moves when told to.
///
/// Clones share the same time, so a test can keep one handle and give the
/// other to the injector.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    seconds: Rc<Cell<f64>>,
}

impl ManualClock {
    #[must_use]
    pub fn new(start: f64) -> Self {
        Self {
            seconds: Rc::new(Cell::new(start)),
        }
    }

    /// Moves the clock forward by `seconds`.
    pub fn advance(&self, seconds: f64) {
        self.seconds.set(self.seconds.get() + seconds);
    }

    /// Jumps to an absolute time.
    pub fn set(&self, seconds: f64) {
        self.seconds.set(seconds);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> f64 {
        self.seconds.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_shared() {
        let clock = ManualClock::new(1.0);
        let handle = clock.clone();
        handle.advance(0.5);
        assert!((clock.now() - 1.5).abs() < f64::EPSILON);
        handle.set(10.0);
        assert!((clock.now() - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_system_clock_monotonic() {
        let clock = SystemClock::new();
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }
}
