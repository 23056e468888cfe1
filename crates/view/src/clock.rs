use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

/// The time source animations are measured against, in seconds.
pub trait Clock {
    fn now(&self) -> f64;
}

/// Wall-clock time elapsed since the clock was created.
#[derive(Copy, Clone, Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        SystemClock {
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
/// Useful for tests and for rendering animations offline at a fixed frame rate.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now: Cell<f64>,
}

impl ManualClock {
    pub fn new(now: f64) -> Self {
        ManualClock {
            now: Cell::new(now),
        }
    }

    pub fn set(&self, now: f64) {
        self.now.set(now);
    }

    pub fn advance(&self, delta: f64) {
        self.now.set(self.now.get() + delta);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> f64 {
        self.now.get()
    }
}

impl<'l, C: Clock + ?Sized> Clock for &'l C {
    fn now(&self) -> f64 {
        (**self).now()
    }
}

impl<C: Clock + ?Sized> Clock for Rc<C> {
    fn now(&self) -> f64 {
        (**self).now()
    }
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn now(&self) -> f64 {
        (**self).now()
    }
}

#[test]
fn manual_clock() {
    let clock = ManualClock::new(1.0);
    assert_eq!(clock.now(), 1.0);
    clock.advance(0.5);
    assert_eq!(clock.now(), 1.5);
    clock.set(0.25);
    assert_eq!(clock.now(), 0.25);

    let shared = Rc::new(clock);
    let handle = shared.clone();
    handle.advance(0.25);
    assert_eq!(shared.now(), 0.5);
}

#[test]
fn system_clock_is_monotonic() {
    let clock = SystemClock::new();
    let a = clock.now();
    let b = clock.now();
    assert!(a >= 0.0);
    assert!(b >= a);
}
