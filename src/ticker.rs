//! Fixed-period tick source with a single rebindable callback.
//!
//! The timer keeps running across rebinds; whatever callback sits in the slot
//! when a tick comes due is the one that runs.

use log::debug;
use std::time::{Duration, Instant};

type TickFn<T> = Box<dyn FnMut(&mut T)>;

pub struct Ticker<T> {
    period: Duration,
    next_due: Instant,
    callback: Option<TickFn<T>>,
}

impl<T> Ticker<T> {
    pub fn new(period: Duration) -> Self {
        Self::starting_at(period, Instant::now())
    }

    fn starting_at(period: Duration, now: Instant) -> Self {
        Ticker {
            period,
            next_due: now + period,
            callback: None,
        }
    }

    /// Replaces the callback run on each tick.
    pub fn bind(&mut self, callback: impl FnMut(&mut T) + 'static) {
        self.callback = Some(Box::new(callback));
    }

    pub fn is_running(&self) -> bool {
        self.callback.is_some()
    }

    /// How long until the next tick is due, zero if it already is.
    pub fn time_until_due(&self) -> Duration {
        self.next_due.saturating_duration_since(Instant::now())
    }

    pub fn fire_if_due(&mut self, target: &mut T) -> bool {
        self.fire_if_due_at(Instant::now(), target)
    }

    /// Runs the bound callback if `now` has reached the due time. A late tick
    /// pushes the next one a full period past `now` rather than bursting.
    pub fn fire_if_due_at(&mut self, now: Instant, target: &mut T) -> bool {
        if now < self.next_due {
            return false;
        }
        self.next_due = now + self.period;

        match self.callback.as_mut() {
            Some(callback) => {
                callback(target);
                true
            }
            None => false,
        }
    }

    pub fn stop(&mut self) {
        if self.callback.take().is_some() {
            debug!("Ticker stopped");
        }
    }
}
