//! Leading-edge throttle with a remembered trailing event

use std::time::{Duration, Instant};

/// Default minimum spacing between two scroll evaluations
pub const DEFAULT_SCROLL_THROTTLE: Duration = Duration::from_millis(100);

/// Rate limiter for high-frequency UI events
///
/// The first event fires immediately. Events arriving within `interval` of
/// the last fired one are dropped but leave a pending mark, so a later
/// [`Throttle::take_pending`] can still evaluate the final position.
/// A zero interval lets every event through.
#[derive(Debug, Clone)]
pub struct Throttle {
    interval: Duration,
    last_fired: Option<Instant>,
    pending: bool,
}

impl Throttle {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_fired: None,
            pending: false,
        }
    }

    /// A throttle that never drops events
    pub fn passthrough() -> Self {
        Self::new(Duration::ZERO)
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    fn ready(&self, now: Instant) -> bool {
        match self.last_fired {
            None => true,
            Some(last) => now.saturating_duration_since(last) >= self.interval,
        }
    }

    /// Record an event at `now`; returns whether it should be handled
    pub fn hit(&mut self, now: Instant) -> bool {
        if self.ready(now) {
            self.last_fired = Some(now);
            self.pending = false;
            true
        } else {
            self.pending = true;
            false
        }
    }

    /// Fire the dropped trailing event once the interval has elapsed
    pub fn take_pending(&mut self, now: Instant) -> bool {
        if self.pending && self.ready(now) {
            self.last_fired = Some(now);
            self.pending = false;
            true
        } else {
            false
        }
    }

    /// When the pending event becomes eligible, if there is one
    pub fn pending_deadline(&self) -> Option<Instant> {
        if !self.pending {
            return None;
        }
        self.last_fired.map(|last| last + self.interval)
    }
}

impl Default for Throttle {
    fn default() -> Self {
        Self::new(DEFAULT_SCROLL_THROTTLE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_events_inside_interval() {
        let start = Instant::now();
        let mut throttle = Throttle::new(Duration::from_millis(100));

        assert!(throttle.hit(start));
        assert!(!throttle.hit(start + Duration::from_millis(10)));
        assert!(!throttle.hit(start + Duration::from_millis(99)));
        assert!(throttle.is_pending());
        assert!(throttle.hit(start + Duration::from_millis(100)));
        assert!(!throttle.is_pending());
    }

    #[test]
    fn trailing_event_fires_after_interval() {
        let start = Instant::now();
        let mut throttle = Throttle::new(Duration::from_millis(100));

        throttle.hit(start);
        throttle.hit(start + Duration::from_millis(40));
        assert_eq!(
            throttle.pending_deadline(),
            Some(start + Duration::from_millis(100))
        );

        assert!(!throttle.take_pending(start + Duration::from_millis(60)));
        assert!(throttle.take_pending(start + Duration::from_millis(150)));
        assert!(!throttle.take_pending(start + Duration::from_millis(400)));
    }

    #[test]
    fn passthrough_fires_every_event() {
        let now = Instant::now();
        let mut throttle = Throttle::passthrough();
        assert!((0..5).all(|_| throttle.hit(now)));
        assert!(!throttle.is_pending());
    }
}
