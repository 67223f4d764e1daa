use std::time::{Duration, Instant};

/// Interval used when autoplay is switched on without a value.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(5000);

/// Timed auto-advance that pauses while the pointer is over the slider.
#[derive(Debug)]
pub struct AutoPlay {
    interval: Duration,
    next_at: Option<Instant>,
}

impl AutoPlay {
    pub fn start(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            next_at: Some(now + interval),
        }
    }

    /// Feed the hover state. Entering pauses; leaving starts a fresh interval.
    pub fn set_hovered(&mut self, hovered: bool, now: Instant) {
        match (hovered, self.next_at) {
            (true, Some(_)) => {
                self.next_at = None;
                tracing::trace!("autoplay paused");
            }
            (false, None) => {
                self.next_at = Some(now + self.interval);
                tracing::trace!("autoplay resumed");
            }
            _ => {}
        }
    }

    /// Returns true when a slide advance is due, and schedules the next one.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.next_at {
            Some(at) if now >= at => {
                self.next_at = Some(now + self.interval);
                true
            }
            _ => false,
        }
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.next_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEC: Duration = Duration::from_secs(1);

    #[test]
    fn fires_every_interval() {
        let t0 = Instant::now();
        let mut a = AutoPlay::start(5 * SEC, t0);
        assert!(!a.poll(t0 + 4 * SEC));
        assert!(a.poll(t0 + 5 * SEC));
        assert!(!a.poll(t0 + 6 * SEC));
        assert!(a.poll(t0 + 10 * SEC));
    }

    #[test]
    fn hover_pauses_and_leave_restarts_interval() {
        let t0 = Instant::now();
        let mut a = AutoPlay::start(5 * SEC, t0);
        a.set_hovered(true, t0 + 4 * SEC);
        assert_eq!(a.deadline(), None);
        assert!(!a.poll(t0 + 30 * SEC));

        a.set_hovered(false, t0 + 30 * SEC);
        assert!(!a.poll(t0 + 34 * SEC));
        assert!(a.poll(t0 + 35 * SEC));
    }

    #[test]
    fn repeated_hover_reports_do_not_reset_timer() {
        let t0 = Instant::now();
        let mut a = AutoPlay::start(5 * SEC, t0);
        a.set_hovered(false, t0 + 3 * SEC);
        assert_eq!(a.deadline(), Some(t0 + 5 * SEC));
    }
}
