use std::time::{Duration, Instant};

/// Collapses a burst of triggers into one firing `wait` after the last one.
#[derive(Debug)]
pub struct Debouncer {
    wait: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            deadline: None,
        }
    }

    pub fn trigger(&mut self, now: Instant) {
        self.deadline = Some(now + self.wait);
    }

    /// True exactly once per settled burst.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(at) if now >= at => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn fires_once_after_burst() {
        let t0 = Instant::now();
        let mut d = Debouncer::new(ms(250));
        d.trigger(t0);
        d.trigger(t0 + ms(100));
        d.trigger(t0 + ms(200));
        assert!(!d.poll(t0 + ms(300)));
        assert!(d.poll(t0 + ms(450)));
        assert!(!d.poll(t0 + ms(900)));
    }

    #[test]
    fn idle_never_fires() {
        let mut d = Debouncer::new(ms(250));
        assert!(!d.poll(Instant::now()));
        assert!(d.deadline().is_none());
    }
}
