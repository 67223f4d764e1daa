pub mod particles;
pub mod pointer;
pub mod trail;

use std::time::{Duration, Instant};

/// Fixed simulation step. Particle velocities and trail decay are expressed
/// per step, so motion speed does not depend on the display refresh rate.
pub const STEP: Duration = Duration::from_nanos(16_666_667);

/// Cap on steps replayed after a stall (window hidden, debugger pause).
pub const MAX_STEPS_PER_FRAME: u32 = 4;

/// Something advanced once per simulation step.
pub trait FrameEffect {
    fn step(&mut self);
}

/// Cancellable handle for a per-frame animation task.
#[derive(Debug)]
pub struct FrameLoop {
    name: &'static str,
    running: bool,
    last_frame: Option<Instant>,
    pending: Duration,
}

impl FrameLoop {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            running: true,
            last_frame: None,
            pending: Duration::ZERO,
        }
    }

    pub fn stopped(name: &'static str) -> Self {
        Self {
            running: false,
            ..Self::new(name)
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn stop(&mut self) {
        if self.running {
            tracing::debug!(name = self.name, "frame loop stopped");
        }
        self.running = false;
        self.last_frame = None;
        self.pending = Duration::ZERO;
    }

    pub fn resume(&mut self) {
        if !self.running {
            tracing::debug!(name = self.name, "frame loop resumed");
        }
        self.running = true;
    }

    /// Number of whole steps due at `now`. The first frame after start or
    /// resume only records the timestamp.
    pub fn steps(&mut self, now: Instant) -> u32 {
        if !self.running {
            return 0;
        }
        let Some(last) = self.last_frame.replace(now) else {
            return 0;
        };
        self.pending += now.saturating_duration_since(last);
        let due = (self.pending.as_nanos() / STEP.as_nanos()) as u32;
        if due > MAX_STEPS_PER_FRAME {
            self.pending = Duration::ZERO;
            return MAX_STEPS_PER_FRAME;
        }
        self.pending -= STEP * due;
        due
    }

    /// Advance `effect` by however many steps are due. Returns the count.
    pub fn drive<E: FrameEffect>(&mut self, effect: &mut E, now: Instant) -> u32 {
        let steps = self.steps(now);
        for _ in 0..steps {
            effect.step();
        }
        steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Counter(u32);

    impl FrameEffect for Counter {
        fn step(&mut self) {
            self.0 += 1;
        }
    }

    #[test]
    fn first_frame_only_primes() {
        let mut l = FrameLoop::new("test");
        assert_eq!(l.steps(Instant::now()), 0);
    }

    #[test]
    fn accumulates_partial_steps() {
        let t0 = Instant::now();
        let mut l = FrameLoop::new("test");
        let mut c = Counter::default();
        l.drive(&mut c, t0);
        l.drive(&mut c, t0 + STEP / 2);
        assert_eq!(c.0, 0);
        l.drive(&mut c, t0 + STEP);
        assert_eq!(c.0, 1);
        l.drive(&mut c, t0 + STEP * 3);
        assert_eq!(c.0, 3);
    }

    #[test]
    fn stall_is_capped() {
        let t0 = Instant::now();
        let mut l = FrameLoop::new("test");
        l.steps(t0);
        assert_eq!(l.steps(t0 + Duration::from_secs(10)), MAX_STEPS_PER_FRAME);
        assert_eq!(l.steps(t0 + Duration::from_secs(10)), 0);
    }

    #[test]
    fn stopped_loop_never_steps() {
        let t0 = Instant::now();
        let mut l = FrameLoop::new("test");
        let mut c = Counter::default();
        l.drive(&mut c, t0);
        l.stop();
        assert!(!l.is_running());
        assert_eq!(l.drive(&mut c, t0 + STEP * 3), 0);

        // Time spent stopped is not replayed after resuming.
        l.resume();
        assert_eq!(l.drive(&mut c, t0 + STEP * 100), 0);
        assert_eq!(l.drive(&mut c, t0 + STEP * 101), 1);
        assert_eq!(c.0, 1);
    }
}
