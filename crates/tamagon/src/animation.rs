use std::time::{Duration, Instant};

/// Delay between clearing the entrance animation and replaying it.
pub const REPLAY_DELAY: Duration = Duration::from_millis(10);
pub const TEXT_ENTRANCE: Duration = Duration::from_secs(1);
pub const DECORATION_DELAY: Duration = Duration::from_millis(200);
pub const DECORATION_STAGGER: Duration = Duration::from_millis(100);
pub const DECORATION_FADE: Duration = Duration::from_millis(500);
/// Resting opacity of decorative glyphs.
pub const DECORATION_OPACITY: f32 = 0.6;

pub fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

/// Anticipate-then-overshoot curve used for the text entrance.
/// Dips below 0 near the start and above 1 near the end.
pub fn ease_in_out_back(t: f32) -> f32 {
    let c1 = 1.70158;
    let c2 = c1 * 1.525;
    if t < 0.5 {
        ((2.0 * t).powi(2) * ((c2 + 1.0) * 2.0 * t - c2)) / 2.0
    } else {
        ((2.0 * t - 2.0).powi(2) * ((c2 + 1.0) * (t * 2.0 - 2.0) + c2) + 2.0) / 2.0
    }
}

fn fraction(elapsed: Duration, span: Duration) -> f32 {
    (elapsed.as_secs_f32() / span.as_secs_f32()).clamp(0.0, 1.0)
}

/// Reset-then-replay entrance animation for the active slide's text and
/// decorations. `None` means the slide is shown in its settled state.
#[derive(Debug, Clone, Copy, Default)]
pub struct Entrance {
    reset_at: Option<Instant>,
}

impl Entrance {
    pub fn settled() -> Self {
        Self { reset_at: None }
    }

    /// Clear the animation state now; it replays after [`REPLAY_DELAY`].
    pub fn restart(&mut self, now: Instant) {
        self.reset_at = Some(now);
    }

    fn replay_elapsed(&self, now: Instant) -> Option<Duration> {
        let start = self.reset_at? + REPLAY_DELAY;
        Some(now.saturating_duration_since(start))
    }

    /// Whether the text is still in the cleared state waiting for replay.
    pub fn is_reset(&self, now: Instant) -> bool {
        self.reset_at.is_some_and(|at| now < at + REPLAY_DELAY)
    }

    /// Linear progress of the text entrance in `[0, 1]`.
    pub fn text_progress(&self, now: Instant) -> f32 {
        if self.is_reset(now) {
            return 0.0;
        }
        match self.replay_elapsed(now) {
            Some(elapsed) => fraction(elapsed, TEXT_ENTRANCE),
            None => 1.0,
        }
    }

    /// Eased text progress; overshoots `[0, 1]` mid-flight.
    pub fn text_motion(&self, now: Instant) -> f32 {
        ease_in_out_back(self.text_progress(now))
    }

    /// Opacity of the `index`th decorative glyph.
    pub fn decoration_opacity(&self, index: usize, now: Instant) -> f32 {
        let Some(reset) = self.reset_at else {
            return DECORATION_OPACITY;
        };
        let start = reset + DECORATION_DELAY + DECORATION_STAGGER * index as u32;
        if now < start {
            return 0.0;
        }
        fraction(now - start, DECORATION_FADE) * DECORATION_OPACITY
    }

    /// True once text and all `decorations` glyphs have finished animating.
    pub fn is_finished(&self, decorations: usize, now: Instant) -> bool {
        let Some(reset) = self.reset_at else {
            return true;
        };
        let text_end = reset + REPLAY_DELAY + TEXT_ENTRANCE;
        let last = decorations.saturating_sub(1) as u32;
        let deco_end = reset + DECORATION_DELAY + DECORATION_STAGGER * last + DECORATION_FADE;
        now >= text_end.max(deco_end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn easing_endpoints() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert_eq!(ease_in_out(1.0), 1.0);
        assert!(ease_in_out_back(0.0).abs() < 1e-6);
        assert!((ease_in_out_back(1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn back_easing_overshoots() {
        assert!(ease_in_out_back(0.1) < 0.0);
        assert!(ease_in_out_back(0.9) > 1.0);
    }

    #[test]
    fn settled_entrance_is_fully_visible() {
        let now = Instant::now();
        let e = Entrance::settled();
        assert_eq!(e.text_progress(now), 1.0);
        assert_eq!(e.decoration_opacity(3, now), DECORATION_OPACITY);
        assert!(e.is_finished(4, now));
    }

    #[test]
    fn restart_clears_then_replays_after_delay() {
        let t0 = Instant::now();
        let mut e = Entrance::settled();
        e.restart(t0);
        assert!(e.is_reset(t0));
        assert_eq!(e.text_progress(t0 + ms(5)), 0.0);
        assert!(!e.is_reset(t0 + ms(10)));
        let half = e.text_progress(t0 + ms(510));
        assert!((half - 0.5).abs() < 1e-3, "got {half}");
        assert_eq!(e.text_progress(t0 + ms(2000)), 1.0);
    }

    #[test]
    fn decorations_fade_in_staggered() {
        let t0 = Instant::now();
        let mut e = Entrance::settled();
        e.restart(t0);
        assert_eq!(e.decoration_opacity(0, t0 + ms(199)), 0.0);
        assert!(e.decoration_opacity(0, t0 + ms(300)) > 0.0);
        assert_eq!(e.decoration_opacity(1, t0 + ms(299)), 0.0);
        assert_eq!(e.decoration_opacity(1, t0 + ms(800)), DECORATION_OPACITY);
    }

    #[test]
    fn finished_waits_for_last_decoration() {
        let t0 = Instant::now();
        let mut e = Entrance::settled();
        e.restart(t0);
        // 4 glyphs: last starts at 500ms and fades for 500ms.
        assert!(!e.is_finished(4, t0 + ms(999)));
        assert!(!e.is_finished(4, t0 + ms(1005)));
        assert!(e.is_finished(4, t0 + ms(1010)));
    }
}
