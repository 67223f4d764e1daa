use std::time::{Duration, Instant};

use anyhow::Result;

use crate::animation::Entrance;
use crate::catalog::Slide;
use crate::theme::Theme;

/// How long a transition holds the re-entrancy guard. Matches the slide
/// cross-fade length; the guard is released on time, not on completion.
pub const TRANSITION_DURATION: Duration = Duration::from_millis(600);

/// Result of an accepted navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideChange {
    pub from: usize,
    pub to: usize,
}

/// Progress indicator state: `fraction` of the timeline track filled with the
/// theme gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    pub fraction: f32,
    pub theme: Theme,
}

/// Owns the active slide index and everything derived from it.
pub struct ProductSlider {
    slides: Vec<Slide>,
    current: usize,
    /// Slide that was active before the last change, for the cross-fade.
    previous: Option<usize>,
    /// Set while a transition is in flight.
    guard_until: Option<Instant>,
    changed_at: Option<Instant>,
    progress: Progress,
    accent: Theme,
    entrance: Entrance,
}

impl ProductSlider {
    pub fn new(slides: Vec<Slide>, start: usize) -> Result<Self> {
        if slides.is_empty() {
            anyhow::bail!("A showcase needs at least one slide");
        }
        if start >= slides.len() {
            anyhow::bail!(
                "Start slide {} is out of range (1-{})",
                start + 1,
                slides.len()
            );
        }
        let theme = slides[start].theme;
        let mut slider = Self {
            slides,
            current: start,
            previous: None,
            guard_until: None,
            changed_at: None,
            progress: Progress {
                fraction: 0.0,
                theme,
            },
            accent: theme,
            entrance: Entrance::settled(),
        };
        slider.update_timeline();
        Ok(slider)
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn active_slide(&self) -> &Slide {
        &self.slides[self.current]
    }

    pub fn previous(&self) -> Option<usize> {
        self.previous
    }

    pub fn progress(&self) -> Progress {
        self.progress
    }

    /// Theme of the navbar border gradient.
    pub fn accent(&self) -> Theme {
        self.accent
    }

    pub fn theme(&self) -> Theme {
        self.slides[self.current].theme
    }

    pub fn entrance(&self) -> &Entrance {
        &self.entrance
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.guard_until.is_some_and(|until| now < until)
    }

    /// Linear progress of the cross-fade from the previous slide, `1.0` when idle.
    pub fn transition_progress(&self, now: Instant) -> f32 {
        match (self.changed_at, self.guard_until) {
            (Some(start), Some(_)) => (now.saturating_duration_since(start).as_secs_f32()
                / TRANSITION_DURATION.as_secs_f32())
            .clamp(0.0, 1.0),
            _ => 1.0,
        }
    }

    /// Release the guard once its window has elapsed.
    pub fn tick(&mut self, now: Instant) {
        if let Some(until) = self.guard_until {
            if now >= until {
                self.guard_until = None;
                self.previous = None;
            }
        }
    }

    pub fn go_to_slide(&mut self, index: usize, now: Instant) -> Option<SlideChange> {
        self.tick(now);
        if self.is_animating(now) {
            tracing::trace!(index, "navigation dropped: transition in progress");
            return None;
        }
        if index >= self.slides.len() {
            tracing::trace!(index, "navigation dropped: index out of range");
            return None;
        }

        let from = self.current;
        self.previous = Some(from);
        self.current = index;
        self.changed_at = Some(now);
        self.guard_until = Some(now + TRANSITION_DURATION);

        self.update_timeline();
        self.entrance.restart(now);
        self.accent = self.theme();

        tracing::debug!(from, to = index, theme = self.accent.name, "slide changed");
        Some(SlideChange { from, to: index })
    }

    pub fn next_slide(&mut self, now: Instant) -> Option<SlideChange> {
        let next = (self.current + 1) % self.len();
        self.go_to_slide(next, now)
    }

    pub fn previous_slide(&mut self, now: Instant) -> Option<SlideChange> {
        let n = self.len();
        let prev = (self.current + n - 1) % n;
        self.go_to_slide(prev, now)
    }

    fn update_timeline(&mut self) {
        self.progress = Progress {
            fraction: (self.current + 1) as f32 / self.len() as f32,
            theme: self.theme(),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    fn slider() -> ProductSlider {
        ProductSlider::new(catalog::slides(), 0).unwrap()
    }

    /// Instant far enough past `t` for any transition to have finished.
    fn after(t: Instant) -> Instant {
        t + TRANSITION_DURATION
    }

    #[test]
    fn rejects_empty_showcase() {
        assert!(ProductSlider::new(Vec::new(), 0).is_err());
    }

    #[test]
    fn rejects_out_of_range_start() {
        let err = ProductSlider::new(catalog::slides(), 3).err().unwrap();
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn next_wraps_around_three_slides() {
        let mut s = slider();
        let mut t = Instant::now();
        assert_eq!(s.current(), 0);
        s.next_slide(t);
        assert_eq!(s.current(), 1);
        t = after(t);
        s.next_slide(t);
        assert_eq!(s.current(), 2);
        t = after(t);
        let change = s.next_slide(t).unwrap();
        assert_eq!(change, SlideChange { from: 2, to: 0 });
        assert_eq!(s.current(), 0);
    }

    #[test]
    fn n_nexts_return_to_start() {
        for start in 0..3 {
            let mut s = ProductSlider::new(catalog::slides(), start).unwrap();
            let mut t = Instant::now();
            for _ in 0..s.len() {
                assert!(s.next_slide(t).is_some());
                t = after(t);
            }
            assert_eq!(s.current(), start);
        }
    }

    #[test]
    fn previous_undoes_next() {
        for start in 0..3 {
            let mut s = ProductSlider::new(catalog::slides(), start).unwrap();
            let t = Instant::now();
            s.next_slide(t);
            s.previous_slide(after(t));
            assert_eq!(s.current(), start);
        }
    }

    #[test]
    fn previous_from_first_wraps_to_last() {
        let mut s = slider();
        s.previous_slide(Instant::now());
        assert_eq!(s.current(), 2);
    }

    #[test]
    fn navigation_during_transition_is_dropped() {
        let mut s = slider();
        let t = Instant::now();
        s.go_to_slide(1, t).unwrap();
        let progress = s.progress();

        assert!(s.next_slide(t + Duration::from_millis(100)).is_none());
        assert!(s.previous_slide(t + Duration::from_millis(300)).is_none());
        assert!(s.go_to_slide(0, t + Duration::from_millis(599)).is_none());

        assert_eq!(s.current(), 1);
        assert_eq!(s.progress(), progress);
        assert!(s.is_animating(t + Duration::from_millis(599)));
    }

    #[test]
    fn guard_releases_after_window() {
        let mut s = slider();
        let t = Instant::now();
        s.go_to_slide(1, t);
        s.tick(after(t));
        assert!(!s.is_animating(after(t)));
        assert!(s.previous().is_none());
        assert!(s.go_to_slide(2, after(t)).is_some());
    }

    #[test]
    fn out_of_range_goto_is_ignored() {
        let mut s = slider();
        assert!(s.go_to_slide(7, Instant::now()).is_none());
        assert_eq!(s.current(), 0);
        assert!(!s.is_animating(Instant::now()));
    }

    #[test]
    fn progress_tracks_index() {
        let mut s = slider();
        let mut t = Instant::now();
        assert_eq!(s.progress().fraction, 1.0 / 3.0);
        for i in [2usize, 1, 0] {
            s.go_to_slide(i, t);
            assert_eq!(s.progress().fraction, (i + 1) as f32 / 3.0);
            assert_eq!(s.progress().theme, s.slides()[i].theme);
            t = after(t);
        }
    }

    #[test]
    fn change_updates_accent_and_restarts_entrance() {
        let mut s = slider();
        let t = Instant::now();
        assert_eq!(s.accent(), Theme::ORANGE);
        s.go_to_slide(2, t);
        assert_eq!(s.accent(), Theme::GRAPE);
        assert!(s.entrance().is_reset(t));
        assert_eq!(s.previous(), Some(0));
    }

    #[test]
    fn transition_progress_runs_over_window() {
        let mut s = slider();
        let t = Instant::now();
        assert_eq!(s.transition_progress(t), 1.0);
        s.next_slide(t);
        let mid = s.transition_progress(t + Duration::from_millis(300));
        assert!((mid - 0.5).abs() < 1e-3);
    }
}
