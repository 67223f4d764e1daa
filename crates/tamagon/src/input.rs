use std::time::Instant;

use eframe::egui;

use crate::slider::{ProductSlider, SlideChange};

/// Minimum horizontal displacement, in points, that counts as a swipe.
pub const SWIPE_THRESHOLD: f32 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCommand {
    Next,
    Previous,
    GoTo(usize),
}

impl NavCommand {
    pub fn apply(self, slider: &mut ProductSlider, now: Instant) -> Option<SlideChange> {
        match self {
            NavCommand::Next => slider.next_slide(now),
            NavCommand::Previous => slider.previous_slide(now),
            NavCommand::GoTo(index) => slider.go_to_slide(index, now),
        }
    }
}

/// Arrow keys: Left/Up go back, Right/Down go forward.
pub fn key_command(key: egui::Key) -> Option<NavCommand> {
    match key {
        egui::Key::ArrowLeft | egui::Key::ArrowUp => Some(NavCommand::Previous),
        egui::Key::ArrowRight | egui::Key::ArrowDown => Some(NavCommand::Next),
        _ => None,
    }
}

/// Horizontal swipe detector fed with press and release positions.
#[derive(Debug, Default)]
pub struct SwipeTracker {
    start_x: Option<f32>,
}

impl SwipeTracker {
    pub fn begin(&mut self, x: f32) {
        self.start_x = Some(x);
    }

    /// Finish the gesture at `x`. Dragging right-to-left advances, dragging
    /// left-to-right goes back.
    pub fn end(&mut self, x: f32) -> Option<NavCommand> {
        let start = self.start_x.take()?;
        swipe_command(start - x)
    }

    pub fn cancel(&mut self) {
        self.start_x = None;
    }

    /// Primary button went down at `origin`. Only presses that land inside
    /// `area` start a gesture, so drags on the navbar or timeline are ignored.
    pub fn press(&mut self, origin: Option<egui::Pos2>, area: Option<egui::Rect>) {
        match (origin, area) {
            (Some(origin), Some(area)) if area.contains(origin) => self.begin(origin.x),
            _ => self.cancel(),
        }
    }

    /// Primary button went up at `pos`, if the pointer is still known.
    pub fn release(&mut self, pos: Option<egui::Pos2>) -> Option<NavCommand> {
        match pos {
            Some(pos) => self.end(pos.x),
            None => {
                self.cancel();
                None
            }
        }
    }
}

/// `diff` is start minus end along the x axis.
pub fn swipe_command(diff: f32) -> Option<NavCommand> {
    if diff.abs() <= SWIPE_THRESHOLD {
        return None;
    }
    if diff > 0.0 {
        Some(NavCommand::Next)
    } else {
        Some(NavCommand::Previous)
    }
}

/// Tracks whether focus rings should be shown: Tab turns them on, any
/// pointer press turns them off.
#[derive(Debug, Default)]
pub struct KeyboardFocus {
    active: bool,
}

impl KeyboardFocus {
    pub fn observe(&mut self, input: &egui::InputState) {
        if input.key_pressed(egui::Key::Tab) {
            self.active = true;
        }
        if input.pointer.any_pressed() {
            self.active = false;
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}
