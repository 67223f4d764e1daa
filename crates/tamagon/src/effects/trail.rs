//! Decaying marks left behind by the pointer.

use std::collections::VecDeque;

use eframe::egui::{self, Color32, Pos2};

use super::FrameEffect;
use crate::theme::Theme;

pub const MAX_TRAIL_LENGTH: usize = 20;
/// Life lost per step; a fresh point lasts 20 steps.
pub const DECAY: f32 = 0.05;
const MAX_RADIUS: f32 = 6.0;

#[derive(Debug, Clone, PartialEq)]
pub struct TrailPoint {
    pub pos: Pos2,
    pub color: Color32,
    pub life: f32,
}

pub struct CursorTrail {
    points: VecDeque<TrailPoint>,
    colors: Vec<Color32>,
    color_index: usize,
}

impl CursorTrail {
    pub fn new(colors: Vec<Color32>) -> Self {
        Self {
            points: VecDeque::with_capacity(MAX_TRAIL_LENGTH + 1),
            colors,
            color_index: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Points from oldest to newest.
    pub fn points(&self) -> impl Iterator<Item = &TrailPoint> {
        self.points.iter()
    }

    pub fn current_color(&self) -> Color32 {
        if self.colors.is_empty() {
            return Color32::WHITE;
        }
        self.colors[self.color_index % self.colors.len()]
    }

    pub fn add_point(&mut self, pos: Pos2) {
        self.points.push_back(TrailPoint {
            pos,
            color: self.current_color(),
            life: 1.0,
        });
        while self.points.len() > MAX_TRAIL_LENGTH {
            self.points.pop_front();
        }
    }

    /// Color future points with palette entry `index`. Existing points keep
    /// their color.
    pub fn update_color(&mut self, index: usize) {
        self.color_index = index;
    }

    pub fn paint(&self, painter: &egui::Painter) {
        for point in self.points() {
            let life = point.life.clamp(0.0, 1.0);
            painter.circle_filled(
                point.pos,
                MAX_RADIUS * life,
                Theme::with_opacity(point.color, life * 0.8),
            );
        }
    }
}

impl FrameEffect for CursorTrail {
    fn step(&mut self) {
        for point in &mut self.points {
            point.life -= DECAY;
        }
        self.points.retain(|p| p.life > 0.0);
    }
}
