use eframe::egui::{self, Align2, FontId, Pos2, Rect, Vec2};

use crate::catalog;
use crate::input::NavCommand;
use crate::render::{focus_ring, glow, gradient_rect};
use crate::slider::ProductSlider;
use crate::theme::{Palette, Theme};

/// Track geometry inside the timeline column.
pub fn track_rect(column: Rect, scale: f32) -> Rect {
    let margin = 90.0 * scale;
    Rect::from_min_max(
        Pos2::new(column.left() + 60.0 * scale, column.top() + margin),
        Pos2::new(column.left() + 66.0 * scale, column.bottom() - margin),
    )
}

/// Filled part of the track for a progress `fraction`.
pub fn progress_rect(track: Rect, fraction: f32) -> Rect {
    let height = track.height() * fraction.clamp(0.0, 1.0);
    Rect::from_min_size(track.left_top(), Vec2::new(track.width(), height))
}

/// Center of the `index`th of `count` timeline items: the item marks the
/// bottom of the progress it represents.
pub fn item_center(track: Rect, index: usize, count: usize) -> Pos2 {
    let fraction = (index + 1) as f32 / count.max(1) as f32;
    Pos2::new(track.center().x, track.top() + track.height() * fraction)
}

pub fn draw(
    ui: &egui::Ui,
    column: Rect,
    slider: &ProductSlider,
    opacity: f32,
    scale: f32,
    focus_rings: bool,
) -> Option<NavCommand> {
    let painter = ui.painter();
    let track = track_rect(column, scale);
    let track_color = Theme::with_opacity(Palette::TRACK, opacity);
    painter.rect_filled(track, track.width() / 2.0, track_color);

    let progress = slider.progress();
    let filled = progress_rect(track, progress.fraction);
    if filled.height() > 0.0 {
        let accent = progress.theme.primary;
        glow(painter, filled, accent, 12.0 * scale, opacity);
        gradient_rect(
            painter,
            filled,
            Theme::with_opacity(progress.theme.primary, opacity),
            Theme::with_opacity(progress.theme.secondary, opacity),
            true,
        );
    }

    let mut command = None;
    let count = slider.len();
    for (i, slide) in slider.slides().iter().enumerate() {
        let center = item_center(track, i, count);
        let active = i == slider.current();
        let dot_radius = (if active { 11.0 } else { 8.0 }) * scale;
        let hit = Rect::from_min_max(
            Pos2::new(column.left(), center.y - 22.0 * scale),
            Pos2::new(column.right(), center.y + 22.0 * scale),
        );
        let id = ui.id().with(("timeline_item", i));
        let response = ui.interact(hit, id, egui::Sense::click());

        let dot_color = if active || response.hovered() {
            slide.theme.primary
        } else {
            Palette::MUTED
        };
        painter.circle_filled(center, dot_radius, Theme::with_opacity(dot_color, opacity));
        if active {
            let ring = Theme::with_opacity(slide.theme.secondary, opacity * 0.7);
            painter.circle_stroke(
                center,
                dot_radius + 5.0 * scale,
                egui::Stroke::new(2.0 * scale, ring),
            );
        }

        let label_color = if active {
            Palette::FOREGROUND
        } else {
            Palette::MUTED
        };
        painter.text(
            Pos2::new(center.x + 28.0 * scale, center.y),
            Align2::LEFT_CENTER,
            catalog::timeline_label(slide),
            FontId::proportional((if active { 22.0 } else { 18.0 }) * scale),
            Theme::with_opacity(label_color, opacity),
        );

        if focus_rings && response.has_focus() {
            focus_ring(painter, hit.shrink(4.0 * scale), 6.0 * scale, scale);
        }
        if response.clicked() {
            command = Some(NavCommand::GoTo(i));
        }
    }

    command
}
