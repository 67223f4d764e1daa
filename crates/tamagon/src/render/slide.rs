use std::time::Instant;

use eframe::egui::{self, Align2, FontId, Pos2, Rect, Vec2};

use crate::animation::Entrance;
use crate::catalog::Slide;
use crate::effects::pointer::{Tilt, parallax_offset};
use crate::render::pill_button;
use crate::theme::{Palette, Theme};

/// Vertical travel of the text block during its entrance.
const ENTRANCE_RISE: f32 = 60.0;

/// Per-frame inputs for drawing a slide.
pub struct SlideFrame {
    pub now: Instant,
    pub entrance: Entrance,
    pub tilt: Tilt,
    /// Pointer position for parallax, `None` when parallax is off.
    pub pointer: Option<Pos2>,
    pub viewport: Rect,
    pub focus_rings: bool,
    /// Outgoing slides are drawn without interaction.
    pub interactive: bool,
}

/// The product text block on the left half of the stage.
pub fn text_panel_rect(stage: Rect, scale: f32) -> Rect {
    let pad = 80.0 * scale;
    Rect::from_min_max(
        Pos2::new(stage.left() + pad, stage.top() + stage.height() * 0.2),
        Pos2::new(stage.center().x, stage.bottom() - stage.height() * 0.2),
    )
}

/// Draw `slide` on `stage`. Returns true when its action button was clicked.
pub fn draw(
    ui: &egui::Ui,
    slide: &Slide,
    stage: Rect,
    frame: &SlideFrame,
    opacity: f32,
    scale: f32,
) -> bool {
    if opacity <= 0.0 {
        return false;
    }
    draw_hero(ui, slide, stage, opacity, scale);
    draw_decorations(ui, slide, stage, frame, opacity, scale);
    draw_text(ui, slide, stage, frame, opacity, scale)
}

fn draw_hero(ui: &egui::Ui, slide: &Slide, stage: Rect, opacity: f32, scale: f32) {
    let center = Pos2::new(stage.left() + stage.width() * 0.72, stage.center().y);
    let painter = ui.painter();
    // Backdrop disc in the theme gradient colors.
    painter.circle_filled(
        center,
        230.0 * scale,
        Theme::with_opacity(slide.theme.secondary, opacity * 0.18),
    );
    painter.circle_filled(
        center,
        170.0 * scale,
        Theme::with_opacity(slide.theme.blend(0.3), opacity * 0.35),
    );
    painter.text(
        center,
        Align2::CENTER_CENTER,
        slide.hero,
        FontId::proportional(220.0 * scale),
        Theme::with_opacity(egui::Color32::WHITE, opacity),
    );
}

fn draw_decorations(
    ui: &egui::Ui,
    slide: &Slide,
    stage: Rect,
    frame: &SlideFrame,
    opacity: f32,
    scale: f32,
) {
    let painter = ui.painter();
    for (i, deco) in slide.decorations.iter().enumerate() {
        let alpha = frame.entrance.decoration_opacity(i, frame.now) * opacity;
        if alpha <= 0.0 {
            continue;
        }
        let base = Pos2::new(
            stage.left() + stage.width() * deco.anchor.0,
            stage.top() + stage.height() * deco.anchor.1,
        );
        let offset = frame
            .pointer
            .map(|p| parallax_offset(p, frame.viewport, i) * scale)
            .unwrap_or(Vec2::ZERO);
        painter.text(
            base + offset,
            Align2::CENTER_CENTER,
            deco.glyph,
            FontId::proportional(deco.size * scale),
            Theme::with_opacity(slide.theme.secondary, alpha),
        );
    }
}

fn draw_text(
    ui: &egui::Ui,
    slide: &Slide,
    stage: Rect,
    frame: &SlideFrame,
    opacity: f32,
    scale: f32,
) -> bool {
    let text_opacity = frame.entrance.text_progress(frame.now) * opacity;
    let rise = (1.0 - frame.entrance.text_motion(frame.now)) * ENTRANCE_RISE * scale;
    let lean = if frame.tilt.is_flat() {
        Vec2::ZERO
    } else {
        frame.tilt.shift() * scale
    };
    let panel = text_panel_rect(stage, scale).translate(Vec2::new(0.0, rise) + lean);
    let width = panel.width();
    let painter = ui.painter();
    let mut y = panel.top();

    let tagline = painter.layout(
        slide.tagline.to_uppercase(),
        FontId::proportional(22.0 * scale),
        Theme::with_opacity(slide.theme.primary, text_opacity),
        width,
    );
    let h = tagline.size().y;
    painter.galley(Pos2::new(panel.left(), y), tagline, Palette::MUTED);
    y += h + 16.0 * scale;

    let title = painter.layout(
        slide.title.to_string(),
        FontId::proportional(84.0 * scale),
        Theme::with_opacity(Palette::FOREGROUND, text_opacity),
        width,
    );
    let h = title.size().y;
    painter.galley(Pos2::new(panel.left(), y), title, Palette::FOREGROUND);
    y += h + 28.0 * scale;

    let description = painter.layout(
        slide.description.to_string(),
        FontId::proportional(26.0 * scale),
        Theme::with_opacity(Palette::MUTED, text_opacity),
        width * 0.9,
    );
    let h = description.size().y;
    painter.galley(Pos2::new(panel.left(), y), description, Palette::MUTED);
    y += h + 48.0 * scale;

    if !frame.interactive || text_opacity <= 0.0 {
        return false;
    }
    let button = Rect::from_min_size(Pos2::new(panel.left(), y), Vec2::new(240.0, 64.0) * scale);
    pill_button(
        ui,
        ui.id().with("slide_action"),
        button,
        slide.action_label,
        slide.theme,
        text_opacity.min(1.0),
        scale,
        frame.focus_rings,
    )
    .clicked()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_panel_sits_in_left_half() {
        let stage = Rect::from_min_size(Pos2::new(200.0, 100.0), Vec2::new(1000.0, 800.0));
        let panel = text_panel_rect(stage, 1.0);
        assert!(stage.contains_rect(panel));
        assert_eq!(panel.right(), stage.center().x);
        assert_eq!(panel.left(), 280.0);
    }
}
