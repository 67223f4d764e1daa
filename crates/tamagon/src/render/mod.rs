pub mod navbar;
pub mod slide;
pub mod timeline;

use eframe::egui::{self, Color32, Pos2, Rect, Vec2};

use crate::theme::Theme;

/// Reference resolution the layout constants are written for.
const REFERENCE_SIZE: Vec2 = Vec2::new(1920.0, 1080.0);

/// Screen regions of the showcase page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageLayout {
    pub viewport: Rect,
    pub navbar: Rect,
    pub timeline: Rect,
    pub stage: Rect,
    pub scale: f32,
}

impl PageLayout {
    pub fn compute(viewport: Rect) -> Self {
        let scale = (viewport.width() / REFERENCE_SIZE.x)
            .min(viewport.height() / REFERENCE_SIZE.y)
            .max(0.1);

        let navbar_h = 88.0 * scale;
        let timeline_w = 220.0 * scale;

        let navbar = Rect::from_min_max(
            viewport.left_top(),
            Pos2::new(viewport.right(), viewport.top() + navbar_h),
        );
        let body = Rect::from_min_max(
            Pos2::new(viewport.left(), navbar.bottom()),
            viewport.right_bottom(),
        );
        let timeline = Rect::from_min_max(
            body.left_top(),
            Pos2::new(body.left() + timeline_w, body.bottom()),
        );
        let stage = Rect::from_min_max(
            Pos2::new(timeline.right(), body.top()),
            body.right_bottom(),
        );

        Self {
            viewport,
            navbar,
            timeline,
            stage,
            scale,
        }
    }
}

/// Fill `rect` with a two-stop gradient, top-to-bottom when `vertical`,
/// left-to-right otherwise.
pub fn gradient_rect(
    painter: &egui::Painter,
    rect: Rect,
    from: Color32,
    to: Color32,
    vertical: bool,
) {
    let mut mesh = egui::Mesh::default();
    let (tl, tr, bl, br) = if vertical {
        (from, from, to, to)
    } else {
        (from, to, from, to)
    };
    mesh.colored_vertex(rect.left_top(), tl);
    mesh.colored_vertex(rect.right_top(), tr);
    mesh.colored_vertex(rect.left_bottom(), bl);
    mesh.colored_vertex(rect.right_bottom(), br);
    mesh.add_triangle(0, 2, 1);
    mesh.add_triangle(1, 2, 3);
    painter.add(egui::Shape::mesh(mesh));
}

/// Soft halo behind `rect`: a few expanding translucent layers.
pub fn glow(painter: &egui::Painter, rect: Rect, color: Color32, radius: f32, opacity: f32) {
    const LAYERS: usize = 4;
    for i in (1..=LAYERS).rev() {
        let t = i as f32 / LAYERS as f32;
        let layer = rect.expand(radius * t);
        let alpha = opacity * 0.5 * (1.0 - t + 1.0 / LAYERS as f32) / LAYERS as f32;
        painter.rect_filled(layer, radius * t, Theme::with_opacity(color, alpha));
    }
}

/// Rounded pill button. Returns the response so callers can react to clicks.
#[allow(clippy::too_many_arguments)]
pub fn pill_button(
    ui: &egui::Ui,
    id: egui::Id,
    rect: Rect,
    label: &str,
    theme: Theme,
    opacity: f32,
    scale: f32,
    focus_rings: bool,
) -> egui::Response {
    let response = ui.interact(rect, id, egui::Sense::click());
    let lift = if response.hovered() { 1.0 } else { 0.85 };
    let painter = ui.painter();
    let radius = rect.height() / 2.0;

    let halo = opacity * lift * 0.6;
    glow(painter, rect, theme.primary, 10.0 * scale, halo);
    let fill = Theme::with_opacity(theme.primary, opacity * lift);
    painter.rect_filled(rect, radius, fill);
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        label,
        egui::FontId::proportional(rect.height() * 0.42),
        Theme::with_opacity(Color32::WHITE, opacity),
    );
    if focus_rings && response.has_focus() {
        focus_ring(painter, rect, radius, scale);
    }
    response
}

pub fn focus_ring(painter: &egui::Painter, rect: Rect, radius: f32, scale: f32) {
    painter.rect_stroke(
        rect,
        radius,
        egui::Stroke::new(2.0 * scale, Color32::WHITE),
        egui::StrokeKind::Outside,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_viewport_has_unit_scale() {
        let layout = PageLayout::compute(Rect::from_min_size(Pos2::ZERO, REFERENCE_SIZE));
        assert_eq!(layout.scale, 1.0);
        assert_eq!(layout.navbar.height(), 88.0);
        assert_eq!(layout.timeline.width(), 220.0);
    }

    #[test]
    fn regions_tile_the_viewport() {
        let viewport = Rect::from_min_size(Pos2::new(10.0, 20.0), Vec2::new(1280.0, 720.0));
        let layout = PageLayout::compute(viewport);
        assert_eq!(layout.navbar.top(), viewport.top());
        assert_eq!(layout.timeline.top(), layout.navbar.bottom());
        assert_eq!(layout.stage.left(), layout.timeline.right());
        assert_eq!(layout.stage.right_bottom(), viewport.right_bottom());
        let area = layout.navbar.area() + layout.timeline.area() + layout.stage.area();
        assert!((area - viewport.area()).abs() < 1.0);
    }

    #[test]
    fn scale_follows_the_tighter_axis() {
        let wide = PageLayout::compute(Rect::from_min_size(Pos2::ZERO, Vec2::new(3840.0, 1080.0)));
        assert_eq!(wide.scale, 1.0);
        let tall = PageLayout::compute(Rect::from_min_size(Pos2::ZERO, Vec2::new(960.0, 2000.0)));
        assert_eq!(tall.scale, 0.5);
    }
}
