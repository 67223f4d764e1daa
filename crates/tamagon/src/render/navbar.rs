use eframe::egui::{self, Align2, FontId, Pos2, Rect, Vec2};

use crate::input::NavCommand;
use crate::render::{focus_ring, gradient_rect};
use crate::theme::{Palette, Theme};

pub const NAV_LINKS: [&str; 3] = ["Products", "Story", "Contact"];

/// Which in-page link is highlighted. Links only change the highlight.
#[derive(Debug, Default)]
pub struct NavLinks {
    active: usize,
}

impl NavLinks {
    pub fn active(&self) -> usize {
        self.active
    }

    pub fn select(&mut self, index: usize) {
        if index < NAV_LINKS.len() {
            self.active = index;
        }
    }
}

pub fn draw(
    ui: &egui::Ui,
    rect: Rect,
    accent: Theme,
    links: &mut NavLinks,
    opacity: f32,
    scale: f32,
    focus_rings: bool,
) -> Option<NavCommand> {
    let painter = ui.painter();
    painter.rect_filled(rect, 0.0, Theme::with_opacity(Palette::SURFACE, opacity));

    // Border accent in the active slide's gradient.
    let border = Rect::from_min_max(
        Pos2::new(rect.left(), rect.bottom() - 3.0 * scale),
        rect.right_bottom(),
    );
    gradient_rect(
        painter,
        border,
        Theme::with_opacity(accent.primary, opacity),
        Theme::with_opacity(accent.secondary, opacity),
        false,
    );

    let pad = 48.0 * scale;
    painter.text(
        Pos2::new(rect.left() + pad, rect.center().y),
        Align2::LEFT_CENTER,
        "🍊 Tamagon",
        FontId::proportional(30.0 * scale),
        Theme::with_opacity(Palette::FOREGROUND, opacity),
    );

    let mut command = None;

    // Arrow buttons on the far right, links to their left.
    let arrow = Vec2::splat(44.0 * scale);
    let next_rect = Rect::from_center_size(
        Pos2::new(rect.right() - pad - arrow.x / 2.0, rect.center().y),
        arrow,
    );
    let prev_rect = next_rect.translate(Vec2::new(-(arrow.x + 12.0 * scale), 0.0));
    for (r, glyph, nav, salt) in [
        (prev_rect, "‹", NavCommand::Previous, "nav_prev"),
        (next_rect, "›", NavCommand::Next, "nav_next"),
    ] {
        let response = ui.interact(r, ui.id().with(salt), egui::Sense::click());
        let fill = if response.hovered() {
            accent.primary
        } else {
            Palette::TRACK
        };
        let fill = Theme::with_opacity(fill, opacity);
        painter.circle_filled(r.center(), r.width() / 2.0, fill);
        painter.text(
            r.center(),
            Align2::CENTER_CENTER,
            glyph,
            FontId::proportional(30.0 * scale),
            Theme::with_opacity(Palette::FOREGROUND, opacity),
        );
        if focus_rings && response.has_focus() {
            focus_ring(painter, r, r.width() / 2.0, scale);
        }
        if response.clicked() {
            command = Some(nav);
        }
    }

    let font = FontId::proportional(20.0 * scale);
    let mut x = prev_rect.left() - 40.0 * scale;
    for (i, label) in NAV_LINKS.iter().enumerate().rev() {
        let active = i == links.active();
        let color = if active {
            accent.primary
        } else {
            Palette::MUTED
        };
        let galley = painter.layout_no_wrap(
            label.to_string(),
            font.clone(),
            Theme::with_opacity(color, opacity),
        );
        let size = galley.size();
        x -= size.x;
        let text_rect = Rect::from_min_size(Pos2::new(x, rect.center().y - size.y / 2.0), size);
        let response = ui.interact(
            text_rect.expand(6.0 * scale),
            ui.id().with(("nav_link", i)),
            egui::Sense::click(),
        );
        painter.galley(text_rect.min, galley, Theme::with_opacity(color, opacity));
        if active {
            let underline = Rect::from_min_size(
                Pos2::new(text_rect.left(), text_rect.bottom() + 4.0 * scale),
                Vec2::new(text_rect.width(), 2.0 * scale),
            );
            painter.rect_filled(underline, 1.0, Theme::with_opacity(accent.primary, opacity));
        }
        if focus_rings && response.has_focus() {
            focus_ring(painter, text_rect.expand(6.0 * scale), 4.0 * scale, scale);
        }
        if response.clicked() {
            links.select(i);
        }
        x -= 32.0 * scale;
    }

    command
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn links_select_in_range_only() {
        let mut links = NavLinks::default();
        links.select(2);
        assert_eq!(links.active(), 2);
        links.select(9);
        assert_eq!(links.active(), 2);
    }
}
