//! Pointer-driven parallax for decorations and tilt for the text block.

use eframe::egui::{Pos2, Rect, Vec2};

/// Pixels of travel per decoration layer at the viewport edge.
const PARALLAX_SPEED: f32 = 10.0;
/// Pointer distance from center per degree of tilt.
const TILT_DIVISOR: f32 = 20.0;
/// Screen-space travel per degree when the tilt is rendered flat.
const TILT_SHIFT: f32 = 0.6;

/// Offset for the `index`th decoration with the pointer at `pointer`
/// inside `viewport`. Deeper layers move further.
pub fn parallax_offset(pointer: Pos2, viewport: Rect, index: usize) -> Vec2 {
    if viewport.width() <= 0.0 || viewport.height() <= 0.0 {
        return Vec2::ZERO;
    }
    let mx = (pointer.x - viewport.left()) / viewport.width();
    let my = (pointer.y - viewport.top()) / viewport.height();
    let speed = (index + 1) as f32 * PARALLAX_SPEED;
    Vec2::new((mx - 0.5) * speed, (my - 0.5) * speed)
}

/// Rotation of a panel toward the pointer, in degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Tilt {
    pub rotate_x: f32,
    pub rotate_y: f32,
}

impl Tilt {
    /// `None` resets to flat, as when the pointer leaves the panel.
    pub fn toward(pointer: Option<Pos2>, panel: Rect) -> Self {
        match pointer {
            Some(p) if panel.contains(p) => {
                let x = p.x - panel.left();
                let y = p.y - panel.top();
                let cx = panel.width() / 2.0;
                let cy = panel.height() / 2.0;
                Self {
                    rotate_x: (y - cy) / TILT_DIVISOR,
                    rotate_y: (cx - x) / TILT_DIVISOR,
                }
            }
            _ => Self::default(),
        }
    }

    pub fn is_flat(&self) -> bool {
        self.rotate_x == 0.0 && self.rotate_y == 0.0
    }

    /// Flat approximation of the perspective rotation: the panel leans
    /// toward the pointer.
    pub fn shift(&self) -> Vec2 {
        Vec2::new(-self.rotate_y * TILT_SHIFT, self.rotate_x * TILT_SHIFT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Rect {
        Rect::from_min_size(Pos2::ZERO, Vec2::new(1000.0, 500.0))
    }

    #[test]
    fn centered_pointer_has_no_parallax() {
        let o = parallax_offset(Pos2::new(500.0, 250.0), viewport(), 3);
        assert_eq!(o, Vec2::ZERO);
    }

    #[test]
    fn deeper_layers_move_further() {
        let p = Pos2::new(1000.0, 0.0);
        assert_eq!(parallax_offset(p, viewport(), 0), Vec2::new(5.0, -5.0));
        assert_eq!(parallax_offset(p, viewport(), 2), Vec2::new(15.0, -15.0));
    }

    #[test]
    fn empty_viewport_is_still() {
        let empty = Rect::from_min_size(Pos2::ZERO, Vec2::ZERO);
        assert_eq!(parallax_offset(Pos2::new(3.0, 3.0), empty, 1), Vec2::ZERO);
    }

    #[test]
    fn tilt_follows_pointer() {
        let panel = Rect::from_min_size(Pos2::new(100.0, 100.0), Vec2::new(400.0, 200.0));
        let t = Tilt::toward(Some(Pos2::new(100.0, 300.0)), panel);
        // Bottom-left corner: x = 0, y = 200, center (200, 100).
        assert_eq!(t.rotate_x, 5.0);
        assert_eq!(t.rotate_y, 10.0);
    }

    #[test]
    fn tilt_resets_when_pointer_leaves() {
        let panel = Rect::from_min_size(Pos2::ZERO, Vec2::new(100.0, 100.0));
        assert!(Tilt::toward(Some(Pos2::new(500.0, 500.0)), panel).is_flat());
        assert!(Tilt::toward(None, panel).is_flat());
    }
}
