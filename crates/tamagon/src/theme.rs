use eframe::egui::Color32;

/// Color pair associated with one slide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub primary: Color32,
    pub secondary: Color32,
}

/// Page-wide colors that do not change with the active slide.
pub struct Palette;

impl Palette {
    pub const BACKGROUND: Color32 = Color32::from_rgb(0x12, 0x10, 0x1C);
    pub const SURFACE: Color32 = Color32::from_rgb(0x1E, 0x1B, 0x2B);
    pub const FOREGROUND: Color32 = Color32::from_rgb(0xF3, 0xF0, 0xFA);
    pub const MUTED: Color32 = Color32::from_rgb(0x9A, 0x94, 0xB0);
    pub const TRACK: Color32 = Color32::from_rgb(0x33, 0x2E, 0x45);
}

impl Theme {
    pub const ORANGE: Theme = Theme {
        name: "orange",
        primary: Color32::from_rgb(0xFF, 0x6B, 0x35),
        secondary: Color32::from_rgb(0xFF, 0xA5, 0x5C),
    };

    pub const LEMON: Theme = Theme {
        name: "lemon",
        primary: Color32::from_rgb(0xFF, 0xD7, 0x00),
        secondary: Color32::from_rgb(0xFF, 0xEB, 0x3B),
    };

    pub const GRAPE: Theme = Theme {
        name: "grape",
        primary: Color32::from_rgb(0x8B, 0x5C, 0xF6),
        secondary: Color32::from_rgb(0xA7, 0x8B, 0xFA),
    };

    /// Apply opacity to a color
    pub fn with_opacity(color: Color32, opacity: f32) -> Color32 {
        let opacity = opacity.clamp(0.0, 1.0);
        Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), (opacity * 255.0) as u8)
    }

    /// Linear blend between the two theme colors, `t` in `[0, 1]`.
    pub fn blend(&self, t: f32) -> Color32 {
        lerp_color(self.primary, self.secondary, t)
    }
}

pub fn lerp_color(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let mix = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t).round() as u8;
    Color32::from_rgb(mix(a.r(), b.r()), mix(a.g(), b.g()), mix(a.b(), b.b()))
}

/// Colors the ambient particles pick from.
pub fn particle_palette() -> Vec<Color32> {
    vec![
        Color32::from_rgb(0xFF, 0x6B, 0x35), // orange
        Color32::from_rgb(0xFF, 0xD7, 0x00), // gold
        Color32::from_rgb(0x8B, 0x5C, 0xF6), // violet
        Color32::from_rgb(0xFF, 0x6B, 0x9D), // pink
        Color32::from_rgb(0x06, 0xB6, 0xD4), // cyan
    ]
}

/// Trail colors, one per built-in slide theme.
pub fn trail_palette(themes: &[Theme]) -> Vec<Color32> {
    themes.iter().map(|t| t.primary).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blend_endpoints_match_theme_colors() {
        let theme = Theme::GRAPE;
        assert_eq!(theme.blend(0.0), theme.primary);
        assert_eq!(theme.blend(1.0), theme.secondary);
    }

    #[test]
    fn with_opacity_clamps() {
        let c = Theme::with_opacity(Color32::WHITE, 2.0);
        assert_eq!(c.a(), 255);
        let c = Theme::with_opacity(Color32::WHITE, -1.0);
        assert_eq!(c.a(), 0);
    }

    #[test]
    fn trail_palette_follows_themes() {
        let themes = [Theme::ORANGE, Theme::LEMON, Theme::GRAPE];
        let palette = trail_palette(&themes);
        assert_eq!(palette, themes.map(|t| t.primary));
    }
}
