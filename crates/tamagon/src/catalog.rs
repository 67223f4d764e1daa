use crate::theme::Theme;

/// A decorative glyph floating around the product text.
#[derive(Debug, Clone, Copy)]
pub struct Decoration {
    pub glyph: &'static str,
    /// Anchor relative to the slide rect, both axes in `[0, 1]`.
    pub anchor: (f32, f32),
    pub size: f32,
}

#[derive(Debug, Clone)]
pub struct Slide {
    pub title: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub action_label: &'static str,
    pub hero: &'static str,
    pub theme: Theme,
    pub decorations: Vec<Decoration>,
}

/// Timeline label for a slide.
pub fn timeline_label(slide: &Slide) -> &'static str {
    slide.theme.name
}

fn deco(glyph: &'static str, x: f32, y: f32, size: f32) -> Decoration {
    Decoration {
        glyph,
        anchor: (x, y),
        size,
    }
}

/// The showcase slides, in display order.
pub fn slides() -> Vec<Slide> {
    vec![
        Slide {
            title: "Tamagon Orange",
            tagline: "Sun-ripened and cold-pressed",
            description: "Bright citrus with a honeyed finish. Pressed within hours of \
                          picking so every bottle tastes like the grove.",
            action_label: "Click to Slide",
            hero: "🍊",
            theme: Theme::ORANGE,
            decorations: vec![
                deco("🍊", 0.62, 0.18, 42.0),
                deco("🍃", 0.88, 0.30, 34.0),
                deco("🍊", 0.78, 0.78, 28.0),
                deco("🍃", 0.55, 0.70, 24.0),
            ],
        },
        Slide {
            title: "Tamagon Lemon",
            tagline: "Zest that wakes you up",
            description: "Sharp, clean and sparkling. A squeeze of Amalfi lemon balanced \
                          with a whisper of cane sugar.",
            action_label: "Click to Slide",
            hero: "🍋",
            theme: Theme::LEMON,
            decorations: vec![
                deco("🍋", 0.60, 0.20, 40.0),
                deco("🍃", 0.86, 0.26, 30.0),
                deco("🍋", 0.80, 0.74, 30.0),
                deco("🍃", 0.58, 0.76, 22.0),
            ],
        },
        Slide {
            title: "Tamagon Grape",
            tagline: "Deep, dark and velvety",
            description: "Concord grapes slow-crushed with their skins for a rich purple \
                          pour and a gentle tannic edge.",
            action_label: "Click to Slide",
            hero: "🍇",
            theme: Theme::GRAPE,
            decorations: vec![
                deco("🍇", 0.64, 0.16, 40.0),
                deco("🍃", 0.90, 0.34, 28.0),
                deco("🍇", 0.76, 0.80, 32.0),
                deco("🍃", 0.56, 0.66, 24.0),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_slide_has_its_own_theme() {
        let slides = slides();
        let names: Vec<_> = slides.iter().map(timeline_label).collect();
        assert_eq!(names, vec!["orange", "lemon", "grape"]);
    }

    #[test]
    fn decoration_anchors_are_normalized() {
        for slide in slides() {
            for d in &slide.decorations {
                assert!((0.0..=1.0).contains(&d.anchor.0), "{}", slide.title);
                assert!((0.0..=1.0).contains(&d.anchor.1), "{}", slide.title);
            }
        }
    }
}
