//! Dark/light theming and the keyword visual-weight mappings.
//!
//! The theme flag changes styling only; every panel takes `&Theme` and
//! no data path depends on it.

use crossterm::style::Color;

#[derive(Clone, Copy)]
pub struct Theme {
    pub dark: bool,
}

impl Theme {
    pub fn new(dark: bool) -> Self {
        Self { dark }
    }

    pub fn toggle(&mut self) {
        self.dark = !self.dark;
    }

    pub fn background(&self) -> Color {
        if self.dark {
            Color::Rgb { r: 16, g: 18, b: 26 }
        } else {
            Color::Rgb { r: 244, g: 243, b: 238 }
        }
    }

    pub fn text(&self) -> Color {
        if self.dark {
            Color::Rgb { r: 214, g: 216, b: 222 }
        } else {
            Color::Rgb { r: 34, g: 36, b: 42 }
        }
    }

    pub fn heading(&self) -> Color {
        if self.dark {
            Color::Rgb { r: 240, g: 242, b: 248 }
        } else {
            Color::Rgb { r: 16, g: 18, b: 26 }
        }
    }

    pub fn muted(&self) -> Color {
        if self.dark {
            Color::Rgb { r: 120, g: 126, b: 140 }
        } else {
            Color::Rgb { r: 130, g: 132, b: 140 }
        }
    }

    pub fn frame(&self) -> Color {
        if self.dark {
            Color::Rgb { r: 70, g: 76, b: 94 }
        } else {
            Color::Rgb { r: 168, g: 170, b: 178 }
        }
    }

    pub fn accent(&self) -> Color {
        if self.dark {
            Color::Rgb { r: 96, g: 165, b: 250 }
        } else {
            Color::Rgb { r: 29, g: 78, b: 216 }
        }
    }

    pub fn alert(&self) -> Color {
        Color::Rgb { r: 229, g: 57, b: 53 }
    }

    /// Semantic color for the categorical activity levels.
    pub fn level(&self, label: &str) -> Color {
        match label {
            "High" => self.alert(),
            "Moderate" => Color::Rgb { r: 251, g: 140, b: 0 },
            "Low" => Color::Rgb { r: 67, g: 160, b: 71 },
            _ => self.muted(),
        }
    }
}

/// Font size the web front end would use for a keyword; the cloud panel
/// maps it onto terminal emphasis tiers.
pub fn keyword_font_size(weight: f64) -> f64 {
    (weight / 100.0 * 24.0 + 12.0).clamp(12.0, 36.0)
}

/// Five-bucket scale over keyword weight. Boundaries are strict
/// greater-than: weight exactly 80 belongs to bucket 1, not bucket 0.
pub fn keyword_bucket(weight: f64) -> usize {
    if weight > 80.0 {
        0
    } else if weight > 60.0 {
        1
    } else if weight > 40.0 {
        2
    } else if weight > 20.0 {
        3
    } else {
        4
    }
}

const KEYWORD_RAMP_DARK: [&str; 5] =
    ["#ef5350", "#ffa726", "#ffee58", "#66bb6a", "#90a4ae"];
const KEYWORD_RAMP_LIGHT: [&str; 5] =
    ["#c62828", "#ef6c00", "#f9a825", "#2e7d32", "#546e7a"];

pub fn keyword_color(weight: f64, theme: &Theme) -> Color {
    let ramp = if theme.dark {
        KEYWORD_RAMP_DARK
    } else {
        KEYWORD_RAMP_LIGHT
    };
    hex_color(ramp[keyword_bucket(weight)])
}

/// Emphasis tier for a font size: (bold, dim).
pub fn font_emphasis(size: f64) -> (bool, bool) {
    if size >= 28.0 {
        (true, false)
    } else if size >= 18.0 {
        (false, false)
    } else {
        (false, true)
    }
}

/// Parse a "#rrggbb" string into a terminal color. Anything else renders
/// as the neutral grey.
pub fn hex_color(hex: &str) -> Color {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.is_ascii() {
        return Color::Grey;
    }
    let channel = |range| u8::from_str_radix(&digits[range], 16);
    match (channel(0..2), channel(2..4), channel(4..6)) {
        (Ok(r), Ok(g), Ok(b)) => Color::Rgb { r, g, b },
        _ => Color::Grey,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn font_size_is_clamped() {
        assert_eq!(keyword_font_size(0.0), 12.0);
        assert_eq!(keyword_font_size(100.0), 36.0);
        assert_eq!(keyword_font_size(50.0), 24.0);
        assert_eq!(keyword_font_size(150.0), 36.0);
        assert_eq!(keyword_font_size(-5.0), 12.0);
    }

    #[test]
    fn bucket_boundaries_are_strict() {
        assert_eq!(keyword_bucket(81.0), 0);
        // exactly 80 falls into the bucket below the top
        assert_eq!(keyword_bucket(80.0), 1);
        assert_eq!(keyword_bucket(60.0), 2);
        assert_eq!(keyword_bucket(40.0), 3);
        assert_eq!(keyword_bucket(20.0), 4);
        assert_eq!(keyword_bucket(0.0), 4);
    }

    #[test]
    fn parses_hex_colors() {
        assert_eq!(hex_color("#ff1744"), Color::Rgb { r: 0xff, g: 0x17, b: 0x44 });
        assert_eq!(hex_color("4caf50"), Color::Rgb { r: 0x4c, g: 0xaf, b: 0x50 });
        assert_eq!(hex_color("#nope"), Color::Grey);
        assert_eq!(hex_color(""), Color::Grey);
    }

    #[test]
    fn toggle_flips_styling_only() {
        let mut theme = Theme::new(true);
        let dark_bg = theme.background();
        theme.toggle();
        assert!(!theme.dark);
        assert_ne!(theme.background(), dark_bg);
        theme.toggle();
        assert!(theme.dark);
    }
}
