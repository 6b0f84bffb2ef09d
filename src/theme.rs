//! Theme presets for the infographic
//! Dark is slate-900 with white text, light is gray-100 with black text

use ratatui::style::Color;

/// Theme colors for the UI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub bg: Color,               // Root background
    pub panel: Color,            // Panel/card background
    pub panel_active: Color,     // Expanded glossary card background
    pub text: Color,             // Primary text
    pub text_dim: Color,         // Detail lists, definitions
    pub inactive: Color,         // Card borders at rest
    pub title_from: Color,       // Title gradient start (blue-400)
    pub title_to: Color,         // Title gradient end (purple-400)
    pub steps_heading: Color,    // "Programming Steps"
    pub languages_heading: Color, // "Choosing the Right Language"
    pub glossary_heading: Color, // "Glossary"
    pub category: Color,         // Language category names
    pub language: Color,         // Language names
    pub label: Color,            // "Use Cases:" etc.
    pub chip: Color,             // Framework/strength chip background
    pub term_active: Color,      // Expanded glossary term
    pub button: Color,           // Theme toggle button
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            bg: Color::Rgb(15, 23, 42),
            panel: Color::Rgb(30, 41, 59),
            panel_active: Color::Rgb(71, 85, 105),
            text: Color::Rgb(255, 255, 255),
            text_dim: Color::Rgb(203, 213, 225),
            inactive: Color::Rgb(71, 85, 105),
            title_from: Color::Rgb(96, 165, 250),
            title_to: Color::Rgb(192, 132, 252),
            steps_heading: Color::Rgb(96, 165, 250),
            languages_heading: Color::Rgb(192, 132, 252),
            glossary_heading: Color::Rgb(74, 222, 128),
            category: Color::Rgb(147, 197, 253),
            language: Color::Rgb(253, 224, 71),
            label: Color::Rgb(191, 219, 254),
            chip: Color::Rgb(71, 85, 105),
            term_active: Color::Rgb(147, 197, 253),
            button: Color::Rgb(59, 130, 246),
        }
    }

    pub fn light() -> Self {
        Self {
            bg: Color::Rgb(243, 244, 246),
            panel: Color::Rgb(229, 231, 235),
            panel_active: Color::Rgb(209, 213, 219),
            text: Color::Rgb(0, 0, 0),
            text_dim: Color::Rgb(55, 65, 81),
            inactive: Color::Rgb(156, 163, 175),
            title_from: Color::Rgb(37, 99, 235),
            title_to: Color::Rgb(147, 51, 234),
            steps_heading: Color::Rgb(37, 99, 235),
            languages_heading: Color::Rgb(147, 51, 234),
            glossary_heading: Color::Rgb(22, 163, 74),
            category: Color::Rgb(29, 78, 216),
            language: Color::Rgb(161, 98, 7),
            label: Color::Rgb(30, 64, 175),
            chip: Color::Rgb(209, 213, 219),
            term_active: Color::Rgb(29, 78, 216),
            button: Color::Rgb(59, 130, 246),
        }
    }

    /// Preset for the current display flag
    pub fn for_mode(dark_mode: bool) -> Self {
        if dark_mode {
            Self::dark()
        } else {
            Self::light()
        }
    }

    /// Parse a hex color string (#RRGGBB or #RGB)
    pub fn parse_hex_color(s: &str) -> Option<Color> {
        let s = s.trim().trim_start_matches('#');

        if s.len() == 6 {
            let r = u8::from_str_radix(&s[0..2], 16).ok()?;
            let g = u8::from_str_radix(&s[2..4], 16).ok()?;
            let b = u8::from_str_radix(&s[4..6], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        } else if s.len() == 3 {
            let r = u8::from_str_radix(&s[0..1], 16).ok()? * 17;
            let g = u8::from_str_radix(&s[1..2], 16).ok()? * 17;
            let b = u8::from_str_radix(&s[2..3], 16).ok()? * 17;
            Some(Color::Rgb(r, g, b))
        } else {
            None
        }
    }

    /// Hex color from the content tables, falling back to the primary text color
    pub fn content_color(&self, hex: &str) -> Color {
        Self::parse_hex_color(hex).unwrap_or(self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(Theme::parse_hex_color("#3498db"), Some(Color::Rgb(0x34, 0x98, 0xdb)));
        assert_eq!(Theme::parse_hex_color("fff"), Some(Color::Rgb(255, 255, 255)));
        assert_eq!(Theme::parse_hex_color("#12"), None);
        assert_eq!(Theme::parse_hex_color("#zzzzzz"), None);
    }

    #[test]
    fn test_presets_differ() {
        assert_ne!(Theme::dark().bg, Theme::light().bg);
        assert_eq!(Theme::for_mode(true), Theme::dark());
        assert_eq!(Theme::for_mode(false), Theme::light());
    }

    #[test]
    fn test_content_color_fallback() {
        let theme = Theme::dark();
        assert_eq!(theme.content_color("not a color"), theme.text);
    }
}
