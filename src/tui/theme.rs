use ratatui::style::Color;

use crate::model::UiConfig;

/// Color palette for the TUI.
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub highlight: Color,
    pub dim: Color,
    pub red: Color,
    pub green: Color,
    pub selection_bg: Color,
    pub search_match_bg: Color,
    pub search_match_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x07, 0x14, 0x1C),
            text: Color::Rgb(0x9C, 0xB8, 0xC4),
            text_bright: Color::Rgb(0xF2, 0xF8, 0xFA),
            highlight: Color::Rgb(0x2E, 0xC4, 0xB6),
            dim: Color::Rgb(0x5C, 0x72, 0x7E),
            red: Color::Rgb(0xE5, 0x53, 0x5E),
            green: Color::Rgb(0x57, 0xC7, 0x73),
            selection_bg: Color::Rgb(0x10, 0x32, 0x3A),
            search_match_bg: Color::Rgb(0xE9, 0xC4, 0x6A),
            search_match_fg: Color::Rgb(0x07, 0x14, 0x1C),
        }
    }
}

/// Parse `#RRGGBB` into an RGB color.
fn parse_hex_color(hex: &str) -> Option<Color> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[2 * i..2 * i + 2], 16).ok();
    Some(Color::Rgb(channel(0)?, channel(1)?, channel(2)?))
}

impl Theme {
    /// Build the theme from `[ui.colors]` overrides, falling back to defaults.
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();
        let slots: [(&str, &mut Color); 10] = [
            ("background", &mut theme.background),
            ("text", &mut theme.text),
            ("text_bright", &mut theme.text_bright),
            ("highlight", &mut theme.highlight),
            ("dim", &mut theme.dim),
            ("red", &mut theme.red),
            ("green", &mut theme.green),
            ("selection_bg", &mut theme.selection_bg),
            ("search_match_bg", &mut theme.search_match_bg),
            ("search_match_fg", &mut theme.search_match_fg),
        ];
        for (name, slot) in slots {
            if let Some(color) = ui.colors.get(name).and_then(|v| parse_hex_color(v)) {
                *slot = color;
            }
        }
        theme
    }

    /// Color for a task's status cell
    pub fn status_color(&self, done: bool) -> Color {
        if done { self.green } else { self.text }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!(
            parse_hex_color("#2EC4B6"),
            Some(Color::Rgb(0x2E, 0xC4, 0xB6))
        );
        assert_eq!(
            parse_hex_color("#07141c"),
            Some(Color::Rgb(0x07, 0x14, 0x1C))
        );
        assert_eq!(parse_hex_color("2EC4B6"), None); // missing #
        assert_eq!(parse_hex_color("#2EC4"), None); // too short
        assert_eq!(parse_hex_color("#GGGGGG"), None); // invalid hex
    }

    #[test]
    fn test_overrides_apply() {
        let mut ui = UiConfig::default();
        ui.colors.insert("background".into(), "#000000".into());
        ui.colors.insert("green".into(), "#00FF00".into());
        ui.colors.insert("green_ish".into(), "#00FF00".into()); // unknown key

        let theme = Theme::from_config(&ui);
        assert_eq!(theme.background, Color::Rgb(0, 0, 0));
        assert_eq!(theme.green, Color::Rgb(0, 0xFF, 0));
        // Unchanged defaults still present
        assert_eq!(theme.text, Color::Rgb(0x9C, 0xB8, 0xC4));
    }

    #[test]
    fn test_status_color() {
        let theme = Theme::default();
        assert_eq!(theme.status_color(true), theme.green);
        assert_eq!(theme.status_color(false), theme.text);
    }
}
