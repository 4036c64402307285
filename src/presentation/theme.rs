use ratatui::style::{Color, Modifier, Style};

/// Colors for one theme. Dark mode swaps the whole palette and nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,
    pub accent: Color,
    pub border: Color,
    pub selection: Color,
    pub error: Color,
}

impl Palette {
    pub fn light() -> Self {
        Self {
            background: Color::Rgb(250, 248, 243),
            foreground: Color::Rgb(40, 40, 40),
            muted: Color::Rgb(128, 128, 128),
            accent: Color::Rgb(0xe6, 0x7e, 0x22),
            border: Color::Rgb(170, 165, 155),
            selection: Color::Rgb(255, 236, 204),
            error: Color::Rgb(192, 57, 43),
        }
    }

    pub fn dark() -> Self {
        Self {
            background: Color::Rgb(24, 26, 31),
            foreground: Color::Rgb(225, 225, 225),
            muted: Color::Rgb(120, 124, 132),
            accent: Color::Rgb(0xf3, 0x9c, 0x4b),
            border: Color::Rgb(70, 74, 82),
            selection: Color::Rgb(58, 48, 36),
            error: Color::Rgb(231, 96, 84),
        }
    }

    pub fn for_mode(dark_mode: bool) -> Self {
        if dark_mode { Self::dark() } else { Self::light() }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.foreground).bg(self.background)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.accent)
        } else {
            Style::default().fg(self.border)
        }
    }

    pub fn selected(&self) -> Style {
        Style::default()
            .bg(self.selection)
            .add_modifier(Modifier::BOLD)
    }

    /// Entry color, or the accent when the code is not a usable hex color.
    pub fn entry_color(&self, code: &str) -> Color {
        parse_hex_color(code).unwrap_or(self.accent)
    }
}

/// Parse `#rrggbb` or `#rgb`.
pub fn parse_hex_color(raw: &str) -> Option<Color> {
    let hex = raw.trim().strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }
    let channel = |digits: &str| u8::from_str_radix(digits, 16).ok();
    match hex.len() {
        6 => Some(Color::Rgb(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        3 => {
            let mut expanded = hex.chars().map(|digit| channel(&format!("{digit}{digit}")));
            Some(Color::Rgb(expanded.next()??, expanded.next()??, expanded.next()??))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_long_and_short_hex() {
        assert_eq!(parse_hex_color("#e67e22"), Some(Color::Rgb(0xe6, 0x7e, 0x22)));
        assert_eq!(parse_hex_color(" #0f8 "), Some(Color::Rgb(0x00, 0xff, 0x88)));
    }

    #[test]
    fn rejects_other_notations() {
        assert_eq!(parse_hex_color("red"), None);
        assert_eq!(parse_hex_color("#12345"), None);
        assert_eq!(parse_hex_color("#gg0000"), None);
        assert_eq!(parse_hex_color("#ïï0"), None);
        assert_eq!(parse_hex_color("#aïïa"), None);
    }

    #[test]
    fn unusable_entry_colors_fall_back_to_accent() {
        let palette = Palette::light();
        assert_eq!(palette.entry_color("blue-ish"), palette.accent);
    }
}
