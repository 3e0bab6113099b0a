use crossterm::style::{style, Color, Stylize};

/// Design tokens for the Treepick terminal UI.
///
/// All glyphs and colors used by the picker are sourced from this module.
pub mod colors {
    use super::Color;

    /// Active row
    pub const ACTIVE: Color = Color::Cyan;
    /// Highlighted (selected) rows
    pub const HIGHLIGHT: Color = Color::Green;
    /// Warnings printed by the CLI
    pub const WARNING: Color = Color::Yellow;
    /// Disabled rows and hints
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const WARNING: &str = "⚠";
    pub const CURSOR: &str = "❯";
    pub const SEARCH: &str = "⌕";

    // Selection states.
    pub const SELECTED: &str = "●";
    pub const UNSELECTED: &str = "○";
    pub const PARTIAL: &str = "◐";

    // Tree expansion.
    pub const EXPAND: &str = "▼";
    pub const COLLAPSE: &str = "▶";

    pub const SEPARATOR: &str = "─";
}

pub mod icons_ascii {
    pub const WARNING: &str = "[WARN]";
    pub const CURSOR: &str = ">";
    pub const SEARCH: &str = "/";

    // Selection states.
    pub const SELECTED: &str = "[x]";
    pub const UNSELECTED: &str = "[ ]";
    pub const PARTIAL: &str = "[-]";

    // Tree expansion.
    pub const EXPAND: &str = "[v]";
    pub const COLLAPSE: &str = "[>]";

    pub const SEPARATOR: &str = "-";
}

/// Pick the unicode or ASCII variant of a glyph
pub fn glyph(supports_unicode: bool, unicode: &'static str, ascii: &'static str) -> &'static str {
    if supports_unicode {
        unicode
    } else {
        ascii
    }
}

/// Map an item style color (`red`, `dark_grey`, `#1e90ff`) to a terminal color
pub fn named_color(name: &str) -> Option<Color> {
    let name = name.trim().to_lowercase();
    if let Some(hex) = name.strip_prefix('#') {
        if hex.len() != 6 {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
        return Some(Color::Rgb {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        });
    }

    let color = match name.replace(['-', ' '], "_").as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" | "purple" => Color::Magenta,
        "cyan" => Color::Cyan,
        "white" => Color::White,
        "grey" | "gray" => Color::Grey,
        "dark_grey" | "dark_gray" => Color::DarkGrey,
        "dark_red" => Color::DarkRed,
        "dark_green" => Color::DarkGreen,
        "dark_yellow" | "orange" => Color::DarkYellow,
        "dark_blue" => Color::DarkBlue,
        "dark_magenta" => Color::DarkMagenta,
        "dark_cyan" => Color::DarkCyan,
        _ => return None,
    };
    Some(color)
}

/// Paint `text` with `color` when color output is enabled
pub fn paint(text: &str, color: Color, enabled: bool) -> String {
    if enabled {
        style(text).with(color).to_string()
    } else {
        text.to_string()
    }
}
