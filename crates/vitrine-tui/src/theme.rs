//! Color themes for dark and light terminals.
//!
//! The dark-mode flag is derived once at startup from the terminal
//! environment, is toggleable at runtime, and is never persisted.

use ratatui::style::Color;

/// Resolved color palette for the active theme.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub dim: Color,
    pub accent: Color,
    pub highlight_bg: Color,
    pub highlight_fg: Color,
    pub error: Color,
    pub success: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            bg: Color::Black,
            fg: Color::White,
            dim: Color::DarkGray,
            accent: Color::Cyan,
            highlight_bg: Color::Cyan,
            highlight_fg: Color::Black,
            error: Color::Red,
            success: Color::Green,
        }
    }

    pub fn light() -> Self {
        Self {
            bg: Color::White,
            fg: Color::Black,
            dim: Color::Gray,
            accent: Color::Blue,
            highlight_bg: Color::Blue,
            highlight_fg: Color::White,
            error: Color::Red,
            success: Color::Green,
        }
    }

    pub fn for_dark_mode(dark: bool) -> Self {
        if dark { Self::dark() } else { Self::light() }
    }
}

/// Detects the terminal's preferred color scheme at startup.
///
/// Reads COLORFGBG ("<fg>;<bg>"), where background colors 7 and 15 mean a
/// light terminal. Terminals that don't export it get the dark default.
pub fn detect_dark_preference() -> bool {
    detect_from_colorfgbg(std::env::var("COLORFGBG").ok().as_deref())
}

fn detect_from_colorfgbg(value: Option<&str>) -> bool {
    let Some(value) = value else {
        return true;
    };
    match value.rsplit(';').next().and_then(|bg| bg.parse::<u8>().ok()) {
        Some(7 | 15) => false,
        _ => true,
    }
}
