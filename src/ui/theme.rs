//! Color themes for the UI.

use crate::app::Theme;
use ratatui::style::Color;

/// Theme color palette.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    /// Background color.
    pub bg: Color,
    /// Primary text color.
    pub text: Color,
    /// Muted text color (footer, inactive headers).
    pub muted: Color,
    /// Column header color.
    pub header: Color,
    /// Accent color (focused field, active sort header).
    pub accent: Color,
    /// Border color.
    pub border: Color,
    /// Row highlight foreground color.
    pub highlight_fg: Color,
    /// Row highlight background color.
    pub highlight_bg: Color,
    /// Status bar foreground color.
    pub status_fg: Color,
    /// Status bar background color.
    pub status_bg: Color,
    /// Row-count badge foreground color.
    pub badge_fg: Color,
    /// Row-count badge background color.
    pub badge_bg: Color,
}

impl ThemeColors {
    /// Create color palette from theme.
    pub fn from_theme(theme: &Theme) -> Self {
        match theme {
            Theme::GruvboxDark => Self {
                bg: Color::Rgb(40, 40, 40),
                text: Color::Rgb(235, 219, 178),
                muted: Color::Rgb(146, 131, 116),
                header: Color::Rgb(184, 187, 38),
                accent: Color::Rgb(251, 184, 108),
                border: Color::Rgb(102, 92, 84),
                highlight_fg: Color::Rgb(40, 40, 40),
                highlight_bg: Color::Rgb(251, 184, 108),
                status_fg: Color::Rgb(235, 219, 178),
                status_bg: Color::Rgb(60, 56, 54),
                badge_fg: Color::Rgb(40, 40, 40),
                badge_bg: Color::Rgb(142, 192, 124),
            },
            Theme::GruvboxLight => Self {
                bg: Color::Rgb(251, 245, 234),
                text: Color::Rgb(60, 56, 54),
                muted: Color::Rgb(146, 131, 116),
                header: Color::Rgb(121, 116, 14),
                accent: Color::Rgb(175, 58, 3),
                border: Color::Rgb(213, 196, 161),
                highlight_fg: Color::Rgb(251, 245, 234),
                highlight_bg: Color::Rgb(175, 58, 3),
                status_fg: Color::Rgb(60, 56, 54),
                status_bg: Color::Rgb(235, 219, 178),
                badge_fg: Color::Rgb(251, 245, 234),
                badge_bg: Color::Rgb(102, 123, 3),
            },
        }
    }
}
