use ratatui::{prelude::*, style::palette::tailwind};

/// Application theme - centralized color and style management
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    pub bg_primary: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // Accent colors
    pub accent_primary: Color,
    pub accent_secondary: Color,

    // Status colors
    pub status_success: Color,
    pub status_error: Color,
    pub status_warning: Color,
    pub status_info: Color,

    // Diff colors
    pub diff_deleted: Color,
    pub diff_inserted: Color,

    // Badges
    pub badge_bg: Color,
    pub badge_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            bg_primary: tailwind::SLATE.c950,

            text_primary: tailwind::SLATE.c100,
            text_secondary: tailwind::SLATE.c200,
            text_muted: tailwind::SLATE.c400,

            accent_primary: tailwind::CYAN.c400,
            accent_secondary: tailwind::SLATE.c600,

            status_success: tailwind::GREEN.c400,
            status_error: tailwind::RED.c400,
            status_warning: tailwind::YELLOW.c400,
            status_info: tailwind::BLUE.c400,

            diff_deleted: tailwind::RED.c400,
            diff_inserted: tailwind::GREEN.c400,

            badge_bg: tailwind::BLUE.c700,
            badge_fg: Color::White,
        }
    }

    /// Border of a panel, highlighted when it has focus
    pub fn panel_border(&self, focused: bool) -> Style {
        if focused {
            Style::default()
                .fg(self.accent_primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.accent_secondary)
        }
    }

    /// Style for panel titles
    pub fn panel_title(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for regular text
    pub fn text(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    /// Style for placeholders and secondary information
    pub fn muted(&self) -> Style {
        Style::default()
            .fg(self.text_muted)
            .add_modifier(Modifier::ITALIC)
    }

    /// Style for text removed by a correction
    pub fn deleted(&self) -> Style {
        Style::default()
            .fg(self.diff_deleted)
            .add_modifier(Modifier::CROSSED_OUT)
    }

    /// Style for text added by a correction
    pub fn inserted(&self) -> Style {
        Style::default()
            .fg(self.diff_inserted)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for metric badges
    pub fn badge(&self) -> Style {
        Style::default()
            .fg(self.badge_fg)
            .bg(self.badge_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for key hints (e.g., "Ctrl+R" in "Ctrl+R correct")
    pub fn key_hint(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for key descriptions
    pub fn key_description(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Style for warning messages
    pub fn warning(&self) -> Style {
        Style::default()
            .fg(self.status_warning)
            .add_modifier(Modifier::BOLD)
    }
}
