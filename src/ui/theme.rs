//! Colour palette and text styles used across the UI, per theme mode.

use ratatui::style::{Color, Modifier, Style};

use crate::core::theme_mode::ThemeMode;

/// Central theme.  Change colours here and they propagate everywhere.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    mode: ThemeMode,
}

impl Theme {
    pub fn new(mode: ThemeMode) -> Self {
        Self { mode }
    }

    fn pick(&self, dark: Color, light: Color) -> Color {
        if self.mode.is_dark() {
            dark
        } else {
            light
        }
    }

    // ── page ───────────────────────────────────────────────────
    pub fn background(&self) -> Style {
        Style::default()
            .bg(self.pick(Color::Black, Color::White))
            .fg(self.pick(Color::Gray, Color::Black))
    }

    pub fn text_style(&self) -> Style {
        Style::default().fg(self.pick(Color::Gray, Color::Black))
    }

    /// Sections that have not faded in yet.
    pub fn unrevealed_style(&self) -> Style {
        Style::default().fg(self.pick(Color::DarkGray, Color::Gray))
    }

    pub fn muted_style(&self) -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn heading_style(&self) -> Style {
        Style::default()
            .fg(self.pick(Color::LightBlue, Color::Blue))
            .add_modifier(Modifier::BOLD)
    }

    pub fn hero_style(&self) -> Style {
        Style::default()
            .fg(self.pick(Color::White, Color::Black))
            .add_modifier(Modifier::BOLD)
    }

    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.pick(Color::LightMagenta, Color::Magenta))
    }

    pub fn chip_style(&self) -> Style {
        Style::default()
            .fg(self.pick(Color::Cyan, Color::Blue))
            .add_modifier(Modifier::BOLD)
    }

    pub fn chip_active_style(&self) -> Style {
        Style::default()
            .bg(self.pick(Color::Cyan, Color::Blue))
            .fg(self.pick(Color::Black, Color::White))
            .add_modifier(Modifier::BOLD)
    }

    pub fn indicator_on_style(&self) -> Style {
        Style::default().fg(self.pick(Color::LightBlue, Color::Blue))
    }

    pub fn indicator_off_style(&self) -> Style {
        Style::default().fg(self.pick(Color::DarkGray, Color::Gray))
    }

    pub fn selected_style(&self) -> Style {
        Style::default()
            .bg(self.pick(Color::DarkGray, Color::Gray))
            .add_modifier(Modifier::BOLD)
    }

    // ── chrome ─────────────────────────────────────────────────
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.pick(Color::Gray, Color::DarkGray))
    }

    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.pick(Color::Green, Color::Blue))
            .add_modifier(Modifier::BOLD)
    }

    pub fn nav_link_style(&self) -> Style {
        Style::default().fg(self.pick(Color::Gray, Color::DarkGray))
    }

    pub fn nav_link_active_style(&self) -> Style {
        Style::default()
            .fg(self.pick(Color::LightBlue, Color::Blue))
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    pub fn progress_style(&self) -> Style {
        Style::default().fg(self.pick(Color::LightBlue, Color::Blue))
    }

    pub fn status_bar_style(&self) -> Style {
        Style::default()
            .bg(self.pick(Color::DarkGray, Color::Gray))
            .fg(self.pick(Color::White, Color::Black))
    }

    pub fn tooltip_style(&self) -> Style {
        Style::default()
            .bg(self.pick(Color::White, Color::Black))
            .fg(self.pick(Color::Black, Color::White))
    }
}
