//! User configuration: theme flag, tunables, keybindings and persistence.
//!
//! Stored as a simple key-value text file at
//! `$XDG_CONFIG_HOME/folio/config.toml` (default `~/.config/folio/config.toml`).
//! Lengths are in terminal cells, delays in milliseconds.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::carousel::CarouselConfig;
use crate::core::experience::ExpandStyle;
use crate::core::scroll::ScrollConfig;
use crate::core::theme_mode::ThemeMode;
use crate::core::tooltip::TooltipConfig;
use crate::error::ConfigError;

// ───────────────────────────────────────── actions ───────────

/// All configurable user actions on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    PrevSection,
    NextSection,
    NextCard,
    CarouselPrev,
    CarouselNext,
    OpenDetails,
    ToggleTheme,
    ToggleMenu,
    OpenSettings,
    Quit,
}

impl Action {
    /// Ordered list of all actions (used for the help line and the file).
    pub const ALL: &[Action] = &[
        Action::ScrollUp,
        Action::ScrollDown,
        Action::PageUp,
        Action::PageDown,
        Action::PrevSection,
        Action::NextSection,
        Action::NextCard,
        Action::CarouselPrev,
        Action::CarouselNext,
        Action::OpenDetails,
        Action::ToggleTheme,
        Action::ToggleMenu,
        Action::OpenSettings,
        Action::Quit,
    ];

    fn config_key(self) -> &'static str {
        match self {
            Action::ScrollUp => "scroll_up",
            Action::ScrollDown => "scroll_down",
            Action::PageUp => "page_up",
            Action::PageDown => "page_down",
            Action::PrevSection => "prev_section",
            Action::NextSection => "next_section",
            Action::NextCard => "next_card",
            Action::CarouselPrev => "carousel_prev",
            Action::CarouselNext => "carousel_next",
            Action::OpenDetails => "open_details",
            Action::ToggleTheme => "toggle_theme",
            Action::ToggleMenu => "toggle_menu",
            Action::OpenSettings => "open_settings",
            Action::Quit => "quit",
        }
    }

    fn from_config_key(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|a| a.config_key() == s)
    }
}

// ───────────────────────────────────────── key bind ──────────

/// A single key binding: key code + modifier combination.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBind {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBind {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Only CTRL/ALT/SHIFT are compared.
    pub fn matches(&self, event: KeyEvent) -> bool {
        let mask = KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SHIFT;
        self.code == event.code && (self.modifiers & mask) == (event.modifiers & mask)
    }

    /// `"Ctrl+c"`, `"PgDn"`… with arrows as glyphs when `pretty`.
    pub fn render(&self, pretty: bool) -> String {
        let mut s = String::new();
        for (flag, name) in [
            (KeyModifiers::CONTROL, "Ctrl+"),
            (KeyModifiers::ALT, "Alt+"),
            (KeyModifiers::SHIFT, "Shift+"),
        ] {
            if self.modifiers.contains(flag) {
                s.push_str(name);
            }
        }
        let key = match (self.code, pretty) {
            (KeyCode::Char(' '), _) => "Space".into(),
            (KeyCode::Char(c), _) => c.to_string(),
            (KeyCode::Up, true) => "↑".into(),
            (KeyCode::Down, true) => "↓".into(),
            (KeyCode::Left, true) => "←".into(),
            (KeyCode::Right, true) => "→".into(),
            (KeyCode::Up, false) => "Up".into(),
            (KeyCode::Down, false) => "Down".into(),
            (KeyCode::Left, false) => "Left".into(),
            (KeyCode::Right, false) => "Right".into(),
            (KeyCode::PageUp, true) => "PgUp".into(),
            (KeyCode::PageDown, true) => "PgDn".into(),
            (KeyCode::PageUp, false) => "PageUp".into(),
            (KeyCode::PageDown, false) => "PageDown".into(),
            (KeyCode::Enter, _) => "Enter".into(),
            (KeyCode::Esc, _) => "Esc".into(),
            (KeyCode::Tab, _) => "Tab".into(),
            (KeyCode::BackTab, _) => "BackTab".into(),
            (KeyCode::Home, _) => "Home".into(),
            (KeyCode::End, _) => "End".into(),
            (KeyCode::F(n), _) => format!("F{n}"),
            (other, _) => format!("{other:?}"),
        };
        s.push_str(&key);
        s
    }

    /// Parse `"Ctrl+c"`, `"Shift+Tab"`, `"q"`, `"PageDown"`.
    fn parse(s: &str) -> Option<Self> {
        let mut modifiers = KeyModifiers::NONE;
        let parts: Vec<&str> = s.split('+').collect();
        let key_part = parts.last()?;

        for &part in &parts[..parts.len() - 1] {
            match part.to_lowercase().as_str() {
                "ctrl" => modifiers |= KeyModifiers::CONTROL,
                "alt" => modifiers |= KeyModifiers::ALT,
                "shift" => modifiers |= KeyModifiers::SHIFT,
                _ => return None,
            }
        }

        let code = match key_part.to_lowercase().as_str() {
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "enter" | "return" => KeyCode::Enter,
            "esc" | "escape" => KeyCode::Esc,
            "tab" => KeyCode::Tab,
            "backtab" => KeyCode::BackTab,
            "home" => KeyCode::Home,
            "end" => KeyCode::End,
            "pageup" | "pgup" => KeyCode::PageUp,
            "pagedown" | "pgdn" => KeyCode::PageDown,
            "space" => KeyCode::Char(' '),
            k if k.starts_with('f') && k.len() > 1 => KeyCode::F(k[1..].parse().ok()?),
            _ if key_part.chars().count() == 1 => KeyCode::Char(key_part.chars().next()?),
            _ => return None,
        };

        Some(KeyBind { code, modifiers })
    }
}

// ───────────────────────────────────────── config ────────────

/// Application configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub bindings: HashMap<Action, Vec<KeyBind>>,
    /// Persisted theme; `None` until the user toggles once.
    pub theme: Option<ThemeMode>,
    /// Navbar collapses to one line past this offset.
    pub compact_after: u16,
    /// Minimum downward step (rows) that hides the navbar.
    pub hide_delta: u16,
    pub navbar_reveal_ms: u64,
    /// Rows before a section's top at which it becomes active.
    pub section_pre_trigger: u16,
    pub tooltip_gap: u16,
    pub tooltip_hide_ms: u64,
    pub tooltip_visibility_margin: u16,
    /// Percentage of a section that must be on screen to fade it in.
    pub reveal_threshold_pct: u8,
    pub carousel_autoplay_ms: u64,
    pub swipe_threshold: u16,
    pub drag_threshold: u16,
    pub experience_expand: ExpandStyle,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bindings: Self::default_bindings(),
            theme: None,
            compact_after: 3,
            hide_delta: 1,
            navbar_reveal_ms: 150,
            section_pre_trigger: 4,
            tooltip_gap: 1,
            tooltip_hide_ms: 120,
            tooltip_visibility_margin: 0,
            reveal_threshold_pct: 10,
            carousel_autoplay_ms: 5000,
            swipe_threshold: 6,
            drag_threshold: 2,
            experience_expand: ExpandStyle::Instant,
        }
    }
}

impl AppConfig {
    pub fn default_bindings() -> HashMap<Action, Vec<KeyBind>> {
        use Action::*;
        use KeyCode::*;
        let n = KeyModifiers::NONE;
        let shift = KeyModifiers::SHIFT;
        let mut m = HashMap::new();

        m.insert(ScrollUp, vec![KeyBind::new(Up, n), KeyBind::new(Char('k'), n)]);
        m.insert(ScrollDown, vec![KeyBind::new(Down, n), KeyBind::new(Char('j'), n)]);
        m.insert(Action::PageUp, vec![KeyBind::new(KeyCode::PageUp, n)]);
        m.insert(
            Action::PageDown,
            vec![KeyBind::new(KeyCode::PageDown, n), KeyBind::new(Char(' '), n)],
        );
        m.insert(PrevSection, vec![KeyBind::new(Char('K'), shift)]);
        m.insert(NextSection, vec![KeyBind::new(Char('J'), shift)]);
        m.insert(NextCard, vec![KeyBind::new(Tab, n)]);
        m.insert(CarouselPrev, vec![KeyBind::new(Left, n), KeyBind::new(Char('h'), n)]);
        m.insert(CarouselNext, vec![KeyBind::new(Right, n), KeyBind::new(Char('l'), n)]);
        m.insert(OpenDetails, vec![KeyBind::new(Enter, n)]);
        m.insert(ToggleTheme, vec![KeyBind::new(Char('t'), n)]);
        m.insert(ToggleMenu, vec![KeyBind::new(Char('m'), n)]);
        m.insert(OpenSettings, vec![KeyBind::new(Char('?'), n)]);
        m.insert(Quit, vec![KeyBind::new(Char('q'), n)]);

        m
    }

    /// Find the action that matches a key event.  When several bindings
    /// match, the one with the most modifiers wins.
    pub fn match_key(&self, event: KeyEvent) -> Option<Action> {
        let mut best: Option<Action> = None;
        let mut best_mod_count = 0;

        for (&action, binds) in &self.bindings {
            for bind in binds {
                if bind.matches(event) {
                    let mc = bind.modifiers.bits().count_ones();
                    if best.is_none() || mc > best_mod_count {
                        best = Some(action);
                        best_mod_count = mc;
                    }
                }
            }
        }
        best
    }

    /// First binding of `action`, for hints.
    pub fn short_binding(&self, action: Action) -> String {
        match self.bindings.get(&action) {
            Some(binds) if !binds.is_empty() => binds[0].render(true),
            _ => "?".into(),
        }
    }

    pub fn status_bar_hint(&self) -> String {
        format!(
            "{}: scroll | {}: next section | {}: skills | {}: menu | {}: theme | {}: settings",
            self.short_binding(Action::ScrollDown),
            self.short_binding(Action::NextSection),
            self.short_binding(Action::NextCard),
            self.short_binding(Action::ToggleMenu),
            self.short_binding(Action::ToggleTheme),
            self.short_binding(Action::OpenSettings),
        )
    }

    // ── core parameters ─────────────────────────────────────────

    pub fn scroll_config(&self) -> ScrollConfig {
        ScrollConfig {
            compact_after: self.compact_after as f64,
            hide_delta: self.hide_delta as f64,
            pre_trigger: self.section_pre_trigger as f64,
            reveal_after: Duration::from_millis(self.navbar_reveal_ms),
        }
    }

    pub fn tooltip_config(&self) -> TooltipConfig {
        TooltipConfig {
            gap: self.tooltip_gap as f64,
            hide_delay: Duration::from_millis(self.tooltip_hide_ms),
            visibility_margin: self.tooltip_visibility_margin as f64,
        }
    }

    pub fn carousel_config(&self) -> CarouselConfig {
        CarouselConfig {
            autoplay: Duration::from_millis(self.carousel_autoplay_ms),
            swipe_threshold: self.swipe_threshold as f64,
        }
    }

    pub fn reveal_threshold(&self) -> f64 {
        self.reveal_threshold_pct as f64 / 100.0
    }

    // ── persistence ─────────────────────────────────────────────

    /// Load config from `path`, falling back to defaults.
    pub fn load_from(path: &Path) -> Self {
        let contents = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(err) => {
                tracing::debug!(path = %path.display(), %err, "no config file, using defaults");
                return Self::default();
            }
        };
        let (config, problems) = Self::parse_config(&contents);
        for problem in problems {
            tracing::warn!(path = %path.display(), "config: {problem}");
        }
        config
    }

    /// Rewrite the file at `path` with the current values.
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.serialise())?;
        Ok(())
    }

    /// Parse the file body.  Bad values keep their defaults and are
    /// returned alongside so the caller can report them.
    pub fn parse_config(s: &str) -> (Self, Vec<ConfigError>) {
        let mut config = Self::default();
        let mut problems = Vec::new();

        for line in s.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('[') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let key = key.trim();
            let value = value.trim().trim_matches('"');

            if let Err(err) = config.apply(key, value) {
                problems.push(err);
            }
        }

        (config, problems)
    }

    fn apply(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        fn number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
            value.parse().map_err(|_| ConfigError::NotANumber {
                key: key.to_string(),
                value: value.to_string(),
            })
        }

        match key {
            "theme" => {
                self.theme = Some(ThemeMode::parse(value).ok_or_else(|| {
                    ConfigError::UnknownVariant {
                        key: key.to_string(),
                        value: value.to_string(),
                        expected: "dark, light",
                    }
                })?);
            }
            "compact_after" => self.compact_after = number(key, value)?,
            "hide_delta" => self.hide_delta = number(key, value)?,
            "navbar_reveal_ms" => self.navbar_reveal_ms = number::<u64>(key, value)?.min(5000),
            "section_pre_trigger" => self.section_pre_trigger = number(key, value)?,
            "tooltip_gap" => self.tooltip_gap = number(key, value)?,
            "tooltip_hide_ms" => self.tooltip_hide_ms = number::<u64>(key, value)?.min(5000),
            "tooltip_visibility_margin" => self.tooltip_visibility_margin = number(key, value)?,
            "reveal_threshold_pct" => {
                self.reveal_threshold_pct = number::<u8>(key, value)?.clamp(1, 100);
            }
            "carousel_autoplay_ms" => {
                // Keep this bounded for predictable UX.
                self.carousel_autoplay_ms = number::<u64>(key, value)?.clamp(1000, 60_000);
            }
            "swipe_threshold" => self.swipe_threshold = number(key, value)?,
            "drag_threshold" => self.drag_threshold = number(key, value)?,
            "experience_expand" => {
                self.experience_expand =
                    ExpandStyle::from_label(value).ok_or_else(|| ConfigError::UnknownVariant {
                        key: key.to_string(),
                        value: value.to_string(),
                        expected: "instant, animated",
                    })?;
            }
            _ => {
                let Some(action) = Action::from_config_key(key) else {
                    tracing::debug!(key, "ignoring unknown config key");
                    return Ok(());
                };
                let parsed: Vec<KeyBind> = value
                    .split(',')
                    .filter_map(|part| KeyBind::parse(part.trim().trim_matches('"')))
                    .collect();
                if parsed.is_empty() {
                    return Err(ConfigError::InvalidBinding {
                        key: key.to_string(),
                        value: value.to_string(),
                    });
                }
                self.bindings.insert(action, parsed);
            }
        }
        Ok(())
    }

    pub fn serialise(&self) -> String {
        let mut lines = vec![
            "# folio configuration".to_string(),
            String::new(),
        ];
        if let Some(theme) = self.theme {
            lines.push("# Appearance (written when you press the theme key)".to_string());
            lines.push(format!("theme = {}", theme.as_str()));
            lines.push(String::new());
        }
        lines.extend([
            "# Navigation (rows)".to_string(),
            format!("compact_after = {}", self.compact_after),
            format!("hide_delta = {}", self.hide_delta),
            format!("navbar_reveal_ms = {}", self.navbar_reveal_ms),
            format!("section_pre_trigger = {}", self.section_pre_trigger),
            String::new(),
            "# Tooltips".to_string(),
            format!("tooltip_gap = {}", self.tooltip_gap),
            format!("tooltip_hide_ms = {}", self.tooltip_hide_ms),
            format!("tooltip_visibility_margin = {}", self.tooltip_visibility_margin),
            String::new(),
            "# Page components".to_string(),
            format!("reveal_threshold_pct = {}", self.reveal_threshold_pct),
            format!("carousel_autoplay_ms = {}", self.carousel_autoplay_ms),
            format!("swipe_threshold = {}", self.swipe_threshold),
            format!("drag_threshold = {}", self.drag_threshold),
            format!("experience_expand = {}", self.experience_expand.label()),
            String::new(),
            "# Key bindings".to_string(),
            "# Format: action = Key1, Key2, ...".to_string(),
            "# Modifiers: Ctrl+, Alt+, Shift+ (prefix)".to_string(),
            String::new(),
        ]);

        for &action in Action::ALL {
            if let Some(binds) = self.bindings.get(&action) {
                let keys: Vec<String> = binds.iter().map(|b| b.render(false)).collect();
                lines.push(format!("{} = {}", action.config_key(), keys.join(", ")));
            }
        }
        lines.push(String::new());
        lines.join("\n")
    }
}

/// Return the config file path (`$XDG_CONFIG_HOME/folio/config.toml`).
pub fn config_path() -> PathBuf {
    let config_dir = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
            PathBuf::from(home).join(".config")
        });
    config_dir.join("folio").join("config.toml")
}
