//! Settings menu model (data only).
//!
//! Keeping these definitions outside the input handler lets both the handler
//! and UI renderers consume the same source of truth without cross-importing.

use super::state::AppState;
use crate::core::experience::ExpandStyle;

/// A single item in the settings menu.
pub enum SettingsItem {
    /// Boolean toggle; reads/writes via accessors on `AppState`.
    Toggle {
        label: &'static str,
        get: fn(&AppState) -> bool,
        set: fn(&mut AppState, bool),
    },
    /// Cycles through a finite set of values.
    Cycle {
        label: &'static str,
        value: fn(&AppState) -> String,
        cycle: fn(&mut AppState),
    },
}

impl SettingsItem {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Toggle { label, .. } | Self::Cycle { label, .. } => label,
        }
    }

    /// Current value as shown next to the label.
    pub fn display(&self, state: &AppState) -> String {
        match self {
            Self::Toggle { get, .. } => {
                if get(state) { "[ON]".into() } else { "[OFF]".into() }
            }
            Self::Cycle { value, .. } => value(state),
        }
    }

    pub fn activate(&self, state: &mut AppState) {
        match self {
            Self::Toggle { get, set, .. } => {
                let current = get(state);
                set(state, !current);
            }
            Self::Cycle { cycle, .. } => cycle(state),
        }
    }
}

fn persist(state: &mut AppState) {
    if let Err(err) = state.config.save_to(&state.config_file) {
        tracing::warn!(%err, "could not save settings");
        state.status_message = Some(format!("Settings not saved: {err}"));
    }
}

fn next_in<T: Copy + PartialEq>(values: &[T], current: T, fallback: usize) -> T {
    let idx = values.iter().position(|v| *v == current).unwrap_or(fallback);
    values[(idx + 1) % values.len()]
}

/// All items shown in the settings popup, in display order.
pub static SETTINGS_ITEMS: &[SettingsItem] = &[
    SettingsItem::Toggle {
        label: "Dark Theme",
        get: |s| s.theme.is_dark(),
        set: |s, dark| {
            if s.theme.is_dark() != dark {
                s.toggle_theme();
            }
        },
    },
    SettingsItem::Cycle {
        label: "Card Expansion",
        value: |s| s.config.experience_expand.label().to_string(),
        cycle: |s| {
            let next = next_in(ExpandStyle::ALL, s.config.experience_expand, 0);
            s.config.experience_expand = next;
            s.experience.set_style(next);
            persist(s);
            s.status_message = Some(format!("Card expansion: {}", next.label()));
        },
    },
    SettingsItem::Cycle {
        label: "Navbar Hide Delta",
        value: |s| format!("{} rows", s.config.hide_delta),
        cycle: |s| {
            const DELTAS: &[u16] = &[0, 1, 2, 3, 5];
            s.config.hide_delta = next_in(DELTAS, s.config.hide_delta, 1);
            s.tracker.set_config(s.config.scroll_config());
            persist(s);
            s.status_message = Some(format!("Navbar hide delta: {} rows", s.config.hide_delta));
        },
    },
    SettingsItem::Cycle {
        label: "Tooltip Hide Delay",
        value: |s| format!("{}ms", s.config.tooltip_hide_ms),
        cycle: |s| {
            const DELAYS: &[u64] = &[0, 120, 250, 500];
            s.config.tooltip_hide_ms = next_in(DELAYS, s.config.tooltip_hide_ms, 1);
            s.tooltips.set_config(s.config.tooltip_config());
            persist(s);
            s.status_message = Some(format!("Tooltip hide delay: {}ms", s.config.tooltip_hide_ms));
        },
    },
    SettingsItem::Cycle {
        label: "Carousel Autoplay",
        value: |s| format!("{}s", s.config.carousel_autoplay_ms / 1000),
        cycle: |s| {
            const PERIODS: &[u64] = &[3000, 5000, 8000];
            s.config.carousel_autoplay_ms = next_in(PERIODS, s.config.carousel_autoplay_ms, 1);
            persist(s);
            s.status_message = Some(format!(
                "Carousel autoplay: {}s (next launch)",
                s.config.carousel_autoplay_ms / 1000
            ));
        },
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::core::theme_mode::ThemeMode;
    use std::time::Instant;

    fn state(name: &str) -> AppState {
        let path = std::env::temp_dir()
            .join(format!("folio-settings-{}-{name}", std::process::id()))
            .join("config.toml");
        AppState::new(AppConfig::default(), path, ThemeMode::Dark, Instant::now())
    }

    fn cleanup(state: &AppState) {
        if let Some(dir) = state.config_file.parent() {
            let _ = std::fs::remove_dir_all(dir);
        }
    }

    #[test]
    fn cycling_expansion_style_updates_cards_and_config() {
        let mut s = state("expand");
        let item = &SETTINGS_ITEMS[1];
        assert_eq!(item.display(&s), "instant");

        item.activate(&mut s);
        assert_eq!(s.config.experience_expand, ExpandStyle::Animated);
        assert_eq!(s.experience.style(), ExpandStyle::Animated);
        assert_eq!(AppConfig::load_from(&s.config_file).experience_expand, ExpandStyle::Animated);

        item.activate(&mut s);
        assert_eq!(s.config.experience_expand, ExpandStyle::Instant);
        cleanup(&s);
    }

    #[test]
    fn theme_toggle_item_flips_theme() {
        let mut s = state("theme");
        let item = &SETTINGS_ITEMS[0];
        assert_eq!(item.display(&s), "[ON]");
        item.activate(&mut s);
        assert_eq!(s.theme, ThemeMode::Light);
        assert_eq!(item.display(&s), "[OFF]");
        cleanup(&s);
    }

    #[test]
    fn hide_delay_cycles_through_presets() {
        let mut s = state("delay");
        let item = &SETTINGS_ITEMS[3];
        assert_eq!(s.config.tooltip_hide_ms, 120);
        item.activate(&mut s);
        assert_eq!(s.config.tooltip_hide_ms, 250);
        cleanup(&s);
    }
}
