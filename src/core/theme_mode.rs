//! Dark / light mode selection.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Dark,
    Light,
}

impl ThemeMode {
    /// Persisted choice wins; otherwise follow the system preference.
    pub fn initial(persisted: Option<ThemeMode>, prefers_dark: bool) -> Self {
        match persisted {
            Some(mode) => mode,
            None if prefers_dark => ThemeMode::Dark,
            None => ThemeMode::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }

    /// Value stored in the config file.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "dark" => Some(ThemeMode::Dark),
            "light" => Some(ThemeMode::Light),
            _ => None,
        }
    }
}

/// Guess the terminal background from `COLORFGBG` (`"fg;bg"` or
/// `"fg;default;bg"`).  Background colours 0–6 and 8 are dark; anything
/// unknown counts as dark, which is what most terminals ship with.
pub fn prefers_dark(colorfgbg: Option<&str>) -> bool {
    let Some(bg) = colorfgbg.and_then(|v| v.rsplit(';').next()) else {
        return true;
    };
    match bg.trim().parse::<u8>() {
        Ok(n) => n <= 6 || n == 8,
        Err(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persisted_choice_beats_system_preference() {
        assert_eq!(ThemeMode::initial(Some(ThemeMode::Dark), false), ThemeMode::Dark);
        assert_eq!(ThemeMode::initial(Some(ThemeMode::Light), true), ThemeMode::Light);
        assert_eq!(ThemeMode::initial(None, true), ThemeMode::Dark);
        assert_eq!(ThemeMode::initial(None, false), ThemeMode::Light);
    }

    #[test]
    fn toggle_and_serialisation() {
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        for mode in [ThemeMode::Dark, ThemeMode::Light] {
            assert_eq!(ThemeMode::parse(mode.as_str()), Some(mode));
        }
        assert_eq!(ThemeMode::parse("sepia"), None);
    }

    #[test]
    fn colorfgbg_detection() {
        assert!(prefers_dark(Some("15;0")));
        assert!(!prefers_dark(Some("0;15")));
        assert!(!prefers_dark(Some("0;default;7")));
        assert!(prefers_dark(Some("garbage")));
        assert!(prefers_dark(None));
    }
}
