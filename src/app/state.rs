//! Central application state.
//!
//! Every page component owns its state in one controller, and all of them
//! live here so the rest of the app can be functions over `&AppState`
//! (rendering) or `&mut AppState` (event handling).

use std::path::PathBuf;
use std::time::Instant;

use ratatui::layout::Rect;

use super::deck::SkillDeck;
use crate::config::AppConfig;
use crate::content::{self, SectionDescriptor};
use crate::core::{
    carousel::Carousel,
    chat::{ChatConfig, ChatSimulation},
    experience::ExperienceCards,
    reveal::RevealTracker,
    scroll::{NavState, NavbarMode, ScrollDirection, ScrollSnapshot, ScrollTracker},
    theme_mode::ThemeMode,
    timeline::TimelineDrag,
    tooltip::TooltipPositioner,
    typewriter::{Typewriter, TypewriterConfig},
};
use crate::ui::modal::ModalHitZones;
use crate::ui::page::PageDoc;
use crate::ui::smooth_scroll::SmoothScroll;

/// Which view / overlay is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Page,
    SectionMenu,
    ProjectModal,
    SettingsMenu,
}

/// Top-level application state.
pub struct AppState {
    pub sections: &'static [SectionDescriptor],
    /// User configuration (persisted theme, tunables, bindings).
    pub config: AppConfig,
    /// Where `config` is saved.
    pub config_file: PathBuf,
    /// Theme in effect.  Only toggles are persisted.
    pub theme: ThemeMode,
    pub should_quit: bool,
    /// An optional status message shown in the bottom bar.
    pub status_message: Option<String>,
    pub active_view: ActiveView,
    pub settings_selected: usize,
    pub menu_selected: usize,
    /// Full terminal area, refreshed before each frame.
    pub terminal_area: Rect,
    /// Where the page was drawn last frame (hit-testing).
    pub page_area: Rect,

    // ── document & scrolling ────────────────────────────────
    /// Rendered page and its geometry, rebuilt every frame.
    pub doc: PageDoc,
    /// Logical scroll offset in rows.
    pub offset: usize,
    pub smooth: SmoothScroll,
    pub tracker: ScrollTracker,
    pub nav: NavState,

    // ── components ──────────────────────────────────────────
    pub deck: SkillDeck,
    pub tooltips: TooltipPositioner<SkillDeck>,
    /// Card to show once anchors are fresh (keyboard focus).
    pub pending_tooltip: Option<usize>,
    pub focused_card: Option<usize>,
    pub hovered_card: Option<usize>,
    pub reveal: RevealTracker,
    pub typewriter: Typewriter,
    pub carousel: Carousel,
    pub pointer_over_projects: bool,
    pub swipe_in_progress: bool,
    pub modal_project: usize,
    pub modal_hits: Option<ModalHitZones>,
    pub experience: ExperienceCards,
    pub focused_experience: usize,
    pub timeline: TimelineDrag,
    pub selected_milestone: Option<usize>,
    pub chat: ChatSimulation,
}

impl AppState {
    pub fn new(config: AppConfig, config_file: PathBuf, theme: ThemeMode, now: Instant) -> Self {
        let sections = content::SECTIONS;
        let deck = SkillDeck::new(content::SKILLS.iter().map(|s| s.tooltip).collect());
        let cards: Vec<(&'static str, usize)> = content::EXPERIENCE
            .iter()
            .map(|e| (e.id, e.highlights.len()))
            .collect();

        Self {
            sections,
            config_file,
            theme,
            should_quit: false,
            status_message: None,
            active_view: ActiveView::default(),
            settings_selected: 0,
            menu_selected: 0,
            terminal_area: Rect::default(),
            page_area: Rect::default(),
            doc: PageDoc::default(),
            offset: 0,
            smooth: SmoothScroll::new(0.35),
            tracker: ScrollTracker::new(config.scroll_config()),
            nav: initial_nav(),
            deck,
            tooltips: TooltipPositioner::new(config.tooltip_config()),
            pending_tooltip: None,
            focused_card: None,
            hovered_card: None,
            reveal: RevealTracker::new(sections.len(), config.reveal_threshold()),
            typewriter: Typewriter::new(content::HERO_SUBTITLES, TypewriterConfig::default(), now),
            carousel: Carousel::new(content::PROJECTS.len(), config.carousel_config(), now),
            pointer_over_projects: false,
            swipe_in_progress: false,
            modal_project: 0,
            modal_hits: None,
            experience: ExperienceCards::new(config.experience_expand, &cards),
            focused_experience: 0,
            timeline: TimelineDrag::new(config.drag_threshold as f64),
            selected_milestone: None,
            chat: ChatSimulation::new(content::TESTIMONIALS.len(), ChatConfig::default()),
            config,
        }
    }

    pub fn active_section(&self) -> &SectionDescriptor {
        &self.sections[self.nav.active_section.min(self.sections.len() - 1)]
    }

    /// Largest logical offset that still fills the page viewport.
    pub fn max_offset(&self) -> usize {
        self.doc.height().saturating_sub(self.page_area.height as usize)
    }

    /// Offset actually drawn this frame (smooth scroll included).
    pub fn rendered_offset(&self) -> usize {
        self.smooth.rendered(self.offset, self.max_offset())
    }

    /// Flip the theme and persist the choice.
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        self.config.theme = Some(self.theme);
        match self.config.save_to(&self.config_file) {
            Ok(()) => tracing::info!(theme = self.theme.as_str(), "theme toggled"),
            Err(err) => {
                tracing::warn!(%err, "could not persist theme");
                self.status_message = Some(format!("Theme not saved: {err}"));
            }
        }
    }
}

fn initial_nav() -> NavState {
    NavState {
        snapshot: ScrollSnapshot {
            offset: 0.0,
            direction: ScrollDirection::Up,
            progress_ratio: 0.0,
        },
        navbar: NavbarMode::Full,
        active_section: 0,
        breadcrumb: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_config(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("folio-test-{}-{name}", std::process::id()))
            .join("config.toml")
    }

    #[test]
    fn toggling_theme_persists_and_reloads() {
        let path = temp_config("theme");
        let mut state = AppState::new(
            AppConfig::default(),
            path.clone(),
            ThemeMode::Light,
            Instant::now(),
        );

        state.toggle_theme();
        assert_eq!(state.theme, ThemeMode::Dark);
        assert_eq!(state.config.theme, Some(ThemeMode::Dark));

        // A light-preferring system still reloads into dark.
        let reloaded = AppConfig::load_from(&path);
        assert_eq!(ThemeMode::initial(reloaded.theme, false), ThemeMode::Dark);

        state.toggle_theme();
        assert_eq!(AppConfig::load_from(&path).theme, Some(ThemeMode::Light));

        if let Some(dir) = path.parent() {
            let _ = std::fs::remove_dir_all(dir);
        }
    }
}
