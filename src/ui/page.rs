//! The portfolio page as one long document of styled lines.
//!
//! Building the document also records where things landed (section extents,
//! skill chips, carousel controls, experience headers, the timeline track)
//! in document coordinates, so scrolling and hit-testing use exactly what
//! was drawn.

use std::time::Instant;

use chrono::Local;
use ratatui::{
    style::Style,
    text::{Line, Span},
};

use super::text::{truncate, wrap};
use super::theme::Theme;
use crate::app::state::AppState;
use crate::content::{self, SectionDescriptor};
use crate::core::experience::tenure;

/// Left margin of the page content.
pub const MARGIN: u16 = 2;
/// Horizontal distance between timeline milestones.
pub const MILESTONE_SPACING: usize = 16;
const HERO_HEIGHT: usize = 9;

// ───────────────────────────────────────── geometry ──────────

/// A one-row region in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocRect {
    pub line: usize,
    pub col: u16,
    pub width: u16,
}

impl DocRect {
    pub fn contains(&self, line: usize, col: u16) -> bool {
        self.line == line && col >= self.col && col < self.col + self.width
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SectionExtent {
    pub top: usize,
    pub height: usize,
}

#[derive(Debug, Clone, Default)]
pub struct TimelineGeometry {
    /// Document line of the track (labels are on the line below).
    pub line: usize,
    pub visible_width: usize,
    pub track_width: usize,
    /// Track x of each milestone.
    pub milestone_x: Vec<usize>,
}

#[derive(Debug, Clone, Default)]
pub struct CarouselGeometry {
    pub prev: Option<DocRect>,
    pub next: Option<DocRect>,
    pub indicators: Vec<DocRect>,
}

/// The built page.
#[derive(Debug, Default)]
pub struct PageDoc {
    pub lines: Vec<Line<'static>>,
    /// One per section descriptor, same order.
    pub sections: Vec<Option<SectionExtent>>,
    pub skill_cards: Vec<DocRect>,
    pub carousel: CarouselGeometry,
    pub experience_headers: Vec<(usize, &'static str)>,
    pub timeline: Option<TimelineGeometry>,
}

impl PageDoc {
    pub fn height(&self) -> usize {
        self.lines.len()
    }

    pub fn section_top(&self, id: &str, sections: &[SectionDescriptor]) -> Option<usize> {
        let idx = content::section_index(sections, id)?;
        self.sections.get(idx).copied().flatten().map(|e| e.top)
    }

    pub fn section_at(&self, line: usize) -> Option<usize> {
        self.sections
            .iter()
            .position(|e| e.is_some_and(|e| line >= e.top && line < e.top + e.height))
    }

    pub fn extents(&self) -> Vec<(f64, f64)> {
        self.sections
            .iter()
            .map(|e| e.map_or((0.0, 0.0), |e| (e.top as f64, e.height as f64)))
            .collect()
    }
}

// ───────────────────────────────────────── builder ───────────

struct Builder<'a> {
    state: &'a AppState,
    theme: Theme,
    width: u16,
    now: Instant,
    doc: PageDoc,
}

/// Build the document for a page `width` columns wide.
pub fn build(state: &AppState, width: u16, now: Instant) -> PageDoc {
    let mut b = Builder {
        state,
        theme: Theme::new(state.theme),
        width,
        now,
        doc: PageDoc::default(),
    };

    for (index, section) in state.sections.iter().enumerate() {
        let top = b.doc.lines.len();
        match section.id {
            "home" => b.hero(),
            "about" => b.about(section),
            "skills" => b.skills(section),
            "projects" => b.projects(section),
            "experience" => b.experience(section),
            "timeline" => b.timeline(section),
            "testimonials" => b.testimonials(section),
            "contact" => b.contact(section),
            _ => b.heading(section),
        }
        b.blank();
        let height = b.doc.lines.len() - top;

        if !state.reveal.is_revealed(index) {
            let dim = b.theme.unrevealed_style();
            for line in &mut b.doc.lines[top..] {
                for span in &mut line.spans {
                    span.style = dim;
                }
            }
        }
        b.doc.sections.push(Some(SectionExtent { top, height }));
    }
    b.doc
}

impl Builder<'_> {
    fn content_width(&self) -> usize {
        self.width.saturating_sub(MARGIN * 2).max(10) as usize
    }

    fn pad() -> Span<'static> {
        Span::raw(" ".repeat(MARGIN as usize))
    }

    fn push(&mut self, spans: Vec<Span<'static>>) {
        let mut all = vec![Self::pad()];
        all.extend(spans);
        self.doc.lines.push(Line::from(all));
    }

    fn text(&mut self, text: impl Into<String>, style: Style) {
        self.push(vec![Span::styled(text.into(), style)]);
    }

    fn blank(&mut self) {
        self.doc.lines.push(Line::raw(""));
    }

    fn paragraph(&mut self, text: &str, indent: usize, style: Style) {
        let width = self.content_width().saturating_sub(indent);
        for line in wrap(text, width) {
            self.text(format!("{}{line}", " ".repeat(indent)), style);
        }
    }

    fn heading(&mut self, section: &SectionDescriptor) {
        let style = self.theme.heading_style();
        self.text(format!("{} {}", section.icon, section.display_name), style);
        let rule = "─".repeat(self.content_width().min(48));
        let muted = self.theme.muted_style();
        self.text(rule, muted);
    }

    // ── sections ────────────────────────────────────────────────

    fn hero(&mut self) {
        let top = self.doc.lines.len();
        self.blank();
        self.blank();
        let hero = self.theme.hero_style();
        self.text(format!("Hi, I'm {}", content::OWNER), hero);

        let mut typed = self.state.typewriter.text().to_string();
        if self.state.typewriter.cursor_visible(self.now) {
            typed.push('▌');
        }
        let accent = self.theme.accent_style();
        self.text(typed, accent);
        self.blank();
        let muted = self.theme.muted_style();
        self.text("scroll ↓", muted);
        while self.doc.lines.len() - top < HERO_HEIGHT - 1 {
            self.blank();
        }
    }

    fn about(&mut self, section: &SectionDescriptor) {
        self.heading(section);
        let style = self.theme.text_style();
        self.paragraph(content::ABOUT, 0, style);
    }

    fn skills(&mut self, section: &SectionDescriptor) {
        self.heading(section);
        self.blank();

        let width = self.content_width() as u16;
        let active = self.state.tooltips.active();
        let mut row: Vec<Span<'static>> = Vec::new();
        let mut x: u16 = 0;

        for (i, skill) in content::SKILLS.iter().enumerate() {
            let label = format!("[ {} ]", skill.name);
            let w = label.chars().count() as u16;
            if x > 0 && x + w > width {
                self.push(std::mem::take(&mut row));
                // Breathing room so a tooltip can sit between chip rows.
                self.blank();
                x = 0;
            }
            if x > 0 {
                row.push(Span::raw("  "));
                x += 2;
            }
            let line = self.doc.lines.len();
            self.doc.skill_cards.push(DocRect {
                line,
                col: MARGIN + x,
                width: w,
            });
            let highlighted = active == Some(i) || self.state.focused_card == Some(i);
            let style = if highlighted {
                self.theme.chip_active_style()
            } else {
                self.theme.chip_style()
            };
            row.push(Span::styled(label, style));
            x += w;
        }
        if !row.is_empty() {
            self.push(row);
        }
        self.blank();
        let muted = self.theme.muted_style();
        self.text("hover or click a skill for details", muted);
    }

    fn projects(&mut self, section: &SectionDescriptor) {
        self.heading(section);
        self.blank();

        let width = self.content_width();
        let project = &content::PROJECTS[self.state.carousel.current()];
        // Every slide gets the tallest slide's height so the page doesn't jump.
        let summary_rows = content::PROJECTS
            .iter()
            .map(|p| wrap(p.summary, width).len())
            .max()
            .unwrap_or(1);

        let accent = self.theme.accent_style();
        self.text(project.title, accent);
        let summary = wrap(project.summary, width);
        let text = self.theme.text_style();
        for i in 0..summary_rows {
            self.text(summary.get(i).cloned().unwrap_or_default(), text);
        }
        let muted = self.theme.muted_style();
        self.text(truncate(&project.stack.join(" · "), width), muted);
        self.blank();

        // ◀  ● ○ ○  ▶
        let line = self.doc.lines.len();
        let mut spans = Vec::new();
        let mut col = MARGIN;
        let mut geometry = CarouselGeometry::default();

        let arrow = self.theme.chip_style();
        spans.push(Span::styled("◀", arrow));
        geometry.prev = Some(DocRect { line, col, width: 1 });
        spans.push(Span::raw("   "));
        col += 4;

        for on in self.state.carousel.indicators() {
            let (glyph, style) = if on {
                ("●", self.theme.indicator_on_style())
            } else {
                ("○", self.theme.indicator_off_style())
            };
            geometry.indicators.push(DocRect { line, col, width: 1 });
            spans.push(Span::styled(glyph, style));
            spans.push(Span::raw(" "));
            col += 2;
        }

        spans.push(Span::raw("  "));
        col += 2;
        geometry.next = Some(DocRect { line, col, width: 1 });
        spans.push(Span::styled("▶", arrow));
        if !self.state.carousel.is_autoplaying() {
            spans.push(Span::styled("   ❚❚ paused", muted));
        }
        self.push(spans);
        self.doc.carousel = geometry;

        self.text("Enter: details   ←/→: browse   drag to swipe", muted);
    }

    fn experience(&mut self, section: &SectionDescriptor) {
        self.heading(section);
        let width = self.content_width();
        let today = Local::now().date_naive();
        let focused_here = self.state.active_section().id == "experience";

        for (i, exp) in content::EXPERIENCE.iter().enumerate() {
            self.blank();
            let expanded = self.state.experience.is_expanded(exp.id);
            let marker = if expanded { "▾" } else { "▸" };
            let span = match (exp.start_date(), exp.end_date()) {
                (Some(start), end) => format!("  ({})", tenure(start, end, today)),
                (None, _) => String::new(),
            };
            let header_style = if focused_here && i == self.state.focused_experience {
                self.theme.selected_style()
            } else {
                self.theme.hero_style()
            };
            let line = self.doc.lines.len();
            self.doc.experience_headers.push((line, exp.id));
            let muted = self.theme.muted_style();
            self.push(vec![
                Span::styled(format!("{marker} {} · {}", exp.role, exp.company), header_style),
                Span::styled(span, muted),
            ]);

            let shown = self.state.experience.visible_lines(exp.id);
            let text = self.theme.text_style();
            for highlight in exp.highlights.iter().take(shown) {
                self.text(truncate(&format!("    • {highlight}"), width), text);
            }
        }
    }

    fn timeline(&mut self, section: &SectionDescriptor) {
        self.heading(section);
        self.blank();

        let visible = self.content_width();
        let n = content::MILESTONES.len();
        let track_width = n * MILESTONE_SPACING;
        let milestone_x: Vec<usize> = (0..n).map(|i| i * MILESTONE_SPACING + 2).collect();

        let mut track: Vec<char> = vec!['─'; track_width];
        let mut labels: Vec<char> = vec![' '; track_width];
        for (m, &x) in content::MILESTONES.iter().zip(&milestone_x) {
            track[x] = '●';
            for (j, c) in m.year.to_string().chars().enumerate() {
                if let Some(slot) = labels.get_mut((x + j).saturating_sub(1)) {
                    *slot = c;
                }
            }
        }

        let scroll = self.state.timeline.scroll().round() as usize;
        let window = |chars: &[char]| -> String {
            chars.iter().skip(scroll).take(visible).collect()
        };

        let line = self.doc.lines.len();
        let accent = self.theme.indicator_on_style();
        self.text(window(&track), accent);
        let text = self.theme.text_style();
        self.text(window(&labels), text);

        let muted = self.theme.muted_style();
        match self.state.selected_milestone.and_then(|i| content::MILESTONES.get(i)) {
            Some(m) => {
                let hero = self.theme.hero_style();
                self.text(format!("{} · {}", m.year, m.label), hero);
            }
            None if self.state.timeline.is_dragging() => self.text("…", muted),
            None => self.text("drag the track, click a year", muted),
        }

        self.doc.timeline = Some(TimelineGeometry {
            line,
            visible_width: visible,
            track_width,
            milestone_x,
        });
    }

    fn testimonials(&mut self, section: &SectionDescriptor) {
        self.heading(section);
        self.blank();

        let state = self.state;
        let chat = &state.chat;
        let accent = self.theme.accent_style();
        let text = self.theme.text_style();
        let muted = self.theme.muted_style();

        for t in content::TESTIMONIALS.iter().take(chat.delivered()) {
            self.text(format!("▍{}", t.author), accent);
            self.paragraph(&format!("“{}”", t.text), 2, text);
        }
        if chat.is_typing() {
            self.text("… typing", muted);
        } else if chat.is_finished() {
            self.text("(end of conversation)", muted);
        } else if chat.delivered() == 0 {
            self.text("(the conversation starts when you get here)", muted);
        }
    }

    fn contact(&mut self, section: &SectionDescriptor) {
        self.heading(section);
        let accent = self.theme.accent_style();
        let text = self.theme.text_style();
        for (kind, value) in content::CONTACT {
            self.push(vec![
                Span::styled(format!("{kind:<10}"), text),
                Span::styled(value.to_string(), accent),
            ]);
        }
        self.blank();
        let muted = self.theme.muted_style();
        self.text(format!("© {} {}", Local::now().format("%Y"), content::OWNER), muted);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::core::theme_mode::ThemeMode;

    fn state() -> AppState {
        AppState::new(
            AppConfig::default(),
            std::env::temp_dir().join("folio-page-test.toml"),
            ThemeMode::Dark,
            Instant::now(),
        )
    }

    #[test]
    fn sections_are_contiguous_and_cover_the_document() {
        let s = state();
        let doc = build(&s, 80, Instant::now());
        assert_eq!(doc.sections.len(), s.sections.len());

        let mut expected_top = 0;
        for extent in doc.sections.iter().flatten() {
            assert_eq!(extent.top, expected_top);
            expected_top += extent.height;
        }
        assert_eq!(expected_top, doc.height());
        assert_eq!(doc.section_top("home", s.sections), Some(0));
        assert_eq!(doc.section_at(0), Some(0));
    }

    #[test]
    fn every_skill_gets_a_chip_inside_the_skills_section() {
        let s = state();
        let doc = build(&s, 40, Instant::now());
        assert_eq!(doc.skill_cards.len(), content::SKILLS.len());

        let skills = content::section_index(s.sections, "skills").expect("skills section");
        for chip in &doc.skill_cards {
            assert_eq!(doc.section_at(chip.line), Some(skills));
            assert!(chip.col + chip.width <= 40);
        }
    }

    #[test]
    fn carousel_controls_are_recorded() {
        let s = state();
        let doc = build(&s, 80, Instant::now());
        assert_eq!(doc.carousel.indicators.len(), content::PROJECTS.len());
        let prev = doc.carousel.prev.expect("prev arrow");
        let next = doc.carousel.next.expect("next arrow");
        assert_eq!(prev.line, next.line);
        assert!(prev.col < doc.carousel.indicators[0].col);
        assert!(next.col > doc.carousel.indicators[content::PROJECTS.len() - 1].col);
    }

    #[test]
    fn experience_body_follows_expansion() {
        let mut s = state();
        let collapsed = build(&s, 80, Instant::now()).height();
        s.experience.toggle("studio");
        let expanded = build(&s, 80, Instant::now()).height();
        assert_eq!(expanded, collapsed + content::EXPERIENCE[0].highlights.len());
    }
}
