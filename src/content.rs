//! Hardcoded page content: sections, skills, projects, experience,
//! testimonials and timeline milestones.

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::error::ContentError;

/// Static metadata for one scrollable page region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionDescriptor {
    pub id: &'static str,
    pub display_name: &'static str,
    pub icon: &'static str,
}

impl SectionDescriptor {
    pub const fn new(id: &'static str, display_name: &'static str, icon: &'static str) -> Self {
        Self {
            id,
            display_name,
            icon,
        }
    }
}

/// Page sections in document order.  The first one is "home".
pub static SECTIONS: &[SectionDescriptor] = &[
    SectionDescriptor::new("home", "Home", "⌂"),
    SectionDescriptor::new("about", "About", "☺"),
    SectionDescriptor::new("skills", "Skills", "⚙"),
    SectionDescriptor::new("projects", "Projects", "◆"),
    SectionDescriptor::new("experience", "Experience", "▣"),
    SectionDescriptor::new("timeline", "Timeline", "⟶"),
    SectionDescriptor::new("testimonials", "Testimonials", "✉"),
    SectionDescriptor::new("contact", "Contact", "☎"),
];

pub const OWNER: &str = "Ana Ribeiro";

/// Strings cycled by the hero typewriter.
pub static HERO_SUBTITLES: &[&str] = &["Dev Front-End"];

pub const ABOUT: &str = "I build interfaces that feel quick and honest: small bundles, \
accessible markup and motion that explains instead of decorates. Lately I spend my \
evenings porting UI experiments to the terminal.";

pub const CONTACT: &[(&str, &str)] = &[
    ("email", "ana@ribeiro.dev"),
    ("github", "github.com/anaribeiro"),
    ("linkedin", "linkedin.com/in/anaribeiro"),
];

// ───────────────────────────────────────── skills ────────────

#[derive(Debug, Clone, Copy)]
pub struct Skill {
    pub name: &'static str,
    pub tooltip: &'static str,
}

pub static SKILLS: &[Skill] = &[
    Skill {
        name: "HTML",
        tooltip: "Semantic markup, forms and accessibility audits.",
    },
    Skill {
        name: "CSS",
        tooltip: "Tailwind, grid layouts and motion with reduced-motion fallbacks.",
    },
    Skill {
        name: "JavaScript",
        tooltip: "DOM APIs, observers and framework-free widgets.",
    },
    Skill {
        name: "TypeScript",
        tooltip: "Strict mode everywhere; typed API clients.",
    },
    Skill {
        name: "React",
        tooltip: "Hooks, suspense and design-system components.",
    },
    Skill {
        name: "Rust",
        tooltip: "Terminal UIs and small CLIs. This page is one of them.",
    },
    Skill {
        name: "Git",
        tooltip: "Rebase-first workflows and tidy history.",
    },
    Skill {
        name: "Figma",
        tooltip: "Hand-off specs and prototyping micro-interactions.",
    },
];

// ───────────────────────────────────────── projects ──────────

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub title: &'static str,
    pub summary: &'static str,
    pub details: &'static str,
    pub stack: &'static [&'static str],
}

pub static PROJECTS: &[Project] = &[
    Project {
        title: "Weather Now",
        summary: "A forecast dashboard with offline caching.",
        details: "Service-worker cache of the last forecast, hourly charts drawn on \
canvas and a location search with debounced lookups.",
        stack: &["TypeScript", "Chart.js", "Workbox"],
    },
    Project {
        title: "Recipe Box",
        summary: "Shared recipe lists with shopping-list export.",
        details: "Drag-to-reorder ingredients, unit conversion and a print layout \
that fits on one page.",
        stack: &["React", "Firebase"],
    },
    Project {
        title: "Pixel Journal",
        summary: "One pixel per day mood tracker.",
        details: "A year grid rendered as a single SVG, local-first storage and \
a colour-blind friendly palette switcher.",
        stack: &["Svelte", "IndexedDB"],
    },
];

// ───────────────────────────────────────── experience ────────

#[derive(Debug, Clone, Copy)]
pub struct Experience {
    pub id: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub start: (i32, u32),
    /// `None` while current.
    pub end: Option<(i32, u32)>,
    pub highlights: &'static [&'static str],
}

impl Experience {
    pub fn start_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.start.0, self.start.1, 1)
    }

    pub fn end_date(&self) -> Option<NaiveDate> {
        self.end.and_then(|(y, m)| NaiveDate::from_ymd_opt(y, m, 1))
    }
}

pub static EXPERIENCE: &[Experience] = &[
    Experience {
        id: "studio",
        role: "Front-End Developer",
        company: "Studio Maré",
        start: (2022, 3),
        end: None,
        highlights: &[
            "Rebuilt the marketing site; LCP down from 4.1s to 1.3s.",
            "Introduced visual regression tests for the component library.",
            "Mentored two interns through their first production releases.",
        ],
    },
    Experience {
        id: "agency",
        role: "Junior Web Developer",
        company: "Agência Pixel",
        start: (2020, 8),
        end: Some((2022, 2)),
        highlights: &[
            "Shipped twelve client landing pages from Figma hand-offs.",
            "Wrote the agency's accessibility checklist.",
        ],
    },
    Experience {
        id: "freelance",
        role: "Freelancer",
        company: "Self-employed",
        start: (2019, 1),
        end: Some((2020, 7)),
        highlights: &["WordPress themes and small business sites."],
    },
];

// ───────────────────────────────────────── timeline ──────────

#[derive(Debug, Clone, Copy)]
pub struct Milestone {
    pub year: i32,
    pub label: &'static str,
}

pub static MILESTONES: &[Milestone] = &[
    Milestone { year: 2017, label: "First HTML page" },
    Milestone { year: 2018, label: "CS degree starts" },
    Milestone { year: 2019, label: "First freelance client" },
    Milestone { year: 2020, label: "Joined Agência Pixel" },
    Milestone { year: 2021, label: "Bootcamp mentor" },
    Milestone { year: 2022, label: "Joined Studio Maré" },
    Milestone { year: 2023, label: "Conference talk" },
    Milestone { year: 2024, label: "Learning Rust" },
];

// ───────────────────────────────────────── testimonials ──────

#[derive(Debug, Clone, Copy)]
pub struct Testimonial {
    pub author: &'static str,
    pub text: &'static str,
}

pub static TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        author: "Carla (PM, Studio Maré)",
        text: "Ana turns vague tickets into interfaces people actually enjoy.",
    },
    Testimonial {
        author: "João (client)",
        text: "Delivered early and the site still loads instantly two years later.",
    },
    Testimonial {
        author: "Beatriz (intern)",
        text: "The best code reviews I have had: kind, specific, fast.",
    },
];

/// Check the invariants the navigation code relies on.
pub fn validate(sections: &[SectionDescriptor], projects: &[Project]) -> Result<(), ContentError> {
    if sections.is_empty() {
        return Err(ContentError::NoSections);
    }
    let mut seen = HashSet::new();
    for s in sections {
        if !seen.insert(s.id) {
            return Err(ContentError::DuplicateSection(s.id));
        }
    }
    if projects.is_empty() {
        return Err(ContentError::NoProjects);
    }
    Ok(())
}

/// Position of a section id in `sections`.
pub fn section_index(sections: &[SectionDescriptor], id: &str) -> Option<usize> {
    sections.iter().position(|s| s.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_content_is_valid() {
        assert_eq!(validate(SECTIONS, PROJECTS), Ok(()));
        assert!(EXPERIENCE.iter().all(|e| e.start_date().is_some()));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let sections = [
            SectionDescriptor::new("home", "Home", "⌂"),
            SectionDescriptor::new("home", "Again", "⌂"),
        ];
        assert_eq!(
            validate(&sections, PROJECTS),
            Err(ContentError::DuplicateSection("home"))
        );
        assert_eq!(validate(&[], PROJECTS), Err(ContentError::NoSections));
        assert_eq!(validate(SECTIONS, &[]), Err(ContentError::NoProjects));
    }
}
