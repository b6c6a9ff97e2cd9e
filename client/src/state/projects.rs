//! Static project catalogue and its card projection.
//!
//! SYSTEM CONTEXT
//! ==============
//! The gallery renders `PROJECTS` in declaration order. Entries are compiled
//! into the binary and never change at runtime.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

/// One portfolio project.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectEntry {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    /// Outbound URL; empty when the project has no public page yet.
    pub link: &'static str,
    /// Image path under the site root; empty when there is no screenshot.
    pub image: &'static str,
}

pub const PROJECTS: &[ProjectEntry] = &[
    ProjectEntry {
        id: 1,
        title: "Web Portfolio",
        description: "Portfolio website for introduce myself and my projects",
        tags: &["Rust", "Leptos", "Axum"],
        link: "",
        image: "",
    },
    ProjectEntry {
        id: 2,
        title: "Kruma Hub",
        description: "Smart assistant for Roblox game",
        tags: &["Lua"],
        link: "",
        image: "",
    },
    ProjectEntry {
        id: 3,
        title: "bruh bruh bruh",
        description: "bruhhhhhh",
        tags: &["bruh"],
        link: "",
        image: "",
    },
];

/// What the card shows in its image slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardImage {
    Source { src: &'static str, alt: &'static str },
    /// No image configured; rendered as an empty placeholder block.
    Placeholder,
}

/// What the card shows in its link slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardLink {
    External(&'static str),
    /// No link configured; rendered as a non-interactive label.
    Unavailable,
}

/// Render-ready projection of a [`ProjectEntry`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectCard {
    pub key: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub chips: &'static [&'static str],
    pub image: CardImage,
    pub link: CardLink,
}

impl ProjectCard {
    #[must_use]
    pub fn from_entry(entry: &ProjectEntry) -> Self {
        let image = if entry.image.trim().is_empty() {
            CardImage::Placeholder
        } else {
            CardImage::Source { src: entry.image, alt: entry.title }
        };
        let link = if entry.link.trim().is_empty() {
            CardLink::Unavailable
        } else {
            CardLink::External(entry.link)
        };
        Self {
            key: entry.id,
            title: entry.title,
            description: entry.description,
            chips: entry.tags,
            image,
            link,
        }
    }
}

/// One card per entry, in declaration order.
#[must_use]
pub fn gallery_cards(entries: &[ProjectEntry]) -> Vec<ProjectCard> {
    entries.iter().map(ProjectCard::from_entry).collect()
}
