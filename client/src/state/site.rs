//! Static page copy: brand, hero, about and in-page navigation targets.

#[cfg(test)]
#[path = "site_test.rs"]
mod site_test;

pub const BRAND: &str = "Murasakix";
pub const OWNER_NAME: &str = "Thummarat";
pub const TAGLINE: &str = "A developer crafting beautiful digital experiences";

pub const ABOUT_TEXT: &str = "I'm a developer with expertise in creating modern web applications. \
My journey in technology started with a curiosity about how things work, \
and it has evolved into a professional career building digital solutions.";

/// Fragment identifiers of the addressable page sections.
pub const SECTION_ABOUT: &str = "about";
pub const SECTION_PROJECTS: &str = "projects";
pub const SECTION_CONTACT: &str = "contact";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub section: &'static str,
}

impl NavLink {
    #[must_use]
    pub fn href(&self) -> String {
        format!("#{}", self.section)
    }
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "About", section: SECTION_ABOUT },
    NavLink { label: "Projects", section: SECTION_PROJECTS },
    NavLink { label: "Contact", section: SECTION_CONTACT },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillGroup {
    pub heading: &'static str,
    pub items: &'static str,
}

pub const SKILLS: &[SkillGroup] = &[
    SkillGroup { heading: "Frontend", items: "Leptos, WebAssembly, CSS" },
    SkillGroup { heading: "Backend", items: "Rust, Axum, Tokio" },
];
