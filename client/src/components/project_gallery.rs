//! Project gallery section: one card per catalogue entry.
//!
//! DESIGN
//! ======
//! Stateless. Cards are a projection of `ProjectCard` values; entries without
//! an image or link render a placeholder or a plain label instead of empty
//! `src`/`href` attributes.

use leptos::prelude::*;

use crate::state::projects::{CardImage, CardLink, PROJECTS, ProjectCard, gallery_cards};
use crate::state::site::{SECTION_CONTACT, SECTION_PROJECTS};

/// The `#projects` section.
#[component]
pub fn ProjectGallery() -> impl IntoView {
    let cards = gallery_cards(PROJECTS);

    view! {
        <section id=SECTION_PROJECTS class="projects">
            <div class="projects__header">
                <h1>"Featured Projects"</h1>
                <p>"A showcase of my recent work and experiments"</p>
            </div>
            <div class="projects__grid">
                {cards.into_iter().map(|card| view! { <ProjectCardView card/> }).collect_view()}
            </div>
            <div class="projects__cta">
                <h2>"Interested in collaborating?"</h2>
                <p>"Let's build something amazing together"</p>
                <a class="projects__cta-link" href=format!("#{SECTION_CONTACT}")>
                    "Get in Touch"
                </a>
            </div>
        </section>
    }
}

#[component]
fn ProjectCardView(card: ProjectCard) -> impl IntoView {
    let image = match card.image {
        CardImage::Source { src, alt } => view! {
            <div class="project-card__media">
                <img src=src alt=alt/>
            </div>
        }
        .into_any(),
        CardImage::Placeholder => view! {
            <div class="project-card__media project-card__media--empty"></div>
        }
        .into_any(),
    };
    let link = match card.link {
        CardLink::External(href) => view! {
            <a class="project-card__link" href=href target="_blank" rel="noopener noreferrer">
                "View Project"
            </a>
        }
        .into_any(),
        CardLink::Unavailable => view! {
            <span class="project-card__link project-card__link--disabled">"Coming soon"</span>
        }
        .into_any(),
    };

    view! {
        <article class="project-card" data-project-id=card.key.to_string()>
            {image}
            <h3 class="project-card__title">{card.title}</h3>
            <p class="project-card__description">{card.description}</p>
            <div class="project-card__tags">
                {card
                    .chips
                    .iter()
                    .map(|tag| view! { <span class="project-card__tag">{*tag}</span> })
                    .collect_view()}
            </div>
            {link}
        </article>
    }
}
