//! Single-page portfolio: navigation, hero, about, projects and contact.
//!
//! The page owns the contact state signal; every other section is static.

#[cfg(all(test, feature = "ssr"))]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::components::contact_form::ContactForm;
use crate::components::nav_bar::NavBar;
use crate::components::project_gallery::ProjectGallery;
use crate::state::contact::ContactState;
use crate::state::site::{ABOUT_TEXT, OWNER_NAME, SECTION_ABOUT, SECTION_CONTACT, SECTION_PROJECTS, SKILLS, TAGLINE};

#[component]
pub fn HomePage() -> impl IntoView {
    let contact = RwSignal::new(ContactState::new());

    view! {
        <Title text=format!("{OWNER_NAME} | Portfolio")/>
        <Meta name="description" content=TAGLINE/>
        <div class="page">
            <NavBar/>

            <section class="hero">
                <div class="hero__content">
                    <h1 class="hero__title">
                        "Hi, I'm " <span class="hero__name">{OWNER_NAME}</span>
                    </h1>
                    <p class="hero__tagline">{TAGLINE}</p>
                    <a class="hero__cta" href=format!("#{SECTION_PROJECTS}")>
                        "View My Work"
                    </a>
                </div>
            </section>

            <section id=SECTION_ABOUT class="about">
                <h2 class="section-title">"About Me"</h2>
                <p class="about__text">{ABOUT_TEXT}</p>
                <div class="about__skills">
                    {SKILLS
                        .iter()
                        .map(|group| {
                            view! {
                                <div class="about__skill">
                                    <h3>{group.heading}</h3>
                                    <p>{group.items}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <ProjectGallery/>

            <section id=SECTION_CONTACT class="contact">
                <h2 class="section-title">"Let's Connect"</h2>
                <p class="contact__lede">
                    "Interested in working together? Let's talk about your project."
                </p>
                <ContactForm contact/>
            </section>
        </div>
    }
}
