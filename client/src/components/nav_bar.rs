//! Fixed top navigation with in-page section links.

use leptos::prelude::*;

use crate::state::site::{BRAND, NAV_LINKS};

#[component]
pub fn NavBar() -> impl IntoView {
    view! {
        <nav class="nav-bar">
            <div class="nav-bar__inner">
                <h1 class="nav-bar__brand">{BRAND}</h1>
                <div class="nav-bar__links">
                    {NAV_LINKS
                        .iter()
                        .map(|link| view! { <a class="nav-bar__link" href=link.href()>{link.label}</a> })
                        .collect_view()}
                </div>
            </div>
        </nav>
    }
}
