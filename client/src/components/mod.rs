//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page sections. Only `contact_form` touches mutable
//! state, through the `RwSignal<ContactState>` the page hands it.

pub mod contact_form;
pub mod nav_bar;
pub mod project_gallery;
