//! Page state and static content.
//!
//! SYSTEM CONTEXT
//! ==============
//! `contact` is the only mutable state on the page; `projects` and `site`
//! hold compiled-in content the views project.

pub mod contact;
pub mod projects;
pub mod site;
