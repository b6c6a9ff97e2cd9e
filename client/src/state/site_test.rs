use super::*;

#[test]
fn nav_links_target_page_sections() {
    let hrefs: Vec<String> = NAV_LINKS.iter().map(NavLink::href).collect();
    assert_eq!(hrefs, vec!["#about", "#projects", "#contact"]);
}

#[test]
fn skills_are_listed() {
    assert_eq!(SKILLS.len(), 2);
    assert!(SKILLS.iter().all(|s| !s.items.is_empty()));
}
