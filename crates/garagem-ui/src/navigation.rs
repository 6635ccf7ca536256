//! Switching between mutually exclusive page sections

use tracing::warn;

use crate::element::{lock, ElementRef};

pub const ACTIVE_SECTION_CLASS: &str = "active-section";
pub const ACTIVE_LINK_CLASS: &str = "active-link";
/// `data-*` attribute of a nav link naming the section it opens
pub const NAV_TARGET_ATTR: &str = "target";

/// Show the section whose id is `target_id` and highlight its nav links.
///
/// When no section matches, the first section is shown instead and its id
/// becomes the target for the links. Returns the id of the section left
/// active, or `None` when `sections` is empty.
pub fn set_active_section(
    target_id: &str,
    sections: &[ElementRef],
    nav_links: &[ElementRef],
) -> Option<String> {
    let mut found = false;
    for section in sections {
        let mut section = lock(section);
        let is_active = section.id() == Some(target_id);
        section.class_list_mut().toggle(ACTIVE_SECTION_CLASS, is_active);
        found |= is_active;
    }

    let mut effective_target = target_id.to_string();
    let mut active = found.then(|| target_id.to_string());

    if !found {
        warn!(target_id, "no section with this id, showing the first section");
        if let Some(first) = sections.first() {
            let mut first = lock(first);
            first.class_list_mut().add(ACTIVE_SECTION_CLASS);
            effective_target = first.id().unwrap_or_default().to_string();
            active = Some(effective_target.clone());
        }
    }

    for link in nav_links {
        let mut link = lock(link);
        let is_active = link.data(NAV_TARGET_ATTR) == Some(effective_target.as_str());
        link.class_list_mut().toggle(ACTIVE_LINK_CLASS, is_active);
    }

    active
}
