use log::{debug, info};
use web_sys::{Document, Element, Window};

use crate::config::{NAV_SECTION_THRESHOLD, SCROLLED_AFTER_PX};
use crate::dom;
use crate::error::Result;
use crate::observer::{VisibilityWatcher, Watch};

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_AFTER_PX
}

pub fn section_link_selector(section_id: &str) -> String {
    format!(".nav__link[href=\"#{}\"]", section_id)
}

pub fn install_scroll_state(window: &Window, document: &Document) -> Result<()> {
    let Some(navbar) = document.get_element_by_id("navbar") else {
        debug!("No #navbar, skipping scroll state");
        return Ok(());
    };

    let update = {
        let window = window.clone();
        move || {
            let _ = dom::set_class(&navbar, "scrolled", is_scrolled(dom::scroll_y(&window)));
        }
    };

    // Initial check
    update();

    dom::listen_passive(window, "scroll", move |_| update())?;
    info!("Scroll state watcher installed");
    Ok(())
}

pub fn install_mobile_toggle(document: &Document) -> Result<()> {
    let toggle = document.get_element_by_id("navToggle");
    let nav_links = document.get_element_by_id("navLinks");
    let (Some(toggle), Some(nav_links)) = (toggle, nav_links) else {
        debug!("No #navToggle/#navLinks, skipping mobile menu");
        return Ok(());
    };

    {
        let target = toggle.clone();
        let toggle = toggle.clone();
        let nav_links = nav_links.clone();
        dom::listen(&target, "click", move |_| {
            if let Ok(open) = nav_links.class_list().toggle("open") {
                let _ = dom::set_class(&toggle, "active", open);
            }
        })?;
    }

    for link in dom::select_all_in(&nav_links, ".nav__link")? {
        let toggle = toggle.clone();
        let nav_links = nav_links.clone();
        dom::listen(&link, "click", move |_| close_menu(&toggle, &nav_links))?;
    }

    info!("Mobile nav toggle installed");
    Ok(())
}

fn close_menu(toggle: &Element, nav_links: &Element) {
    let _ = nav_links.class_list().remove_1("open");
    let _ = toggle.class_list().remove_1("active");
}

pub fn install_section_highlight(document: &Document) -> Result<()> {
    let sections = dom::select_all(document, "section[id]")?;
    if sections.is_empty() {
        debug!("No sections with ids, skipping nav highlight");
        return Ok(());
    }

    let anchors = dom::select_all(document, ".nav__link")?;
    let doc = document.clone();
    let watcher = VisibilityWatcher::new(NAV_SECTION_THRESHOLD, None, Watch::Continuous, move |section, visible| {
        if !visible {
            return;
        }
        for anchor in &anchors {
            let _ = anchor.class_list().remove_1("active");
        }
        if let Ok(Some(active)) = doc.query_selector(&section_link_selector(&section.id())) {
            let _ = active.class_list().add_1("active");
        }
    })?;
    watcher.watch_all(&sections);

    info!("Nav highlight watching {} sections", sections.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrolled_only_past_the_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(60.0));
        assert!(is_scrolled(60.5));
        assert!(is_scrolled(1200.0));
    }

    #[test]
    fn link_selector_targets_the_section_anchor() {
        assert_eq!(section_link_selector("projects"), ".nav__link[href=\"#projects\"]");
    }
}
