use log::{debug, info};
use web_sys::Document;

use crate::config::{REVEAL_ROOT_MARGIN, REVEAL_SELECTOR, REVEAL_THRESHOLD};
use crate::dom;
use crate::error::Result;
use crate::observer::{VisibilityWatcher, Watch};

/// Classes added to a reveal block before it is watched. `index` is the
/// block's position among all reveal blocks on the page; grid cards use it to
/// stagger their entry in groups of four.
pub fn reveal_classes<'a, I>(index: usize, existing: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut classes = vec!["reveal".to_string()];
    for class in existing {
        match class {
            "project-card" | "service-card" => classes.push(format!("reveal--delay-{}", index % 4 + 1)),
            "about__portrait" => classes.push("reveal--left".to_string()),
            "about__text" => classes.push("reveal--right".to_string()),
            _ => {}
        }
    }
    classes
}

pub fn install(document: &Document) -> Result<()> {
    let blocks = dom::select_all(document, REVEAL_SELECTOR)?;
    if blocks.is_empty() {
        debug!("Nothing to reveal");
        return Ok(());
    }

    for (i, block) in blocks.iter().enumerate() {
        let existing = block.class_name();
        for class in reveal_classes(i, existing.split_whitespace()) {
            block.class_list().add_1(&class)?;
        }
    }

    let watcher = VisibilityWatcher::new(REVEAL_THRESHOLD, Some(REVEAL_ROOT_MARGIN), Watch::Once, |block, _| {
        let _ = block.class_list().add_1("visible");
    })?;
    watcher.watch_all(&blocks);

    info!("Reveal watching {} blocks", blocks.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_block_gets_the_base_class() {
        assert_eq!(reveal_classes(0, ["section__header"]), vec!["reveal"]);
        assert_eq!(reveal_classes(7, std::iter::empty()), vec!["reveal"]);
    }

    #[test]
    fn cards_are_staggered_in_groups_of_four() {
        let delays: Vec<String> = (0..6)
            .map(|i| reveal_classes(i, ["project-card"]).pop().unwrap())
            .collect();
        assert_eq!(
            delays,
            vec![
                "reveal--delay-1",
                "reveal--delay-2",
                "reveal--delay-3",
                "reveal--delay-4",
                "reveal--delay-1",
                "reveal--delay-2",
            ]
        );
        assert_eq!(reveal_classes(2, ["service-card", "featured"]), vec!["reveal", "reveal--delay-3"]);
    }

    #[test]
    fn about_blocks_slide_in_from_opposite_sides() {
        assert_eq!(reveal_classes(0, ["about__portrait"]), vec!["reveal", "reveal--left"]);
        assert_eq!(reveal_classes(1, ["about__text"]), vec!["reveal", "reveal--right"]);
    }
}
