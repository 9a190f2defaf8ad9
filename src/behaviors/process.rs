use log::{debug, info};
use web_sys::Document;

use crate::config::PROCESS_STEP_THRESHOLD;
use crate::dom;
use crate::error::Result;
use crate::observer::{VisibilityWatcher, Watch};

pub fn install(document: &Document) -> Result<()> {
    let steps = dom::select_all(document, ".process-step")?;
    if steps.is_empty() {
        debug!("No process steps on the page");
        return Ok(());
    }

    let watcher = VisibilityWatcher::new(PROCESS_STEP_THRESHOLD, None, Watch::Continuous, |step, visible| {
        let _ = dom::set_class(step, "active", visible);
    })?;
    watcher.watch_all(&steps);

    info!("Process steps watching {} steps", steps.len());
    Ok(())
}
