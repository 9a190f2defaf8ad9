use log::{error, info};
use web_sys::{Document, Window};

mod config;
mod dom;
mod error;
mod observer;
mod content {
    pub mod projects;
}
mod components {
    pub mod project_detail;
}
mod behaviors {
    pub mod contact;
    pub mod counter;
    pub mod modal;
    pub mod nav;
    pub mod parallax;
    pub mod process;
    pub mod reveal;
}

use behaviors::{contact, counter, modal, nav, parallax, process, reveal};

/// Wires every page behavior. They are independent, so one failing to install
/// does not stop the rest.
fn install_all(window: &Window, document: &Document) {
    let installs = [
        ("scroll state", nav::install_scroll_state(window, document)),
        ("parallax", parallax::install(window, document)),
        ("reveal", reveal::install(document)),
        ("counters", counter::install(document)),
        ("mobile nav", nav::install_mobile_toggle(document)),
        ("project modal", modal::install(window, document)),
        ("contact form", contact::install(document)),
        ("nav highlight", nav::install_section_highlight(document)),
        ("process steps", process::install(document)),
    ];

    for (name, result) in installs {
        if let Err(err) = result {
            error!("Failed to install {}: {}", name, err);
        }
    }
}

fn start() -> error::Result<()> {
    let window = dom::window()?;
    let document = dom::document()?;

    if document.ready_state() == "loading" {
        let target = document.clone();
        dom::listen(&target, "DOMContentLoaded", move |_| install_all(&window, &document))?;
    } else {
        install_all(&window, &document);
    }
    Ok(())
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting portfolio scripts");
    if let Err(err) = start() {
        error!("Page scripts not started: {}", err);
    }
}
