use std::cell::RefCell;

use log::{debug, error, info};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Reflect;
use web_sys::{Document, Element, KeyboardEvent, Window};
use yew::AppHandle;

use crate::components::project_detail::{ProjectDetail, ProjectDetailProps};
use crate::content::projects::{self, Project};
use crate::dom;
use crate::error::Result;

thread_local! {
    static MOUNTED: RefCell<Option<AppHandle<ProjectDetail>>> = RefCell::new(None);
}

fn render_detail(host: Element, project: Project) {
    MOUNTED.with(|mounted| {
        if let Some(previous) = mounted.borrow_mut().take() {
            previous.destroy();
        }
        let handle = yew::Renderer::<ProjectDetail>::with_root_and_props(host, ProjectDetailProps { project }).render();
        *mounted.borrow_mut() = Some(handle);
    });
}

fn show(project: &Project) -> Result<()> {
    let document = dom::document()?;
    let content = document.get_element_by_id("modalContent");
    let overlay = document.get_element_by_id("modalOverlay");
    let (Some(content), Some(overlay)) = (content, overlay) else {
        debug!("Modal markup missing, not opening");
        return Ok(());
    };

    render_detail(content, project.clone());
    overlay.class_list().add_1("active")?;
    if let Some(body) = document.body() {
        body.style().set_property("overflow", "hidden")?;
    }
    Ok(())
}

fn hide() -> Result<()> {
    let document = dom::document()?;
    if let Some(overlay) = document.get_element_by_id("modalOverlay") {
        overlay.class_list().remove_1("active")?;
    }
    if let Some(body) = document.body() {
        body.style().remove_property("overflow")?;
    }
    Ok(())
}

/// Unknown ids leave the modal untouched.
pub fn open_project(id: &str) {
    let Some(project) = projects::lookup(id) else {
        debug!("No project with id {:?}", id);
        return;
    };
    if let Err(err) = show(project) {
        error!("Failed to open project {}: {}", id, err);
    }
}

pub fn close_project() {
    if let Err(err) = hide() {
        error!("Failed to close project modal: {}", err);
    }
}

pub fn is_close_key(key: &str) -> bool {
    key == "Escape"
}

/// Exposes `openProject(id)` and `closeProject()` on `window` and closes the
/// modal on Escape.
pub fn install(window: &Window, document: &Document) -> Result<()> {
    let open = Closure::<dyn Fn(JsValue)>::new(|id: JsValue| match id.as_string() {
        Some(id) => open_project(&id),
        None => debug!("openProject called without a string id"),
    });
    Reflect::set(window, &JsValue::from_str("openProject"), open.as_ref())?;
    open.forget();

    let close = Closure::<dyn Fn()>::new(close_project);
    Reflect::set(window, &JsValue::from_str("closeProject"), close.as_ref())?;
    close.forget();

    dom::listen(document, "keydown", |event| {
        if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
            if is_close_key(&event.key()) {
                close_project();
            }
        }
    })?;

    info!("Project modal installed with {} projects", projects::ids().count());
    Ok(())
}
