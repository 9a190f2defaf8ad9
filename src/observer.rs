use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Watch {
    /// Report the first time the element becomes visible, then stop watching it.
    Once,
    /// Report every visibility change, entry and exit alike.
    Continuous,
}

impl Watch {
    pub fn reports(self, intersecting: bool) -> bool {
        match self {
            Watch::Once => intersecting,
            Watch::Continuous => true,
        }
    }

    pub fn detaches(self, intersecting: bool) -> bool {
        self == Watch::Once && intersecting
    }
}

pub struct VisibilityWatcher {
    observer: IntersectionObserver,
}

impl VisibilityWatcher {
    /// `threshold` is the visible fraction that counts as "in view";
    /// `root_margin` grows or shrinks the viewport box (CSS margin syntax).
    pub fn new<F>(threshold: f64, root_margin: Option<&str>, mode: Watch, mut on_change: F) -> Result<Self>
    where
        F: FnMut(&Element, bool) + 'static,
    {
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    let intersecting = entry.is_intersecting();
                    if !mode.reports(intersecting) {
                        continue;
                    }
                    let target = entry.target();
                    on_change(&target, intersecting);
                    if mode.detaches(intersecting) {
                        observer.unobserve(&target);
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        if let Some(margin) = root_margin {
            options.set_root_margin(margin);
        }

        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        // The observer lives as long as the page.
        callback.forget();
        Ok(Self { observer })
    }

    pub fn watch(&self, el: &Element) {
        self.observer.observe(el);
    }

    pub fn watch_all(&self, els: &[Element]) {
        els.iter().for_each(|el| self.watch(el));
    }
}
