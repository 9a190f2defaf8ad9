use std::cell::Cell;
use std::rc::Rc;

use log::{debug, info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, Window};

use crate::config::PARALLAX_FACTOR;
use crate::dom;
use crate::error::Result;

pub fn blob_shift(scroll_y: f64, speed: f64) -> f64 {
    scroll_y * speed * PARALLAX_FACTOR
}

pub fn parse_speed(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|speed| speed.is_finite())
}

/// The "already scheduled" guard shared by every scroll/resize listener.
#[derive(Clone, Default)]
pub struct FrameThrottle {
    scheduled: Rc<Cell<bool>>,
}

impl FrameThrottle {
    /// Returns `true` when the caller is the one that must schedule the frame.
    pub fn claim(&self) -> bool {
        !self.scheduled.replace(true)
    }

    pub fn release(&self) {
        self.scheduled.set(false);
    }
}

struct Blob {
    el: HtmlElement,
    speed: f64,
}

fn update_blobs(window: &Window, blobs: &[Blob]) {
    let scroll_y = dom::scroll_y(window);
    for blob in blobs {
        let transform = format!("translateY({}px)", blob_shift(scroll_y, blob.speed));
        let _ = blob.el.style().set_property("transform", &transform);
    }
}

fn schedule(window: &Window, blobs: &Rc<Vec<Blob>>, throttle: &FrameThrottle) {
    if !throttle.claim() {
        return;
    }

    let frame = {
        let window = window.clone();
        let blobs = blobs.clone();
        let throttle = throttle.clone();
        Closure::once_into_js(move || {
            update_blobs(&window, &blobs);
            throttle.release();
        })
    };

    if let Err(err) = window.request_animation_frame(frame.unchecked_ref()) {
        warn!("requestAnimationFrame failed: {:?}", err);
        throttle.release();
    }
}

pub fn install(window: &Window, document: &Document) -> Result<()> {
    let blobs: Vec<Blob> = dom::select_all(document, ".blob[data-speed]")?
        .into_iter()
        .filter_map(|el| {
            let raw = el.get_attribute("data-speed").unwrap_or_default();
            let Some(speed) = parse_speed(&raw) else {
                debug!("Ignoring blob with data-speed {:?}", raw);
                return None;
            };
            let el = el.dyn_into::<HtmlElement>().ok()?;
            Some(Blob { el, speed })
        })
        .collect();

    if blobs.is_empty() {
        debug!("No parallax blobs on the page");
        return Ok(());
    }

    let blobs = Rc::new(blobs);
    let throttle = FrameThrottle::default();

    update_blobs(window, &blobs);

    for event in ["scroll", "resize"] {
        let window_for_frame = window.clone();
        let blobs = blobs.clone();
        let throttle = throttle.clone();
        dom::listen_passive(window, event, move |_| schedule(&window_for_frame, &blobs, &throttle))?;
    }

    info!("Parallax installed for {} blobs", blobs.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shift_scales_with_scroll_and_speed() {
        assert_eq!(blob_shift(0.0, 0.4), 0.0);
        assert!((blob_shift(100.0, 0.5) - 35.0).abs() < 1e-9);
        assert!((blob_shift(200.0, -0.2) + 28.0).abs() < 1e-9);
    }

    #[test]
    fn speed_must_be_a_finite_number() {
        assert_eq!(parse_speed("0.3"), Some(0.3));
        assert_eq!(parse_speed(" -0.15 "), Some(-0.15));
        assert_eq!(parse_speed(""), None);
        assert_eq!(parse_speed("fast"), None);
        assert_eq!(parse_speed("inf"), None);
    }

    #[test]
    fn throttle_hands_out_one_frame_until_released() {
        let throttle = FrameThrottle::default();
        let listener_copy = throttle.clone();

        assert!(throttle.claim());
        assert!(!throttle.claim());
        assert!(!listener_copy.claim());

        listener_copy.release();
        assert!(throttle.claim());
    }
}
