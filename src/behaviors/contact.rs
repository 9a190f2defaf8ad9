use gloo_timers::future::TimeoutFuture;
use log::{debug, info};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

use crate::config::{CONTACT_SEND_DELAY_MS, CONTACT_SUCCESS_VISIBLE_MS};
use crate::dom;
use crate::error::Result;

const FIELD_SELECTOR: &str = "input,select,textarea";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitState {
    pub label: &'static str,
    pub disabled: bool,
}

impl SubmitState {
    pub const SENDING: SubmitState = SubmitState { label: "Sending…", disabled: true };
    pub const IDLE: SubmitState = SubmitState { label: "Send Message →", disabled: false };
}

/// Where a submission is. Nothing leaves the browser: `Sending` only waits
/// out a fake round trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Sending,
    Sent,
    Done,
}

impl Phase {
    /// `None` leaves the button alone, so a late `Done` from an earlier
    /// submission cannot re-enable a newer pending one.
    pub fn button(self) -> Option<SubmitState> {
        match self {
            Phase::Sending => Some(SubmitState::SENDING),
            Phase::Sent => Some(SubmitState::IDLE),
            Phase::Done => None,
        }
    }

    pub fn clears_fields(self) -> bool {
        self == Phase::Sent
    }

    /// Whether `#formSuccess` is shown once this phase is applied.
    pub fn shows_success(self) -> bool {
        self == Phase::Sent
    }

    /// The following phase and how long to wait before entering it.
    pub fn next(self) -> Option<(u32, Phase)> {
        match self {
            Phase::Sending => Some((CONTACT_SEND_DELAY_MS, Phase::Sent)),
            Phase::Sent => Some((CONTACT_SUCCESS_VISIBLE_MS, Phase::Done)),
            Phase::Done => None,
        }
    }
}

fn set_submit_state(button: Option<&Element>, state: SubmitState) {
    if let Some(button) = button {
        button.set_text_content(Some(state.label));
        let _ = button.toggle_attribute_with_force("disabled", state.disabled);
    }
}

fn clear_fields(form: &Element) {
    let Ok(fields) = dom::select_all_in(form, FIELD_SELECTOR) else {
        return;
    };
    for field in fields {
        if let Some(input) = field.dyn_ref::<HtmlInputElement>() {
            input.set_value("");
        } else if let Some(select) = field.dyn_ref::<HtmlSelectElement>() {
            select.set_value("");
        } else if let Some(textarea) = field.dyn_ref::<HtmlTextAreaElement>() {
            textarea.set_value("");
        }
    }
}

fn apply(phase: Phase, form: &Element, button: Option<&Element>, success: Option<&Element>) {
    if phase.clears_fields() {
        clear_fields(form);
    }
    if let Some(state) = phase.button() {
        set_submit_state(button, state);
    }
    if let Some(success) = success {
        let _ = dom::set_class(success, "visible", phase.shows_success());
    }
}

fn submit(form: Element, success: Option<Element>) {
    let button = form.query_selector(".btn").ok().flatten();
    let mut phase = Phase::Sending;
    if let Some(state) = phase.button() {
        set_submit_state(button.as_ref(), state);
    }

    spawn_local(async move {
        while let Some((delay, next)) = phase.next() {
            TimeoutFuture::new(delay).await;
            apply(next, &form, button.as_ref(), success.as_ref());
            if next == Phase::Sent {
                info!("Contact message accepted");
            }
            phase = next;
        }
    });
}

pub fn install(document: &Document) -> Result<()> {
    let Some(form) = document.get_element_by_id("contactForm") else {
        debug!("No #contactForm on the page");
        return Ok(());
    };
    let success = document.get_element_by_id("formSuccess");

    let target = form.clone();
    dom::listen(&target, "submit", move |event| {
        event.prevent_default();
        submit(form.clone(), success.clone());
    })?;

    info!("Contact form handler installed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timeline() -> Vec<(u32, Phase)> {
        let mut at = 0;
        let mut phase = Phase::Sending;
        let mut steps = vec![(at, phase)];
        while let Some((delay, next)) = phase.next() {
            at += delay;
            phase = next;
            steps.push((at, phase));
        }
        steps
    }

    #[test]
    fn submit_control_is_disabled_immediately() {
        assert_eq!(Phase::Sending.button(), Some(SubmitState::SENDING));
        assert!(SubmitState::SENDING.disabled);
        assert_eq!(SubmitState::SENDING.label, "Sending…");
        assert!(!Phase::Sending.clears_fields());
        assert!(!Phase::Sending.shows_success());
    }

    #[test]
    fn send_settles_after_the_delay_then_success_hides() {
        assert_eq!(
            timeline(),
            vec![(0, Phase::Sending), (1_400, Phase::Sent), (6_400, Phase::Done)]
        );
    }

    #[test]
    fn settling_clears_fields_reenables_and_shows_success() {
        assert!(Phase::Sent.clears_fields());
        assert!(Phase::Sent.shows_success());
        assert_eq!(Phase::Sent.button(), Some(SubmitState::IDLE));
        assert!(!SubmitState::IDLE.disabled);
        assert_eq!(SubmitState::IDLE.label, "Send Message →");
    }

    #[test]
    fn finishing_only_hides_success() {
        assert!(!Phase::Done.shows_success());
        assert!(!Phase::Done.clears_fields());
        assert_eq!(Phase::Done.button(), None);
        assert_eq!(Phase::Done.next(), None);
    }
}
