use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

// Navigation
pub const SCROLLED_AFTER_PX: f64 = 60.0;
pub const NAV_SECTION_THRESHOLD: f64 = 0.4;

// Parallax blobs move at this fraction of their data-speed
pub const PARALLAX_FACTOR: f64 = 0.7;

// Reveal-on-scroll
pub const REVEAL_THRESHOLD: f64 = 0.12;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -60px 0px";
pub const REVEAL_SELECTOR: &str = ".project-card, .service-card, .process-step, .about__text, .about__portrait, .contact__info, .contact__form, .section__header";

// Stat counters
pub const COUNTER_THRESHOLD: f64 = 0.5;
pub const COUNTER_STEPS: i64 = 40;
pub const COUNTER_TICK_MS: u32 = 40;

// Contact form
pub const CONTACT_SEND_DELAY_MS: u32 = 1_400;
pub const CONTACT_SUCCESS_VISIBLE_MS: u32 = 5_000;

pub const PROCESS_STEP_THRESHOLD: f64 = 0.5;
