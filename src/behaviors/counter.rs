use gloo_timers::future::TimeoutFuture;
use log::{debug, info};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element};

use crate::config::{COUNTER_STEPS, COUNTER_THRESHOLD, COUNTER_TICK_MS};
use crate::dom;
use crate::error::Result;
use crate::observer::{VisibilityWatcher, Watch};

/// Reads a `data-target` the way the markup authors write it: leading
/// whitespace, an optional sign, then digits. Anything after the digits is
/// ignored.
pub fn parse_target(raw: &str) -> Option<i64> {
    let raw = raw.trim_start();
    let (sign, rest) = match raw.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, raw.strip_prefix('+').unwrap_or(raw)),
    };
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse::<i64>().ok().map(|n| sign * n)
}

pub fn counter_step(target: i64) -> i64 {
    if target <= 0 {
        return 1;
    }
    ((target + COUNTER_STEPS - 1) / COUNTER_STEPS).max(1)
}

/// The values a counter displays, one per tick. Always ends on `target`.
#[derive(Debug, Clone)]
pub struct CountUp {
    current: i64,
    target: i64,
    step: i64,
    done: bool,
}

impl CountUp {
    pub fn new(target: i64) -> Self {
        Self {
            current: 0,
            target,
            step: counter_step(target),
            done: false,
        }
    }
}

impl Iterator for CountUp {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        if self.done {
            return None;
        }
        self.current = self.current.saturating_add(self.step);
        if self.current >= self.target {
            self.current = self.target;
            self.done = true;
        }
        Some(self.current)
    }
}

fn animate(el: Element) {
    let raw = el.get_attribute("data-target").unwrap_or_default();
    let Some(target) = parse_target(&raw) else {
        debug!("Counter with unreadable data-target {:?}", raw);
        return;
    };

    spawn_local(async move {
        for value in CountUp::new(target) {
            TimeoutFuture::new(COUNTER_TICK_MS).await;
            el.set_text_content(Some(&value.to_string()));
        }
    });
}

pub fn install(document: &Document) -> Result<()> {
    let counters = dom::select_all(document, ".stat__num[data-target]")?;
    if counters.is_empty() {
        debug!("No stat counters on the page");
        return Ok(());
    }

    let watcher = VisibilityWatcher::new(COUNTER_THRESHOLD, None, Watch::Once, |el, _| animate(el.clone()))?;
    watcher.watch_all(&counters);

    info!("Counters watching {} stats", counters.len());
    Ok(())
}
