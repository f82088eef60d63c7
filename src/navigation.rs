use std::rc::Rc;

use gloo::events::EventListener;
use web_sys::{Event, EventTarget};

use crate::dom;
use crate::error::AttachError;

/// Activation callbacks a carousel hands out to external controls.
#[derive(Clone)]
pub struct NavigationEntryPoints {
    pub previous: Rc<dyn Fn()>,
    pub next: Rc<dyn Fn()>,
}

/// Click wiring for a pair of previous/next triggers. Dropping it removes
/// both listeners.
pub struct NavigationControls {
    listeners: Vec<EventListener>,
}

impl NavigationControls {
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

pub fn attach_navigation(
    previous: &EventTarget,
    next: &EventTarget,
    entry_points: NavigationEntryPoints,
) -> NavigationControls {
    let NavigationEntryPoints {
        previous: on_previous,
        next: on_next,
    } = entry_points;
    let previous_listener = EventListener::new(previous, "click", move |_event: &Event| {
        on_previous();
    });
    let next_listener = EventListener::new(next, "click", move |_event: &Event| {
        on_next();
    });
    NavigationControls {
        listeners: vec![previous_listener, next_listener],
    }
}

pub fn attach_navigation_by_selector(
    previous_selector: &str,
    next_selector: &str,
    entry_points: NavigationEntryPoints,
) -> Result<NavigationControls, AttachError> {
    let previous = dom::query_html(previous_selector)?;
    let next = dom::query_html(next_selector)?;
    Ok(attach_navigation(&previous, &next, entry_points))
}
