use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo::events::{EventListener, EventListenerOptions};
use gloo::timers::callback::Timeout;
use slide_carousel_core::{
    Carousel, CarouselConfig, DragOutcome, IndexTriple, InputModality, SettleTimer,
};
use web_sys::{Event, HtmlElement, Window};

use crate::dom;
use crate::error::AttachError;
use crate::navigation::NavigationEntryPoints;
use crate::surface::DomStrip;

const START_EVENTS: [(&str, InputModality); 2] = [
    ("mousedown", InputModality::Mouse),
    ("touchstart", InputModality::Touch),
];
const END_EVENTS: [&str; 3] = ["mouseup", "touchend", "touchcancel"];

/// Only mouse-down cancels the default action, so touch-start stays passive.
fn start_listener_options(modality: InputModality) -> EventListenerOptions {
    match modality {
        InputModality::Mouse => EventListenerOptions::enable_prevent_default(),
        InputModality::Touch => EventListenerOptions::default(),
    }
}

struct CarouselView {
    wrapper: HtmlElement,
    core: RefCell<Carousel<DomStrip>>,
    move_listener: RefCell<Option<(InputModality, EventListener)>>,
    listeners: RefCell<Vec<EventListener>>,
    settle: RefCell<SettleTimer>,
    settle_timer: RefCell<Option<Timeout>>,
}

/// A carousel attached to a wrapper element and its slide strip.
///
/// Listeners hold weak references to the carousel, so dropping the handle
/// (or calling [`SlideCarousel::detach`]) removes every listener it
/// registered, including the window `resize` listener, and cancels a pending
/// rebuild.
pub struct SlideCarousel {
    view: Rc<CarouselView>,
}

impl SlideCarousel {
    pub fn attach(wrapper_selector: &str, slide_selector: &str) -> Result<Self, AttachError> {
        let wrapper = dom::query_html(wrapper_selector)?;
        let strip = dom::query_html(slide_selector)?;
        Self::attach_elements(wrapper, strip)
    }

    /// Attaches using the `data-carousel` config on `wrapper`, if any.
    pub fn attach_elements(wrapper: HtmlElement, strip: HtmlElement) -> Result<Self, AttachError> {
        let config = dom::read_config(&wrapper)?;
        Self::attach_with_config(wrapper, strip, config)
    }

    pub fn attach_with_config(
        wrapper: HtmlElement,
        strip: HtmlElement,
        config: CarouselConfig,
    ) -> Result<Self, AttachError> {
        let window = web_sys::window().ok_or(AttachError::NoWindow)?;
        let slides = dom::collect_slides(&strip, &wrapper);
        let settle = SettleTimer::new(config.settle_delay_ms);
        let surface = DomStrip::new(strip, &config.active_class, &config.transition);
        let core = Carousel::new(surface, slides, config)?;
        let slide_count = core.slides().len() as u32;
        let active = core.active_index() as u32;

        let view = Rc::new(CarouselView {
            wrapper,
            core: RefCell::new(core),
            move_listener: RefCell::new(None),
            listeners: RefCell::new(Vec::new()),
            settle: RefCell::new(settle),
            settle_timer: RefCell::new(None),
        });
        view.install_listeners(&window);
        gloo::console::log!("carousel: attached", slide_count, "slides, active", active);
        Ok(Self { view })
    }

    pub fn index(&self) -> IndexTriple {
        self.view.core.borrow().index()
    }

    pub fn active_index(&self) -> usize {
        self.view.core.borrow().active_index()
    }

    /// Offset currently applied to the strip when no drag is in progress.
    pub fn offset(&self) -> f64 {
        self.view.core.borrow().baseline()
    }

    pub fn slide_count(&self) -> usize {
        self.view.core.borrow().slides().len()
    }

    pub fn is_dragging(&self) -> bool {
        self.view.core.borrow().gesture().is_dragging()
    }

    pub fn activate(&self, index: usize) -> bool {
        self.view.activate(index)
    }

    pub fn activate_next(&self) -> Option<usize> {
        self.view.activate_next()
    }

    pub fn activate_previous(&self) -> Option<usize> {
        self.view.activate_previous()
    }

    /// Re-reads layout metrics right away instead of waiting for a resize.
    pub fn rebuild(&self) {
        self.view.settle.borrow_mut().cancel();
        self.view.settle_timer.borrow_mut().take();
        self.view.rebuild();
    }

    /// Previous/next activation callbacks for external controls.
    pub fn entry_points(&self) -> NavigationEntryPoints {
        let previous_view = Rc::downgrade(&self.view);
        let next_view = Rc::downgrade(&self.view);
        NavigationEntryPoints {
            previous: Rc::new(move || {
                if let Some(view) = previous_view.upgrade() {
                    view.activate_previous();
                }
            }),
            next: Rc::new(move || {
                if let Some(view) = next_view.upgrade() {
                    view.activate_next();
                }
            }),
        }
    }

    pub fn detach(self) {
        gloo::console::log!("carousel: detached");
    }
}

impl CarouselView {
    fn install_listeners(self: &Rc<Self>, window: &Window) {
        let mut listeners = Vec::with_capacity(START_EVENTS.len() + END_EVENTS.len() + 1);
        for (event_type, modality) in START_EVENTS {
            let view = Rc::downgrade(self);
            listeners.push(EventListener::new_with_options(
                &self.wrapper,
                event_type,
                start_listener_options(modality),
                move |event: &Event| {
                    if let Some(view) = view.upgrade() {
                        view.on_start(event);
                    }
                },
            ));
        }
        for event_type in END_EVENTS {
            let view = Rc::downgrade(self);
            listeners.push(EventListener::new(
                &self.wrapper,
                event_type,
                move |event: &Event| {
                    if let Some(view) = view.upgrade() {
                        view.on_end(event);
                    }
                },
            ));
        }
        let view = Rc::downgrade(self);
        listeners.push(EventListener::new(window, "resize", move |_event: &Event| {
            if let Some(view) = view.upgrade() {
                view.on_resize();
            }
        }));
        *self.listeners.borrow_mut() = listeners;
    }

    fn on_start(self: &Rc<Self>, event: &Event) {
        let Some((modality, x)) = dom::pointer_x(event) else {
            return;
        };
        if modality == InputModality::Mouse {
            event.prevent_default();
        }
        self.core.borrow_mut().begin_drag(modality, x);
        self.listen_moves(modality);
    }

    /// Move events are only observed between a start and an end of the same
    /// modality.
    fn listen_moves(self: &Rc<Self>, modality: InputModality) {
        let view: Weak<CarouselView> = Rc::downgrade(self);
        let listener = EventListener::new(
            &self.wrapper,
            modality.move_event(),
            move |event: &Event| {
                if let Some(view) = view.upgrade() {
                    view.on_move(modality, event);
                }
            },
        );
        *self.move_listener.borrow_mut() = Some((modality, listener));
    }

    fn on_move(&self, modality: InputModality, event: &Event) {
        let Some((event_modality, x)) = dom::pointer_x(event) else {
            return;
        };
        if event_modality != modality {
            return;
        }
        self.core.borrow_mut().drag_move(modality, x);
    }

    fn on_end(&self, event: &Event) {
        let event_type = event.type_();
        let Some(modality) = InputModality::from_event_type(&event_type) else {
            return;
        };
        {
            let mut slot = self.move_listener.borrow_mut();
            if matches!(slot.as_ref(), Some((listening, _)) if *listening == modality) {
                slot.take();
            }
        }
        if event_type == "touchcancel" {
            self.core.borrow_mut().cancel_drag(modality);
            return;
        }
        let outcome = self.core.borrow_mut().end_drag(modality);
        match outcome {
            Some(DragOutcome::Next(index)) | Some(DragOutcome::Previous(index)) => {
                gloo::console::log!("carousel: slide", index as u32);
            }
            Some(DragOutcome::Stay(_)) | None => {}
        }
    }

    fn on_resize(self: &Rc<Self>) {
        let ticket = self.settle.borrow_mut().signal();
        let view = Rc::downgrade(self);
        *self.settle_timer.borrow_mut() = Some(Timeout::new(ticket.delay_ms, move || {
            if let Some(view) = view.upgrade() {
                view.on_settled(ticket.generation);
            }
        }));
    }

    fn on_settled(&self, generation: u64) {
        self.settle_timer.borrow_mut().take();
        if !self.settle.borrow_mut().fire(generation) {
            return;
        }
        self.rebuild();
    }

    fn rebuild(&self) {
        let mut core = self.core.borrow_mut();
        let slides = dom::collect_slides(core.surface().element(), &self.wrapper);
        let slide_count = slides.len() as u32;
        match core.rebuild(slides) {
            Ok(active) => {
                gloo::console::log!("carousel: rebuilt", slide_count, "slides, active", active as u32);
            }
            Err(err) => {
                gloo::console::warn!("carousel: rebuild skipped", err.to_string());
            }
        }
    }

    fn activate(&self, index: usize) -> bool {
        let activated = self.core.borrow_mut().activate(index).is_some();
        if activated {
            gloo::console::log!("carousel: slide", index as u32);
        }
        activated
    }

    fn activate_next(&self) -> Option<usize> {
        let next = self.core.borrow_mut().activate_next();
        if let Some(index) = next {
            gloo::console::log!("carousel: slide", index as u32);
        }
        next
    }

    fn activate_previous(&self) -> Option<usize> {
        let previous = self.core.borrow_mut().activate_previous();
        if let Some(index) = previous {
            gloo::console::log!("carousel: slide", index as u32);
        }
        previous
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_mouse_start_listener_can_prevent_default() {
        assert!(!start_listener_options(InputModality::Mouse).passive);
        assert!(start_listener_options(InputModality::Touch).passive);
    }
}
