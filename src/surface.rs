use slide_carousel_core::{SlideSet, StripSurface};
use web_sys::HtmlElement;

use crate::dom::translate_x;

/// Slide strip backed by real DOM nodes.
pub struct DomStrip {
    strip: HtmlElement,
    active_class: String,
    transition: String,
}

impl DomStrip {
    pub fn new(strip: HtmlElement, active_class: &str, transition: &str) -> Self {
        Self {
            strip,
            active_class: active_class.to_string(),
            transition: transition.to_string(),
        }
    }

    pub fn element(&self) -> &HtmlElement {
        &self.strip
    }
}

impl StripSurface for DomStrip {
    type Element = HtmlElement;

    fn set_transform(&self, offset: f64) {
        let _ = self
            .strip
            .style()
            .set_property("transform", &translate_x(offset));
    }

    fn set_transition(&self, enabled: bool) {
        let value = if enabled { self.transition.as_str() } else { "" };
        let _ = self.strip.style().set_property("transition", value);
    }

    fn mark_active(&self, slides: &SlideSet<HtmlElement>, active: usize) {
        for (idx, slide) in slides.iter().enumerate() {
            let classes = slide.element.class_list();
            let _ = if idx == active {
                classes.add_1(&self.active_class)
            } else {
                classes.remove_1(&self.active_class)
            };
        }
    }
}
