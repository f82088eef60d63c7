use slide_carousel_core::{CarouselConfig, InputModality, SlideMetrics, SlideSet};
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlElement, MouseEvent, TouchEvent};

use crate::error::AttachError;

pub const CONFIG_ATTRIBUTE: &str = "data-carousel";

pub fn query_html(selector: &str) -> Result<HtmlElement, AttachError> {
    let window = web_sys::window().ok_or(AttachError::NoWindow)?;
    let document = window.document().ok_or(AttachError::NoDocument)?;
    let element = document
        .query_selector(selector)?
        .ok_or_else(|| AttachError::MissingElement {
            selector: selector.to_string(),
        })?;
    element
        .dyn_into::<HtmlElement>()
        .map_err(|_| AttachError::NotHtmlElement {
            selector: selector.to_string(),
        })
}

/// Reads the optional JSON config attribute. Missing or blank means defaults.
pub fn read_config(element: &Element) -> Result<CarouselConfig, AttachError> {
    let Some(raw) = element.get_attribute(CONFIG_ATTRIBUTE) else {
        return Ok(CarouselConfig::default());
    };
    if raw.trim().is_empty() {
        return Ok(CarouselConfig::default());
    }
    let config: CarouselConfig = serde_json::from_str(&raw)?;
    config.validate()?;
    Ok(config)
}

pub fn slide_metrics(element: &HtmlElement) -> SlideMetrics {
    SlideMetrics::new(element.offset_left() as f64, element.offset_width() as f64)
}

/// Builds the slide set from the strip's children, centering each one inside
/// `viewport`. Children that are not html elements are skipped.
pub fn collect_slides(strip: &Element, viewport: &HtmlElement) -> SlideSet<HtmlElement> {
    let viewport_width = viewport.offset_width() as f64;
    let children = strip.children();
    let mut elements = Vec::with_capacity(children.length() as usize);
    for idx in 0..children.length() {
        let Some(child) = children.item(idx) else {
            continue;
        };
        match child.dyn_into::<HtmlElement>() {
            Ok(element) => elements.push(element),
            Err(_) => gloo::console::warn!("carousel: skipping non-html slide", idx),
        }
    }
    SlideSet::build(
        elements
            .into_iter()
            .map(|element| (slide_metrics(&element), element)),
        viewport_width,
    )
}

/// Horizontal pointer position of a mouse event or of the first changed
/// touch of a touch event.
pub fn pointer_x(event: &Event) -> Option<(InputModality, f64)> {
    if let Some(event) = event.dyn_ref::<MouseEvent>() {
        return Some((InputModality::Mouse, event.client_x() as f64));
    }
    if let Some(event) = event.dyn_ref::<TouchEvent>() {
        let touch = event.changed_touches().get(0)?;
        return Some((InputModality::Touch, touch.client_x() as f64));
    }
    None
}

pub fn translate_x(offset: f64) -> String {
    format!("translate3d({offset}px, 0, 0)")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translate_formats_pixels() {
        assert_eq!(translate_x(-400.0), "translate3d(-400px, 0, 0)");
        assert_eq!(translate_x(12.5), "translate3d(12.5px, 0, 0)");
    }
}
