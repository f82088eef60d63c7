//! Drag and touch slide carousel for the browser.
//!
//! [`SlideCarousel`] binds the platform-free state machine from
//! `slide_carousel_core` to a wrapper element and its slide strip.

pub mod carousel;
pub mod dom;
pub mod error;
pub mod navigation;
pub mod surface;

pub use carousel::SlideCarousel;
pub use error::AttachError;
pub use navigation::{
    attach_navigation, attach_navigation_by_selector, NavigationControls, NavigationEntryPoints,
};
pub use slide_carousel_core::{CarouselConfig, DragOutcome, IndexTriple, InputModality, SetupError};
