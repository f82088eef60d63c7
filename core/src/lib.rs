pub mod carousel;
pub mod config;
pub mod error;
pub mod geometry;
pub mod gesture;
pub mod settle;

pub use carousel::{Carousel, StripSurface};
pub use config::CarouselConfig;
pub use error::SetupError;
pub use geometry::{centering_offset, IndexTriple, Slide, SlideMetrics, SlideSet};
pub use gesture::{decide_outcome, DragOutcome, DragState, Gesture, InputModality};
pub use settle::{SettleTicket, SettleTimer};
