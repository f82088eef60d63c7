use crate::config::CarouselConfig;
use crate::error::SetupError;
use crate::geometry::{IndexTriple, SlideSet};
use crate::gesture::{decide_outcome, DragOutcome, DragState, Gesture, InputModality};

/// Visual side of a carousel: the strip transform, its transition and the
/// active marker on the slides.
pub trait StripSurface {
    type Element;

    fn set_transform(&self, offset: f64);
    fn set_transition(&self, enabled: bool);
    /// Exactly one slide, `active`, carries the marker afterwards.
    fn mark_active(&self, slides: &SlideSet<Self::Element>, active: usize);
}

/// Slide set, index triple and drag state of one carousel.
pub struct Carousel<S: StripSurface> {
    surface: S,
    config: CarouselConfig,
    slides: SlideSet<S::Element>,
    index: IndexTriple,
    baseline: f64,
    gesture: Gesture,
}

impl<S: StripSurface> Carousel<S> {
    pub fn new(
        surface: S,
        slides: SlideSet<S::Element>,
        config: CarouselConfig,
    ) -> Result<Self, SetupError> {
        config.validate()?;
        if slides.is_empty() {
            return Err(SetupError::EmptySlideSet);
        }
        let initial = config.initial_index.min(slides.len() - 1);
        let mut carousel = Self {
            index: IndexTriple::derive(initial, slides.len()),
            surface,
            config,
            slides,
            baseline: 0.0,
            gesture: Gesture::Idle,
        };
        carousel.surface.set_transition(true);
        carousel.activate(initial);
        Ok(carousel)
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn slides(&self) -> &SlideSet<S::Element> {
        &self.slides
    }

    pub fn index(&self) -> IndexTriple {
        self.index
    }

    pub fn active_index(&self) -> usize {
        self.index.active
    }

    /// Offset the next drag starts from.
    pub fn baseline(&self) -> f64 {
        self.baseline
    }

    pub fn gesture(&self) -> &Gesture {
        &self.gesture
    }

    /// Centers slide `index`. Returns its offset, or `None` when the index
    /// is outside the slide set.
    pub fn activate(&mut self, index: usize) -> Option<f64> {
        let offset = self.slides.offset(index)?;
        self.surface.set_transform(offset);
        self.index = IndexTriple::derive(index, self.slides.len());
        self.baseline = offset;
        self.surface.mark_active(&self.slides, index);
        Some(offset)
    }

    pub fn activate_next(&mut self) -> Option<usize> {
        let next = self.index.next?;
        self.activate(next).map(|_| next)
    }

    pub fn activate_previous(&mut self) -> Option<usize> {
        let previous = self.index.previous?;
        self.activate(previous).map(|_| previous)
    }

    /// Starts a drag at pointer `x`. A drag already in progress is replaced.
    pub fn begin_drag(&mut self, modality: InputModality, x: f64) {
        self.gesture = Gesture::Dragging(DragState::start(modality, x, self.baseline));
        self.surface.set_transition(false);
    }

    /// Follows the pointer. Returns the live strip position, or `None` when
    /// no drag of `modality` is in progress.
    pub fn drag_move(&mut self, modality: InputModality, x: f64) -> Option<f64> {
        let Gesture::Dragging(drag) = &mut self.gesture else {
            return None;
        };
        if drag.modality != modality {
            return None;
        }
        let position = drag.track(x, self.config.sensitivity);
        self.surface.set_transform(position);
        Some(position)
    }

    /// Finishes a drag of `modality` and snaps to the chosen slide.
    pub fn end_drag(&mut self, modality: InputModality) -> Option<DragOutcome> {
        let Gesture::Dragging(drag) = self.gesture else {
            return None;
        };
        if drag.modality != modality {
            return None;
        }
        self.gesture = Gesture::Idle;
        self.surface.set_transition(true);
        let outcome = decide_outcome(drag.movement, self.config.swipe_threshold, self.index);
        self.activate(outcome.index());
        Some(outcome)
    }

    /// Abandons a drag of `modality` without committing to a neighbour and
    /// recenters the active slide.
    pub fn cancel_drag(&mut self, modality: InputModality) -> Option<usize> {
        let Gesture::Dragging(drag) = self.gesture else {
            return None;
        };
        if drag.modality != modality {
            return None;
        }
        self.gesture = Gesture::Idle;
        self.surface.set_transition(true);
        let active = self.index.active;
        self.activate(active);
        Some(active)
    }

    /// Replaces the slide set after a layout change and recenters the active
    /// slide, clamped to the new set.
    pub fn rebuild(&mut self, slides: SlideSet<S::Element>) -> Result<usize, SetupError> {
        if slides.is_empty() {
            return Err(SetupError::EmptySlideSet);
        }
        self.slides = slides;
        let active = self.index.active.min(self.slides.len() - 1);
        if let Some(offset) = self.activate(active) {
            if let Gesture::Dragging(drag) = &mut self.gesture {
                drag.baseline_offset = offset;
            }
        }
        Ok(active)
    }
}
