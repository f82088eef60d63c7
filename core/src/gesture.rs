use crate::geometry::IndexTriple;

/// Input stream a drag was started from. Moves and ends are only honoured
/// from the same stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputModality {
    Mouse,
    Touch,
}

impl InputModality {
    pub fn move_event(self) -> &'static str {
        match self {
            InputModality::Mouse => "mousemove",
            InputModality::Touch => "touchmove",
        }
    }

    pub fn from_event_type(value: &str) -> Option<Self> {
        match value {
            "mousedown" | "mousemove" | "mouseup" => Some(InputModality::Mouse),
            "touchstart" | "touchmove" | "touchend" | "touchcancel" => Some(InputModality::Touch),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragState {
    pub modality: InputModality,
    pub baseline_offset: f64,
    pub start_x: f64,
    pub movement: f64,
    pub committed_offset: f64,
}

impl DragState {
    pub fn start(modality: InputModality, start_x: f64, baseline_offset: f64) -> Self {
        Self {
            modality,
            baseline_offset,
            start_x,
            movement: 0.0,
            committed_offset: baseline_offset,
        }
    }

    /// Updates the movement for a pointer at `x` and returns the live strip
    /// position.
    pub fn track(&mut self, x: f64, sensitivity: f64) -> f64 {
        self.movement = (self.start_x - x) * sensitivity;
        self.committed_offset = self.baseline_offset - self.movement;
        self.committed_offset
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Gesture {
    Idle,
    Dragging(DragState),
}

impl Gesture {
    pub fn is_dragging(&self) -> bool {
        matches!(self, Gesture::Dragging(_))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragOutcome {
    Next(usize),
    Previous(usize),
    Stay(usize),
}

impl DragOutcome {
    pub fn index(self) -> usize {
        match self {
            DragOutcome::Next(index) | DragOutcome::Previous(index) | DragOutcome::Stay(index) => {
                index
            }
        }
    }
}

/// Positive movement means the pointer travelled left, towards the next
/// slide. Missing neighbours fall back to the active slide.
pub fn decide_outcome(movement: f64, threshold: f64, index: IndexTriple) -> DragOutcome {
    match (index.previous, index.next) {
        (_, Some(next)) if movement > threshold => DragOutcome::Next(next),
        (Some(previous), _) if movement < -threshold => DragOutcome::Previous(previous),
        _ => DragOutcome::Stay(index.active),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_amplifies_pointer_travel() {
        let mut drag = DragState::start(InputModality::Mouse, 500.0, -400.0);
        let position = drag.track(400.0, 1.6);
        assert!((drag.movement - 160.0).abs() < 1e-9);
        assert!((position + 560.0).abs() < 1e-9);
        assert_eq!(drag.committed_offset, position);
    }

    #[test]
    fn start_resets_transients() {
        let drag = DragState::start(InputModality::Touch, 10.0, -200.0);
        assert_eq!(drag.movement, 0.0);
        assert_eq!(drag.committed_offset, -200.0);
    }

    #[test]
    fn outcome_respects_threshold() {
        let index = IndexTriple::derive(2, 5);
        assert_eq!(decide_outcome(120.0, 120.0, index), DragOutcome::Stay(2));
        assert_eq!(decide_outcome(-120.0, 120.0, index), DragOutcome::Stay(2));
        assert_eq!(decide_outcome(120.5, 120.0, index), DragOutcome::Next(3));
        assert_eq!(decide_outcome(-120.5, 120.0, index), DragOutcome::Previous(1));
    }

    #[test]
    fn outcome_refuses_overscroll_at_ends() {
        assert_eq!(
            decide_outcome(-500.0, 120.0, IndexTriple::derive(0, 5)),
            DragOutcome::Stay(0)
        );
        assert_eq!(
            decide_outcome(500.0, 120.0, IndexTriple::derive(4, 5)),
            DragOutcome::Stay(4)
        );
    }

    #[test]
    fn modality_from_event_type() {
        assert_eq!(InputModality::from_event_type("mouseup"), Some(InputModality::Mouse));
        assert_eq!(InputModality::from_event_type("touchcancel"), Some(InputModality::Touch));
        assert_eq!(InputModality::from_event_type("click"), None);
    }
}
