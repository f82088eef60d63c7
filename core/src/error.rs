#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SetupError {
    #[error("carousel needs at least one slide")]
    EmptySlideSet,
    #[error("sensitivity must be a positive number, got {0}")]
    InvalidSensitivity(f64),
    #[error("swipe threshold must not be negative, got {0}")]
    InvalidThreshold(f64),
    #[error("active class cannot be empty")]
    EmptyActiveClass,
}
