use thiserror::Error;

/// Structured error type for geometry construction and application.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// The four given corners violate the equal-sides / equal-diagonals rule.
    #[error("corner points do not form a rectangle")]
    InvalidRectangle,

    /// The homogeneous `w` component collapsed to zero during the
    /// perspective divide.
    #[error("homogeneous w component is zero after matrix application")]
    DivisionByZero,

    /// A cyclic traversal was asked of a container that is too short.
    #[error("container has {provided} elements, need at least {required}")]
    InsufficientElements { required: usize, provided: usize },

    /// A dimension parameter is zero or otherwise out of range.
    #[error("{parameter} must be nonzero, got {value}")]
    InvalidDimension { parameter: &'static str, value: f64 },
}
