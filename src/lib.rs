//! # animath
//!
//! Trigonometric and coordinate helpers for UI animation code.
//!
//! The helpers are written against an animated-value API (`add`, `sub`,
//! `cond`, ...) so they can be composed the same way a reactive animation
//! graph would be. This crate evaluates that API eagerly: every operator
//! reads the current number of its operands and returns a fresh
//! [`AnimatedValue`] holding the result.

pub mod animation;
pub mod core;
pub mod prelude;
pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    config::{EvaluationConfig, PrecisionProfile},
    geo::{Point, PolarPoint},
};

pub use crate::animation::{
    coordinates::{
        canvas_to_cartesian, canvas_to_polar, cartesian_to_canvas, cartesian_to_polar,
        polar_to_canvas, polar_to_cartesian, AnimatedPoint, AnimatedPolar,
    },
    math::atan2,
    node::{AnimatedValue, Node, Scalar, Value},
};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, AnimationError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum AnimationError {
    #[error("block has no nodes to evaluate")]
    EmptyBlock,

    #[error("operator `{0}` needs at least one operand")]
    EmptyOperands(&'static str),

    #[error("invalid precision: {0} decimals (at most {max} supported)", max = constants::MAX_DECIMALS)]
    InvalidPrecision(u32),

    #[error("invalid tolerance: {0}")]
    InvalidTolerance(f64),

    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),
}

/// Error type alias for convenience
pub type Error = AnimationError;
