//! Prelude module for common animath types and operators
//!
//! This module re-exports the node type, the operator set and the helpers
//! for easy importing with `use animath::prelude::*;`

pub use crate::animation::{
    coordinates::{
        canvas_to_cartesian, canvas_to_polar, cartesian_to_canvas, cartesian_to_polar,
        polar_to_canvas, polar_to_cartesian, AnimatedPoint, AnimatedPolar,
    },
    math::{approximates, atan2, between, clamp, fract, round_to, to_deg, to_rad},
    node::{AnimatedValue, Node, Scalar, Value},
    ops::*,
    stateful::{acc, diff, Accumulator, Differ},
};

pub use crate::core::{
    config::{EvaluationConfig, PrecisionProfile},
    geo::{Point, PolarPoint},
};

pub use crate::{AnimationError, Result};
