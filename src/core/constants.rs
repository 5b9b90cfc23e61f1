//! Numeric constants shared by the node helpers and the plain geometry types.

use std::f64::consts::PI;

/// Half turn, added or removed by `atan2` when `x` is negative.
pub const HALF_TURN: f64 = PI;

/// Quarter turn, the angle of the positive y axis.
pub const QUARTER_TURN: f64 = PI / 2.0;

/// Truthy value produced by comparison nodes.
pub const TRUE: f64 = 1.0;

/// Falsy value produced by comparison nodes.
pub const FALSE: f64 = 0.0;

/// Largest rounding precision an `f64` can honour meaningfully.
pub const MAX_DECIMALS: u32 = 15;

/// Decimals used by the `Standard` precision profile.
pub const DEFAULT_DECIMALS: u32 = 4;
