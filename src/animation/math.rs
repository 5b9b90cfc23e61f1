//! Math helpers written as node expressions
//!
//! Everything here is composed from the operators in [`super::ops`] rather
//! than computed directly, so the helpers describe the same expression a
//! reactive graph would.

use super::node::{AnimatedValue, Scalar};
use super::ops::{
    abs, add, and, atan, cond, divide, eq, floor, greater_or_eq, greater_than, less_or_eq,
    less_than, max, min, multiply, pow, round, sub,
};
use crate::constants::{HALF_TURN, MAX_DECIMALS, QUARTER_TURN};
use crate::{AnimationError, Result};
use std::f64::consts::{FRAC_PI_4, PI};

/// Two-argument arctangent in radians, within `(-π, π]`.
///
/// `y` comes first. Quadrants are resolved from the signs of both operands,
/// so `x = -0.0` lands on the vertical axis like `x = 0.0`. `atan2(0, 0)` is
/// `0` and NaN operands yield NaN.
pub fn atan2(y: impl Scalar, x: impl Scalar) -> AnimatedValue {
    let y = AnimatedValue::from_node(y);
    let x = AnimatedValue::from_node(x);

    let angle = atan(divide(&y, &x));
    let left_half = cond(
        less_than(&y, 0),
        sub(&angle, HALF_TURN),
        add(&angle, HALF_TURN),
    );

    // y / x is undefined when both are infinite
    let both_infinite = and(
        eq(abs(&x), f64::INFINITY),
        eq(abs(&y), f64::INFINITY),
    );
    let diagonal = cond(greater_than(&x, 0), FRAC_PI_4, 3.0 * FRAC_PI_4);
    let diagonal = cond(less_than(&y, 0), multiply(&diagonal, -1), &diagonal);

    // falls back to y itself so a NaN y stays NaN
    let vertical = cond(
        eq(&y, 0),
        0,
        cond(
            greater_than(&y, 0),
            QUARTER_TURN,
            cond(less_than(&y, 0), -QUARTER_TURN, &y),
        ),
    );

    cond(
        both_infinite,
        diagonal,
        cond(
            greater_than(&x, 0),
            &angle,
            cond(
                less_than(&x, 0),
                left_half,
                cond(eq(&x, 0), vertical, &angle),
            ),
        ),
    )
}

pub fn to_rad(degrees: impl Scalar) -> AnimatedValue {
    multiply(degrees, PI / 180.0)
}

pub fn to_deg(radians: impl Scalar) -> AnimatedValue {
    multiply(radians, 180.0 / PI)
}

/// Restricts `value` to `[lower, upper]`
pub fn clamp(value: impl Scalar, lower: impl Scalar, upper: impl Scalar) -> AnimatedValue {
    let raised = max([value.current(), lower.current()]);
    min([raised.value(), upper.current()])
}

/// `1` when `value` lies between `lower` and `upper`
pub fn between(
    value: impl Scalar,
    lower: impl Scalar,
    upper: impl Scalar,
    inclusive: bool,
) -> AnimatedValue {
    let value = value.current();
    if inclusive {
        and(greater_or_eq(value, lower), less_or_eq(value, upper))
    } else {
        and(greater_than(value, lower), less_than(value, upper))
    }
}

/// `1` when `a` and `b` differ by less than `precision`
pub fn approximates(a: impl Scalar, b: impl Scalar, precision: impl Scalar) -> AnimatedValue {
    less_than(abs(sub(a, b)), precision)
}

/// Fractional part, always in `[0, 1)` for finite input
pub fn fract(x: impl Scalar) -> AnimatedValue {
    let x = x.current();
    sub(x, floor(x))
}

/// Rounds `value` to `decimals` places, half toward positive infinity.
///
/// Values too large to scale are already integral and come back unchanged.
pub fn round_to(value: impl Scalar, decimals: u32) -> Result<AnimatedValue> {
    if decimals > MAX_DECIMALS {
        return Err(AnimationError::InvalidPrecision(decimals));
    }
    let value = value.current();
    let factor = pow(10, decimals);
    let scaled = multiply(value, &factor);
    if !scaled.value().is_finite() {
        return Ok(AnimatedValue::new(value));
    }
    Ok(divide(round(&scaled), &factor))
}
