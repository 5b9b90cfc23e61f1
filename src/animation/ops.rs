//! Eager animated-node operators
//!
//! Each operator reads the current number of its operands and wraps the
//! result in a new [`AnimatedValue`]. Comparisons and logical operators
//! represent truth as `1` and `0`.

use super::node::{flag, truthy, AnimatedValue, Scalar};
use crate::{AnimationError, Result};
use std::fmt::Display;

fn unary(a: impl Scalar, f: impl FnOnce(f64) -> f64) -> AnimatedValue {
    AnimatedValue::new(f(a.current()))
}

fn binary(a: impl Scalar, b: impl Scalar, f: impl FnOnce(f64, f64) -> f64) -> AnimatedValue {
    AnimatedValue::new(f(a.current(), b.current()))
}

pub fn add(a: impl Scalar, b: impl Scalar) -> AnimatedValue {
    binary(a, b, |a, b| a + b)
}

pub fn sub(a: impl Scalar, b: impl Scalar) -> AnimatedValue {
    binary(a, b, |a, b| a - b)
}

pub fn multiply(a: impl Scalar, b: impl Scalar) -> AnimatedValue {
    binary(a, b, |a, b| a * b)
}

pub fn divide(a: impl Scalar, b: impl Scalar) -> AnimatedValue {
    binary(a, b, |a, b| a / b)
}

/// Truncated remainder; the sign follows the dividend
pub fn modulo(a: impl Scalar, b: impl Scalar) -> AnimatedValue {
    binary(a, b, |a, b| a % b)
}

/// `powf`, except that a NaN exponent, or an infinite exponent on a base of
/// magnitude one, yields NaN
fn power(base: f64, exponent: f64) -> f64 {
    if exponent.is_nan() || (exponent.is_infinite() && base.abs() == 1.0) {
        f64::NAN
    } else {
        base.powf(exponent)
    }
}

pub fn pow(base: impl Scalar, exponent: impl Scalar) -> AnimatedValue {
    binary(base, exponent, power)
}

/// Left fold of `pow` over the operands: `pow_chain([a, b, c]) = (a^b)^c`
pub fn pow_chain<I>(operands: I) -> Result<AnimatedValue>
where
    I: IntoIterator,
    I::Item: Scalar,
{
    let mut operands = operands.into_iter();
    let first = operands
        .next()
        .ok_or(AnimationError::EmptyOperands("pow"))?
        .current();
    Ok(AnimatedValue::new(
        operands.fold(first, |acc, exponent| power(acc, exponent.current())),
    ))
}

pub fn sin(a: impl Scalar) -> AnimatedValue {
    unary(a, f64::sin)
}

pub fn cos(a: impl Scalar) -> AnimatedValue {
    unary(a, f64::cos)
}

pub fn tan(a: impl Scalar) -> AnimatedValue {
    unary(a, f64::tan)
}

pub fn asin(a: impl Scalar) -> AnimatedValue {
    unary(a, f64::asin)
}

pub fn acos(a: impl Scalar) -> AnimatedValue {
    unary(a, f64::acos)
}

pub fn atan(a: impl Scalar) -> AnimatedValue {
    unary(a, f64::atan)
}

pub fn sqrt(a: impl Scalar) -> AnimatedValue {
    unary(a, f64::sqrt)
}

pub fn exp(a: impl Scalar) -> AnimatedValue {
    unary(a, f64::exp)
}

pub fn floor(a: impl Scalar) -> AnimatedValue {
    unary(a, f64::floor)
}

pub fn ceil(a: impl Scalar) -> AnimatedValue {
    unary(a, f64::ceil)
}

/// Rounds half toward positive infinity, so `round(-2.5)` is `-2`
pub fn round(a: impl Scalar) -> AnimatedValue {
    unary(a, |v| {
        let lower = v.floor();
        if v - lower >= 0.5 {
            lower + 1.0
        } else {
            lower
        }
    })
}

pub fn abs(a: impl Scalar) -> AnimatedValue {
    unary(a, f64::abs)
}

/// Smallest operand; NaN if any operand is NaN, `+inf` when empty
pub fn min<I>(operands: I) -> AnimatedValue
where
    I: IntoIterator,
    I::Item: Scalar,
{
    AnimatedValue::new(operands.into_iter().fold(f64::INFINITY, |acc, v| {
        let v = v.current();
        if acc.is_nan() || v.is_nan() {
            f64::NAN
        } else {
            acc.min(v)
        }
    }))
}

/// Largest operand; NaN if any operand is NaN, `-inf` when empty
pub fn max<I>(operands: I) -> AnimatedValue
where
    I: IntoIterator,
    I::Item: Scalar,
{
    AnimatedValue::new(operands.into_iter().fold(f64::NEG_INFINITY, |acc, v| {
        let v = v.current();
        if acc.is_nan() || v.is_nan() {
            f64::NAN
        } else {
            acc.max(v)
        }
    }))
}

/// `a` when `a` is falsy, otherwise `b`
pub fn and(a: impl Scalar, b: impl Scalar) -> AnimatedValue {
    binary(a, b, |a, b| if truthy(a) { b } else { a })
}

/// `a` when `a` is truthy, otherwise `b`
pub fn or(a: impl Scalar, b: impl Scalar) -> AnimatedValue {
    binary(a, b, |a, b| if truthy(a) { a } else { b })
}

pub fn not(a: impl Scalar) -> AnimatedValue {
    flag(!truthy(a.current()))
}

pub fn eq(a: impl Scalar, b: impl Scalar) -> AnimatedValue {
    flag(a.current() == b.current())
}

pub fn neq(a: impl Scalar, b: impl Scalar) -> AnimatedValue {
    flag(a.current() != b.current())
}

pub fn less_than(a: impl Scalar, b: impl Scalar) -> AnimatedValue {
    flag(a.current() < b.current())
}

pub fn greater_than(a: impl Scalar, b: impl Scalar) -> AnimatedValue {
    flag(a.current() > b.current())
}

pub fn less_or_eq(a: impl Scalar, b: impl Scalar) -> AnimatedValue {
    flag(a.current() <= b.current())
}

pub fn greater_or_eq(a: impl Scalar, b: impl Scalar) -> AnimatedValue {
    flag(a.current() >= b.current())
}

/// Selects `if_true` when `test` is truthy, `if_false` otherwise.
///
/// Both branches are already evaluated by the time they are passed in; only
/// the selection happens here.
pub fn cond(test: impl Scalar, if_true: impl Scalar, if_false: impl Scalar) -> AnimatedValue {
    let selected = if truthy(test.current()) {
        if_true.current()
    } else {
        if_false.current()
    };
    AnimatedValue::new(selected)
}

/// Stores the current number of `value` into `node` and returns `node`
pub fn set(node: &AnimatedValue, value: impl Scalar) -> AnimatedValue {
    let value = value.current();

    #[cfg(feature = "debug")]
    log::trace!("set {} -> {}", node.value(), value);

    node.set_value(value);
    node.clone()
}

/// Evaluates to the last node of the block
pub fn block(nodes: &[AnimatedValue]) -> Result<AnimatedValue> {
    match nodes.last() {
        Some(last) => Ok(last.clone()),
        None => {
            #[cfg(feature = "debug")]
            log::warn!("empty block evaluated");

            Err(AnimationError::EmptyBlock)
        }
    }
}

/// Joins the current value of `a` with `b`, for debug labels
pub fn concat(a: impl Display, b: impl Display) -> String {
    format!("{a}{b}")
}

/// `1` when the current number is not NaN
pub fn defined(a: impl Scalar) -> AnimatedValue {
    flag(!a.current().is_nan())
}
