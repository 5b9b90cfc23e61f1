//! Animated values
//!
//! An [`AnimatedValue`] is a boxed scalar standing in for a node of a reactive
//! animation graph. Cloning a value clones the *handle*: every clone reads and
//! writes the same slot, the way every reference to a graph node observes the
//! same node.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// A shared, mutable numeric slot
#[derive(Clone)]
pub struct AnimatedValue {
    slot: Rc<Cell<f64>>,
}

/// Alias kept for code written against the `Value` constructor
pub type Value = AnimatedValue;

/// Alias kept for code written against the `Node` type
pub type Node = AnimatedValue;

impl AnimatedValue {
    /// Creates a value holding `value`
    pub fn new(value: f64) -> Self {
        Self {
            slot: Rc::new(Cell::new(value)),
        }
    }

    /// Creates an independent value initialised with the current number of
    /// `source`
    pub fn from_node(source: impl Scalar) -> Self {
        Self::new(source.current())
    }

    /// Current number held by the node
    pub fn value(&self) -> f64 {
        self.slot.get()
    }

    /// Replaces the number held by the node, visible through every handle
    pub fn set_value(&self, value: f64) {
        self.slot.set(value);
    }

    /// Whether both handles point at the same node
    pub fn ptr_eq(&self, other: &AnimatedValue) -> bool {
        Rc::ptr_eq(&self.slot, &other.slot)
    }

    pub fn is_truthy(&self) -> bool {
        truthy(self.value())
    }
}

impl Default for AnimatedValue {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl fmt::Debug for AnimatedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AnimatedValue").field(&self.value()).finish()
    }
}

impl fmt::Display for AnimatedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl From<f64> for AnimatedValue {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<i32> for AnimatedValue {
    fn from(value: i32) -> Self {
        Self::new(value as f64)
    }
}

impl From<&AnimatedValue> for AnimatedValue {
    fn from(value: &AnimatedValue) -> Self {
        value.clone()
    }
}

/// Anything an operator can read a current number from
pub trait Scalar {
    fn current(&self) -> f64;
}

impl Scalar for f64 {
    fn current(&self) -> f64 {
        *self
    }
}

impl Scalar for f32 {
    fn current(&self) -> f64 {
        *self as f64
    }
}

impl Scalar for i32 {
    fn current(&self) -> f64 {
        *self as f64
    }
}

impl Scalar for u32 {
    fn current(&self) -> f64 {
        *self as f64
    }
}

impl Scalar for AnimatedValue {
    fn current(&self) -> f64 {
        self.value()
    }
}

impl<T: Scalar + ?Sized> Scalar for &T {
    fn current(&self) -> f64 {
        (**self).current()
    }
}

/// Numeric truthiness: zero and NaN are falsy
pub(crate) fn truthy(value: f64) -> bool {
    value != 0.0 && !value.is_nan()
}

pub(crate) fn flag(value: bool) -> AnimatedValue {
    AnimatedValue::new(if value {
        crate::constants::TRUE
    } else {
        crate::constants::FALSE
    })
}
