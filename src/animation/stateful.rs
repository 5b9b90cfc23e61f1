//! Nodes that keep state between evaluations
//!
//! In a reactive graph `acc` and `diff` are re-evaluated every frame. Here a
//! frame is an explicit call to `evaluate`, which reads the input node's
//! current number at that moment.

use super::node::AnimatedValue;

/// Running sum of an input node; see [`acc`]
#[derive(Debug, Clone)]
pub struct Accumulator {
    input: AnimatedValue,
    total: AnimatedValue,
}

/// Accumulates `input` every time the returned node is evaluated
pub fn acc(input: &AnimatedValue) -> Accumulator {
    Accumulator {
        input: input.clone(),
        total: AnimatedValue::new(0.0),
    }
}

impl Accumulator {
    /// Adds the input's current number to the total and returns the total
    pub fn evaluate(&self) -> AnimatedValue {
        self.total.set_value(self.total.value() + self.input.value());
        self.total.clone()
    }

    /// Total so far, without evaluating
    pub fn output(&self) -> &AnimatedValue {
        &self.total
    }
}

/// Change of an input node between evaluations; see [`diff`]
#[derive(Debug, Clone)]
pub struct Differ {
    input: AnimatedValue,
    previous: Option<f64>,
    delta: AnimatedValue,
}

/// Yields the difference between the input's value now and at the previous
/// evaluation
pub fn diff(input: &AnimatedValue) -> Differ {
    Differ {
        input: input.clone(),
        previous: None,
        delta: AnimatedValue::new(0.0),
    }
}

impl Differ {
    /// First evaluation yields `0`
    pub fn evaluate(&mut self) -> AnimatedValue {
        let current = self.input.value();
        let delta = self.previous.map_or(0.0, |previous| current - previous);
        self.previous = Some(current);
        self.delta.set_value(delta);
        self.delta.clone()
    }

    pub fn output(&self) -> &AnimatedValue {
        &self.delta
    }
}
