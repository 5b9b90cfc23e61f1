pub mod coordinates;
pub mod math;
pub mod node;
pub mod ops;
pub mod stateful;

// Re-export commonly used types and functions for convenience
pub use coordinates::{AnimatedPoint, AnimatedPolar};
pub use node::{AnimatedValue, Node, Scalar, Value};
pub use stateful::{acc, diff, Accumulator, Differ};
