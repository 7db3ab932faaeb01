//! The bendable tree: bending state plus the wiggle state machine

mod tree_shape;

pub use tree_shape::{TreeShape, WiggleState};
