//! Bending geometry for the two-part tree silhouette
//!
//! Pure functions only: the same bending and height always produce the
//! same outlines.

mod outline;
mod tree_outline;

pub use outline::{Outline, Segment};
pub use tree_outline::{
    clamp_bending, leaf_offset, leaf_outline, left_aligned_pair, trunk_offset, trunk_outline,
    width_for_height, PathPair, ASPECT_RATIO, MAX_BENDING_X_OFFSET_TO_HEIGHT_RATIO,
    TRUNK_SWAY_FACTOR,
};
