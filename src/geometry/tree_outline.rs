//! Leaf and trunk silhouettes parametrized by a single bending scalar
//!
//! All control points are fixed fractions of the reference height and the
//! derived width. Bending only moves the peak of each shape sideways; the
//! bases stay put.

use serde::{Deserialize, Serialize};
use crate::math::Vec2;
use super::outline::Outline;

/// Ratio between width and height of the whole tree
pub const ASPECT_RATIO: f32 = 0.13715;

/// Horizontal peak offset at full bending, as a fraction of the height.
/// A 200 high tree moves its leaf peak by 50 at bending 1.0.
pub const MAX_BENDING_X_OFFSET_TO_HEIGHT_RATIO: f32 = 0.25;

/// The trunk sways by this fraction of the leaf offset
pub const TRUNK_SWAY_FACTOR: f32 = 0.5;

/// Limit bending to [-1, 1]. NaN maps to the upright value.
pub fn clamp_bending(bending: f32) -> f32 {
    if bending.is_nan() {
        return 0.0;
    }
    bending.min(1.0).max(-1.0)
}

/// Derived width for a reference height
pub fn width_for_height(height: f32) -> f32 {
    ASPECT_RATIO * height
}

/// Horizontal offset of the leaf peak for a bending value
pub fn leaf_offset(bending: f32, height: f32) -> f32 {
    clamp_bending(bending) * MAX_BENDING_X_OFFSET_TO_HEIGHT_RATIO * height
}

/// Horizontal offset of the trunk tip for a bending value
pub fn trunk_offset(bending: f32, height: f32) -> f32 {
    leaf_offset(bending, height) * TRUNK_SWAY_FACTOR
}

/// Canopy outline: two cubic lobes meeting at a peak at y = 0
pub fn leaf_outline(bending: f32, height: f32) -> Outline {
    let offset = leaf_offset(bending, height);
    let h = height;
    let w = width_for_height(height);

    let base = Vec2::new(w, 0.762 * h);

    Outline::new(base)
        .cubic_to(
            Vec2::new(w + offset, 0.0),
            Vec2::new(2.643 * w, 0.762 * h),
            Vec2::new(1.571 * w, 0.381 * h),
        )
        .cubic_to(
            base,
            Vec2::new(0.429 * w, 0.381 * h),
            Vec2::new(-0.642 * w, 0.762 * h),
        )
}

/// Trunk outline: two quadratic edges meeting at a tip inside the canopy
pub fn trunk_outline(bending: f32, height: f32) -> Outline {
    let offset = trunk_offset(bending, height);
    let h = height;
    let w = width_for_height(height);

    Outline::new(Vec2::new(1.143 * w, h))
        .quad_to(Vec2::new(w + offset, 0.238 * h), Vec2::new(1.071 * w, 0.619 * h))
        .quad_to(Vec2::new(0.857 * w, 0.988 * h), Vec2::new(0.929 * w, 0.619 * h))
}

/// Leaf and trunk outlines, always produced and updated together
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathPair {
    pub leaf: Outline,
    pub trunk: Outline,
}

impl PathPair {
    /// Both outlines for `bending`, translated so the upright leaf's
    /// bounding box starts at the origin.
    ///
    /// The alignment offset is taken from bending 0 for every bending value,
    /// so swaying changes curvature without moving the anchor.
    pub fn left_aligned(bending: f32, height: f32) -> Self {
        let alignment = -leaf_outline(0.0, height).control_bounds().origin;

        Self {
            leaf: leaf_outline(bending, height).translated(alignment),
            trunk: trunk_outline(bending, height).translated(alignment),
        }
    }

    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        Self {
            leaf: self.leaf.lerp(&other.leaf, t),
            trunk: self.trunk.lerp(&other.trunk, t),
        }
    }
}

/// Convenience wrapper for [`PathPair::left_aligned`]
pub fn left_aligned_pair(bending: f32, height: f32) -> PathPair {
    PathPair::left_aligned(bending, height)
}
