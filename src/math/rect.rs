use serde::{Serialize, Deserialize};
use super::Vec2;

/// Axis-aligned rectangle, origin at the minimum corner
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    /// Smallest rectangle containing every point, or `None` for an empty set
    pub fn enclosing<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Vec2>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let (min, max) = iter.fold((first, first), |(min, max), p| (min.min(&p), max.max(&p)));

        Some(Self {
            origin: min,
            size: max - min,
        })
    }

    pub fn width(&self) -> f32 {
        self.size.x
    }

    pub fn height(&self) -> f32 {
        self.size.y
    }

    pub fn max(&self) -> Vec2 {
        self.origin + self.size
    }
}
