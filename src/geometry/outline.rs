//! Closed bezier outlines with a fixed segment topology

use serde::{Deserialize, Serialize};
use crate::math::{Rect, Vec2};

/// One bezier segment, continuing from the previous segment's end point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Segment {
    Cubic { ctrl1: Vec2, ctrl2: Vec2, to: Vec2 },
    Quad { ctrl: Vec2, to: Vec2 },
}

impl Segment {
    /// End point of the segment
    pub fn to(&self) -> Vec2 {
        match *self {
            Segment::Cubic { to, .. } | Segment::Quad { to, .. } => to,
        }
    }

    /// Control and end points, in path order
    pub fn points(&self) -> Vec<Vec2> {
        match *self {
            Segment::Cubic { ctrl1, ctrl2, to } => vec![ctrl1, ctrl2, to],
            Segment::Quad { ctrl, to } => vec![ctrl, to],
        }
    }

    fn translated(&self, offset: Vec2) -> Self {
        match *self {
            Segment::Cubic { ctrl1, ctrl2, to } => Segment::Cubic {
                ctrl1: ctrl1 + offset,
                ctrl2: ctrl2 + offset,
                to: to + offset,
            },
            Segment::Quad { ctrl, to } => Segment::Quad {
                ctrl: ctrl + offset,
                to: to + offset,
            },
        }
    }

    /// Point-wise interpolation; `None` when the segment kinds differ
    fn lerp(&self, other: &Self, t: f32) -> Option<Self> {
        match (*self, *other) {
            (
                Segment::Cubic { ctrl1: a1, ctrl2: a2, to: a3 },
                Segment::Cubic { ctrl1: b1, ctrl2: b2, to: b3 },
            ) => Some(Segment::Cubic {
                ctrl1: a1.lerp(&b1, t),
                ctrl2: a2.lerp(&b2, t),
                to: a3.lerp(&b3, t),
            }),
            (Segment::Quad { ctrl: a1, to: a2 }, Segment::Quad { ctrl: b1, to: b2 }) => {
                Some(Segment::Quad {
                    ctrl: a1.lerp(&b1, t),
                    to: a2.lerp(&b2, t),
                })
            }
            _ => None,
        }
    }
}

/// A closed path: a start point followed by bezier segments.
///
/// The path is implicitly closed back to `start` when filled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outline {
    pub start: Vec2,
    pub segments: Vec<Segment>,
}

impl Outline {
    pub fn new(start: Vec2) -> Self {
        Self {
            start,
            segments: Vec::new(),
        }
    }

    pub fn cubic_to(mut self, to: Vec2, ctrl1: Vec2, ctrl2: Vec2) -> Self {
        self.segments.push(Segment::Cubic { ctrl1, ctrl2, to });
        self
    }

    pub fn quad_to(mut self, to: Vec2, ctrl: Vec2) -> Self {
        self.segments.push(Segment::Quad { ctrl, to });
        self
    }

    /// Every on-curve and control point, in path order
    pub fn points(&self) -> impl Iterator<Item = Vec2> + '_ {
        std::iter::once(self.start).chain(self.segments.iter().flat_map(|s| s.points()))
    }

    /// Bounding box of all points including control points
    pub fn control_bounds(&self) -> Rect {
        Rect::enclosing(self.points()).unwrap_or_default()
    }

    pub fn translated(&self, offset: Vec2) -> Self {
        Self {
            start: self.start + offset,
            segments: self.segments.iter().map(|s| s.translated(offset)).collect(),
        }
    }

    /// Whether both outlines have the same segment kinds in the same order
    pub fn same_topology(&self, other: &Self) -> bool {
        self.segments.len() == other.segments.len()
            && self
                .segments
                .iter()
                .zip(&other.segments)
                .all(|(a, b)| std::mem::discriminant(a) == std::mem::discriminant(b))
    }

    /// Interpolate point-wise towards `other`.
    ///
    /// Outlines with different topology cannot be blended; the result then
    /// snaps to whichever side `t` is closer to.
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        if !self.same_topology(other) {
            return if t < 0.5 { self.clone() } else { other.clone() };
        }

        let segments = self
            .segments
            .iter()
            .zip(&other.segments)
            .filter_map(|(a, b)| a.lerp(b, t))
            .collect();

        Self {
            start: self.start.lerp(&other.start, t),
            segments,
        }
    }

    /// SVG path data (`M … C … Q … Z`)
    pub fn to_svg_path_data(&self) -> String {
        let mut data = format!("M{} {}", fmt_num(self.start.x), fmt_num(self.start.y));
        for segment in &self.segments {
            match *segment {
                Segment::Cubic { ctrl1, ctrl2, to } => data.push_str(&format!(
                    " C{} {} {} {} {} {}",
                    fmt_num(ctrl1.x),
                    fmt_num(ctrl1.y),
                    fmt_num(ctrl2.x),
                    fmt_num(ctrl2.y),
                    fmt_num(to.x),
                    fmt_num(to.y)
                )),
                Segment::Quad { ctrl, to } => data.push_str(&format!(
                    " Q{} {} {} {}",
                    fmt_num(ctrl.x),
                    fmt_num(ctrl.y),
                    fmt_num(to.x),
                    fmt_num(to.y)
                )),
            }
        }
        data.push_str(" Z");
        data
    }
}

fn fmt_num(v: f32) -> String {
    let s = format!("{:.3}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}
