pub mod vec2;
pub mod rect;
pub mod bezier;

pub use vec2::Vec2;
pub use rect::Rect;
pub use bezier::solve_timing_curve;
