pub mod color;
pub mod config;

pub use color::Rgb;
pub use config::TreeConfig;
