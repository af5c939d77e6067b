//! Terminal output module
//!
//! Colors for highlighted runs and rendering of segments for a terminal

pub mod render;
pub mod style;

pub use render::render_ansi;
pub use style::{parse_color, HighlightStyle};
