//! Plain 2D value types shared by the renderers: colors and rectangles.
//!
//! Points and vectors live in [`crate::linear`].

mod color;
mod rect;

pub use color::ColorRgba;
pub use rect::Rect;
