//! Math helpers shared by the engine and games
//!
//! Vector math comes from glam; this module adds the small pieces glam does
//! not carry: an axis-aligned [`Rect`] and decimal rounding on [`glam::Vec2`].

mod rect;
mod vec;

pub use rect::Rect;
pub use vec::Vec2Ext;
