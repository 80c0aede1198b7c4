//! Game entities
//!
//! An [`Entity`] is a world object with a position and a footprint that
//! updates and draws once per frame. Games typically wrap their entity
//! kinds in an enum implementing this trait: dispatch stays static and
//! each kind carries exactly the state it needs, instead of every entity
//! dragging around optional fields for every capability.

use glam::Vec2;

use crate::core::EngineContext;
use crate::gfx::Surface;
use crate::math::Rect;

/// A world object that lives in the game loop.
pub trait Entity {
    /// World position of the top-left corner
    fn position(&self) -> Vec2;

    /// Footprint in world space
    fn rect(&self) -> Rect;

    /// Advance one frame
    fn update(&mut self, ctx: &mut EngineContext);

    /// Draw into the frame; `scroll` is the camera's top-left world position
    fn draw(&self, frame: &mut Surface, scroll: Vec2);
}
