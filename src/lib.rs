//! A 2D Game Engine scaffold built in Rust
//!
//! This engine provides:
//! - CPU-side 2D drawing presented through wgpu
//! - Chunked world-space bookkeeping
//! - Key bindings loaded from YAML settings
//! - A paced game loop with input, timing, and a debug HUD

pub mod assets;
pub mod config;
pub mod core;
pub mod entity;
pub mod gfx;
pub mod input;
pub mod math;
pub mod world;

// Re-exports for convenience
pub use glam;
pub use wgpu;
pub use winit;

/// Prelude module for common imports
pub mod prelude {
    pub use crate::assets::SpriteLibrary;
    pub use crate::config::{Keybinds, Settings};
    pub use crate::core::{
        DebugHud, Engine, EngineConfig, EngineContext, EngineError, FrameStats, Game,
    };
    pub use crate::entity::Entity;
    pub use crate::gfx::{Camera2D, Color, Surface, TextRenderer};
    pub use crate::input::{Action, BindingSet, Input};
    pub use crate::math::{Rect, Vec2Ext};
    pub use crate::world::WorldGrid;
    pub use glam::{IVec2, Vec2};
    pub use winit::keyboard::KeyCode;
}
