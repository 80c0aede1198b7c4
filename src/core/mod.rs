//! Core engine module
//!
//! Contains the main Engine struct, configuration, and frame timing

mod debug;
mod engine;
mod time;

pub use debug::{DebugHud, FrameStats, FrameSummary};
pub use engine::{Engine, EngineConfig, EngineContext, EngineError, Game};
pub use time::Time;
