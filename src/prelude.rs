//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use flappy_bird::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Engine entry point
pub use crate::engine::{Engine, EngineBuilder, EngineError};

// Configuration
pub use crate::core::config::GameConfig;

// Core loop
pub use crate::core::platform_bridge::PlatformEvent;
pub use crate::core::{GameCore, TickControl, Wakeup};

// Input system
pub use crate::core::input::{Action, GameAction, InputEvent, KeyCode};

// State machine
pub use crate::core::scene::{GameState, Transition};

// Simulation
pub use crate::core::world::{Bird, Collision, Obstacle, Rect, Scoreboard, Snapshot, World};
