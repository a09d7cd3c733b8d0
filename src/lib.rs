//=========================================================================
// Flappy Bird — Library Root
//
// This crate defines the public API surface of the game.
//
// Responsibilities:
// - Expose the engine entry point (`Engine`, `EngineBuilder`)
// - Expose the deterministic simulation core (`core`) for tests and tools
// - Keep window/OS integration (`platform`) and drawing (`render`)
//   hidden from end users
//
// Typical usage:
// ```no_run
// use flappy_bird::EngineBuilder;
//
// fn main() -> Result<(), flappy_bird::EngineError> {
//     EngineBuilder::new().build().run()
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` contains the simulation, input mapping and game state machine.
// None of it touches the OS, so it can be driven headless in tests.
//
pub mod core;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `platform` owns the winit event loop and the window surface.
// `render` turns read-only simulation state into pixels.
// `engine` wires the three together.
//
mod engine;
mod platform;
mod render;

//--- Public Exports ------------------------------------------------------

pub use engine::{Engine, EngineBuilder, EngineError};
pub use render::AssetError;
