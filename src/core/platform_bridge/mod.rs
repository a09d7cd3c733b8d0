//=========================================================================
// Platform Bridge
//=========================================================================
//
// Bridges the winit platform layer with the game core.
//
// Components:
// - `interface`: Event types and error definitions (the contract)
// - `event_collector`: Core-side draining of the event channel
//
//=========================================================================

//=== Module Declarations =================================================

mod event_collector;
mod interface;

//=== Public API ==========================================================

pub use interface::{PlatformError, PlatformEvent};

pub(crate) use event_collector::{Collected, EventCollector};
