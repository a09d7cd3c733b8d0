//=========================================================================
// Platform Bridge Interface
//=========================================================================
//
// Platform-to-core interface types (events and errors).
//
// The platform layer only ever talks to the core through these types.
//
//=========================================================================

//=== External Dependencies ===============================================

use thiserror::Error;

//=== Internal Dependencies ===============================================

use crate::core::input::InputEvent;

//=== PlatformEvent =======================================================

/// Events sent from the platform to the core over the bounded channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformEvent {
    /// Key events gathered since the last flush, in arrival order.
    Inputs(Vec<InputEvent>),

    /// Window close requested.
    WindowClosed,
}

//=== PlatformError =======================================================

/// Platform initialization and runtime errors.
#[derive(Debug, Error)]
pub enum PlatformError {
    /// Event loop creation failed (OS-level issue).
    #[error("Event loop creation failed: {0}")]
    EventLoopCreation(String),

    /// Event loop execution error.
    #[error("Event loop error: {0}")]
    EventLoopExecution(String),

    /// The OS refused to open the window.
    #[error("Window creation failed: {0}")]
    WindowCreation(String),

    /// The pixel surface could not be created, resized or presented.
    #[error("Surface error: {0}")]
    Surface(String),
}
