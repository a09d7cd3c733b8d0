//=========================================================================
// Input System
//
// High-level interface for input handling within the game core.
//
// Responsibilities:
// - Consume the batches of raw input events delivered each tick
// - Track key state and detect UP → DOWN edges
// - Translate edges into actions through the key bindings
//
// Notes:
// Actions are edge-triggered: one key press yields one action, no
// matter how long the key is held. Actions keep the order in which
// their presses arrived.
//
//=========================================================================

//=== Submodules ==========================================================

mod action;
mod action_mapper;
mod event;
mod state_tracker;

//=== Public API ==========================================================

pub use action::{Action, GameAction};
pub use event::{InputEvent, KeyCode};

//=== Internal Imports ====================================================

use action_mapper::ActionMapper;
use state_tracker::StateTracker;

//=== InputSystem =========================================================

/// Owns key state and bindings, and produces the actions for each tick.
pub struct InputSystem<A: Action> {
    state: StateTracker,
    mapper: ActionMapper<A>,
    actions: Vec<A>,
}

impl<A: Action> InputSystem<A> {
    //--- Construction -----------------------------------------------------

    /// Creates an input system with no bindings.
    pub fn new() -> Self {
        Self {
            state: StateTracker::new(),
            mapper: ActionMapper::new(),
            actions: Vec::with_capacity(4),
        }
    }

    //--- Bindings ---------------------------------------------------------

    /// Binds a key to an action, replacing any previous binding.
    pub fn bind_key(&mut self, key: KeyCode, action: A) {
        self.mapper.bind_key(key, action);
    }

    //--- process_frame() --------------------------------------------------
    //
    // Consumes every input batch received since the previous tick and
    // rebuilds the action list for this tick.
    //
    pub fn process_frame(&mut self, batches: &[Vec<InputEvent>]) {
        self.actions.clear();

        for event in batches.iter().flatten() {
            if let Some(key) = self.state.process_event(event) {
                if let Some(action) = self.mapper.map_key(key) {
                    self.actions.push(action);
                }
            }
        }
    }

    //--- Query Methods ----------------------------------------------------

    /// Actions triggered during the last processed frame, in press order.
    pub fn actions(&self) -> &[A] {
        &self.actions
    }
}

impl InputSystem<GameAction> {
    /// Creates an input system with [`GameAction::DEFAULT_BINDINGS`].
    pub fn with_default_bindings() -> Self {
        let mut system = Self::new();
        for (key, action) in GameAction::DEFAULT_BINDINGS {
            system.bind_key(key, action);
        }
        system
    }
}

impl<A: Action> Default for InputSystem<A> {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
