//=========================================================================
// Action Mapper
//=========================================================================
//
// Maps pressed keys to game actions based on configured bindings.
//
// Architecture:
//   KeyCode → HashMap → Action
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

use log::debug;

//=== Internal Dependencies ===============================================

use super::{action::Action, event::KeyCode};

//=== ActionMapper ========================================================

/// Maps keys to actions. One action per key; rebinding replaces.
pub(crate) struct ActionMapper<A: Action> {
    key_bindings: HashMap<KeyCode, A>,
}

impl<A: Action> ActionMapper<A> {
    /// Creates a new mapper with no bindings.
    pub(crate) fn new() -> Self {
        Self {
            key_bindings: HashMap::new(),
        }
    }

    //--- Binding API ------------------------------------------------------

    /// Binds a key to an action, replacing any previous binding.
    pub(crate) fn bind_key(&mut self, key: KeyCode, action: A) {
        if let Some(previous) = self.key_bindings.insert(key, action) {
            debug!("Rebinding {:?}: {:?} → {:?}", key, previous, action);
        }
    }

    //--- Mapping ----------------------------------------------------------

    /// Maps a key press to an action.
    pub(crate) fn map_key(&self, key: KeyCode) -> Option<A> {
        self.key_bindings.get(&key).copied()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
