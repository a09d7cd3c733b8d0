//=========================================================================
// State Tracker
//=========================================================================
//
// Low-level key state tracking with edge detection.
//
// Architecture:
//   InputEvent → process_event() → HashSet (keys held) → edge
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashSet;

//=== Internal Dependencies ===============================================

use super::event::{InputEvent, KeyCode};

//=== StateTracker ========================================================

/// Tracks which keys are held so repeated presses are not counted twice.
pub(crate) struct StateTracker {
    keys_down: HashSet<KeyCode>,
}

impl StateTracker {
    /// Creates a new state tracker with no keys held.
    pub(crate) fn new() -> Self {
        Self {
            keys_down: HashSet::new(),
        }
    }

    //--- Event Processing -------------------------------------------------

    /// Applies one event. Returns the key if it went UP → DOWN.
    ///
    /// A `KeyDown` for a key already held is not an edge and returns `None`,
    /// so holding a key never fires its action twice.
    pub(super) fn process_event(&mut self, event: &InputEvent) -> Option<KeyCode> {
        match *event {
            InputEvent::KeyDown { key } => self.keys_down.insert(key).then_some(key),

            InputEvent::KeyUp { key } => {
                self.keys_down.remove(&key);
                None
            }

            InputEvent::Unidentified => None,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
