//=========================================================================
// Action Trait & Game Actions
//=========================================================================
//
// Actions are opaque identifiers routed by the input system and
// interpreted by the game state machine.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt::Debug;
use std::hash::Hash;

//=== Internal Dependencies ===============================================

use super::event::KeyCode;

//=== Action Trait ========================================================

/// Marker trait for action enums.
///
/// Actions represent high-level commands (Jump, Quit) mapped from raw
/// inputs. The input system routes actions without interpreting them.
///
/// # Requirements
///
/// - `Copy + Eq + Hash`: Efficient passing and map keys
/// - `Debug`: Logging support
/// - `Send + 'static`: Can be moved into the event loop
pub trait Action: 'static + Send + Copy + Eq + Hash + Debug {}

//=== GameAction ==========================================================

/// The two logical actions the game understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Start a game, flap, or restart after a crash.
    Jump,

    /// Leave the game immediately, from any state.
    Quit,
}

impl Action for GameAction {}

impl GameAction {
    /// Default key bindings: Space jumps, Escape quits.
    ///
    /// Closing the window also quits, but that arrives as a platform
    /// event rather than a key.
    pub const DEFAULT_BINDINGS: [(KeyCode, GameAction); 2] = [
        (KeyCode::Space, GameAction::Jump),
        (KeyCode::Escape, GameAction::Quit),
    ];
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_is_send_and_static() {
        fn assert_action<T: Action>() {}
        assert_action::<GameAction>();
    }

    #[test]
    fn default_bindings_cover_both_actions() {
        let actions: Vec<_> = GameAction::DEFAULT_BINDINGS.iter().map(|(_, a)| *a).collect();
        assert!(actions.contains(&GameAction::Jump));
        assert!(actions.contains(&GameAction::Quit));
    }

    #[test]
    fn space_is_the_jump_key() {
        assert!(GameAction::DEFAULT_BINDINGS.contains(&(KeyCode::Space, GameAction::Jump)));
    }
}
