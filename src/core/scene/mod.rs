//=========================================================================
// Game State Machine
//=========================================================================
//
// Sequences the three game states.
//
// Flow:
//   Start ──Begin──► Playing ──Crash──► GameOver ──Restart──► Playing
//
// States request transitions during `update()`. The requests are queued
// and applied by `process_transitions()` at the end of the tick, where
// the on-enter hooks run (high score commit, world reset).
//
//=========================================================================

//=== Module Declarations =================================================

mod state_machine;
mod transition_queue;

//=== Public API ==========================================================

pub use state_machine::StateMachine;
pub use transition_queue::TransitionQueue;

//=== GameState ===========================================================

/// The state that decides what runs each tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    /// Welcome prompt. Waits for Jump.
    Start,

    /// Simulation running at the fixed tick rate.
    Playing,

    /// Crash overlay. Locked for the restart delay, then waits for Jump.
    GameOver,
}

//=== Transition ==========================================================

/// A requested change of [`GameState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Start → Playing.
    Begin,

    /// Playing → GameOver.
    Crash,

    /// GameOver → Playing, with a full world reset.
    Restart,
}

impl Transition {
    /// State this transition must start from.
    pub fn source(self) -> GameState {
        match self {
            Self::Begin => GameState::Start,
            Self::Crash => GameState::Playing,
            Self::Restart => GameState::GameOver,
        }
    }

    /// State this transition leads to.
    pub fn target(self) -> GameState {
        match self {
            Self::Begin | Self::Restart => GameState::Playing,
            Self::Crash => GameState::GameOver,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transitions_follow_the_game_loop() {
        assert_eq!(Transition::Begin.source(), GameState::Start);
        assert_eq!(Transition::Begin.target(), GameState::Playing);
        assert_eq!(Transition::Crash.source(), GameState::Playing);
        assert_eq!(Transition::Crash.target(), GameState::GameOver);
        assert_eq!(Transition::Restart.source(), GameState::GameOver);
        assert_eq!(Transition::Restart.target(), GameState::Playing);
    }

    #[test]
    fn no_transition_returns_to_start() {
        for t in [Transition::Begin, Transition::Crash, Transition::Restart] {
            assert_ne!(t.target(), GameState::Start);
        }
    }
}
