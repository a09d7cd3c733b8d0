//=========================================================================
// State Machine
//=========================================================================
//
// Runs the current game state once per tick and applies queued
// transitions at the tick boundary.
//
// GameOver carries a restart gate. Before `opens_at` the state does not
// run at all, and the core keeps any actions queued meanwhile. The first
// tick at or past `opens_at` opens the gate and then acts on those
// actions, so a press made during the lockout restarts as soon as it
// ends.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Instant;

use log::{debug, info, warn};
use rand::Rng;

//=== Internal Dependencies ===============================================

use super::{GameState, Transition, TransitionQueue};
use crate::core::input::GameAction;
use crate::core::world::World;

//=== Restart Gate ========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RestartGate {
    opens_at: Instant,
    open: bool,
}

//=== State Machine =======================================================

/// Owns the current [`GameState`] and its pending transitions.
#[derive(Debug)]
pub struct StateMachine {
    current: GameState,
    transitions: TransitionQueue,
    restart_gate: Option<RestartGate>,
}

impl Default for StateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl StateMachine {
    //--- Construction -----------------------------------------------------

    /// Creates a state machine sitting on the start screen.
    pub fn new() -> Self {
        Self {
            current: GameState::Start,
            transitions: TransitionQueue::new(),
            restart_gate: None,
        }
    }

    //--- Queries ----------------------------------------------------------

    /// The active state.
    pub fn current(&self) -> GameState {
        self.current
    }

    /// When the game-over lockout ends, while it is still running.
    pub fn restart_opens_at(&self) -> Option<Instant> {
        match (self.current, self.restart_gate) {
            (GameState::GameOver, Some(gate)) if !gate.open => Some(gate.opens_at),
            _ => None,
        }
    }

    //--- Update Loop ------------------------------------------------------

    /// Runs the active state for one tick.
    ///
    /// Transitions requested here take effect in
    /// [`process_transitions`](Self::process_transitions).
    pub fn update<R: Rng + ?Sized>(
        &mut self,
        actions: &[GameAction],
        world: &mut World,
        rng: &mut R,
        now: Instant,
    ) {
        let jump = actions.contains(&GameAction::Jump);

        match self.current {
            GameState::Start => {
                if jump {
                    self.transitions.push(Transition::Begin);
                }
            }

            GameState::Playing => {
                if jump {
                    world.jump();
                }
                if let Some(collision) = world.step(rng).collision {
                    debug!(target: "core::scene", "Collision: {:?}", collision);
                    self.transitions.push(Transition::Crash);
                }
            }

            GameState::GameOver => {
                if let Some(gate) = self.restart_gate.as_mut().filter(|gate| !gate.open) {
                    if now < gate.opens_at {
                        return;
                    }
                    gate.open = true;
                    debug!(target: "core::scene", "Restart unlocked");
                }

                if jump {
                    self.transitions.push(Transition::Restart);
                }
            }
        }
    }

    //--- Transition Processing --------------------------------------------

    /// Applies all queued transitions in FIFO order.
    ///
    /// A transition whose source is not the active state is dropped.
    pub fn process_transitions<R: Rng + ?Sized>(
        &mut self,
        world: &mut World,
        rng: &mut R,
        now: Instant,
    ) {
        for transition in self.transitions.take() {
            if transition.source() != self.current {
                warn!(
                    target: "core::scene",
                    "Ignoring {:?} while in {:?}",
                    transition, self.current
                );
                continue;
            }

            match transition {
                Transition::Begin => {
                    info!(target: "core::scene", "Game started");
                }
                Transition::Crash => {
                    let high = world.score.commit_high();
                    info!(
                        target: "core::scene",
                        "Game over (score {}, high score {})",
                        world.score.current, high
                    );
                    self.restart_gate = Some(RestartGate {
                        opens_at: now + world.config().restart_delay,
                        open: false,
                    });
                }
                Transition::Restart => {
                    world.reset(rng);
                    self.restart_gate = None;
                    info!(target: "core::scene", "Game restarted");
                }
            }

            debug!(
                target: "core::scene",
                "{:?} → {:?}",
                self.current,
                transition.target()
            );
            self.current = transition.target();
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
