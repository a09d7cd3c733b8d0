//=========================================================================
// Game Core
//
// Central coordinator for the simulation side of the game.
//
// Responsibilities:
// - Receive platform events through the bounded crossbeam channel
// - Turn key edges into actions (InputSystem)
// - Run the active game state at a fixed tick rate (StateMachine)
// - Own the simulation state (World) and its random source
// - Tell the platform when it next needs to be woken up
//
// Notes:
// The core never touches the OS. The platform calls `tick(now)` from its
// event loop, whenever input is pending or `wakeup()` says it is due.
// `tick` is safe to call early: input is collected and Quit honoured
// right away, but the game state only advances once due.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod config;
pub mod input;
pub mod platform_bridge;
pub mod scene;
pub mod world;

//=== Standard Library Imports ============================================

use std::time::{Duration, Instant};

//=== External Crates =====================================================

use crossbeam_channel::Receiver;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::Rng;

//=== Internal Modules ====================================================

use config::{ConfigError, GameConfig};
use input::{GameAction, InputSystem};
use platform_bridge::{Collected, EventCollector, PlatformEvent};
use scene::{GameState, StateMachine};
use world::World;

//=== TickControl =========================================================

/// Whether the event loop should keep running after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickControl {
    Continue,
    Exit,
}

//=== Wakeup ==============================================================

/// When the core next needs a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wakeup {
    /// At this instant, even without input.
    At(Instant),

    /// Only once new input arrives.
    OnInput,
}

//=== GameCore ============================================================

/// Owns every core subsystem and advances them one tick at a time.
pub struct GameCore<R = StdRng> {
    events: EventCollector,
    input: InputSystem<GameAction>,
    pending: Vec<GameAction>,
    states: StateMachine,
    world: World,
    rng: R,
    frame_duration: Duration,
    next_frame_at: Instant,
}

impl<R: Rng> GameCore<R> {
    //--- Construction -----------------------------------------------------

    /// Builds the core on the start screen.
    ///
    /// The first obstacle is drawn from `rng` immediately.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `config` fails
    /// [`GameConfig::validate`], before anything is derived from it.
    pub fn new(
        config: GameConfig,
        receiver: Receiver<PlatformEvent>,
        mut rng: R,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let frame_duration = config.frame_duration();
        let world = World::new(config, &mut rng);

        Ok(Self {
            events: EventCollector::new(receiver),
            input: InputSystem::with_default_bindings(),
            pending: Vec::with_capacity(4),
            states: StateMachine::new(),
            world,
            rng,
            frame_duration,
            next_frame_at: Instant::now(),
        })
    }

    //--- tick() -----------------------------------------------------------
    //
    // Each call:
    //  1. Drains the platform channel (shutdown → Exit)
    //  2. Converts key edges into pending actions (Quit → Exit)
    //  3. If the active state is due, runs it on the pending actions
    //  4. Applies queued transitions and schedules the next frame
    //
    pub fn tick(&mut self, now: Instant) -> TickControl {
        //--- Step 1: Gather platform events ----------------------------
        if self.events.collect_frame() == Collected::Shutdown {
            info!(target: "core", "Window closed, core exiting");
            return TickControl::Exit;
        }

        //--- Step 2: Map input -----------------------------------------
        self.input.process_frame(self.events.batches());
        self.pending.extend_from_slice(self.input.actions());

        if self.pending.contains(&GameAction::Quit) {
            info!(target: "core", "Quit requested, core exiting");
            return TickControl::Exit;
        }

        //--- Step 3: Run the active state ------------------------------
        if !self.is_due(now) {
            return TickControl::Continue;
        }

        let before = self.states.current();
        self.states
            .update(&self.pending, &mut self.world, &mut self.rng, now);
        self.pending.clear();

        //--- Step 4: Transitions & pacing ------------------------------
        self.states
            .process_transitions(&mut self.world, &mut self.rng, now);

        if self.states.current() == GameState::Playing {
            self.schedule_next_frame(before, now);
        }

        TickControl::Continue
    }

    //--- Scheduling -------------------------------------------------------

    /// When the platform should next call [`tick`](Self::tick).
    pub fn wakeup(&self) -> Wakeup {
        match self.states.current() {
            GameState::Playing => Wakeup::At(self.next_frame_at),
            GameState::GameOver => match self.states.restart_opens_at() {
                Some(at) => Wakeup::At(at),
                None => Wakeup::OnInput,
            },
            GameState::Start => Wakeup::OnInput,
        }
    }

    fn is_due(&self, now: Instant) -> bool {
        match self.wakeup() {
            Wakeup::At(at) => now >= at,
            Wakeup::OnInput => true,
        }
    }

    fn schedule_next_frame(&mut self, before: GameState, now: Instant) {
        if before != GameState::Playing {
            // Fresh round: first simulation step one frame from now
            self.next_frame_at = now + self.frame_duration;
            return;
        }

        self.next_frame_at += self.frame_duration;
        if self.next_frame_at <= now {
            debug!(
                target: "core",
                "Tick fell behind by {:?}, resyncing",
                now - self.next_frame_at
            );
            self.next_frame_at = now + self.frame_duration;
        }
    }

    //--- Queries ----------------------------------------------------------

    /// The active game state.
    pub fn state(&self) -> GameState {
        self.states.current()
    }

    /// Read-only view of the simulation.
    pub fn world(&self) -> &World {
        &self.world
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
