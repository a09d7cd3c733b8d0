//=========================================================================
// World
//=========================================================================
//
// The whole simulation state, owned by the game core and mutated in
// place once per tick.
//
// Architecture:
//   World
//     ├─ bird:       Bird        (physics)
//     ├─ obstacle:   Obstacle    (motion + recycling)
//     ├─ score:      Scoreboard  (current + high)
//     └─ difficulty: Difficulty  (obstacle speed ramp)
//
// Tick order (see `step`):
//   bird.integrate() → obstacle.advance() → recycle? → collision::detect()
//
// Jumps are applied by the caller before `step`, so input always lands
// before physics within a tick.
//
// Each step first records a `Snapshot` of the positions it is about to
// replace. After a crash that snapshot is the last frame in which
// nothing overlapped, and it is what the game-over screen shows.
//
//=========================================================================

//=== Module Declarations =================================================

mod bird;
mod collision;
mod obstacle;
mod score;

//=== Public API ==========================================================

pub use bird::Bird;
pub use collision::{detect, Collision, Rect};
pub use obstacle::Obstacle;
pub use score::{Difficulty, Scoreboard};

//=== External Dependencies ===============================================

use log::debug;
use rand::Rng;

//=== Internal Dependencies ===============================================

use crate::core::config::GameConfig;

//=== StepReport ==========================================================

/// What happened during one [`World::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepReport {
    /// The obstacle left the screen and was recycled (one point scored).
    pub recycled: bool,

    /// Obstacle speed went up this tick.
    pub sped_up: bool,

    /// The round ended this tick.
    pub collision: Option<Collision>,
}

//=== Snapshot ============================================================

/// The drawable part of the world at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    pub bird: Bird,
    pub obstacle: Obstacle,
    pub score: u32,
}

//=== World ===============================================================

/// All mutable simulation state for one game session.
#[derive(Debug, Clone)]
pub struct World {
    config: GameConfig,
    pub bird: Bird,
    pub obstacle: Obstacle,
    pub score: Scoreboard,
    pub difficulty: Difficulty,
    previous: Snapshot,
}

impl World {
    //--- Construction -----------------------------------------------------

    /// Creates the world for the first game of the process.
    ///
    /// The first obstacle's gap comes from the opening range.
    pub fn new<R: Rng + ?Sized>(config: GameConfig, rng: &mut R) -> Self {
        let bird = Bird::new(&config);
        let obstacle = Obstacle::spawn(&config, config.opening_gap_range.clone(), rng);
        Self {
            bird,
            obstacle,
            score: Scoreboard::default(),
            difficulty: Difficulty::new(&config),
            previous: Snapshot { bird, obstacle, score: 0 },
            config,
        }
    }

    /// Restores every per-game field to its initial value.
    ///
    /// The high score is kept. The new obstacle's gap comes from the
    /// restart range.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.bird = Bird::new(&self.config);
        self.obstacle = Obstacle::spawn(&self.config, self.config.restart_gap_range.clone(), rng);
        self.score.reset();
        self.difficulty = Difficulty::new(&self.config);
        self.previous = self.snapshot();
    }

    //--- Simulation -------------------------------------------------------

    /// Applies the jump impulse to the bird.
    pub fn jump(&mut self) {
        self.bird.jump(self.config.jump_velocity);
    }

    /// Advances the simulation by one tick.
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) -> StepReport {
        let mut report = StepReport::default();
        self.previous = self.snapshot();

        //--- 1. Physics --------------------------------------------------
        self.bird.integrate(self.config.gravity);

        //--- 2. Obstacle motion & recycling ------------------------------
        self.obstacle.advance(self.difficulty.obstacle_speed);
        if self.obstacle.is_off_screen(f64::from(self.config.obstacle_width)) {
            self.obstacle.recycle(&self.config, rng);
            let score = self.score.add_point();
            report.recycled = true;
            report.sped_up = self.difficulty.on_score(score, &self.config);

            debug!(
                target: "core",
                "Obstacle recycled (score {}, gap {}, speed {})",
                score,
                self.obstacle.gap_offset,
                self.difficulty.obstacle_speed
            );
        }

        //--- 3. Collision -------------------------------------------------
        report.collision = detect(
            &self.bird_rect(),
            &self.obstacle.top_rect(&self.config),
            &self.obstacle.bottom_rect(&self.config),
            f64::from(self.config.screen_height),
        );

        report
    }

    //--- Queries ----------------------------------------------------------

    /// The configuration this world was built with.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The drawable state right now.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            bird: self.bird,
            obstacle: self.obstacle,
            score: self.score.current,
        }
    }

    /// The drawable state as it was before the latest [`step`](Self::step).
    ///
    /// Equal to [`snapshot`](Self::snapshot) until the first step after
    /// construction or a reset.
    pub fn previous(&self) -> Snapshot {
        self.previous
    }

    /// The bird's current hitbox.
    pub fn bird_rect(&self) -> Rect {
        self.bird.bounds(f64::from(self.config.bird_size))
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
