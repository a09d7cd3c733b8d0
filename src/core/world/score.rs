//=========================================================================
// Score & Difficulty
//=========================================================================
//
// Score grows by exactly one per recycled obstacle. Every time it lands
// on a multiple of the ramp interval, obstacle speed grows by a fixed
// increment. The ramp has no upper bound.
//
//=========================================================================

use crate::core::config::GameConfig;

//=== Scoreboard ==========================================================

/// Current and best score. `high` survives restarts but not the process.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scoreboard {
    pub current: u32,
    pub high: u32,
}

impl Scoreboard {
    /// Adds one point and returns the new score.
    pub fn add_point(&mut self) -> u32 {
        self.current += 1;
        self.current
    }

    /// Folds the current score into the high score.
    pub fn commit_high(&mut self) -> u32 {
        self.high = self.high.max(self.current);
        self.high
    }

    /// Starts a new game; keeps the high score.
    pub fn reset(&mut self) {
        self.current = 0;
    }
}

//=== Difficulty ==========================================================

/// Obstacle speed, ramped by score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Difficulty {
    /// Pixels per tick.
    pub obstacle_speed: f64,
}

impl Difficulty {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            obstacle_speed: config.base_obstacle_speed,
        }
    }

    /// Applies the ramp for a freshly reached `score`.
    ///
    /// Returns `true` if the speed went up.
    pub fn on_score(&mut self, score: u32, config: &GameConfig) -> bool {
        if score % config.speed_ramp_interval == 0 {
            self.obstacle_speed += config.speed_increment;
            true
        } else {
            false
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
