//=========================================================================
// Game Configuration
//=========================================================================
//
// Every gameplay constant in one place.
//
// The defaults reproduce the classic tuning exactly: a 400×600 playfield,
// 30 ticks per second, gravity 0.25 px/tick², jump velocity -5 px/tick.
// Physics is tick-coupled, so changing `tps` changes the feel of the game.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::ops::RangeInclusive;
use std::time::Duration;

use thiserror::Error;

//=== ConfigError =========================================================

/// Reasons a [`GameConfig`] cannot drive a game.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("tick rate must be positive, got {0}")]
    NonPositiveTickRate(f64),

    #[error("screen must be at least 1×1 pixels, got {width}×{height}")]
    EmptyScreen { width: u32, height: u32 },

    #[error("gap range {lo}..={hi} is empty")]
    EmptyGapRange { lo: i32, hi: i32 },

    #[error("speed ramp interval must be positive")]
    ZeroRampInterval,
}

//=== GameConfig ==========================================================

/// Gameplay constants shared by the simulation, state machine and renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Window caption.
    pub title: String,

    /// Logical playfield width in pixels.
    pub screen_width: u32,

    /// Logical playfield height in pixels.
    pub screen_height: u32,

    /// Simulation ticks per second while playing.
    pub tps: f64,

    /// Side length of the bird's square hitbox and sprite.
    pub bird_size: u32,

    /// Velocity added to the bird every tick (positive = down).
    pub gravity: f64,

    /// Velocity the bird is set to on a jump (negative = up).
    pub jump_velocity: f64,

    /// Obstacle width in pixels.
    pub obstacle_width: u32,

    /// Vertical size of the opening between the two obstacle halves.
    pub gap_height: i32,

    /// Minimum distance kept between a recycled gap and the screen edges.
    pub gap_margin: i32,

    /// Gap offsets drawn for the very first obstacle of the process.
    pub opening_gap_range: RangeInclusive<i32>,

    /// Gap offsets drawn for the first obstacle after a restart.
    pub restart_gap_range: RangeInclusive<i32>,

    /// Horizontal obstacle speed at the start of every game.
    pub base_obstacle_speed: f64,

    /// Speed added each time the score reaches a multiple of the interval.
    pub speed_increment: f64,

    /// Score interval between speed increases.
    pub speed_ramp_interval: u32,

    /// Input lockout after a crash.
    pub restart_delay: Duration,
}

impl GameConfig {
    //--- Derived Values ---------------------------------------------------

    /// Fixed horizontal position of the bird's centre.
    pub fn bird_x(&self) -> f64 {
        f64::from(self.screen_width / 3)
    }

    /// Vertical position of the bird's centre at the start of a game.
    pub fn bird_start_y(&self) -> f64 {
        f64::from(self.screen_height / 2)
    }

    /// Gap offsets drawn on every recycle.
    ///
    /// `[margin, screen_height - gap_height - margin]`, both ends inclusive.
    pub fn recycle_gap_range(&self) -> RangeInclusive<i32> {
        let hi = self.screen_height as i32 - self.gap_height - self.gap_margin;
        self.gap_margin..=hi
    }

    /// Wall-clock length of one tick.
    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.tps)
    }

    //--- Validation -------------------------------------------------------

    /// Checks that the configuration can drive a game without panicking.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tps <= 0.0 || !self.tps.is_finite() {
            return Err(ConfigError::NonPositiveTickRate(self.tps));
        }
        if self.screen_width == 0 || self.screen_height == 0 {
            return Err(ConfigError::EmptyScreen {
                width: self.screen_width,
                height: self.screen_height,
            });
        }
        if self.speed_ramp_interval == 0 {
            return Err(ConfigError::ZeroRampInterval);
        }
        for range in [
            self.opening_gap_range.clone(),
            self.restart_gap_range.clone(),
            self.recycle_gap_range(),
        ] {
            if range.is_empty() {
                return Err(ConfigError::EmptyGapRange {
                    lo: *range.start(),
                    hi: *range.end(),
                });
            }
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            title: String::from("Flappy Bird"),
            screen_width: 400,
            screen_height: 600,
            tps: 30.0,
            bird_size: 50,
            gravity: 0.25,
            jump_velocity: -5.0,
            obstacle_width: 80,
            gap_height: 200,
            gap_margin: 50,
            opening_gap_range: 150..=450,
            restart_gap_range: 100..=400,
            base_obstacle_speed: 2.0,
            speed_increment: 0.25,
            speed_ramp_interval: 5,
            restart_delay: Duration::from_secs(2),
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
    fn defaults_are_valid() {
        assert_eq!(GameConfig::default().validate(), Ok(()));
    }

    #[test]
    fn derived_positions_use_integer_division() {
        let config = GameConfig::default();
        assert_eq!(config.bird_x(), 133.0);
        assert_eq!(config.bird_start_y(), 300.0);
    }

    #[test]
    fn recycle_range_keeps_margin_on_both_sides() {
        let config = GameConfig::default();
        assert_eq!(config.recycle_gap_range(), 50..=350);
    }

    #[test]
    fn frame_duration_matches_tick_rate() {
        let config = GameConfig::default();
        let expected = Duration::from_secs_f64(1.0 / 30.0);
        assert_eq!(config.frame_duration(), expected);
    }

    #[test]
    fn zero_tps_is_rejected() {
        let config = GameConfig { tps: 0.0, ..GameConfig::default() };
        assert_eq!(config.validate(), Err(ConfigError::NonPositiveTickRate(0.0)));
    }

    #[test]
    fn oversized_gap_is_rejected() {
        let config = GameConfig { gap_height: 550, ..GameConfig::default() };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EmptyGapRange { lo: 50, hi: 0 })
        ));
    }

    #[test]
    fn zero_ramp_interval_is_rejected() {
        let config = GameConfig { speed_ramp_interval: 0, ..GameConfig::default() };
        assert_eq!(config.validate(), Err(ConfigError::ZeroRampInterval));
    }
}
