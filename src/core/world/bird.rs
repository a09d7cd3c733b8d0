//=========================================================================
// Bird
//=========================================================================
//
// Vertical physics for the player's bird.
//
// Integration is semi-implicit Euler at a fixed timestep of one tick:
//   velocity += gravity
//   y        += velocity
//
// There is no delta-time scaling and no clamping; leaving the screen is
// detected by the collision pass instead.
//
//=========================================================================

use super::collision::Rect;
use crate::core::config::GameConfig;

/// The player's bird. `x` never changes during a game.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bird {
    /// Horizontal centre in pixels.
    pub x: f64,

    /// Vertical centre in pixels (0 = top of screen).
    pub y: f64,

    /// Vertical velocity in pixels per tick (positive = down).
    pub velocity: f64,
}

impl Bird {
    /// Creates a bird at rest at the configured start position.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            x: config.bird_x(),
            y: config.bird_start_y(),
            velocity: 0.0,
        }
    }

    /// Overrides the current velocity with the jump impulse.
    ///
    /// Not additive: a jump while falling fast gives the same upward
    /// velocity as a jump from rest.
    pub fn jump(&mut self, jump_velocity: f64) {
        self.velocity = jump_velocity;
    }

    /// Advances one tick under gravity.
    pub fn integrate(&mut self, gravity: f64) {
        self.velocity += gravity;
        self.y += self.velocity;
    }

    /// Square hitbox of side `size` centred on the bird.
    pub fn bounds(&self, size: f64) -> Rect {
        let half = size / 2.0;
        Rect::new(self.x - half, self.y - half, size, size)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
