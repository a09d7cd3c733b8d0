//=========================================================================
// Obstacle
//=========================================================================
//
// The single pipe pair that scrolls across the screen.
//
// There is only ever one obstacle. Once it is fully past the left edge it
// is recycled: moved back to the right edge with a freshly drawn gap.
//
//=========================================================================

use std::ops::RangeInclusive;

use rand::Rng;

use super::collision::Rect;
use crate::core::config::GameConfig;

/// A pipe pair with a vertical opening.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    /// Left edge in pixels.
    pub x: f64,

    /// Bottom edge of the top half, in pixels from the top of the screen.
    pub gap_offset: i32,
}

impl Obstacle {
    /// Places a new obstacle at the right edge with a gap from `gap_range`.
    pub fn spawn<R: Rng + ?Sized>(
        config: &GameConfig,
        gap_range: RangeInclusive<i32>,
        rng: &mut R,
    ) -> Self {
        Self {
            x: f64::from(config.screen_width),
            gap_offset: rng.gen_range(gap_range),
        }
    }

    /// Scrolls left by `speed` pixels.
    pub fn advance(&mut self, speed: f64) {
        self.x -= speed;
    }

    /// True once the obstacle is strictly past the left edge.
    pub fn is_off_screen(&self, obstacle_width: f64) -> bool {
        self.x < -obstacle_width
    }

    /// Moves the obstacle back to the right edge with a new gap from the
    /// recycle range.
    pub fn recycle<R: Rng + ?Sized>(&mut self, config: &GameConfig, rng: &mut R) {
        *self = Self::spawn(config, config.recycle_gap_range(), rng);
    }

    //--- Geometry ---------------------------------------------------------

    /// Top half: from the screen top down to the gap.
    pub fn top_rect(&self, config: &GameConfig) -> Rect {
        Rect::new(
            self.x,
            0.0,
            f64::from(config.obstacle_width),
            f64::from(self.gap_offset),
        )
    }

    /// Bottom half: from the end of the gap down to the screen bottom.
    ///
    /// Empty when the gap reaches past the bottom of the screen.
    pub fn bottom_rect(&self, config: &GameConfig) -> Rect {
        let top = f64::from(self.gap_offset + config.gap_height);
        Rect::new(
            self.x,
            top,
            f64::from(config.obstacle_width),
            f64::from(config.screen_height) - top,
        )
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn obstacle_at(x: f64) -> Obstacle {
        Obstacle { x, gap_offset: 200 }
    }

    #[test]
    fn spawn_places_obstacle_at_right_edge() {
        let config = GameConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        let obstacle = Obstacle::spawn(&config, config.opening_gap_range.clone(), &mut rng);

        assert_eq!(obstacle.x, 400.0);
        assert!(config.opening_gap_range.contains(&obstacle.gap_offset));
    }

    #[test]
    fn advance_moves_left_by_speed() {
        let mut obstacle = obstacle_at(400.0);
        obstacle.advance(2.25);
        assert_eq!(obstacle.x, 397.75);
    }

    #[test]
    fn off_screen_boundary_is_strict() {
        assert!(!obstacle_at(-80.0).is_off_screen(80.0));
        assert!(obstacle_at(-80.5).is_off_screen(80.0));
        assert!(!obstacle_at(-79.0).is_off_screen(80.0));
    }

    #[test]
    fn recycle_resets_position_and_draws_in_range() {
        let config = GameConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let range = config.recycle_gap_range();

        for _ in 0..500 {
            let mut obstacle = obstacle_at(-82.0);
            obstacle.recycle(&config, &mut rng);

            assert_eq!(obstacle.x, 400.0);
            assert!(range.contains(&obstacle.gap_offset), "gap {} outside {:?}", obstacle.gap_offset, range);
        }
    }

    #[test]
    fn recycle_reaches_both_range_ends() {
        let config = GameConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut seen_lo = false;
        let mut seen_hi = false;

        for _ in 0..20_000 {
            let mut obstacle = obstacle_at(-100.0);
            obstacle.recycle(&config, &mut rng);
            seen_lo |= obstacle.gap_offset == 50;
            seen_hi |= obstacle.gap_offset == 350;
        }

        assert!(seen_lo && seen_hi, "inclusive range should produce both endpoints");
    }

    #[test]
    fn halves_frame_the_gap() {
        let config = GameConfig::default();
        let obstacle = Obstacle { x: 120.0, gap_offset: 150 };

        let top = obstacle.top_rect(&config);
        let bottom = obstacle.bottom_rect(&config);

        assert_eq!(top, Rect::new(120.0, 0.0, 80.0, 150.0));
        assert_eq!(bottom, Rect::new(120.0, 350.0, 80.0, 250.0));
    }

    #[test]
    fn deep_gap_has_empty_bottom_half() {
        let config = GameConfig::default();
        let obstacle = Obstacle { x: 120.0, gap_offset: 450 };

        assert!(obstacle.bottom_rect(&config).height < 0.0);
    }
}
