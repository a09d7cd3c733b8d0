//=========================================================================
// Collision Detection
//=========================================================================
//
// Axis-aligned rectangle overlap between the bird and the two obstacle
// halves, plus a screen-bounds check.
//
// Convention: rectangles are half-open. Two rectangles that only share
// an edge do NOT overlap, and a bird whose top is exactly 0 or whose
// bottom is exactly the screen height is still in bounds.
//
//=========================================================================

//=== Rect ================================================================

/// Axis-aligned rectangle in screen space (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Strict overlap test. Touching edges do not count, and an empty
    /// rectangle never overlaps anything.
    pub fn overlaps(&self, other: &Rect) -> bool {
        if self.width <= 0.0 || self.height <= 0.0 || other.width <= 0.0 || other.height <= 0.0 {
            return false;
        }
        self.left < other.right()
            && other.left < self.right()
            && self.top < other.bottom()
            && other.top < self.bottom()
    }
}

//=== Collision ===========================================================

/// What ended the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    /// Bird overlapped the top obstacle half.
    TopObstacle,

    /// Bird overlapped the bottom obstacle half.
    BottomObstacle,

    /// Bird's top edge went above the screen.
    Ceiling,

    /// Bird's bottom edge went below the screen.
    Floor,
}

/// Classifies the bird's hitbox against the obstacle halves and screen.
///
/// Obstacles are checked before bounds, so a bird clipping both the
/// top pipe and the ceiling reports `TopObstacle`.
pub fn detect(bird: &Rect, top: &Rect, bottom: &Rect, screen_height: f64) -> Option<Collision> {
    if bird.overlaps(bottom) {
        return Some(Collision::BottomObstacle);
    }
    if bird.overlaps(top) {
        return Some(Collision::TopObstacle);
    }
    if bird.top < 0.0 {
        return Some(Collision::Ceiling);
    }
    if bird.bottom() > screen_height {
        return Some(Collision::Floor);
    }
    None
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN_H: f64 = 600.0;

    /// Obstacle far to the right so only bounds matter.
    fn distant_obstacle() -> (Rect, Rect) {
        (
            Rect::new(1000.0, 0.0, 80.0, 200.0),
            Rect::new(1000.0, 400.0, 80.0, 200.0),
        )
    }

    fn bird_with_top(top: f64) -> Rect {
        Rect::new(108.0, top, 50.0, 50.0)
    }

    //--- Rect -------------------------------------------------------------

    #[test]
    fn overlapping_rects_collide() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn touching_edges_do_not_collide() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let right = Rect::new(10.0, 0.0, 10.0, 10.0);
        let below = Rect::new(0.0, 10.0, 10.0, 10.0);

        assert!(!a.overlaps(&right));
        assert!(!a.overlaps(&below));
    }

    #[test]
    fn one_pixel_intrusion_collides() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(9.0, 0.0, 10.0, 10.0);
        assert!(a.overlaps(&b));
    }

    #[test]
    fn empty_rect_never_overlaps() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let empty = Rect::new(2.0, 2.0, 0.0, 5.0);
        assert!(!a.overlaps(&empty));
        assert!(!empty.overlaps(&a));
    }

    //--- Screen Bounds ----------------------------------------------------

    #[test]
    fn bird_top_at_minus_one_hits_ceiling() {
        let (top, bottom) = distant_obstacle();
        assert_eq!(detect(&bird_with_top(-1.0), &top, &bottom, SCREEN_H), Some(Collision::Ceiling));
    }

    #[test]
    fn bird_top_at_zero_is_in_bounds() {
        let (top, bottom) = distant_obstacle();
        assert_eq!(detect(&bird_with_top(0.0), &top, &bottom, SCREEN_H), None);
    }

    #[test]
    fn bird_bottom_at_screen_height_is_in_bounds() {
        let (top, bottom) = distant_obstacle();
        assert_eq!(detect(&bird_with_top(550.0), &top, &bottom, SCREEN_H), None);
    }

    #[test]
    fn bird_bottom_past_screen_height_hits_floor() {
        let (top, bottom) = distant_obstacle();
        assert_eq!(detect(&bird_with_top(551.0), &top, &bottom, SCREEN_H), Some(Collision::Floor));
    }

    //--- Obstacles --------------------------------------------------------

    #[test]
    fn bird_touching_top_half_from_below_is_safe() {
        // Top half spans y ∈ [0, 200); bird starts exactly at 200
        let top = Rect::new(100.0, 0.0, 80.0, 200.0);
        let bottom = Rect::new(100.0, 400.0, 80.0, 200.0);
        assert_eq!(detect(&bird_with_top(200.0), &top, &bottom, SCREEN_H), None);
        assert_eq!(
            detect(&bird_with_top(199.0), &top, &bottom, SCREEN_H),
            Some(Collision::TopObstacle)
        );
    }

    #[test]
    fn bird_touching_bottom_half_from_above_is_safe() {
        // Bottom half starts at y = 400; bird bottom exactly 400
        let top = Rect::new(100.0, 0.0, 80.0, 200.0);
        let bottom = Rect::new(100.0, 400.0, 80.0, 200.0);
        assert_eq!(detect(&bird_with_top(350.0), &top, &bottom, SCREEN_H), None);
        assert_eq!(
            detect(&bird_with_top(351.0), &top, &bottom, SCREEN_H),
            Some(Collision::BottomObstacle)
        );
    }

    #[test]
    fn bird_touching_obstacle_side_is_safe() {
        // Bird spans x ∈ [108, 158); obstacle starts at 158
        let top = Rect::new(158.0, 0.0, 80.0, 600.0);
        let bottom = Rect::new(158.0, 600.0, 80.0, 0.0);
        assert_eq!(detect(&bird_with_top(300.0), &top, &bottom, SCREEN_H), None);

        let top = Rect::new(157.0, 0.0, 80.0, 600.0);
        assert_eq!(
            detect(&bird_with_top(300.0), &top, &bottom, SCREEN_H),
            Some(Collision::TopObstacle)
        );
    }
}
