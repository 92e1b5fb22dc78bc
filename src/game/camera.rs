// Horizontal scrolling camera
//
// Follows the player once they get within `margin` pixels of either screen
// edge, and never shows anything outside the level.

use crate::collision::Aabb;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// World x of the left screen edge
    pub x: f32,
    pub margin: f32,
}

impl Camera {
    pub fn new(margin: f32) -> Self {
        Camera { x: 0.0, margin }
    }

    pub fn update(&mut self, target: &Aabb, level_width: f32, viewport_width: f32) {
        if target.right() > viewport_width - self.margin {
            self.x = target.right() - (viewport_width - self.margin);
        } else if target.left() < self.margin {
            self.x = target.left() - self.margin;
        }

        let max_x = (level_width - viewport_width).max(0.0);
        self.x = self.x.clamp(0.0, max_x);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player_at(x: f32) -> Aabb {
        Aabb::new(x, 500.0, 32.0, 32.0)
    }

    #[test]
    fn test_stays_put_inside_margins() {
        let mut camera = Camera::new(200.0);
        camera.update(&player_at(300.0), 3000.0, 800.0);
        assert_eq!(camera.x, 0.0);
    }

    #[test]
    fn test_follows_past_right_margin() {
        let mut camera = Camera::new(200.0);
        // right edge 732, threshold 600
        camera.update(&player_at(700.0), 3000.0, 800.0);
        assert_eq!(camera.x, 132.0);
    }

    #[test]
    fn test_clamped_to_level() {
        let mut camera = Camera::new(200.0);

        camera.update(&player_at(5000.0), 3000.0, 800.0);
        assert_eq!(camera.x, 2200.0);

        camera.update(&player_at(-50.0), 3000.0, 800.0);
        assert_eq!(camera.x, 0.0);
    }

    #[test]
    fn test_level_narrower_than_viewport_never_scrolls() {
        let mut camera = Camera::new(200.0);
        camera.update(&player_at(700.0), 500.0, 800.0);
        assert_eq!(camera.x, 0.0);
    }
}
