//! Per-frame movement: gravity, velocity integration and platform contact.
//!
//! Entities opt in through capabilities instead of type checks:
//! - `PhysicsBody`: falls, moves and collides with platforms (player,
//!   goombas, mushrooms)
//! - `AnimatedOnly`: only counts down a lifetime (flowers, effects)
//!
//! Platforms are always scanned in level-definition order (ground segments
//! first, then platforms), and the first overlapping one wins.

use crate::collectible::PowerUp;
use crate::collision::{first_collision, Aabb, Collidable};
use crate::goomba::Goomba;
use crate::platform::Platform;

/// Limits that depend on the level and viewport rather than the entity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldBounds {
    pub level_width: f32,
    pub viewport_width: f32,
    /// Lowest point the player's feet can reach
    pub floor_y: f32,
}

/// Position plus velocity; shared by everything that moves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub bounds: Aabb,
    pub vx: f32,
    pub vy: f32,
    pub gravity: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    /// Was falling; now standing on the platform top
    Landed,
    /// Was rising; now pressed against the platform bottom
    HeadBump,
    /// Overlapping with no vertical velocity; nothing moved
    Resting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contact {
    /// Index into the platform slice
    pub platform: usize,
    pub kind: ContactKind,
}

impl Body {
    pub fn new(x: f32, y: f32, width: f32, height: f32, gravity: f32) -> Self {
        Body {
            bounds: Aabb::new(x, y, width, height),
            vx: 0.0,
            vy: 0.0,
            gravity,
        }
    }

    pub fn with_velocity(mut self, vx: f32, vy: f32) -> Self {
        self.vx = vx;
        self.vy = vy;
        self
    }

    /// Velocity first, then position.
    pub fn integrate(&mut self) {
        self.vy += self.gravity;
        self.bounds.y += self.vy;
        self.bounds.x += self.vx;
    }

    /// Snaps out of the first overlapping platform along the vertical axis.
    pub fn resolve_vertical(&mut self, platforms: &[Platform]) -> Option<Contact> {
        let index = first_collision(&self.bounds, platforms)?;
        let platform = platforms[index].get_bounds();

        let kind = if self.vy > 0.0 {
            self.bounds.set_bottom(platform.top());
            self.vy = 0.0;
            ContactKind::Landed
        } else if self.vy < 0.0 {
            self.bounds.set_top(platform.bottom());
            self.vy = 0.0;
            ContactKind::HeadBump
        } else {
            ContactKind::Resting
        };

        Some(Contact {
            platform: index,
            kind,
        })
    }

    /// First platform still overlapping while moving sideways.
    ///
    /// Call after `resolve_vertical`; anything left overlapping at that point
    /// was hit from the side.
    pub fn side_collision(&self, platforms: &[Platform]) -> Option<usize> {
        if self.vx == 0.0 {
            return None;
        }
        first_collision(&self.bounds, platforms)
    }

    pub fn reverse_horizontal(&mut self) {
        self.vx = -self.vx;
    }
}

impl Collidable for Body {
    fn get_bounds(&self) -> Aabb {
        self.bounds
    }
}

/// Capability: affected by gravity and solid platforms.
pub trait PhysicsBody {
    fn integrate(&mut self);

    fn resolve_platforms(&mut self, platforms: &[Platform], bounds: &WorldBounds);

    fn step(&mut self, platforms: &[Platform], bounds: &WorldBounds) {
        self.integrate();
        self.resolve_platforms(platforms, bounds);
    }
}

/// Capability: no physics, only a lifetime that runs down.
pub trait AnimatedOnly {
    /// Advances one frame; returns false once the entity should be removed.
    fn tick(&mut self) -> bool;
}

/// How an entity takes part in the frame update.
pub enum Capability<'a> {
    Physics(&'a mut dyn PhysicsBody),
    Animated(&'a mut dyn AnimatedOnly),
}

/// Moves every dynamic entity one frame.
///
/// Power-ups are dispatched by capability. `AnimatedOnly` ticks here cannot
/// remove anything; flowers never expire.
pub fn step_bodies(
    player: &mut dyn PhysicsBody,
    goombas: &mut [Goomba],
    power_ups: &mut [PowerUp],
    platforms: &[Platform],
    bounds: &WorldBounds,
) {
    player.step(platforms, bounds);

    for goomba in goombas.iter_mut() {
        goomba.step(platforms, bounds);
    }

    for power_up in power_ups.iter_mut() {
        match power_up.capability() {
            Capability::Physics(body) => body.step(platforms, bounds),
            Capability::Animated(animated) => {
                animated.tick();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::PlatformKind;
    use approx::assert_relative_eq;

    #[test]
    fn test_free_fall_matches_closed_form() {
        let gravity = 0.8;
        let initial_vy = -3.0;
        let start_y = 100.0;
        let mut body = Body::new(0.0, start_y, 10.0, 10.0, gravity).with_velocity(1.5, initial_vy);

        let steps = 25;
        for _ in 0..steps {
            body.integrate();
        }

        let n = steps as f32;
        assert_relative_eq!(body.vy, initial_vy + n * gravity, epsilon = 1e-4);
        // y_n = y_0 + n·vy_0 + g·n(n+1)/2
        let expected_y = start_y + n * initial_vy + gravity * n * (n + 1.0) / 2.0;
        assert_relative_eq!(body.bounds.y, expected_y, epsilon = 1e-3);
        assert_relative_eq!(body.bounds.x, 1.5 * n, epsilon = 1e-4);
    }

    #[test]
    fn test_landing_snaps_bottom_to_platform_top() {
        let platforms = vec![Platform::new(PlatformKind::Ground, 0.0, 100.0, 200.0)];
        let mut body = Body::new(50.0, 80.0, 10.0, 25.0, 0.8).with_velocity(0.0, 4.0);

        let contact = body.resolve_vertical(&platforms);

        assert_eq!(
            contact,
            Some(Contact {
                platform: 0,
                kind: ContactKind::Landed
            })
        );
        assert_eq!(body.vy, 0.0);
        assert_eq!(body.bounds.bottom(), 100.0);
    }

    #[test]
    fn test_rising_snaps_top_to_platform_bottom() {
        let platforms = vec![Platform::new(PlatformKind::Platform, 0.0, 100.0, 200.0)];
        let mut body = Body::new(50.0, 120.0, 10.0, 25.0, 0.8).with_velocity(0.0, -6.0);

        let contact = body.resolve_vertical(&platforms).unwrap();

        assert_eq!(contact.kind, ContactKind::HeadBump);
        assert_eq!(body.vy, 0.0);
        assert_eq!(body.bounds.top(), 132.0);
    }

    #[test]
    fn test_first_platform_in_definition_order_wins() {
        let platforms = vec![
            Platform::new(PlatformKind::Ground, 0.0, 100.0, 200.0),
            Platform::new(PlatformKind::Brick, 40.0, 95.0, 32.0),
        ];
        let mut body = Body::new(50.0, 80.0, 10.0, 25.0, 0.8).with_velocity(0.0, 2.0);

        let contact = body.resolve_vertical(&platforms).unwrap();

        assert_eq!(contact.platform, 0);
        assert_eq!(body.bounds.bottom(), 100.0);
        // Still inside the brick: that is a side hit now
        assert_eq!(body.side_collision(&platforms), None);
        body.vx = 2.0;
        assert_eq!(body.side_collision(&platforms), Some(1));
    }

    #[test]
    fn test_no_overlap_no_contact() {
        let platforms = vec![Platform::new(PlatformKind::Ground, 0.0, 100.0, 200.0)];
        let mut body = Body::new(50.0, 0.0, 10.0, 10.0, 0.8).with_velocity(0.0, 3.0);

        assert_eq!(body.resolve_vertical(&platforms), None);
        assert_eq!(body.vy, 3.0);
    }
}
