//! Collision detection and bounce response
//!
//! Platforms are one-way: the player passes through them on the way up and
//! lands on them only while falling.

use super::rect::Rect;
use super::state::{Platform, Player};
use crate::consts::JUMP_STRENGTH;

/// Result of resolving the player against the platform set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BounceResult {
    /// Number of platforms that triggered a bounce this frame
    pub hits: usize,
    /// Index of the platform whose bounce was applied last
    pub last: Option<usize>,
}

impl BounceResult {
    pub fn bounced(&self) -> bool {
        self.hits > 0
    }
}

/// A falling player overlapping a platform lands on it
#[inline]
pub fn should_bounce(player: &Player, platform: &Rect) -> bool {
    player.rect.intersects(platform) && player.vel.y > 0.0
}

/// Snap the player on top of `platform` and launch it upward
pub fn apply_bounce(player: &mut Player, platform: &Rect) {
    player.rect.y = platform.y - player.rect.h;
    player.vel.y = JUMP_STRENGTH;
}

/// Resolve the player against every platform in spawn order.
///
/// Each qualifying platform is applied in turn, so the last one evaluated
/// decides the resulting position and velocity.
pub fn resolve_platforms(player: &mut Player, platforms: &[Platform]) -> BounceResult {
    let mut result = BounceResult::default();
    for (i, platform) in platforms.iter().enumerate() {
        if should_bounce(player, &platform.rect) {
            apply_bounce(player, &platform.rect);
            result.hits += 1;
            result.last = Some(i);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn player_at(x: i32, y: i32, vy: f32) -> Player {
        Player {
            rect: Rect::new(x, y, 30, 30),
            vel: Vec2::new(0.0, vy),
        }
    }

    #[test]
    fn test_falling_overlap_bounces() {
        let mut player = player_at(100, 485, 0.5);
        let platforms = [Platform::new(90, 500)];

        let result = resolve_platforms(&mut player, &platforms);
        assert!(result.bounced());
        assert_eq!(result.last, Some(0));
        assert_eq!(player.rect.y, 470);
        assert_eq!(player.vel.y, JUMP_STRENGTH);
    }

    #[test]
    fn test_rising_overlap_passes_through() {
        let mut player = player_at(100, 485, -2.0);
        let platforms = [Platform::new(90, 500)];

        let result = resolve_platforms(&mut player, &platforms);
        assert!(!result.bounced());
        assert_eq!(player.rect.y, 485);
        assert_eq!(player.vel.y, -2.0);
    }

    #[test]
    fn test_zero_velocity_does_not_bounce() {
        let mut player = player_at(100, 485, 0.0);
        let platforms = [Platform::new(90, 500)];
        assert!(!resolve_platforms(&mut player, &platforms).bounced());
    }

    #[test]
    fn test_no_overlap_no_bounce() {
        let mut player = player_at(300, 100, 1.5);
        let platforms = [Platform::new(0, 500), Platform::new(400, 120)];
        let result = resolve_platforms(&mut player, &platforms);
        assert_eq!(result, BounceResult::default());
        assert_eq!(player.vel.y, 1.5);
    }

    #[test]
    fn test_overlapping_platforms_first_bounce_wins_when_velocity_flips() {
        // Two stacked platforms both overlap the player. The first bounce makes
        // the velocity negative, so the second no longer qualifies.
        let mut player = player_at(100, 480, 1.0);
        let platforms = [Platform::new(90, 505), Platform::new(95, 500)];

        let result = resolve_platforms(&mut player, &platforms);
        assert_eq!(result.hits, 1);
        assert_eq!(result.last, Some(0));
        assert_eq!(player.rect.y, 505 - 30);
    }
}
