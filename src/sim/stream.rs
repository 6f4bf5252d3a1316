//! World streaming: camera follow, platform spawning and pruning
//!
//! The level is infinite but the platform list stays bounded: platforms are
//! appended as the camera climbs and dropped once they fall far enough
//! below the viewport.

use rand::Rng;

use super::spawn::next_platform;
use super::state::{GameState, Platform};
use crate::consts::*;

/// What the streamer did this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StreamResult {
    pub camera_moved: bool,
    pub spawned: bool,
    pub pruned: usize,
}

/// Prune threshold: platforms with y beyond this are off-screen for good
#[inline]
pub fn prune_line(camera_y: f32) -> f32 {
    camera_y + (WINDOW_HEIGHT + PRUNE_MARGIN) as f32
}

/// Scroll the camera up to keep the player in the upper half of the view.
///
/// Returns true if the camera moved. Spawning is only considered on those
/// frames, so a player who stalls below the midline never gets new
/// platforms.
pub fn follow_camera<R: Rng + ?Sized>(
    player_y: i32,
    camera_y: &mut f32,
    platforms: &mut Vec<Platform>,
    last_platform_height: &mut i32,
    rng: &mut R,
) -> (bool, bool) {
    let half = WINDOW_HEIGHT / 2;
    if (player_y as f32) >= *camera_y + half as f32 {
        return (false, false);
    }
    *camera_y = (player_y - half) as f32;

    let mut spawned = false;
    if (player_y as f32) < *camera_y + (WINDOW_HEIGHT - SPAWN_MARGIN) as f32 {
        let platform = next_platform(rng, *last_platform_height);
        log::debug!(
            "Spawned platform at ({}, {})",
            platform.rect.x,
            platform.rect.y
        );
        *last_platform_height = platform.rect.y;
        platforms.push(platform);
        spawned = true;
    }
    (true, spawned)
}

/// Drop every platform below the prune line, preserving order
pub fn prune(platforms: &mut Vec<Platform>, camera_y: f32) -> usize {
    let line = prune_line(camera_y);
    let before = platforms.len();
    platforms.retain(|p| p.rect.y as f32 <= line);
    before - platforms.len()
}

/// Run camera follow, spawning and pruning against the game state
pub fn stream(state: &mut GameState) -> StreamResult {
    let (camera_moved, spawned) = follow_camera(
        state.player.rect.y,
        &mut state.camera_y,
        &mut state.platforms,
        &mut state.last_platform_height,
        &mut state.rng,
    );
    let pruned = prune(&mut state.platforms, state.camera_y);
    if pruned > 0 {
        log::debug!(
            "Pruned {} platform(s), {} remain",
            pruned,
            state.platforms.len()
        );
    }
    StreamResult {
        camera_moved,
        spawned,
        pruned,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_camera_follows_above_midline() {
        let mut state = GameState::new(3);
        let y = -(WINDOW_HEIGHT / 2) - 1;

        let (moved, spawned) = follow_camera(
            y,
            &mut state.camera_y,
            &mut state.platforms,
            &mut state.last_platform_height,
            &mut state.rng,
        );
        assert!(moved);
        assert_eq!(state.camera_y, (y - WINDOW_HEIGHT / 2) as f32);
        // Player is well above the spawn margin, so exactly one platform appears
        assert!(spawned);
        assert_eq!(state.platforms.len(), 2);
        assert_eq!(state.last_platform_height, state.platforms[1].rect.y);
    }

    #[test]
    fn test_stream_reports_spawn_and_prune() {
        let mut state = GameState::new(3);
        state.player.rect.y = -(WINDOW_HEIGHT / 2) - 1;

        let result = stream(&mut state);
        assert!(result.camera_moved);
        assert!(result.spawned);
        // The camera jumped far enough that the starting platform is gone
        assert!(result.pruned >= 1);
        assert!(!state.platforms.contains(&Platform::starting()));
    }

    #[test]
    fn test_camera_still_below_midline() {
        let mut state = GameState::new(3);
        state.player.rect.y = WINDOW_HEIGHT / 2;

        let result = stream(&mut state);
        assert!(!result.camera_moved);
        assert!(!result.spawned);
        assert_eq!(state.camera_y, 0.0);
        assert_eq!(state.platforms.len(), 1);
    }

    #[test]
    fn test_camera_never_moves_down() {
        let mut state = GameState::new(3);
        state.camera_y = -5_000.0;
        state.player.rect.y = -3_000;

        let result = stream(&mut state);
        assert!(!result.camera_moved);
        assert_eq!(state.camera_y, -5_000.0);
    }

    #[test]
    fn test_no_spawn_when_camera_still() {
        // Last spawn far above, player below the midline: nothing new appears
        let mut state = GameState::new(9);
        state.player.rect.y = 500;
        for _ in 0..100 {
            stream(&mut state);
        }
        assert_eq!(state.platforms.len(), 1);
        assert_eq!(state.last_platform_height, WINDOW_HEIGHT);
    }

    #[test]
    fn test_prune_boundary() {
        let camera_y = -1_000.0;
        let base = camera_y as i32 + WINDOW_HEIGHT;
        let mut platforms = vec![
            Platform::new(0, base + PRUNE_MARGIN + 1),
            Platform::new(10, base + PRUNE_MARGIN),
            Platform::new(20, base),
        ];

        let removed = prune(&mut platforms, camera_y);
        assert_eq!(removed, 1);
        assert_eq!(platforms.len(), 2);
        assert_eq!(platforms[0].rect.x, 10);
        assert_eq!(platforms[1].rect.x, 20);
    }

    #[test]
    fn test_prune_preserves_order() {
        let mut platforms = vec![
            Platform::new(1, 100),
            Platform::new(2, 5_000),
            Platform::new(3, 200),
            Platform::new(4, 6_000),
            Platform::new(5, 300),
        ];
        prune(&mut platforms, 0.0);
        let xs: Vec<i32> = platforms.iter().map(|p| p.rect.x).collect();
        assert_eq!(xs, vec![1, 3, 5]);
    }

    #[test]
    fn test_starting_platform_scrolls_away() {
        let mut state = GameState::new(11);
        // Camera high enough that the starting platform is past the prune line
        state.player.rect.y = -700;
        stream(&mut state);
        assert_eq!(state.camera_y, -1_100.0);
        assert!(
            !state
                .platforms
                .iter()
                .any(|p| *p == Platform::starting())
        );
    }

    proptest! {
        #[test]
        fn prop_prune_idempotent(
            camera_y in -100_000i32..0,
            ys in proptest::collection::vec(-100_000i32..2_000, 0..64),
        ) {
            let camera_y = camera_y as f32;
            let mut platforms: Vec<Platform> = ys.iter().map(|&y| Platform::new(0, y)).collect();
            prune(&mut platforms, camera_y);
            let snapshot = platforms.clone();
            prop_assert_eq!(prune(&mut platforms, camera_y), 0);
            prop_assert_eq!(platforms, snapshot);
        }

        #[test]
        fn prop_spawns_keep_climbing(seed in any::<u64>(), steps in 1usize..200) {
            let mut state = GameState::new(seed);
            for i in 0..steps {
                let anchor = state.last_platform_height;
                state.player.rect.y = -(i as i32) * 5 - WINDOW_HEIGHT / 2 - 1;
                let result = stream(&mut state);
                if result.spawned {
                    prop_assert!(state.last_platform_height <= anchor - PLATFORM_HEIGHT);
                }
            }
        }
    }
}
