//! Procedural platform placement
//!
//! Each new platform sits above the previous spawn anchor, separated by a
//! random gap of less than a quarter window height, and is always fully
//! inside the window horizontally.

use rand::Rng;

use super::state::Platform;
use crate::consts::*;

/// Largest gap (exclusive) between consecutive spawns, before platform height
pub const MAX_SPAWN_GAP: i32 = WINDOW_HEIGHT / 4;

/// Largest x (exclusive) a platform may start at
pub const MAX_SPAWN_X: i32 = WINDOW_WIDTH - PLATFORM_WIDTH;

/// Generate the next platform above `last_height`
pub fn next_platform<R: Rng + ?Sized>(rng: &mut R, last_height: i32) -> Platform {
    let y = last_height - rng.random_range(0..MAX_SPAWN_GAP) - PLATFORM_HEIGHT;
    let x = rng.random_range(0..MAX_SPAWN_X);
    Platform::new(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_same_seed_same_layout() {
        let mut a = Pcg32::seed_from_u64(42);
        let mut b = Pcg32::seed_from_u64(42);
        let mut last_a = WINDOW_HEIGHT;
        let mut last_b = WINDOW_HEIGHT;
        for _ in 0..50 {
            let pa = next_platform(&mut a, last_a);
            let pb = next_platform(&mut b, last_b);
            assert_eq!(pa, pb);
            last_a = pa.rect.y;
            last_b = pb.rect.y;
        }
    }

    proptest! {
        #[test]
        fn prop_spawn_is_above_anchor_and_inside_window(
            seed in any::<u64>(),
            last in -1_000_000i32..=WINDOW_HEIGHT,
        ) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let platform = next_platform(&mut rng, last);

            prop_assert!(platform.rect.y <= last - PLATFORM_HEIGHT);
            prop_assert!(platform.rect.y > last - MAX_SPAWN_GAP - PLATFORM_HEIGHT);
            prop_assert!(platform.rect.x >= 0);
            prop_assert!(platform.rect.right() < WINDOW_WIDTH);
            prop_assert_eq!(platform.rect.w, PLATFORM_WIDTH);
            prop_assert_eq!(platform.rect.h, PLATFORM_HEIGHT);
        }
    }
}
