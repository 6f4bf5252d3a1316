//! Per-frame player integration
//!
//! Velocities are floats but positions are whole pixels: each frame moves the
//! player by the velocity truncated toward zero, so small velocities
//! accumulate without moving the sprite until they reach a full unit.

use super::collision::{BounceResult, resolve_platforms};
use super::state::{Platform, Player};
use crate::consts::*;
use crate::displacement;

/// Apply gravity and move the player by its current velocity
pub fn integrate(player: &mut Player) {
    player.vel.y += GRAVITY;
    player.rect.y += displacement(player.vel.y);
    player.rect.x += displacement(player.vel.x);
}

/// Keep the player fully inside the window horizontally
pub fn clamp_to_window(player: &mut Player) {
    if player.rect.x < 0 {
        player.rect.x = 0;
    }
    if player.rect.right() > WINDOW_WIDTH {
        player.rect.x = WINDOW_WIDTH - player.rect.w;
    }
}

/// One physics step: integrate, clamp, then bounce off platforms
pub fn step(player: &mut Player, platforms: &[Platform]) -> BounceResult {
    integrate(player);
    clamp_to_window(player);
    resolve_platforms(player, platforms)
}
