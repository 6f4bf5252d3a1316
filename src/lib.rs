//! Sky Hop - a vertical-scrolling platform jumper
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, platform streaming)
//! - `game`: Frame controller tying input, simulation and rendering together
//! - `renderer`: Drawing surface abstraction and the WebGPU sprite pipeline
//! - `platform`: Input event abstraction and window-system key mapping
//! - `settings`: JSON-backed runtime settings

pub mod error;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::GameError;
pub use game::GameLoop;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Window dimensions (world units are pixels)
    pub const WINDOW_WIDTH: i32 = 600;
    pub const WINDOW_HEIGHT: i32 = 800;

    /// Player sprite is a square
    pub const PLAYER_SIZE: i32 = 30;

    /// Platform dimensions
    pub const PLATFORM_WIDTH: i32 = 70;
    pub const PLATFORM_HEIGHT: i32 = 10;

    /// Downward acceleration per frame (units/frame²)
    pub const GRAVITY: f32 = 0.01;
    /// Vertical velocity applied on a bounce (negative is up)
    pub const JUMP_STRENGTH: f32 = -3.8;
    /// Horizontal speed while a direction key is held
    pub const MOVE_SPEED: f32 = 1.0;

    /// Player must be this far above the viewport bottom for a spawn
    pub const SPAWN_MARGIN: i32 = 100;
    /// Platforms further than this below the viewport bottom are dropped
    pub const PRUNE_MARGIN: i32 = 250;
}

/// Truncate a velocity component toward zero, the way a per-frame integer
/// displacement is derived from it.
#[inline]
pub fn displacement(velocity: f32) -> i32 {
    velocity.trunc() as i32
}
