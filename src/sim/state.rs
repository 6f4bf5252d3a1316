//! Game state and core simulation types
//!
//! Everything the frame loop mutates lives here; rendering only reads it.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::rect::Rect;
use crate::consts::*;

/// Current phase of the run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Run ended (quit requested or player fell off the bottom)
    Terminated,
}

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    Quit,
    FellOff,
}

/// The player-controlled sprite
#[derive(Debug, Clone)]
pub struct Player {
    pub rect: Rect,
    /// Velocity in units/frame (x: horizontal input, y: gravity and bounces)
    pub vel: Vec2,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            // Centered, standing on the starting platform
            rect: Rect::new(
                WINDOW_WIDTH / 2 - PLAYER_SIZE / 2,
                WINDOW_HEIGHT - PLAYER_SIZE - PLATFORM_HEIGHT,
                PLAYER_SIZE,
                PLAYER_SIZE,
            ),
            vel: Vec2::ZERO,
        }
    }
}

/// A platform the player can bounce off
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Platform {
    pub rect: Rect,
}

impl Platform {
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            rect: Rect::new(x, y, PLATFORM_WIDTH, PLATFORM_HEIGHT),
        }
    }

    /// The platform every run starts on, centered along the bottom edge
    pub fn starting() -> Self {
        Self::new(
            WINDOW_WIDTH / 2 - PLATFORM_WIDTH / 2,
            WINDOW_HEIGHT - PLATFORM_HEIGHT,
        )
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Platform placement generator, seeded from `seed`
    pub rng: Pcg32,
    /// Frames simulated so far
    pub frames: u64,
    /// Current phase
    pub phase: GamePhase,
    /// Set once the phase becomes `Terminated`
    pub end_reason: Option<EndReason>,
    pub player: Player,
    /// Platforms in spawn order
    pub platforms: Vec<Platform>,
    /// Vertical viewport offset subtracted from world y when drawing
    pub camera_y: f32,
    /// y of the most recently spawned platform
    pub last_platform_height: i32,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            frames: 0,
            phase: GamePhase::Running,
            end_reason: None,
            player: Player::default(),
            platforms: vec![Platform::starting()],
            camera_y: 0.0,
            last_platform_height: WINDOW_HEIGHT,
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Move to `Terminated`; the first reason recorded wins
    pub fn terminate(&mut self, reason: EndReason) {
        if self.phase == GamePhase::Running {
            self.phase = GamePhase::Terminated;
            self.end_reason = Some(reason);
        }
    }

    /// True once the player has dropped below the bottom of the world
    pub fn player_fell_off(&self) -> bool {
        self.player.rect.y > WINDOW_HEIGHT
    }

    /// Height climbed so far, measured by how far the camera has risen
    pub fn climb_height(&self) -> i32 {
        (-self.camera_y).max(0.0) as i32
    }
}
