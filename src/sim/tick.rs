//! Simulation frame
//!
//! Advances the game state by exactly one frame. There is no fixed timestep:
//! one call per presented frame.

use super::physics;
use super::state::{EndReason, GamePhase, GameState};
use super::stream::{StreamResult, stream};

/// Input commands for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    /// Horizontal velocity requested by the held direction key
    pub move_x: f32,
    /// Quit was requested this frame
    pub quit: bool,
}

/// Summary of one frame, mostly for logging and tests
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    pub bounced: bool,
    /// Index of the platform that decided the bounce, if any
    pub landed_on: Option<usize>,
    pub stream: StreamResult,
}

/// Advance the game state by one frame.
///
/// The frame that ends the run still completes camera, spawn and prune so
/// the last rendered picture matches the final state.
pub fn tick(state: &mut GameState, input: &TickInput) -> TickReport {
    if state.phase == GamePhase::Terminated {
        return TickReport::default();
    }

    if input.quit {
        state.terminate(EndReason::Quit);
    }

    state.frames += 1;
    state.player.vel.x = input.move_x;

    let bounce = physics::step(&mut state.player, &state.platforms);
    if let Some(index) = bounce.last {
        log::debug!(
            "Frame {}: bounced off platform {} ({} hit)",
            state.frames,
            index,
            bounce.hits
        );
    }

    if state.player_fell_off() {
        state.terminate(EndReason::FellOff);
    }

    let stream = stream(state);

    TickReport {
        bounced: bounce.bounced(),
        landed_on: bounce.last,
        stream,
    }
}
