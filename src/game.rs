//! Frame controller
//!
//! One `frame` call = poll input, simulate, render. The controller owns the
//! simulation state and the render adapter; the window system owns the
//! input queue and the drawing surface and lends them in each frame.

use crate::consts::MOVE_SPEED;
use crate::platform::{Direction, InputEvent, InputSource};
use crate::renderer::{DrawSurface, RenderAdapter, Sprites};
use crate::sim::{EndReason, GamePhase, GameState, TickInput, tick};

/// Input state carried between frames
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputState {
    /// Horizontal velocity from the last direction key event
    pub move_x: f32,
}

impl InputState {
    /// Fold one event into the state. Returns true for a quit request.
    ///
    /// Releasing either direction key stops horizontal movement, even if
    /// the opposite key is still down.
    pub fn handle(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::Quit => return true,
            InputEvent::KeyDown(Direction::Left) => self.move_x = -MOVE_SPEED,
            InputEvent::KeyDown(Direction::Right) => self.move_x = MOVE_SPEED,
            InputEvent::KeyUp(_) => self.move_x = 0.0,
        }
        false
    }
}

/// The running game
pub struct GameLoop {
    state: GameState,
    input: InputState,
    renderer: RenderAdapter,
}

impl GameLoop {
    pub fn new(seed: u64, sprites: Sprites) -> Self {
        log::info!("Game initialized with seed: {}", seed);
        Self::with_state(GameState::new(seed), sprites)
    }

    /// Start from a prepared state
    pub fn with_state(state: GameState, sprites: Sprites) -> Self {
        Self {
            state,
            input: InputState::default(),
            renderer: RenderAdapter::new(sprites),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn input(&self) -> InputState {
        self.input
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    /// Run one frame and return the resulting phase.
    ///
    /// Once terminated, further calls do nothing.
    pub fn frame<I, S>(&mut self, input: &mut I, surface: &mut S) -> GamePhase
    where
        I: InputSource + ?Sized,
        S: DrawSurface + ?Sized,
    {
        if !self.is_running() {
            return self.state.phase;
        }

        let mut quit = false;
        for event in input.poll_events() {
            quit |= self.input.handle(event);
        }

        tick(
            &mut self.state,
            &TickInput {
                move_x: self.input.move_x,
                quit,
            },
        );

        self.renderer.render(&self.state, surface);

        if let Some(reason) = self.state.end_reason {
            let how = match reason {
                EndReason::Quit => "quit",
                EndReason::FellOff => "fell off",
            };
            log::info!(
                "Run over ({}) after {} frames, climbed {} px",
                how,
                self.state.frames,
                self.state.climb_height()
            );
        }

        self.state.phase
    }
}
