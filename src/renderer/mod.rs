//! Rendering module
//!
//! The game draws through `DrawSurface`, a minimal blitting interface
//! (clear, draw a texture into a rectangle, present). `RenderAdapter`
//! turns world-space state into camera-space draw calls; `WgpuSurface` is
//! the GPU implementation used by the native binary.

pub mod pipeline;
pub mod vertex;

use std::path::Path;

use glam::IVec2;

use crate::consts::*;
use crate::error::GameError;
use crate::settings::AssetPaths;
use crate::sim::{GameState, Rect};

pub use pipeline::WgpuSurface;

/// Handle to a texture owned by a surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(pub usize);

/// Drawing backend the game submits each frame to
pub trait DrawSurface {
    /// Load an image file into a texture
    fn load_texture(&mut self, path: &Path) -> Result<TextureId, GameError>;
    /// Start a new frame
    fn clear(&mut self);
    /// Draw a whole texture stretched into `dest` (window pixels)
    fn draw_image(&mut self, texture: TextureId, dest: Rect);
    /// Show the frame
    fn present(&mut self);
}

/// The three sprites the game needs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sprites {
    pub background: TextureId,
    pub player: TextureId,
    pub platform: TextureId,
}

impl Sprites {
    /// Load all sprites; the first failure aborts
    pub fn load<S: DrawSurface + ?Sized>(
        surface: &mut S,
        assets: &AssetPaths,
    ) -> Result<Self, GameError> {
        let background = surface.load_texture(&assets.background)?;
        let player = surface.load_texture(&assets.player)?;
        let platform = surface.load_texture(&assets.platform)?;
        Ok(Self {
            background,
            player,
            platform,
        })
    }
}

/// Translates world rectangles into window rectangles using the camera
#[derive(Debug, Clone, Copy)]
pub struct RenderAdapter {
    sprites: Sprites,
}

impl RenderAdapter {
    pub fn new(sprites: Sprites) -> Self {
        Self { sprites }
    }

    pub fn sprites(&self) -> Sprites {
        self.sprites
    }

    /// World rectangle as seen through a camera at `camera_y`
    #[inline]
    pub fn to_screen(rect: Rect, camera_y: f32) -> Rect {
        rect.offset(IVec2::new(0, -(camera_y as i32)))
    }

    /// Submit one frame: background, player, then platforms in spawn order
    pub fn render<S: DrawSurface + ?Sized>(&self, state: &GameState, surface: &mut S) {
        surface.clear();
        surface.draw_image(
            self.sprites.background,
            Rect::new(0, 0, WINDOW_WIDTH, WINDOW_HEIGHT),
        );
        surface.draw_image(
            self.sprites.player,
            Self::to_screen(state.player.rect, state.camera_y),
        );
        for platform in &state.platforms {
            surface.draw_image(
                self.sprites.platform,
                Self::to_screen(platform.rect, state.camera_y),
            );
        }
        surface.present();
    }
}
