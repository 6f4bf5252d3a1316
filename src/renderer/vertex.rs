//! Vertex types and per-frame sprite batching

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use super::TextureId;
use crate::consts::{WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::sim::Rect;

/// Textured 2D vertex
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct SpriteVertex {
    pub position: [f32; 2],
    pub uv: [f32; 2],
}

impl SpriteVertex {
    pub const fn new(position: [f32; 2], uv: [f32; 2]) -> Self {
        Self { position, uv }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<SpriteVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x2,
                },
            ],
        }
    }
}

/// Convert window pixels to normalized device coordinates.
/// The window is always mapped as WINDOW_WIDTH x WINDOW_HEIGHT; y points down.
pub fn pixel_to_ndc(x: i32, y: i32) -> Vec2 {
    Vec2::new(
        x as f32 / WINDOW_WIDTH as f32 * 2.0 - 1.0,
        1.0 - y as f32 / WINDOW_HEIGHT as f32 * 2.0,
    )
}

/// Consecutive vertices sharing one texture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawRun {
    pub texture: TextureId,
    pub start: u32,
    pub count: u32,
}

/// Quads collected during a frame, drawn in submission order
#[derive(Debug, Default)]
pub struct SpriteBatch {
    pub vertices: Vec<SpriteVertex>,
    pub runs: Vec<DrawRun>,
}

impl SpriteBatch {
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.runs.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Append a textured quad covering `dest`
    pub fn push_quad(&mut self, texture: TextureId, dest: Rect) {
        let tl = pixel_to_ndc(dest.x, dest.y);
        let br = pixel_to_ndc(dest.right(), dest.bottom());

        let top_left = SpriteVertex::new([tl.x, tl.y], [0.0, 0.0]);
        let top_right = SpriteVertex::new([br.x, tl.y], [1.0, 0.0]);
        let bottom_left = SpriteVertex::new([tl.x, br.y], [0.0, 1.0]);
        let bottom_right = SpriteVertex::new([br.x, br.y], [1.0, 1.0]);

        let start = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&[
            top_left,
            bottom_left,
            top_right,
            top_right,
            bottom_left,
            bottom_right,
        ]);

        match self.runs.last_mut() {
            Some(run) if run.texture == texture => run.count += 6,
            _ => self.runs.push(DrawRun {
                texture,
                start,
                count: 6,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_corners_map_to_ndc_corners() {
        assert_eq!(pixel_to_ndc(0, 0), Vec2::new(-1.0, 1.0));
        assert_eq!(pixel_to_ndc(WINDOW_WIDTH, WINDOW_HEIGHT), Vec2::new(1.0, -1.0));
        assert_eq!(
            pixel_to_ndc(WINDOW_WIDTH / 2, WINDOW_HEIGHT / 2),
            Vec2::new(0.0, 0.0)
        );
    }

    #[test]
    fn test_runs_merge_same_texture() {
        let mut batch = SpriteBatch::default();
        batch.push_quad(TextureId(0), Rect::new(0, 0, 600, 800));
        batch.push_quad(TextureId(2), Rect::new(10, 10, 70, 10));
        batch.push_quad(TextureId(2), Rect::new(20, 20, 70, 10));
        batch.push_quad(TextureId(1), Rect::new(0, 0, 30, 30));

        assert_eq!(batch.vertices.len(), 24);
        assert_eq!(
            batch.runs,
            vec![
                DrawRun { texture: TextureId(0), start: 0, count: 6 },
                DrawRun { texture: TextureId(2), start: 6, count: 12 },
                DrawRun { texture: TextureId(1), start: 18, count: 6 },
            ]
        );

        batch.clear();
        assert!(batch.is_empty());
        assert!(batch.runs.is_empty());
    }

    #[test]
    fn test_quad_uvs_cover_texture() {
        let mut batch = SpriteBatch::default();
        batch.push_quad(TextureId(0), Rect::new(0, 0, 600, 800));
        assert_eq!(batch.vertices[0], SpriteVertex::new([-1.0, 1.0], [0.0, 0.0]));
        assert_eq!(batch.vertices[5], SpriteVertex::new([1.0, -1.0], [1.0, 1.0]));
    }
}
