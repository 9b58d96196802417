//! wgpu render backend for the dungeon starter.
//!
//! Draws the static level geometry (floor and walls) from a fixed camera
//! hovering behind the player start cell.
//!
//! # Invariants
//! - GPU objects are owned by exactly one wrapper and released on drop.
//! - The renderer never mutates the level or the CPU-side mesh.
//! - Shader compile errors surface as [`RenderError`], never as a panic.

mod camera;
mod gpu;
mod program;
mod shaders;

pub use camera::FollowCamera;
pub use gpu::{CLEAR_COLOR, FLOOR_COLOR, GpuMesh, WALL_COLOR, WgpuRenderer};
pub use program::ShaderProgram;
pub use shaders::WORLD_SHADER;

/// Errors from GPU resource creation.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("shader compilation failed: {0}")]
    ShaderCompile(String),
}
