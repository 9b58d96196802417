//! Level-to-mesh conversion.
//!
//! Floor cells become flat quads, wall cells become open four-sided prisms.
//! Output is a non-indexed triangle list, one mesh for floors and one for
//! walls, ready to upload as-is.
//!
//! # Invariants
//! - Every quad is emitted as two triangles `a-b-c`, `a-c-d` (6 vertices).
//! - Grid column maps to world X, grid row maps to world Z, one unit per cell.

mod builder;
mod vertex;

pub use builder::{MeshOptions, MeshStats, WorldMesh, build_world_mesh};
pub use vertex::{MeshData, Vertex};

pub fn crate_info() -> &'static str {
    "dungeon-mesh v0.1.0"
}
