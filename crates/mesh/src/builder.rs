use crate::vertex::MeshData;
use dungeon_level::{Cell, Level};
use glam::Vec3;
use serde::Serialize;

/// Mesh generation parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshOptions {
    /// Height of the floor plane and base of the walls.
    pub floor_y: f32,
    /// Wall height above `floor_y`.
    pub wall_height: f32,
    /// Skip wall faces that touch another wall cell.
    pub cull_shared_faces: bool,
}

impl Default for MeshOptions {
    fn default() -> Self {
        Self {
            floor_y: 0.0,
            wall_height: 1.5,
            cull_shared_faces: false,
        }
    }
}

/// Static world geometry, split so floors and walls can be drawn in
/// different colors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorldMesh {
    pub floor: MeshData,
    pub walls: MeshData,
}

/// Vertex/triangle counts for debug output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MeshStats {
    pub floor_vertices: u32,
    pub floor_triangles: u32,
    pub wall_vertices: u32,
    pub wall_triangles: u32,
}

impl WorldMesh {
    pub fn stats(&self) -> MeshStats {
        MeshStats {
            floor_vertices: self.floor.vertex_count(),
            floor_triangles: self.floor.triangle_count(),
            wall_vertices: self.walls.vertex_count(),
            wall_triangles: self.walls.triangle_count(),
        }
    }
}

/// Build floor and wall geometry for a level in one row-major pass.
pub fn build_world_mesh(level: &Level, options: &MeshOptions) -> WorldMesh {
    let mut mesh = WorldMesh::default();
    let h0 = options.floor_y;
    let h1 = options.floor_y + options.wall_height;

    let is_wall = |x: i32, y: i32| level.cell(x, y) == Some(Cell::Wall);
    let keep = |x: i32, y: i32| !(options.cull_shared_faces && is_wall(x, y));

    for (pos, cell) in level.iter() {
        let (gx, gy) = (pos.x, pos.y);
        let (x0, z0) = (gx as f32, gy as f32);
        let (x1, z1) = (x0 + 1.0, z0 + 1.0);

        match cell {
            Cell::Floor => {
                mesh.floor.push_quad(
                    [
                        Vec3::new(x0, h0, z0),
                        Vec3::new(x1, h0, z0),
                        Vec3::new(x1, h0, z1),
                        Vec3::new(x0, h0, z1),
                    ],
                    Vec3::Y,
                );
            }
            Cell::Wall => {
                // front (z + 1)
                if keep(gx, gy + 1) {
                    mesh.walls.push_quad(
                        [
                            Vec3::new(x0, h0, z1),
                            Vec3::new(x1, h0, z1),
                            Vec3::new(x1, h1, z1),
                            Vec3::new(x0, h1, z1),
                        ],
                        Vec3::Z,
                    );
                }
                // back (z)
                if keep(gx, gy - 1) {
                    mesh.walls.push_quad(
                        [
                            Vec3::new(x1, h0, z0),
                            Vec3::new(x0, h0, z0),
                            Vec3::new(x0, h1, z0),
                            Vec3::new(x1, h1, z0),
                        ],
                        Vec3::NEG_Z,
                    );
                }
                // left (x)
                if keep(gx - 1, gy) {
                    mesh.walls.push_quad(
                        [
                            Vec3::new(x0, h0, z0),
                            Vec3::new(x0, h0, z1),
                            Vec3::new(x0, h1, z1),
                            Vec3::new(x0, h1, z0),
                        ],
                        Vec3::NEG_X,
                    );
                }
                // right (x + 1)
                if keep(gx + 1, gy) {
                    mesh.walls.push_quad(
                        [
                            Vec3::new(x1, h0, z1),
                            Vec3::new(x1, h0, z0),
                            Vec3::new(x1, h1, z0),
                            Vec3::new(x1, h1, z1),
                        ],
                        Vec3::X,
                    );
                }
            }
        }
    }

    tracing::debug!(
        "built world mesh: {} floor vertices, {} wall vertices",
        mesh.floor.vertex_count(),
        mesh.walls.vertex_count()
    );
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(text: &str) -> WorldMesh {
        build_world_mesh(&Level::parse(text), &MeshOptions::default())
    }

    #[test]
    fn single_floor_cell() {
        let mesh = build(".");
        assert_eq!(mesh.floor.vertex_count(), 6);
        assert!(mesh.walls.is_empty());

        let positions: Vec<[f32; 3]> = mesh.floor.vertices.iter().map(|v| v.position).collect();
        assert_eq!(
            positions,
            vec![
                [0.0, 0.0, 0.0],
                [1.0, 0.0, 0.0],
                [1.0, 0.0, 1.0],
                [0.0, 0.0, 0.0],
                [1.0, 0.0, 1.0],
                [0.0, 0.0, 1.0],
            ]
        );
        assert!(mesh.floor.vertices.iter().all(|v| v.normal == [0.0, 1.0, 0.0]));
    }

    #[test]
    fn single_wall_cell_is_open_prism() {
        let mesh = build("#");
        assert!(mesh.floor.is_empty());
        assert_eq!(mesh.walls.vertex_count(), 24);

        let (lo, hi) = mesh.walls.bounds().unwrap();
        assert_eq!(lo, Vec3::new(0.0, 0.0, 0.0));
        assert_eq!(hi, Vec3::new(1.0, 1.5, 1.0));

        // Faces in order: front, back, left, right.
        let normals: Vec<[f32; 3]> = mesh.walls.vertices.chunks(6).map(|q| q[0].normal).collect();
        assert_eq!(
            normals,
            vec![
                [0.0, 0.0, 1.0],
                [0.0, 0.0, -1.0],
                [-1.0, 0.0, 0.0],
                [1.0, 0.0, 0.0],
            ]
        );
    }

    #[test]
    fn wall_faces_lie_on_cell_edges() {
        let mesh = build("..\n.#");
        let face = |i: usize| &mesh.walls.vertices[i * 6..i * 6 + 6];
        assert!(face(0).iter().all(|v| v.position[2] == 2.0));
        assert!(face(1).iter().all(|v| v.position[2] == 1.0));
        assert!(face(2).iter().all(|v| v.position[0] == 1.0));
        assert!(face(3).iter().all(|v| v.position[0] == 2.0));
    }

    #[test]
    fn wall_winding_faces_outward() {
        let mesh = build("#");
        for tri in mesh.walls.vertices.chunks(3) {
            let a = Vec3::from(tri[0].position);
            let b = Vec3::from(tri[1].position);
            let c = Vec3::from(tri[2].position);
            let n = (b - a).cross(c - a).normalize();
            assert!(n.abs_diff_eq(Vec3::from(tri[0].normal), 1e-6));
        }
    }

    #[test]
    fn counts_scale_with_cells() {
        let level = Level::parse("#####\n#@..#\n#####");
        let mesh = build_world_mesh(&level, &MeshOptions::default());
        let stats = mesh.stats();
        assert_eq!(stats.floor_vertices as usize, 6 * level.count(Cell::Floor));
        assert_eq!(stats.wall_vertices as usize, 24 * level.count(Cell::Wall));
        assert_eq!(stats.floor_triangles, 6);
        assert_eq!(stats.wall_triangles, 12 * 8);
    }

    #[test]
    fn player_marker_is_plain_floor() {
        assert_eq!(build("@"), build("."));
    }

    #[test]
    fn floor_sits_on_floor_plane() {
        let options = MeshOptions {
            floor_y: -0.5,
            wall_height: 2.0,
            ..MeshOptions::default()
        };
        let mesh = build_world_mesh(&Level::parse(".#"), &options);
        assert!(mesh.floor.vertices.iter().all(|v| v.position[1] == -0.5));
        let (lo, hi) = mesh.walls.bounds().unwrap();
        assert_eq!(lo.y, -0.5);
        assert_eq!(hi.y, 1.5);
    }

    #[test]
    fn cull_removes_shared_faces() {
        let level = Level::parse("##");
        let full = build_world_mesh(&level, &MeshOptions::default());
        let culled = build_world_mesh(
            &level,
            &MeshOptions {
                cull_shared_faces: true,
                ..MeshOptions::default()
            },
        );
        assert_eq!(full.walls.vertex_count(), 48);
        assert_eq!(culled.walls.vertex_count(), 36);
    }

    #[test]
    fn cull_keeps_faces_at_map_edge() {
        let options = MeshOptions {
            cull_shared_faces: true,
            ..MeshOptions::default()
        };
        let mesh = build_world_mesh(&Level::parse("#"), &options);
        assert_eq!(mesh.walls.vertex_count(), 24);
    }

    #[test]
    fn empty_level_gives_empty_mesh() {
        let mesh = build("");
        assert!(mesh.floor.is_empty());
        assert!(mesh.walls.is_empty());
    }
}
