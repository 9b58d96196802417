use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// GPU-ready vertex: position and face normal.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// A non-indexed triangle list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
}

impl MeshData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertices.len() as u32
    }

    pub fn triangle_count(&self) -> u32 {
        self.vertex_count() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Axis-aligned bounds `(min, max)`, or `None` for an empty mesh.
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let mut iter = self.vertices.iter().map(|v| Vec3::from(v.position));
        let first = iter.next()?;
        Some(iter.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p))))
    }

    /// Append quad `a,b,c,d` as triangles `a-b-c` and `a-c-d`.
    pub(crate) fn push_quad(&mut self, [a, b, c, d]: [Vec3; 4], normal: Vec3) {
        let normal = normal.to_array();
        for p in [a, b, c, a, c, d] {
            self.vertices.push(Vertex {
                position: p.to_array(),
                normal,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quad_is_two_triangles() {
        let mut mesh = MeshData::new();
        mesh.push_quad(
            [
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(1.0, 0.0, 1.0),
                Vec3::new(0.0, 0.0, 1.0),
            ],
            Vec3::Y,
        );
        assert_eq!(mesh.vertex_count(), 6);
        assert_eq!(mesh.triangle_count(), 2);
        // Shared diagonal a-c.
        assert_eq!(mesh.vertices[0], mesh.vertices[3]);
        assert_eq!(mesh.vertices[2], mesh.vertices[4]);
    }

    #[test]
    fn empty_mesh_has_no_bounds() {
        assert!(MeshData::new().bounds().is_none());
    }

    #[test]
    fn vertex_layout_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<Vertex>(), 24);
        let v = [Vertex {
            position: [1.0, 2.0, 3.0],
            normal: [0.0, 1.0, 0.0],
        }];
        let floats: &[f32] = bytemuck::cast_slice(&v);
        assert_eq!(floats, &[1.0, 2.0, 3.0, 0.0, 1.0, 0.0]);
    }
}
