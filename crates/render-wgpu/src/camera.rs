use dungeon_level::GridPos;
use glam::{Mat4, Vec3};

/// Fixed camera looking at a grid cell from above and behind (+Z).
pub struct FollowCamera {
    /// Point the camera looks at.
    pub target: Vec3,
    /// Eye position relative to `target`.
    pub offset: Vec3,
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for FollowCamera {
    fn default() -> Self {
        Self {
            target: Vec3::new(0.5, 0.5, 0.5),
            offset: Vec3::new(0.0, 2.0, 4.0),
            fov: 60.0_f32.to_radians(),
            aspect: 16.0 / 9.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

impl FollowCamera {
    /// Camera focused on the given cell.
    pub fn over_cell(cell: GridPos) -> Self {
        let mut cam = Self::default();
        cam.focus(cell);
        cam
    }

    /// Aim at the center of `cell`, half a unit above the floor.
    pub fn focus(&mut self, cell: GridPos) {
        self.target = Vec3::new(cell.x as f32 + 0.5, 0.5, cell.y as f32 + 0.5);
    }

    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.aspect = width.max(1) as f32 / height.max(1) as f32;
    }

    pub fn eye(&self) -> Vec3 {
        self.target + self.offset
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eye_sits_behind_and_above_player() {
        let cam = FollowCamera::over_cell(GridPos::new(1, 1));
        assert_eq!(cam.target, Vec3::new(1.5, 0.5, 1.5));
        assert_eq!(cam.eye(), Vec3::new(1.5, 2.5, 5.5));
    }

    #[test]
    fn target_projects_to_screen_center() {
        let cam = FollowCamera::over_cell(GridPos::new(7, 3));
        let clip = cam.view_projection() * cam.target.extend(1.0);
        let ndc = clip.truncate() / clip.w;
        assert!(ndc.x.abs() < 1e-5);
        assert!(ndc.y.abs() < 1e-5);
        assert!(ndc.z > 0.0 && ndc.z < 1.0);
    }

    #[test]
    fn viewport_sets_aspect() {
        let mut cam = FollowCamera::default();
        cam.set_viewport(1280, 720);
        assert!((cam.aspect - 1280.0 / 720.0).abs() < 1e-6);
        cam.set_viewport(800, 0);
        assert!(cam.aspect.is_finite());
    }

    #[test]
    fn matrices_are_finite() {
        let cam = FollowCamera::default();
        assert!(cam.view_projection().is_finite());
    }
}
