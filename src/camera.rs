use glam::{Mat4, Vec3};

use crate::config::CameraConfig;

/// Right-handed perspective camera looking down -Z from `position`.
///
/// The projection is cached and only rebuilt by `set_aspect`, mirroring an
/// explicit "update projection" step after the aspect changes.
#[derive(Clone, Debug)]
pub struct PerspectiveCamera {
    pub position: Vec3,
    fov_y: f32,
    aspect: f32,
    near: f32,
    far: f32,
    projection: Mat4,
}

impl PerspectiveCamera {
    pub fn new(config: &CameraConfig, aspect: f32) -> Self {
        let fov_y = config.fov_y_degrees.to_radians();
        Self {
            position: config.position,
            fov_y,
            aspect,
            near: config.near,
            far: config.far,
            projection: Mat4::perspective_rh_gl(fov_y, aspect.max(1e-6), config.near, config.far),
        }
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
        self.projection =
            Mat4::perspective_rh_gl(self.fov_y, aspect.max(1e-6), self.near, self.far);
    }

    #[inline]
    pub fn projection_matrix(&self) -> Mat4 {
        self.projection
    }

    #[inline]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_translation(-self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    fn cfg() -> CameraConfig {
        CameraConfig {
            fov_y_degrees: 75.0,
            near: 0.1,
            far: 1000.0,
            position: Vec3::new(0.0, 0.0, 1000.0),
        }
    }

    #[test]
    fn set_aspect_rebuilds_projection() {
        let mut cam = PerspectiveCamera::new(&cfg(), 1.0);
        let before = cam.projection_matrix();
        cam.set_aspect(2.0);
        assert_eq!(cam.aspect(), 2.0);
        // x scale is f / aspect
        let ratio = before.x_axis.x / cam.projection_matrix().x_axis.x;
        assert!((ratio - 2.0).abs() < 1e-5);
    }

    #[test]
    fn origin_projects_to_screen_centre() {
        let cam = PerspectiveCamera::new(&cfg(), 16.0 / 9.0);
        let clip = cam.projection_matrix() * cam.view_matrix() * Vec4::new(0.0, 0.0, 0.0, 1.0);
        assert!(clip.x.abs() < 1e-4 && clip.y.abs() < 1e-4);
        assert!(clip.w > 0.0);
    }
}
