use glam::{Mat4, Vec3};

use crate::config::CameraConfig;

/// Perspective camera with a mutable position and look-at target. The
/// projection matrix is cached; after `set_aspect`, call
/// `recompute_projection` so the cache matches. Resize handlers do both
/// in one step, before the next frame is composed.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    fovy: f32,
    aspect: f32,
    near: f32,
    far: f32,
    projection: Mat4,
}

impl Camera {
    pub fn new(config: &CameraConfig, aspect: f32) -> Self {
        let mut camera = Self {
            position: Vec3::from_array(config.position),
            target: Vec3::from_array(config.look_at),
            fovy: config.fovy.to_radians(),
            aspect,
            near: config.near,
            far: config.far,
            projection: Mat4::IDENTITY,
        };
        camera.recompute_projection();
        camera
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    pub fn recompute_projection(&mut self) {
        self.projection = Mat4::perspective_rh(self.fovy, self.aspect, self.near, self.far);
    }

    pub fn projection_matrix(&self) -> Mat4 {
        self.projection
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection * self.view_matrix()
    }
}
