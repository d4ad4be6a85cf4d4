//! View and projection matrices built from a camera pose.

use brickify_core::{Axis, Options, PoseSnapshot};
use glam::{DMat4, DVec3, Mat4};

/// Camera uniforms for GPU.
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniforms {
    pub view: [[f32; 4]; 4],
    pub proj: [[f32; 4]; 4],
    pub view_proj: [[f32; 4]; 4],
    pub inv_proj: [[f32; 4]; 4],
    pub camera_pos: [f32; 3],
    pub _padding: f32,
}

impl Default for CameraUniforms {
    fn default() -> Self {
        Self {
            view: Mat4::IDENTITY.to_cols_array_2d(),
            proj: Mat4::IDENTITY.to_cols_array_2d(),
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            inv_proj: Mat4::IDENTITY.to_cols_array_2d(),
            camera_pos: [0.0, 0.0, 0.0],
            _padding: 0.0,
        }
    }
}

/// Lens parameters for the viewport camera.
///
/// The pose says where the camera is; this says how it projects. The camera
/// looks down its local +Z axis, so a negative pose distance places it in
/// front of the origin facing toward it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewCamera {
    /// Vertical field of view in degrees.
    pub fov_y_degrees: f64,
    /// Aspect ratio (width / height).
    pub aspect_ratio: f64,
    /// Near clipping plane.
    pub near: f64,
    /// Far clipping plane.
    pub far: f64,
}

impl ViewCamera {
    /// Creates a camera from application options.
    #[must_use]
    pub fn from_options(options: &Options) -> Self {
        Self {
            fov_y_degrees: options.fov_y_degrees,
            aspect_ratio: options.aspect_ratio(),
            near: options.near_clip,
            far: options.far_clip,
        }
    }

    /// Updates the aspect ratio from a viewport size. Zero sizes are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect_ratio = f64::from(width) / f64::from(height);
        }
    }

    /// Returns the projection matrix.
    #[must_use]
    pub fn projection_matrix(&self) -> DMat4 {
        DMat4::perspective_lh(
            self.fov_y_degrees.to_radians(),
            self.aspect_ratio,
            self.near,
            self.far,
        )
    }

    /// Returns the view matrix for `pose`.
    #[must_use]
    pub fn view_matrix(&self, pose: &PoseSnapshot) -> DMat4 {
        camera_transform(pose).inverse()
    }

    /// Returns the combined view-projection matrix.
    #[must_use]
    pub fn view_projection_matrix(&self, pose: &PoseSnapshot) -> DMat4 {
        self.projection_matrix() * self.view_matrix(pose)
    }

    /// Packs everything a shader needs for `pose`.
    #[must_use]
    pub fn uniforms(&self, pose: &PoseSnapshot) -> CameraUniforms {
        let view = self.view_matrix(pose);
        let proj = self.projection_matrix();
        let position = camera_position(pose);

        CameraUniforms {
            view: view.as_mat4().to_cols_array_2d(),
            proj: proj.as_mat4().to_cols_array_2d(),
            view_proj: (proj * view).as_mat4().to_cols_array_2d(),
            inv_proj: proj.inverse().as_mat4().to_cols_array_2d(),
            camera_pos: position.as_vec3().to_array(),
            _padding: 0.0,
        }
    }
}

impl Default for ViewCamera {
    fn default() -> Self {
        Self::from_options(&Options::default())
    }
}

/// Camera-to-world transform for `pose`.
///
/// Translation along the view axis first, then the X, Y and Z rotations in
/// that order.
#[must_use]
pub fn camera_transform(pose: &PoseSnapshot) -> DMat4 {
    let translation = DMat4::from_translation(DVec3::new(0.0, 0.0, pose.distance));
    Axis::ALL.iter().fold(translation, |transform, &axis| {
        transform * DMat4::from_axis_angle(axis.unit(), pose.angle(axis).to_radians())
    })
}

/// World-space position of the camera for `pose`.
#[must_use]
pub fn camera_position(pose: &PoseSnapshot) -> DVec3 {
    camera_transform(pose).transform_point3(DVec3::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use brickify_core::CameraPose;

    fn level_pose(distance: f64) -> PoseSnapshot {
        PoseSnapshot {
            distance,
            angle_x: 0.0,
            angle_y: 0.0,
            angle_z: 0.0,
        }
    }

    #[test]
    fn test_level_pose_sees_origin_ahead() {
        let camera = ViewCamera::default();
        let view = camera.view_matrix(&level_pose(-1000.0));
        let origin_in_view = view.transform_point3(DVec3::ZERO);
        assert!(origin_in_view.abs_diff_eq(DVec3::new(0.0, 0.0, 1000.0), 1e-9));
    }

    #[test]
    fn test_rotation_order_is_x_then_y_then_z() {
        let pose = PoseSnapshot {
            distance: -500.0,
            angle_x: 30.0,
            angle_y: 60.0,
            angle_z: 15.0,
        };
        let expected = DMat4::from_translation(DVec3::new(0.0, 0.0, -500.0))
            * DMat4::from_rotation_x(30f64.to_radians())
            * DMat4::from_rotation_y(60f64.to_radians())
            * DMat4::from_rotation_z(15f64.to_radians());
        assert!(camera_transform(&pose).abs_diff_eq(expected, 1e-9));

        let swapped = DMat4::from_translation(DVec3::new(0.0, 0.0, -500.0))
            * DMat4::from_rotation_y(60f64.to_radians())
            * DMat4::from_rotation_x(30f64.to_radians())
            * DMat4::from_rotation_z(15f64.to_radians());
        assert!(!camera_transform(&pose).abs_diff_eq(swapped, 1e-6));
    }

    #[test]
    fn test_camera_position_follows_distance() {
        let mut pose = CameraPose::new();
        pose.zoom(0.5);
        let position = camera_position(&pose.snapshot());
        assert!(position.abs_diff_eq(DVec3::new(0.0, 0.0, -500.0), 1e-9));
    }

    #[test]
    fn test_view_inverts_transform() {
        let camera = ViewCamera::default();
        let pose = CameraPose::new().snapshot();
        let product = camera.view_matrix(&pose) * camera_transform(&pose);
        assert!(product.abs_diff_eq(DMat4::IDENTITY, 1e-9));
    }

    #[test]
    fn test_resize_updates_aspect() {
        let mut camera = ViewCamera::default();
        assert!((camera.aspect_ratio - 800.0 / 600.0).abs() < 1e-12);

        camera.resize(1920, 1080);
        assert!((camera.aspect_ratio - 1920.0 / 1080.0).abs() < 1e-12);

        camera.resize(0, 1080);
        assert!((camera.aspect_ratio - 1920.0 / 1080.0).abs() < 1e-12);
    }

    #[test]
    fn test_uniforms_are_consistent() {
        let camera = ViewCamera::default();
        let pose = CameraPose::new().snapshot();
        let uniforms = camera.uniforms(&pose);

        let view = Mat4::from_cols_array_2d(&uniforms.view);
        let proj = Mat4::from_cols_array_2d(&uniforms.proj);
        let view_proj = Mat4::from_cols_array_2d(&uniforms.view_proj);
        assert!((proj * view).abs_diff_eq(view_proj, 1e-2));
        assert_eq!(uniforms.camera_pos, [0.0, 0.0, -1000.0]);

        let bytes: &[u8] = bytemuck::bytes_of(&uniforms);
        assert_eq!(bytes.len(), std::mem::size_of::<CameraUniforms>());
    }
}
