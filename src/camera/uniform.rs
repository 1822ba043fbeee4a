use glam::Mat4;

use crate::camera::core::CameraCore;

/// GPU uniform buffer layout for camera state.
///
/// `#[repr(C)]` and Pod so a host can copy it straight into a uniform
/// buffer with `bytemuck::cast_slice`. Buffer creation and binding stay
/// on the host side.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ViewUniform {
    /// Combined view-projection matrix, column-major.
    pub view_proj: [[f32; 4]; 4],
    /// Camera world-space position.
    pub position: [f32; 3],
    /// Viewport aspect ratio.
    pub aspect: f32,
    /// Camera forward direction, for view-dependent shading.
    pub forward: [f32; 3],
    /// Vertical field of view in degrees.
    pub fovy: f32,
}

impl Default for ViewUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewUniform {
    /// Create a uniform with an identity view-projection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0; 3],
            aspect: 1.0,
            forward: [0.0, 0.0, -1.0],
            fovy: 45.0,
        }
    }

    /// Refresh every field from the camera's current state.
    pub fn update_view_proj(&mut self, core: &CameraCore) {
        self.view_proj = core.view_projection().to_cols_array_2d();
        self.position = core.position().to_array();
        self.aspect = core.aspect_ratio();
        self.forward = core.look().to_array();
        self.fovy = core.fovy();
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::camera::rig::CameraRig;
    use crate::camera::target::TargetCamera;

    #[test]
    fn layout_is_tightly_packed() {
        // mat4 + vec3 + f32 + vec3 + f32, no hidden padding.
        assert_eq!(size_of::<ViewUniform>(), 96);
    }

    #[test]
    fn update_mirrors_camera_state() {
        let mut cam = TargetCamera::new();
        cam.core_mut().set_projection(60.0, 1.6, 0.1, 500.0);
        cam.rotate(40.0, -15.0, 0.0);

        let mut uniform = ViewUniform::new();
        uniform.update_view_proj(cam.core());

        assert_eq!(
            uniform.view_proj,
            cam.view_projection().to_cols_array_2d()
        );
        assert_eq!(Vec3::from_array(uniform.position), cam.position());
        assert_eq!(Vec3::from_array(uniform.forward), cam.core().look());
        assert_eq!(uniform.aspect, 1.6);
        assert_eq!(uniform.fovy, 60.0);
    }
}
