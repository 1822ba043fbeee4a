use glam::{Mat4, Vec3};

use crate::camera::core::CameraCore;
use crate::camera::frustum::Frustum;

/// Common contract for camera rigs.
///
/// A host render loop drives a rig through its mutators in response to
/// input, then reads [`view_matrix`](Self::view_matrix) once per frame.
/// Every mutator leaves the rig fully updated before returning, so the
/// view matrix is never stale between calls (the one documented exception
/// is [`TargetCamera::set_target`](crate::TargetCamera::set_target)).
pub trait CameraRig {
    /// Shared orientation/projection state.
    fn core(&self) -> &CameraCore;

    /// Mutable access to the shared state, for projection and position
    /// changes. Follow direct mutations with [`update`](Self::update).
    fn core_mut(&mut self) -> &mut CameraCore;

    /// Recompute the basis vectors and view matrix from current state.
    fn update(&mut self);

    /// Set the orientation angles (degrees) and refresh derived state.
    ///
    /// Inputs are unconstrained; rigs that bound an angle clamp it here
    /// before applying (silently, never rejecting).
    fn rotate(&mut self, yaw: f32, pitch: f32, roll: f32) {
        self.core_mut().set_angles(yaw, pitch, roll);
        self.update();
    }

    /// View matrix from the most recent update.
    fn view_matrix(&self) -> Mat4 {
        self.core().view_matrix()
    }

    /// Current projection matrix.
    fn projection_matrix(&self) -> Mat4 {
        self.core().projection_matrix()
    }

    /// Combined projection * view matrix, ready for a shader.
    fn view_projection(&self) -> Mat4 {
        self.core().view_projection()
    }

    /// Camera position in world space.
    fn position(&self) -> Vec3 {
        self.core().position()
    }

    /// View frustum for the current camera state, for culling.
    fn frustum(&self) -> Frustum {
        Frustum::from_camera(self.core())
    }
}
