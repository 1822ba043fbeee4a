use glam::{Mat4, Vec3};

/// World up axis shared by every rig.
pub const WORLD_UP: Vec3 = Vec3::Y;

/// Orientation, derived basis, and projection state shared by all rigs.
///
/// Angles are taken in degrees at the API surface and stored in radians.
/// The basis vectors and view matrix are derived state: they are only
/// written by a rig's `update` and are read-only to callers.
#[derive(Debug, Clone)]
pub struct CameraCore {
    pub(crate) yaw: f32,
    pub(crate) pitch: f32,
    pub(crate) roll: f32,

    pub(crate) position: Vec3,
    pub(crate) look: Vec3,
    pub(crate) up: Vec3,
    pub(crate) right: Vec3,

    pub(crate) view: Mat4,
    proj: Mat4,
    fovy: f32,
    aspect: f32,
    znear: f32,
    zfar: f32,
}

impl Default for CameraCore {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraCore {
    /// Create a core with identity orientation at the world origin.
    ///
    /// The projection defaults to 45 degrees vertical FOV, 1:1 aspect,
    /// and a [0.1, 1000] depth range.
    #[must_use]
    pub fn new() -> Self {
        let fovy = 45.0;
        let aspect = 1.0;
        let znear = 0.1;
        let zfar = 1000.0;
        Self {
            yaw: 0.0,
            pitch: 0.0,
            roll: 0.0,
            position: Vec3::ZERO,
            look: Vec3::NEG_Z,
            up: WORLD_UP,
            right: Vec3::X,
            view: Mat4::IDENTITY,
            proj: Mat4::perspective_rh(
                f32::to_radians(fovy),
                aspect,
                znear,
                zfar,
            ),
            fovy,
            aspect,
            znear,
            zfar,
        }
    }

    /// Set the orientation angles, in degrees.
    ///
    /// The angles are absolute, not deltas: callers accumulate themselves
    /// (typically from total mouse displacement). Derived state is stale
    /// until the owning rig's `update` runs; the rig-level `rotate` does
    /// both steps.
    pub fn set_angles(&mut self, yaw: f32, pitch: f32, roll: f32) {
        self.yaw = yaw.to_radians();
        self.pitch = pitch.to_radians();
        self.roll = roll.to_radians();
    }

    /// Configure the perspective projection and rebuild its matrix.
    ///
    /// `fovy` is the vertical field of view in degrees, `aspect` is
    /// width / height.
    pub fn set_projection(
        &mut self,
        fovy: f32,
        aspect: f32,
        znear: f32,
        zfar: f32,
    ) {
        self.fovy = fovy;
        self.aspect = aspect;
        self.znear = znear;
        self.zfar = zfar;
        self.proj =
            Mat4::perspective_rh(fovy.to_radians(), aspect, znear, zfar);
    }

    /// Change only the vertical field of view (degrees) and rebuild the
    /// projection matrix.
    pub fn set_fovy(&mut self, fovy: f32) {
        self.set_projection(fovy, self.aspect, self.znear, self.zfar);
    }

    /// Change only the aspect ratio (width / height) and rebuild the
    /// projection matrix. Call on window resize.
    pub fn set_aspect(&mut self, aspect: f32) {
        self.set_projection(self.fovy, aspect, self.znear, self.zfar);
    }

    /// Camera position in world space.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Set the camera position directly.
    ///
    /// Derived state is stale until the owning rig's `update` runs.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Unit forward vector from the most recent update.
    #[must_use]
    pub fn look(&self) -> Vec3 {
        self.look
    }

    /// Unit up vector from the most recent update.
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Unit right vector from the most recent update.
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.right
    }

    /// View matrix from the most recent update.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        self.view
    }

    /// Current projection matrix.
    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        self.proj
    }

    /// Combined projection * view matrix.
    #[must_use]
    pub fn view_projection(&self) -> Mat4 {
        self.proj * self.view
    }

    /// Vertical field of view in degrees.
    #[must_use]
    pub fn fovy(&self) -> f32 {
        self.fovy
    }

    /// Viewport aspect ratio (width / height).
    #[must_use]
    pub fn aspect_ratio(&self) -> f32 {
        self.aspect
    }

    /// Near clipping plane distance.
    #[must_use]
    pub fn znear(&self) -> f32 {
        self.znear
    }

    /// Far clipping plane distance.
    #[must_use]
    pub fn zfar(&self) -> f32 {
        self.zfar
    }
}
