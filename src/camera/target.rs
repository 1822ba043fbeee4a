use glam::{EulerRot, Mat4, Vec3};

use crate::camera::core::{CameraCore, WORLD_UP};
use crate::camera::rig::CameraRig;
use crate::options::Options;

/// Orbit camera circling a focus point.
///
/// The camera's position is derived, never free: every update places it
/// at `target + R * (0, 0, distance)` where `R` is the yaw/pitch rotation
/// (roll is ignored for orbiting). Distance stays clamped inside
/// `[min_distance, max_distance]` and pitch inside
/// `[min_pitch, max_pitch]` degrees; out-of-range inputs are corrected
/// silently, never rejected.
#[derive(Debug, Clone)]
pub struct TargetCamera {
    core: CameraCore,
    target: Vec3,
    distance: f32,
    min_distance: f32,
    max_distance: f32,
    min_pitch: f32,
    max_pitch: f32,
}

impl Default for TargetCamera {
    fn default() -> Self {
        Self::new()
    }
}

impl TargetCamera {
    /// Create an orbit camera focused on the origin at distance 5, with
    /// distance bounds [1, 10] and pitch bounds [-60, 60] degrees.
    #[must_use]
    pub fn new() -> Self {
        let mut cam = Self {
            core: CameraCore::new(),
            target: Vec3::ZERO,
            distance: 5.0,
            min_distance: 1.0,
            max_distance: 10.0,
            min_pitch: -60.0,
            max_pitch: 60.0,
        };
        cam.update();
        cam
    }

    /// Create an orbit camera from loaded options and a viewport aspect
    /// ratio (width / height).
    #[must_use]
    pub fn from_options(options: &Options, aspect: f32) -> Self {
        let t = &options.target;
        let mut cam = Self {
            core: CameraCore::new(),
            target: Vec3::from_array(t.target),
            distance: t.distance.clamp(t.min_distance, t.max_distance),
            min_distance: t.min_distance,
            max_distance: t.max_distance,
            min_pitch: t.min_pitch,
            max_pitch: t.max_pitch,
        };
        cam.core.set_projection(
            options.projection.fovy,
            aspect,
            options.projection.znear,
            options.projection.zfar,
        );
        cam.update();
        cam
    }

    /// Set the focus point and re-derive the orbit distance from the
    /// current camera position, clamped into range.
    ///
    /// Does **not** refresh derived state; callers invoke
    /// [`update`](CameraRig::update) when they want the new view applied.
    /// This deferral lets a host batch a target change with a rotation
    /// before paying for one recompute.
    pub fn set_target(&mut self, target: Vec3) {
        self.target = target;
        self.distance = self
            .core
            .position
            .distance(target)
            .clamp(self.min_distance, self.max_distance);
    }

    /// Current focus point.
    #[must_use]
    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Current orbit distance.
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Translate the camera and its target by `right * dx + up * dy`.
    ///
    /// Both endpoints move together, so the camera-to-target offset is
    /// preserved: a true pan, not an orbit.
    pub fn pan(&mut self, dx: f32, dy: f32) {
        let step = self.core.right * dx + self.core.up * dy;
        self.core.position += step;
        self.target += step;
        self.update();
    }

    /// Dolly along the look vector by `amount` (positive moves toward
    /// the target).
    ///
    /// The position nudge is scratch state: the following update rebuilds
    /// the position from the re-derived, clamped distance. The nudge is
    /// kept (rather than applying a distance delta directly) so that the
    /// recompute-then-clamp ordering matches across every mutator.
    pub fn zoom(&mut self, amount: f32) {
        self.core.position += self.core.look * amount;
        self.distance = self
            .core
            .position
            .distance(self.target)
            .clamp(self.min_distance, self.max_distance);
        self.update();
    }

    /// Translate the camera and its target by `right * dx + look * dy`.
    ///
    /// Like [`pan`](Self::pan) but the second axis slides along the view
    /// direction instead of up: ground-plane movement for a camera
    /// pitched down at a scene. (The original fixed-function-era name
    /// for this operation is `Move`; `move` is a keyword here.)
    pub fn move_by(&mut self, dx: f32, dy: f32) {
        let step = self.core.right * dx + self.core.look * dy;
        self.core.position += step;
        self.target += step;
        self.update();
    }
}

impl CameraRig for TargetCamera {
    fn core(&self) -> &CameraCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut CameraCore {
        &mut self.core
    }

    /// Clamps pitch into `[min_pitch, max_pitch]` before applying.
    fn rotate(&mut self, yaw: f32, pitch: f32, roll: f32) {
        let pitch = pitch.clamp(self.min_pitch, self.max_pitch);
        self.core.set_angles(yaw, pitch, roll);
        self.update();
    }

    fn update(&mut self) {
        let core = &mut self.core;
        // Roll plays no part in an orbit; yaw/pitch position the camera
        // on the sphere around the target.
        let r = Mat4::from_euler(EulerRot::YXZ, core.yaw, core.pitch, 0.0);

        let offset =
            r.transform_vector3(Vec3::new(0.0, 0.0, self.distance));
        core.position = self.target + offset;

        core.look = (self.target - core.position).normalize();
        core.up = r.transform_vector3(WORLD_UP);
        core.right = core.look.cross(core.up);

        core.view = Mat4::look_at_rh(core.position, self.target, core.up);
    }
}
