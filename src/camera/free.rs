use glam::{EulerRot, Mat4, Vec3};

use crate::camera::core::CameraCore;
use crate::camera::rig::CameraRig;
use crate::options::Options;

/// First-person fly camera.
///
/// Movement is expressed as a translation accumulator: `walk`, `strafe`,
/// and `lift` each add a displacement along the current basis, and every
/// update folds the accumulator into the position. The accumulator is
/// deliberately **not** cleared after being applied - left alone it acts
/// as a constant velocity, which gives motion decay for free. Hosts that
/// want stop-on-release movement reset it with
/// [`set_translation`](Self::set_translation) each frame.
#[derive(Debug, Clone)]
pub struct FreeCamera {
    core: CameraCore,
    translation: Vec3,
    speed: f32,
}

impl Default for FreeCamera {
    fn default() -> Self {
        Self::new()
    }
}

impl FreeCamera {
    /// Create a fly camera at the origin, looking down +Z, moving at
    /// 0.5 m/s.
    #[must_use]
    pub fn new() -> Self {
        let mut cam = Self {
            core: CameraCore::new(),
            translation: Vec3::ZERO,
            speed: 0.5,
        };
        cam.update();
        cam
    }

    /// Create a fly camera from loaded options and a viewport aspect
    /// ratio (width / height).
    #[must_use]
    pub fn from_options(options: &Options, aspect: f32) -> Self {
        let mut cam = Self::new();
        cam.core.set_projection(
            options.projection.fovy,
            aspect,
            options.projection.znear,
            options.projection.zfar,
        );
        cam.speed = options.free.speed;
        cam
    }

    /// Move along the look vector. `dt` is the frame time in seconds;
    /// a negative `dt` walks backward.
    pub fn walk(&mut self, dt: f32) {
        self.translation += self.core.look * (self.speed * dt);
        self.update();
    }

    /// Move along the right vector (sideways).
    pub fn strafe(&mut self, dt: f32) {
        self.translation += self.core.right * (self.speed * dt);
        self.update();
    }

    /// Move along the up vector (vertically).
    pub fn lift(&mut self, dt: f32) {
        self.translation += self.core.up * (self.speed * dt);
        self.update();
    }

    /// Replace the translation accumulator and refresh derived state.
    ///
    /// Passing `Vec3::ZERO` halts accumulated motion.
    pub fn set_translation(&mut self, translation: Vec3) {
        self.translation = translation;
        self.update();
    }

    /// Current translation accumulator.
    #[must_use]
    pub fn translation(&self) -> Vec3 {
        self.translation
    }

    /// Set the movement speed in meters per second.
    ///
    /// Unvalidated: zero halts walk/strafe/lift, negative reverses them.
    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }

    /// Movement speed in meters per second.
    #[must_use]
    pub fn speed(&self) -> f32 {
        self.speed
    }
}

impl CameraRig for FreeCamera {
    fn core(&self) -> &CameraCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut CameraCore {
        &mut self.core
    }

    fn update(&mut self) {
        let core = &mut self.core;
        let r = Mat4::from_euler(
            EulerRot::YXZ,
            core.yaw,
            core.pitch,
            core.roll,
        );

        // Accumulator folds into position every update and is kept as a
        // persistent offset (see the type-level docs).
        core.position += self.translation;

        core.look = r.transform_vector3(Vec3::Z);
        core.up = r.transform_vector3(Vec3::Y);
        core.right = core.look.cross(core.up);

        let target = core.position + core.look;
        core.view = Mat4::look_at_rh(core.position, target, core.up);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn assert_unit(v: Vec3) {
        assert!((v.length() - 1.0).abs() < EPS, "not unit length: {v}");
    }

    #[test]
    fn walk_accumulates_speed_scaled_look_steps() {
        let mut cam = FreeCamera::new();
        cam.set_speed(0.5);
        let look = cam.core().look();

        cam.walk(1.0);
        assert!((cam.translation() - look * 0.5).length() < EPS);

        // Second walk adds another step: the accumulator is cumulative,
        // never reset by update.
        cam.walk(1.0);
        assert!((cam.translation() - look * 1.0).length() < EPS);
    }

    #[test]
    fn negative_dt_walks_backward() {
        let mut cam = FreeCamera::new();
        cam.set_speed(2.0);
        let look = cam.core().look();
        cam.walk(-0.5);
        assert!((cam.translation() + look).length() < EPS);
    }

    #[test]
    fn translation_folds_into_position_each_update() {
        let mut cam = FreeCamera::new();
        let start = cam.position();
        cam.set_translation(Vec3::new(1.0, 0.0, 0.0));
        assert!((cam.position() - start - Vec3::X).length() < EPS);

        // A later update applies the persistent accumulator again.
        cam.update();
        assert!((cam.position() - start - Vec3::X * 2.0).length() < EPS);
    }

    #[test]
    fn zero_speed_halts_motion() {
        let mut cam = FreeCamera::new();
        cam.set_speed(0.0);
        cam.walk(1.0);
        cam.strafe(1.0);
        cam.lift(1.0);
        assert_eq!(cam.translation(), Vec3::ZERO);
    }

    #[test]
    fn basis_stays_orthonormal_after_rotation() {
        let mut cam = FreeCamera::new();
        cam.rotate(37.0, -12.0, 5.0);
        let (look, up, right) =
            (cam.core().look(), cam.core().up(), cam.core().right());
        assert_unit(look);
        assert_unit(up);
        assert_unit(right);
        assert!(look.dot(up).abs() < EPS);
        assert!(look.dot(right).abs() < EPS);
        assert!(up.dot(right).abs() < EPS);
    }

    #[test]
    fn rotate_sets_absolute_angles() {
        let mut cam = FreeCamera::new();
        cam.rotate(90.0, 0.0, 0.0);
        let after_one = cam.core().look();
        cam.rotate(90.0, 0.0, 0.0);
        // Same absolute angles, same basis.
        assert!((cam.core().look() - after_one).length() < EPS);
    }

    #[test]
    fn strafe_and_lift_use_right_and_up() {
        let mut cam = FreeCamera::new();
        cam.set_speed(1.0);
        let right = cam.core().right();
        cam.strafe(1.0);
        assert!((cam.translation() - right).length() < EPS);

        let mut cam = FreeCamera::new();
        cam.set_speed(1.0);
        let up = cam.core().up();
        cam.lift(1.0);
        assert!((cam.translation() - up).length() < EPS);
    }
}
