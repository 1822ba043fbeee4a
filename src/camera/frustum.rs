//! View frustum for culling.
//!
//! Builds the six frustum planes geometrically from the camera's position,
//! basis, and projection parameters, and provides intersection tests for
//! points, spheres, and axis-aligned boxes.

use glam::{Vec3, Vec4};

use crate::camera::core::CameraCore;

/// A plane in 3D space: `normal · p + distance = 0`.
#[derive(Debug, Clone, Copy)]
pub struct Plane {
    /// Unit normal pointing into the positive half-space.
    pub normal: Vec3,
    /// Signed distance from the origin.
    pub distance: f32,
}

impl Plane {
    /// Build a plane through three points, wound counter-clockwise as
    /// seen from the positive half-space.
    #[must_use]
    pub fn from_points(a: Vec3, b: Vec3, c: Vec3) -> Self {
        let normal = (b - a).cross(c - a).normalize();
        Self {
            normal,
            distance: -normal.dot(a),
        }
    }

    /// Signed distance from a point to the plane (positive = in front).
    #[inline]
    #[must_use]
    pub fn distance_to_point(&self, point: Vec3) -> f32 {
        self.normal.dot(point) + self.distance
    }

    /// The plane as `(normal.x, normal.y, normal.z, distance)`, the
    /// layout shaders expect for clip planes.
    #[must_use]
    pub fn coefficients(&self) -> Vec4 {
        self.normal.extend(self.distance)
    }
}

/// View frustum: six inward-facing planes plus the near/far rectangle
/// corners they were built from.
#[derive(Debug, Clone)]
pub struct Frustum {
    /// Clipping planes in order: top, bottom, left, right, near, far.
    pub planes: [Plane; 6],
    /// Near rectangle corners: top-left, bottom-left, bottom-right,
    /// top-right. Handy for debug visualization.
    pub near_corners: [Vec3; 4],
    /// Far rectangle corners, same winding as `near_corners`.
    pub far_corners: [Vec3; 4],
}

impl Frustum {
    /// Build the frustum for a camera's current state.
    ///
    /// The camera must have been updated since its last mutation so the
    /// basis vectors match the view matrix.
    #[must_use]
    pub fn from_camera(core: &CameraCore) -> Self {
        let position = core.position();
        let look = core.look();
        let up = core.up();
        let right = core.right();

        let near_center = position + look * core.znear();
        let far_center = position + look * core.zfar();

        // Half-extents of the near and far rectangles from the vertical
        // FOV and aspect ratio.
        let tan_half_fovy = (core.fovy().to_radians() / 2.0).tan();
        let near_h = tan_half_fovy * core.znear();
        let near_w = near_h * core.aspect_ratio();
        let far_h = tan_half_fovy * core.zfar();
        let far_w = far_h * core.aspect_ratio();

        let near_corners = [
            near_center + up * near_h - right * near_w,
            near_center - up * near_h - right * near_w,
            near_center - up * near_h + right * near_w,
            near_center + up * near_h + right * near_w,
        ];
        let far_corners = [
            far_center + up * far_h - right * far_w,
            far_center - up * far_h - right * far_w,
            far_center - up * far_h + right * far_w,
            far_center + up * far_h + right * far_w,
        ];

        // Windings chosen so every normal faces the frustum interior.
        let planes = [
            Plane::from_points(
                near_corners[3],
                near_corners[0],
                far_corners[0],
            ),
            Plane::from_points(
                near_corners[1],
                near_corners[2],
                far_corners[2],
            ),
            Plane::from_points(
                near_corners[0],
                near_corners[1],
                far_corners[1],
            ),
            Plane::from_points(
                near_corners[2],
                near_corners[3],
                far_corners[2],
            ),
            Plane::from_points(
                near_corners[0],
                near_corners[3],
                near_corners[2],
            ),
            Plane::from_points(far_corners[3], far_corners[0], far_corners[1]),
        ];

        Self {
            planes,
            near_corners,
            far_corners,
        }
    }

    /// Test if a point is inside the frustum.
    #[inline]
    #[must_use]
    pub fn contains_point(&self, point: Vec3) -> bool {
        self.planes
            .iter()
            .all(|plane| plane.distance_to_point(point) >= 0.0)
    }

    /// Test if a sphere intersects or is inside the frustum.
    #[inline]
    #[must_use]
    pub fn intersects_sphere(&self, center: Vec3, radius: f32) -> bool {
        self.planes
            .iter()
            .all(|plane| plane.distance_to_point(center) >= -radius)
    }

    /// Test if an axis-aligned box intersects or is inside the frustum.
    ///
    /// Positive-vertex test: for each plane, only the box corner
    /// furthest along the plane normal needs checking.
    #[must_use]
    pub fn intersects_aabb(&self, min: Vec3, max: Vec3) -> bool {
        for plane in &self.planes {
            let mut p = min;
            if plane.normal.x >= 0.0 {
                p.x = max.x;
            }
            if plane.normal.y >= 0.0 {
                p.y = max.y;
            }
            if plane.normal.z >= 0.0 {
                p.z = max.z;
            }
            if plane.distance_to_point(p) < 0.0 {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::camera::rig::CameraRig;
    use crate::camera::target::TargetCamera;

    /// Camera at (0, 0, 5) looking at the origin down -Z.
    fn test_camera() -> TargetCamera {
        let mut cam = TargetCamera::new();
        cam.core_mut().set_projection(60.0, 1.0, 0.1, 100.0);
        cam.update();
        cam
    }

    #[test]
    fn plane_from_points_signed_distance() {
        // The XZ plane with +Y normal.
        let plane = Plane::from_points(
            Vec3::ZERO,
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(1.0, 0.0, 0.0),
        );
        assert!((plane.normal - Vec3::Y).length() < 1e-6);
        assert!((plane.distance_to_point(Vec3::new(3.0, 2.0, -1.0)) - 2.0)
            .abs()
            < 1e-5);
        assert!(plane.distance_to_point(Vec3::new(0.0, -4.0, 0.0)) < 0.0);
    }

    #[test]
    fn normals_face_inward() {
        let frustum = test_camera().frustum();
        // A point midway along the view axis is interior to all planes.
        let interior = Vec3::new(0.0, 0.0, -5.0);
        for plane in &frustum.planes {
            assert!(plane.distance_to_point(interior) > 0.0);
        }
    }

    #[test]
    fn contains_point_accepts_visible_rejects_behind() {
        let frustum = test_camera().frustum();
        assert!(frustum.contains_point(Vec3::ZERO));
        assert!(frustum.contains_point(Vec3::new(0.0, 0.0, -20.0)));
        // Behind the camera.
        assert!(!frustum.contains_point(Vec3::new(0.0, 0.0, 10.0)));
        // Far off to the side.
        assert!(!frustum.contains_point(Vec3::new(50.0, 0.0, 0.0)));
    }

    #[test]
    fn sphere_straddling_a_plane_intersects() {
        let frustum = test_camera().frustum();
        assert!(frustum.intersects_sphere(Vec3::ZERO, 1.0));
        // Centered behind the camera but large enough to poke through.
        assert!(frustum.intersects_sphere(Vec3::new(0.0, 0.0, 6.0), 2.0));
        // Small and fully behind.
        assert!(!frustum.intersects_sphere(Vec3::new(0.0, 0.0, 20.0), 1.0));
    }

    #[test]
    fn aabb_tests_use_positive_vertex() {
        let frustum = test_camera().frustum();
        assert!(frustum
            .intersects_aabb(Vec3::splat(-1.0), Vec3::splat(1.0)));
        // Box entirely behind the camera.
        assert!(!frustum.intersects_aabb(
            Vec3::new(-1.0, -1.0, 20.0),
            Vec3::new(1.0, 1.0, 22.0)
        ));
        // Box straddling the left plane.
        assert!(frustum.intersects_aabb(
            Vec3::new(-50.0, -0.5, -5.5),
            Vec3::new(0.0, 0.5, -4.5)
        ));
    }

    #[test]
    fn corners_span_near_and_far_planes() {
        let cam = test_camera();
        let frustum = cam.frustum();
        for corner in &frustum.near_corners {
            assert!((corner.z - 4.9).abs() < 1e-4, "near z: {}", corner.z);
        }
        for corner in &frustum.far_corners {
            assert!((corner.z + 95.0).abs() < 1e-3, "far z: {}", corner.z);
        }
    }
}
