use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

use crate::camera::frustum::{Aabb, Frustum, Ray};

/// Orbit pose: a look-at center plus azimuth, elevation and distance.
///
/// `phi` is kept in (-180, 180] whenever it is set or accelerated; `theta`
/// and `zoom` are clamped by the controller, never wrapped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraState {
    /// Point the camera looks at.
    pub center: Vec3,
    /// Azimuth in degrees.
    pub phi: f32,
    /// Elevation in degrees.
    pub theta: f32,
    /// Distance from the center.
    pub zoom: f32,
}

impl CameraState {
    /// Eye position on the sphere of radius `zoom` around `center`.
    #[must_use]
    pub fn eye(&self) -> Vec3 {
        let (sin_theta, cos_theta) = self.theta.to_radians().sin_cos();
        let (sin_phi, cos_phi) = self.phi.to_radians().sin_cos();
        self.center
            + Vec3::new(
                self.zoom * cos_theta * sin_phi,
                self.zoom * sin_theta,
                self.zoom * cos_theta * cos_phi,
            )
    }
}

/// Wrap an angle in degrees into (-180, 180].
#[must_use]
pub fn range_value(v: f32) -> f32 {
    if !v.is_finite() {
        return v;
    }
    // rem_euclid may round up to exactly 360 for tiny negative inputs
    let r = v.rem_euclid(360.0);
    if r > 180.0 {
        r - 360.0
    } else {
        r
    }
}

/// Perspective render camera defined by eye position, target, and projection
/// parameters. The controller writes its pose; the host reads the matrices.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Look-at target position.
    pub target: Vec3,
    /// Up direction vector.
    pub up: Vec3,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Camera {
    /// Place the camera at `eye`, looking at `target`.
    pub fn apply_pose(&mut self, eye: Vec3, target: Vec3) {
        self.eye = eye;
        self.target = target;
        self.up = Vec3::Y;
    }

    /// View matrix only.
    #[must_use]
    pub fn build_view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// Projection matrix only.
    #[must_use]
    pub fn build_projection(&self) -> Mat4 {
        // perspective_rh uses the [0,1] depth range
        Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }

    /// Build the combined view-projection matrix.
    #[must_use]
    pub fn build_matrix(&self) -> Mat4 {
        self.build_projection() * self.build_view()
    }

    /// Whether any part of `bbox` lies inside the view frustum.
    #[must_use]
    pub fn is_visible(&self, bbox: &Aabb) -> bool {
        Frustum::from_view_projection(self.build_matrix()).intersects_aabb(bbox)
    }

    /// World-space ray through the viewport point `(x, y)`, both in [0, 1]
    /// with the origin at the top-left corner.
    #[must_use]
    pub fn viewport_ray(&self, x: f32, y: f32) -> Ray {
        let inverse = self.build_matrix().inverse();
        let ndc_x = x * 2.0 - 1.0;
        let ndc_y = 1.0 - y * 2.0;
        let near = inverse.project_point3(Vec3::new(ndc_x, ndc_y, 0.0));
        let far = inverse.project_point3(Vec3::new(ndc_x, ndc_y, 1.0));
        Ray::new(near, far - near)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(phi: f32, theta: f32, zoom: f32) -> CameraState {
        CameraState {
            center: Vec3::ZERO,
            phi,
            theta,
            zoom,
        }
    }

    #[test]
    fn range_value_examples() {
        assert_eq!(range_value(270.0), -90.0);
        assert_eq!(range_value(-270.0), 90.0);
        assert_eq!(range_value(180.0), 180.0);
        assert_eq!(range_value(-180.0), 180.0);
        assert_eq!(range_value(0.0), 0.0);
        assert_eq!(range_value(720.0 + 45.0), 45.0);
    }

    #[test]
    fn range_value_stays_in_half_open_interval() {
        let mut v = -2000.0_f32;
        while v < 2000.0 {
            let r = range_value(v);
            assert!(r > -180.0 && r <= 180.0, "{v} -> {r}");
            let turns = (v - r) / 360.0;
            assert!((turns - turns.round()).abs() < 1e-4, "{v} -> {r}");
            v += 7.25;
        }
    }

    #[test]
    fn range_value_handles_huge_and_tiny_angles() {
        for v in [1.0e10_f32, -1.0e10, f32::MAX, f32::MIN, -1.0e-8, 1.0e-8] {
            let r = range_value(v);
            assert!(r > -180.0 && r <= 180.0, "{v} -> {r}");
        }
        // 1e10 = 27_777_777 * 360 + 280
        assert_eq!(range_value(1.0e10), -80.0);
        assert!(range_value(f32::NAN).is_nan());
    }

    #[test]
    fn eye_straight_behind_center() {
        let eye = state(0.0, 0.0, 10.0).eye();
        assert!((eye - Vec3::new(0.0, 0.0, 10.0)).length() < 1e-5);
    }

    #[test]
    fn eye_quarter_turn() {
        let eye = state(90.0, 0.0, 10.0).eye();
        assert!((eye - Vec3::new(10.0, 0.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn eye_is_offset_by_center_and_elevation() {
        let mut s = state(0.0, 90.0, 5.0);
        s.center = Vec3::new(1.0, 2.0, 3.0);
        assert!((s.eye() - Vec3::new(1.0, 7.0, 3.0)).length() < 1e-5);
    }

    fn camera_at(eye: Vec3) -> Camera {
        Camera {
            eye,
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 1.0,
            fovy: 45.0,
            znear: 0.1,
            zfar: 100.0,
        }
    }

    #[test]
    fn visibility_follows_view_direction() {
        let camera = camera_at(Vec3::new(0.0, 0.0, 10.0));
        let ahead = Aabb::new(Vec3::splat(-1.0), Vec3::splat(1.0));
        let behind =
            Aabb::new(Vec3::new(-1.0, -1.0, 20.0), Vec3::new(1.0, 1.0, 22.0));
        assert!(camera.is_visible(&ahead));
        assert!(!camera.is_visible(&behind));
    }

    #[test]
    fn viewport_center_ray_points_at_target() {
        let camera = camera_at(Vec3::new(0.0, 0.0, 10.0));
        let ray = camera.viewport_ray(0.5, 0.5);
        assert!((ray.direction - Vec3::NEG_Z).length() < 1e-4);
        assert!(ray.origin.x.abs() < 1e-4 && ray.origin.y.abs() < 1e-4);
    }

    #[test]
    fn viewport_corner_ray_leans_left_and_up() {
        let camera = camera_at(Vec3::new(0.0, 0.0, 10.0));
        let ray = camera.viewport_ray(0.0, 0.0);
        assert!(ray.direction.x < 0.0);
        assert!(ray.direction.y > 0.0);
    }
}
