//! Inertia model: per-axis accelerators with linear friction.
//!
//! One call to [`AccelerationModel::apply`] is one nominal tick. The decay is
//! a fixed step, not scaled by frame time.

use glam::Vec3;

use crate::camera::core::{range_value, CameraState};
use crate::camera::frustum::Aabb;
use crate::input::InputDelta;
use crate::options::CameraOptions;

/// Add `accel` to `value`, then decay `accel` toward zero by `attenuation`
/// without crossing it.
pub fn apply_acceleration(value: &mut f32, accel: &mut f32, attenuation: f32) {
    *value += *accel;

    if *accel > 0.0 {
        *accel = (*accel - attenuation).max(0.0);
    } else {
        *accel = (*accel + attenuation).min(0.0);
    }
}

/// [`apply_acceleration`], then pin `value` into `[min, max]`. Touching a
/// bound stops the accelerator.
pub fn apply_bounded_acceleration(
    value: &mut f32,
    accel: &mut f32,
    min: f32,
    max: f32,
    attenuation: f32,
) {
    apply_acceleration(value, accel, attenuation);

    if *value <= min {
        *value = min;
        *accel = 0.0;
    } else if *value >= max {
        *value = max;
        *accel = 0.0;
    }
}

/// Which kinds of motion the camera currently accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotionGates {
    /// Phi/theta changes.
    pub rotate: bool,
    /// Center changes.
    pub translate: bool,
    /// Zoom changes.
    pub zoom: bool,
}

impl Default for MotionGates {
    fn default() -> Self {
        Self {
            rotate: true,
            translate: true,
            zoom: true,
        }
    }
}

/// Accelerator values, one per camera scalar.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Accelerations {
    /// Azimuth accelerator.
    pub phi: f32,
    /// Elevation accelerator.
    pub theta: f32,
    /// Zoom accelerator.
    pub zoom: f32,
    /// Center accelerators.
    pub center: Vec3,
}

/// Accelerators plus the gates and optional area limit that shape how they
/// move the camera.
#[derive(Debug, Clone, Default)]
pub struct AccelerationModel {
    accelerations: Accelerations,
    gates: MotionGates,
    area: Option<Aabb>,
}

impl AccelerationModel {
    /// Current accelerator values.
    #[must_use]
    pub fn accelerations(&self) -> &Accelerations {
        &self.accelerations
    }

    /// Current motion gates.
    #[must_use]
    pub fn gates(&self) -> MotionGates {
        self.gates
    }

    /// Mutable motion gates.
    pub fn gates_mut(&mut self) -> &mut MotionGates {
        &mut self.gates
    }

    /// Active area limit, if any.
    #[must_use]
    pub fn area(&self) -> Option<&Aabb> {
        self.area.as_ref()
    }

    /// Restrict the center to `area`.
    pub fn limit_area(&mut self, area: Aabb) {
        self.area = Some(area);
    }

    /// Let the center roam freely again.
    pub fn remove_area_limit(&mut self) {
        self.area = None;
    }

    /// Clamp a center candidate into the area limit, if any.
    #[must_use]
    pub fn clamp_center(&self, center: Vec3) -> Vec3 {
        self.area.map_or(center, |area| area.clamp(center))
    }

    /// Stop all inertia.
    pub fn clear(&mut self) {
        self.accelerations = Accelerations::default();
    }

    /// Fold one tick of input into the accelerators. Axes whose gate is
    /// closed ignore the delta.
    pub fn absorb(&mut self, delta: &InputDelta) {
        let ac = &mut self.accelerations;
        if self.gates.rotate {
            if let Some(phi) = delta.phi {
                ac.phi = phi;
            }
            if let Some(theta) = delta.theta {
                ac.theta = theta;
            }
        }
        if self.gates.zoom {
            if let Some(zoom) = delta.zoom {
                ac.zoom = zoom;
            }
            ac.zoom += delta.zoom_impulse;
        }
        if self.gates.translate {
            if let Some(planar) = delta.center {
                ac.center.x = planar.x;
                ac.center.z = planar.y;
            }
        }
    }

    /// Apply every nonzero accelerator to `state`, then clamp theta, zoom
    /// and (through the area limit) the center. Returns whether anything
    /// moved.
    pub fn apply(
        &mut self,
        state: &mut CameraState,
        options: &CameraOptions,
    ) -> bool {
        let mut moved = false;
        let ac = &mut self.accelerations;

        if ac.phi != 0.0 {
            apply_acceleration(
                &mut state.phi,
                &mut ac.phi,
                options.angular_attenuation,
            );
            state.phi = range_value(state.phi);
            moved = true;
        }
        if ac.theta != 0.0 {
            apply_acceleration(
                &mut state.theta,
                &mut ac.theta,
                options.angular_attenuation,
            );
            moved = true;
        }
        if ac.zoom != 0.0 {
            apply_acceleration(
                &mut state.zoom,
                &mut ac.zoom,
                options.linear_attenuation,
            );
            moved = true;
        }

        let center = [
            (&mut state.center.x, &mut ac.center.x, 0),
            (&mut state.center.y, &mut ac.center.y, 1),
            (&mut state.center.z, &mut ac.center.z, 2),
        ];
        for (value, accel, axis) in center {
            if *accel == 0.0 {
                continue;
            }
            match &self.area {
                Some(area) => apply_bounded_acceleration(
                    value,
                    accel,
                    area.min[axis],
                    area.max[axis],
                    options.linear_attenuation,
                ),
                None => {
                    apply_acceleration(value, accel, options.linear_attenuation);
                }
            }
            moved = true;
        }

        if moved {
            if state.theta > options.theta_max {
                state.theta = options.theta_max;
                ac.theta = 0.0;
            } else if state.theta < options.theta_min {
                state.theta = options.theta_min;
                ac.theta = 0.0;
            }
            if state.zoom < options.zoom_max {
                state.zoom = options.zoom_max;
                ac.zoom = 0.0;
            } else if state.zoom > options.zoom_min {
                state.zoom = options.zoom_min;
                ac.zoom = 0.0;
            }
        }

        moved
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;

    fn state() -> CameraState {
        CameraState {
            center: Vec3::ZERO,
            phi: 0.0,
            theta: 45.0,
            zoom: 10.0,
        }
    }

    #[test]
    fn decay_is_linear_and_stops_at_zero() {
        let mut value = 0.0;
        let mut accel = 1.0;
        apply_acceleration(&mut value, &mut accel, 0.25);
        assert_eq!((value, accel), (1.0, 0.75));
        apply_acceleration(&mut value, &mut accel, 0.25);
        assert_eq!((value, accel), (1.75, 0.5));
    }

    #[test]
    fn strong_attenuation_zeroes_in_one_step_without_sign_flip() {
        for start in [0.1_f32, -0.1, 2.0, -2.0] {
            let mut value = 5.0;
            let mut accel = start;
            apply_acceleration(&mut value, &mut accel, start.abs() + 0.5);
            assert_eq!(accel, 0.0, "start {start}");
            assert_eq!(value, 5.0 + start);
            apply_acceleration(&mut value, &mut accel, 3.0);
            assert_eq!(accel, 0.0);
            assert_eq!(value, 5.0 + start);
        }
    }

    #[test]
    fn bounded_result_always_in_range() {
        for (start, accel) in [(0.0, 50.0), (0.0, -50.0), (9.5, 1.0), (1.0, 0.2)] {
            let mut value = start;
            let mut ac = accel;
            apply_bounded_acceleration(&mut value, &mut ac, -10.0, 10.0, 0.1);
            assert!((-10.0..=10.0).contains(&value));
            if value == 10.0 || value == -10.0 {
                assert_eq!(ac, 0.0);
            }
        }
    }

    #[test]
    fn theta_and_zoom_are_clamped_and_stopped() {
        let opts = CameraOptions::default();
        let mut model = AccelerationModel::default();
        model.absorb(&InputDelta {
            theta: Some(60.0),
            zoom: Some(-50.0),
            ..InputDelta::default()
        });
        let mut s = state();
        assert!(model.apply(&mut s, &opts));
        assert_eq!(s.theta, opts.theta_max);
        assert_eq!(s.zoom, opts.zoom_max);
        assert_eq!(model.accelerations().theta, 0.0);
        assert_eq!(model.accelerations().zoom, 0.0);
    }

    #[test]
    fn phi_wraps_while_accelerating() {
        let opts = CameraOptions::default();
        let mut model = AccelerationModel::default();
        let mut s = state();
        s.phi = 179.0;
        model.absorb(&InputDelta {
            phi: Some(4.0),
            ..InputDelta::default()
        });
        assert!(model.apply(&mut s, &opts));
        assert_eq!(s.phi, -177.0);
    }

    #[test]
    fn closed_gates_ignore_input() {
        let mut model = AccelerationModel::default();
        *model.gates_mut() = MotionGates {
            rotate: false,
            translate: false,
            zoom: false,
        };
        model.absorb(&InputDelta {
            phi: Some(1.0),
            theta: Some(1.0),
            zoom: Some(1.0),
            zoom_impulse: 1.0,
            center: Some(Vec2::ONE),
            consumed: true,
        });
        assert_eq!(*model.accelerations(), Accelerations::default());
        let mut s = state();
        assert!(!model.apply(&mut s, &CameraOptions::default()));
        assert_eq!(s, state());
    }

    #[test]
    fn area_limit_stops_center() {
        let opts = CameraOptions::default();
        let mut model = AccelerationModel::default();
        model.limit_area(Aabb::new(Vec3::splat(-1.0), Vec3::splat(1.0)));
        model.absorb(&InputDelta {
            center: Some(Vec2::new(5.0, -0.5)),
            ..InputDelta::default()
        });
        let mut s = state();
        assert!(model.apply(&mut s, &opts));
        assert_eq!(s.center.x, 1.0);
        assert_eq!(model.accelerations().center.x, 0.0);
        assert_eq!(s.center.z, -0.5);
        assert!(model.accelerations().center.z < 0.0);
    }

    #[test]
    fn wheel_impulse_accumulates() {
        let mut model = AccelerationModel::default();
        let wheel = InputDelta {
            zoom_impulse: -0.5,
            ..InputDelta::default()
        };
        model.absorb(&wheel);
        model.absorb(&wheel);
        assert_eq!(model.accelerations().zoom, -1.0);
    }

    #[test]
    fn idle_model_reports_no_motion() {
        let mut model = AccelerationModel::default();
        let mut s = state();
        assert!(!model.apply(&mut s, &CameraOptions::default()));
    }
}
