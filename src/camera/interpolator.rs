//! Fixed-step "glide toward a target" primitive and the six-scalar bundle
//! that drives a whole camera pose during a target transition.

use glam::Vec3;

use crate::camera::core::CameraState;

/// How far a glide moves per [`ScalarInterpolator::update`].
#[derive(Debug, Clone, Copy, PartialEq)]
enum Pace {
    /// Constant increment magnitude.
    Velocity(f32),
    /// Arrive after exactly this many more updates.
    Steps(u32),
}

/// One scalar gliding toward a target at a fixed per-tick pace.
///
/// The value never overshoots: once the remaining distance fits in one
/// increment it snaps exactly onto the target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScalarInterpolator {
    value: f32,
    target: f32,
    pace: Pace,
    arrived: bool,
}

impl Default for ScalarInterpolator {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl ScalarInterpolator {
    /// Interpolator resting at `value`.
    #[must_use]
    pub fn new(value: f32) -> Self {
        Self {
            value,
            target: value,
            pace: Pace::Velocity(0.0),
            arrived: true,
        }
    }

    /// Snap to `value` without motion.
    pub fn set_current(&mut self, value: f32) {
        self.value = value;
        self.target = value;
        self.arrived = true;
    }

    /// Start gliding from the current value toward `target`, moving
    /// `velocity` per update. A non-positive or non-finite velocity, or a
    /// non-finite distance to cover, arrives on the next update.
    pub fn set_target_and_velocity(&mut self, target: f32, velocity: f32) {
        self.target = target;
        self.pace = Pace::Velocity(velocity);
        self.arrived = false;
    }

    /// Start gliding from the current value toward `target`, arriving after
    /// exactly `steps` updates (at least one).
    pub fn set_target_and_steps(&mut self, target: f32, steps: u32) {
        self.target = target;
        self.pace = Pace::Steps(steps.max(1));
        self.arrived = false;
    }

    /// Advance one tick toward the target. No-op once arrived.
    pub fn update(&mut self) {
        if self.arrived {
            return;
        }

        let remaining = self.target - self.value;
        match self.pace {
            Pace::Velocity(velocity) => {
                if !(velocity.is_finite() && velocity > 0.0)
                    || !remaining.is_finite()
                    || remaining.abs() <= velocity
                {
                    self.arrive();
                } else {
                    self.value += velocity.copysign(remaining);
                }
            }
            Pace::Steps(steps) => {
                if steps <= 1 {
                    self.arrive();
                } else {
                    self.value += remaining / steps as f32;
                    self.pace = Pace::Steps(steps - 1);
                }
            }
        }
    }

    /// Whether the glide is still in progress.
    #[must_use]
    pub fn need_update(&self) -> bool {
        !self.arrived
    }

    /// Current value.
    #[must_use]
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Destination of the current (or last) glide.
    #[must_use]
    pub fn target(&self) -> f32 {
        self.target
    }

    fn arrive(&mut self) {
        self.value = self.target;
        self.arrived = true;
    }
}

/// Per-tick glide speeds for the three kinds of camera scalar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlideVelocities {
    /// Center x/y/z speed.
    pub linear: f32,
    /// Phi/theta speed in degrees.
    pub angular: f32,
    /// Zoom speed.
    pub zoom: f32,
}

/// Pace requested for a whole-pose glide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GlidePace {
    /// Each scalar moves at its own constant speed.
    Velocities(GlideVelocities),
    /// Every scalar arrives after the same number of ticks.
    Steps(u32),
}

/// The six camera scalars, in [`Glide`] slot order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scalar {
    /// Center x.
    CenterX,
    /// Center y.
    CenterY,
    /// Center z.
    CenterZ,
    /// Azimuth.
    Phi,
    /// Elevation.
    Theta,
    /// Distance.
    Zoom,
}

impl Scalar {
    /// All six scalars in slot order.
    pub const ALL: [Self; 6] = [
        Self::CenterX,
        Self::CenterY,
        Self::CenterZ,
        Self::Phi,
        Self::Theta,
        Self::Zoom,
    ];

    fn read(self, state: &CameraState) -> f32 {
        match self {
            Self::CenterX => state.center.x,
            Self::CenterY => state.center.y,
            Self::CenterZ => state.center.z,
            Self::Phi => state.phi,
            Self::Theta => state.theta,
            Self::Zoom => state.zoom,
        }
    }

    fn write(self, state: &mut CameraState, value: f32) {
        match self {
            Self::CenterX => state.center.x = value,
            Self::CenterY => state.center.y = value,
            Self::CenterZ => state.center.z = value,
            Self::Phi => state.phi = value,
            Self::Theta => state.theta = value,
            Self::Zoom => state.zoom = value,
        }
    }

    fn velocity(self, velocities: &GlideVelocities) -> f32 {
        match self {
            Self::CenterX | Self::CenterY | Self::CenterZ => velocities.linear,
            Self::Phi | Self::Theta => velocities.angular,
            Self::Zoom => velocities.zoom,
        }
    }
}

/// One [`ScalarInterpolator`] bound to each camera scalar.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Glide {
    slots: [ScalarInterpolator; 6],
}

impl Glide {
    /// Interpolator for one scalar.
    #[must_use]
    pub fn slot(&self, scalar: Scalar) -> &ScalarInterpolator {
        &self.slots[scalar as usize]
    }

    /// Snap every interpolator onto the live state, so the next glide
    /// starts from where the camera is now.
    pub fn flush(&mut self, state: &CameraState) {
        for scalar in Scalar::ALL {
            self.slots[scalar as usize].set_current(scalar.read(state));
        }
    }

    /// Snap only the center interpolators onto `center`.
    pub fn flush_center(&mut self, center: Vec3) {
        self.slots[Scalar::CenterX as usize].set_current(center.x);
        self.slots[Scalar::CenterY as usize].set_current(center.y);
        self.slots[Scalar::CenterZ as usize].set_current(center.z);
    }

    /// Aim one scalar at `target`.
    pub fn aim(&mut self, scalar: Scalar, target: f32, pace: GlidePace) {
        let slot = &mut self.slots[scalar as usize];
        match pace {
            GlidePace::Velocities(velocities) => {
                slot.set_target_and_velocity(target, scalar.velocity(&velocities));
            }
            GlidePace::Steps(steps) => slot.set_target_and_steps(target, steps),
        }
    }

    /// Aim every scalar at the matching field of `target`.
    pub fn aim_all(&mut self, target: &CameraState, pace: GlidePace) {
        for scalar in Scalar::ALL {
            self.aim(scalar, scalar.read(target), pace);
        }
    }

    /// Advance all six interpolators one tick and write them into `state`.
    pub fn advance(&mut self, state: &mut CameraState) {
        for scalar in Scalar::ALL {
            let slot = &mut self.slots[scalar as usize];
            slot.update();
            scalar.write(state, slot.value());
        }
    }

    /// Logical OR of every interpolator's [`ScalarInterpolator::need_update`].
    #[must_use]
    pub fn need_update(&self) -> bool {
        self.slots.iter().any(ScalarInterpolator::need_update)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_current_snaps_without_motion() {
        let mut interp = ScalarInterpolator::new(3.0);
        interp.set_current(7.5);
        assert_eq!(interp.value(), 7.5);
        assert!(!interp.need_update());
        interp.update();
        assert_eq!(interp.value(), 7.5);
    }

    #[test]
    fn velocity_glide_lands_exactly() {
        let mut interp = ScalarInterpolator::new(0.0);
        interp.set_target_and_velocity(10.0, 2.5);
        for expected in [2.5, 5.0, 7.5] {
            interp.update();
            assert_eq!(interp.value(), expected);
            assert!(interp.need_update());
        }
        interp.update();
        assert_eq!(interp.value(), 10.0);
        assert!(!interp.need_update());
    }

    #[test]
    fn velocity_glide_converges_within_ceiling_of_updates() {
        let mut interp = ScalarInterpolator::new(-4.0);
        interp.set_target_and_velocity(-30.0, 3.0);
        // ceil(26 / 3) = 9
        for _ in 0..9 {
            interp.update();
        }
        assert_eq!(interp.value(), -30.0);
        assert!(!interp.need_update());
    }

    #[test]
    fn glide_never_overshoots() {
        let mut interp = ScalarInterpolator::new(0.0);
        interp.set_target_and_velocity(1.0, 0.3);
        let mut last = 0.0;
        while interp.need_update() {
            interp.update();
            assert!(interp.value() >= last && interp.value() <= 1.0);
            last = interp.value();
        }
        assert_eq!(interp.value(), 1.0);
    }

    #[test]
    fn update_after_arrival_is_noop() {
        let mut interp = ScalarInterpolator::new(1.0);
        interp.set_target_and_velocity(2.0, 5.0);
        interp.update();
        interp.update();
        assert_eq!(interp.value(), 2.0);
        assert!(!interp.need_update());
    }

    #[test]
    fn zero_velocity_snaps() {
        let mut interp = ScalarInterpolator::new(1.0);
        interp.set_target_and_velocity(9.0, 0.0);
        interp.update();
        assert_eq!(interp.value(), 9.0);
    }

    #[test]
    fn infinite_target_arrives_instead_of_stepping_forever() {
        let mut interp = ScalarInterpolator::new(1.0);
        interp.set_target_and_velocity(f32::INFINITY, 0.5);
        interp.update();
        assert!(!interp.need_update());
    }

    #[test]
    fn step_glide_arrives_after_exact_count() {
        let mut interp = ScalarInterpolator::new(0.0);
        interp.set_target_and_steps(12.0, 4);
        interp.update();
        assert_eq!(interp.value(), 3.0);
        interp.update();
        interp.update();
        assert!(interp.need_update());
        interp.update();
        assert_eq!(interp.value(), 12.0);
        assert!(!interp.need_update());
    }

    #[test]
    fn retarget_starts_from_in_flight_value() {
        let mut interp = ScalarInterpolator::new(0.0);
        interp.set_target_and_velocity(100.0, 10.0);
        interp.update();
        interp.update();
        interp.set_target_and_velocity(0.0, 5.0);
        assert_eq!(interp.value(), 20.0);
        interp.update();
        assert_eq!(interp.value(), 15.0);
    }

    #[test]
    fn glide_bundle_drives_state() {
        let start = CameraState {
            center: Vec3::ZERO,
            phi: 0.0,
            theta: 10.0,
            zoom: 20.0,
        };
        let goal = CameraState {
            center: Vec3::new(1.0, 0.0, -1.0),
            phi: 90.0,
            theta: 40.0,
            zoom: 10.0,
        };
        let mut glide = Glide::default();
        glide.flush(&start);
        assert!(!glide.need_update());

        glide.aim_all(&goal, GlidePace::Steps(5));
        let mut state = start;
        for _ in 0..5 {
            assert!(glide.need_update());
            glide.advance(&mut state);
        }
        assert!(!glide.need_update());
        assert_eq!(state, goal);
        assert_eq!(glide.slot(Scalar::Phi).target(), 90.0);
    }
}
