use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::OrbicamError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Per-session camera tuning: friction, glide speeds, angle and distance
/// bounds, and the touch-gesture factors.
///
/// All rates are per tick. The defaults are tuned for a nominal 30 Hz tick.
pub struct CameraOptions {
    /// Friction subtracted from the zoom and center accelerators each tick.
    #[schemars(title = "Linear Attenuation", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub linear_attenuation: f32,
    /// Friction subtracted from the phi and theta accelerators each tick.
    #[schemars(title = "Angular Attenuation", range(min = 0.0, max = 2.0), extend("step" = 0.05))]
    pub angular_attenuation: f32,
    /// Farthest allowed distance from the center.
    #[schemars(title = "Farthest Zoom", range(min = 1.0, max = 5000.0))]
    pub zoom_min: f32,
    /// Nearest allowed distance from the center.
    #[schemars(title = "Nearest Zoom", range(min = 0.1, max = 5000.0))]
    pub zoom_max: f32,
    /// Default center glide speed and keyboard translation speed.
    #[schemars(title = "Linear Velocity", range(min = 0.01, max = 10.0), extend("step" = 0.01))]
    pub linear_velocity: f32,
    /// Default angle glide speed and keyboard rotation speed (degrees).
    #[schemars(title = "Angular Velocity", range(min = 0.1, max = 20.0), extend("step" = 0.1))]
    pub angular_velocity: f32,
    /// Default zoom glide speed and keyboard zoom speed.
    #[schemars(title = "Zoom Velocity", range(min = 0.01, max = 50.0), extend("step" = 0.01))]
    pub zoom_velocity: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub near_clip_distance: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub far_clip_distance: f32,
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 90.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Scale applied to a two-finger drag before it becomes a center nudge.
    #[schemars(skip)]
    pub translate_factor: f32,
    /// Largest change of finger distance still read as a drag rather than a
    /// pinch.
    #[schemars(skip)]
    pub max_dist_to_translate: f32,
    /// Scale applied to pointer deltas before they become angle nudges.
    #[schemars(title = "Rotate Factor", range(min = 0.01, max = 2.0), extend("step" = 0.01))]
    pub rotate_factor: f32,
    /// Lowest elevation in degrees.
    #[schemars(title = "Minimum Elevation", range(min = -90.0, max = 90.0))]
    pub theta_min: f32,
    /// Highest elevation in degrees.
    #[schemars(title = "Maximum Elevation", range(min = -90.0, max = 90.0))]
    pub theta_max: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            linear_attenuation: 0.03,
            angular_attenuation: 0.25,
            zoom_min: 30.0,
            zoom_max: 4.0,
            linear_velocity: 0.15,
            angular_velocity: 2.0,
            zoom_velocity: 0.25,
            near_clip_distance: 0.2,
            far_clip_distance: 600.0,
            fovy: 45.0,
            translate_factor: 0.01,
            max_dist_to_translate: 1.6,
            rotate_factor: 0.25,
            theta_min: 1.0,
            theta_max: 89.0,
        }
    }
}

impl CameraOptions {
    /// Check the invariants the motion code relies on.
    pub fn validate(&self) -> Result<(), OrbicamError> {
        let rates = [
            ("linear_attenuation", self.linear_attenuation),
            ("angular_attenuation", self.angular_attenuation),
            ("linear_velocity", self.linear_velocity),
            ("angular_velocity", self.angular_velocity),
            ("zoom_velocity", self.zoom_velocity),
            ("translate_factor", self.translate_factor),
            ("max_dist_to_translate", self.max_dist_to_translate),
            ("rotate_factor", self.rotate_factor),
        ];
        for (name, value) in rates {
            if !value.is_finite() || value < 0.0 {
                return Err(OrbicamError::InvalidOptions(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }

        if !(self.zoom_max < self.zoom_min) {
            return Err(OrbicamError::InvalidOptions(format!(
                "zoom_max ({}) must be nearer than zoom_min ({})",
                self.zoom_max, self.zoom_min
            )));
        }
        if !(self.theta_min < self.theta_max) {
            return Err(OrbicamError::InvalidOptions(format!(
                "theta_min ({}) must be below theta_max ({})",
                self.theta_min, self.theta_max
            )));
        }
        if self.theta_min < -90.0 || self.theta_max > 90.0 {
            return Err(OrbicamError::InvalidOptions(format!(
                "elevation bounds [{}, {}] leave [-90, 90]",
                self.theta_min, self.theta_max
            )));
        }
        if !(self.near_clip_distance > 0.0
            && self.near_clip_distance < self.far_clip_distance)
        {
            return Err(OrbicamError::InvalidOptions(format!(
                "clip planes [{}, {}] are not ordered",
                self.near_clip_distance, self.far_clip_distance
            )));
        }
        Ok(())
    }

    /// Copy with the touch factors doubled, for large screens.
    #[must_use]
    pub fn scaled_for_double_sized_gui(&self) -> Self {
        Self {
            translate_factor: self.translate_factor * 2.0,
            max_dist_to_translate: self.max_dist_to_translate * 2.0,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(CameraOptions::default().validate().is_ok());
    }

    #[test]
    fn inverted_zoom_bounds_rejected() {
        let opts = CameraOptions {
            zoom_min: 4.0,
            zoom_max: 30.0,
            ..CameraOptions::default()
        };
        assert!(matches!(
            opts.validate(),
            Err(OrbicamError::InvalidOptions(_))
        ));
    }

    #[test]
    fn elevation_outside_hemisphere_rejected() {
        let opts = CameraOptions {
            theta_max: 95.0,
            ..CameraOptions::default()
        };
        assert!(opts.validate().is_err());

        let opts = CameraOptions {
            theta_min: 50.0,
            theta_max: 10.0,
            ..CameraOptions::default()
        };
        assert!(opts.validate().is_err());
    }

    #[test]
    fn nan_rate_rejected() {
        let opts = CameraOptions {
            angular_attenuation: f32::NAN,
            ..CameraOptions::default()
        };
        assert!(opts.validate().is_err());
    }

    #[test]
    fn double_sized_gui_scales_touch_factors_only() {
        let base = CameraOptions::default();
        let scaled = base.scaled_for_double_sized_gui();
        assert_eq!(scaled.translate_factor, base.translate_factor * 2.0);
        assert_eq!(
            scaled.max_dist_to_translate,
            base.max_dist_to_translate * 2.0
        );
        assert_eq!(scaled.rotate_factor, base.rotate_factor);
        assert_eq!(scaled.zoom_min, base.zoom_min);
    }
}
