//! Input handling: event types and the two input sources (desktop keyboard
//! and mouse, multi-touch gestures) that turn raw events into per-tick
//! accelerator nudges.

/// Keyboard and mouse source.
pub mod desktop;
/// Platform-agnostic input events.
pub mod event;
/// Bindable camera key actions.
pub mod keyboard;
/// Multi-touch gesture recognizer.
pub mod touch;

pub use desktop::DesktopInput;
pub use event::{InputEvent, MouseButton, TouchPhase, TouchPoint};
use glam::Vec2;
pub use keyboard::KeyAction;
pub use touch::TouchInput;

use crate::camera::acceleration::MotionGates;
use crate::camera::core::CameraState;
use crate::options::CameraOptions;

/// Accelerator nudges produced by one tick of input.
///
/// `Some` fields overwrite the matching accelerator; `zoom_impulse` is added
/// on top of the zoom accelerator. `center` holds the x and z nudges; the
/// vertical center axis is never driven by input.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputDelta {
    /// Azimuth accelerator.
    pub phi: Option<f32>,
    /// Elevation accelerator.
    pub theta: Option<f32>,
    /// Zoom accelerator.
    pub zoom: Option<f32>,
    /// Added to the zoom accelerator.
    pub zoom_impulse: f32,
    /// Center x (`.x`) and z (`.y`) accelerators.
    pub center: Option<Vec2>,
    /// Whether the source treated this tick's input as camera input.
    pub consumed: bool,
}

impl InputDelta {
    /// No motion, but input was claimed by the camera.
    #[must_use]
    pub fn consumed() -> Self {
        Self {
            consumed: true,
            ..Self::default()
        }
    }
}

/// Read-only camera view handed to an input source each tick.
#[derive(Debug, Clone, Copy)]
pub struct InputContext<'a> {
    /// Live camera pose.
    pub state: &'a CameraState,
    /// Session tuning.
    pub options: &'a CameraOptions,
    /// Which kinds of motion are accepted.
    pub gates: MotionGates,
}

/// A source of camera input. Events arrive any time; [`poll`](Self::poll)
/// is called once per tick and turns what accumulated into nudges.
pub trait CameraInput {
    /// Record one raw event. Returns whether the source uses it.
    fn handle_event(&mut self, event: &InputEvent) -> bool;

    /// Produce this tick's nudges and clear per-tick accumulations.
    fn poll(&mut self, ctx: &InputContext<'_>) -> InputDelta;
}

/// World-space (x, z) offset for a move of `back` units toward the eye and
/// `side` units across the view, for azimuth `phi` in degrees.
#[must_use]
pub fn planar_offset(phi: f32, back: f32, side: f32) -> Vec2 {
    let (sin_phi, cos_phi) = phi.to_radians().sin_cos();
    let (sin_side, cos_side) = (phi + 90.0).to_radians().sin_cos();
    Vec2::new(
        back * sin_phi + side * sin_side,
        back * cos_phi + side * cos_side,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn planar_offset_follows_azimuth() {
        // Eye on +z: "toward the eye" is +z
        let back = planar_offset(0.0, 1.0, 0.0);
        assert!((back - Vec2::new(0.0, 1.0)).length() < 1e-6);

        let side = planar_offset(0.0, 0.0, 1.0);
        assert!((side - Vec2::new(1.0, 0.0)).length() < 1e-6);

        let turned = planar_offset(90.0, 1.0, 0.0);
        assert!((turned - Vec2::new(1.0, 0.0)).length() < 1e-6);
    }
}
