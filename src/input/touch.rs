//! Multi-touch gesture recognizer.
//!
//! Two fingers either drag the center (finger distance roughly constant) or
//! pinch the zoom (distance changed by more than `max_dist_to_translate`
//! from the gesture baseline). Three fingers rotate, driven by the single
//! finger that moves while the other two rest.

use super::event::{InputEvent, TouchPhase, TouchPoint};
use super::{planar_offset, CameraInput, InputContext, InputDelta};

/// Finger distances at or beyond this are treated as broken readings.
const MAX_TOUCHES_DISTANCE: f32 = 5000.0;

/// Touch input source.
#[derive(Debug, Clone, Default)]
pub struct TouchInput {
    /// Latest touch frame from the host.
    touches: Vec<TouchPoint>,
    /// Two-finger distance at the start of the current gesture.
    baseline: Option<f32>,
}

impl TouchInput {
    /// Create a source with no fingers down.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Two-finger distance recorded at gesture start, if a gesture is live.
    #[must_use]
    pub fn baseline(&self) -> Option<f32> {
        self.baseline
    }

    fn reset_baseline(&mut self) {
        if self.baseline.take().is_some() {
            log::debug!("touch gesture baseline reset");
        }
    }

    fn two_fingers(&mut self, ctx: &InputContext<'_>) -> InputDelta {
        let (first, second) = (self.touches[0], self.touches[1]);
        let distance = first.position().distance(second.position());

        if distance.is_nan() || distance == 0.0 || distance >= MAX_TOUCHES_DISTANCE
        {
            // Broken reading: still a camera gesture, but nothing to apply
            self.reset_baseline();
            return InputDelta::consumed();
        }

        let Some(baseline) = self.baseline else {
            self.baseline = Some(distance);
            return InputDelta::consumed();
        };

        if first.phase != TouchPhase::Moved && second.phase != TouchPhase::Moved {
            return InputDelta::consumed();
        }

        let opts = ctx.options;
        if (distance - baseline).abs() <= opts.max_dist_to_translate {
            if !ctx.gates.translate {
                return InputDelta::default();
            }
            let drag = first.delta_from_previous() * opts.translate_factor;
            let planar = planar_offset(ctx.state.phi, drag.y, drag.x);
            if planar.is_nan() {
                self.reset_baseline();
                return InputDelta::consumed();
            }
            let mut delta = InputDelta::consumed();
            if planar != glam::Vec2::ZERO {
                delta.center = Some(planar);
            }
            delta
        } else {
            if !ctx.gates.zoom {
                return InputDelta::default();
            }
            let zoom = (baseline - distance) / opts.max_dist_to_translate;
            if !zoom.is_finite() {
                self.reset_baseline();
                return InputDelta::consumed();
            }
            InputDelta {
                zoom: Some(zoom),
                ..InputDelta::consumed()
            }
        }
    }

    fn three_fingers(&self, ctx: &InputContext<'_>) -> InputDelta {
        let fingers = &self.touches[..3];
        if fingers[0].equal_position(&fingers[1])
            || fingers[1].equal_position(&fingers[2])
            || fingers[0].equal_position(&fingers[2])
        {
            return InputDelta::default();
        }

        let mut moving = fingers.iter().filter(|t| t.phase == TouchPhase::Moved);
        let (Some(pivot), None) = (moving.next(), moving.next()) else {
            return InputDelta::default();
        };

        let drag = pivot.delta_from_previous();
        if drag.is_nan() {
            return InputDelta::default();
        }

        let rotate_factor = ctx.options.rotate_factor;
        let mut delta = InputDelta::consumed();
        if drag.x != 0.0 {
            delta.phi = Some(drag.x * rotate_factor);
        }
        if drag.y != 0.0 {
            delta.theta = Some(drag.y * rotate_factor);
        }
        delta
    }
}

impl CameraInput for TouchInput {
    fn handle_event(&mut self, event: &InputEvent) -> bool {
        match event {
            InputEvent::Touches(touches) => {
                self.touches.clone_from(touches);
                true
            }
            InputEvent::FocusLost => {
                self.touches.clear();
                self.reset_baseline();
                true
            }
            _ => false,
        }
    }

    fn poll(&mut self, ctx: &InputContext<'_>) -> InputDelta {
        let delta = if self.touches.len() == 2 {
            self.two_fingers(ctx)
        } else {
            self.reset_baseline();
            if self.touches.len() == 3 && ctx.gates.rotate {
                self.three_fingers(ctx)
            } else {
                InputDelta::default()
            }
        };

        // A frame is used once; until the host sends a new one the fingers
        // rest where they are.
        self.touches.retain(|t| t.phase != TouchPhase::Released);
        for touch in &mut self.touches {
            *touch = touch.settled();
        }
        delta
    }
}
