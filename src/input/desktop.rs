//! Keyboard and mouse camera input.
//!
//! Keys are held-state: every tick a held key re-issues its nudge. The
//! middle-button drag and the wheel accumulate between ticks and are
//! consumed by [`CameraInput::poll`].

use std::collections::HashSet;

use glam::Vec2;

use super::event::{InputEvent, MouseButton};
use super::{planar_offset, CameraInput, InputContext, InputDelta, KeyAction};
use crate::options::KeybindingOptions;

/// Largest angle nudge a single tick of mouse drag may produce.
const MAX_POINTER_NUDGE: f32 = 5.0;
/// Zoom speed multiplier for the "rush to nearest/farthest" keys.
const ZOOM_RUSH_FACTOR: f32 = 10.0;
/// Elevation nudge for the "tilt to top/bottom" keys.
const TILT_RUSH: f32 = 10.0;
/// Scale from one wheel notch to a zoom impulse, in zoom velocities.
const WHEEL_ZOOM_FACTOR: f32 = 0.5;

/// Desktop input source: keyboard nudges plus middle-drag rotation and
/// wheel zoom.
#[derive(Debug, Clone, Default)]
pub struct DesktopInput {
    /// Key string → action mapping.
    key_bindings: KeybindingOptions,
    /// Physical keys currently held that are bound to an action.
    held_keys: HashSet<String>,
    /// Set on the press edge of [`KeyAction::DumpState`].
    dump_requested: bool,
    /// Last known cursor position.
    cursor: Option<Vec2>,
    /// Whether the middle mouse button is held.
    middle_pressed: bool,
    /// Cursor motion since the last poll.
    pending_motion: Vec2,
    /// Wheel notches since the last poll.
    pending_wheel: f32,
}

impl DesktopInput {
    /// Create a source with the given key bindings.
    #[must_use]
    pub fn new(key_bindings: KeybindingOptions) -> Self {
        Self {
            key_bindings,
            ..Self::default()
        }
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeybindingOptions {
        &self.key_bindings
    }

    /// Whether any key bound to `action` is held.
    #[must_use]
    pub fn is_held(&self, action: KeyAction) -> bool {
        self.held_keys
            .iter()
            .any(|key| self.key_bindings.lookup(key) == Some(action))
    }

    fn handle_key(&mut self, code: &str, pressed: bool) -> bool {
        let Some(action) = self.key_bindings.lookup(code) else {
            return false;
        };
        if pressed {
            if self.held_keys.insert(code.to_owned())
                && action == KeyAction::DumpState
            {
                self.dump_requested = true;
            }
        } else {
            let _ = self.held_keys.remove(code);
        }
        true
    }

    fn handle_cursor(&mut self, x: f32, y: f32) -> bool {
        let position = Vec2::new(x, y);
        if let Some(last) = self.cursor.replace(position) {
            if self.middle_pressed {
                self.pending_motion += position - last;
                return true;
            }
        }
        false
    }

    /// Keyboard nudges; returns whether any key moved the camera.
    fn keyboard(&mut self, ctx: &InputContext<'_>, delta: &mut InputDelta) -> bool {
        let opts = ctx.options;
        let gates = ctx.gates;
        let speed = if self.is_held(KeyAction::FastModifier) {
            2.0
        } else {
            1.0
        };
        let mut moved = false;

        if self.dump_requested {
            self.dump_requested = false;
            let state = ctx.state;
            log::info!(
                "camera center: ({:.2}, {:.2}, {:.2}) phi: {:.2} theta: {:.2} zoom: {:.2}",
                state.center.x,
                state.center.y,
                state.center.z,
                state.phi,
                state.theta,
                state.zoom
            );
        }

        if gates.zoom {
            if self.is_held(KeyAction::ZoomIn) {
                delta.zoom = Some(-speed * opts.zoom_velocity);
                moved = true;
            } else if self.is_held(KeyAction::ZoomOut) {
                delta.zoom = Some(speed * opts.zoom_velocity);
                moved = true;
            }

            if self.is_held(KeyAction::ZoomNearest) {
                delta.zoom = Some(-ZOOM_RUSH_FACTOR * opts.zoom_velocity);
                moved = true;
            } else if self.is_held(KeyAction::ZoomFarthest) {
                delta.zoom = Some(ZOOM_RUSH_FACTOR * opts.zoom_velocity);
                moved = true;
            }
        }

        if gates.rotate {
            if self.is_held(KeyAction::TiltToTop) {
                delta.theta = Some(TILT_RUSH);
                moved = true;
            } else if self.is_held(KeyAction::TiltToBottom) {
                delta.theta = Some(-TILT_RUSH);
                moved = true;
            }

            if self.is_held(KeyAction::RotateLeft) {
                delta.phi = Some(speed * opts.angular_velocity);
                moved = true;
            } else if self.is_held(KeyAction::RotateRight) {
                delta.phi = Some(-speed * opts.angular_velocity);
                moved = true;
            }

            if self.is_held(KeyAction::TiltUp) {
                delta.theta = Some(speed * opts.angular_velocity);
                moved = true;
            } else if self.is_held(KeyAction::TiltDown) {
                delta.theta = Some(-speed * opts.angular_velocity);
                moved = true;
            }
        }

        if gates.translate {
            let step = speed * opts.linear_velocity;
            let mut back = 0.0;
            let mut side = 0.0;
            for (action, toward_eye, across) in [
                (KeyAction::MoveForward, -step, 0.0),
                (KeyAction::MoveBackward, step, 0.0),
                (KeyAction::MoveLeft, 0.0, -step),
                (KeyAction::MoveRight, 0.0, step),
            ] {
                if self.is_held(action) {
                    back += toward_eye;
                    side += across;
                    moved = true;
                }
            }

            let planar = planar_offset(ctx.state.phi, back, side);
            if planar != Vec2::ZERO {
                delta.center = Some(planar);
            }
        }

        moved
    }

    /// Mouse nudges; returns whether the mouse moved the camera.
    fn mouse(&self, ctx: &InputContext<'_>, delta: &mut InputDelta) -> bool {
        let motion = self.pending_motion;
        if self.middle_pressed && motion != Vec2::ZERO {
            if !ctx.gates.rotate {
                return false;
            }
            let nudge = (motion * ctx.options.rotate_factor)
                .clamp(Vec2::splat(-MAX_POINTER_NUDGE), Vec2::splat(MAX_POINTER_NUDGE));
            delta.phi = Some(nudge.x);
            delta.theta = Some(nudge.y);
            return true;
        }

        if self.pending_wheel != 0.0 && ctx.gates.zoom {
            // Wheel away from the user zooms in
            delta.zoom_impulse -=
                self.pending_wheel * ctx.options.zoom_velocity * WHEEL_ZOOM_FACTOR;
            return true;
        }

        false
    }
}

impl CameraInput for DesktopInput {
    fn handle_event(&mut self, event: &InputEvent) -> bool {
        match event {
            InputEvent::Key { code, pressed } => self.handle_key(code, *pressed),
            InputEvent::CursorMoved { x, y } => self.handle_cursor(*x, *y),
            InputEvent::MouseButton {
                button: MouseButton::Middle,
                pressed,
            } => {
                self.middle_pressed = *pressed;
                true
            }
            InputEvent::Scroll { delta } => {
                self.pending_wheel += delta;
                true
            }
            InputEvent::FocusLost => {
                self.held_keys.clear();
                self.middle_pressed = false;
                true
            }
            InputEvent::MouseButton { .. } | InputEvent::Touches(_) => false,
        }
    }

    fn poll(&mut self, ctx: &InputContext<'_>) -> InputDelta {
        let mut delta = InputDelta::default();
        let keyboard = self.keyboard(ctx, &mut delta);
        let mouse = self.mouse(ctx, &mut delta);
        self.pending_motion = Vec2::ZERO;
        self.pending_wheel = 0.0;
        delta.consumed = keyboard || mouse;
        delta
    }
}
