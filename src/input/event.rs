use glam::Vec2;

/// Platform-agnostic input events.
///
/// These are fed into a [`CameraInput`](super::CameraInput) through
/// [`CameraController::handle_event`](crate::camera::controller::CameraController::handle_event)
/// and folded into the next tick.
///
/// # Example
///
/// ```ignore
/// controller.handle_event(&InputEvent::Key {
///     code: "ArrowUp".into(),
///     pressed: true,
/// });
/// let moved = controller.do_move();
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to absolute screen position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// Mouse button pressed or released.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Scroll wheel (positive = away from the user).
    Scroll {
        /// Wheel notches since the last event.
        delta: f32,
    },
    /// Physical key pressed or released.
    Key {
        /// Key code in `winit::keyboard::KeyCode` debug format.
        code: String,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// The host window lost focus; every held key is released.
    FocusLost,
    /// Current multi-touch frame, one entry per finger on the screen.
    Touches(Vec<TouchPoint>),
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
}

/// Life-cycle phase of one finger within a touch frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TouchPhase {
    /// Finger just landed.
    Pressed,
    /// Finger moved since the previous frame.
    Moved,
    /// Finger is down but did not move.
    Stationary,
    /// Finger just lifted.
    Released,
}

/// One finger in a touch frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    /// Host-assigned finger id.
    pub id: u64,
    /// Current horizontal position.
    pub x: f32,
    /// Current vertical position.
    pub y: f32,
    /// Horizontal position in the previous frame.
    pub prev_x: f32,
    /// Vertical position in the previous frame.
    pub prev_y: f32,
    /// Phase within this frame.
    pub phase: TouchPhase,
}

impl TouchPoint {
    /// Current position.
    #[must_use]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Previous position minus current position.
    #[must_use]
    pub fn delta_from_previous(&self) -> Vec2 {
        Vec2::new(self.prev_x - self.x, self.prev_y - self.y)
    }

    /// Whether two fingers report the same spot (a duplicated reading).
    #[must_use]
    pub fn equal_position(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }

    /// Same finger settled at its current position.
    #[must_use]
    pub fn settled(&self) -> Self {
        Self {
            prev_x: self.x,
            prev_y: self.y,
            phase: TouchPhase::Stationary,
            ..*self
        }
    }
}

#[cfg(feature = "viewer")]
impl From<winit::event::MouseButton> for MouseButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Right => Self::Right,
            winit::event::MouseButton::Middle => Self::Middle,
            _ => Self::Left,
        }
    }
}

#[cfg(feature = "viewer")]
impl From<winit::event::TouchPhase> for TouchPhase {
    fn from(phase: winit::event::TouchPhase) -> Self {
        match phase {
            winit::event::TouchPhase::Started => Self::Pressed,
            winit::event::TouchPhase::Moved => Self::Moved,
            winit::event::TouchPhase::Ended
            | winit::event::TouchPhase::Cancelled => Self::Released,
        }
    }
}

/// Key string for a winit physical key code, as used by
/// [`KeybindingOptions`](crate::options::KeybindingOptions).
#[cfg(feature = "viewer")]
#[must_use]
pub fn key_code_name(code: winit::keyboard::KeyCode) -> String {
    format!("{code:?}")
}
