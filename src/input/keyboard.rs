use serde::{Deserialize, Serialize};

/// Camera actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// zoom_in = ["ArrowUp"]
/// move_forward = ["Numpad8", "KeyW"]
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Move toward the center.
    ZoomIn,
    /// Move away from the center.
    ZoomOut,
    /// Rush toward the nearest zoom.
    ZoomNearest,
    /// Rush toward the farthest zoom.
    ZoomFarthest,
    /// Rush toward the highest elevation.
    TiltToTop,
    /// Rush toward the lowest elevation.
    TiltToBottom,
    /// Increase azimuth.
    RotateLeft,
    /// Decrease azimuth.
    RotateRight,
    /// Increase elevation.
    TiltUp,
    /// Decrease elevation.
    TiltDown,
    /// Translate the center away from the eye.
    MoveForward,
    /// Translate the center toward the eye.
    MoveBackward,
    /// Translate the center to the left of the view.
    MoveLeft,
    /// Translate the center to the right of the view.
    MoveRight,
    /// Held to double keyboard rotation/translation/zoom speed.
    FastModifier,
    /// Log the current camera state.
    DumpState,
}
