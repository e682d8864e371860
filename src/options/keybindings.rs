use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::input::KeyAction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Configurable keyboard bindings mapping camera actions to key codes.
///
/// Key strings use the `winit::keyboard::KeyCode` debug format
/// (`"ArrowUp"`, `"Numpad7"`, `"ShiftLeft"`). An action may have several
/// keys; any of them triggers it.
pub struct KeybindingOptions {
    /// Maps action → key strings (e.g. `ZoomNearest` → `["Home", "Numpad7"]`).
    pub bindings: HashMap<KeyAction, Vec<String>>,
    /// Reverse lookup cache (key string → action). Rebuilt on load.
    #[serde(skip)]
    key_to_action: HashMap<String, KeyAction>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let keys = |names: &[&str]| -> Vec<String> {
            names.iter().map(|&name| name.to_owned()).collect()
        };
        let bindings = HashMap::from([
            (KeyAction::ZoomIn, keys(&["ArrowUp"])),
            (KeyAction::ZoomOut, keys(&["ArrowDown"])),
            (KeyAction::ZoomNearest, keys(&["Home", "Numpad7"])),
            (KeyAction::ZoomFarthest, keys(&["End", "Numpad1"])),
            (KeyAction::TiltToTop, keys(&["Insert", "Numpad0"])),
            (KeyAction::TiltToBottom, keys(&["Delete", "NumpadDecimal"])),
            (KeyAction::RotateLeft, keys(&["ArrowLeft"])),
            (KeyAction::RotateRight, keys(&["ArrowRight"])),
            (KeyAction::TiltUp, keys(&["PageUp", "Numpad9"])),
            (KeyAction::TiltDown, keys(&["PageDown", "Numpad3"])),
            (KeyAction::MoveForward, keys(&["Numpad8"])),
            (KeyAction::MoveBackward, keys(&["Numpad2"])),
            (KeyAction::MoveLeft, keys(&["Numpad4"])),
            (KeyAction::MoveRight, keys(&["Numpad6"])),
            (KeyAction::FastModifier, keys(&["ShiftLeft", "ShiftRight"])),
            (KeyAction::DumpState, keys(&["F5"])),
        ]);

        let mut opts = Self {
            bindings,
            key_to_action: HashMap::new(),
        };
        opts.rebuild_reverse_map();
        opts
    }
}

impl KeybindingOptions {
    /// Rebuild the reverse lookup map (key string → action).
    pub fn rebuild_reverse_map(&mut self) {
        self.key_to_action.clear();
        for (action, keys) in &self.bindings {
            for key in keys {
                let _ = self.key_to_action.insert(key.clone(), *action);
            }
        }
    }

    /// Look up the action for a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyAction> {
        self.key_to_action.get(key).copied()
    }

    /// Replace the keys bound to `action` and refresh the reverse map.
    pub fn bind(&mut self, action: KeyAction, keys: Vec<String>) {
        let _ = self.bindings.insert(action, keys);
        self.rebuild_reverse_map();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_has_numpad_aliases() {
        let opts = KeybindingOptions::default();
        assert_eq!(opts.lookup("Home"), Some(KeyAction::ZoomNearest));
        assert_eq!(opts.lookup("Numpad7"), Some(KeyAction::ZoomNearest));
        assert_eq!(opts.lookup("NumpadDecimal"), Some(KeyAction::TiltToBottom));
        assert_eq!(opts.lookup("ShiftRight"), Some(KeyAction::FastModifier));
        assert_eq!(opts.lookup("KeyZ"), None);
    }

    #[test]
    fn rebinding_drops_old_keys() {
        let mut opts = KeybindingOptions::default();
        opts.bind(KeyAction::MoveForward, vec!["KeyW".into()]);
        assert_eq!(opts.lookup("KeyW"), Some(KeyAction::MoveForward));
        assert_eq!(opts.lookup("Numpad8"), None);
    }
}
