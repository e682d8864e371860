use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[schemars(title = "Display", inline)]
#[serde(default)]
/// Host display parameters the camera depends on.
pub struct DisplayOptions {
    /// Viewport width (pixels) from which the GUI is drawn double sized and
    /// touch gestures are scaled up.
    #[schemars(title = "Double-Sized GUI Width", range(min = 320, max = 8192))]
    pub double_size_width_threshold: u32,
    /// Nominal tick rate the camera tuning assumes.
    #[schemars(title = "Target FPS", range(min = 1, max = 240))]
    pub target_fps: u32,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            double_size_width_threshold: 2048,
            target_fps: 30,
        }
    }
}
