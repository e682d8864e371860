use crate::options::DisplayOptions;

/// Viewport metrics captured from the host window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenInfo {
    width: u32,
    height: u32,
    scale_factor: f32,
    double_sized_gui: bool,
}

impl ScreenInfo {
    /// Capture a `width` x `height` viewport. Screens at least
    /// `double_size_width_threshold` pixels wide use the double-sized GUI.
    #[must_use]
    pub fn new(
        width: u32,
        height: u32,
        scale_factor: f32,
        display: &DisplayOptions,
    ) -> Self {
        Self {
            width,
            height,
            scale_factor,
            double_sized_gui: width >= display.double_size_width_threshold,
        }
    }

    /// Viewport width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Viewport height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Half the width, rounded down.
    #[must_use]
    pub fn half_width(&self) -> u32 {
        self.width / 2
    }

    /// Half the height, rounded down.
    #[must_use]
    pub fn half_height(&self) -> u32 {
        self.height / 2
    }

    /// A quarter of the width, rounded down.
    #[must_use]
    pub fn quarter_width(&self) -> u32 {
        self.width / 4
    }

    /// A quarter of the height, rounded down.
    #[must_use]
    pub fn quarter_height(&self) -> u32 {
        self.height / 4
    }

    /// Host window scale factor (HiDPI).
    #[must_use]
    pub fn scale_factor(&self) -> f32 {
        self.scale_factor
    }

    /// Whether the screen is large enough for the double-sized GUI.
    #[must_use]
    pub fn should_use_double_sized_gui(&self) -> bool {
        self.double_sized_gui
    }

    /// 2.0 on double-sized GUI screens, 1.0 otherwise.
    #[must_use]
    pub fn gui_scale(&self) -> f32 {
        if self.double_sized_gui {
            2.0
        } else {
            1.0
        }
    }

    /// Width / height, or 1.0 for a degenerate viewport.
    #[must_use]
    pub fn aspect(&self) -> f32 {
        if self.height == 0 {
            1.0
        } else {
            self.width as f32 / self.height as f32
        }
    }
}
