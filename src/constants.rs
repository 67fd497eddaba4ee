// SPDX-License-Identifier: GPL-3.0-only

//! Application-wide constants

/// Intensity-to-parameter mapping
pub mod mapping {
    /// Radius slot value at intensity 1.0 (pixels)
    pub const RADIUS_MAX: f32 = 200.0;
    /// Scale slot value at intensity 1.0 (block edge, pixels)
    pub const SCALE_MAX: f32 = 10.0;
    /// Slider position on startup
    pub const DEFAULT_INTENSITY: f32 = 0.5;
}

/// Rendering sizes
pub mod preview {
    /// Long-edge cap for the interactive preview copy. Slider drags render
    /// synchronously, so the preview stays small; exports re-render at full
    /// resolution off the UI thread.
    pub const MAX_DIMENSION: u32 = 1280;
    /// Edge of the square thumbnails in the filter grid
    pub const THUMBNAIL_DIMENSION: u32 = 96;
}

/// UI metrics
pub mod ui {
    /// Minimum window width
    pub const MIN_WINDOW_WIDTH: f32 = 360.0;
    /// Minimum window height
    pub const MIN_WINDOW_HEIGHT: f32 = 400.0;
    /// Fixed width of the intensity value label
    pub const INTENSITY_VALUE_WIDTH: f32 = 48.0;
}
