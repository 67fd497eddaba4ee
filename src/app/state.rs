// SPDX-License-Identifier: GPL-3.0-only

//! Application state management

use crate::config::Config;
use crate::editor::FilterEditor;
use crate::filters::{CpuFilterEngine, FilterChoice};
use cosmic::cosmic_config;
use cosmic::widget;
use cosmic::widget::about::About;
use image::RgbaImage;
use std::path::PathBuf;
use std::sync::Arc;

/// Export state machine
///
/// Simple three-state design: idle, save in flight, or a finished outcome
/// shown as a status line until the next save.
#[derive(Debug, Default)]
pub enum ExportState {
    /// No save in progress and nothing to report
    #[default]
    Idle,
    /// A save task is running
    Saving,
    /// Last save finished
    Finished(Result<PathBuf, String>),
}

impl ExportState {
    /// Check if a save is currently in flight
    pub fn is_saving(&self) -> bool {
        matches!(self, ExportState::Saving)
    }
}

/// A decoded image ready for the editor: the full-resolution source plus a
/// preview-sized copy the slider renders against.
#[derive(Clone)]
pub struct LoadedImage {
    /// Full-resolution pixels, used when saving
    pub full: Arc<RgbaImage>,
    /// Downscaled copy for interactive preview rendering
    pub preview: Arc<RgbaImage>,
}

impl std::fmt::Debug for LoadedImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadedImage")
            .field("full", &(self.full.width(), self.full.height()))
            .field("preview", &(self.preview.width(), self.preview.height()))
            .finish()
    }
}

/// Main application state
pub struct AppModel {
    /// Application state which is managed by the COSMIC runtime.
    pub core: cosmic::Core,
    /// Display a context drawer with the designated page if defined.
    pub context_page: ContextPage,
    /// The about page for this app.
    pub about: About,
    /// Configuration data that persists between application runs.
    pub config: Config,
    /// Configuration handler for saving settings
    pub config_handler: Option<cosmic_config::Config>,
    /// Filter editor: current choice, intensity, and rendered preview
    pub editor: FilterEditor<CpuFilterEngine>,
    /// Full-resolution source, re-rendered when saving
    pub full_source: Option<Arc<RgbaImage>>,
    /// Widget handle for the current rendered preview
    pub preview_handle: Option<widget::image::Handle>,
    /// Per-filter thumbnails for the filter picker grid
    pub filter_thumbnails: Vec<(FilterChoice, widget::image::Handle)>,
    /// Whether the file picker dialog is open (guards double-open)
    pub picker_open: bool,
    /// Export state (idle, saving, or last outcome)
    pub export: ExportState,
    /// Theme dropdown labels
    pub theme_dropdown_options: Vec<String>,
    /// Output format dropdown labels
    pub format_dropdown_options: Vec<String>,
}

/// The context page to display in the context drawer.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum ContextPage {
    #[default]
    About,
    Settings,
    Filters,
}

/// Messages emitted by the application and its widgets.
///
/// Messages are organized into logical groups:
/// - **UI Navigation**: Context pages, external URLs
/// - **Editor**: Image picking, filter selection, intensity changes
/// - **Export**: Saving the rendered image
/// - **Settings**: Configuration, theme, output format
#[derive(Debug, Clone)]
pub enum Message {
    // ===== UI Navigation =====
    /// Open external URL (repository, etc.)
    LaunchUrl(String),
    /// Toggle context drawer page (About, Settings, Filters)
    ToggleContextPage(ContextPage),

    // ===== Editor =====
    /// Open the image picker dialog
    OpenImagePicker,
    /// Image picked and decoded (or the dialog was cancelled / decode failed)
    ImageLoaded(Result<Option<LoadedImage>, String>),
    /// Select a filter from the picker grid
    SelectFilter(FilterChoice),
    /// Intensity slider moved
    SetIntensity(f32),

    // ===== Export =====
    /// Save the rendered image to the Pictures directory
    SaveImage,
    /// Save task finished with the written path or an error
    ImageSaved(Result<PathBuf, String>),

    // ===== Settings =====
    /// Configuration file changed on disk
    UpdateConfig(Config),
    /// Select application theme by dropdown index
    SetAppTheme(usize),
    /// Select output format by dropdown index
    SelectOutputFormat(usize),
    /// Open the save folder in the file manager
    OpenSaveFolder,
}
