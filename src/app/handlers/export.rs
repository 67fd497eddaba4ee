// SPDX-License-Identifier: GPL-3.0-only

//! Export handlers
//!
//! Saves the rendered image to the Pictures directory. The preview renders
//! against a downscaled copy, so saving re-renders the full-resolution
//! source with the same filter and intensity before encoding.

use crate::app::state::{AppModel, ExportState, Message};
use crate::filters::{CpuFilterEngine, FilterEngine};
use crate::storage;
use cosmic::Task;
use image::RgbaImage;
use std::sync::Arc;
use tracing::{error, info};

/// The full-resolution source to save, or `None` when saving must no-op:
/// no rendered image, no source, or a save already in flight.
fn export_candidate(
    rendered: Option<&Arc<RgbaImage>>,
    full_source: Option<&Arc<RgbaImage>>,
    export: &ExportState,
) -> Option<Arc<RgbaImage>> {
    if rendered.is_none() || export.is_saving() {
        return None;
    }
    full_source.cloned()
}

impl AppModel {
    pub(crate) fn handle_save_image(&mut self) -> Task<cosmic::Action<Message>> {
        let Some(full_source) = export_candidate(
            self.editor.rendered(),
            self.full_source.as_ref(),
            &self.export,
        ) else {
            return Task::none();
        };

        self.export = ExportState::Saving;

        let choice = self.editor.choice();
        let params = self.editor.params();
        let folder = self.config.save_folder_name.clone();
        let format = self.config.output_format;

        Task::perform(
            async move {
                let rendered = tokio::task::spawn_blocking(move || {
                    CpuFilterEngine.apply(&full_source, choice, params)
                })
                .await
                .map_err(|err| err.to_string())?
                .map_err(|err| err.to_string())?;

                storage::save_image(Arc::new(rendered), folder, format)
                    .await
                    .map_err(|err| err.to_string())
            },
            |result| cosmic::Action::App(Message::ImageSaved(result)),
        )
    }

    pub(crate) fn handle_image_saved(
        &mut self,
        result: Result<std::path::PathBuf, String>,
    ) -> Task<cosmic::Action<Message>> {
        match &result {
            Ok(path) => info!(path = %path.display(), "Image saved"),
            Err(err) => error!(error = %err, "Failed to save image"),
        }
        self.export = ExportState::Finished(result);
        Task::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered() -> Arc<RgbaImage> {
        Arc::new(RgbaImage::from_pixel(2, 2, image::Rgba([1, 2, 3, 255])))
    }

    #[test]
    fn no_rendered_image_means_no_save() {
        let source = rendered();
        let candidate = export_candidate(None, Some(&source), &ExportState::Idle);
        assert!(candidate.is_none());
    }

    #[test]
    fn no_source_means_no_save() {
        let output = rendered();
        let candidate = export_candidate(Some(&output), None, &ExportState::Idle);
        assert!(candidate.is_none());
    }

    #[test]
    fn save_in_flight_blocks_another() {
        let output = rendered();
        let source = rendered();
        let candidate = export_candidate(Some(&output), Some(&source), &ExportState::Saving);
        assert!(candidate.is_none());
    }

    #[test]
    fn ready_state_hands_out_the_full_source() {
        let output = rendered();
        let source = rendered();
        let candidate = export_candidate(Some(&output), Some(&source), &ExportState::Idle);
        assert!(Arc::ptr_eq(&candidate.unwrap(), &source));
    }
}
