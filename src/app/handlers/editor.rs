// SPDX-License-Identifier: GPL-3.0-only

//! Editor handlers
//!
//! Handles image picking, filter selection, and intensity changes. Every
//! editor change re-renders the preview so the displayed image always
//! matches the current filter and intensity.

use crate::app::state::{AppModel, LoadedImage, Message};
use crate::constants::preview;
use crate::filters::{FilterChoice, FilterEngine, FilterParams};
use cosmic::Task;
use cosmic::widget;
use image::RgbaImage;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Scale `image` down so neither dimension exceeds `max_dimension`,
/// preserving aspect ratio. Returns the input untouched when it already
/// fits.
fn fit_within(image: &RgbaImage, max_dimension: u32) -> RgbaImage {
    let (width, height) = image.dimensions();
    if width <= max_dimension && height <= max_dimension {
        return image.clone();
    }

    let scale = max_dimension as f32 / width.max(height) as f32;
    let new_width = ((width as f32 * scale).round() as u32).max(1);
    let new_height = ((height as f32 * scale).round() as u32).max(1);
    image::imageops::thumbnail(image, new_width, new_height)
}

/// Decode an image file off the UI thread and prepare editor copies.
async fn load_image(path: std::path::PathBuf) -> Result<LoadedImage, String> {
    tokio::task::spawn_blocking(move || {
        let full = image::open(&path)
            .map_err(|err| format!("{err}"))?
            .to_rgba8();
        let preview = fit_within(&full, preview::MAX_DIMENSION);
        info!(
            path = %path.display(),
            width = full.width(),
            height = full.height(),
            "Loaded image"
        );
        Ok(LoadedImage {
            full: Arc::new(full),
            preview: Arc::new(preview),
        })
    })
    .await
    .map_err(|err| format!("{err}"))?
}

impl AppModel {
    pub(crate) fn handle_open_image_picker(&mut self) -> Task<cosmic::Action<Message>> {
        if self.picker_open {
            return Task::none();
        }
        self.picker_open = true;

        Task::perform(
            async {
                let file = rfd::AsyncFileDialog::new()
                    .add_filter("Images", &["png", "jpg", "jpeg", "webp", "bmp", "tiff"])
                    .set_title("Select a picture")
                    .pick_file()
                    .await;

                match file {
                    Some(file) => load_image(file.path().to_path_buf()).await.map(Some),
                    None => Ok(None),
                }
            },
            |result| cosmic::Action::App(Message::ImageLoaded(result)),
        )
    }

    pub(crate) fn handle_image_loaded(
        &mut self,
        result: Result<Option<LoadedImage>, String>,
    ) -> Task<cosmic::Action<Message>> {
        self.picker_open = false;

        match result {
            Ok(Some(loaded)) => {
                self.full_source = Some(Arc::clone(&loaded.full));
                self.rebuild_filter_thumbnails(&loaded.preview);
                self.editor.select_image(loaded.preview);
                self.refresh_preview_handle();
            }
            Ok(None) => {
                // Dialog cancelled, keep the current image
            }
            Err(err) => {
                error!(error = %err, "Failed to load image");
            }
        }
        Task::none()
    }

    pub(crate) fn handle_select_filter(
        &mut self,
        choice: FilterChoice,
    ) -> Task<cosmic::Action<Message>> {
        self.editor.select_filter(choice);
        self.refresh_preview_handle();
        Task::none()
    }

    pub(crate) fn handle_set_intensity(&mut self, value: f32) -> Task<cosmic::Action<Message>> {
        self.editor.set_intensity(value);
        self.refresh_preview_handle();
        Task::none()
    }

    /// Rebuild the widget handle from the editor's latest render.
    pub(crate) fn refresh_preview_handle(&mut self) {
        self.preview_handle = self.editor.rendered().map(|rendered| {
            widget::image::Handle::from_rgba(
                rendered.width(),
                rendered.height(),
                rendered.as_raw().clone(),
            )
        });
    }

    /// Render a tiny copy of the source through every filter for the
    /// picker grid. Thumbnails are built once per image load at the
    /// intensity in effect at that moment; slider drags do not rebuild
    /// them.
    pub(crate) fn rebuild_filter_thumbnails(&mut self, source: &RgbaImage) {
        let tiny = fit_within(source, preview::THUMBNAIL_DIMENSION);
        let engine = crate::filters::CpuFilterEngine;
        let intensity = self.editor.intensity();

        self.filter_thumbnails = FilterChoice::ALL
            .into_iter()
            .filter_map(|choice| {
                let params = FilterParams::for_choice(choice, intensity);
                match engine.apply(&tiny, choice, params) {
                    Ok(rendered) => Some((
                        choice,
                        widget::image::Handle::from_rgba(
                            rendered.width(),
                            rendered.height(),
                            rendered.into_raw(),
                        ),
                    )),
                    Err(err) => {
                        warn!(choice = ?choice, error = %err, "Thumbnail render failed");
                        None
                    }
                }
            })
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_within_preserves_small_images() {
        let img = RgbaImage::new(100, 50);
        let fitted = fit_within(&img, 1280);
        assert_eq!(fitted.dimensions(), (100, 50));
    }

    #[test]
    fn fit_within_scales_down_longest_edge() {
        let img = RgbaImage::new(4000, 2000);
        let fitted = fit_within(&img, 1280);
        assert_eq!(fitted.dimensions(), (1280, 640));
    }

    #[test]
    fn fit_within_never_collapses_to_zero() {
        let img = RgbaImage::new(5000, 1);
        let fitted = fit_within(&img, 1280);
        assert!(fitted.height() >= 1);
    }
}
