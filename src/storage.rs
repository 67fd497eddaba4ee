// SPDX-License-Identifier: GPL-3.0-only

//! Saving rendered images to disk

use crate::config::OutputFormat;
use crate::errors::ExportError;
use chrono::Local;
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, RgbaImage};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

/// JPEG quality used for exports.
const JPEG_QUALITY: u8 = 92;

/// Resolve the export directory: `<Pictures>/<folder>`.
///
/// Falls back to `$HOME/Pictures` when the XDG pictures directory is not
/// configured.
pub fn pictures_directory(folder: &str) -> PathBuf {
    dirs::picture_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join("Pictures")))
        .unwrap_or_else(|| PathBuf::from("."))
        .join(folder)
}

/// Create the export directory if it does not exist yet.
pub fn ensure_export_directory(folder: &str) -> Result<PathBuf, ExportError> {
    let dir = pictures_directory(folder);
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Timestamped filename, e.g. `IMG_20260828_143015.jpg`.
fn timestamped_filename(extension: &str) -> String {
    Local::now()
        .format(&format!("IMG_%Y%m%d_%H%M%S.{extension}"))
        .to_string()
}

fn encode_to(path: &Path, image: &RgbaImage, format: OutputFormat) -> Result<(), ExportError> {
    match format {
        OutputFormat::Jpeg => {
            // JPEG has no alpha channel
            let rgb = DynamicImage::ImageRgba8(image.clone()).to_rgb8();
            let file = File::create(path)?;
            let encoder = JpegEncoder::new_with_quality(BufWriter::new(file), JPEG_QUALITY);
            rgb.write_with_encoder(encoder)
                .map_err(|err| ExportError::EncodingFailed(err.to_string()))?;
        }
        OutputFormat::Png => {
            image
                .save(path)
                .map_err(|err| ExportError::EncodingFailed(err.to_string()))?;
        }
    }
    Ok(())
}

/// Encode and write `image` into the export directory.
///
/// Encoding runs on the blocking pool. Returns the path the file was
/// written to.
pub async fn save_image(
    image: Arc<RgbaImage>,
    folder: String,
    format: OutputFormat,
) -> Result<PathBuf, ExportError> {
    tokio::task::spawn_blocking(move || {
        let dir = ensure_export_directory(&folder)?;
        let path = dir.join(timestamped_filename(format.extension()));
        encode_to(&path, &image, format)?;
        info!(path = %path.display(), "Saved image");
        Ok(path)
    })
    .await
    .map_err(|err| ExportError::SaveFailed(err.to_string()))?
}

/// Synchronous save to an explicit path, used by the CLI.
pub fn save_image_to(path: &Path, image: &RgbaImage, format: OutputFormat) -> Result<(), ExportError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    encode_to(path, image, format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pictures_directory_ends_with_folder_name() {
        let dir = pictures_directory("tint");
        assert!(dir.ends_with("tint"));
    }

    #[test]
    fn filename_carries_extension() {
        let name = timestamped_filename("jpg");
        assert!(name.starts_with("IMG_"));
        assert!(name.ends_with(".jpg"));
    }

    #[test]
    fn save_image_to_writes_decodable_file() {
        let dir = std::env::temp_dir().join("tint-storage-test");
        let path = dir.join("out.png");
        let image = RgbaImage::from_pixel(4, 4, image::Rgba([10, 200, 30, 255]));

        save_image_to(&path, &image, OutputFormat::Png).unwrap();

        let read_back = image::open(&path).unwrap().to_rgba8();
        assert_eq!(read_back.dimensions(), (4, 4));
        assert_eq!(read_back.get_pixel(0, 0), image.get_pixel(0, 0));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn failed_save_reports_the_reason() {
        let dir = std::env::temp_dir().join("tint-storage-failure-test");
        std::fs::create_dir_all(&dir).unwrap();
        // A plain file where a directory is needed makes the save fail
        let blocker = dir.join("blocker");
        std::fs::write(&blocker, b"not a directory").unwrap();

        let image = RgbaImage::from_pixel(2, 2, image::Rgba([0, 0, 0, 255]));
        let err = save_image_to(&blocker.join("out.png"), &image, OutputFormat::Png).unwrap_err();

        assert!(matches!(err, ExportError::SaveFailed(_)));
        assert!(!err.to_string().is_empty());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
