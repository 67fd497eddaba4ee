// SPDX-License-Identifier: GPL-3.0-only

//! Error types for the filter application

use std::fmt;

/// Filter engine errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    /// Source bitmap has zero width or height
    EmptyImage,
}

/// Image export errors
#[derive(Debug, Clone)]
pub enum ExportError {
    /// Encoding to the output format failed
    EncodingFailed(String),
    /// Writing the file failed
    SaveFailed(String),
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterError::EmptyImage => write!(f, "Source image is empty"),
        }
    }
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::EncodingFailed(msg) => write!(f, "Encoding failed: {}", msg),
            ExportError::SaveFailed(msg) => write!(f, "Save failed: {}", msg),
        }
    }
}

impl std::error::Error for FilterError {}
impl std::error::Error for ExportError {}

impl From<std::io::Error> for ExportError {
    fn from(err: std::io::Error) -> Self {
        ExportError::SaveFailed(err.to_string())
    }
}
