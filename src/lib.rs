// SPDX-License-Identifier: GPL-3.0-only

//! Tint - A photo filter application for the COSMIC desktop environment
//!
//! Pick a picture, choose a filter, drag the intensity slider, and save the
//! result to the Pictures directory.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`app`]: Main application logic and UI
//! - [`editor`]: Filter editor state (choice, intensity, rendered output)
//! - [`filters`]: Filter catalog, parameter mapping, and the CPU engine
//! - [`config`]: User configuration handling
//! - [`storage`]: Saving rendered images to disk

pub mod app;
pub mod config;
pub mod constants;
pub mod editor;
pub mod errors;
pub mod filters;
pub mod i18n;
pub mod storage;

// Re-export commonly used types
pub use app::{AppModel, Message};
pub use config::Config;
pub use editor::FilterEditor;
pub use filters::{CpuFilterEngine, FilterChoice, FilterEngine, FilterParams};
