// SPDX-License-Identifier: GPL-3.0-only

//! Message update handling
//!
//! This module handles all application messages by routing them to focused handler methods.
//! The main `update()` function acts as a dispatcher, while specific handlers are implemented
//! in the `handlers` submodules organized by functional domain.
//!
//! # Handler Modules
//!
//! - `handlers::ui`: UI navigation, context pages, external URLs
//! - `handlers::editor`: Image picking, filter selection, intensity changes
//! - `handlers::export`: Saving the rendered image
//! - `handlers::settings`: Configuration, theme, output format

use crate::app::state::{AppModel, Message};
use cosmic::Task;

impl AppModel {
    /// Main message handler - routes messages to appropriate handler methods.
    ///
    /// This dispatcher pattern keeps the main update function clean and makes
    /// it easy to find the handling code for any message type.
    pub fn update(&mut self, message: Message) -> Task<cosmic::Action<Message>> {
        match message {
            // ===== UI Navigation =====
            Message::LaunchUrl(url) => self.handle_launch_url(url),
            Message::ToggleContextPage(page) => self.handle_toggle_context_page(page),

            // ===== Editor =====
            Message::OpenImagePicker => self.handle_open_image_picker(),
            Message::ImageLoaded(result) => self.handle_image_loaded(result),
            Message::SelectFilter(choice) => self.handle_select_filter(choice),
            Message::SetIntensity(value) => self.handle_set_intensity(value),

            // ===== Export =====
            Message::SaveImage => self.handle_save_image(),
            Message::ImageSaved(result) => self.handle_image_saved(result),

            // ===== Settings =====
            Message::UpdateConfig(config) => self.handle_update_config(config),
            Message::SetAppTheme(index) => self.handle_set_app_theme(index),
            Message::SelectOutputFormat(index) => self.handle_select_output_format(index),
            Message::OpenSaveFolder => self.handle_open_save_folder(),
        }
    }
}
