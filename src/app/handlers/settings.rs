// SPDX-License-Identifier: GPL-3.0-only

//! Settings handlers
//!
//! Handles configuration changes, theme selection, and output format.

use crate::app::state::{AppModel, Message};
use crate::config::{AppTheme, OutputFormat};
use crate::storage;
use cosmic::Task;
use cosmic::cosmic_config::CosmicConfigEntry;
use tracing::{error, info};

impl AppModel {
    pub(crate) fn handle_update_config(
        &mut self,
        config: crate::config::Config,
    ) -> Task<cosmic::Action<Message>> {
        info!("UpdateConfig received");
        self.config = config;
        Task::none()
    }

    pub(crate) fn handle_set_app_theme(&mut self, index: usize) -> Task<cosmic::Action<Message>> {
        let app_theme = match index {
            0 => AppTheme::System,
            1 => AppTheme::Dark,
            2 => AppTheme::Light,
            _ => return Task::none(),
        };

        info!(?app_theme, "Setting application theme");
        self.config.app_theme = app_theme;

        if let Some(handler) = self.config_handler.as_ref()
            && let Err(err) = self.config.write_entry(handler)
        {
            error!(?err, "Failed to save app theme setting");
        }

        cosmic::command::set_theme(app_theme.theme())
    }

    pub(crate) fn handle_select_output_format(
        &mut self,
        index: usize,
    ) -> Task<cosmic::Action<Message>> {
        if index < OutputFormat::ALL.len() {
            let format = OutputFormat::ALL[index];
            info!(?format, "Selected output format");
            self.config.output_format = format;

            if let Some(handler) = self.config_handler.as_ref()
                && let Err(err) = self.config.write_entry(handler)
            {
                error!(?err, "Failed to save output format selection");
            }
        }
        Task::none()
    }

    pub(crate) fn handle_open_save_folder(&self) -> Task<cosmic::Action<Message>> {
        let dir = storage::pictures_directory(&self.config.save_folder_name);

        if let Err(err) = storage::ensure_export_directory(&self.config.save_folder_name) {
            error!(error = %err, "Failed to create save folder");
            return Task::none();
        }

        if let Err(err) = open::that_detached(&dir) {
            error!(path = %dir.display(), error = %err, "Failed to open save folder");
        }
        Task::none()
    }
}
