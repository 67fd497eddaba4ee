// SPDX-License-Identifier: GPL-3.0-only

//! Main application module for Tint
//!
//! This module contains the application state, message handling, UI rendering,
//! and business logic for the photo filter application.
//!
//! # Architecture
//!
//! - `state`: Application state types (AppModel, Message, ContextPage, etc.)
//! - `filter_picker`: Filter grid drawer UI
//! - `settings`: Settings drawer UI
//! - `view`: Main view rendering
//! - `update`: Message handling
//!
//! # Main Types
//!
//! - `AppModel`: Main application state with the filter editor
//! - `Message`: All possible user interactions and system events

mod filter_picker;
mod handlers;
mod settings;
mod state;
mod update;
mod view;

// Re-export public API
use crate::config::Config;
use crate::editor::FilterEditor;
use crate::fl;
use crate::filters::CpuFilterEngine;
use cosmic::app::context_drawer;
use cosmic::cosmic_config::{self, CosmicConfigEntry};
use cosmic::iced::Subscription;
use cosmic::widget::{self, about::About};
use cosmic::{Element, Task};
pub use state::{AppModel, ContextPage, ExportState, LoadedImage, Message};
use tracing::error;

const REPOSITORY: &str = "https://github.com/cosmic-utils/tint";
const APP_ICON: &[u8] =
    include_bytes!("../../resources/icons/hicolor/scalable/apps/io.github.cosmic-utils.tint.svg");

impl cosmic::Application for AppModel {
    /// The async executor that will be used to run your application's commands.
    type Executor = cosmic::executor::Default;

    /// Data that your application receives to its init method.
    type Flags = ();

    /// Messages which the application and its widgets will emit.
    type Message = Message;

    /// Unique identifier in RDNN (reverse domain name notation) format.
    const APP_ID: &'static str = "io.github.cosmic-utils.tint";

    fn core(&self) -> &cosmic::Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut cosmic::Core {
        &mut self.core
    }

    /// Initializes the application with any given flags and startup commands.
    fn init(
        core: cosmic::Core,
        _flags: Self::Flags,
    ) -> (Self, Task<cosmic::Action<Self::Message>>) {
        // Create the about widget
        let about = About::default()
            .name(fl!("app-title"))
            .icon(widget::icon::from_svg_bytes(APP_ICON))
            .version(env!("GIT_VERSION"))
            .links([(fl!("repository"), REPOSITORY)])
            .license(env!("CARGO_PKG_LICENSE"));

        // Load configuration
        let (config_handler, config) =
            match cosmic_config::Config::new(Self::APP_ID, Config::VERSION) {
                Ok(handler) => {
                    let config = match Config::get_entry(&handler) {
                        Ok(config) => config,
                        Err((errors, config)) => {
                            error!(?errors, "Errors loading config");
                            config
                        }
                    };
                    (Some(handler), config)
                }
                Err(err) => {
                    error!(%err, "Failed to create config handler");
                    (None, Config::default())
                }
            };

        // Ensure the save directory exists
        if let Err(err) = crate::storage::ensure_export_directory(&config.save_folder_name) {
            error!(error = %err, "Failed to create save directory");
        }

        let app = AppModel {
            core,
            context_page: ContextPage::default(),
            about,
            config,
            config_handler,
            editor: FilterEditor::new(CpuFilterEngine),
            full_source: None,
            preview_handle: None,
            filter_thumbnails: Vec::new(),
            picker_open: false,
            export: ExportState::default(),
            theme_dropdown_options: vec![
                fl!("theme-system"),
                fl!("theme-dark"),
                fl!("theme-light"),
            ],
            format_dropdown_options: crate::config::OutputFormat::ALL
                .iter()
                .map(|format| format.display_name().to_string())
                .collect(),
        };

        (app, Task::none())
    }

    /// Elements to pack at the end of the header bar.
    fn header_end(&self) -> Vec<Element<'_, Self::Message>> {
        vec![
            widget::button::icon(widget::icon::from_name("preferences-system-symbolic"))
                .on_press(Message::ToggleContextPage(ContextPage::Settings))
                .into(),
        ]
    }

    /// Display a context drawer if the context page is requested.
    fn context_drawer(&self) -> Option<context_drawer::ContextDrawer<'_, Self::Message>> {
        if !self.core.window.show_context {
            return None;
        }

        Some(match self.context_page {
            ContextPage::About => context_drawer::about(
                &self.about,
                |url| Message::LaunchUrl(url.to_string()),
                Message::ToggleContextPage(ContextPage::About),
            ),
            ContextPage::Settings => self.settings_view(),
            ContextPage::Filters => self.filters_view(),
        })
    }

    /// Describes the interface based on the current state of the application model.
    fn view(&self) -> Element<'_, Self::Message> {
        self.view()
    }

    /// Register subscriptions for this application.
    fn subscription(&self) -> Subscription<Self::Message> {
        self.core()
            .watch_config::<Config>(Self::APP_ID)
            .map(|update| Message::UpdateConfig(update.config))
    }

    /// Handles messages emitted by the application and its widgets.
    fn update(&mut self, message: Self::Message) -> Task<cosmic::Action<Self::Message>> {
        self.update(message)
    }
}
