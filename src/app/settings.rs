// SPDX-License-Identifier: GPL-3.0-only

//! Settings drawer view

use crate::app::state::{AppModel, ContextPage, Message};
use crate::config::{AppTheme, OutputFormat};
use crate::fl;
use cosmic::Element;
use cosmic::app::context_drawer;
use cosmic::iced::Length;
use cosmic::widget;

impl AppModel {
    /// Create the settings view for the context drawer
    ///
    /// Shows appearance and export settings.
    pub fn settings_view(&self) -> context_drawer::ContextDrawer<'_, Message> {
        let spacing = cosmic::theme::spacing();

        let current_theme_index = match self.config.app_theme {
            AppTheme::System => 0,
            AppTheme::Dark => 1,
            AppTheme::Light => 2,
        };
        let theme_dropdown = widget::dropdown(
            &self.theme_dropdown_options,
            Some(current_theme_index),
            Message::SetAppTheme,
        );

        let current_format_index = OutputFormat::ALL
            .iter()
            .position(|format| *format == self.config.output_format)
            .unwrap_or(0);
        let format_dropdown = widget::dropdown(
            &self.format_dropdown_options,
            Some(current_format_index),
            Message::SelectOutputFormat,
        );

        let save_folder = crate::storage::pictures_directory(&self.config.save_folder_name);
        let open_folder_button = widget::button::standard(fl!("open-save-folder"))
            .on_press(Message::OpenSaveFolder);

        let settings_column: Element<'_, Message> = widget::column()
            .push(
                widget::text(fl!("appearance"))
                    .size(16)
                    .font(cosmic::font::bold()),
            )
            .push(widget::vertical_space().height(spacing.space_xxs))
            .push(theme_dropdown)
            .push(widget::vertical_space().height(spacing.space_s))
            .push(
                widget::text(fl!("export"))
                    .size(16)
                    .font(cosmic::font::bold()),
            )
            .push(widget::vertical_space().height(spacing.space_xxs))
            .push(widget::text(fl!("output-format")).size(13))
            .push(format_dropdown)
            .push(widget::vertical_space().height(spacing.space_s))
            .push(widget::text(fl!("save-folder")).size(13))
            .push(widget::text::caption(save_folder.display().to_string()))
            .push(widget::vertical_space().height(spacing.space_xxs))
            .push(open_folder_button)
            .width(Length::Fill)
            .into();

        context_drawer::context_drawer(
            settings_column,
            Message::ToggleContextPage(ContextPage::Settings),
        )
        .title(fl!("settings"))
    }
}
