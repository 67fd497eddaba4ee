// SPDX-License-Identifier: GPL-3.0-only

//! Main application view
//!
//! Composes the editor UI: tappable preview area, intensity slider row,
//! and the Change Filter / Save button row with an export status line.

use crate::app::state::{AppModel, ContextPage, ExportState, Message};
use crate::constants::ui;
use crate::fl;
use cosmic::Element;
use cosmic::iced::{Alignment, ContentFit, Length};
use cosmic::widget;

impl AppModel {
    /// Build the main application view
    pub fn view(&self) -> Element<'_, Message> {
        let spacing = cosmic::theme::spacing();

        let preview = self.build_preview();
        let slider_row = self.build_intensity_row();
        let button_row = self.build_button_row();
        let status = self.build_status_line();

        let mut content = widget::column()
            .push(preview)
            .push(widget::vertical_space().height(spacing.space_s))
            .push(slider_row)
            .push(widget::vertical_space().height(spacing.space_s))
            .push(button_row)
            .align_x(Alignment::Center)
            .width(Length::Fill)
            .height(Length::Fill);

        if let Some(status) = status {
            content = content
                .push(widget::vertical_space().height(spacing.space_xs))
                .push(status);
        }

        widget::container(content)
            .padding(spacing.space_m)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Preview area: the rendered image, or a tappable placeholder inviting
    /// the user to pick one. Tapping either opens the image picker.
    fn build_preview(&self) -> Element<'_, Message> {
        let inner: Element<'_, Message> = match &self.preview_handle {
            Some(handle) => widget::image(handle.clone())
                .content_fit(ContentFit::Contain)
                .width(Length::Fill)
                .height(Length::Fill)
                .into(),
            None => widget::container(widget::text::title3(fl!("tap-to-select")))
                .center(Length::Fill)
                .into(),
        };

        widget::mouse_area(
            widget::container(inner)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .on_press(Message::OpenImagePicker)
        .into()
    }

    /// Intensity control row: label, slider, and current value.
    fn build_intensity_row(&self) -> Element<'_, Message> {
        let spacing = cosmic::theme::spacing();
        let intensity = self.editor.intensity();

        let slider = widget::slider(0.0..=1.0, intensity, Message::SetIntensity)
            .step(0.01)
            .width(Length::Fill);

        widget::row()
            .push(widget::text(fl!("intensity")))
            .push(slider)
            .push(
                widget::text(format!("{intensity:.2}"))
                    .width(Length::Fixed(ui::INTENSITY_VALUE_WIDTH)),
            )
            .spacing(spacing.space_s)
            .align_y(Alignment::Center)
            .width(Length::Fill)
            .into()
    }

    /// Change Filter and Save buttons. Save is disabled until there is a
    /// rendered image and no save is already in flight.
    fn build_button_row(&self) -> Element<'_, Message> {
        let spacing = cosmic::theme::spacing();

        let change_filter = widget::button::standard(fl!("change-filter"))
            .on_press(Message::ToggleContextPage(ContextPage::Filters));

        let save_enabled = self.editor.rendered().is_some() && !self.export.is_saving();
        let save_label = if self.export.is_saving() {
            fl!("saving")
        } else {
            fl!("save")
        };
        let save = widget::button::suggested(save_label)
            .on_press_maybe(save_enabled.then_some(Message::SaveImage));

        widget::row()
            .push(change_filter)
            .push(widget::horizontal_space().width(Length::Fill))
            .push(save)
            .spacing(spacing.space_s)
            .width(Length::Fill)
            .into()
    }

    /// Outcome of the last save, if any.
    fn build_status_line(&self) -> Option<Element<'_, Message>> {
        match &self.export {
            ExportState::Idle | ExportState::Saving => None,
            ExportState::Finished(Ok(path)) => Some(
                widget::text::caption(fl!("saved-to", path = path.display().to_string())).into(),
            ),
            ExportState::Finished(Err(err)) => {
                Some(widget::text::caption(fl!("save-failed", error = err.clone())).into())
            }
        }
    }
}
