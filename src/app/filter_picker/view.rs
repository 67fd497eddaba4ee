// SPDX-License-Identifier: GPL-3.0-only

//! Filter picker UI view
//!
//! Grid-style filter selector using COSMIC context drawer with per-filter
//! preview thumbnails rendered from the current image.

use crate::app::state::{AppModel, ContextPage, Message};
use crate::filters::FilterChoice;
use crate::fl;
use cosmic::Element;
use cosmic::app::context_drawer;
use cosmic::iced::{Alignment, Background, Border, Color, ContentFit, Length};
use cosmic::widget;

/// Spacing between filter thumbnails in grid
const FILTER_GRID_SPACING: f32 = 6.0;
/// Border width for selected filter
const FILTER_BORDER_WIDTH: f32 = 2.0;
/// Number of columns in the filter grid
const FILTER_GRID_COLUMNS: usize = 3;
/// Context drawer content width
const DRAWER_CONTENT_WIDTH: f32 = 420.0;
/// Calculated thumbnail size: (drawer_width - (columns-1) * spacing) / columns
const FILTER_THUMBNAIL_SIZE: f32 = (DRAWER_CONTENT_WIDTH
    - (FILTER_GRID_COLUMNS as f32 - 1.0) * FILTER_GRID_SPACING)
    / FILTER_GRID_COLUMNS as f32;

impl AppModel {
    /// Build the filter picker as a COSMIC context drawer
    ///
    /// Shows a grid of the available filters with preview thumbnails and
    /// filter names below each thumbnail. Without a picked image the
    /// thumbnails fall back to placeholder colors.
    pub fn filters_view(&self) -> context_drawer::ContextDrawer<'_, Message> {
        let spacing = FILTER_GRID_SPACING as u16;
        let mut grid_column = widget::column().spacing(spacing);
        let mut current_row = widget::row().spacing(spacing);
        let mut items_in_row = 0;

        let inner_size = FILTER_THUMBNAIL_SIZE - FILTER_BORDER_WIDTH * 2.0;

        for choice in FilterChoice::ALL {
            let is_selected = self.editor.choice() == choice;

            let thumbnail: Element<'_, Message> = match self
                .filter_thumbnails
                .iter()
                .find(|(thumb_choice, _)| *thumb_choice == choice)
            {
                Some((_, handle)) => widget::container(
                    widget::image(handle.clone())
                        .content_fit(ContentFit::Cover)
                        .width(Length::Fixed(inner_size))
                        .height(Length::Fixed(inner_size)),
                )
                .width(Length::Fixed(inner_size))
                .height(Length::Fixed(inner_size))
                .into(),
                None => {
                    // Fallback: colored placeholder when no image is loaded
                    let color = Self::filter_placeholder_color(choice);
                    widget::container(widget::Space::new(
                        Length::Fixed(inner_size),
                        Length::Fixed(inner_size),
                    ))
                    .style(move |_theme| widget::container::Style {
                        background: Some(Background::Color(color)),
                        border: Border {
                            radius: [8.0; 4].into(),
                            ..Default::default()
                        },
                        ..Default::default()
                    })
                    .into()
                }
            };

            // Wrap thumbnail in container with selection border
            let bordered_thumbnail = widget::container(thumbnail)
                .width(Length::Fixed(FILTER_THUMBNAIL_SIZE))
                .height(Length::Fixed(FILTER_THUMBNAIL_SIZE))
                .center(FILTER_THUMBNAIL_SIZE)
                .style(move |_theme| widget::container::Style {
                    background: Some(Background::Color(Color::TRANSPARENT)),
                    border: Border {
                        radius: [10.0; 4].into(),
                        width: if is_selected {
                            FILTER_BORDER_WIDTH
                        } else {
                            0.0
                        },
                        color: if is_selected {
                            Color::from_rgb(0.3, 0.6, 1.0) // Accent blue for selection
                        } else {
                            Color::TRANSPARENT
                        },
                    },
                    ..Default::default()
                });

            // Wrap only thumbnail in button for interaction (hover applies only to preview)
            let thumbnail_button = widget::button::custom(bordered_thumbnail)
                .on_press(Message::SelectFilter(choice))
                .padding(0)
                .class(cosmic::theme::Button::Image);

            // Filter name label below thumbnail (outside button, no hover effect)
            let name_label = widget::text(choice.display_name())
                .width(Length::Fixed(FILTER_THUMBNAIL_SIZE))
                .align_x(cosmic::iced::alignment::Horizontal::Center);

            let filter_button = widget::column()
                .push(thumbnail_button)
                .push(widget::vertical_space().height(Length::Fixed(4.0)))
                .push(name_label)
                .align_x(Alignment::Center);

            current_row = current_row.push(filter_button);
            items_in_row += 1;

            // Start new row after FILTER_GRID_COLUMNS items
            if items_in_row >= FILTER_GRID_COLUMNS {
                grid_column = grid_column.push(current_row);
                current_row = widget::row().spacing(spacing);
                items_in_row = 0;
            }
        }

        // Push remaining items in last row
        if items_in_row > 0 {
            grid_column = grid_column.push(current_row);
        }

        let content: Element<'_, Message> = grid_column.into();

        context_drawer::context_drawer(content, Message::ToggleContextPage(ContextPage::Filters))
            .title(fl!("filters-title"))
    }

    /// Get placeholder color for a filter (shown before an image is picked)
    fn filter_placeholder_color(choice: FilterChoice) -> Color {
        match choice {
            FilterChoice::Crystallize => Color::from_rgb(0.4, 0.5, 0.6),
            FilterChoice::Edges => Color::from_rgb(0.2, 0.2, 0.2),
            FilterChoice::GaussianBlur => Color::from_rgb(0.45, 0.45, 0.5),
            FilterChoice::Pixellate => Color::from_rgb(0.35, 0.45, 0.35),
            FilterChoice::SepiaTone => Color::from_rgb(0.5, 0.4, 0.3),
            FilterChoice::UnsharpMask => Color::from_rgb(0.5, 0.5, 0.45),
            FilterChoice::Vignette => Color::from_rgb(0.3, 0.3, 0.35),
        }
    }
}
