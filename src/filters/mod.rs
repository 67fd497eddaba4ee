// SPDX-License-Identifier: GPL-3.0-only

//! Filter catalogue and parameter mapping
//!
//! Each filter accepts a fixed subset of three named parameter slots
//! (intensity, radius, scale). The slot table is static so the mapping can
//! be tested without touching any pixel code, and a single user-facing
//! intensity value in [0, 1] is expanded linearly into whichever slots the
//! selected filter accepts.

mod engine;

pub use engine::{CpuFilterEngine, FilterEngine};

use crate::constants::mapping::{RADIUS_MAX, SCALE_MAX};

/// The built-in image filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FilterChoice {
    /// Voronoi cell averaging (stained-glass look)
    Crystallize,
    /// Sobel edge detection
    Edges,
    /// Gaussian blur
    GaussianBlur,
    /// Block averaging (mosaic)
    Pixellate,
    /// Warm brownish tint
    #[default]
    SepiaTone,
    /// Blurred-mask sharpening
    UnsharpMask,
    /// Darkened corners
    Vignette,
}

/// A named parameter a filter may accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamSlot {
    Intensity,
    Radius,
    Scale,
}

impl ParamSlot {
    pub fn label(self) -> &'static str {
        match self {
            ParamSlot::Intensity => "intensity",
            ParamSlot::Radius => "radius",
            ParamSlot::Scale => "scale",
        }
    }
}

impl FilterChoice {
    /// All filters, in menu order.
    pub const ALL: [FilterChoice; 7] = [
        FilterChoice::Crystallize,
        FilterChoice::Edges,
        FilterChoice::GaussianBlur,
        FilterChoice::Pixellate,
        FilterChoice::SepiaTone,
        FilterChoice::UnsharpMask,
        FilterChoice::Vignette,
    ];

    /// The parameter slots this filter accepts.
    pub fn slots(self) -> &'static [ParamSlot] {
        match self {
            FilterChoice::Crystallize => &[ParamSlot::Radius],
            FilterChoice::Edges => &[ParamSlot::Intensity],
            FilterChoice::GaussianBlur => &[ParamSlot::Radius],
            FilterChoice::Pixellate => &[ParamSlot::Scale],
            FilterChoice::SepiaTone => &[ParamSlot::Intensity],
            FilterChoice::UnsharpMask => &[ParamSlot::Radius, ParamSlot::Intensity],
            FilterChoice::Vignette => &[ParamSlot::Intensity, ParamSlot::Radius],
        }
    }

    /// Display name for menus and the filter grid.
    pub fn display_name(self) -> &'static str {
        match self {
            FilterChoice::Crystallize => "Crystallize",
            FilterChoice::Edges => "Edges",
            FilterChoice::GaussianBlur => "Gaussian Blur",
            FilterChoice::Pixellate => "Pixellate",
            FilterChoice::SepiaTone => "Sepia Tone",
            FilterChoice::UnsharpMask => "Unsharp Mask",
            FilterChoice::Vignette => "Vignette",
        }
    }

    /// Hyphenated lowercase name, used on the command line.
    pub fn cli_name(self) -> &'static str {
        match self {
            FilterChoice::Crystallize => "crystallize",
            FilterChoice::Edges => "edges",
            FilterChoice::GaussianBlur => "gaussian-blur",
            FilterChoice::Pixellate => "pixellate",
            FilterChoice::SepiaTone => "sepia-tone",
            FilterChoice::UnsharpMask => "unsharp-mask",
            FilterChoice::Vignette => "vignette",
        }
    }

    /// Parse a filter by name (used by the CLI).
    ///
    /// Accepts the display name with spaces, hyphens, or nothing between
    /// words, case-insensitively ("gaussian-blur", "Gaussian Blur", ...).
    pub fn from_name(name: &str) -> Option<FilterChoice> {
        let normalized: String = name
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
            .collect::<String>()
            .to_ascii_lowercase();

        FilterChoice::ALL.into_iter().find(|choice| {
            choice
                .display_name()
                .chars()
                .filter(|c| !c.is_whitespace())
                .collect::<String>()
                .to_ascii_lowercase()
                == normalized
        })
    }
}

/// Concrete parameter values for one filter application.
///
/// Only the slots the filter accepts are populated; the rest stay `None`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FilterParams {
    pub intensity: Option<f32>,
    pub radius: Option<f32>,
    pub scale: Option<f32>,
}

impl FilterParams {
    /// Expand a user intensity in [0, 1] into the slots `choice` accepts.
    ///
    /// Intensity maps 1:1, radius scales to [0, 200] pixels, scale to
    /// [0, 10] — the same linear mapping for every filter.
    pub fn for_choice(choice: FilterChoice, intensity: f32) -> Self {
        let intensity = intensity.clamp(0.0, 1.0);
        let mut params = FilterParams::default();

        for slot in choice.slots() {
            match slot {
                ParamSlot::Intensity => params.intensity = Some(intensity),
                ParamSlot::Radius => params.radius = Some(intensity * RADIUS_MAX),
                ParamSlot::Scale => params.scale = Some(intensity * SCALE_MAX),
            }
        }

        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_filter_accepts_at_least_one_slot() {
        for choice in FilterChoice::ALL {
            assert!(
                !choice.slots().is_empty(),
                "{:?} accepts no parameters",
                choice
            );
        }
    }

    #[test]
    fn default_filter_is_sepia_tone() {
        assert_eq!(FilterChoice::default(), FilterChoice::SepiaTone);
    }

    #[test]
    fn params_populate_only_accepted_slots() {
        let params = FilterParams::for_choice(FilterChoice::SepiaTone, 0.5);
        assert_eq!(params.intensity, Some(0.5));
        assert_eq!(params.radius, None);
        assert_eq!(params.scale, None);

        let params = FilterParams::for_choice(FilterChoice::GaussianBlur, 0.5);
        assert_eq!(params.intensity, None);
        assert_eq!(params.radius, Some(100.0));
        assert_eq!(params.scale, None);

        let params = FilterParams::for_choice(FilterChoice::Pixellate, 1.0);
        assert_eq!(params.scale, Some(10.0));

        let params = FilterParams::for_choice(FilterChoice::UnsharpMask, 0.25);
        assert_eq!(params.intensity, Some(0.25));
        assert_eq!(params.radius, Some(50.0));
    }

    #[test]
    fn params_clamp_out_of_range_intensity() {
        let params = FilterParams::for_choice(FilterChoice::GaussianBlur, 2.0);
        assert_eq!(params.radius, Some(RADIUS_MAX));

        let params = FilterParams::for_choice(FilterChoice::GaussianBlur, -1.0);
        assert_eq!(params.radius, Some(0.0));
    }

    #[test]
    fn filter_names_parse_back() {
        for choice in FilterChoice::ALL {
            assert_eq!(FilterChoice::from_name(choice.display_name()), Some(choice));
        }
        assert_eq!(
            FilterChoice::from_name("gaussian-blur"),
            Some(FilterChoice::GaussianBlur)
        );
        assert_eq!(FilterChoice::from_name("nope"), None);
    }
}
