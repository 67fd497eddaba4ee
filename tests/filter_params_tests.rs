// SPDX-License-Identifier: GPL-3.0-only

//! Integration tests for the filter parameter mapping

use tint::filters::{FilterChoice, FilterParams, ParamSlot};

#[test]
fn test_every_filter_has_a_display_name() {
    for choice in FilterChoice::ALL {
        assert!(
            !choice.display_name().is_empty(),
            "Filter {:?} has empty display name",
            choice
        );
    }
}

#[test]
fn test_slot_tables_match_filter_semantics() {
    // Single-slot filters
    assert_eq!(FilterChoice::Crystallize.slots(), &[ParamSlot::Radius]);
    assert_eq!(FilterChoice::Edges.slots(), &[ParamSlot::Intensity]);
    assert_eq!(FilterChoice::GaussianBlur.slots(), &[ParamSlot::Radius]);
    assert_eq!(FilterChoice::Pixellate.slots(), &[ParamSlot::Scale]);
    assert_eq!(FilterChoice::SepiaTone.slots(), &[ParamSlot::Intensity]);

    // Two-slot filters
    assert_eq!(
        FilterChoice::UnsharpMask.slots(),
        &[ParamSlot::Radius, ParamSlot::Intensity]
    );
    assert_eq!(
        FilterChoice::Vignette.slots(),
        &[ParamSlot::Intensity, ParamSlot::Radius]
    );
}

#[test]
fn test_linear_mapping_boundaries() {
    // At the bottom of the slider every slot maps to zero
    let params = FilterParams::for_choice(FilterChoice::Vignette, 0.0);
    assert_eq!(params.intensity, Some(0.0));
    assert_eq!(params.radius, Some(0.0));

    // At the top of the slider: intensity 1.0, radius 200, scale 10
    let params = FilterParams::for_choice(FilterChoice::Vignette, 1.0);
    assert_eq!(params.intensity, Some(1.0));
    assert_eq!(params.radius, Some(200.0));

    let params = FilterParams::for_choice(FilterChoice::Pixellate, 1.0);
    assert_eq!(params.scale, Some(10.0));
}

#[test]
fn test_mapping_is_linear_in_between() {
    let params = FilterParams::for_choice(FilterChoice::GaussianBlur, 0.25);
    assert_eq!(params.radius, Some(50.0));

    let params = FilterParams::for_choice(FilterChoice::Pixellate, 0.3);
    assert_eq!(params.scale, Some(3.0));
}

#[test]
fn test_unaccepted_slots_stay_unset() {
    for choice in FilterChoice::ALL {
        let params = FilterParams::for_choice(choice, 0.5);
        let slots = choice.slots();

        assert_eq!(
            params.intensity.is_some(),
            slots.contains(&ParamSlot::Intensity)
        );
        assert_eq!(params.radius.is_some(), slots.contains(&ParamSlot::Radius));
        assert_eq!(params.scale.is_some(), slots.contains(&ParamSlot::Scale));
    }
}

#[test]
fn test_cli_names_round_trip() {
    for choice in FilterChoice::ALL {
        assert_eq!(
            FilterChoice::from_name(choice.cli_name()),
            Some(choice),
            "CLI name for {:?} does not parse back",
            choice
        );
    }
}
