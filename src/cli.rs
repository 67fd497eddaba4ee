// SPDX-License-Identifier: GPL-3.0-only

//! CLI commands for filter operations
//!
//! This module provides command-line functionality for:
//! - Applying a filter to an image file
//! - Listing the available filters

use std::path::PathBuf;
use tint::config::OutputFormat;
use tint::filters::{CpuFilterEngine, FilterChoice, FilterEngine, FilterParams};
use tint::storage;

/// List all available filters with their parameter mappings
pub fn list_filters() -> Result<(), Box<dyn std::error::Error>> {
    println!("Available filters:");
    println!();
    for choice in FilterChoice::ALL {
        let slots: Vec<&str> = choice.slots().iter().map(|slot| slot.label()).collect();
        println!("  {:<14} ({})", choice.cli_name(), slots.join(", "));
    }
    println!();
    println!("Intensity is a value in [0, 1]. Radius parameters scale it by 200,");
    println!("scale parameters by 10.");

    Ok(())
}

/// Apply a filter to an image and write the result
pub fn apply_filter(
    input: PathBuf,
    filter: &str,
    intensity: f32,
    output: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let choice = FilterChoice::from_name(filter)
        .ok_or_else(|| format!("unknown filter '{filter}' (try 'tint list')"))?;

    if !(0.0..=1.0).contains(&intensity) {
        return Err(format!("intensity {intensity} is outside [0, 1]").into());
    }

    let source = image::open(&input)?.to_rgba8();
    let params = FilterParams::for_choice(choice, intensity);
    let rendered = CpuFilterEngine.apply(&source, choice, params)?;

    let format = match &output {
        Some(path) if path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("png")) => {
            OutputFormat::Png
        }
        _ => OutputFormat::Jpeg,
    };

    let path = match output {
        Some(path) => {
            storage::save_image_to(&path, &rendered, format)?;
            path
        }
        None => {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()?;
            runtime.block_on(storage::save_image(
                std::sync::Arc::new(rendered),
                "tint".to_string(),
                format,
            ))?
        }
    };

    println!("Saved to {}", path.display());

    Ok(())
}
