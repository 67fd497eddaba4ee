// SPDX-License-Identifier: GPL-3.0-only

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tint::app::AppModel;
use tint::constants::ui;
use tint::i18n;

mod cli;

#[derive(Parser)]
#[command(name = "tint")]
#[command(about = "Photo filter application for the COSMIC desktop")]
#[command(version)]
#[command(subcommand_required = false)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply a filter to an image file
    Apply {
        /// Input image path
        input: PathBuf,

        /// Filter name (crystallize, edges, gaussian-blur, pixellate,
        /// sepia-tone, unsharp-mask, vignette)
        #[arg(short, long, default_value = "sepia-tone")]
        filter: String,

        /// Filter intensity in [0, 1]
        #[arg(short, long, default_value = "0.5")]
        intensity: f32,

        /// Output file path (default: ~/Pictures/tint/IMG_TIMESTAMP.jpg)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the available filters
    List,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    // Set RUST_LOG environment variable to control log level
    // Examples: RUST_LOG=debug, RUST_LOG=tint=debug, RUST_LOG=info
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(true)
        .with_level(true)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Apply {
            input,
            filter,
            intensity,
            output,
        }) => cli::apply_filter(input, &filter, intensity, output),
        Some(Commands::List) => cli::list_filters(),
        None => run_gui(),
    }
}

fn run_gui() -> Result<(), Box<dyn std::error::Error>> {
    // Get the system's preferred languages.
    let requested_languages = i18n_embed::DesktopLanguageRequester::requested_languages();

    // Enable localizations to be applied.
    i18n::init(&requested_languages);

    // Settings for configuring the application window and iced runtime.
    let settings = cosmic::app::Settings::default().size_limits(
        cosmic::iced::Limits::NONE
            .min_width(ui::MIN_WINDOW_WIDTH)
            .min_height(ui::MIN_WINDOW_HEIGHT),
    );

    // Starts the application's event loop with `()` as the application's flags.
    cosmic::app::run::<AppModel>(settings, ())?;

    Ok(())
}
