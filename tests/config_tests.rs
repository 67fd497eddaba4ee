// SPDX-License-Identifier: GPL-3.0-only

//! Integration tests for configuration module

use tint::Config;
use tint::config::OutputFormat;

#[test]
fn test_config_default() {
    // Test that default config can be created
    let config = Config::default();

    // Check sensible defaults
    assert_eq!(
        config.save_folder_name, "tint",
        "Exports should land in the tint folder by default"
    );
    assert_eq!(
        config.output_format,
        OutputFormat::Jpeg,
        "JPEG should be the default output format"
    );
}

#[test]
fn test_output_format_extensions() {
    // Test that every format maps to a usable file extension
    for format in OutputFormat::ALL {
        let ext = format.extension();
        assert!(!ext.is_empty(), "Format {:?} has empty extension", format);
        assert!(
            ext.chars().all(|c| c.is_ascii_lowercase()),
            "Extension should be lowercase"
        );
    }
}
