//! Integration tests for Exohost CLI commands.

// Allow unwrap and panic in tests - these are standard for test code
#![allow(clippy::unwrap_used, clippy::panic)]

use clap::Parser;
use exohost::cli::{
    cmd_compute, cmd_sweep, render_compute, render_sweep, Cli, CliError, Commands,
};
use exohost_core::{InputError, MASS_SLIDER, METALLICITY_SLIDER};

// =============================================================================
// ARGUMENT PARSING TESTS
// =============================================================================

#[test]
fn test_parse_serve_defaults() {
    let cli = Cli::try_parse_from(["exohost", "serve"]).unwrap();
    match cli.command {
        Commands::Serve { host, port } => {
            assert_eq!(host, "127.0.0.1");
            assert_eq!(port, 7860);
        }
        other => panic!("unexpected command {other:?}"),
    }
    assert!(!cli.verbose);
}

#[test]
fn test_parse_compute_with_negative_metallicity() {
    let cli = Cli::try_parse_from([
        "exohost",
        "--verbose",
        "compute",
        "--mass",
        "0.8",
        "--metallicity",
        "-0.35",
        "--json",
    ])
    .unwrap();
    assert!(cli.verbose);
    match cli.command {
        Commands::Compute {
            mass,
            metallicity,
            json,
            detailed,
        } => {
            assert_eq!(mass, "0.8");
            assert_eq!(metallicity, "-0.35");
            assert!(json);
            assert!(!detailed);
        }
        other => panic!("unexpected command {other:?}"),
    }
}

#[test]
fn test_parse_compute_requires_both_inputs() {
    assert!(Cli::try_parse_from(["exohost", "compute", "--mass", "1.0"]).is_err());
}

// =============================================================================
// COMPUTE COMMAND TESTS
// =============================================================================

#[test]
fn test_compute_text() {
    assert_eq!(render_compute("1.0", "0.0", false, false).unwrap(), "2.21%");
    assert!(cmd_compute("1.0", "0.0", false, false).is_ok());
}

#[test]
fn test_compute_detailed_text() {
    let text = render_compute("0.1", "-1.0", false, true).unwrap();
    assert!(text.contains("effective mass    0.1"));
    assert!(text.contains("phi"));
    assert!(text.ends_with("probability       0.15%"));
    assert!(!text.contains("clamped"));
}

#[test]
fn test_compute_json() {
    let text = render_compute("1.0", "0.0", true, false).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["probability"], "2.21%");
    assert_eq!(value["singular"], false);
    assert!(value.get("evaluation").is_none());
}

#[test]
fn test_compute_json_detailed() {
    let text = render_compute("1.0", "0.0", true, true).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["evaluation"]["z_term"], 1.0);
    assert!(value["evaluation"]["phi"].as_f64().unwrap() > 0.0);
}

#[test]
fn test_compute_accepts_padded_input() {
    assert_eq!(render_compute(" 1.0 ", "0.0\n", false, false).unwrap(), "2.21%");
}

#[test]
fn test_compute_nan_input_renders_reference_spelling() {
    assert_eq!(render_compute("nan", "0.0", false, false).unwrap(), "nan%");
}

#[test]
fn test_compute_invalid_input() {
    let result = render_compute("sun", "0.0", false, false);
    assert!(matches!(
        result,
        Err(CliError::Input(InputError::NotNumeric { .. }))
    ));
    assert!(cmd_compute("1.0", "", false, false).is_err());
}

// =============================================================================
// SWEEP COMMAND TESTS
// =============================================================================

#[test]
fn test_sweep_text_has_one_row_per_mass() {
    let text = render_sweep(false).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), MASS_SLIDER.step_count() + 2);
    assert!(lines[0].starts_with("  M \\ [Fe/H]"));
    assert!(text.contains("2.21%"));
    assert!(cmd_sweep(false).is_ok());
}

#[test]
fn test_sweep_json_covers_grid() {
    let text = render_sweep(true).unwrap();
    let rows: Vec<serde_json::Value> = serde_json::from_str(&text).unwrap();
    let expected = (MASS_SLIDER.step_count() + 1) * (METALLICITY_SLIDER.step_count() + 1);
    assert_eq!(rows.len(), expected);
    assert!(rows
        .iter()
        .all(|r| r["probability"].as_str().unwrap().ends_with('%')));
}
