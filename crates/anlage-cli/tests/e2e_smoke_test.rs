use std::{fs, path::PathBuf};

use tempfile::tempdir;

use anlage::catalog::Catalog;
use anlage_cli::{Args, run};

/// Path to the demo diagram shipped at the workspace root
fn demo_diagram() -> PathBuf {
    // Demos are at workspace root, relative to workspace not the crate
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("demos")
        .join("pathway.svg")
}

fn args_for(input: &PathBuf, output: &PathBuf, disorder: &str) -> Args {
    Args {
        input: Some(input.to_string_lossy().to_string()),
        disorder: disorder.to_string(),
        output: output.to_string_lossy().to_string(),
        panel: false,
        list: false,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_all_catalog_keys() {
    // Create a temporary directory for test outputs
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = demo_diagram();

    assert!(input.is_file(), "Demo diagram missing: {}", input.display());

    let mut failed_keys = Vec::new();

    for disorder in Catalog::builtin().iter() {
        let output_path = temp_dir.path().join(format!("{}.svg", disorder.key()));
        let args = args_for(&input, &output_path, disorder.key());

        if let Err(e) = run(&args) {
            failed_keys.push((disorder.key(), e));
            continue;
        }

        let svg = fs::read_to_string(&output_path).expect("Output file should exist");
        assert!(
            svg.contains("id=\"effect-overlays\""),
            "{}: output is missing the overlay layer",
            disorder.key()
        );
        assert!(
            svg.contains("id=\"effect-styles\""),
            "{}: output is missing the injected stylesheet",
            disorder.key()
        );
    }

    if !failed_keys.is_empty() {
        eprintln!("\nCatalog keys that failed:");
        for (key, err) in &failed_keys {
            eprintln!("  - {key}: {err}");
        }
        panic!("{} catalog key(s) failed unexpectedly", failed_keys.len());
    }
}

#[test]
fn e2e_annotated_output_carries_effects() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = demo_diagram();
    let output_path = temp_dir.path().join("ais.svg");

    run(&args_for(&input, &output_path, "AIS")).expect("AIS run should succeed");

    let svg = fs::read_to_string(&output_path).expect("Output file should exist");
    assert!(svg.contains("class=\"blocked\""));
    assert!(svg.contains("highlight-overlay"));
    assert!(svg.contains("data-target=\"testes\""));
}

#[test]
fn e2e_unknown_key_falls_back_to_baseline() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = demo_diagram();
    let output_path = temp_dir.path().join("unknown.svg");

    run(&args_for(&input, &output_path, "NO_SUCH_KEY")).expect("Unknown keys are not errors");

    let svg = fs::read_to_string(&output_path).expect("Output file should exist");
    assert!(!svg.contains("class=\"blocked\""));
    assert!(!svg.contains("data-target"));
}

#[test]
fn e2e_missing_input_is_an_error() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = temp_dir.path().join("does-not-exist.svg");
    let output_path = temp_dir.path().join("out.svg");

    let result = run(&args_for(&input, &output_path, "NONE"));
    assert!(result.is_err(), "Missing input file should fail");
}

#[test]
fn e2e_non_svg_input_is_an_error() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = temp_dir.path().join("not-a-diagram.svg");
    fs::write(&input, "<html><body>nope</body></html>").expect("Failed to write test input");
    let output_path = temp_dir.path().join("out.svg");

    let result = run(&args_for(&input, &output_path, "NONE"));
    assert!(result.is_err(), "Non-SVG input should fail");
}

#[test]
fn e2e_list_needs_no_input() {
    let args = Args {
        input: None,
        disorder: "NONE".to_string(),
        output: "unused.svg".to_string(),
        panel: false,
        list: true,
        log_level: "off".to_string(),
    };

    run(&args).expect("--list should succeed without an input file");
}
