//! End-to-end tests for scheme generation.

mod common;

use common::fixtures::{self, colors};
use dynacolor::models::{AppConfig, OutputFormat, SchemeDocument};
use dynacolor::services::{collect_sources, render};
use material_color::{HexStyle, SchemeGenerator, SpecVersion, Variant};
use pretty_assertions::assert_eq;
use std::process::Command;

const DIM_ROLES: [&str; 4] = ["error_dim", "primary_dim", "secondary_dim", "tertiary_dim"];

fn generate(config: &AppConfig, hex: &[&str]) -> SchemeDocument {
    let hex: Vec<String> = hex.iter().map(|s| s.to_string()).collect();
    let source = collect_sources(&hex, None, None).unwrap();
    let generated = SchemeGenerator::with_options(config.generate_options().unwrap())
        .generate(&source)
        .unwrap();
    SchemeDocument::new(&generated, HexStyle::Argb)
}

#[test]
fn test_single_hex_2021_reference_colors() {
    let config = AppConfig {
        variant: Variant::TonalSpot,
        version: SpecVersion::V2021,
        ..AppConfig::default()
    };
    let doc = generate(&config, &[colors::PURE_BLUE]);

    assert_eq!(doc.seed, "#FF0000FF");
    assert_eq!(doc.roles["primary"].as_deref(), Some("#FF555992"));
    assert_eq!(doc.roles["primary_container"].as_deref(), Some("#FFE0E0FF"));
    assert_eq!(doc.roles["on_primary_container"].as_deref(), Some("#FF3E4278"));
    assert_eq!(doc.roles["surface"].as_deref(), Some("#FFFBF8FF"));
    common::assert_roles(&doc, &DIM_ROLES);
}

#[test]
fn test_2025_defines_every_role() {
    let doc = generate(&AppConfig::default(), &[colors::BASELINE]);

    assert_eq!(doc.params.version, SpecVersion::V2025);
    assert_eq!(doc.params.variant, Variant::Expressive);
    common::assert_roles(&doc, &[]);
}

#[test]
fn test_png_seed_follows_dominant_color() {
    let dir = tempfile::tempdir().unwrap();
    let data = fixtures::blue_and_black_rgb(10, 10, 8);
    let png = fixtures::png_bytes(png::ColorType::Rgb, 10, 10, &data);
    let path = fixtures::write_file(dir.path(), "photo.png", &png);

    let source = collect_sources(&[], Some(path.as_path()), None).unwrap();
    let generated = SchemeGenerator::new().generate(&source).unwrap();
    let doc = SchemeDocument::new(&generated, HexStyle::Argb);

    common::assert_hue_near(&doc.seed, colors::PURE_BLUE, 2.0);
    assert_eq!(doc.candidates.len(), 1);
}

#[test]
fn test_yaml_output_round_trips() {
    let doc = generate(&AppConfig::default(), &[colors::GOOGLE_BLUE]);
    let text = render(&doc, OutputFormat::Yaml).unwrap();
    let parsed: SchemeDocument = serde_yaml::from_str(&text).unwrap();
    assert_eq!(parsed, doc);
}

#[test]
fn test_cli_generate_prints_json() {
    let output = Command::new(env!("CARGO_BIN_EXE_dynacolor"))
        .args([
            "generate",
            "--hex",
            colors::PURE_BLUE,
            "--variant",
            "tonal-spot",
            "--spec-version",
            "2021",
            "--hex-style",
            "rgb",
        ])
        .env_remove("CONFIG_FILE")
        .output()
        .expect("run dynacolor");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["seed"], "#0000FF");
    assert_eq!(json["roles"]["primary"], "#555992");
    assert!(json["roles"]["primary_dim"].is_null());
    assert_eq!(json["params"]["version"], "2021");
}

#[test]
fn test_cli_rejects_unknown_variant() {
    let output = Command::new(env!("CARGO_BIN_EXE_dynacolor"))
        .args(["generate", "--hex", colors::BASELINE, "--variant", "pastel"])
        .env_remove("CONFIG_FILE")
        .output()
        .expect("run dynacolor");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown variant 'pastel'"), "stderr: {stderr}");
}

fn run_with_config(config: &str, extra: &[&str]) -> serde_json::Value {
    let dir = tempfile::tempdir().unwrap();
    let path = fixtures::write_file(dir.path(), "dynacolor.yaml", config.as_bytes());
    let output = Command::new(env!("CARGO_BIN_EXE_dynacolor"))
        .arg("--config")
        .arg(&path)
        .args(["generate", "--hex", colors::BASELINE])
        .args(extra)
        .env_remove("CONFIG_FILE")
        .output()
        .expect("run dynacolor");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_cli_light_overrides_dark_config() {
    let config = "dark: true\nformat: json\n";

    assert_eq!(run_with_config(config, &[])["params"]["dark"], true);
    assert_eq!(run_with_config(config, &["--light"])["params"]["dark"], false);
    // The last of the two flags wins
    assert_eq!(
        run_with_config(config, &["--light", "--dark"])["params"]["dark"],
        true
    );
}

#[test]
fn test_cli_rejects_unknown_hex_style() {
    let output = Command::new(env!("CARGO_BIN_EXE_dynacolor"))
        .args(["generate", "--hex", colors::BASELINE, "--hex-style", "hsl"])
        .env_remove("CONFIG_FILE")
        .output()
        .expect("run dynacolor");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown hex style 'hsl'"), "stderr: {stderr}");
}
