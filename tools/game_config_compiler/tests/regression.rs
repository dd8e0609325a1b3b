use std::{fs, path::PathBuf};

use game_config_compiler::{
    generate_from_path, parse_game_file, render_generated_config, validate_config,
    ConfigCompilerError,
};

fn repo_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("missing tools dir")
        .parent()
        .expect("missing repo root")
        .to_path_buf()
}

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn snapshot(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("snapshots")
        .join(name)
}

#[test]
fn default_config_matches_snapshot() {
    let config = repo_root().join("config/game.toml");
    let actual = generate_from_path(&config).expect("default config should compile");
    let expected = fs::read_to_string(snapshot("default_generated.rs"))
        .expect("missing default snapshot file");

    assert_eq!(
        actual, expected,
        "generated output changed; if intentional, update tools/game_config_compiler/tests/snapshots/default_generated.rs"
    );
}

#[test]
fn default_fixture_renders_same_as_repo_config() {
    let repo = generate_from_path(&repo_root().join("config/game.toml")).expect("repo config");
    let fixture = generate_from_path(&fixture("valid_default.toml")).expect("fixture config");
    assert_eq!(repo, fixture);
}

#[test]
fn generation_is_deterministic_for_same_input() {
    let config = fixture("valid_default.toml");
    let first = generate_from_path(&config).expect("first generation failed");
    let second = generate_from_path(&config).expect("second generation failed");
    assert_eq!(first, second);
}

#[test]
fn overridden_values_render_into_literal() {
    let path = fixture("valid_short_idle.toml");
    let game = parse_game_file(&path).expect("fixture should parse");
    validate_config(&game).expect("fixture should validate");
    let rendered = render_generated_config(&game);

    for needle in [
        "idle_reset_ms: 500,",
        "initial_length: 6,",
        "playtime_seconds: 9,",
        "adc_max: 1023,",
        "deadzone: 20,",
        "super_margin: 60,",
    ] {
        assert!(
            rendered.contains(needle),
            "rendered output missing `{needle}`"
        );
    }
}

#[test]
fn semantic_validation_rejects_invalid_ranges() {
    let cases = [
        ("invalid/ready_zero.toml", "timing.ready_ms must be > 0"),
        (
            "invalid/cue_outlasts_direction.toml",
            "timing.cue_hold_ms must be < timing.direction_ms",
        ),
        (
            "invalid/playtime_too_long.toml",
            "round.playtime_seconds must be within 1..=15",
        ),
        (
            "invalid/length_too_long.toml",
            "round.initial_length must be within 1..=150",
        ),
        ("invalid/deadzone_zero.toml", "joystick.deadzone must be > 0"),
        (
            "invalid/margins_overlap.toml",
            "joystick.deadzone + joystick.super_margin must be < joystick.adc_max / 2",
        ),
    ];

    for (fixture_name, expected_msg) in cases {
        let path = fixture(fixture_name);
        let err = generate_from_path(&path).expect_err("fixture should fail validation");
        match err {
            ConfigCompilerError::Validation(msg) => {
                assert!(
                    msg.contains(expected_msg),
                    "expected validation message containing `{expected_msg}`, got `{msg}`"
                );
            }
            other => panic!("expected validation error, got {other}"),
        }
    }
}

#[test]
fn parse_errors_are_reported_for_schema_mismatches() {
    let path = fixture("invalid/missing_joystick.toml");
    let err = generate_from_path(&path).expect_err("fixture should fail parsing");

    match err {
        ConfigCompilerError::Parse(msg) => {
            assert!(
                msg.contains("joystick"),
                "expected parse error mentioning joystick, got `{msg}`"
            );
        }
        other => panic!("expected parse error, got {other}"),
    }
}

#[test]
fn missing_file_is_an_io_error() {
    let err = generate_from_path(&fixture("does_not_exist.toml")).expect_err("no such file");
    assert!(matches!(err, ConfigCompilerError::Io(_)));
}
