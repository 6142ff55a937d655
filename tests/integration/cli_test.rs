//! Integration tests for the safeyt CLI

use std::process::Command;
use tempfile::TempDir;

use crate::helpers::{sample_link, SAMPLE_VIDEO_ID};

/// Helper to run safeyt CLI with an isolated config dir and capture output
fn run_safeyt(args: &[&str]) -> (String, String, i32) {
    let config_dir = TempDir::new().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_safeyt"))
        .args(args)
        .env("SAFEYT_CONFIG_DIR", config_dir.path())
        .output()
        .expect("Failed to execute safeyt");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

// ============================================================================
// Help and Version Tests
// ============================================================================

#[test]
fn help_exits_0_and_lists_subcommands() {
    let (stdout, _stderr, exit_code) = run_safeyt(&["--help"]);

    assert_eq!(exit_code, 0);
    for subcommand in ["check", "encode", "decode", "edit", "play", "config", "completions"] {
        assert!(stdout.contains(subcommand), "help is missing: {subcommand}");
    }
}

#[test]
fn version_includes_crate_version() {
    let (stdout, _stderr, exit_code) = run_safeyt(&["--version"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("0.2.0"));
}

#[test]
fn no_arguments_shows_usage() {
    let (_stdout, stderr, exit_code) = run_safeyt(&[]);

    assert_eq!(exit_code, 2);
    assert!(stderr.contains("Usage"));
}

// ============================================================================
// Check Tests
// ============================================================================

#[test]
fn check_identifies_youtube_links() {
    let (stdout, _stderr, exit_code) =
        run_safeyt(&["check", "https://www.youtube.com/watch?v=dQw4w9WgXcQ"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("YouTube video dQw4w9WgXcQ"));
}

#[test]
fn check_identifies_safeyt_links() {
    let link = sample_link();
    let (stdout, _stderr, exit_code) = run_safeyt(&["check", &link]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("SafeYT edit of video dQw4w9WgXcQ"));
    assert!(stdout.contains("2 skips"));
}

#[test]
fn check_rejects_unknown_links_with_exit_1() {
    let (_stdout, stderr, exit_code) = run_safeyt(&["check", "https://example.com/"]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("Not a YouTube or SafeYT link"));
}

#[test]
fn check_json_emits_machine_readable_output() {
    let (stdout, _stderr, exit_code) =
        run_safeyt(&["check", "--json", "https://youtu.be/dQw4w9WgXcQ"]);

    assert_eq!(exit_code, 0);
    let value: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(value["kind"], "youtube");
    assert_eq!(value["videoId"], SAMPLE_VIDEO_ID);
}

// ============================================================================
// Encode Tests
// ============================================================================

#[test]
fn encode_produces_a_stable_share_link() {
    let (stdout, _stderr, exit_code) = run_safeyt(&[
        "encode",
        "https://youtu.be/dQw4w9WgXcQ",
        "--skip",
        "1:30-2:05",
    ]);

    assert_eq!(exit_code, 0);
    insta::assert_snapshot!(
        stdout.trim(),
        @"https://safeyt.pbeej.com/embed/eyJ2aWRlb0lkIjoiZFF3NHc5V2dYY1EiLCJza2lwcyI6W3sic3RhcnQiOiI5MCIsImVuZCI6IjEyNSJ9XX0="
    );
}

#[test]
fn encode_round_trips_through_decode() {
    let (stdout, _stderr, exit_code) = run_safeyt(&[
        "encode",
        "https://youtu.be/dQw4w9WgXcQ",
        "--skip",
        "1:30-2:05",
        "--from",
        "0:30",
        "--to",
        "9:00",
    ]);
    assert_eq!(exit_code, 0);

    let payload = safeyt::share::decode_share_link(stdout.trim()).unwrap();
    assert_eq!(payload.video_id, SAMPLE_VIDEO_ID);
    assert_eq!(payload.skips.len(), 1);
    assert_eq!(payload.skips[0].start, "90");
    assert_eq!(payload.skips[0].end, "125");

    let bounds = payload.video_bounds.unwrap();
    assert_eq!(bounds.start.as_deref(), Some("30"));
    assert_eq!(bounds.end.as_deref(), Some("540"));
}

#[test]
fn encode_rejects_safeyt_input() {
    let link = sample_link();
    let (_stdout, stderr, exit_code) = run_safeyt(&["encode", &link]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("Already a SafeYT link"));
}

#[test]
fn encode_rejects_inverted_skips() {
    let (_stdout, stderr, exit_code) = run_safeyt(&[
        "encode",
        "https://youtu.be/dQw4w9WgXcQ",
        "--skip",
        "2:05-1:30",
    ]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("rejected"));
}

#[test]
fn encode_rejects_malformed_skip_ranges() {
    let (_stdout, stderr, exit_code) = run_safeyt(&[
        "encode",
        "https://youtu.be/dQw4w9WgXcQ",
        "--skip",
        "ninety-125",
    ]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("Invalid skip range"));
}

// ============================================================================
// Decode Tests
// ============================================================================

#[test]
fn decode_lists_skips_with_indexes() {
    let link = sample_link();
    let (stdout, _stderr, exit_code) = run_safeyt(&["decode", &link]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("videoId: dQw4w9WgXcQ"));
    assert!(stdout.contains("[0] 01:30 - 02:05"));
    assert!(stdout.contains("[1] 05:00 - 05:30"));
    assert!(stdout.contains("window: 00:30 - 09:00"));
}

#[test]
fn decode_accepts_bare_tokens() {
    let token = crate::helpers::sample_token();
    let (stdout, _stderr, exit_code) = run_safeyt(&["decode", &token]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("videoId: dQw4w9WgXcQ"));
}

#[test]
fn decode_json_round_trips_the_payload() {
    let link = sample_link();
    let (stdout, _stderr, exit_code) = run_safeyt(&["decode", "--json", &link]);

    assert_eq!(exit_code, 0);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["videoId"], SAMPLE_VIDEO_ID);
    assert_eq!(value["skips"].as_array().unwrap().len(), 2);
    assert_eq!(value["videoBounds"]["end"], "540");
}

#[test]
fn decode_rejects_garbage_with_exit_1() {
    let (_stdout, stderr, exit_code) = run_safeyt(&["decode", "!!not-a-token!!"]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("Failed to decode"));
}

// ============================================================================
// Edit Tests
// ============================================================================

#[test]
fn edit_adds_a_skip_to_an_existing_link() {
    let link = sample_link();
    let (stdout, _stderr, exit_code) =
        run_safeyt(&["edit", &link, "--add-skip", "7:00-7:30"]);

    assert_eq!(exit_code, 0);
    let payload = safeyt::share::decode_share_link(stdout.trim()).unwrap();
    assert_eq!(payload.skips.len(), 3);
    assert_eq!(payload.skips[2].start, "420");
    assert_eq!(payload.skips[2].end, "450");
}

#[test]
fn edit_deletes_a_skip_by_index() {
    let link = sample_link();
    let (stdout, _stderr, exit_code) = run_safeyt(&["edit", &link, "--delete-skip", "0"]);

    assert_eq!(exit_code, 0);
    let payload = safeyt::share::decode_share_link(stdout.trim()).unwrap();
    assert_eq!(payload.skips.len(), 1);
    assert_eq!(payload.skips[0].start, "300");
}

#[test]
fn edit_rejects_out_of_range_delete() {
    let link = sample_link();
    let (_stdout, stderr, exit_code) = run_safeyt(&["edit", &link, "--delete-skip", "5"]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("No skip at index 5"));
}

#[test]
fn edit_updates_trim_bounds() {
    let link = sample_link();
    let (stdout, _stderr, exit_code) = run_safeyt(&["edit", &link, "--from", "1:00"]);

    assert_eq!(exit_code, 0);
    let payload = safeyt::share::decode_share_link(stdout.trim()).unwrap();
    assert_eq!(payload.video_bounds.unwrap().start.as_deref(), Some("60"));
}

// ============================================================================
// Play Tests
// ============================================================================

#[test]
fn play_prints_the_skip_timeline() {
    let link = sample_link();
    let (stdout, _stderr, exit_code) = run_safeyt(&["play", &link, "--duration", "600"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("Playing dQw4w9WgXcQ (duration 10:00, 2 skips)"));
    assert!(stdout.contains("00:30  play"));
    assert!(stdout.contains("01:30  skip to 02:05"));
    assert!(stdout.contains("05:00  skip to 05:30"));
    assert!(stdout.contains("end of window, parked at 00:30"));
    assert!(stdout.contains("Watched"));
}

#[test]
fn play_stops_at_the_until_mark() {
    let link = sample_link();
    let (stdout, _stderr, exit_code) =
        run_safeyt(&["play", &link, "--duration", "600", "--until", "1:00"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("01:00  stop"));
    assert!(!stdout.contains("skip to 02:05"));
}

#[test]
fn play_accepts_plain_youtube_links() {
    let (stdout, _stderr, exit_code) = run_safeyt(&[
        "play",
        "https://youtu.be/dQw4w9WgXcQ",
        "--duration",
        "30",
    ]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("Playing dQw4w9WgXcQ (duration 00:30, 0 skips)"));
    assert!(stdout.contains("end of window, parked at 00:00"));
}

#[test]
fn play_seek_lands_past_a_covering_skip() {
    let link = sample_link();
    let (stdout, _stderr, exit_code) = run_safeyt(&[
        "play", &link, "--duration", "600", "--seek", "1:40", "--until", "2:10",
    ]);

    assert_eq!(exit_code, 0);
    // 1:40 is inside the 1:30-2:05 skip, so the seek lands on its end
    assert!(stdout.contains("01:40  seek to 02:05"));
}

// ============================================================================
// Completions Tests
// ============================================================================

#[test]
fn completions_generate_for_bash_and_zsh() {
    for shell in ["bash", "zsh"] {
        let (stdout, stderr, exit_code) = run_safeyt(&["completions", shell]);
        assert_eq!(exit_code, 0, "completions {shell} failed: {stderr}");
        assert!(stdout.contains("safeyt"));
    }
}
