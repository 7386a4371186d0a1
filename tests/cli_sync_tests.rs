//! End-to-end tests for `kitsync sync`, `kitsync css` and `kitsync doctor`.

use serde_json::Value;
use std::fs;

mod fixtures;
use fixtures::*;

fn stdout_json(output: &std::process::Output) -> Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(&stdout).unwrap_or_else(|e| panic!("Invalid JSON ({e}): {stdout}"))
}

// ============================================================================
// Sync Colors
// ============================================================================

#[test]
fn test_sync_colors_writes_palette() {
    let ws = TestWorkspace::new();
    let cached = ws.seed_cache();

    let output = ws
        .sync_command("colors", &[])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Synchronization successful!"));
    assert!(stdout.contains("primary, secondary, text, accent"));

    let kit = ws.read_kit();
    let colors = kit["system_colors"].as_array().unwrap();
    assert_eq!(colors.len(), 4);
    assert_eq!(colors[0]["_id"], "primary");
    assert_eq!(colors[0]["title"], "Primary");
    assert_eq!(colors[0]["name"], "Primary");
    assert_eq!(colors[0]["color"], "#112233");
    assert_eq!(colors[3]["color"], "#99aabb");
    assert_eq!(kit["custom_colors"], style_kit()["custom_colors"]);

    assert!(!cached.exists(), "style cache should be cleared after a write");
}

#[test]
fn test_sync_colors_json_output() {
    let ws = TestWorkspace::new();

    let output = ws
        .sync_command("colors", &["--json"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let result = stdout_json(&output);
    assert_eq!(result["status"], "success");
    assert_eq!(result["report"]["kind"], "colors");
    assert_eq!(result["report"]["entries"], 4);
    assert_eq!(result["report"]["written"], true);
    assert!(result["report"]["synced_at"].is_string());
}

#[test]
fn test_sync_dry_run_leaves_kit_untouched() {
    let ws = TestWorkspace::new();
    let cached = ws.seed_cache();
    let before = fs::read_to_string(&ws.kit).unwrap();

    let output = ws
        .sync_command("colors", &["--dry-run", "--json"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let plan = stdout_json(&output);
    assert_eq!(plan["kind"], "colors");
    assert_eq!(plan["update"]["system_colors"][1]["color"], "#445566");

    assert_eq!(fs::read_to_string(&ws.kit).unwrap(), before);
    assert!(cached.exists());
}

// ============================================================================
// Sync Typography
// ============================================================================

#[test]
fn test_sync_typography_overlays_entries() {
    let ws = TestWorkspace::new();

    let output = ws
        .sync_command("typography", &[])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let kit = ws.read_kit();
    let primary = typography_entry(&kit, "primary");
    assert_eq!(primary["typography_font_family"], "Playfair Display");
    assert_eq!(primary["typography_typography"], "custom");
    assert_eq!(primary["typography_font_size"]["size"], 48);

    let text = typography_entry(&kit, "text");
    assert_eq!(text["typography_text_decoration"], "none");
    assert_eq!(text["typography_font_weight"], "400");
    assert_eq!(text["custom_field"], style_kit()["system_typography"][2]["custom_field"]);

    assert_eq!(kit["system_typography"].as_array().unwrap().len(), 5);
    assert_eq!(kit["container_width"], style_kit()["container_width"]);
}

#[test]
fn test_sync_typography_twice_is_stable() {
    let ws = TestWorkspace::new();

    for _ in 0..2 {
        let status = ws
            .sync_command("typography", &[])
            .status()
            .expect("Failed to execute command");
        assert!(status.success());
    }
    let first = ws.read_kit();

    let status = ws
        .sync_command("typography", &[])
        .status()
        .expect("Failed to execute command");
    assert!(status.success());
    assert_eq!(ws.read_kit(), first);
}

#[test]
fn test_sync_typography_without_theme_file_fails() {
    let ws = TestWorkspace::new();
    fs::remove_file(&ws.theme).unwrap();
    let before = fs::read_to_string(&ws.kit).unwrap();

    let output = ws
        .sync_command("typography", &["--json"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let result = stdout_json(&output);
    assert_eq!(result["status"], "fail");
    assert_eq!(result["error_code"], "source_settings_missing");
    assert_eq!(fs::read_to_string(&ws.kit).unwrap(), before);
}

// ============================================================================
// Preconditions
// ============================================================================

#[test]
fn test_corrupt_theme_file_leaves_palette() {
    let ws = TestWorkspace::new();
    fs::write(&ws.theme, r##"{ "heading-base-color": "#112233", oops"##).unwrap();
    let cached = ws.seed_cache();
    let before = fs::read_to_string(&ws.kit).unwrap();

    let output = ws
        .sync_command("colors", &["--json"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout_json(&output)["error_code"], "source_settings_missing");
    assert_eq!(fs::read_to_string(&ws.kit).unwrap(), before);
    assert!(cached.exists());
}

#[test]
fn test_missing_kit_reports_kit_not_found() {
    let ws = TestWorkspace::new();
    fs::remove_file(&ws.kit).unwrap();
    let cached = ws.seed_cache();

    let output = ws
        .sync_command("colors", &["--json"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let result = stdout_json(&output);
    assert_eq!(result["error_code"], "kit_not_found");
    assert!(!ws.kit.exists(), "no kit should be created");
    assert!(cached.exists(), "cache must not be cleared without a write");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("active kit could not be found"), "stderr: {stderr}");
}

#[test]
fn test_unconfigured_page_builder() {
    let ws = TestWorkspace::new();

    let output = ws
        .bare_command(&["sync", "colors", "--json"])
        .arg("--source")
        .arg(&ws.theme)
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout_json(&output)["error_code"], "page_builder_not_active");
}

#[test]
fn test_unconfigured_theme() {
    let ws = TestWorkspace::new();

    let output = ws
        .bare_command(&["sync", "colors", "--json"])
        .arg("--kit")
        .arg(&ws.kit)
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout_json(&output)["error_code"], "theme_not_active");
}

#[test]
fn test_kit_without_typography() {
    let ws = TestWorkspace::new();
    write_json(&ws.kit, &serde_json::json!({ "system_colors": [] }));

    let output = ws
        .sync_command("typography", &["--json"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout_json(&output)["error_code"], "typography_missing");
}

// ============================================================================
// CSS
// ============================================================================

#[test]
fn test_css_after_typography_sync() {
    let ws = TestWorkspace::new();
    assert!(ws
        .sync_command("typography", &[])
        .status()
        .expect("Failed to execute command")
        .success());

    let output = ws
        .bare_command(&["css", "--style-tag"])
        .arg("--kit")
        .arg(&ws.kit)
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("<style id=\"kitsync-styles\">"));
    assert!(stdout.contains("body, p, a, span {"));
    assert!(stdout.contains("text-decoration: none !important;"));
    assert!(stdout.contains("text-transform: initial !important;"));
    assert!(stdout.trim_end().ends_with("</style>"));
}

#[test]
fn test_css_without_kit_prints_nothing() {
    let ws = TestWorkspace::empty();

    let output = ws
        .bare_command(&["css"])
        .arg("--kit")
        .arg(&ws.kit)
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());
}

// ============================================================================
// Doctor
// ============================================================================

#[test]
fn test_doctor_all_available() {
    let ws = TestWorkspace::new();

    let output = ws
        .bare_command(&["doctor", "--json"])
        .arg("--source")
        .arg(&ws.theme)
        .arg("--kit")
        .arg(&ws.kit)
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let checks = stdout_json(&output);
    let checks = checks.as_array().unwrap();
    assert_eq!(checks.len(), 5);
    assert!(checks.iter().all(|c| c["status"] == "available"));
}

#[test]
fn test_doctor_reports_missing_kit() {
    let ws = TestWorkspace::empty();

    let output = ws
        .bare_command(&["doctor"])
        .arg("--source")
        .arg(&ws.theme)
        .arg("--kit")
        .arg(&ws.kit)
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("✗ Page builder"));
    assert!(stdout.contains("✓ Theme"));
}
