//! Shared test fixtures for sync engine and E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Theme settings covering every slot with a mix of specific and shared keys.
///
/// - h1 has its own family, size, weight and extras
/// - h2/h3 fall back to the shared heading family, weight and extras
/// - body weight is the `inherit` sentinel
pub fn theme_settings() -> Value {
    json!({
        "heading-base-color": "#112233",
        "link-color": "#445566",
        "text-color": "#778899",
        "theme-color": "#99aabb",
        "font-family-h1": "'Playfair Display', serif",
        "headings-font-family": "Lora, serif",
        "body-font-family": "\"Open Sans\", sans-serif",
        "font-size-h1": {
            "desktop": "48",
            "tablet": "36",
            "mobile": "28",
            "desktop-unit": "px",
            "tablet-unit": "px",
            "mobile-unit": "px"
        },
        "font-size-body": {
            "desktop": 16,
            "tablet": "15",
            "mobile": "14",
            "desktop-unit": "px",
            "tablet-unit": "",
            "mobile-unit": "rem"
        },
        "font-weight-h1": "700",
        "headings-font-weight": "600",
        "body-font-weight": "inherit",
        "font-extras-h1": {
            "line-height": "1.2",
            "line-height-unit": "em",
            "letter-spacing": "",
            "text-transform": "uppercase"
        },
        "headings-font-extras": {
            "line-height": 1.4,
            "text-decoration": "underline"
        },
        "body-font-extras": {
            "line-height": "1.6",
            "letter-spacing": "0.5",
            "letter-spacing-unit": "px"
        }
    })
}

/// Theme settings with colors only and no typography keys at all.
pub fn theme_colors_only() -> Value {
    json!({
        "heading-base-color": "#112233",
        "link-color": "#445566",
        "text-color": "#778899",
        "theme-color": "#99aabb"
    })
}

/// A style kit with extra palette entries, a custom typography preset and
/// unrelated top-level settings.
pub fn style_kit() -> Value {
    json!({
        "container_width": { "unit": "px", "size": 1140 },
        "system_colors": [
            { "_id": "primary", "title": "Primary", "color": "#6EC1E4" },
            { "_id": "secondary", "title": "Secondary", "color": "#54595F" },
            { "_id": "text", "title": "Text", "color": "#7A7A7A" },
            { "_id": "accent", "title": "Accent", "color": "#61CE70" },
            { "_id": "brand", "title": "Brand", "color": "#FF0000" }
        ],
        "custom_colors": [
            { "_id": "c0ffee", "title": "Coffee", "color": "#C0FFEE" }
        ],
        "system_typography": [
            {
                "_id": "primary",
                "title": "Primary",
                "typography_font_weight": "500",
                "typography_letter_spacing": { "unit": "px", "size": 2.0 }
            },
            { "_id": "secondary", "title": "Secondary" },
            {
                "_id": "text",
                "title": "Text",
                "typography_font_weight": "400",
                "custom_field": { "keep": [1, 2, 3] }
            },
            { "_id": "accent", "title": "Accent" },
            { "_id": "a1b2c3", "title": "Custom Caption", "typography_font_size": { "unit": "px", "size": 11 } }
        ]
    })
}

/// Finds the typography entry with the given id in a kit document.
pub fn typography_entry<'a>(kit: &'a Value, id: &str) -> &'a Value {
    kit["system_typography"]
        .as_array()
        .and_then(|entries| entries.iter().find(|entry| entry["_id"] == id))
        .unwrap_or_else(|| panic!("typography entry {id} not found"))
}

/// Writes a JSON document to `path`, creating parent directories.
pub fn write_json(path: &Path, value: &Value) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    let content = serde_json::to_string_pretty(value).expect("Failed to serialize JSON");
    fs::write(path, content).expect("Failed to write JSON file");
}

/// Reads a JSON document from `path`.
pub fn read_json(path: &Path) -> Value {
    let content = fs::read_to_string(path).expect("Failed to read JSON file");
    serde_json::from_str(&content).expect("Failed to parse JSON file")
}

/// Path to the kitsync binary built for this test run.
pub fn kitsync_bin() -> String {
    std::env::var("CARGO_BIN_EXE_kitsync").unwrap_or_else(|_| "target/release/kitsync".to_string())
}

/// Temporary directory holding a theme file, a kit file, a style cache and
/// an isolated config directory.
pub struct TestWorkspace {
    _dir: TempDir,
    /// Theme settings file
    pub theme: PathBuf,
    /// Style kit file
    pub kit: PathBuf,
    /// Compiled style cache directory
    pub cache: PathBuf,
    /// Config directory passed via `KITSYNC_CONFIG_DIR`
    pub config_dir: PathBuf,
}

impl TestWorkspace {
    /// Workspace seeded with [`theme_settings`] and [`style_kit`].
    pub fn new() -> Self {
        let workspace = Self::empty();
        write_json(&workspace.theme, &theme_settings());
        write_json(&workspace.kit, &style_kit());
        workspace
    }

    /// Workspace with directories but no theme or kit files.
    pub fn empty() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let root = dir.path().to_path_buf();
        let cache = root.join("cache");
        let config_dir = root.join("config");
        fs::create_dir_all(&cache).expect("Failed to create cache dir");
        fs::create_dir_all(&config_dir).expect("Failed to create config dir");

        Self {
            theme: root.join("theme.json"),
            kit: root.join("kit").join("active-kit.json"),
            cache,
            config_dir,
            _dir: dir,
        }
    }

    /// Puts a compiled stylesheet into the cache directory.
    pub fn seed_cache(&self) -> PathBuf {
        let path = self.cache.join("post-12.css");
        fs::write(&path, "body{}").expect("Failed to write cache file");
        path
    }

    /// Current kit document.
    pub fn read_kit(&self) -> Value {
        read_json(&self.kit)
    }

    /// Command with the isolated config directory and no store flags.
    pub fn bare_command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(kitsync_bin());
        cmd.env("KITSYNC_CONFIG_DIR", &self.config_dir);
        cmd.env_remove("RUST_LOG");
        cmd.args(args);
        cmd
    }

    /// `kitsync sync <target>` with every store flag pointing into the workspace.
    pub fn sync_command(&self, target: &str, extra: &[&str]) -> Command {
        let mut cmd = self.bare_command(&["sync", target]);
        cmd.arg("--source")
            .arg(&self.theme)
            .arg("--kit")
            .arg(&self.kit)
            .arg("--cache-dir")
            .arg(&self.cache);
        cmd.args(extra);
        cmd
    }
}
