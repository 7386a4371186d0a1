//! File-backed stores holding JSON documents.
//!
//! The theme settings and the style kit are each one JSON object on disk.
//! Reads never fail on bad content: a missing file, invalid JSON or a
//! non-object document is reported as "no store" and logged. Writes go
//! through a temp file + rename so the kit file is never half-written.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::{debug, warn};

use crate::models::{KitUpdate, SourceSettings, StyleKit};
use crate::sync::merge::apply_update;
use crate::sync::ports::{SourceSettingsPort, StyleKitPort};

/// Theme settings read from a JSON file.
#[derive(Debug, Clone, Default)]
pub struct JsonSourceStore {
    path: Option<PathBuf>,
}

impl JsonSourceStore {
    /// Creates a store. `None` means the theme is not configured.
    #[must_use]
    pub const fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    /// Configured settings file.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl SourceSettingsPort for JsonSourceStore {
    fn is_active(&self) -> bool {
        self.path.is_some()
    }

    fn read_settings(&self) -> Result<Option<SourceSettings>> {
        let Some(path) = &self.path else {
            return Ok(None);
        };

        let Some(document) = read_json_document(path)? else {
            return Ok(None);
        };

        let settings = SourceSettings::from_value(document);
        if settings.is_none() {
            warn!(path = %path.display(), "theme settings file is not a JSON object");
        }
        Ok(settings)
    }
}

/// Style kit read from and written to a JSON file.
#[derive(Debug, Clone, Default)]
pub struct JsonKitStore {
    path: Option<PathBuf>,
    cache_dir: Option<PathBuf>,
}

impl JsonKitStore {
    /// Creates a store.
    ///
    /// `path` is the kit document; `None` means the page builder is not
    /// configured. `cache_dir` holds compiled CSS to drop after a write.
    #[must_use]
    pub const fn new(path: Option<PathBuf>, cache_dir: Option<PathBuf>) -> Self {
        Self { path, cache_dir }
    }

    /// Configured kit file.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Configured style cache directory.
    #[must_use]
    pub fn cache_dir(&self) -> Option<&Path> {
        self.cache_dir.as_deref()
    }
}

impl StyleKitPort for JsonKitStore {
    /// Active when a kit path is configured and its directory exists.
    fn is_active(&self) -> bool {
        let Some(path) = &self.path else {
            return false;
        };
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.is_dir(),
            _ => true,
        }
    }

    fn read_kit(&self) -> Result<Option<StyleKit>> {
        let Some(path) = &self.path else {
            return Ok(None);
        };

        let Some(document) = read_json_document(path)? else {
            return Ok(None);
        };

        let kit = StyleKit::from_value(document);
        if kit.is_none() {
            warn!(path = %path.display(), "style kit file is not a JSON object");
        }
        Ok(kit)
    }

    fn write_kit(&mut self, update: &KitUpdate) -> Result<()> {
        let path = self.path.as_deref().context("No style kit file configured")?;

        // Re-read so keys changed since the sync started are not clobbered
        let mut kit = self
            .read_kit()?
            .with_context(|| format!("Style kit disappeared before write: {}", path.display()))?;

        let replaced = apply_update(&mut kit, update);
        debug!(keys = ?replaced, path = %path.display(), "merging kit update");

        let content = serde_json::to_string_pretty(&Value::Object(kit.into_settings()))
            .context("Failed to serialize style kit")?;
        write_atomic(path, &content)
    }

    fn invalidate_style_cache(&mut self) -> Result<()> {
        let Some(cache_dir) = &self.cache_dir else {
            return Ok(());
        };
        if !cache_dir.is_dir() {
            return Ok(());
        }

        let entries = fs::read_dir(cache_dir).with_context(|| {
            format!("Failed to read style cache directory: {}", cache_dir.display())
        })?;

        let mut removed = 0usize;
        for entry in entries {
            let entry = entry.context("Failed to read style cache entry")?;
            let path = entry.path();
            if path.is_file() {
                fs::remove_file(&path).with_context(|| {
                    format!("Failed to remove cached style file: {}", path.display())
                })?;
                removed += 1;
            }
        }

        debug!(removed, dir = %cache_dir.display(), "cleared style cache");
        Ok(())
    }
}

/// Reads a JSON document, returning `Ok(None)` when the file is missing or
/// does not parse.
fn read_json_document(path: &Path) -> Result<Option<Value>> {
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;

    match serde_json::from_str(&content) {
        Ok(value) => Ok(Some(value)),
        Err(err) => {
            warn!(path = %path.display(), error = %err, "ignoring invalid JSON document");
            Ok(None)
        }
    }
}

/// Writes `content` to `path` using a temp file + rename.
fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let temp_path = path.with_extension("json.tmp");

    fs::write(&temp_path, content)
        .with_context(|| format!("Failed to write temp file: {}", temp_path.display()))?;

    fs::rename(&temp_path, path).with_context(|| {
        format!("Failed to rename temp file to: {}", path.display())
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_source_store_states() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("theme.json");

        assert!(!JsonSourceStore::new(None).is_active());

        let store = JsonSourceStore::new(Some(path.clone()));
        assert!(store.is_active());
        assert!(store.read_settings().unwrap().is_none());

        fs::write(&path, "{ not json").unwrap();
        assert!(store.read_settings().unwrap().is_none());

        fs::write(&path, "[1, 2]").unwrap();
        assert!(store.read_settings().unwrap().is_none());

        fs::write(&path, r##"{"text-color": "#333333"}"##).unwrap();
        let settings = store.read_settings().unwrap().unwrap();
        assert_eq!(settings.raw("text-color"), Some(&json!("#333333")));
    }

    #[test]
    fn test_kit_store_activity() {
        let temp_dir = TempDir::new().unwrap();
        assert!(!JsonKitStore::new(None, None).is_active());
        assert!(JsonKitStore::new(Some(temp_dir.path().join("kit.json")), None).is_active());
        assert!(JsonKitStore::new(Some(PathBuf::from("kit.json")), None).is_active());

        let missing_dir = temp_dir.path().join("nope").join("kit.json");
        assert!(!JsonKitStore::new(Some(missing_dir), None).is_active());
    }

    #[test]
    fn test_kit_write_merges_and_is_atomic() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("kit.json");
        fs::write(
            &path,
            r#"{"site_name": "Demo", "system_colors": [], "viewport_md": 768}"#,
        )
        .unwrap();

        let mut store = JsonKitStore::new(Some(path.clone()), None);
        let update = KitUpdate::colors(vec![crate::models::TargetColorEntry::new(
            "accent", "Accent", "#abcdef",
        )]);
        store.write_kit(&update).unwrap();

        let written: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["site_name"], json!("Demo"));
        assert_eq!(written["viewport_md"], json!(768));
        assert_eq!(written["system_colors"][0]["_id"], json!("accent"));
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_kit_write_fails_without_document() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = JsonKitStore::new(Some(temp_dir.path().join("kit.json")), None);
        assert!(store.write_kit(&KitUpdate::colors(vec![])).is_err());
    }

    #[test]
    fn test_corrupt_theme_file_aborts_color_sync() {
        use crate::sync::{PreconditionFailure, SyncKind, SyncPipeline};

        let temp_dir = TempDir::new().unwrap();
        let theme = temp_dir.path().join("theme.json");
        let kit_path = temp_dir.path().join("kit.json");
        let cache = temp_dir.path().join("css");
        fs::create_dir_all(&cache).unwrap();
        fs::write(cache.join("global.css"), "body{}").unwrap();
        fs::write(&theme, r##"{ "heading-base-color": "#112233", oops"##).unwrap();
        let kit_content =
            r##"{"system_colors": [{"_id": "primary", "title": "Primary", "color": "#6EC1E4"}]}"##;
        fs::write(&kit_path, kit_content).unwrap();

        let source = JsonSourceStore::new(Some(theme));
        let mut kit = JsonKitStore::new(Some(kit_path.clone()), Some(cache.clone()));
        let err = SyncPipeline::new(&source, &mut kit)
            .run(SyncKind::Colors)
            .unwrap_err();

        assert_eq!(
            err.precondition(),
            Some(PreconditionFailure::SourceSettingsUnavailable)
        );
        assert_eq!(fs::read_to_string(&kit_path).unwrap(), kit_content);
        assert!(cache.join("global.css").exists());
    }

    #[test]
    fn test_invalidate_removes_cached_files_only() {
        let temp_dir = TempDir::new().unwrap();
        let cache = temp_dir.path().join("css");
        fs::create_dir_all(cache.join("fonts")).unwrap();
        fs::write(cache.join("global.css"), "body{}").unwrap();
        fs::write(cache.join("post-12.css"), "h1{}").unwrap();

        let mut store = JsonKitStore::new(Some(temp_dir.path().join("kit.json")), Some(cache.clone()));
        store.invalidate_style_cache().unwrap();

        assert!(!cache.join("global.css").exists());
        assert!(!cache.join("post-12.css").exists());
        assert!(cache.join("fonts").is_dir());

        // Missing or unset cache directories are a no-op
        let mut store = JsonKitStore::new(None, Some(temp_dir.path().join("missing")));
        assert!(store.invalidate_style_cache().is_ok());
    }
}
