// Copyright (C) Pavlo Hrytsenko <pashagricenko@gmail.com>
// SPDX-License-Identifier: GPL-3.0-or-later

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};

use super::scene::ExportSettings;

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"))
}

/// Load export settings; `.json` files are JSON, everything else is YAML.
pub fn load_settings(path: &Path) -> Result<ExportSettings> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings file: {}", path.display()))?;

    let settings: ExportSettings = if is_json(path) {
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse JSON settings file: {}", path.display()))?
    } else {
        serde_yml::from_str(&contents)
            .with_context(|| format!("Failed to parse YAML settings file: {}", path.display()))?
    };

    if settings.rotation.iter().any(|v| !v.is_finite()) {
        bail!(
            "Rotation in {} must be finite, got {:?}",
            path.display(),
            settings.rotation
        );
    }

    log::info!("Loaded export settings from {}", path.display());
    Ok(settings)
}

/// Write settings back out, in the format picked by the file extension.
pub fn save_settings(settings: &ExportSettings, path: &Path) -> Result<()> {
    let text = if is_json(path) {
        serde_json::to_string_pretty(settings).context("Failed to serialize settings")?
    } else {
        serde_yml::to_string(settings).context("Failed to serialize settings")?
    };
    fs::write(path, text)
        .with_context(|| format!("Failed to write settings file: {}", path.display()))?;
    log::info!("Saved export settings to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::request::NameCheck;

    fn sample() -> ExportSettings {
        let mut settings = ExportSettings {
            name: "Lamp".to_string(),
            name_check: NameCheck::Verbatim,
            ..Default::default()
        };
        settings.material.specular = 0.25;
        settings
    }

    #[test]
    fn test_yaml_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("export.yaml");
        save_settings(&sample(), &path).unwrap();
        assert_eq!(load_settings(&path).unwrap(), sample());
    }

    #[test]
    fn test_json_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("export.json");
        save_settings(&sample(), &path).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.trim_start().starts_with('{'));
        assert_eq!(load_settings(&path).unwrap(), sample());
    }

    #[test]
    fn test_rejects_non_finite_rotation() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.yaml");
        fs::write(&path, "rotation: [0, .inf, 0]\n").unwrap();
        let err = load_settings(&path).unwrap_err();
        assert!(err.to_string().contains("must be finite"));
    }

    #[test]
    fn test_missing_file_has_context() {
        let err = load_settings(Path::new("does/not/exist.yaml")).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to read settings file"));
    }
}
