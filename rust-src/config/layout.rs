//! Mount layout file.
//!
//! ```toml
//! [[mounts]]
//! id = "chart-category-bar"
//! width = 640
//! height = 360
//! ```
//!
//! Mounts left out of the file are missing mount points for that run.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::settings::{DEFAULT_MOUNT_HEIGHT, DEFAULT_MOUNT_WIDTH, MOUNT_IDS};


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MountLayout {
    pub id: String,
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
}


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    #[serde(default)]
    pub mounts: Vec<MountLayout>,
}


impl Default for LayoutConfig {
    fn default() -> Self {
        let mounts = MOUNT_IDS
            .iter()
            .map(|id| MountLayout {
                id: (*id).to_string(),
                width: DEFAULT_MOUNT_WIDTH,
                height: DEFAULT_MOUNT_HEIGHT,
            })
            .collect();
        Self { mounts }
    }
}


/// Load a layout file, or the default six-mount layout when no path is given.
pub fn load_layout(path: Option<&Path>) -> Result<LayoutConfig> {
    let Some(path) = path else {
        return Ok(LayoutConfig::default());
    };

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read layout file: {}", path.display()))?;

    let layout: LayoutConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse layout file: {}", path.display()))?;

    for mount in &layout.mounts {
        if !MOUNT_IDS.contains(&mount.id.as_str()) {
            log::warn!("Layout names unknown mount '{}'; it will stay empty", mount.id);
        }
    }

    Ok(layout)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_has_every_mount() {
        let layout = LayoutConfig::default();
        let ids: Vec<&str> = layout.mounts.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, MOUNT_IDS);
        assert!(layout.mounts.iter().all(|m| m.width > 0.0 && m.height > 0.0));
    }

    #[test]
    fn test_load_layout_without_path() {
        assert_eq!(load_layout(None).unwrap(), LayoutConfig::default());
    }

    #[test]
    fn test_load_layout_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("layout.toml");
        std::fs::write(
            &path,
            "[[mounts]]\nid = \"chart-category-bar\"\nwidth = 640\nheight = 360\n\n[[mounts]]\nid = \"chart-value-line\"\n",
        )
        .unwrap();

        let layout = load_layout(Some(&path)).unwrap();
        assert_eq!(layout.mounts.len(), 2);
        assert_eq!(layout.mounts[0].width, 640.0);
        assert_eq!(layout.mounts[1].width, 0.0);
    }

    #[test]
    fn test_load_layout_rejects_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("layout.toml");
        std::fs::write(&path, "mounts = 3").unwrap();
        assert!(load_layout(Some(&path)).is_err());
    }
}
