#![allow(dead_code)]

// Fixture helpers shared by the integration suites: temporary library
// checkouts and canned scene files.

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A demo scene that does not yet declare the base scripts.
pub const UNPATCHED_SCENE: &str = concat!(
    "[gd_scene load_steps=2 format=3]\n",
    "[ext_resource type=\"Script\" path=\"res://ComponentLibrary/Packs/UI/Components/ui_page_state_component.gd\" id=\"1\"]\n",
    "[node name=\"UiDemo\" type=\"Control\"]\n",
);

/// A demo scene that already declares one of the base scripts.
pub const DECLARED_SCENE: &str = concat!(
    "[gd_scene load_steps=2 format=3]\n",
    "[ext_resource type=\"Script\" path=\"res://ComponentLibrary/Dependencies/component_base.gd\" id=\"3\"]\n",
    "[node name=\"ActionDemo\" type=\"Node2D\"]\n",
);

/// A scene header with no external-resource declarations at all.
pub const HEADER_ONLY_SCENE: &str = concat!(
    "[gd_scene format=3]\n",
    "[node name=\"Empty\" type=\"Node\"]\n",
);

/// Lay out a temporary library checkout: the root sentinel, an empty packs
/// tree, and the documentation directory.
pub fn library_fixture() -> Result<TempDir> {
    let temp = TempDir::new()?;
    fs::create_dir_all(temp.path().join("ComponentLibrary/Dependencies"))?;
    fs::create_dir_all(temp.path().join("ComponentLibrary/Packs"))?;
    fs::create_dir_all(temp.path().join("Docs"))?;
    Ok(temp)
}

/// Write a file under the fixture root, creating parent directories.
pub fn write_scene(root: &Path, relative: &str, content: &str) -> Result<PathBuf> {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, content)?;
    Ok(path)
}
