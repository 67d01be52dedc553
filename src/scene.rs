//! Demo-scene dependency patching.
//!
//! Every pack demo scene must declare the two shared base scripts as external
//! resources. [`ensure_base_deps`] makes that true for one scene file:
//! already-declaring files are left untouched, everything else is rewritten
//! with the declarations inserted after the first `[ext_resource` line.
//! Reserved ids 99/100 keep the inserts clear of the hand-numbered resources
//! in the scenes.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Insertion anchor: the first line whose trimmed text starts with this.
pub const MARKER_PREFIX: &str = "[ext_resource";

/// A file containing this substring anywhere is considered already patched.
/// Both inserted lines contain it, so a rewrite is never repeated.
pub const GUARD_SUBSTRING: &str = "component_base.gd";

/// The two declarations inserted after the anchor, in order.
pub const BASE_DEP_LINES: [&str; 2] = [
    r#"[ext_resource type="Script" path="res://ComponentLibrary/Dependencies/component_base.gd" id="99"]"#,
    r#"[ext_resource type="Script" path="res://ComponentLibrary/Dependencies/character_component_base.gd" id="100"]"#,
];

// Demo scenes live at ComponentLibrary/Packs/<Genre>/**/Demo/*.tscn.
const PACKS_SUBDIR: &str = "ComponentLibrary/Packs";
const DEMO_DIR_NAME: &str = "Demo";
const SCENE_EXTENSION: &str = "tscn";

/// What [`ensure_base_deps`] did to a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchOutcome {
    /// Guard substring present; the file was not touched.
    AlreadyPatched,
    /// The file was rewritten (with the declarations inserted, or verbatim
    /// when it had no anchor line).
    Rewritten,
}

/// Collect the demo scene files under `<root>/ComponentLibrary/Packs`, in
/// traversal order. Only files directly inside a `Demo` directory count.
pub fn discover_demo_scenes(root: &Path) -> Result<Vec<PathBuf>> {
    let packs_dir = root.join(PACKS_SUBDIR);
    let mut scenes = Vec::new();
    for entry in WalkDir::new(&packs_dir) {
        let entry = entry.with_context(|| format!("walking {}", packs_dir.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        let is_scene = path.extension().and_then(|ext| ext.to_str()) == Some(SCENE_EXTENSION);
        let in_demo_dir = path
            .parent()
            .and_then(Path::file_name)
            .and_then(|name| name.to_str())
            == Some(DEMO_DIR_NAME);
        if is_scene && in_demo_dir {
            scenes.push(path.to_path_buf());
        }
    }
    Ok(scenes)
}

/// True when the file content already declares a base script.
pub fn has_base_deps(content: &str) -> bool {
    content.lines().any(|line| line.contains(GUARD_SUBSTRING))
}

/// Rebuild the line sequence with [`BASE_DEP_LINES`] inserted after the first
/// anchor line. At most one insertion happens even when several lines match;
/// with no anchor the sequence is returned unchanged. Lines are joined with
/// `\n`, which also normalizes CRLF input and drops a trailing newline.
pub fn insert_base_deps(content: &str) -> String {
    let mut rebuilt: Vec<&str> = Vec::new();
    let mut inserted = false;
    for line in content.lines() {
        rebuilt.push(line);
        if !inserted && line.trim().starts_with(MARKER_PREFIX) {
            rebuilt.extend(BASE_DEP_LINES);
            inserted = true;
        }
    }
    rebuilt.join("\n")
}

/// Idempotently add the base-script declarations to one scene file.
pub fn ensure_base_deps(path: &Path) -> Result<PatchOutcome> {
    let content =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    if has_base_deps(&content) {
        return Ok(PatchOutcome::AlreadyPatched);
    }
    fs::write(path, insert_base_deps(&content))
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(PatchOutcome::Rewritten)
}
