//! Shared plumbing for the ComponentLibrary maintenance binaries.
//!
//! The crate ships two operator tools: `catalog-gen`, which renders the
//! component catalog document under `Docs/`, and `ensure-base-deps`, which
//! inserts missing base-script declarations into the pack demo scenes. Both
//! operate on a "library checkout" (a Godot project directory containing
//! `ComponentLibrary/`); the resolution rules live here so the binaries stay
//! thin and the behavior is testable against temporary checkouts.

pub mod catalog;
pub mod scene;

use anyhow::{Context, Result, bail};
use std::{
    env, fs,
    path::{Path, PathBuf},
};

/// Environment override for the checkout the tools operate on.
pub const ENV_LIBRARY_ROOT: &str = "COMPONENT_LIBRARY_ROOT";

// A checkout is recognized by the shared-dependency scripts directory; the
// rest of the tree (Packs/, Docs/) varies between projects that embed the
// library.
const ROOT_SENTINEL: &str = "ComponentLibrary/Dependencies";

fn is_library_root(candidate: &Path) -> bool {
    candidate.join(ROOT_SENTINEL).is_dir()
}

fn search_upwards(start: &Path) -> Option<PathBuf> {
    let mut dir = fs::canonicalize(start).ok()?;
    loop {
        if is_library_root(&dir) {
            return Some(dir);
        }
        if !dir.pop() {
            break;
        }
    }
    None
}

fn checkout_at(path: &Path) -> Result<PathBuf> {
    if !path.exists() {
        bail!("{} does not exist", path.display());
    }
    if !is_library_root(path) {
        bail!(
            "{} does not look like a library checkout (no {ROOT_SENTINEL} directory)",
            path.display()
        );
    }
    fs::canonicalize(path).with_context(|| format!("canonicalizing {}", path.display()))
}

/// Resolve the library checkout the tools should operate on.
///
/// An explicit path (the `--root` flag) wins and must point at a checkout.
/// Without it, [`find_library_root`] applies the ambient rules.
pub fn resolve_root(explicit: Option<PathBuf>) -> Result<PathBuf> {
    match explicit {
        Some(path) => checkout_at(&path).with_context(|| format!("--root {}", path.display())),
        None => find_library_root(),
    }
}

/// Locate a library checkout from the ambient environment.
///
/// `COMPONENT_LIBRARY_ROOT` is honored first; a set but invalid value is an
/// error rather than a silent fallback. Otherwise the directories above the
/// current one are searched for the checkout sentinel.
pub fn find_library_root() -> Result<PathBuf> {
    if let Ok(env_root) = env::var(ENV_LIBRARY_ROOT) {
        return checkout_at(Path::new(&env_root))
            .with_context(|| format!("{ENV_LIBRARY_ROOT}={env_root}"));
    }

    if let Ok(cwd) = env::current_dir() {
        if let Some(root) = search_upwards(&cwd) {
            return Ok(root);
        }
    }

    bail!(
        "Unable to locate a component library checkout. Run from inside one, pass --root, or set {ENV_LIBRARY_ROOT}."
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn library_checkout() -> TempDir {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join(ROOT_SENTINEL)).unwrap();
        temp
    }

    #[test]
    fn search_upwards_finds_checkout_from_nested_dir() {
        let temp = library_checkout();
        let nested = temp.path().join("ComponentLibrary/Packs/UI/Demo");
        fs::create_dir_all(&nested).unwrap();
        let found = search_upwards(&nested).expect("sentinel above nested dir");
        assert_eq!(found, fs::canonicalize(temp.path()).unwrap());
    }

    #[test]
    fn search_upwards_gives_up_without_sentinel() {
        let temp = TempDir::new().unwrap();
        assert_eq!(search_upwards(temp.path()), None);
    }

    #[test]
    fn resolve_root_accepts_explicit_checkout() {
        let temp = library_checkout();
        let resolved = resolve_root(Some(temp.path().to_path_buf())).unwrap();
        assert_eq!(resolved, fs::canonicalize(temp.path()).unwrap());
    }

    #[test]
    fn resolve_root_rejects_plain_directory() {
        let temp = TempDir::new().unwrap();
        let err = resolve_root(Some(temp.path().to_path_buf())).unwrap_err();
        assert!(err.to_string().contains("--root"));
    }
}
