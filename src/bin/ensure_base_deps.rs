//! Inserts missing base-script declarations into pack demo scenes.
//!
//! One-shot batch tool: walks `ComponentLibrary/Packs/**/Demo/*.tscn` under
//! the resolved checkout and rewrites every scene that does not yet declare
//! the shared base scripts. Safe to re-run; patched files are skipped on the
//! next pass. Prints one confirmation line per rewritten file.

use anyhow::Result;
use clap::Parser;
use packsmith::resolve_root;
use packsmith::scene::{PatchOutcome, discover_demo_scenes, ensure_base_deps};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "ensure-base-deps",
    about = "Insert missing base-script declarations into demo scenes"
)]
struct Cli {
    /// Library checkout to patch (defaults to COMPONENT_LIBRARY_ROOT or an
    /// upward search from the current directory).
    #[arg(long, value_name = "DIR")]
    root: Option<PathBuf>,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let root = resolve_root(cli.root)?;

    for scene in discover_demo_scenes(&root)? {
        match ensure_base_deps(&scene)? {
            PatchOutcome::AlreadyPatched => {}
            PatchOutcome::Rewritten => println!("added base deps to {}", scene.display()),
        }
    }
    Ok(())
}
