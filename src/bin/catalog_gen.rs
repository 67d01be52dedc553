//! Renders the ComponentLibrary catalog document.
//!
//! One-shot batch tool: assembles the catalog from the static tables in
//! `packsmith::catalog`, stamps today's date, and writes
//! `Docs/component_library_catalog.docx` under the resolved checkout,
//! overwriting any previous run. The resolved output path is printed on
//! stdout so operators can open it directly.

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use packsmith::catalog::{CATALOG_RELATIVE_PATH, build_catalog};
use packsmith::resolve_root;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "catalog-gen",
    about = "Render the ComponentLibrary catalog document"
)]
struct Cli {
    /// Library checkout to describe (defaults to COMPONENT_LIBRARY_ROOT or
    /// an upward search from the current directory).
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
    let output = root.join(CATALOG_RELATIVE_PATH);

    let today = Local::now().date_naive().to_string();
    let doc = build_catalog(&today);
    doc.save(&output)
        .with_context(|| format!("rendering the catalog to {}", output.display()))?;

    println!("{}", output.display());
    Ok(())
}
