//! Component catalog assembly.
//!
//! The catalog is a docx document describing the library: architecture
//! layers, the shared dependency scripts, and the per-genre packs. All of its
//! content is fixed at compile time (see [`data`]) except the generation
//! date, which callers inject so two builds of the same day compare equal.
//! Rendering to disk happens in one step at the end ([`document::CatalogDocument::save`]);
//! nothing is materialized if assembly fails.

pub mod data;
pub mod document;

pub use data::{DEPENDENCIES, Dependency, PACKS, Pack};
pub use document::{Block, CatalogDocument, Table};

use data::SCENE_PATH_PREFIX;

/// Where the rendered catalog lands, relative to the library checkout.
pub const CATALOG_RELATIVE_PATH: &str = "Docs/component_library_catalog.docx";

const DEFAULT_FONT_FAMILY: &str = "Arial";
const DEFAULT_FONT_SIZE_PT: usize = 11;

/// Assemble the full catalog document for the given generation date
/// (ISO 8601, e.g. `2026-08-07`).
pub fn build_catalog(generated_on: &str) -> CatalogDocument {
    let mut doc = CatalogDocument::new();
    doc.set_default_style(DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE_PT);

    doc.add_heading("ComponentLibrary component catalog and integration notes", 0);
    doc.add_paragraph(&format!("Generated: {generated_on}"));

    doc.add_heading("1. Architecture layers", 1);
    doc.add_paragraph(
        "Global Services: process-wide capabilities, one instance each (EventBus/ObjectPool/TimeController/LocalTimeDomain).",
    );
    doc.add_paragraph("Packs: per-genre component bundles meant to be copied into a game project.");
    doc.add_paragraph(
        "Demos: every genre ships a minimal runnable scene for quick acceptance checks.",
    );
    doc.add_paragraph(
        "Addon (optional): component_library_share only registers editor Custom Types.",
    );

    doc.add_heading("2. Shared dependencies", 1);
    let mut deps = Table::new(&["File", "Purpose"]);
    for dep in &DEPENDENCIES {
        deps.add_row(&[dep.path, dep.usage]);
    }
    doc.add_table(deps);

    doc.add_heading("3. Genre packs and demos", 1);
    let mut packs = Table::new(&["Genre", "Core components", "Template scene", "Demo scene"]);
    for pack in &PACKS {
        let template = format!("{SCENE_PATH_PREFIX}{}", pack.template_scene);
        let demo = format!("{SCENE_PATH_PREFIX}{}", pack.demo_scene);
        packs.add_row(&[pack.genre, pack.components, &template, &demo]);
    }
    doc.add_table(packs);

    doc.add_heading("4. Addon distribution (optional)", 1);
    doc.add_paragraph("Addon directory: addons/component_library_share");
    doc.add_paragraph(
        "Role: registers common component types in the editor node-creation panel to aid discovery.",
    );
    doc.add_paragraph(
        "Boundary: the addon never takes over runtime logic and does not affect the copy-and-use path.",
    );

    doc.add_heading("5. Acceptance baseline", 1);
    doc.add_paragraph("Every genre pack must contain:");
    doc.add_paragraph("- Components/*.gd");
    doc.add_paragraph("- Templates/*.tscn");
    doc.add_paragraph("- Demos/<Genre>/*_demo.tscn + *_demo.gd");
    doc.add_paragraph("- README.md");

    doc
}
