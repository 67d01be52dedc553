//! In-memory document model and docx rendering.
//!
//! The model keeps the catalog inspectable: tests assert on headings, rows,
//! and cell text without unzipping office files. [`CatalogDocument::save`] is
//! the only place the docx container is materialized, and it writes the whole
//! file in one `pack` call, so a failed build never leaves a partial document
//! behind.

use anyhow::{Context, Result};
use docx_rs::{
    Docx, Paragraph as DocxParagraph, Run, RunFonts, Style, StyleType, Table as DocxTable,
    TableCell, TableRow,
};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Font applied to unstyled text throughout the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextStyle {
    pub font_family: String,
    pub size_pt: usize,
}

/// One document block, in emission order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Block {
    /// Level 0 is the document title; level 1 a top-level section.
    Heading { level: usize, text: String },
    Paragraph { text: String },
    Table(Table),
}

/// A rectangular table; `rows[0]` is the header row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    pub columns: usize,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(header: &[&str]) -> Self {
        let mut table = Self {
            columns: header.len(),
            rows: Vec::new(),
        };
        table.add_row(header);
        table
    }

    /// Append one row; every row must carry exactly `columns` cells.
    pub fn add_row(&mut self, cells: &[&str]) {
        assert_eq!(cells.len(), self.columns, "row width mismatch");
        self.rows.push(cells.iter().map(|c| c.to_string()).collect());
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogDocument {
    default_style: TextStyle,
    blocks: Vec<Block>,
}

impl Default for CatalogDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogDocument {
    pub fn new() -> Self {
        Self {
            default_style: TextStyle {
                font_family: "Arial".to_string(),
                size_pt: 11,
            },
            blocks: Vec::new(),
        }
    }

    /// Set the font applied to all text that carries no explicit style.
    pub fn set_default_style(&mut self, font_family: &str, size_pt: usize) {
        self.default_style = TextStyle {
            font_family: font_family.to_string(),
            size_pt,
        };
    }

    pub fn add_heading(&mut self, text: &str, level: usize) {
        self.blocks.push(Block::Heading {
            level,
            text: text.to_string(),
        });
    }

    pub fn add_paragraph(&mut self, text: &str) {
        self.blocks.push(Block::Paragraph {
            text: text.to_string(),
        });
    }

    pub fn add_table(&mut self, table: Table) {
        self.blocks.push(Block::Table(table));
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Render and write the docx container to `path`, overwriting any
    /// existing file. The parent directory must already exist.
    pub fn save(&self, path: &Path) -> Result<()> {
        let file = fs::File::create(path)
            .with_context(|| format!("creating {}", path.display()))?;
        self.to_docx()
            .build()
            .pack(file)
            .with_context(|| format!("packing {}", path.display()))?;
        Ok(())
    }

    fn to_docx(&self) -> Docx {
        let fonts = RunFonts::new()
            .ascii(self.default_style.font_family.as_str())
            .hi_ansi(self.default_style.font_family.as_str());
        // docx run sizes are half-points.
        let mut docx = Docx::new()
            .default_fonts(fonts)
            .default_size(self.default_style.size_pt * 2)
            .add_style(heading_style(0))
            .add_style(heading_style(1));

        for block in &self.blocks {
            docx = match block {
                Block::Heading { level, text } => docx.add_paragraph(
                    DocxParagraph::new()
                        .style(style_id(*level))
                        .add_run(Run::new().add_text(text.as_str())),
                ),
                Block::Paragraph { text } => docx
                    .add_paragraph(DocxParagraph::new().add_run(Run::new().add_text(text.as_str()))),
                Block::Table(table) => docx.add_table(render_table(table)),
            };
        }
        docx
    }
}

fn style_id(level: usize) -> &'static str {
    match level {
        0 => "Title",
        1 => "Heading1",
        2 => "Heading2",
        _ => "Heading3",
    }
}

fn heading_style(level: usize) -> Style {
    match level {
        0 => Style::new("Title", StyleType::Paragraph)
            .name("Title")
            .size(56)
            .bold(),
        _ => Style::new(style_id(level), StyleType::Paragraph)
            .name(format!("Heading {level}"))
            .size(32)
            .bold(),
    }
}

fn render_table(table: &Table) -> DocxTable {
    let rows = table
        .rows
        .iter()
        .map(|row| {
            let cells = row
                .iter()
                .map(|cell| {
                    TableCell::new().add_paragraph(
                        DocxParagraph::new().add_run(Run::new().add_text(cell.as_str())),
                    )
                })
                .collect();
            TableRow::new(cells)
        })
        .collect();
    DocxTable::new(rows)
}
