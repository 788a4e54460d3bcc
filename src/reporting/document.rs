//! Paginated report rendering.
//!
//! Rendering strategy: `genpdf` (pure Rust), A4 with uniform margins. Fonts
//! must be embedded, so an embeddable family is searched for in the usual
//! system font directories.

use std::path::{Path, PathBuf};

use chrono::Local;
use genpdf::elements::{Break, Paragraph};
use genpdf::style::Style;
use genpdf::{fonts, Document, Element, PaperSize, SimplePageDecorator};
use tracing::info;

use crate::analysis::checks::tally_categories;
use crate::errors::SecsumError;
use crate::models::{CheckRecord, Scorecard};

/// Everything the rendered report draws from, borrowed from the run that
/// produced it.
pub struct ReportData<'a> {
    pub records: &'a [CheckRecord],
    pub risks: &'a [&'a CheckRecord],
    pub errors: &'a [&'a str],
    pub warnings: &'a [&'a str],
    pub scorecard: Scorecard,
}

/// Terminal pipeline stage. The pipeline invokes whichever sink it was
/// handed, or none at all.
pub trait DocumentSink {
    /// Renders `data` and returns the path written.
    fn render(&self, data: &ReportData<'_>) -> Result<PathBuf, SecsumError>;
}

/// Directories searched for an embeddable font family.
const FONT_DIRS: &[&str] = &[
    "./fonts",
    "/usr/share/fonts/liberation",
    "/usr/share/fonts/truetype/liberation",
    "/usr/share/fonts/truetype/dejavu",
];

const FONT_FAMILIES: &[&str] = &["LiberationSans", "DejaVuSans"];

/// Renders the combined report as an A4 PDF at a fixed output path.
pub struct PdfDocument {
    output: PathBuf,
}

impl PdfDocument {
    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self {
            output: output.into(),
        }
    }

    fn font_family() -> Result<fonts::FontFamily<fonts::FontData>, SecsumError> {
        for dir in FONT_DIRS {
            if !Path::new(dir).exists() {
                continue;
            }
            for family in FONT_FAMILIES {
                if let Ok(found) = fonts::from_files(dir, family, None) {
                    return Ok(found);
                }
            }
        }
        Err(SecsumError::Document(format!(
            "no embeddable font family found, searched {:?}",
            FONT_DIRS
        )))
    }
}

impl DocumentSink for PdfDocument {
    fn render(&self, data: &ReportData<'_>) -> Result<PathBuf, SecsumError> {
        let mut doc = Document::new(Self::font_family()?);
        doc.set_title("Security Report");
        doc.set_paper_size(PaperSize::A4);
        doc.set_minimal_conformance();
        doc.set_line_spacing(1.25);

        let mut decorator = SimplePageDecorator::new();
        decorator.set_margins(20);
        doc.set_page_decorator(decorator);

        doc.push(Paragraph::new("Security Report").styled(Style::new().bold().with_font_size(18)));
        doc.push(Break::new(1.0));
        doc.push(Paragraph::new(format!(
            "Generated: {}",
            Local::now().format("%Y-%m-%d %H:%M:%S")
        )));
        doc.push(Break::new(1.0));

        doc.push(Paragraph::new("Summary").styled(Style::new().bold().with_font_size(14)));
        doc.push(Paragraph::new(format!(
            "Security score: {}/100 ({})",
            data.scorecard.score,
            data.scorecard.band.label()
        )));
        doc.push(Paragraph::new(format!(
            "Critical findings (host checks): {}",
            data.risks.len()
        )));
        doc.push(Paragraph::new(format!("Errors in log: {}", data.errors.len())));
        doc.push(Paragraph::new(format!(
            "Warnings in log: {}",
            data.warnings.len()
        )));
        doc.push(Break::new(1.0));

        doc.push(
            Paragraph::new("Host checks by category").styled(Style::new().bold().with_font_size(14)),
        );
        for (category, count) in tally_categories(data.records)? {
            doc.push(Paragraph::new(format!("- {}: {}", category, count)));
        }
        doc.push(Break::new(1.0));

        if !data.risks.is_empty() {
            doc.push(
                Paragraph::new("Critical findings").styled(Style::new().bold().with_font_size(14)),
            );
            for risk in data.risks {
                let line = [
                    risk.require("Category")?,
                    risk.require("SubCategory")?,
                    risk.require("Detail")?,
                ]
                .join(" | ");
                doc.push(Paragraph::new(line));
            }
        }

        doc.render_to_file(&self.output)
            .map_err(|e| SecsumError::Document(e.to_string()))?;
        info!(path = %self.output.display(), "document rendered");
        Ok(self.output.clone())
    }
}
