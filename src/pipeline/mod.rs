//! Stage orchestration: ingest, analyze, score, and optionally render.

use std::path::Path;

use crate::analysis::{analyze_checks, analyze_log, assess};
use crate::errors::SecsumError;
use crate::ingest::{load_checks, load_log};
use crate::models::Scorecard;
use crate::reporting::console;
use crate::reporting::document::{DocumentSink, ReportData};

/// One run of the report pipeline. The document stage is injected; a
/// pipeline without a sink stops after the console assessment.
pub struct Pipeline<'a> {
    document: Option<&'a dyn DocumentSink>,
}

impl<'a> Pipeline<'a> {
    pub fn new() -> Self {
        Self { document: None }
    }

    pub fn with_document(sink: &'a dyn DocumentSink) -> Self {
        Self {
            document: Some(sink),
        }
    }

    /// Runs every stage in order and returns the derived scorecard.
    pub fn run(&self, checks_path: &Path, log_path: &Path) -> Result<Scorecard, SecsumError> {
        let records = load_checks(checks_path)?;
        let lines = load_log(log_path)?;

        let risks = analyze_checks(&records)?;
        let findings = analyze_log(&lines);

        let scorecard = assess(risks.len(), findings.errors.len(), findings.warnings.len());

        if let Some(sink) = self.document {
            let data = ReportData {
                records: &records,
                risks: &risks,
                errors: &findings.errors,
                warnings: &findings.warnings,
                scorecard,
            };
            let path = sink.render(&data)?;
            console::ok(&format!("Document rendered: {}", path.display()));
        }

        Ok(scorecard)
    }
}

impl Default for Pipeline<'_> {
    fn default() -> Self {
        Self::new()
    }
}
