use std::path::Path;

use tracing_subscriber::EnvFilter;

use secsum::config;
use secsum::errors::SecsumError;
use secsum::pipeline::Pipeline;
use secsum::reporting::console;
use secsum::reporting::document::PdfDocument;

fn main() {
    // Diagnostics default to warn so they stay out of the summary output.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    console::section("COMBINED SECURITY REPORT");

    let sink = PdfDocument::new(config::REPORT_PATH);
    let pipeline = Pipeline::with_document(&sink);
    let result = pipeline.run(Path::new(config::CHECKS_PATH), Path::new(config::LOG_PATH));

    match result {
        Ok(_) => console::section("Report complete"),
        Err(e) => {
            eprintln!("Error: {}", e);
            let exit_code = match &e {
                SecsumError::MissingDataset(_) => 2,
                _ => 1,
            };
            std::process::exit(exit_code);
        }
    }
}
