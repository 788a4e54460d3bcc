use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::{debug, info};

use crate::errors::SecsumError;
use crate::models::CheckRecord;
use crate::reporting::console;

/// Loads the check dataset. The header row drives the field set of every
/// record; rows shorter than the header are padded with empty values and
/// longer rows lose their unlabeled tail. A missing file is the one fatal
/// condition in the program.
pub fn load_checks(path: &Path) -> Result<Vec<CheckRecord>, SecsumError> {
    if !path.exists() {
        console::fail(&format!("Check dataset missing: {}", path.display()));
        return Err(SecsumError::MissingDataset(path.to_path_buf()));
    }

    let raw = fs::read_to_string(path)?;
    let data = raw.strip_prefix('\u{feff}').unwrap_or(&raw);

    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .from_reader(data.as_bytes());
    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    let mut records = Vec::new();
    for row in reader.records() {
        let Ok(row) = row else {
            debug!("skipping malformed row");
            continue;
        };
        let fields: BTreeMap<String, String> = headers
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), row.get(i).unwrap_or("").to_string()))
            .collect();
        records.push(CheckRecord::new(fields));
    }

    info!(rows = records.len(), path = %path.display(), "check dataset loaded");
    console::ok(&format!("Check dataset loaded ({} rows)", records.len()));
    Ok(records)
}
