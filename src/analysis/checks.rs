use std::collections::BTreeMap;

use crate::config::{FIREWALL_MARKER, MISSING_MARKER};
use crate::errors::SecsumError;
use crate::models::CheckRecord;
use crate::reporting::console;

/// Occurrences of each `Category` value, in lexical order. The console
/// analysis and the rendered document both derive their category blocks
/// through this function, so the two groupings cannot drift apart.
pub fn tally_categories(
    records: &[CheckRecord],
) -> Result<BTreeMap<String, usize>, SecsumError> {
    let mut tally = BTreeMap::new();
    for record in records {
        let category = record.require("Category")?;
        *tally.entry(category.to_string()).or_insert(0) += 1;
    }
    Ok(tally)
}

/// Records flagged as potentially critical: a `SubCategory` naming missing
/// components, or a `Category` naming the firewall. Both predicates are
/// tested for every record.
pub fn flag_risks(records: &[CheckRecord]) -> Result<Vec<&CheckRecord>, SecsumError> {
    let mut risks = Vec::new();
    for record in records {
        let sub = record.require("SubCategory")?;
        let category = record.require("Category")?;
        if sub.contains(MISSING_MARKER) || category.contains(FIREWALL_MARKER) {
            risks.push(record);
        }
    }
    Ok(risks)
}

/// Prints the host-check section of the console summary and returns the
/// flagged records for scoring and reporting.
pub fn analyze_checks(records: &[CheckRecord]) -> Result<Vec<&CheckRecord>, SecsumError> {
    console::section("Host check analysis");

    for (category, count) in tally_categories(records)? {
        console::info(&format!("{}: {} entries", category, count));
    }

    let risks = flag_risks(records)?;
    if risks.is_empty() {
        console::ok("No obvious critical findings");
    } else {
        console::warn(&format!("{} potentially critical findings", risks.len()));
    }
    Ok(risks)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(category: &str, sub: &str, detail: &str) -> CheckRecord {
        CheckRecord::new(
            [
                ("Category".to_string(), category.to_string()),
                ("SubCategory".to_string(), sub.to_string()),
                ("Detail".to_string(), detail.to_string()),
            ]
            .into_iter()
            .collect(),
        )
    }

    #[test]
    fn tally_counts_sum_to_row_count() {
        let records = vec![
            record("Konton", "Aktiva", "admin"),
            record("Konton", "Aktiva", "guest"),
            record("Tjänster", "Körs", "spooler"),
        ];

        let tally = tally_categories(&records).unwrap();
        assert_eq!(tally.len(), 2);
        assert_eq!(tally["Konton"], 2);
        assert_eq!(tally["Tjänster"], 1);
        assert_eq!(tally.values().sum::<usize>(), records.len());
    }

    #[test]
    fn risk_predicates_are_independent() {
        let records = vec![
            record("Uppdateringar", "Saknade uppdateringar", "KB5000"),
            record("Brandvägg", "Status", "av"),
            record("Konton", "Aktiva", "admin"),
        ];

        let risks = flag_risks(&records).unwrap();
        assert_eq!(risks.len(), 2);
        assert_eq!(risks[0].field("Detail"), Some("KB5000"));
        assert_eq!(risks[1].field("Category"), Some("Brandvägg"));
    }

    #[test]
    fn risk_count_grows_with_matching_records() {
        let mut records = vec![record("Konton", "Aktiva", "admin")];
        let before = flag_risks(&records).unwrap().len();

        records.push(record("Brandvägg", "Status", "av"));
        let after = flag_risks(&records).unwrap().len();
        assert!(after >= before);
        assert_eq!(after, before + 1);
    }

    #[test]
    fn missing_required_column_is_reported() {
        let records = vec![CheckRecord::new(
            [("Category".to_string(), "Konton".to_string())]
                .into_iter()
                .collect(),
        )];

        let err = flag_risks(&records).unwrap_err();
        assert!(matches!(err, SecsumError::MissingField(name) if name == "SubCategory"));
    }
}
