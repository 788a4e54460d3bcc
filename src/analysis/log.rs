use crate::config::{ERROR_MARKER, WARNING_MARKER};
use crate::reporting::console;

/// Log lines classified by severity marker, in file order. The two checks
/// are independent; a line carrying both markers appears in both sequences.
#[derive(Debug, Default)]
pub struct LogFindings<'a> {
    pub errors: Vec<&'a str>,
    pub warnings: Vec<&'a str>,
}

pub fn classify_lines(lines: &[String]) -> LogFindings<'_> {
    LogFindings {
        errors: lines
            .iter()
            .filter(|line| line.contains(ERROR_MARKER))
            .map(String::as_str)
            .collect(),
        warnings: lines
            .iter()
            .filter(|line| line.contains(WARNING_MARKER))
            .map(String::as_str)
            .collect(),
    }
}

/// Prints the log section of the console summary and returns the classified
/// lines for scoring and reporting.
pub fn analyze_log(lines: &[String]) -> LogFindings<'_> {
    console::section("Log analysis");

    let findings = classify_lines(lines);
    if findings.errors.is_empty() {
        console::ok("No errors in the log");
    } else {
        console::fail(&format!("{} errors found in the log", findings.errors.len()));
    }
    if findings.warnings.is_empty() {
        console::ok("No warnings in the log");
    } else {
        console::warn(&format!(
            "{} warnings found in the log",
            findings.warnings.len()
        ));
    }
    findings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn classifies_by_substring_marker() {
        let lines = lines(&[
            "2024-01-01 boot ok\n",
            "2024-01-01 FEL: disk full\n",
            "2024-01-01 VARNING: swap high\n",
            "2024-01-01 shutdown\n",
        ]);

        let findings = classify_lines(&lines);
        assert_eq!(findings.errors.len(), 1);
        assert_eq!(findings.warnings.len(), 1);
        assert!(findings.errors[0].contains("disk full"));
    }

    #[test]
    fn markers_are_case_sensitive() {
        let lines = lines(&["fel: lowercase\n", "varning: lowercase\n"]);
        let findings = classify_lines(&lines);
        assert!(findings.errors.is_empty());
        assert!(findings.warnings.is_empty());
    }

    #[test]
    fn line_with_both_markers_counts_twice() {
        let lines = lines(&["FEL efter VARNING i samma rad\n"]);
        let findings = classify_lines(&lines);
        assert_eq!(findings.errors.len(), 1);
        assert_eq!(findings.warnings.len(), 1);
    }

    #[test]
    fn empty_input_needs_no_special_casing() {
        let findings = classify_lines(&[]);
        assert!(findings.errors.is_empty());
        assert!(findings.warnings.is_empty());
    }
}
