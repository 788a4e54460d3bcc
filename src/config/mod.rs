//! Fixed paths and classification markers.
//!
//! The program takes no flags and reads no environment; everything that could
//! vary lives here as a constant. The markers are the literal substrings the
//! upstream collectors write, matched case-sensitively.

/// Host check results exported by the Windows-side collector.
pub const CHECKS_PATH: &str = "SecurityReport.csv";

/// Operational log written by the Linux-side collector.
pub const LOG_PATH: &str = "logs.log";

/// Rendered report destination.
pub const REPORT_PATH: &str = "Security_Report.pdf";

/// `SubCategory` marker for missing/absent components.
pub const MISSING_MARKER: &str = "Saknade";

/// `Category` marker for firewall checks.
pub const FIREWALL_MARKER: &str = "Brandvägg";

/// Log-line marker for errors.
pub const ERROR_MARKER: &str = "FEL";

/// Log-line marker for warnings.
pub const WARNING_MARKER: &str = "VARNING";
