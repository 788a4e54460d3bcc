use std::collections::BTreeMap;

use crate::errors::SecsumError;

/// One row of the check dataset, keyed by the header row of the file that
/// produced it. The field set is whatever the collector emitted; only the
/// fields an analysis step actually reads are ever validated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckRecord {
    fields: BTreeMap<String, String>,
}

impl CheckRecord {
    pub fn new(fields: BTreeMap<String, String>) -> Self {
        Self { fields }
    }

    /// Value of `name`, if the header carried that column.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Value of `name`, failing with a missing-field error when the dataset
    /// header did not carry that column.
    pub fn require(&self, name: &str) -> Result<&str, SecsumError> {
        self.field(name)
            .ok_or_else(|| SecsumError::MissingField(name.to_string()))
    }
}
