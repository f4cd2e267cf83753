//! Loading funding records from JSON.
//!
//! Input is an array of objects:
//!
//! ```json
//! [{"startup": "Ola", "investors": ["Tiger Global"], "verticals": ["Mobility"], "amount_usd": 250000000}]
//! ```
//!
//! `verticals` and `amount_usd` are optional. An `amount_usd` that is not a
//! JSON number (for example `"undisclosed"`) is treated as missing.

use crate::error::{CliError, Result};
use serde::Deserialize;
use std::fs;
use std::io::{self, Read};
use syndicate_domain::FundingRecord;

/// Read records from a file path, or from stdin when the path is `-`.
pub fn read_records(input: &str) -> Result<Vec<FundingRecord>> {
    let json_data = if input == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        fs::read_to_string(input)?
    };
    parse_records(&json_data)
}

/// Parse records from a JSON string.
pub fn parse_records(json_data: &str) -> Result<Vec<FundingRecord>> {
    let defs: Vec<RecordDefinition> = serde_json::from_str(json_data)?;

    if defs.is_empty() {
        return Err(CliError::InvalidInput("No funding records provided".to_string()));
    }

    Ok(defs.into_iter().map(RecordDefinition::into_record).collect())
}

/// Funding record as it appears in JSON input.
#[derive(Debug, Deserialize)]
struct RecordDefinition {
    #[serde(default)]
    startup: String,
    #[serde(default)]
    investors: Vec<String>,
    #[serde(default)]
    verticals: Vec<String>,
    #[serde(default)]
    amount_usd: serde_json::Value,
}

impl RecordDefinition {
    fn into_record(self) -> FundingRecord {
        let record = FundingRecord::new(self.startup, self.investors).with_verticals(self.verticals);
        match self.amount_usd.as_f64() {
            Some(amount) => record.with_amount(amount),
            None => record,
        }
    }
}
