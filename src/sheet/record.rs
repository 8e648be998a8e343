//! Record - one question/answer entry

use serde::{Deserialize, Serialize};

use crate::sheet::header::{FieldKey, RowFields};

/// Category used when a row leaves it blank
pub const DEFAULT_CATEGORY: &str = "Info";
pub const DEFAULT_QUESTION: &str = "Question missing";
pub const DEFAULT_ANSWER: &str = "Answer missing";

/// Parsed ids start here so they never collide with the built-in entries.
pub const ID_OFFSET: u32 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: u32,
    pub category: String,
    pub question: String,
    pub answer: String,
    pub keywords: String,
}

impl Record {
    /// Build the record for the data row at `index`, substituting defaults
    /// for absent or empty fields.
    pub fn from_fields(index: usize, fields: &RowFields) -> Self {
        Self {
            id: ID_OFFSET + index as u32,
            category: or_default(fields.get(FieldKey::Category), DEFAULT_CATEGORY),
            question: or_default(fields.get(FieldKey::Question), DEFAULT_QUESTION),
            answer: or_default(fields.get(FieldKey::Answer), DEFAULT_ANSWER),
            keywords: fields.get(FieldKey::Keywords).unwrap_or_default().to_string(),
        }
    }
}

fn or_default(value: Option<&str>, default: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => default.to_string(),
    }
}
