//! Header resolution
//!
//! Maps raw column names to the known field keys. Names are trimmed and
//! lower-cased, so `Category` and ` category ` resolve to the same key.
//! Anything else is kept as an unknown column and ignored by records.

use std::collections::BTreeMap;

/// The four fields a record is built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldKey {
    Category,
    Question,
    Answer,
    Keywords,
}

impl FieldKey {
    pub const ALL: [FieldKey; 4] = [
        FieldKey::Category,
        FieldKey::Question,
        FieldKey::Answer,
        FieldKey::Keywords,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKey::Category => "category",
            FieldKey::Question => "question",
            FieldKey::Answer => "answer",
            FieldKey::Keywords => "keywords",
        }
    }
}

/// A resolved header column
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Column {
    Known(FieldKey),
    Unknown(String),
}

impl Column {
    /// Resolve a raw header name
    pub fn resolve(raw: &str) -> Self {
        let name = raw.trim().to_lowercase();
        FieldKey::ALL
            .iter()
            .find(|key| key.as_str() == name)
            .map(|key| Column::Known(*key))
            .unwrap_or(Column::Unknown(name))
    }
}

/// The header row of a sheet, one column per comma-separated name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub columns: Vec<Column>,
}

impl Header {
    pub fn parse(line: &str) -> Self {
        Self {
            columns: line.split(',').map(Column::resolve).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether the header names a given known field
    pub fn contains(&self, key: FieldKey) -> bool {
        self.columns.contains(&Column::Known(key))
    }

    /// Names of columns that do not map to a record field
    pub fn unknown_columns(&self) -> Vec<&str> {
        self.columns
            .iter()
            .filter_map(|c| match c {
                Column::Unknown(name) => Some(name.as_str()),
                Column::Known(_) => None,
            })
            .collect()
    }

    /// Assign cleaned row tokens to columns by position.
    ///
    /// Extra tokens and values under unknown columns are dropped; columns
    /// without a token get no value.
    /// When a key appears twice the later column wins.
    pub fn assign(&self, tokens: &[String]) -> RowFields {
        let mut fields = RowFields::default();
        for (column, value) in self.columns.iter().zip(tokens) {
            if let Column::Known(key) = column {
                fields.known.insert(*key, value.clone());
            }
        }
        fields
    }
}

/// Values of one data row, keyed by field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowFields {
    pub known: BTreeMap<FieldKey, String>,
}

impl RowFields {
    pub fn get(&self, key: FieldKey) -> Option<&str> {
        self.known.get(&key).map(String::as_str)
    }
}
