//! Unified Result Model
//!
//! Every command maps its output to this model before rendering.

use serde::{Deserialize, Serialize};

use crate::lookup::icons::Icon;
use crate::sheet::record::Record;

/// The kind of result item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Entry,
    Category,
    Status,
    Notice,
}

/// Where the records behind a result came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceMode {
    Remote,
    File,
    Fallback,
}

/// Severity of a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// A user-visible, non-fatal message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub code: String,
    pub message: String,
    pub severity: Severity,
}

impl Notice {
    pub fn new(code: impl Into<String>, message: impl Into<String>, severity: Severity) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            severity,
        }
    }

    pub fn warning(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(code, message, Severity::Warning)
    }

    pub fn info(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(code, message, Severity::Info)
    }
}

/// Metadata for a result item
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    /// When the records were loaded (RFC 3339)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loaded_at: Option<String>,

    /// Number of records held
    #[serde(skip_serializing_if = "Option::is_none")]
    pub records: Option<usize>,

    /// Number of distinct categories held
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<usize>,

    /// Whether the excerpt was truncated
    #[serde(default)]
    pub truncated: bool,
}

/// The unified result item that all commands produce
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultItem {
    pub kind: Kind,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,

    /// Only present for expanded entries
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,

    /// Records per category
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,

    /// 1-based source line, for sheet diagnostics
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,

    /// Source text the item refers to (may be truncated)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,

    pub source_mode: SourceMode,

    pub meta: Meta,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notices: Vec<Notice>,
}

impl ResultItem {
    fn empty(kind: Kind, source_mode: SourceMode) -> Self {
        Self {
            kind,
            id: None,
            category: None,
            icon: None,
            question: None,
            answer: None,
            keywords: None,
            count: None,
            line: None,
            excerpt: None,
            source_mode,
            meta: Meta::default(),
            notices: Vec::new(),
        }
    }

    /// Create an entry card; the answer is only included when expanded
    pub fn entry(record: &Record, source_mode: SourceMode, expanded: bool) -> Self {
        Self {
            id: Some(record.id),
            category: Some(record.category.clone()),
            icon: Some(Icon::for_category(&record.category)),
            question: Some(record.question.clone()),
            answer: expanded.then(|| record.answer.clone()),
            keywords: (!record.keywords.is_empty()).then(|| record.keywords.clone()),
            ..Self::empty(Kind::Entry, source_mode)
        }
    }

    /// Create a category result
    pub fn category(name: impl Into<String>, count: usize, source_mode: SourceMode) -> Self {
        let name = name.into();
        Self {
            icon: Some(Icon::for_category(&name)),
            category: Some(name),
            count: Some(count),
            ..Self::empty(Kind::Category, source_mode)
        }
    }

    /// Create a status result
    pub fn status(source_mode: SourceMode, meta: Meta) -> Self {
        Self::empty(Kind::Status, source_mode).with_meta(meta)
    }

    /// Create a notice result
    pub fn notice(notice: Notice, source_mode: SourceMode) -> Self {
        Self::empty(Kind::Notice, source_mode).with_notice(notice)
    }

    pub fn with_meta(mut self, meta: Meta) -> Self {
        self.meta = meta;
        self
    }

    pub fn with_notice(mut self, notice: Notice) -> Self {
        self.notices.push(notice);
        self
    }

    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    pub fn with_excerpt(mut self, excerpt: impl Into<String>, truncated: bool) -> Self {
        self.excerpt = Some(excerpt.into());
        self.meta.truncated = truncated;
        self
    }
}

/// Result set containing multiple result items, in output order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResultSet {
    pub items: Vec<ResultItem>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn push(&mut self, item: ResultItem) {
        self.items.push(item);
    }

    pub fn extend(&mut self, items: impl IntoIterator<Item = ResultItem>) {
        self.items.extend(items);
    }

    /// Items of one kind, in order
    pub fn of_kind(&self, kind: Kind) -> impl Iterator<Item = &ResultItem> {
        self.items.iter().filter(move |item| item.kind == kind)
    }
}

impl FromIterator<ResultItem> for ResultSet {
    fn from_iter<T: IntoIterator<Item = ResultItem>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> Record {
        Record {
            id: 100,
            category: "Travel".to_string(),
            question: "When does the bus leave?".to_string(),
            answer: "At 08:00".to_string(),
            keywords: "bus".to_string(),
        }
    }

    #[test]
    fn test_entry_collapsed_hides_answer() {
        let item = ResultItem::entry(&record(), SourceMode::Remote, false);
        assert_eq!(item.kind, Kind::Entry);
        assert_eq!(item.id, Some(100));
        assert_eq!(item.icon, Some(Icon::Bus));
        assert!(item.answer.is_none());
        assert_eq!(item.keywords.as_deref(), Some("bus"));
    }

    #[test]
    fn test_entry_expanded_includes_answer() {
        let item = ResultItem::entry(&record(), SourceMode::File, true);
        assert_eq!(item.answer.as_deref(), Some("At 08:00"));
        assert_eq!(item.source_mode, SourceMode::File);
    }

    #[test]
    fn test_entry_without_keywords() {
        let mut rec = record();
        rec.keywords.clear();
        let item = ResultItem::entry(&rec, SourceMode::Fallback, false);
        assert!(item.keywords.is_none());
    }

    #[test]
    fn test_notice_item() {
        let item = ResultItem::notice(
            Notice::warning("FETCH_FAILURE", "Could not fetch"),
            SourceMode::Fallback,
        );
        assert_eq!(item.kind, Kind::Notice);
        assert_eq!(item.notices.len(), 1);
        assert_eq!(item.notices[0].severity, Severity::Warning);
    }

    #[test]
    fn test_serialization_skips_empty_fields() {
        let item = ResultItem::category("Hotel", 2, SourceMode::Remote);
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["kind"], "category");
        assert_eq!(json["category"], "Hotel");
        assert_eq!(json["count"], 2);
        assert_eq!(json["icon"], "map_pin");
        assert!(json.get("question").is_none());
        assert!(json.get("notices").is_none());
    }

    #[test]
    fn test_result_set_preserves_order() {
        let mut set = ResultSet::new();
        set.push(ResultItem::category("B", 1, SourceMode::Remote));
        set.push(ResultItem::category("A", 1, SourceMode::Remote));
        assert_eq!(set.items.len(), 2);
        assert_eq!(set.items[0].category.as_deref(), Some("B"));
        assert_eq!(set.of_kind(Kind::Category).count(), 2);
        assert_eq!(set.of_kind(Kind::Entry).count(), 0);
    }
}
