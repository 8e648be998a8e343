//! Search and category filtering

use std::convert::Infallible;
use std::str::FromStr;

use crate::sheet::record::Record;

/// Category filter value that means "no restriction"
pub const ALL_CATEGORIES: &str = "All";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL_CATEGORIES {
            Ok(CategoryFilter::All)
        } else {
            Ok(CategoryFilter::Only(s.to_string()))
        }
    }
}

/// Records whose question, answer or keywords contain `search`
/// (case-insensitive) and whose category passes the filter. Order is kept.
pub fn filter<'a>(records: &'a [Record], search: &str, category: &CategoryFilter) -> Vec<&'a Record> {
    let needle = search.to_lowercase();
    records
        .iter()
        .filter(|record| category.matches(&record.category))
        .filter(|record| {
            record.question.to_lowercase().contains(&needle)
                || record.answer.to_lowercase().contains(&needle)
                || record.keywords.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Distinct categories in order of first appearance, with record counts
pub fn categories(records: &[Record]) -> Vec<(String, usize)> {
    let mut seen: Vec<(String, usize)> = Vec::new();
    for record in records {
        match seen.iter_mut().find(|(name, _)| *name == record.category) {
            Some((_, count)) => *count += 1,
            None => seen.push((record.category.clone(), 1)),
        }
    }
    seen
}
