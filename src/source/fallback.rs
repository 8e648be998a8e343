//! Built-in entries shown until a sheet has loaded

use crate::sheet::record::Record;

pub fn fallback_records() -> Vec<Record> {
    vec![
        Record {
            id: 1,
            category: "Travel".to_string(),
            question: "Example: when does the bus leave? (built-in data)".to_string(),
            answer: "This is sample data. Connect a published spreadsheet to show your own info!"
                .to_string(),
            keywords: "bus test".to_string(),
        },
        Record {
            id: 2,
            category: "Packing list".to_string(),
            question: "How do I add my own info?".to_string(),
            answer: "Publish a sheet with the columns category, question, answer and keywords \
as CSV, then pass its link with --url or TRIPINFO_SHEET_URL."
                .to_string(),
            keywords: "help info".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheet::record::ID_OFFSET;

    #[test]
    fn test_fallback_ids_stay_below_parsed_ids() {
        let records = fallback_records();
        assert!(!records.is_empty());
        assert!(records.iter().all(|r| r.id < ID_OFFSET));
    }
}
