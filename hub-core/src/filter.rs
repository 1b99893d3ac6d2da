//! Filter stage: case-insensitive substring match on record names.

use crate::record::Record;

/// Borrow every record whose name contains `query`, ignoring case.
///
/// An empty query matches everything. Input order is preserved.
pub fn filter<'a>(records: &'a [Record], query: &str) -> Vec<&'a Record> {
    if query.is_empty() {
        return records.iter().collect();
    }
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|record| record.name.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Category;

    fn items(count: u32) -> Vec<Record> {
        (1..=count)
            .map(|id| Record {
                id,
                name: format!("Item {}", id),
                value: id * 10,
                category: Category::C,
                insight: None,
            })
            .collect()
    }

    #[test]
    fn test_empty_query_returns_all() {
        let records = items(20);
        assert_eq!(filter(&records, "").len(), 20);
    }

    #[test]
    fn test_prefix_query_matches_teens() {
        let records = items(20);
        let ids: Vec<u32> = filter(&records, "Item 1").iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19]);
    }

    #[test]
    fn test_match_ignores_case() {
        let records = items(20);
        assert_eq!(filter(&records, "iTEM 1").len(), 11);
        assert_eq!(filter(&records, "item 20").len(), 1);
    }

    #[test]
    fn test_no_match_is_empty() {
        let records = items(20);
        assert!(filter(&records, "zzz_no_match").is_empty());
    }

    #[test]
    fn test_filter_does_not_touch_input() {
        let records = items(5);
        let before = records.clone();
        let _ = filter(&records, "3");
        assert_eq!(records, before);
    }
}
