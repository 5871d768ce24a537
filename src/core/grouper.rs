use crate::domain::model::{LabelGroup, LabelRecord};
use std::collections::HashMap;

/// Partitions records into groups keyed by model. Groups are emitted in
/// first-seen order of the model value; within a group the original record
/// order is preserved. Model comparison is exact and case-sensitive.
pub fn group(records: Vec<LabelRecord>) -> Vec<LabelGroup> {
    let mut groups: Vec<LabelGroup> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in records {
        match index.get(&record.model) {
            Some(&i) => groups[i].items.push(record),
            None => {
                index.insert(record.model.clone(), groups.len());
                groups.push(LabelGroup {
                    key: record.model.clone(),
                    items: vec![record],
                });
            }
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(model: &str, serial: &str) -> LabelRecord {
        LabelRecord {
            model: model.to_string(),
            gtin: "000".to_string(),
            production_date: "2024-01".to_string(),
            serial: serial.to_string(),
        }
    }

    #[test]
    fn test_groups_in_first_seen_order() {
        let grouped = group(vec![
            record("B", "1"),
            record("A", "2"),
            record("B", "3"),
            record("C", "4"),
            record("A", "5"),
        ]);

        let keys: Vec<&str> = grouped.iter().map(|g| g.key.as_str()).collect();
        assert_eq!(keys, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_within_group_order_is_stable() {
        let grouped = group(vec![
            record("B", "1"),
            record("A", "2"),
            record("B", "3"),
            record("B", "4"),
        ]);

        let serials: Vec<&str> = grouped[0].items.iter().map(|r| r.serial.as_str()).collect();
        assert_eq!(serials, vec!["1", "3", "4"]);
    }

    #[test]
    fn test_every_record_lands_in_exactly_one_group() {
        let input = vec![record("A", "1"), record("B", "2"), record("A", "3")];
        let grouped = group(input.clone());

        let total: usize = grouped.iter().map(|g| g.items.len()).sum();
        assert_eq!(total, input.len());
    }

    #[test]
    fn test_model_match_is_case_sensitive() {
        let grouped = group(vec![record("a", "1"), record("A", "2")]);
        assert_eq!(grouped.len(), 2);
    }

    #[test]
    fn test_empty_input() {
        assert!(group(Vec::new()).is_empty());
    }
}
