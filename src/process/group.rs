use std::collections::HashMap;

use crate::process::types::{DateGroup, Record};

/// Group records by exact date, keyed by the date's ISO string form.
///
/// Group order follows the order each key was first seen in `records`;
/// member order within a group is input order. Every record lands in
/// exactly one group, so total count is preserved.
pub fn group_by_date(records: &[Record]) -> Vec<DateGroup> {
    let mut groups: Vec<DateGroup> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in records {
        let key = record.date.to_string();
        match index.get(&key).copied() {
            Some(i) => groups[i].values.push(record.clone()),
            None => {
                index.insert(key.clone(), groups.len());
                groups.push(DateGroup {
                    key,
                    values: vec![record.clone()],
                });
            }
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn rec(day: u32, cases: u64, borough: &str) -> Record {
        Record {
            date: NaiveDate::from_ymd_opt(2020, 3, day).unwrap(),
            cases,
            borough: borough.into(),
        }
    }

    #[test]
    fn groups_follow_first_seen_key_order() {
        let records = vec![
            rec(7, 2, "Brooklyn"),
            rec(8, 5, "Brooklyn"),
            rec(7, 1, "Bronx"),
            rec(8, 1, "Bronx"),
        ];
        let groups = group_by_date(&records);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].key, "2020-03-07");
        assert_eq!(groups[1].key, "2020-03-08");
        assert_eq!(groups[0].values, vec![rec(7, 2, "Brooklyn"), rec(7, 1, "Bronx")]);
        assert_eq!(groups[1].values, vec![rec(8, 5, "Brooklyn"), rec(8, 1, "Bronx")]);
    }

    #[test]
    fn every_member_key_matches_its_own_date() {
        let records = vec![rec(7, 2, "Brooklyn"), rec(8, 5, "Queens"), rec(7, 3, "Bronx")];
        for group in group_by_date(&records) {
            for member in &group.values {
                assert_eq!(member.date.to_string(), group.key);
            }
        }
    }

    #[test]
    fn preserves_total_record_count() {
        let records = vec![
            rec(7, 2, "Brooklyn"),
            rec(7, 1, "Bronx"),
            rec(9, 4, "Queens"),
            rec(8, 5, "Brooklyn"),
            rec(9, 6, "Manhattan"),
        ];
        let groups = group_by_date(&records);
        let total: usize = groups.iter().map(|g| g.values.len()).sum();
        assert_eq!(total, records.len());
    }

    #[test]
    fn rerun_is_deterministic() {
        let records = vec![
            rec(9, 4, "Queens"),
            rec(7, 2, "Brooklyn"),
            rec(9, 6, "Manhattan"),
            rec(7, 1, "Bronx"),
        ];
        assert_eq!(group_by_date(&records), group_by_date(&records));
    }

    #[test]
    fn empty_input_yields_no_groups() {
        assert!(group_by_date(&[]).is_empty());
    }
}
