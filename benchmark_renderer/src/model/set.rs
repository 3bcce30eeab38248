//!
//! Benchmark records grouped by their parent benchmark.
//!

use std::collections::HashMap;

use crate::model::record::Record;

///
/// Benchmark records grouped by their parent benchmark.
///
/// Groups keep the order in which their first record was seen, and records
/// keep their parse order within a group.
///
#[derive(Debug, Default, Clone, PartialEq)]
pub struct BenchmarkSet {
    /// The groups, in first-seen order.
    groups: Vec<(String, Vec<Record>)>,
    /// Group indexes used to find the bucket of a parent name.
    group_ids: HashMap<String, usize>,
}

impl BenchmarkSet {
    ///
    /// Appends a record to the bucket of its parent benchmark, creating the bucket if needed.
    ///
    pub fn push(&mut self, record: Record) {
        let group_name = record.group_name();
        let group_id = match self.group_ids.get(group_name) {
            Some(group_id) => *group_id,
            None => {
                let group_id = self.groups.len();
                self.group_ids.insert(group_name.to_owned(), group_id);
                self.groups.push((group_name.to_owned(), Vec::new()));
                group_id
            }
        };
        self.groups[group_id].1.push(record);
    }

    ///
    /// Returns the records of a group, if present.
    ///
    pub fn get(&self, group_name: &str) -> Option<&[Record]> {
        self.group_ids
            .get(group_name)
            .map(|group_id| self.groups[*group_id].1.as_slice())
    }

    ///
    /// Iterates over the groups in first-seen order.
    ///
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Record])> {
        self.groups
            .iter()
            .map(|(name, records)| (name.as_str(), records.as_slice()))
    }

    ///
    /// Returns the group names in first-seen order.
    ///
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|(name, _)| name.as_str())
    }

    /// The number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether there are no groups.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl FromIterator<Record> for BenchmarkSet {
    fn from_iter<I: IntoIterator<Item = Record>>(records: I) -> Self {
        let mut set = Self::default();
        for record in records {
            set.push(record);
        }
        set
    }
}

impl From<Vec<Record>> for BenchmarkSet {
    fn from(records: Vec<Record>) -> Self {
        records.into_iter().collect()
    }
}

impl IntoIterator for BenchmarkSet {
    type Item = (String, Vec<Record>);
    type IntoIter = std::vec::IntoIter<(String, Vec<Record>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::model::record::Record;

    use super::BenchmarkSet;

    fn named(name: &str) -> Record {
        Record {
            name: name.to_owned(),
            ..Default::default()
        }
    }

    fn names(records: &[Record]) -> Vec<&str> {
        records.iter().map(|record| record.name.as_str()).collect()
    }

    #[test]
    fn groups_by_parent_name() {
        let set = BenchmarkSet::from(vec![named("A/X"), named("A/Y"), named("B/Z")]);

        assert_eq!(set.len(), 2);
        assert_eq!(names(set.get("A").expect("Always exists")), vec!["A/X", "A/Y"]);
        assert_eq!(names(set.get("B").expect("Always exists")), vec!["B/Z"]);
    }

    #[test]
    fn keeps_first_seen_order() {
        let set = BenchmarkSet::from(vec![
            named("B/1"),
            named("A/1"),
            named("B/2"),
            named("C"),
            named("A/2"),
        ]);

        assert_eq!(set.names().collect::<Vec<_>>(), vec!["B", "A", "C"]);
        assert_eq!(names(set.get("B").expect("Always exists")), vec!["B/1", "B/2"]);
        assert_eq!(names(set.get("A").expect("Always exists")), vec!["A/1", "A/2"]);
        assert_eq!(names(set.get("C").expect("Always exists")), vec!["C"]);
    }

    #[test]
    fn neither_drops_nor_duplicates() {
        let records = vec![named("A/X"), named("A/X"), named("B/Z"), named("A/Y")];
        let set = BenchmarkSet::from(records.clone());

        let total: usize = set.iter().map(|(_, records)| records.len()).sum();
        assert_eq!(total, records.len());
        for (group_name, records) in set.iter() {
            assert!(records.iter().all(|record| record.group_name() == group_name));
        }
    }

    #[test]
    fn empty() {
        let set = BenchmarkSet::from(Vec::new());
        assert!(set.is_empty());
        assert_eq!(set.get("A"), None);
    }
}
