//! Dataset representation for validation.
//!
//! A dataset is the ordered list of records loaded from one data document.

use crate::Record;

/// A dataset containing one or more records.
#[derive(Debug, Clone, Default)]
pub struct DataSet {
    /// The records, in document order
    records: Vec<Record>,
}

impl DataSet {
    /// Creates a new empty dataset.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the number of records in the dataset.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns an iterator over the records.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Gets a specific record by index.
    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    /// Adds a record to the dataset.
    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Takes the first `size` records.
    ///
    /// If `size` is greater than the number of records, returns all of them.
    pub fn sample(&self, size: usize) -> DataSet {
        DataSet {
            records: self.records.iter().take(size).cloned().collect(),
        }
    }
}

impl From<Record> for DataSet {
    fn from(record: Record) -> Self {
        Self {
            records: vec![record],
        }
    }
}

impl FromIterator<Record> for DataSet {
    fn from_iter<T: IntoIterator<Item = Record>>(iter: T) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DataValue;

    #[test]
    fn test_dataset_operations() {
        let mut dataset = DataSet::empty();
        assert_eq!(dataset.len(), 0);
        assert!(dataset.is_empty());

        let mut record = Record::new();
        record.insert("id".to_string(), DataValue::from(1i64));
        dataset.push(record);

        assert_eq!(dataset.len(), 1);
        assert!(!dataset.is_empty());

        let record = dataset.get(0).unwrap();
        assert_eq!(record.get("id"), Some(&DataValue::Number(1.0)));
    }

    #[test]
    fn test_dataset_sample() {
        let dataset: DataSet = (0..10)
            .map(|i| {
                let mut record = Record::new();
                record.insert("id".to_string(), DataValue::from(i as i64));
                record
            })
            .collect();

        assert_eq!(dataset.sample(5).len(), 5);
        assert_eq!(dataset.sample(100).len(), 10); // Only has 10 records
    }
}
