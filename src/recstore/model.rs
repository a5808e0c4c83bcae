use serde::{Deserialize, Serialize};

/// A single stored entity. `id` is the only field the store looks at.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Record {
    pub id: String,
    pub email: String,
    pub age: i64,
}

impl Record {
    pub fn new(id: impl Into<String>, email: impl Into<String>, age: i64) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            age,
        }
    }
}

/// Ordered collection of records backing one file. Insertion order is kept.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Store {
    records: Vec<Record>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First record whose id matches, by linear scan.
    pub fn find(&self, id: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Removes the first record with a matching id, keeping the order of the rest.
    pub fn remove(&mut self, id: &str) -> Option<Record> {
        let pos = self.records.iter().position(|r| r.id == id)?;
        Some(self.records.remove(pos))
    }
}

impl From<Vec<Record>> for Store {
    fn from(records: Vec<Record>) -> Self {
        Self { records }
    }
}
