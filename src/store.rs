use crate::model::{RadioRecord, RecordUpdate};
use log::{debug, trace};

/// In-memory catalog for the running session. Insertion order is preserved;
/// ids are not required to be unique and every lookup takes the first match.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordStore {
    records: Vec<RadioRecord>,
}

impl RecordStore {
    pub fn from_records(records: Vec<RadioRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[RadioRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn find_by_id(&self, id: i32) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }

    /// Replaces the six non-id fields of the first record with `id`.
    /// Returns the updated record, or `None` when no record matched.
    pub fn edit(&mut self, id: i32, update: RecordUpdate) -> Option<&RadioRecord> {
        let idx = self.find_by_id(id)?;
        let rec = &mut self.records[idx];
        rec.apply(update);
        debug!("edited record id={} at index {}", id, idx);
        Some(&*rec)
    }

    /// Removes the first record with `id`; later records shift down by one.
    pub fn delete(&mut self, id: i32) -> Option<RadioRecord> {
        let idx = self.find_by_id(id)?;
        let removed = self.records.remove(idx);
        self.records.shrink_to_fit();
        debug!("deleted record id={} at index {}, {} left", id, idx, self.records.len());
        Some(removed)
    }

    /// `None` for an empty catalog.
    pub fn average_weight(&self) -> Option<f64> {
        if self.records.is_empty() {
            return None;
        }
        let total: f64 = self.records.iter().map(|r| r.weight).sum();
        trace!("total weight {} over {} records", total, self.records.len());
        Some(total / self.records.len() as f64)
    }
}
