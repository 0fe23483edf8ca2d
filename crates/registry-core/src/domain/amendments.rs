//! # Amendment Log
//!
//! Latest-amendment-per-item store. The log keeps exactly one record per
//! item id; each successful update overwrites the previous record, so a
//! lookup always answers what changed last, when, and by whom.

use std::collections::HashMap;

use crate::domain::entities::AmendmentRecord;
use crate::domain::value_objects::ItemId;

// =============================================================================
// AMENDMENT LOG
// =============================================================================

/// Latest amendment per item id.
///
/// Items that were never amended have no entry. Deactivation does not
/// touch this log.
#[derive(Clone, Debug, Default)]
pub struct AmendmentLog {
    records: HashMap<ItemId, AmendmentRecord>,
}

impl AmendmentLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the amendment for an item, replacing any previous one.
    pub fn record(&mut self, id: ItemId, record: AmendmentRecord) {
        self.records.insert(id, record);
    }

    /// Returns the latest amendment applied to an item, if any.
    #[must_use]
    pub fn latest(&self, id: ItemId) -> Option<&AmendmentRecord> {
        self.records.get(&id)
    }

    /// Number of items amended at least once.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if no item was ever amended.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// =============================================================================
// TESTS
// =============================================================================
