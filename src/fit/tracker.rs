/*!
 * Layout Tracker
 * Per-cell status plus the live allocation records
 */

use crate::core::types::{Address, Size};
use crate::store::{Handle, HandleTable};
use crate::types::CellStatus;

/// One live allocation: handle plus cell count
#[derive(Debug, Clone, Copy)]
pub(super) struct Record {
    pub handle: Handle,
    pub size: Size,
}

/// FREE/ALLOCATED status per cell plus the records of live allocations
///
/// Invariant: a cell is `Allocated` iff it falls inside exactly one record's
/// range, and no two records overlap.
#[derive(Debug)]
pub(super) struct LayoutTracker {
    status: Vec<CellStatus>,
    records: Vec<Record>,
}

impl LayoutTracker {
    pub fn new(size: Size) -> Self {
        Self {
            status: vec![CellStatus::Free; size],
            records: Vec::new(),
        }
    }

    pub fn status(&self) -> &[CellStatus] {
        &self.status
    }

    /// Set the status of every cell in `[from, to)`
    pub fn mark(&mut self, from: Address, to: Address, status: CellStatus) {
        for cell in &mut self.status[from..to] {
            *cell = status;
        }
    }

    pub fn insert(&mut self, handle: Handle, size: Size) {
        self.records.push(Record { handle, size });
    }

    pub fn remove(&mut self, handle: Handle) -> Option<Record> {
        let index = self.records.iter().position(|r| r.handle == handle)?;
        Some(self.records.swap_remove(index))
    }

    /// Live records in ascending current-address order
    pub fn ordered(&self, handles: &HandleTable) -> Vec<Record> {
        let mut records = self.records.clone();
        records.sort_by_key(|r| handles.address_of(r.handle));
        records
    }

    pub fn used_cells(&self) -> Size {
        self.records.iter().map(|r| r.size).sum()
    }

    pub fn live_allocations(&self) -> usize {
        self.records.len()
    }

    /// Maximal runs of equal status as `(first, last, status)`, in address order
    pub fn runs(&self) -> Vec<(Address, Address, CellStatus)> {
        let mut runs = Vec::new();
        let mut cells = self.status.iter().enumerate();
        let Some((_, &current)) = cells.next() else {
            return runs;
        };
        let mut current = current;
        let mut first = 0;
        for (i, &status) in cells {
            if status != current {
                runs.push((first, i - 1, current));
                current = status;
                first = i;
            }
        }
        runs.push((first, self.status.len() - 1, current));
        runs
    }
}
