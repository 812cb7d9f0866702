/*!
 * Compaction
 * Slides live allocations toward address zero to eliminate external fragmentation
 */

use super::{FitMemory, FitPolicy};
use crate::core::types::Address;
use crate::types::CellStatus;
use log::info;

impl<P: FitPolicy> FitMemory<P> {
    /// Pack every live allocation against address zero
    ///
    /// Walks the records in ascending current-address order with a cursor
    /// starting at 0: free the old range, claim `[cursor, cursor + size)`,
    /// redirect the handle, move the data, advance the cursor. Relative
    /// order, contents, and handle identity are all preserved; total free
    /// space is unchanged.
    pub(super) fn compact(&mut self) {
        let mut cursor: Address = 0;
        for record in self.layout.ordered(&self.handles) {
            let address = self.handles.address_of(record.handle);
            let data = self.store.read(address, record.size).to_vec();

            self.layout
                .mark(address, address + record.size, CellStatus::Free);
            self.layout
                .mark(cursor, cursor + record.size, CellStatus::Allocated);

            self.handles.redirect(record.handle, cursor);
            self.store.write(cursor, &data);

            cursor += record.size;
        }
        info!(
            "{}: compaction packed live data into [0, {})",
            P::NAME,
            cursor
        );
    }
}
