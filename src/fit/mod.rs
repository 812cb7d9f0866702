/*!
 * Fit Strategies
 * First-fit and best-fit allocation over a tracked layout, with one-shot
 * compaction when a request cannot be placed
 */

mod compact;
mod policy;
mod tracker;

pub use policy::{BestFitPolicy, FirstFitPolicy, FitPolicy};

use crate::core::types::{Address, Size, Word};
use crate::store::{CellStore, Handle, HandleTable};
use crate::traits::{Allocator, MemoryInfo};
use crate::types::{CellStatus, MemoryError, MemoryResult, MemoryStats};
use log::{info, warn};
use std::fmt::Write as _;
use std::marker::PhantomData;
use tracker::LayoutTracker;

/// First-fit memory over a fixed cell count
pub type FirstFit = FitMemory<FirstFitPolicy>;

/// Best-fit memory over a fixed cell count
pub type BestFit = FitMemory<BestFitPolicy>;

/// Tracked-pointer memory, generic over the run-selection policy
pub struct FitMemory<P: FitPolicy> {
    store: CellStore,
    handles: HandleTable,
    layout: LayoutTracker,
    _policy: PhantomData<P>,
}

impl<P: FitPolicy> FitMemory<P> {
    /// Create a memory with `size` cells, all free
    pub fn new(size: Size) -> Self {
        info!("{} memory initialized with {} cells", P::NAME, size);
        Self {
            store: CellStore::new(size),
            handles: HandleTable::new(),
            layout: LayoutTracker::new(size),
            _policy: PhantomData,
        }
    }

    /// Allocate `size` cells
    ///
    /// If no free run qualifies, compacts once and retries before reporting
    /// [`MemoryError::OutOfMemory`].
    pub fn alloc(&mut self, size: Size) -> MemoryResult<Handle> {
        if size == 0 {
            return Err(MemoryError::InvalidSize);
        }

        let address = match P::pick(self.layout.status(), size) {
            Some(address) => address,
            None => {
                info!("{}: no free run of {} cells, compacting", P::NAME, size);
                self.compact();
                P::pick(self.layout.status(), size).ok_or_else(|| {
                    warn!(
                        "{}: no free memory for {} cells after compaction",
                        P::NAME,
                        size
                    );
                    MemoryError::OutOfMemory {
                        requested: size,
                        total: self.store.len(),
                    }
                })?
            }
        };

        let handle = self.handles.insert(address);
        self.layout.insert(handle, size);
        self.layout
            .mark(address, address + size, CellStatus::Allocated);
        info!("{}: allocated {} cells at {}", P::NAME, size, address);
        Ok(handle)
    }

    /// Release a previously allocated handle
    pub fn release(&mut self, handle: Handle) -> MemoryResult<()> {
        let Some(record) = self.layout.remove(handle) else {
            warn!("{}: release of untracked handle", P::NAME);
            return Err(MemoryError::UntrackedHandle);
        };

        let address = self.handles.address_of(handle);
        self.layout
            .mark(address, address + record.size, CellStatus::Free);
        info!("{}: released {} cells at {}", P::NAME, record.size, address);
        Ok(())
    }

    /// Current address behind a handle
    pub fn address_of(&self, handle: Handle) -> Address {
        self.handles.address_of(handle)
    }

    /// Read `count` cells at the handle's current address
    ///
    /// # Panics
    /// Panics if the range extends past the end of the store.
    pub fn read(&self, handle: Handle, count: Size) -> &[Word] {
        self.store.read(self.handles.address_of(handle), count)
    }

    /// Write values starting at the handle's current address
    ///
    /// # Panics
    /// Panics if the range extends past the end of the store.
    pub fn write(&mut self, handle: Handle, values: &[Word]) {
        self.store.write(self.handles.address_of(handle), values);
    }

    /// Maximal status runs as `(first, last, status)`, in address order
    pub fn runs(&self) -> Vec<(Address, Address, CellStatus)> {
        self.layout.runs()
    }

    /// Render the layout and the live handles for human inspection
    pub fn layout_report(&self) -> String {
        let mut out = String::from("Memory status:\n");
        for (first, last, status) in self.layout.runs() {
            let _ = writeln!(out, "{} - {} = {}({})", first, last, status, last - first + 1);
        }
        out.push_str("\nHandle positions:\n");
        for record in self.layout.ordered(&self.handles) {
            let address = self.handles.address_of(record.handle);
            let _ = writeln!(
                out,
                "at: {}, size: {}, data: {:?}",
                address,
                record.size,
                self.store.read(address, record.size)
            );
        }
        out
    }

    pub fn stats(&self) -> MemoryStats {
        MemoryStats::new(
            self.store.len(),
            self.layout.used_cells(),
            self.layout.live_allocations(),
        )
    }
}

impl<P: FitPolicy> Allocator for FitMemory<P> {
    fn alloc(&mut self, size: Size) -> MemoryResult<Handle> {
        FitMemory::alloc(self, size)
    }

    fn release(&mut self, handle: Handle) -> MemoryResult<()> {
        FitMemory::release(self, handle)
    }

    fn layout_report(&self) -> String {
        FitMemory::layout_report(self)
    }
}

impl<P: FitPolicy> MemoryInfo for FitMemory<P> {
    fn stats(&self) -> MemoryStats {
        FitMemory::stats(self)
    }
}
