/*!
 * Allocator Traits
 * Common abstractions over the three strategies
 */

use crate::core::types::Size;
use crate::store::Handle;
use crate::types::{MemoryResult, MemoryStats};

/// Allocation interface shared by first-fit, best-fit, and buddy memories
pub trait Allocator {
    /// Allocate `size` cells, returning a handle to the first one
    fn alloc(&mut self, size: Size) -> MemoryResult<Handle>;

    /// Release a previously allocated handle
    ///
    /// Releasing a handle this instance does not track leaves all state
    /// unchanged and reports [`MemoryError::UntrackedHandle`].
    ///
    /// [`MemoryError::UntrackedHandle`]: crate::types::MemoryError::UntrackedHandle
    fn release(&mut self, handle: Handle) -> MemoryResult<()>;

    /// Render the current layout for human inspection
    ///
    /// Pure function of allocator state; repeated calls with no intervening
    /// `alloc`/`release` produce identical output.
    fn layout_report(&self) -> String;
}

/// Memory statistics provider
pub trait MemoryInfo {
    /// Get overall memory statistics
    fn stats(&self) -> MemoryStats;

    /// Get memory info as (total, used, available)
    fn info(&self) -> (Size, Size, Size) {
        let stats = self.stats();
        (stats.total_cells, stats.used_cells, stats.available_cells)
    }
}
