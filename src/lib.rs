/*!
 * memsim
 *
 * Simulated fixed-size memory management over an array of addressable cells.
 * Three allocation strategies behind a common handle abstraction:
 *
 * - [`FirstFit`]: first free run long enough for the request
 * - [`BestFit`]: free run with the smallest leftover
 * - [`BuddyMemory`]: binary buddy system with split/merge coalescing
 *
 * First-fit and best-fit share a layout tracker and a compactor: when no free
 * run satisfies a request, live allocations are slid toward address zero once
 * and the scan retried. Client [`Handle`]s survive relocation because they
 * are stable keys into a per-instance handle table, not raw addresses.
 */

pub mod buddy;
pub mod core;
pub mod fit;
pub mod store;
pub mod traits;
pub mod types;

// Re-exports
pub use buddy::BuddyMemory;
pub use fit::{BestFit, FirstFit, FitMemory};
pub use store::{CellStore, Handle};
pub use traits::{Allocator, MemoryInfo};
pub use types::{CellStatus, MemoryError, MemoryResult, MemoryStats};
