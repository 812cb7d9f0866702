/*!
 * Memory Types
 * Errors, cell status, and statistics shared by all strategies
 */

use crate::core::types::Size;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Memory operation result
pub type MemoryResult<T> = Result<T, MemoryError>;

/// Memory errors
///
/// None of these are fatal; the allocator stays usable after any of them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MemoryError {
    #[error("no free memory: requested {requested} cells, store holds {total} in total")]
    OutOfMemory { requested: Size, total: Size },

    #[error("request exceeds store size: requested {requested} cells, store holds {total}")]
    RequestTooLarge { requested: Size, total: Size },

    #[error("allocation size must be positive")]
    InvalidSize,

    #[error("handle is not tracked by this memory instance")]
    UntrackedHandle,
}

/// Per-cell allocation status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellStatus {
    Free,
    Allocated,
}

impl fmt::Display for CellStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CellStatus::Free => write!(f, "FREE"),
            CellStatus::Allocated => write!(f, "ALLOCATED"),
        }
    }
}

/// Point-in-time allocator statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryStats {
    pub total_cells: Size,
    pub used_cells: Size,
    pub available_cells: Size,
    pub usage_percentage: f64,
    pub live_allocations: usize,
}

impl MemoryStats {
    pub fn new(total: Size, used: Size, live_allocations: usize) -> Self {
        Self {
            total_cells: total,
            used_cells: used,
            available_cells: total - used,
            usage_percentage: if total == 0 {
                0.0
            } else {
                used as f64 / total as f64 * 100.0
            },
            live_allocations,
        }
    }
}
