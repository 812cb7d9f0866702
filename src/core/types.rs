/*!
 * Core Types
 * Aliases for addresses, sizes, and cell values
 */

/// Index of a cell within a store
pub type Address = usize;

/// A number of cells
pub type Size = usize;

/// Opaque fixed-width value held by one cell
pub type Word = u32;
