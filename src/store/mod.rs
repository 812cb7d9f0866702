/*!
 * Cell Store
 * Fixed array of cells plus the handle table that indirects into it
 */

mod cells;
mod handle;

pub use cells::CellStore;
pub use handle::{Handle, HandleTable};
