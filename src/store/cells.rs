/*!
 * Cell Store
 * The only place raw data is read or written
 */

use crate::core::types::{Address, Size, Word};

/// Fixed-length array of addressable cells, zero-initialized and never resized
#[derive(Debug)]
pub struct CellStore {
    cells: Vec<Word>,
}

impl CellStore {
    pub fn new(size: Size) -> Self {
        Self {
            cells: vec![0; size],
        }
    }

    pub fn len(&self) -> Size {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Read `count` cells starting at `address`
    ///
    /// # Panics
    /// Panics if the range extends past the end of the store.
    pub fn read(&self, address: Address, count: Size) -> &[Word] {
        &self.cells[address..address + count]
    }

    /// Write `values` starting at `address`
    ///
    /// # Panics
    /// Panics if the range extends past the end of the store.
    pub fn write(&mut self, address: Address, values: &[Word]) {
        self.cells[address..address + values.len()].copy_from_slice(values);
    }
}
