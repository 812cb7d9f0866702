/*!
 * Buddy Strategy
 * Power-of-two split/merge allocation over an address-ordered block list
 */

mod block;

use crate::core::types::{Address, Size, Word};
use crate::store::{CellStore, Handle, HandleTable};
use crate::traits::{Allocator, MemoryInfo};
use crate::types::{MemoryError, MemoryResult, MemoryStats};
use block::Block;
use log::{info, warn};
use std::fmt::Write as _;

/// Buddy-system memory over a fixed cell count
///
/// Blocks live in a list kept sorted by address, so each block's physical
/// neighbors are its list neighbors; every split and merge splices the list
/// in place and preserves the ordering. There is no compaction fallback:
/// buddy blocks cannot be relocated without breaking the tree.
pub struct BuddyMemory {
    store: CellStore,
    handles: HandleTable,
    blocks: Vec<Block>,
}

impl BuddyMemory {
    /// Create a memory with `size` cells, held by a single free root block
    pub fn new(size: Size) -> Self {
        let mut handles = HandleTable::new();
        let root = handles.insert(0);
        info!("buddy memory initialized with {} cells", size);
        Self {
            store: CellStore::new(size),
            handles,
            blocks: vec![Block::root(root, size)],
        }
    }

    /// Allocate `size` cells
    ///
    /// A request larger than the whole store fails immediately without
    /// touching any block. Otherwise the first free block that can hold the
    /// request is halved while the half still holds it, and the resulting
    /// block is marked allocated.
    pub fn alloc(&mut self, size: Size) -> MemoryResult<Handle> {
        if size == 0 {
            return Err(MemoryError::InvalidSize);
        }
        if size > self.store.len() {
            warn!(
                "buddy: request for {} cells exceeds the {}-cell store",
                size,
                self.store.len()
            );
            return Err(MemoryError::RequestTooLarge {
                requested: size,
                total: self.store.len(),
            });
        }

        let Some(index) = self.blocks.iter().position(|b| b.free && b.size >= size) else {
            warn!("buddy: no free block holds {} cells", size);
            return Err(MemoryError::OutOfMemory {
                requested: size,
                total: self.store.len(),
            });
        };

        let index = self.split_to_fit(index, size);
        self.blocks[index].free = false;

        let block = &self.blocks[index];
        info!(
            "buddy: allocated {} cells at {} (block size {})",
            size,
            self.handles.address_of(block.handle),
            block.size
        );
        Ok(block.handle)
    }

    /// Release a previously allocated handle and coalesce with its buddies
    pub fn release(&mut self, handle: Handle) -> MemoryResult<()> {
        let Some(index) = self
            .blocks
            .iter()
            .position(|b| b.handle == handle && !b.free)
        else {
            warn!("buddy: release of untracked handle");
            return Err(MemoryError::UntrackedHandle);
        };

        self.blocks[index].free = true;
        info!(
            "buddy: released {} cells at {}",
            self.blocks[index].size,
            self.handles.address_of(handle)
        );
        self.merge_from(index);
        Ok(())
    }

    /// Halve the block at `index` while the half still holds `size`
    ///
    /// Each halving replaces the parent with two children spliced in at its
    /// position, so the list stays address-sorted. Both children push the
    /// parent's address onto their ancestor stacks; it is the split point
    /// the later merge check keys on. The left child is halved further.
    fn split_to_fit(&mut self, index: usize, size: Size) -> usize {
        while size < self.blocks[index].size && size <= self.blocks[index].size / 2 {
            let parent = self.blocks.remove(index);
            let half = parent.size / 2;
            let parent_address = self.handles.address_of(parent.handle);

            let mut ancestors = parent.ancestors;
            ancestors.push(parent_address);

            // The left child inherits the parent's handle; it starts at the
            // same address.
            let left = Block {
                handle: parent.handle,
                size: half,
                free: true,
                ancestors: ancestors.clone(),
            };
            let right = Block {
                handle: self.handles.insert(parent_address + half),
                size: parent.size - half,
                free: true,
                ancestors,
            };

            self.blocks.insert(index, right);
            self.blocks.insert(index, left);
        }
        index
    }

    /// Merge the block at `index` with its buddy, repeating upward until the
    /// root is reached or the buddy is split or in use
    fn merge_from(&mut self, mut index: usize) {
        loop {
            let Some(&split_point) = self.blocks[index].ancestors.last() else {
                break; // root reached
            };
            let address = self.handles.address_of(self.blocks[index].handle);
            let size = self.blocks[index].size;

            if address == split_point {
                // Left child; its buddy is the right neighbor
                let right_is_buddy = self
                    .blocks
                    .get(index + 1)
                    .map_or(false, |right| right.free && right.size == size);
                if !right_is_buddy {
                    break;
                }
                self.merge_pair(index);
            } else {
                // Right child; its buddy is the left neighbor at the split point
                let left_is_buddy = index > 0 && {
                    let left = &self.blocks[index - 1];
                    left.free
                        && left.size == size
                        && self.handles.address_of(left.handle) == split_point
                };
                if !left_is_buddy {
                    break;
                }
                index -= 1;
                self.merge_pair(index);
            }
        }
    }

    /// Replace the pair at `index`, `index + 1` with one free block of
    /// doubled size at the lower address
    fn merge_pair(&mut self, index: usize) {
        let right = self.blocks.remove(index + 1);
        let left = &mut self.blocks[index];
        left.size += right.size;
        left.ancestors.pop();
        debug_assert!(left.free && right.free);
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

    /// Current blocks as `(address, size, free)`, in address order
    pub fn blocks(&self) -> Vec<(Address, Size, bool)> {
        self.blocks
            .iter()
            .map(|b| (self.handles.address_of(b.handle), b.size, b.free))
            .collect()
    }

    /// Render one line per block for human inspection
    pub fn layout_report(&self) -> String {
        let mut out = String::from("Memory status:\n");
        for block in &self.blocks {
            let address = self.handles.address_of(block.handle);
            let _ = writeln!(
                out,
                "{:4} - {:4}  {} (size {})",
                address,
                address + block.size - 1,
                if block.free { "Free" } else { "Allocated" },
                block.size
            );
        }
        out
    }

    pub fn stats(&self) -> MemoryStats {
        let used = self
            .blocks
            .iter()
            .filter(|b| !b.free)
            .map(|b| b.size)
            .sum();
        let live = self.blocks.iter().filter(|b| !b.free).count();
        MemoryStats::new(self.store.len(), used, live)
    }
}

impl Allocator for BuddyMemory {
    fn alloc(&mut self, size: Size) -> MemoryResult<Handle> {
        BuddyMemory::alloc(self, size)
    }

    fn release(&mut self, handle: Handle) -> MemoryResult<()> {
        BuddyMemory::release(self, handle)
    }

    fn layout_report(&self) -> String {
        BuddyMemory::layout_report(self)
    }
}

impl MemoryInfo for BuddyMemory {
    fn stats(&self) -> MemoryStats {
        BuddyMemory::stats(self)
    }
}
