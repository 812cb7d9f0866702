/*!
 * Handles
 * Stable keys into an arena of address records
 */

use crate::core::types::Address;

/// Client-facing reference to an address within one memory instance
///
/// A handle is a key into the owning instance's [`HandleTable`], not a raw
/// address. Copies of the key observe redirections, so a handle stays valid
/// when compaction or a buddy merge relocates the allocation behind it.
/// A handle must only be presented to the instance that minted it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Handle(u32);

/// Arena of address records backing the handles of one memory instance
///
/// Redirection rewrites the record in place; every outstanding copy of the
/// key sees the new address on its next lookup.
#[derive(Debug, Default)]
pub struct HandleTable {
    addresses: Vec<Address>,
}

impl HandleTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint a handle bound to `address`
    pub fn insert(&mut self, address: Address) -> Handle {
        let id = self.addresses.len() as u32;
        self.addresses.push(address);
        Handle(id)
    }

    /// Current address behind a handle
    pub fn address_of(&self, handle: Handle) -> Address {
        self.addresses[handle.0 as usize]
    }

    /// Rebind a handle to a new address in place
    ///
    /// Only compaction and buddy merges call this; clients never see an
    /// address move except through their own handle.
    pub fn redirect(&mut self, handle: Handle, address: Address) {
        self.addresses[handle.0 as usize] = address;
    }
}
