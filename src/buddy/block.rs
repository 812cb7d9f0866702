/*!
 * Buddy Blocks
 * Nodes of the implicit split/merge tree
 */

use crate::core::types::{Address, Size};
use crate::store::Handle;

/// One block of the buddy tree
///
/// `ancestors` holds the split-point address of every ancestor, most recent
/// last. The top entry is the buddy key: the only address this block may
/// merge across, and the address the merged block inherits.
#[derive(Debug, Clone)]
pub(super) struct Block {
    pub handle: Handle,
    pub size: Size,
    pub free: bool,
    pub ancestors: Vec<Address>,
}

impl Block {
    /// The initial block spanning the whole store
    pub fn root(handle: Handle, size: Size) -> Self {
        Self {
            handle,
            size,
            free: true,
            ancestors: Vec::new(),
        }
    }
}
