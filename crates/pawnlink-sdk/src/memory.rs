//! VmMemory trait — abstract access to the scripting VM's data memory
//!
//! Indirect argument cells hold addresses into VM memory rather than
//! values. The engine resolves them through this trait and never touches
//! VM internals directly.

use crate::cell::Cell;
use crate::error::BridgeResult;

/// Abstract view of the scripting VM's data memory for one call.
///
/// The host implements this over the VM instance that raised the current
/// callback. All reads are synchronous; a failed resolution is a
/// collaborator fault that aborts the current call only.
pub trait VmMemory {
    /// Resolve an indirect cell to the block of cells it addresses.
    fn resolve_indirect(&self, cell: Cell) -> BridgeResult<Vec<Cell>>;

    /// Length of the packed string stored in a resolved block, not
    /// counting the terminator. Zero for an empty string.
    fn string_length(&self, cells: &[Cell]) -> usize;

    /// Copy at most `limit` code units out of a resolved block as a
    /// managed string, stopping at the terminator. `limit` includes the
    /// one-element pad the engine adds on top of [`Self::string_length`].
    fn read_string(&self, cells: &[Cell], limit: usize) -> String;
}
