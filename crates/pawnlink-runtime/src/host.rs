//! RuntimeHost trait — managed-runtime lifecycle
//!
//! The embedding implements this trait over the actual managed runtime:
//! starting it, loading the two assemblies, instantiating the game-mode
//! object, and tearing everything down at unload. The engine never sees
//! any of it — only the [`ManagedRuntime`] handle the host yields once
//! loading is complete.

use std::path::Path;
use std::sync::Arc;

use pawnlink_sdk::{BridgeResult, ManagedRuntime};

use crate::config::BridgeConfig;

/// Opaque token for a loaded assembly image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssemblyId(pub u32);

/// Opaque token for a resolved class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassId(pub u32);

/// Managed-runtime lifecycle collaborator.
///
/// Called in a fixed order by [`crate::Bridge::load`]: `initialize`,
/// `load_assembly` (base mode, then game mode), `resolve_class` for each,
/// `instantiate` for the game mode, then `runtime()`. `shutdown` is
/// called exactly once, from [`crate::Bridge::unload`].
pub trait RuntimeHost {
    /// Start the managed runtime.
    fn initialize(&mut self, config: &BridgeConfig) -> BridgeResult<()>;

    /// Load one managed assembly from disk.
    fn load_assembly(&mut self, path: &Path) -> BridgeResult<AssemblyId>;

    /// Resolve a class within a loaded assembly.
    fn resolve_class(
        &mut self,
        assembly: AssemblyId,
        namespace: &str,
        class: &str,
    ) -> BridgeResult<ClassId>;

    /// Create the game-mode instance and pin it for the process
    /// lifetime. It becomes the implicit receiver of every invocation.
    fn instantiate(&mut self, class: ClassId) -> BridgeResult<()>;

    /// The introspection/invocation handle over the loaded runtime.
    /// Valid only after [`Self::instantiate`] has succeeded.
    fn runtime(&self) -> BridgeResult<Arc<dyn ManagedRuntime>>;

    /// Release the pinned instance and stop the runtime.
    fn shutdown(&mut self);
}
