//! ManagedRuntime trait — abstract managed-runtime operations
//!
//! Defines the interface the host's managed-runtime embedding implements.
//! The engine resolves methods, introspects parameter signatures, and
//! invokes callbacks through this trait without depending on runtime
//! internals. The game-mode instance created at load time is held by the
//! implementation and is the implicit receiver of every [`invoke`].
//!
//! [`invoke`]: ManagedRuntime::invoke

// ============================================================================
// Opaque tokens
// ============================================================================

/// Opaque token for a resolved managed method.
///
/// Minted by the [`ManagedRuntime`] implementation; the engine only stores
/// and passes it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MethodId(
    /// Raw token value, meaningful only to the minting runtime.
    pub u32,
);

/// Opaque token for the attribute metadata attached to one parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttrSetId(
    /// Raw token value, meaningful only to the minting runtime.
    pub u32,
);

/// Opaque token for a single attribute instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttrId(
    /// Raw token value, meaningful only to the minting runtime.
    pub u32,
);

/// Ordered method-lookup scopes. [`Primary`] is the game mode,
/// [`Fallback`] the base mode; lookups try primary first.
///
/// [`Primary`]: LookupScope::Primary
/// [`Fallback`]: LookupScope::Fallback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupScope {
    /// The configured game-mode class.
    Primary,
    /// The fixed base-mode class.
    Fallback,
}

// ============================================================================
// Marshaled values
// ============================================================================

/// A managed-runtime argument value produced by the marshaler.
///
/// Scalars carry the VM cell's bit pattern read as the corresponding
/// type; arrays and strings are deep copies out of VM memory.
#[derive(Debug, Clone, PartialEq)]
pub enum ManagedArg {
    /// 32-bit signed integer (raw cell word)
    Int(i32),
    /// Single-precision float (cell bits decoded as the VM float encoding)
    Float(f32),
    /// Boolean (nonzero cell ⇒ true)
    Bool(bool),
    /// Managed string copied out of an indirect cell
    Str(String),
    /// Integer array with its element count taken from the length parameter
    IntArray(Vec<i32>),
    /// Float array, each element decoded from the VM cell encoding
    FloatArray(Vec<f32>),
    /// Boolean array, each element normalized nonzero ⇒ true
    BoolArray(Vec<bool>),
}

impl ManagedArg {
    /// Get the argument's type name for diagnostics
    pub const fn type_name(&self) -> &'static str {
        match self {
            ManagedArg::Int(_) => "int",
            ManagedArg::Float(_) => "float",
            ManagedArg::Bool(_) => "bool",
            ManagedArg::Str(_) => "string",
            ManagedArg::IntArray(_) => "int[]",
            ManagedArg::FloatArray(_) => "float[]",
            ManagedArg::BoolArray(_) => "bool[]",
        }
    }
}

// ============================================================================
// Invocation outcome
// ============================================================================

/// Result of invoking a managed callback method.
///
/// Every call site must handle all three variants: a returned boolean, a
/// null/void response (no value for the VM, silent), and a managed
/// exception (no value for the VM, description logged by the dispatcher).
#[derive(Debug, Clone, PartialEq)]
pub enum ManagedCallOutcome {
    /// The method returned a boxed boolean.
    Value(bool),
    /// The method returned no response object; the VM's default return
    /// value is preserved.
    Unavailable,
    /// The method threw; the full description is carried for logging.
    /// The VM's default return value is preserved.
    Faulted(String),
}

impl ManagedCallOutcome {
    /// True unless the outcome carries a value for the VM return cell.
    pub const fn is_unavailable(&self) -> bool {
        !matches!(self, ManagedCallOutcome::Value(_))
    }
}

// ============================================================================
// Runtime trait
// ============================================================================

/// Abstract managed runtime for the marshaling engine.
///
/// Method/parameter introspection through this trait is orders of
/// magnitude more expensive than an invoke — the engine caches everything
/// it learns per callback name and consults the trait again only for new
/// names and for the invokes themselves.
pub trait ManagedRuntime: Send + Sync {
    /// Make the calling native thread known to the runtime. Idempotent;
    /// a no-op when the thread is already attached.
    fn attach_current_thread(&self);

    /// Look up a method by name and exact parameter count in one scope.
    fn find_method(&self, scope: LookupScope, name: &str, param_count: usize)
        -> Option<MethodId>;

    /// The method's declared name, for diagnostics.
    fn method_name(&self, method: MethodId) -> String;

    /// Declared parameter type names, in declaration order.
    fn param_type_names(&self, method: MethodId) -> Vec<String>;

    /// Attribute metadata attached to one parameter, if any exists.
    fn param_attributes(&self, method: MethodId, param: usize) -> Option<AttrSetId>;

    /// The parameter-length attribute within a set, if present.
    fn length_attribute(&self, attrs: AttrSetId) -> Option<AttrId>;

    /// The integer `Index` property of a length attribute.
    fn attribute_index(&self, attr: AttrId) -> i32;

    /// Invoke a method on the pinned game-mode instance.
    fn invoke(&self, method: MethodId, args: &[ManagedArg]) -> ManagedCallOutcome;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_availability() {
        assert!(!ManagedCallOutcome::Value(true).is_unavailable());
        assert!(!ManagedCallOutcome::Value(false).is_unavailable());
        assert!(ManagedCallOutcome::Unavailable.is_unavailable());
        assert!(ManagedCallOutcome::Faulted("boom".to_string()).is_unavailable());
    }

    #[test]
    fn test_arg_type_names() {
        assert_eq!(ManagedArg::Int(1).type_name(), "int");
        assert_eq!(ManagedArg::Str(String::new()).type_name(), "string");
        assert_eq!(ManagedArg::FloatArray(Vec::new()).type_name(), "float[]");
    }
}
