//! Call plans — the cached result of resolving a callback name
//!
//! A plan pairs the resolved managed method with one marshaling
//! instruction per parameter, in declaration order. Plans are immutable
//! once built and shared behind `Arc`; the cache hands out clones.

use std::sync::Arc;

use pawnlink_sdk::MethodId;

use crate::classify::MarshalKind;

/// Marshaling instruction for one parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamDescriptor {
    /// How the argument cell is converted.
    pub kind: MarshalKind,
    /// For array kinds, the zero-based index (into the same call's
    /// argument cells) of the parameter holding the element count.
    /// Always `Some` for array kinds, `None` otherwise.
    pub length_index: Option<usize>,
}

impl ParamDescriptor {
    /// Descriptor for a scalar or string parameter.
    pub const fn direct(kind: MarshalKind) -> Self {
        Self {
            kind,
            length_index: None,
        }
    }

    /// Descriptor for an array parameter with its length-parameter index.
    pub const fn array(kind: MarshalKind, length_index: usize) -> Self {
        Self {
            kind,
            length_index: Some(length_index),
        }
    }
}

/// The resolved, immutable calling plan for one callback name.
#[derive(Debug, Clone)]
pub struct CallPlan {
    /// The managed method all calls with this name invoke.
    pub method: MethodId,
    /// Per-parameter marshaling instructions, declaration order.
    pub params: Vec<ParamDescriptor>,
}

impl CallPlan {
    /// Number of parameters — equals the argument count the plan was
    /// built against.
    pub fn param_count(&self) -> usize {
        self.params.len()
    }
}

/// Cached outcome for a callback name.
///
/// Absence from the cache is the third state (unresolved). A name that
/// resolves `Negative` stays negative for the process lifetime.
#[derive(Debug, Clone)]
pub enum Resolution {
    /// No usable method — permanently unhandled.
    Negative,
    /// A usable plan.
    Positive(Arc<CallPlan>),
}

impl Resolution {
    /// True for the negative outcome.
    pub fn is_negative(&self) -> bool {
        matches!(self, Resolution::Negative)
    }
}
