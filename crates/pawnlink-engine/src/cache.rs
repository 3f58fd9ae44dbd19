//! Call-plan cache — lazy name → plan resolution with permanent negatives
//!
//! Method and parameter introspection against the managed runtime is
//! orders of magnitude more expensive than a direct call, and callback
//! names recur every game tick or player action. The cache amortizes
//! discovery to once per distinct name for the lifetime of the process:
//! a name is *unresolved* (never seen), *negative* (no usable method,
//! permanent), or *positive* (has a plan). Negatives are never retried —
//! a managed method signature cannot change at runtime.

use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use pawnlink_sdk::{DiagLog, LookupScope, ManagedRuntime};

use crate::classify::MarshalKind;
use crate::length::resolve_length_index;
use crate::plan::{CallPlan, ParamDescriptor, Resolution};

/// Mapping from callback name to its cached [`Resolution`].
///
/// Grows monotonically, never evicts. Lookups take the read lock;
/// a miss builds the plan outside any lock and publishes it with
/// insert-if-absent, so a concurrent first resolution of the same name
/// duplicates work but never corrupts state — the first published
/// outcome wins and both results are identical anyway.
pub struct PlanCache {
    entries: RwLock<FxHashMap<String, Resolution>>,
}

impl PlanCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(FxHashMap::default()),
        }
    }

    /// Resolve a callback name against the managed runtime.
    ///
    /// First occurrence of a name looks the method up (primary scope,
    /// then fallback) and classifies every parameter; any failure caches
    /// a permanent negative. Subsequent occurrences return the cached
    /// outcome unconditionally.
    pub fn resolve(
        &self,
        runtime: &dyn ManagedRuntime,
        diag: &dyn DiagLog,
        name: &str,
        arg_count: usize,
    ) -> Resolution {
        if let Some(cached) = self.entries.read().get(name) {
            return cached.clone();
        }

        let built = build_plan(runtime, diag, name, arg_count);

        let mut entries = self.entries.write();
        entries
            .entry(name.to_string())
            .or_insert(built)
            .clone()
    }

    /// Whether a name has been resolved (positively or negatively).
    pub fn contains(&self, name: &str) -> bool {
        self.entries.read().contains_key(name)
    }

    /// Number of resolved names.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// True if no name has been resolved yet.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl Default for PlanCache {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot resolution of a never-before-seen name.
fn build_plan(
    runtime: &dyn ManagedRuntime,
    diag: &dyn DiagLog,
    name: &str,
    arg_count: usize,
) -> Resolution {
    let method = runtime
        .find_method(LookupScope::Primary, name, arg_count)
        .or_else(|| runtime.find_method(LookupScope::Fallback, name, arg_count));

    // A callback the managed side doesn't implement is the expected,
    // common case — negative, not logged.
    let Some(method) = method else {
        return Resolution::Negative;
    };

    let type_names = runtime.param_type_names(method);
    let mut params = Vec::with_capacity(type_names.len());

    for (idx, type_name) in type_names.iter().enumerate() {
        let Some(kind) = MarshalKind::from_type_name(type_name) else {
            diag.error(&format!(
                "Incompatible parameter type: {} in {}",
                type_name, name
            ));
            return Resolution::Negative;
        };

        let descriptor = if kind.is_array() {
            match resolve_length_index(runtime, diag, method, idx, arg_count) {
                Some(length_index) => ParamDescriptor::array(kind, length_index),
                None => {
                    diag.error(&format!(
                        "No parameter length provided: {} in {}",
                        type_name, name
                    ));
                    return Resolution::Negative;
                }
            }
        } else {
            ParamDescriptor::direct(kind)
        };

        params.push(descriptor);
    }

    Resolution::Positive(Arc::new(CallPlan { method, params }))
}
