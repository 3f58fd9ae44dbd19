//! Array-length attribute resolution
//!
//! The scripting VM carries no type or length information of its own, so
//! every array parameter must name, via an attribute, which other
//! parameter of the same callback holds the runtime element count.
//! A missing or unusable attribute disqualifies the whole callback.

use pawnlink_sdk::{DiagLog, ManagedRuntime, MethodId};

/// Find the zero-based length-parameter index for the array parameter at
/// `param_idx`, or `None` (logged) when the metadata is missing or names
/// an index outside the call's `arg_count` cells.
pub fn resolve_length_index(
    runtime: &dyn ManagedRuntime,
    diag: &dyn DiagLog,
    method: MethodId,
    param_idx: usize,
    arg_count: usize,
) -> Option<usize> {
    let Some(attrs) = runtime.param_attributes(method, param_idx) else {
        diag.error(&format!(
            "No attribute info for {}@{}",
            runtime.method_name(method),
            param_idx
        ));
        return None;
    };

    let Some(attr) = runtime.length_attribute(attrs) else {
        diag.error(&format!(
            "Array parameter has no specified size: {}@{}",
            runtime.method_name(method),
            param_idx
        ));
        return None;
    };

    let index = runtime.attribute_index(attr);
    if index < 0 || index as usize >= arg_count {
        diag.error(&format!(
            "Length parameter index {} out of range: {}@{}",
            index,
            runtime.method_name(method),
            param_idx
        ));
        return None;
    }

    Some(index as usize)
}
