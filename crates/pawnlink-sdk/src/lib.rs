//! Pawnlink SDK - boundary types for the scripting-VM ⇄ managed-runtime bridge
//!
//! This crate provides the minimal types and traits the marshaling engine
//! programs against: the VM's argument [`Cell`], the [`VmMemory`] and
//! [`ManagedRuntime`] collaborator traits, the [`DiagLog`] sink, and the
//! shared error type. The engine never sees VM or runtime internals — the
//! host embedding the bridge implements these traits.

#![warn(missing_docs)]

mod cell;
mod diag;
mod error;
mod memory;
mod runtime;

pub use cell::Cell;
pub use diag::{DiagLog, NullDiag};
pub use error::{BridgeError, BridgeResult};
pub use memory::VmMemory;
pub use runtime::{
    AttrId, AttrSetId, LookupScope, ManagedArg, ManagedCallOutcome, ManagedRuntime, MethodId,
};
