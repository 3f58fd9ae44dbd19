//! Pawnlink engine - call marshaling and event dispatch
//!
//! The core of the bridge: resolves named VM callbacks to managed methods
//! on first use, introspects parameter signatures into reusable call
//! plans, marshals VM argument cells into managed values on every call,
//! and caches each plan for the lifetime of the process.
//!
//! Components, leaf first:
//! - [`classify`] — managed type name → [`MarshalKind`]
//! - [`length`] — array-length attribute resolution
//! - [`plan`] — immutable per-callback call plans
//! - [`cache`] — lazy name → plan cache with permanent negatives
//! - [`marshal`] — cell → managed-argument conversion
//! - [`dispatch`] — the per-callback entry point tying it together

pub mod cache;
pub mod classify;
pub mod dispatch;
pub mod length;
pub mod marshal;
pub mod plan;

pub use cache::PlanCache;
pub use classify::MarshalKind;
pub use dispatch::{EventDispatcher, MAX_CALLBACK_ARGS};
pub use marshal::marshal_args;
pub use plan::{CallPlan, ParamDescriptor, Resolution};
