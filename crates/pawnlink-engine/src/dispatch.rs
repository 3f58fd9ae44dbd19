//! Event dispatcher — the per-callback entry point
//!
//! One `EventDispatcher` is built at bridge load and dropped at unload.
//! It owns the call-plan cache and the two fixed-signature tick slots,
//! and holds shared handles to the managed runtime and diagnostics sink.
//! Per name, dispatch moves Unresolved → {Negative, Positive} exactly
//! once; terminal states execute directly on every later call.

use std::sync::Arc;

use once_cell::sync::OnceCell;

use pawnlink_sdk::{
    Cell, DiagLog, LookupScope, ManagedArg, ManagedCallOutcome, ManagedRuntime, MethodId, VmMemory,
};

use crate::cache::PlanCache;
use crate::marshal::marshal_args;
use crate::plan::Resolution;

/// Maximum declared argument count a callback may carry. Calls above
/// this are rejected before any resolution attempt.
pub const MAX_CALLBACK_ARGS: usize = 16;

/// Name and arity of the fixed per-tick notification.
const TICK_EVENT: (&str, usize) = ("OnTick", 0);

/// Name and arity of the fixed per-timer-tick notification.
const TIMER_TICK_EVENT: (&str, usize) = ("OnTimerTick", 2);

/// Orchestrates classifier, length resolver, cache and marshaler for
/// every callback the VM raises.
pub struct EventDispatcher {
    runtime: Arc<dyn ManagedRuntime>,
    diag: Arc<dyn DiagLog>,
    cache: PlanCache,
    /// Lazily resolved `OnTick` method; `None` inside means neither
    /// scope declares it.
    tick_method: OnceCell<Option<MethodId>>,
    /// Lazily resolved `OnTimerTick` method.
    timer_tick_method: OnceCell<Option<MethodId>>,
}

impl EventDispatcher {
    /// Create a dispatcher over the given collaborators.
    pub fn new(runtime: Arc<dyn ManagedRuntime>, diag: Arc<dyn DiagLog>) -> Self {
        Self {
            runtime,
            diag,
            cache: PlanCache::new(),
            tick_method: OnceCell::new(),
            timer_tick_method: OnceCell::new(),
        }
    }

    /// The plan cache, exposed for inspection.
    pub fn cache(&self) -> &PlanCache {
        &self.cache
    }

    /// Handle a named native callback from the VM.
    ///
    /// Returns `true` when the managed side handled the call (including
    /// an invocation that faulted), `false` when the VM should continue
    /// its own default processing. `return_cell` is written only when the
    /// invocation produced a boolean value; otherwise the caller's
    /// default return value stays untouched.
    pub fn on_public_call(
        &self,
        memory: &dyn VmMemory,
        name: &str,
        args: &[Cell],
        return_cell: &mut Cell,
    ) -> bool {
        if name.is_empty() || args.len() > MAX_CALLBACK_ARGS {
            return false;
        }

        self.runtime.attach_current_thread();

        let plan = match self.cache.resolve(&*self.runtime, &*self.diag, name, args.len()) {
            Resolution::Negative => return false,
            Resolution::Positive(plan) => plan,
        };

        let outcome = if plan.param_count() == 0 {
            self.runtime.invoke(plan.method, &[])
        } else {
            match marshal_args(&plan, args, memory) {
                Ok(managed_args) => self.runtime.invoke(plan.method, &managed_args),
                Err(fault) => {
                    // The call is ours but its arguments are unusable:
                    // report handled with no value written.
                    self.diag
                        .error(&format!("Failed to marshal arguments for {}: {}", name, fault));
                    return true;
                }
            }
        };

        self.apply_outcome(outcome, Some(return_cell));
        true
    }

    /// Handle the fixed per-tick notification.
    pub fn on_tick(&self) {
        self.runtime.attach_current_thread();

        let method = self
            .tick_method
            .get_or_init(|| self.find_fixed(TICK_EVENT.0, TICK_EVENT.1));

        if let Some(method) = *method {
            let outcome = self.runtime.invoke(method, &[]);
            self.apply_outcome(outcome, None);
        }
    }

    /// Handle the fixed per-timer-tick notification. `payload` is the
    /// opaque cell the VM associated with the timer, forwarded verbatim.
    pub fn on_timer_tick(&self, timer_id: i32, payload: Cell) {
        self.runtime.attach_current_thread();

        let method = self
            .timer_tick_method
            .get_or_init(|| self.find_fixed(TIMER_TICK_EVENT.0, TIMER_TICK_EVENT.1));

        if let Some(method) = *method {
            let args = [ManagedArg::Int(timer_id), ManagedArg::Int(payload.raw())];
            let outcome = self.runtime.invoke(method, &args);
            self.apply_outcome(outcome, None);
        }
    }

    /// Resolve a fixed-signature method once, primary then fallback,
    /// without going through the named plan cache.
    fn find_fixed(&self, name: &str, param_count: usize) -> Option<MethodId> {
        self.runtime
            .find_method(LookupScope::Primary, name, param_count)
            .or_else(|| {
                self.runtime
                    .find_method(LookupScope::Fallback, name, param_count)
            })
    }

    /// Map an invocation outcome onto the VM's return slot. A fault is
    /// logged; only an actual value overwrites the slot.
    fn apply_outcome(&self, outcome: ManagedCallOutcome, return_cell: Option<&mut Cell>) {
        match outcome {
            ManagedCallOutcome::Value(value) => {
                if let Some(cell) = return_cell {
                    *cell = Cell::from_bool(value);
                }
            }
            ManagedCallOutcome::Unavailable => {}
            ManagedCallOutcome::Faulted(description) => {
                self.diag
                    .error(&format!("Exception thrown:\n{}", description));
            }
        }
    }
}
