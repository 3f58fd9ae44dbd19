//! Bridge lifecycle — load, dispatch, unload
//!
//! `Bridge` is the single owner of the dispatch machinery: it drives the
//! host through the load sequence, builds the [`EventDispatcher`], and
//! exposes the one inbound call surface the VM sees. Dropping it (after
//! `unload`) releases everything — no ambient global state.

use std::sync::Arc;

use pawnlink_engine::EventDispatcher;
use pawnlink_sdk::{BridgeResult, Cell, DiagLog, VmMemory};

use crate::config::BridgeConfig;
use crate::host::RuntimeHost;

/// Namespace of the fixed fallback base-mode class.
pub const BASEMODE_NAMESPACE: &str = "Pawnlink.GameMode";

/// Name of the fixed fallback base-mode class.
pub const BASEMODE_CLASS: &str = "BaseMode";

/// The loaded bridge: dispatcher plus the host that backs it.
pub struct Bridge {
    dispatcher: EventDispatcher,
    host: Box<dyn RuntimeHost>,
}

impl Bridge {
    /// Start the managed runtime and wire up the dispatcher.
    ///
    /// Load order: initialize the runtime, load the base-mode assembly,
    /// load the game-mode assembly, resolve the fixed base-mode class
    /// and the configured game-mode class, instantiate the game mode.
    /// Any failure aborts the load; nothing is partially usable.
    pub fn load(
        config: &BridgeConfig,
        mut host: Box<dyn RuntimeHost>,
        diag: Arc<dyn DiagLog>,
    ) -> BridgeResult<Self> {
        host.initialize(config)?;

        let basemode = host.load_assembly(&config.basemode_path)?;
        let gamemode = host.load_assembly(&config.gamemode_path)?;

        host.resolve_class(basemode, BASEMODE_NAMESPACE, BASEMODE_CLASS)?;
        let gamemode_class = host.resolve_class(
            gamemode,
            &config.gamemode_namespace,
            &config.gamemode_class,
        )?;

        host.instantiate(gamemode_class)?;

        if config.debug {
            diag.info(&format!(
                "loaded {}.{} in debug mode",
                config.gamemode_namespace, config.gamemode_class
            ));
        }

        let runtime = host.runtime()?;
        Ok(Self {
            dispatcher: EventDispatcher::new(runtime, diag),
            host,
        })
    }

    /// The dispatcher, exposed for inspection.
    pub fn dispatcher(&self) -> &EventDispatcher {
        &self.dispatcher
    }

    /// The native callback entry point: handle a named callback raised
    /// by the VM. Returns whether the managed side handled it.
    pub fn public_call(
        &self,
        memory: &dyn VmMemory,
        name: &str,
        args: &[Cell],
        return_cell: &mut Cell,
    ) -> bool {
        self.dispatcher.on_public_call(memory, name, args, return_cell)
    }

    /// Forward the per-tick notification.
    pub fn tick(&self) {
        self.dispatcher.on_tick();
    }

    /// Forward a per-timer-tick notification.
    pub fn timer_tick(&self, timer_id: i32, payload: Cell) {
        self.dispatcher.on_timer_tick(timer_id, payload);
    }

    /// Stop the managed runtime and release the game-mode instance.
    pub fn unload(mut self) {
        self.host.shutdown();
    }
}
