//! Split-keyboard pointing device controller.
//!
//! [`Pointer`] owns the per-side trackball configuration (DPI steps, sniper
//! mode, drag-scroll) and applies it through the host-provided capabilities:
//! a DPI-programmable sensor, a persistent config store, and the
//! half-to-half link. `SIDES` is 1 for a single trackball or 2 for one
//! trackball per half; both variants share this interface.
//!
//! Two entry points drive the controller: [`Pointer::handle_action`] from
//! the key-event dispatch path, and [`Pointer::tick`] from the periodic
//! housekeeping task. Both run in the same execution context, so there is
//! no locking anywhere in here.

/// Pointing device key actions
pub mod actions;
/// Packed per-side configuration record and persistence
pub mod config;
/// DPI step tables
pub mod dpi;
/// Drag-scroll motion filter
pub mod scroll;
/// Replication of configuration between halves
pub mod sync;

use crate::sides::Side;
use crate::utils::Inc;
use actions::{PointerAction, Trigger};
use config::{ConfigStore, RawConfig};
use dpi::DpiProfile;
use scroll::{DragScrollConfig, MotionReport, ScrollAccumulator};
use sync::{Role, SyncMonitor, SyncTransport};

/// Static pointing device configuration
pub struct PointerConfig {
    /// DPI table for normal operation
    pub default_dpi: DpiProfile,
    /// DPI table for sniper mode
    pub sniping_dpi: DpiProfile,
    /// Drag-scroll behavior, including its fixed DPI
    pub dragscroll: DragScrollConfig,
}

/// Stock configuration matching the original Charybdis firmware
pub const DEFAULT_CONFIG: PointerConfig = PointerConfig {
    default_dpi: dpi::DEFAULT_DPI,
    sniping_dpi: dpi::SNIPING_DPI,
    dragscroll: scroll::DEFAULT_DRAGSCROLL,
};

/// DPI programming of the trackball sensors
///
/// In single-trackball builds the host implementation is free to ignore
/// `side` since there is only one sensor to program.
pub trait CpiSensor {
    fn set_cpi(&mut self, side: Side, dpi: u16);
}

/// Split-keyboard pointing device logic
pub struct Pointer<const SIDES: usize> {
    config: &'static PointerConfig,
    state: [RawConfig; SIDES],
    scroll: [ScrollAccumulator; SIDES],
    sync: SyncMonitor<SIDES>,
    role: Role,
}

impl<const SIDES: usize> Pointer<SIDES> {
    /// Load configuration from the store and program every sensor
    ///
    /// The persisted record only carries DPI steps; sniper mode and
    /// drag-scroll always start disabled.
    pub fn new(
        config: &'static PointerConfig,
        role: Role,
        store: &mut impl ConfigStore<SIDES>,
        sensor: &mut impl CpiSensor,
    ) -> Self {
        debug_assert!(SIDES == 1 || SIDES == 2);
        let state = store.read().map(RawConfig::load);
        let pointer = Self {
            config,
            state,
            scroll: [ScrollAccumulator::new(); SIDES],
            sync: SyncMonitor::new(),
            role,
        };
        pointer.apply_cpi_all(sensor);
        pointer
    }

    /// Get the role this half was constructed with
    pub fn role(&self) -> Role {
        self.role
    }

    /// Current default-mode DPI value
    pub fn default_dpi(&self, side: Side) -> u16 {
        self.config.default_dpi.dpi(self.state[self.slot(side)].default_dpi_step())
    }

    /// Current sniper-mode DPI value
    pub fn sniping_dpi(&self, side: Side) -> u16 {
        self.config.sniping_dpi.dpi(self.state[self.slot(side)].sniping_dpi_step())
    }

    /// Whether sniper mode is active
    pub fn sniping_enabled(&self, side: Side) -> bool {
        self.state[self.slot(side)].sniping()
    }

    /// Whether drag-scroll is active
    pub fn dragscroll_enabled(&self, side: Side) -> bool {
        self.state[self.slot(side)].dragscroll()
    }

    /// Enable/disable sniper mode and reprogram that side's sensor
    pub fn set_sniping_enabled(&mut self, side: Side, enabled: bool, sensor: &mut impl CpiSensor) {
        let slot = self.slot(side);
        self.state[slot].set_sniping(enabled);
        self.apply_cpi(side, sensor);
    }

    /// Enable/disable drag-scroll and reprogram that side's sensor
    pub fn set_dragscroll_enabled(&mut self, side: Side, enabled: bool, sensor: &mut impl CpiSensor) {
        let slot = self.slot(side);
        self.state[slot].set_dragscroll(enabled);
        self.apply_cpi(side, sensor);
    }

    /// Step the default-mode DPI and persist the new steps
    pub fn cycle_default_dpi(
        &mut self,
        side: Side,
        forward: bool,
        sensor: &mut impl CpiSensor,
        store: &mut impl ConfigStore<SIDES>,
    ) {
        let slot = self.slot(side);
        let step = self
            .config
            .default_dpi
            .next_step(self.state[slot].default_dpi_step(), forward);
        self.state[slot].set_default_dpi_step(step);
        self.apply_cpi(side, sensor);
        self.persist(store);
    }

    /// Step the sniper-mode DPI and persist the new steps
    pub fn cycle_sniping_dpi(
        &mut self,
        side: Side,
        forward: bool,
        sensor: &mut impl CpiSensor,
        store: &mut impl ConfigStore<SIDES>,
    ) {
        let slot = self.slot(side);
        let step = self
            .config
            .sniping_dpi
            .next_step(self.state[slot].sniping_dpi_step(), forward);
        self.state[slot].set_sniping_dpi_step(step);
        self.apply_cpi(side, sensor);
        self.persist(store);
    }

    /// Reset all sides to step 0, persist and reprogram the sensors
    pub fn factory_reset(
        &mut self,
        store: &mut impl ConfigStore<SIDES>,
        sensor: &mut impl CpiSensor,
    ) {
        self.state = [RawConfig::default(); SIDES];
        self.persist(store);
        self.apply_cpi_all(sensor);
    }

    /// Handle a pointing device key event
    pub fn handle_action(
        &mut self,
        action: &PointerAction,
        pressed: bool,
        sensor: &mut impl CpiSensor,
        store: &mut impl ConfigStore<SIDES>,
    ) {
        match *action {
            PointerAction::DefaultDpi(side, inc) => {
                if pressed {
                    self.cycle_default_dpi(side, inc == Inc::Up, sensor, store);
                }
            }
            PointerAction::SnipingDpi(side, inc) => {
                if pressed {
                    self.cycle_sniping_dpi(side, inc == Inc::Up, sensor, store);
                }
            }
            PointerAction::Sniping(side, Trigger::Momentary) => {
                self.set_sniping_enabled(side, pressed, sensor);
            }
            PointerAction::Sniping(side, Trigger::Toggle) => {
                if pressed {
                    self.set_sniping_enabled(side, !self.sniping_enabled(side), sensor);
                }
            }
            PointerAction::DragScroll(side, Trigger::Momentary) => {
                self.set_dragscroll_enabled(side, pressed, sensor);
            }
            PointerAction::DragScroll(side, Trigger::Toggle) => {
                if pressed {
                    self.set_dragscroll_enabled(side, !self.dragscroll_enabled(side), sensor);
                }
            }
        }
    }

    /// Drag-scroll filtering of one side's raw motion for this polling tick
    ///
    /// While drag-scroll is off the report passes through untouched.
    pub fn filter_motion(&mut self, side: Side, report: &mut MotionReport) {
        let slot = self.slot(side);
        if self.state[slot].dragscroll() {
            self.scroll[slot].filter(&self.config.dragscroll, report);
        }
    }

    /// Periodic housekeeping: replicate configuration to the other half
    ///
    /// Only the master drives synchronization; on a slave this is a no-op.
    /// `now` is a monotonic millisecond timestamp.
    pub fn tick(&mut self, now: u32, tx: &mut impl SyncTransport<SIDES>) {
        if self.role == Role::Master {
            let snapshot = self.snapshot();
            self.sync.tick(&snapshot, now, tx);
        }
    }

    /// Apply a snapshot received from the master half
    ///
    /// Payloads whose size does not match the record are dropped silently.
    pub fn on_sync_rx(&mut self, payload: &[u8]) {
        if payload.len() != SIDES {
            crate::warn!("dropping sync payload of {} bytes", payload.len());
            return;
        }
        for (state, raw) in self.state.iter_mut().zip(payload) {
            *state = RawConfig(*raw);
        }
    }

    // Single-trackball builds route both sides to the one sensor slot.
    fn slot(&self, side: Side) -> usize {
        side.index().min(SIDES - 1)
    }

    fn snapshot(&self) -> [u8; SIDES] {
        self.state.map(|config| config.0)
    }

    fn persist(&self, store: &mut impl ConfigStore<SIDES>) {
        store.write(&self.state.map(|config| config.persisted()));
    }

    /// Program the sensor according to mode precedence:
    /// drag-scroll overrides sniper mode overrides the default table.
    fn apply_cpi(&self, side: Side, sensor: &mut impl CpiSensor) {
        let state = &self.state[self.slot(side)];
        let dpi = if state.dragscroll() {
            self.config.dragscroll.dpi
        } else if state.sniping() {
            self.config.sniping_dpi.dpi(state.sniping_dpi_step())
        } else {
            self.config.default_dpi.dpi(state.default_dpi_step())
        };
        crate::debug!("set_cpi[{}] = {}", self.slot(side), dpi);
        sensor.set_cpi(side, dpi);
    }

    fn apply_cpi_all(&self, sensor: &mut impl CpiSensor) {
        self.apply_cpi(Side::Left, sensor);
        if SIDES == 2 {
            self.apply_cpi(Side::Right, sensor);
        }
    }
}
