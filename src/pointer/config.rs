//! Packed per-side configuration record and its persistent storage.

use bitfield::bitfield;
use static_assertions::const_assert_eq;

bitfield! {
    /// Per-side pointer configuration packed into a single byte
    ///
    /// This exact layout is both the persisted record and the wire format of
    /// the half-to-half sync snapshot. The two mode flags are carried on the
    /// wire but never persisted: [`load`](RawConfig::load) always clears
    /// them, so only the DPI steps survive a power cycle.
    #[derive(Clone, Copy, PartialEq, Eq)]
    #[cfg_attr(test, derive(Debug))]
    pub struct RawConfig(u8);
    pub u8, default_dpi_step, set_default_dpi_step: 3, 0;  // 16 steps available
    pub u8, sniping_dpi_step, set_sniping_dpi_step: 5, 4;  // 4 steps available
    pub dragscroll, set_dragscroll: 6;
    pub sniping, set_sniping: 7;
}

const_assert_eq!(core::mem::size_of::<RawConfig>(), 1);

impl RawConfig {
    /// Byte image written to persistent storage
    ///
    /// Only the DPI steps are persisted; the mode flag bits are masked off
    /// so a stored record can never resurrect a transient mode.
    pub fn persisted(&self) -> u8 {
        let mut config = *self;
        config.set_dragscroll(false);
        config.set_sniping(false);
        config.0
    }

    /// Reconstruct a record loaded from persistent storage
    ///
    /// The mode flags are deliberately not persisted across reboots, so they
    /// are forced off here regardless of what was last written.
    pub fn load(raw: u8) -> Self {
        let mut config = Self(raw);
        config.set_dragscroll(false);
        config.set_sniping(false);
        config
    }
}

impl Default for RawConfig {
    fn default() -> Self {
        Self(0)
    }
}

/// Persistent storage for the pointer configuration record
///
/// One byte per side, left first. Reads and writes transfer the whole
/// record; the store is expected to be backed by EEPROM tied to the device
/// identity and must not fail.
pub trait ConfigStore<const SIDES: usize> {
    fn read(&mut self) -> [u8; SIDES];
    fn write(&mut self, raw: &[u8; SIDES]);
}
