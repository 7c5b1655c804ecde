//! Replication of pointer configuration between keyboard halves.
//!
//! Only the master half drives synchronization; the slave just overwrites
//! its mirrored copy whenever a well-formed snapshot arrives. The snapshot
//! is the raw configuration record, one byte per side, left first.

/// Role of a keyboard half on the link, fixed by the link topology
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Role {
    /// Connected to USB, drives synchronization
    Master,
    /// Receives snapshots and mirrors the master's configuration
    Slave,
}

/// Transport for configuration snapshots over the half-to-half link
///
/// A send either completes or fails as a whole; failures are not errors,
/// the snapshot is simply retried on a later housekeeping tick.
pub trait SyncTransport<const SIDES: usize> {
    fn send(&mut self, snapshot: &[u8; SIDES]) -> bool;
}

/// Master-side change tracking for configuration replication
pub(crate) struct SyncMonitor<const SIDES: usize> {
    last_sent: [u8; SIDES],
    last_sync: u32,
}

impl<const SIDES: usize> SyncMonitor<SIDES> {
    /// Resend period even when nothing changed
    pub const HEARTBEAT_MS: u32 = 500;

    pub const fn new() -> Self {
        Self {
            last_sent: [0; SIDES],
            last_sync: 0,
        }
    }

    /// Send the snapshot if it changed or the heartbeat elapsed
    ///
    /// To be called once per housekeeping tick with a monotonic millisecond
    /// timestamp. A failed send leaves `last_sync` untouched, so the ever
    /// growing heartbeat window retries it on a following tick.
    pub fn tick<T: SyncTransport<SIDES>>(&mut self, snapshot: &[u8; SIDES], now: u32, tx: &mut T) {
        let mut needs_sync = false;

        if snapshot != &self.last_sent {
            needs_sync = true;
            self.last_sent = *snapshot;
        }

        if now.wrapping_sub(self.last_sync) > Self::HEARTBEAT_MS {
            needs_sync = true;
        }

        if needs_sync && tx.send(snapshot) {
            crate::debug!("config sync at {}", now);
            self.last_sync = now;
        }
    }
}
