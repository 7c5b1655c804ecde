//! Pointing device logic for a split trackball keyboard.
//!
//! Implements the DPI / sniper-mode / drag-scroll controller for a
//! trackball-equipped split keyboard. The host firmware provides the hard
//! parts (USB HID, matrix scanning, the link between halves, EEPROM) and is
//! consumed here through small capability traits; this crate owns the
//! per-side configuration state, the mode precedence rules, the drag-scroll
//! motion filter, and the replication of configuration to the other half.

#![no_std]

// Use std when running tests, see: https://stackoverflow.com/a/28186509
// Make sure to use different target when testing, e.g.
//   cargo test --target x86_64-unknown-linux-gnu
#[cfg(test)]
#[macro_use]
extern crate std;

#[macro_use]
mod macros;

pub mod pointer;
pub mod sides;
pub mod utils;
