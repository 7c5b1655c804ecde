pub use crate::utils::Inc;

use crate::sides::Side;

/// Key actions related to the pointing device
///
/// The keymap layer maps custom keycodes onto these; keycodes it does not
/// know simply never reach [`Pointer::handle_action`](super::Pointer::handle_action).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PointerAction {
    /// Step the default-mode DPI up or down (acts on key press)
    DefaultDpi(Side, Inc),
    /// Step the sniper-mode DPI up or down (acts on key press)
    SnipingDpi(Side, Inc),
    /// Control sniper mode
    Sniping(Side, Trigger),
    /// Control drag-scroll mode
    DragScroll(Side, Trigger),
}

/// How a key controls a mode flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Trigger {
    /// Mode is active for as long as the key is held
    Momentary,
    /// Mode is flipped on each key press
    Toggle,
}
