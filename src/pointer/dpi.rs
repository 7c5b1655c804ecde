//! DPI step tables.
//!
//! A profile maps a small step index onto an actual sensor DPI value. Two
//! independent profiles exist: one for normal operation and one for sniper
//! mode. Stepping past either end of a table wraps around; the wraparound is
//! a declared contract of [`DpiProfile::next_step`], not an accident of the
//! storage bit width.

/// Linear DPI table: `dpi(step) = minimum + step * step_size`
pub struct DpiProfile {
    /// DPI value at step 0
    pub minimum: u16,
    /// DPI increment between consecutive steps
    pub step_size: u16,
    /// Number of steps in the table; valid steps are `0..steps`
    pub steps: u8,
}

/// Default-mode table: 400-3400 DPI in 16 steps of 200
pub const DEFAULT_DPI: DpiProfile = DpiProfile {
    minimum: 400,
    step_size: 200,
    steps: 16,
};

/// Sniper-mode table: 200-500 DPI in 4 steps of 100
pub const SNIPING_DPI: DpiProfile = DpiProfile {
    minimum: 200,
    step_size: 100,
    steps: 4,
};

impl DpiProfile {
    /// Actual DPI value for a step index
    pub const fn dpi(&self, step: u8) -> u16 {
        self.minimum + step as u16 * self.step_size
    }

    /// Circular step through `0..steps`
    pub const fn next_step(&self, step: u8, forward: bool) -> u8 {
        if forward {
            if step + 1 >= self.steps {
                0
            } else {
                step + 1
            }
        } else if step == 0 {
            self.steps - 1
        } else {
            step - 1
        }
    }
}
