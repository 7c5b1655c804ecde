//! Drag-scroll motion filter.
//!
//! While drag-scroll is active, raw trackball motion is taken out of the
//! report and accumulated per axis; once an accumulator passes the threshold
//! a single `+1`/`-1` scroll pulse is emitted and that accumulator starts
//! over from zero. This converts continuous motion into discrete scroll
//! ticks at a rate proportional to how fast the ball is moved.

/// Raw motion report of one side's sensor for a single polling tick
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MotionReport {
    /// Horizontal pointer movement
    pub x: i16,
    /// Vertical pointer movement
    pub y: i16,
    /// Horizontal scroll
    pub h: i8,
    /// Vertical scroll
    pub v: i8,
}

/// Static drag-scroll configuration
pub struct DragScrollConfig {
    /// Accumulated motion needed before a scroll pulse is emitted
    pub threshold: i16,
    /// Invert horizontal scroll direction
    pub invert_x: bool,
    /// Invert vertical scroll direction
    pub invert_y: bool,
    /// Fixed sensor DPI while drag-scroll is active
    pub dpi: u16,
}

/// Reasonable defaults for a 34 mm trackball
pub const DEFAULT_DRAGSCROLL: DragScrollConfig = DragScrollConfig {
    threshold: 6,
    invert_x: false,
    invert_y: false,
    dpi: 100,
};

/// Per-side motion accumulator, only advanced while drag-scroll is active
#[derive(Clone, Copy)]
pub(crate) struct ScrollAccumulator {
    x: i16,
    y: i16,
}

impl ScrollAccumulator {
    pub const fn new() -> Self {
        Self { x: 0, y: 0 }
    }

    /// Turn accumulated motion into scroll pulses
    ///
    /// Consumes the report's x/y movement and emits at most one pulse per
    /// axis; both axes are independent and may fire in the same tick.
    pub fn filter(&mut self, config: &DragScrollConfig, report: &mut MotionReport) {
        let dx = if config.invert_x { -report.x } else { report.x };
        let dy = if config.invert_y { -report.y } else { report.y };
        self.x = self.x.saturating_add(dx);
        self.y = self.y.saturating_add(dy);
        report.x = 0;
        report.y = 0;
        if self.x.abs() > config.threshold {
            report.h = if self.x > 0 { 1 } else { -1 };
            self.x = 0;
        }
        if self.y.abs() > config.threshold {
            report.v = if self.y > 0 { 1 } else { -1 };
            self.y = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(acc: &mut ScrollAccumulator, config: &DragScrollConfig, x: i16, y: i16) -> MotionReport {
        let mut report = MotionReport { x, y, h: 0, v: 0 };
        acc.filter(config, &mut report);
        report
    }

    #[test]
    fn pulse_after_threshold_exceeded() {
        let mut acc = ScrollAccumulator::new();
        // threshold 6: six unit deltas accumulate silently, the 7th fires
        for _ in 0..6 {
            let report = feed(&mut acc, &DEFAULT_DRAGSCROLL, 1, 0);
            assert_eq!(report, MotionReport::default());
        }
        let report = feed(&mut acc, &DEFAULT_DRAGSCROLL, 1, 0);
        assert_eq!(report, MotionReport { x: 0, y: 0, h: 1, v: 0 });
    }

    #[test]
    fn accumulator_restarts_from_zero_after_pulse() {
        let mut acc = ScrollAccumulator::new();
        for _ in 0..7 {
            feed(&mut acc, &DEFAULT_DRAGSCROLL, 1, 0);
        }
        // it takes a full 7 samples again before the next pulse
        for _ in 0..6 {
            let report = feed(&mut acc, &DEFAULT_DRAGSCROLL, 1, 0);
            assert_eq!(report.h, 0);
        }
        let report = feed(&mut acc, &DEFAULT_DRAGSCROLL, 1, 0);
        assert_eq!(report.h, 1);
    }

    #[test]
    fn negative_motion_emits_negative_pulse() {
        let mut acc = ScrollAccumulator::new();
        let report = feed(&mut acc, &DEFAULT_DRAGSCROLL, -7, 0);
        assert_eq!(report, MotionReport { x: 0, y: 0, h: -1, v: 0 });
    }

    #[test]
    fn axes_are_independent_and_may_both_fire() {
        let mut acc = ScrollAccumulator::new();
        let report = feed(&mut acc, &DEFAULT_DRAGSCROLL, 7, -7);
        assert_eq!(report, MotionReport { x: 0, y: 0, h: 1, v: -1 });

        // one axis firing leaves the other accumulating
        let mut acc = ScrollAccumulator::new();
        feed(&mut acc, &DEFAULT_DRAGSCROLL, 7, 3);
        let report = feed(&mut acc, &DEFAULT_DRAGSCROLL, 0, 4);
        assert_eq!(report, MotionReport { x: 0, y: 0, h: 0, v: 1 });
    }

    #[test]
    fn movement_is_always_consumed() {
        let mut acc = ScrollAccumulator::new();
        let report = feed(&mut acc, &DEFAULT_DRAGSCROLL, 3, -2);
        assert_eq!(report, MotionReport::default());
    }

    #[test]
    fn inverted_axes() {
        let config = DragScrollConfig {
            invert_x: true,
            invert_y: true,
            ..DEFAULT_DRAGSCROLL
        };
        let mut acc = ScrollAccumulator::new();
        let report = feed(&mut acc, &config, 7, -7);
        assert_eq!(report, MotionReport { x: 0, y: 0, h: -1, v: 1 });
    }
}
