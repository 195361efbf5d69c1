//! Fading orange lines over black.
//!
//! The strip is divided into alternating blocks of `LINE_SIZE` pixels.
//! One set of blocks fades out while the other fades in; when the ramp
//! bottoms out the sets exchange roles.

use embassy_time::Duration;

use super::{Context, Routine, Step};
use crate::color::{BLACK, Rgb};
use crate::frame::StripBounds;

const SWEEP_DELAY: Duration = Duration::from_millis(5);
const FADE_DELAY: Duration = Duration::from_millis(70);

/// Block length in pixels.
const LINE_SIZE: usize = 12;

/// Peak orange brightness; the ramp walks down from here.
const ORANGE_TOP: u8 = 74;
const FADE_STEP: u8 = 4;

fn orange(brightness: u8) -> Rgb {
    Rgb {
        r: brightness,
        g: brightness / 4,
        b: 0,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Startup: paint the lit blocks one pixel per step.
    Sweep,
    /// Main loop: crossfade the two block sets, then swap them.
    Fade { level: u8 },
}

#[derive(Debug, Clone)]
pub(crate) struct HalloweenRoutine {
    phase: Phase,
    cursor: usize,
    swapped: bool,
}

impl HalloweenRoutine {
    pub(crate) fn new(bounds: StripBounds) -> Self {
        Self {
            phase: Phase::Sweep,
            cursor: bounds.start,
            swapped: false,
        }
    }

    fn block_is_even(bounds: StripBounds, index: usize) -> bool {
        (index - bounds.start) / LINE_SIZE % 2 == 0
    }
}

impl Routine for HalloweenRoutine {
    fn step(&mut self, ctx: &mut Context<'_>) -> Step {
        if ctx.stop_requested() {
            ctx.frame.fill(BLACK);
            return Step::Finished;
        }

        let bounds = ctx.frame.bounds();
        match self.phase {
            Phase::Sweep => {
                ctx.frame.set(self.cursor, orange(ORANGE_TOP));
                self.cursor += 1;
                // Dark blocks stay black; jump straight to the next lit one.
                if !Self::block_is_even(bounds, self.cursor) {
                    self.cursor += LINE_SIZE;
                }
                if self.cursor >= bounds.end() {
                    self.phase = Phase::Fade { level: ORANGE_TOP };
                }
                Step::Yield(SWEEP_DELAY)
            }
            Phase::Fade { level } => {
                for index in bounds.start..bounds.end() {
                    let brightness = if Self::block_is_even(bounds, index) ^ self.swapped {
                        level
                    } else {
                        ORANGE_TOP - level
                    };
                    ctx.frame.set(index, orange(brightness));
                }
                if level < FADE_STEP {
                    self.swapped = !self.swapped;
                    self.phase = Phase::Fade { level: ORANGE_TOP };
                } else {
                    self.phase = Phase::Fade {
                        level: level - FADE_STEP,
                    };
                }
                Step::Yield(FADE_DELAY)
            }
        }
    }
}
