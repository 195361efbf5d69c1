//! Red and green dancing over snow white.
//!
//! Pixels are classified by index parity: odd pixels hold a dim white,
//! even pixels alternate red/green and swap places each cycle, which
//! reads as motion.

use embassy_time::Duration;

use super::{Context, Routine, Step};
use crate::color::{BLACK, DIM_WHITE, GREEN, RED, Rgb};
use crate::frame::StripBounds;

const SWEEP_DELAY: Duration = Duration::from_millis(5);
const SWAP_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Sweep,
    Dance,
}

#[derive(Debug, Clone)]
pub(crate) struct ChristmasRoutine {
    phase: Phase,
    cursor: usize,
    even_index: u32,
    swapped: bool,
}

impl ChristmasRoutine {
    pub(crate) fn new(bounds: StripBounds) -> Self {
        Self {
            phase: Phase::Sweep,
            cursor: bounds.start,
            even_index: 0,
            swapped: false,
        }
    }

    fn even_color(even_index: u32, swapped: bool) -> Rgb {
        if (even_index % 2 == 0) ^ swapped {
            RED
        } else {
            GREEN
        }
    }
}

impl Routine for ChristmasRoutine {
    fn step(&mut self, ctx: &mut Context<'_>) -> Step {
        if ctx.stop_requested() {
            ctx.frame.fill(BLACK);
            return Step::Finished;
        }

        let bounds = ctx.frame.bounds();
        match self.phase {
            Phase::Sweep => {
                if self.cursor % 2 == 0 {
                    ctx.frame
                        .set(self.cursor, Self::even_color(self.even_index, false));
                    self.even_index += 1;
                } else {
                    ctx.frame.set(self.cursor, DIM_WHITE);
                }
                self.cursor += 1;
                if self.cursor >= bounds.end() {
                    self.phase = Phase::Dance;
                }
                Step::Yield(SWEEP_DELAY)
            }
            Phase::Dance => {
                let mut even_index = 0;
                for index in bounds.start..bounds.end() {
                    if index % 2 == 0 {
                        ctx.frame
                            .set(index, Self::even_color(even_index, self.swapped));
                        even_index += 1;
                    } else {
                        ctx.frame.set(index, DIM_WHITE);
                    }
                }
                self.swapped = !self.swapped;
                Step::Yield(SWAP_DELAY)
            }
        }
    }
}
