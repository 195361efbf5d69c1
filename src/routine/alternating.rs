//! Alternating red/blue halves with a white flash between swaps.

use embassy_time::Duration;

use super::{Context, Routine, Step};
use crate::color::{BLACK, BLUE, RED, WHITE};
use crate::frame::StripBounds;

const SWEEP_DELAY: Duration = Duration::from_millis(5);
const FLASH_HOLD: Duration = Duration::from_millis(200);
const HALVES_HOLD: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Startup: paint the first half red, one pixel per step.
    SweepRed,
    /// Startup: paint the second half blue, one pixel per step.
    SweepBlue,
    /// Main loop: white flash before the halves swap.
    Flash,
    /// Main loop: paint both halves in their current orientation.
    Halves,
}

#[derive(Debug, Clone)]
pub(crate) struct AlternatingRoutine {
    phase: Phase,
    cursor: usize,
    swapped: bool,
}

impl AlternatingRoutine {
    pub(crate) fn new(bounds: StripBounds) -> Self {
        Self {
            phase: Phase::SweepRed,
            cursor: bounds.start,
            swapped: false,
        }
    }
}

impl Routine for AlternatingRoutine {
    fn step(&mut self, ctx: &mut Context<'_>) -> Step {
        if ctx.stop_requested() {
            ctx.frame.fill(BLACK);
            return Step::Finished;
        }

        let bounds = ctx.frame.bounds();
        match self.phase {
            Phase::SweepRed => {
                ctx.frame.set(self.cursor, RED);
                self.cursor += 1;
                if self.cursor >= bounds.median() {
                    self.phase = Phase::SweepBlue;
                }
                Step::Yield(SWEEP_DELAY)
            }
            Phase::SweepBlue => {
                ctx.frame.set(self.cursor, BLUE);
                self.cursor += 1;
                if self.cursor >= bounds.end() {
                    self.phase = Phase::Flash;
                }
                Step::Yield(SWEEP_DELAY)
            }
            Phase::Flash => {
                ctx.frame.fill(WHITE);
                self.swapped = !self.swapped;
                self.phase = Phase::Halves;
                Step::Yield(FLASH_HOLD)
            }
            Phase::Halves => {
                let (first, second) = if self.swapped {
                    (BLUE, RED)
                } else {
                    (RED, BLUE)
                };
                for index in bounds.start..bounds.median() {
                    ctx.frame.set(index, first);
                }
                for index in bounds.median()..bounds.end() {
                    ctx.frame.set(index, second);
                }
                self.phase = Phase::Flash;
                Step::Yield(HALVES_HOLD)
            }
        }
    }
}
