//! Two converging lines, one red and one blue, meeting mid-strip.
//!
//! The blue line uses mirrored-half addressing (`mirror(cursor)`); the
//! trailing erase indices are clamped to the bounds, never wrapped.

use embassy_time::Duration;

use super::{Context, Routine, Step};
use crate::color::{BLACK, BLUE, RED, WHITE};
use crate::frame::StripBounds;

const SWEEP_DELAY: Duration = Duration::from_millis(5);
const MARCH_DELAY: Duration = Duration::from_millis(5);
const BURST_DELAY: Duration = Duration::from_millis(1);

/// Length of each moving line in pixels.
const LINE_SIZE: i32 = 36;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Startup: sweep the first half red.
    SweepRed,
    /// Startup: sweep the second half blue.
    SweepBlue,
    /// Blank the strip before the lines march again.
    Clear,
    /// Advance both lines one pixel toward the midpoint.
    March,
    /// White burst expanding from the midpoint once the lines meet.
    Burst,
}

#[derive(Debug, Clone)]
pub(crate) struct LineOutRoutine {
    phase: Phase,
    cursor: usize,
    burst: i32,
}

impl LineOutRoutine {
    pub(crate) fn new(bounds: StripBounds) -> Self {
        Self {
            phase: Phase::SweepRed,
            cursor: bounds.start,
            burst: 0,
        }
    }
}

impl Routine for LineOutRoutine {
    #[allow(clippy::cast_possible_wrap)]
    fn step(&mut self, ctx: &mut Context<'_>) -> Step {
        if ctx.stop_requested() {
            ctx.frame.fill(BLACK);
            return Step::Finished;
        }

        let bounds = ctx.frame.bounds();
        let median = bounds.median();
        match self.phase {
            Phase::SweepRed => {
                ctx.frame.set(self.cursor, RED);
                self.cursor += 1;
                if self.cursor >= median {
                    self.phase = Phase::SweepBlue;
                }
                Step::Yield(SWEEP_DELAY)
            }
            Phase::SweepBlue => {
                ctx.frame.set(self.cursor, BLUE);
                self.cursor += 1;
                if self.cursor >= bounds.end() {
                    self.phase = Phase::Clear;
                }
                Step::Yield(SWEEP_DELAY)
            }
            Phase::Clear => {
                ctx.frame.fill(BLACK);
                self.cursor = bounds.start;
                self.phase = Phase::March;
                Step::Yield(MARCH_DELAY)
            }
            Phase::March => {
                if self.cursor >= median {
                    self.burst = 0;
                    self.phase = Phase::Burst;
                    return Step::Yield(BURST_DELAY);
                }
                let mirrored = bounds.mirror(self.cursor);
                ctx.frame.set(self.cursor, RED);
                ctx.frame.set(mirrored, BLUE);

                // Erase the tail ends so each line stays LINE_SIZE long.
                let red_tail = bounds.clamp(self.cursor as i32 - LINE_SIZE / 2);
                let blue_tail = bounds.clamp(mirrored as i32 + LINE_SIZE / 2);
                ctx.frame.set(red_tail, BLACK);
                ctx.frame.set(blue_tail, BLACK);

                self.cursor += 1;
                Step::Yield(MARCH_DELAY)
            }
            Phase::Burst => {
                ctx.frame
                    .set(bounds.clamp(median as i32 - 1 - self.burst), WHITE);
                ctx.frame.set(bounds.clamp(median as i32 + self.burst), WHITE);
                self.burst += 1;
                if self.burst >= LINE_SIZE / 2 {
                    self.phase = Phase::Clear;
                }
                Step::Yield(BURST_DELAY)
            }
        }
    }
}
