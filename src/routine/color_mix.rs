//! Perpetual fade loop driven by the blend animator.
//!
//! Alternates between two blend legs forever: while the animator is
//! active the routine only advances it; once a leg completes it picks the
//! next target pair and a fresh random duration and starts over.

use embassy_time::Duration;

use super::{Context, Routine, Step};
use crate::color::{BLACK, Rgb};
use crate::frame::{Frame, StripBounds};

const SWEEP_DELAY: Duration = Duration::from_millis(5);
const UPDATE_DELAY: Duration = Duration::from_millis(10);

/// Shared start color of both legs.
const FADE_BASE: Rgb = Rgb {
    r: 175,
    g: 175,
    b: 175,
};
const FADE_RED: Rgb = Rgb { r: 140, g: 0, b: 0 };
const FADE_BLUE: Rgb = Rgb { r: 0, g: 0, b: 175 };

/// Random leg duration range in milliseconds.
const FADE_MS_MIN: u32 = 400;
const FADE_MS_MAX: u32 = 500;

/// Blend apply: the whole strip shows the same color.
fn fill_frame(frame: &mut Frame<'_>, color: Rgb) {
    frame.fill(color);
}

#[derive(Debug, Clone)]
pub(crate) struct ColorMixRoutine {
    cursor: usize,
    sweeping: bool,
    fade_to_red: bool,
}

impl ColorMixRoutine {
    pub(crate) fn new(bounds: StripBounds) -> Self {
        Self {
            cursor: bounds.start,
            sweeping: true,
            fade_to_red: true,
        }
    }
}

impl Routine for ColorMixRoutine {
    fn step(&mut self, ctx: &mut Context<'_>) -> Step {
        if ctx.stop_requested() {
            ctx.frame.fill(BLACK);
            return Step::Finished;
        }

        if self.sweeping {
            ctx.frame.set(self.cursor, FADE_BASE);
            self.cursor += 1;
            if self.cursor >= ctx.frame.bounds().end() {
                self.sweeping = false;
            }
            return Step::Yield(SWEEP_DELAY);
        }

        if ctx.animator.is_animating() {
            ctx.animator.update(ctx.now, &mut ctx.frame);
            return Step::Yield(UPDATE_DELAY);
        }

        // Previous leg finished; start the next one.
        let target = if self.fade_to_red { FADE_RED } else { FADE_BLUE };
        let duration = Duration::from_millis(u64::from(
            ctx.rng.gen_range(FADE_MS_MIN, FADE_MS_MAX),
        ));
        ctx.animator
            .start(0, duration, fill_frame, FADE_BASE, target, ctx.now);
        self.fade_to_red = !self.fade_to_red;
        Step::Yield(UPDATE_DELAY)
    }
}
