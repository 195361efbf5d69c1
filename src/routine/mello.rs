//! Mellow green backdrop with a bouncing yellow window.
//!
//! The window drags a trailing brightness gradient behind it; trail
//! indices are clamped to the bounds, and the window reverses direction
//! at either end instead of wrapping.

use embassy_time::Duration;

use super::{Context, Routine, Step};
use crate::color::{BLACK, Rgb};
use crate::frame::StripBounds;

const SWEEP_DELAY: Duration = Duration::from_millis(5);
const MOVE_DELAY: Duration = Duration::from_millis(25);

/// Trail length in pixels; also the peak trail brightness.
const TRAIL: i32 = 25;

const MELLOW_GREEN: Rgb = Rgb { r: 0, g: 15, b: 0 };

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Backward,
}

#[derive(Debug, Clone)]
pub(crate) struct MelloRoutine {
    sweeping: bool,
    cursor: usize,
    direction: Direction,
}

impl MelloRoutine {
    pub(crate) fn new(bounds: StripBounds) -> Self {
        Self {
            sweeping: true,
            cursor: bounds.start,
            direction: Direction::Forward,
        }
    }
}

impl Routine for MelloRoutine {
    #[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
    fn step(&mut self, ctx: &mut Context<'_>) -> Step {
        if ctx.stop_requested() {
            ctx.frame.fill(BLACK);
            return Step::Finished;
        }

        let bounds = ctx.frame.bounds();
        if self.sweeping {
            ctx.frame.set(self.cursor, MELLOW_GREEN);
            self.cursor += 1;
            if self.cursor >= bounds.end() {
                self.sweeping = false;
                self.cursor = bounds.start;
            }
            return Step::Yield(SWEEP_DELAY);
        }

        if self.cursor + 1 >= bounds.end() {
            self.direction = Direction::Backward;
        } else if self.cursor <= bounds.start {
            self.direction = Direction::Forward;
        }

        ctx.frame.set(self.cursor, BLACK);

        let cursor = self.cursor as i32;
        match self.direction {
            Direction::Forward => {
                let tail = bounds.clamp(cursor - TRAIL);
                let mut brightness = TRAIL as u8;
                for index in (tail..=self.cursor).rev() {
                    ctx.frame.set(
                        index,
                        Rgb {
                            r: brightness,
                            g: brightness,
                            b: 0,
                        },
                    );
                    brightness = brightness.saturating_sub(1);
                }
                ctx.frame.set(tail, MELLOW_GREEN);
                self.cursor += 1;
            }
            Direction::Backward => {
                let tail = bounds.clamp(cursor + TRAIL);
                let mut brightness = TRAIL as u8;
                for index in self.cursor..=tail {
                    ctx.frame.set(
                        index,
                        Rgb {
                            r: brightness,
                            g: brightness,
                            b: 0,
                        },
                    );
                    brightness = brightness.saturating_sub(1);
                }
                ctx.frame.set(tail, MELLOW_GREEN);
                if self.cursor > bounds.start {
                    self.cursor -= 1;
                }
            }
        }

        Step::Yield(MOVE_DELAY)
    }
}
