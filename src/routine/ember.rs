//! Yule log fire: random red/orange flames with crackle bursts.
//!
//! Startup sparks the flame symmetrically from both ends, fades in the
//! base fire color, then settles into randomized flames. A crackle window
//! lights up at a random offset every few iterations.

use embassy_time::Duration;

use super::{Context, Routine, Step};
use crate::color::{BLACK, Rgb, WHITE, scale8};
use crate::frame::StripBounds;

const SPARK_HOLD: Duration = Duration::from_millis(50);
const SPARK_GAP: Duration = Duration::from_millis(750);
const FADE_DELAY: Duration = Duration::from_millis(75);
const FLAME_DELAY: Duration = Duration::from_millis(100);

const SPARK_ROUNDS: u8 = 3;
const SPARK_STRIDE: usize = 10;

/// Peak of the fade-in ramp; also the base red level of the fire.
const FADE_TOP: u8 = 40;

/// Crackle window length in pixels.
const CRACKLE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Startup: brief symmetric white sparks.
    Spark { round: u8 },
    /// Startup: dark pause between sparks.
    SparkGap { round: u8 },
    /// Startup: ramp the base fire color in.
    FadeIn { level: u8 },
    /// Main loop: randomized flames.
    Flames,
}

#[derive(Debug, Clone)]
pub(crate) struct EmberRoutine {
    phase: Phase,
    crackle_counter: u8,
    next_crackle: u8,
}

impl EmberRoutine {
    pub(crate) fn new(_bounds: StripBounds) -> Self {
        Self {
            phase: Phase::Spark { round: 0 },
            crackle_counter: 0,
            next_crackle: 0,
        }
    }
}

impl Routine for EmberRoutine {
    #[allow(clippy::cast_possible_truncation)]
    fn step(&mut self, ctx: &mut Context<'_>) -> Step {
        if ctx.stop_requested() {
            ctx.frame.fill(BLACK);
            return Step::Finished;
        }

        let bounds = ctx.frame.bounds();
        match self.phase {
            Phase::Spark { round } => {
                let mut index = bounds.start;
                while index < bounds.median() {
                    ctx.frame.set(index, WHITE);
                    ctx.frame.set(bounds.mirror(index), WHITE);
                    index += SPARK_STRIDE;
                }
                self.phase = Phase::SparkGap { round };
                Step::Yield(SPARK_HOLD)
            }
            Phase::SparkGap { round } => {
                ctx.frame.fill(BLACK);
                self.phase = if round + 1 < SPARK_ROUNDS {
                    Phase::Spark { round: round + 1 }
                } else {
                    Phase::FadeIn { level: 0 }
                };
                Step::Yield(SPARK_GAP)
            }
            Phase::FadeIn { level } => {
                ctx.frame.fill(Rgb {
                    r: level,
                    g: level / 2,
                    b: 0,
                });
                self.phase = if level < FADE_TOP {
                    Phase::FadeIn { level: level + 1 }
                } else {
                    Phase::Flames
                };
                Step::Yield(FADE_DELAY)
            }
            Phase::Flames => {
                // Whole-strip brightness flickers between 60% and 75%.
                let glow = ctx.rng.gen_range(153, 192) as u8;

                for index in bounds.start..bounds.end() {
                    let red = ctx.rng.gen_range(40, 75) as u8;
                    let green = ctx.rng.gen_range(20, 30) as u8;
                    ctx.frame.set(
                        index,
                        Rgb {
                            r: scale8(red, glow),
                            g: scale8(green, glow),
                            b: 0,
                        },
                    );
                }

                if self.crackle_counter >= self.next_crackle {
                    let span = bounds.count.saturating_sub(CRACKLE_SIZE).max(1) as u32;
                    let start = bounds.start as u32 + ctx.rng.gen_range(0, span);
                    for index in start as usize..=start as usize + CRACKLE_SIZE {
                        ctx.frame.set(
                            index,
                            Rgb {
                                r: ctx.rng.gen_range(70, 95) as u8,
                                g: ctx.rng.gen_range(25, 35) as u8,
                                b: 0,
                            },
                        );
                    }
                    self.crackle_counter = 0;
                    self.next_crackle = ctx.rng.gen_range(2, 10) as u8;
                } else {
                    self.crackle_counter += 1;
                }

                Step::Yield(FLAME_DELAY)
            }
        }
    }
}
