//! Simulated thunderstorm: random raindrops over a dim backdrop with
//! time-gated lightning flashes. Each drop lands bright blue, fades down
//! across steps and then soaks back into the backdrop.

use embassy_time::Duration;

use super::{Context, Routine, Step};
use crate::color::{BLACK, Rgb, WHITE, YELLOW};
use crate::frame::StripBounds;

const SWEEP_DELAY: Duration = Duration::from_millis(5);
const DROP_DELAY: Duration = Duration::from_millis(500);
const DROP_FADE_DELAY: Duration = Duration::from_millis(5);
const FLASH_HOLD: Duration = Duration::from_millis(50);
const DOUBLE_GAP: Duration = Duration::from_millis(10);
const RESTORE_DELAY: Duration = Duration::from_millis(10);

/// A single flash fires every N iterations, a double flash every 2N.
const LIGHTNING_PERIOD: u32 = 20;

const RAIN_BACKDROP: Rgb = Rgb { r: 5, g: 5, b: 5 };

/// Drop blue fades from the top level down to the floor, one step each.
const DROP_TOP: u8 = 40;
const DROP_FLOOR: u8 = 15;

fn drop_blue(level: u8) -> Rgb {
    Rgb { r: 0, g: 0, b: level }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Startup: sweep the backdrop across the strip.
    Sweep,
    /// One storm iteration: place new drops at full brightness.
    Rain,
    /// Fade the placed drops down toward the floor, one level per step.
    DropFade { level: u8 },
    /// Soak the faded drops back into the backdrop, then wait.
    DropSoak,
    /// Single lightning flash, staged across yields.
    FlashSingle { stage: u8 },
    /// Double lightning flash, staged across yields.
    FlashDouble { stage: u8 },
}

#[derive(Debug, Clone)]
pub(crate) struct RainyDayRoutine {
    phase: Phase,
    cursor: usize,
    iteration: u32,
    drops: [usize; 3],
}

impl RainyDayRoutine {
    pub(crate) fn new(bounds: StripBounds) -> Self {
        Self {
            phase: Phase::Sweep,
            cursor: bounds.start,
            iteration: 1,
            drops: [bounds.start; 3],
        }
    }
}

impl Routine for RainyDayRoutine {
    fn step(&mut self, ctx: &mut Context<'_>) -> Step {
        if ctx.stop_requested() {
            ctx.frame.fill(BLACK);
            return Step::Finished;
        }

        let bounds = ctx.frame.bounds();
        match self.phase {
            Phase::Sweep => {
                ctx.frame.set(self.cursor, RAIN_BACKDROP);
                self.cursor += 1;
                if self.cursor >= bounds.end() {
                    self.phase = Phase::Rain;
                }
                Step::Yield(SWEEP_DELAY)
            }
            Phase::Rain => {
                if self.iteration % (LIGHTNING_PERIOD * 2) == 0 {
                    self.iteration = 1;
                    self.phase = Phase::FlashDouble { stage: 0 };
                    return self.step(ctx);
                }
                if self.iteration % LIGHTNING_PERIOD == 0 {
                    self.iteration += 1;
                    self.phase = Phase::FlashSingle { stage: 0 };
                    return self.step(ctx);
                }

                for drop in &mut self.drops {
                    *drop = pick_index(ctx, bounds);
                    ctx.frame.set(*drop, drop_blue(DROP_TOP));
                }
                self.phase = Phase::DropFade {
                    level: DROP_TOP - 1,
                };
                Step::Yield(DROP_FADE_DELAY)
            }
            Phase::DropFade { level } => {
                for drop in self.drops {
                    ctx.frame.set(drop, drop_blue(level));
                }
                self.phase = if level > DROP_FLOOR {
                    Phase::DropFade { level: level - 1 }
                } else {
                    Phase::DropSoak
                };
                Step::Yield(DROP_FADE_DELAY)
            }
            Phase::DropSoak => {
                for drop in self.drops {
                    ctx.frame.set(drop, RAIN_BACKDROP);
                }
                self.iteration += 1;
                self.phase = Phase::Rain;
                Step::Yield(DROP_DELAY)
            }
            Phase::FlashSingle { stage } => match stage {
                0 => {
                    ctx.frame.fill(YELLOW);
                    self.phase = Phase::FlashSingle { stage: 1 };
                    Step::Yield(FLASH_HOLD)
                }
                _ => {
                    ctx.frame.fill(RAIN_BACKDROP);
                    self.phase = Phase::Rain;
                    Step::Yield(RESTORE_DELAY)
                }
            },
            Phase::FlashDouble { stage } => match stage {
                0 | 2 => {
                    ctx.frame.fill(YELLOW);
                    self.phase = Phase::FlashDouble { stage: stage + 1 };
                    Step::Yield(FLASH_HOLD)
                }
                1 => {
                    ctx.frame.fill(WHITE);
                    self.phase = Phase::FlashDouble { stage: 2 };
                    Step::Yield(DOUBLE_GAP)
                }
                _ => {
                    ctx.frame.fill(RAIN_BACKDROP);
                    self.phase = Phase::Rain;
                    Step::Yield(RESTORE_DELAY)
                }
            },
        }
    }
}

#[allow(clippy::cast_possible_truncation)]
fn pick_index(ctx: &mut Context<'_>, bounds: StripBounds) -> usize {
    ctx.rng.gen_range(bounds.start as u32, bounds.end() as u32) as usize
}
