//! Animation routines and their cooperative contract.
//!
//! A routine is a long-running unit of work sliced into steps. Each step
//! does the pixel writes for one tick and yields with the delay until the
//! next tick; the scheduler commits the frame at that boundary. The yield
//! is also the cancellation point: every routine checks the stop request
//! at the top of each step, blanks the frame and finishes when it is set.
//!
//! Routines follow a two-phase protocol: a bounded startup sequence run
//! exactly once (immediate visual feedback), then the steady-state loop.

mod alternating;
mod christmas;
mod color_mix;
mod ember;
mod halloween;
mod line_out;
mod mello;
mod rainy_day;

use embassy_time::{Duration, Instant};

pub(crate) use alternating::AlternatingRoutine;
pub(crate) use christmas::ChristmasRoutine;
pub(crate) use color_mix::ColorMixRoutine;
pub(crate) use ember::EmberRoutine;
pub(crate) use halloween::HalloweenRoutine;
pub(crate) use line_out::LineOutRoutine;
pub(crate) use mello::MelloRoutine;
pub(crate) use rainy_day::RainyDayRoutine;

use crate::animator::BlendAnimator;
use crate::frame::{Frame, StripBounds};
use crate::registry::AnimationId;
use crate::rng::XorShift32;

/// Outcome of one cooperative step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Step {
    /// Work for this tick is done; run the next step after the delay.
    Yield(Duration),
    /// The routine terminated; the frame has been left blanked.
    Finished,
}

/// Everything a routine may touch during one step.
///
/// Holding the only [`Frame`] view here is what makes the single-writer
/// guarantee structural: no other code path can reach the pixel buffer
/// while a routine runs.
pub(crate) struct Context<'a> {
    pub(crate) frame: Frame<'a>,
    pub(crate) animator: &'a mut BlendAnimator<1>,
    pub(crate) rng: &'a mut XorShift32,
    pub(crate) now: Instant,
    stop_requested: bool,
}

impl<'a> Context<'a> {
    pub(crate) fn new(
        frame: Frame<'a>,
        animator: &'a mut BlendAnimator<1>,
        rng: &'a mut XorShift32,
        now: Instant,
        stop_requested: bool,
    ) -> Self {
        Self {
            frame,
            animator,
            rng,
            now,
            stop_requested,
        }
    }

    /// True once the scheduler has requested termination.
    pub(crate) fn stop_requested(&self) -> bool {
        self.stop_requested
    }
}

pub(crate) trait Routine {
    /// Run one tick worth of work.
    fn step(&mut self, ctx: &mut Context<'_>) -> Step;
}

/// Slot holding the active routine, one variant per catalog entry.
///
/// Enum dispatch keeps routines heap-free and statically known.
#[derive(Debug, Clone)]
pub(crate) enum RoutineSlot {
    Alternating(AlternatingRoutine),
    LineOut(LineOutRoutine),
    ColorMix(ColorMixRoutine),
    RainyDay(RainyDayRoutine),
    Christmas(ChristmasRoutine),
    Mello(MelloRoutine),
    Ember(EmberRoutine),
    Halloween(HalloweenRoutine),
    #[cfg(test)]
    Stuck(StuckRoutine),
}

impl RoutineSlot {
    pub(crate) fn for_animation(id: AnimationId, bounds: StripBounds) -> Self {
        match id {
            AnimationId::CopLightsAlternating => {
                Self::Alternating(AlternatingRoutine::new(bounds))
            }
            AnimationId::CopLightsLineOut => Self::LineOut(LineOutRoutine::new(bounds)),
            AnimationId::CopLightsMix => Self::ColorMix(ColorMixRoutine::new(bounds)),
            AnimationId::RainyDay => Self::RainyDay(RainyDayRoutine::new(bounds)),
            AnimationId::ChristmasDance => Self::Christmas(ChristmasRoutine::new(bounds)),
            AnimationId::MelloYello => Self::Mello(MelloRoutine::new(bounds)),
            AnimationId::YuleLog => Self::Ember(EmberRoutine::new(bounds)),
            AnimationId::HalloweenOrange => Self::Halloween(HalloweenRoutine::new(bounds)),
        }
    }

    pub(crate) fn step(&mut self, ctx: &mut Context<'_>) -> Step {
        match self {
            Self::Alternating(routine) => routine.step(ctx),
            Self::LineOut(routine) => routine.step(ctx),
            Self::ColorMix(routine) => routine.step(ctx),
            Self::RainyDay(routine) => routine.step(ctx),
            Self::Christmas(routine) => routine.step(ctx),
            Self::Mello(routine) => routine.step(ctx),
            Self::Ember(routine) => routine.step(ctx),
            Self::Halloween(routine) => routine.step(ctx),
            #[cfg(test)]
            Self::Stuck(routine) => routine.step(ctx),
        }
    }
}

/// Test-only routine that never honors the stop request. Models the
/// documented hazard of cooperative cancellation: a routine that does not
/// observe the flag stalls termination indefinitely.
#[cfg(test)]
#[derive(Debug, Clone)]
pub(crate) struct StuckRoutine;

#[cfg(test)]
impl Routine for StuckRoutine {
    fn step(&mut self, _ctx: &mut Context<'_>) -> Step {
        Step::Yield(Duration::from_millis(5))
    }
}
