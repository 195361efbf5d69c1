//! Animation lifecycle scheduler.
//!
//! Owns the pixel buffer and the single-active-animation invariant.
//! Exactly one routine at a time receives the [`Frame`] write view;
//! a new routine is never installed before the previous one has observed
//! the stop request, blanked the buffer and reported finished.
//!
//! Lifecycle: `Idle → Starting → Running → StopRequested → Stopped → Idle`.

use embassy_time::{Duration, Instant};

use crate::animator::BlendAnimator;
use crate::color::{BLACK, Rgb};
use crate::frame::{Frame, StripBounds};
use crate::registry::{self, Descriptor};
use crate::rng::XorShift32;
use crate::routine::{Context, RoutineSlot, Step};

/// Sleep hint returned while no routine is active.
const IDLE_SLEEP: Duration = Duration::from_millis(50);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    Idle,
    Starting,
    Running,
    StopRequested,
    Stopped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartError {
    /// The requested id is absent from the catalog; nothing was changed.
    UnknownAnimation(u8),
}

#[derive(Debug, Clone, Copy)]
pub struct SchedulerConfig {
    /// Addressable sub-range of the strip.
    pub bounds: StripBounds,
    /// PRNG seed, typically from [`seed_from_noise`](crate::rng::seed_from_noise).
    pub seed: u32,
}

/// Result of one scheduler tick.
pub struct Tick<'a> {
    /// The full pixel buffer, present when this tick changed it and the
    /// caller should commit it to the strip.
    pub frame: Option<&'a [Rgb]>,
    /// How long the active routine yielded for (or an idle pause).
    pub sleep: Duration,
}

pub struct Scheduler<const MAX_LEDS: usize> {
    leds: [Rgb; MAX_LEDS],
    bounds: StripBounds,
    animator: BlendAnimator<1>,
    rng: XorShift32,
    routine: Option<(u8, RoutineSlot)>,
    state: SchedulerState,
    stop_requested: bool,
    next_step: Instant,
    last_delay: Duration,
    dirty: bool,
}

impl<const MAX_LEDS: usize> Scheduler<MAX_LEDS> {
    pub fn new(config: &SchedulerConfig) -> Self {
        // Trim the bounds so they can never index past the buffer.
        let start = config.bounds.start.min(MAX_LEDS);
        let count = config.bounds.count.min(MAX_LEDS - start);
        Self {
            leds: [BLACK; MAX_LEDS],
            bounds: StripBounds { start, count },
            animator: BlendAnimator::new(),
            rng: XorShift32::new(config.seed),
            routine: None,
            state: SchedulerState::Idle,
            stop_requested: false,
            next_step: Instant::from_millis(0),
            last_delay: IDLE_SLEEP,
            dirty: false,
        }
    }

    /// Start the animation with the given id.
    ///
    /// An unknown id fails without touching the current selection. If a
    /// routine is active, it is cooperatively terminated first; this call
    /// does not return until the old routine has blanked the buffer and
    /// reported finished.
    pub fn start(&mut self, id: u8, now: Instant) -> Result<(), StartError> {
        let Some(animation) = registry::lookup(id) else {
            return Err(StartError::UnknownAnimation(id));
        };

        self.terminate_current(now);

        self.state = SchedulerState::Starting;
        self.stop_requested = false;
        self.animator.reset();
        self.routine = Some((id, RoutineSlot::for_animation(animation, self.bounds)));
        self.next_step = now;
        self.state = SchedulerState::Running;
        Ok(())
    }

    /// Request termination of the active routine and return immediately.
    ///
    /// The routine observes the request at its next step, so cessation
    /// latency is bounded by its own yield delay; termination is reported
    /// through [`tick`](Self::tick) reaching `Stopped`.
    pub fn stop(&mut self) {
        if matches!(
            self.state,
            SchedulerState::Starting | SchedulerState::Running
        ) {
            self.stop_requested = true;
            self.state = SchedulerState::StopRequested;
        }
    }

    /// Id of the current selection, `None` when idle.
    pub fn current(&self) -> Option<u8> {
        self.routine.as_ref().map(|(id, _)| *id)
    }

    pub fn state(&self) -> SchedulerState {
        self.state
    }

    /// The ordered `(id, name)` catalog.
    pub fn list(&self) -> &'static [Descriptor] {
        registry::list()
    }

    /// Advance the engine by at most one routine step.
    ///
    /// Call continuously; the returned sleep tells the embedding how long
    /// to wait before the next call.
    pub fn tick(&mut self, now: Instant) -> Tick<'_> {
        let mut sleep = IDLE_SLEEP;

        match self.state {
            SchedulerState::Running | SchedulerState::StopRequested => {
                // Drift correction: after a long stall, skip the backlog
                // instead of bursting to catch up.
                if now > self.next_step + self.last_delay * 2 {
                    self.next_step = now;
                }

                if now >= self.next_step {
                    match self.step_routine(now) {
                        Step::Yield(delay) => {
                            self.next_step = now + delay;
                            self.last_delay = delay;
                            sleep = delay;
                        }
                        Step::Finished => {
                            self.routine = None;
                            self.stop_requested = false;
                            self.state = SchedulerState::Stopped;
                        }
                    }
                } else {
                    sleep = self.next_step - now;
                }
            }
            SchedulerState::Stopped => {
                self.state = SchedulerState::Idle;
            }
            SchedulerState::Idle | SchedulerState::Starting => {}
        }

        let frame = if self.dirty {
            self.dirty = false;
            Some(&self.leds[..])
        } else {
            None
        };
        Tick { frame, sleep }
    }

    /// Run one step of the installed routine.
    fn step_routine(&mut self, now: Instant) -> Step {
        let Some((id, mut routine)) = self.routine.take() else {
            return Step::Finished;
        };
        let frame = Frame::new(&mut self.leds, self.bounds);
        let mut ctx = Context::new(
            frame,
            &mut self.animator,
            &mut self.rng,
            now,
            self.stop_requested,
        );
        let step = routine.step(&mut ctx);
        self.dirty = true;
        if !matches!(step, Step::Finished) {
            self.routine = Some((id, routine));
        }
        step
    }

    /// Cooperatively terminate the active routine, blocking until it has
    /// observed the request and finished.
    ///
    /// A well-formed routine finishes on its very next step. A routine
    /// that never honors the request would stall here; that hazard is
    /// inherent to cooperative cancellation.
    fn terminate_current(&mut self, now: Instant) {
        if self.routine.is_none() {
            self.state = SchedulerState::Idle;
            return;
        }

        self.stop_requested = true;
        self.state = SchedulerState::StopRequested;
        while matches!(self.step_routine(now), Step::Yield(_)) {}

        self.routine = None;
        self.stop_requested = false;
        self.state = SchedulerState::Stopped;
    }

    #[cfg(test)]
    fn install_unstoppable(&mut self, now: Instant) {
        self.routine = Some((200, RoutineSlot::Stuck(crate::routine::StuckRoutine)));
        self.state = SchedulerState::Running;
        self.stop_requested = false;
        self.next_step = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEDS: usize = 16;

    fn scheduler() -> Scheduler<LEDS> {
        Scheduler::new(&SchedulerConfig {
            bounds: StripBounds { start: 0, count: LEDS },
            seed: 7,
        })
    }

    #[test]
    fn stuck_routine_stalls_in_stop_requested() {
        let mut scheduler = scheduler();
        let mut now = Instant::from_millis(0);
        scheduler.install_unstoppable(now);

        scheduler.stop();
        assert_eq!(scheduler.state(), SchedulerState::StopRequested);

        // The routine keeps yielding without honoring the request; the
        // scheduler never reaches Stopped.
        for _ in 0..100 {
            let tick = scheduler.tick(now);
            now += tick.sleep;
        }
        assert_eq!(scheduler.state(), SchedulerState::StopRequested);
        assert_eq!(scheduler.current(), Some(200));
    }

    #[test]
    fn bounds_are_trimmed_to_the_buffer() {
        let scheduler = Scheduler::<8>::new(&SchedulerConfig {
            bounds: StripBounds { start: 4, count: 100 },
            seed: 1,
        });
        assert_eq!(scheduler.bounds, StripBounds { start: 4, count: 4 });
    }
}
