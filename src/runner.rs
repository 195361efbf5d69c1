//! Frame pacing and output commit around the scheduler.
//!
//! The runner is the glue the embedding calls in its render loop: it
//! drains pending control commands, ticks the scheduler and writes
//! committed frames to the output driver. The caller is responsible for
//! sleeping until the returned deadline.

use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::OutputDriver;
use crate::command::{Command, CommandReceiver};
use crate::scheduler::Scheduler;

/// Result of one runner tick.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// The deadline for the next tick.
    pub next_deadline: Instant,
    /// How long to wait until the next tick.
    pub sleep_duration: Duration,
}

/// Drives a [`Scheduler`] against an output driver and a command queue.
///
/// # Usage
///
/// ```ignore
/// let mut runner = AnimationRunner::new(scheduler, driver, queue.receiver());
///
/// loop {
///     let result = runner.tick(Instant::now());
///     // Platform-specific sleep
///     sleep_ms(result.sleep_duration.as_millis());
/// }
/// ```
pub struct AnimationRunner<'a, O: OutputDriver, const MAX_LEDS: usize, const COMMANDS: usize> {
    output: O,
    scheduler: Scheduler<MAX_LEDS>,
    commands: CommandReceiver<'a, COMMANDS>,
}

impl<'a, O: OutputDriver, const MAX_LEDS: usize, const COMMANDS: usize>
    AnimationRunner<'a, O, MAX_LEDS, COMMANDS>
{
    pub fn new(
        scheduler: Scheduler<MAX_LEDS>,
        driver: O,
        commands: CommandReceiver<'a, COMMANDS>,
    ) -> Self {
        Self {
            output: driver,
            scheduler,
            commands,
        }
    }

    /// Process pending commands, advance the engine one step and commit
    /// the frame when it changed.
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        while let Some(command) = self.commands.try_receive() {
            match command {
                Command::Start(id) => {
                    if let Err(_err) = self.scheduler.start(id, now) {
                        #[cfg(feature = "esp32-log")]
                        println!("animation start rejected: {:?}", _err);
                    }
                }
                Command::Stop => self.scheduler.stop(),
            }
        }

        let tick = self.scheduler.tick(now);
        if let Some(frame) = tick.frame {
            self.output.write(frame);
        }

        FrameResult {
            next_deadline: now + tick.sleep,
            sleep_duration: tick.sleep,
        }
    }

    /// Get a reference to the scheduler.
    pub fn scheduler(&self) -> &Scheduler<MAX_LEDS> {
        &self.scheduler
    }

    /// Get a reference to the output driver.
    pub fn output(&self) -> &O {
        &self.output
    }

    /// Get a mutable reference to the scheduler.
    pub fn scheduler_mut(&mut self) -> &mut Scheduler<MAX_LEDS> {
        &mut self.scheduler
    }
}
