#![no_std]

pub mod animator;
pub mod color;
pub mod command;
pub mod frame;
pub mod registry;
pub mod rng;
mod routine;
pub mod runner;
pub mod scheduler;

pub use animator::{BlendAnimator, BlendApply};
pub use color::{Rgb, linear_blend};
pub use command::{Command, CommandQueue, CommandReceiver, CommandSender};
pub use frame::{Frame, StripBounds};
pub use registry::{AnimationId, Descriptor};
pub use rng::{NoiseSource, XorShift32, seed_from_noise};
pub use runner::{AnimationRunner, FrameResult};
pub use scheduler::{Scheduler, SchedulerConfig, SchedulerState, StartError};

pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The animation engine is generic over this trait; `write` is the atomic
/// commit of the whole frame buffer to the physical strip.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}
