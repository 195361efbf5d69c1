//! Time-based color blend animator.
//!
//! Tracks a fixed small number of timed color transitions ("channels").
//! Each `update` advances every active channel, blends the channel colors
//! at the current progress and hands the result to the channel's apply
//! function, which writes it into the frame.

use embassy_time::{Duration, Instant};

use crate::color::{Rgb, linear_blend};
use crate::frame::Frame;

/// Writes one blended color into the frame.
///
/// A plain function pointer so channel state stays `Copy` without
/// allocations.
pub type BlendApply = fn(&mut Frame<'_>, Rgb);

#[derive(Debug, Clone, Copy)]
struct ChannelState {
    from: Rgb,
    to: Rgb,
    apply: BlendApply,
    started: Instant,
    duration: Duration,
}

/// Animator over `CHANNELS` independent transition slots.
///
/// The engine instantiates one channel; every pixel of an animation is
/// driven by the same blend.
#[derive(Debug, Clone)]
pub struct BlendAnimator<const CHANNELS: usize> {
    channels: [Option<ChannelState>; CHANNELS],
}

impl<const CHANNELS: usize> BlendAnimator<CHANNELS> {
    pub const fn new() -> Self {
        Self {
            channels: [None; CHANNELS],
        }
    }

    /// Start a transition on `channel`.
    ///
    /// Starting an already-active channel overwrites it in place; there is
    /// no queueing. Out-of-range channels are ignored.
    pub fn start(
        &mut self,
        channel: usize,
        duration: Duration,
        apply: BlendApply,
        from: Rgb,
        to: Rgb,
        now: Instant,
    ) {
        let Some(slot) = self.channels.get_mut(channel) else {
            return;
        };
        *slot = Some(ChannelState {
            from,
            to,
            apply,
            started: now,
            duration,
        });
    }

    /// Advance every active channel and write the blended colors.
    ///
    /// A channel is deactivated exactly once, on the update where its
    /// progress reaches 1.0; that final frame is still applied. A
    /// zero-duration transition completes on its first update.
    #[allow(clippy::cast_precision_loss)]
    pub fn update(&mut self, now: Instant, frame: &mut Frame<'_>) {
        for slot in &mut self.channels {
            let Some(channel) = slot else {
                continue;
            };
            let elapsed = now.duration_since(channel.started);
            let progress = if channel.duration.as_millis() == 0 {
                1.0
            } else {
                let p = elapsed.as_millis() as f32 / channel.duration.as_millis() as f32;
                p.min(1.0)
            };

            (channel.apply)(frame, linear_blend(channel.from, channel.to, progress));

            if progress >= 1.0 {
                *slot = None;
            }
        }
    }

    /// True while any channel is active. Never re-activates without a new
    /// [`start`](Self::start).
    pub fn is_animating(&self) -> bool {
        self.channels.iter().any(Option::is_some)
    }

    /// Deactivate all channels.
    pub fn reset(&mut self) {
        self.channels = [None; CHANNELS];
    }
}

impl<const CHANNELS: usize> Default for BlendAnimator<CHANNELS> {
    fn default() -> Self {
        Self::new()
    }
}
