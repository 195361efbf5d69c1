//! Frame buffer with bounds-checked pixel addressing.
//!
//! All pixel mutation is in-memory; the hardware commit happens when the
//! runner hands the finished buffer to an [`OutputDriver`](crate::OutputDriver).

use crate::color::Rgb;

/// Addressable sub-range of the strip, half-open `[start, start + count)`.
///
/// Strips often reserve leading pixels (status LED), so `start` may be
/// non-zero. Indices are absolute strip positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StripBounds {
    pub start: usize,
    pub count: usize,
}

impl StripBounds {
    /// One past the last addressable index.
    pub const fn end(self) -> usize {
        self.start + self.count
    }

    pub const fn contains(self, index: usize) -> bool {
        index >= self.start && index < self.end()
    }

    /// Midpoint index splitting the range into two halves.
    pub const fn median(self) -> usize {
        self.start + self.count / 2
    }

    /// Clamp signed index arithmetic to the nearest valid index.
    ///
    /// Window and trail computations may run past either end of the range;
    /// they are pinned to the bound, never wrapped.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_possible_wrap)]
    pub fn clamp(self, index: i32) -> usize {
        if self.count == 0 {
            return self.start;
        }
        let low = self.start as i32;
        let high = (self.end() - 1) as i32;
        index.clamp(low, high) as usize
    }

    /// Reflect an in-range index across the range midpoint.
    ///
    /// `start` maps to `end - 1` and vice versa.
    pub fn mirror(self, index: usize) -> usize {
        if self.count == 0 {
            return self.start;
        }
        let offset = index.saturating_sub(self.start).min(self.count - 1);
        self.end() - 1 - offset
    }
}

/// Bounds-checked view over the scheduler's pixel array.
///
/// The only write path a routine gets; writes outside the addressable
/// range are dropped without touching adjacent pixels.
pub struct Frame<'a> {
    leds: &'a mut [Rgb],
    bounds: StripBounds,
}

impl<'a> Frame<'a> {
    /// Create a view over `leds`. The bounds are trimmed to the slice
    /// length, so a misconfigured range can never index past the buffer.
    pub fn new(leds: &'a mut [Rgb], bounds: StripBounds) -> Self {
        let start = bounds.start.min(leds.len());
        let count = bounds.count.min(leds.len() - start);
        Self {
            leds,
            bounds: StripBounds { start, count },
        }
    }

    pub const fn bounds(&self) -> StripBounds {
        self.bounds
    }

    /// Set one pixel. Out-of-range indices are silently ignored.
    pub fn set(&mut self, index: usize, color: Rgb) {
        if self.bounds.contains(index) {
            self.leds[index] = color;
        }
    }

    /// Read one pixel back, `None` outside the addressable range.
    pub fn get(&self, index: usize) -> Option<Rgb> {
        if self.bounds.contains(index) {
            Some(self.leds[index])
        } else {
            None
        }
    }

    /// Set every addressable pixel to `color`.
    pub fn fill(&mut self, color: Rgb) {
        for led in &mut self.leds[self.bounds.start..self.bounds.end()] {
            *led = color;
        }
    }
}
