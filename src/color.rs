//! Color type, blend math and the stock animation palette.

use smart_leds::RGB8;

pub type Rgb = RGB8;

/// Working brightness for the stock palette. Full-scale 255 is harsh on
/// dense strips, so the palette tops out here.
const SATURATION: u8 = 128;

pub const RED: Rgb = Rgb {
    r: SATURATION,
    g: 0,
    b: 0,
};
pub const GREEN: Rgb = Rgb {
    r: 0,
    g: SATURATION,
    b: 0,
};
pub const BLUE: Rgb = Rgb {
    r: 0,
    g: 0,
    b: SATURATION,
};
pub const WHITE: Rgb = Rgb {
    r: SATURATION,
    g: SATURATION,
    b: SATURATION,
};
pub const YELLOW: Rgb = Rgb {
    r: SATURATION,
    g: SATURATION,
    b: 0,
};
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
pub const DIM_WHITE: Rgb = Rgb {
    r: 20,
    g: 20,
    b: 20,
};

/// Component-wise linear interpolation between two colors.
///
/// `t` is clamped to `[0, 1]`; each channel is rounded to the nearest
/// integer, so `t = 0` returns exactly `c0` and `t = 1` exactly `c1`.
pub fn linear_blend(c0: Rgb, c1: Rgb, t: f32) -> Rgb {
    let t = t.clamp(0.0, 1.0);
    Rgb {
        r: lerp8(c0.r, c1.r, t),
        g: lerp8(c0.g, c1.g, t),
        b: lerp8(c0.b, c1.b, t),
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn lerp8(a: u8, b: u8, t: f32) -> u8 {
    let a = f32::from(a);
    let b = f32::from(b);
    libm::roundf(a + (b - a) * t) as u8
}

/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// Uses integer math for efficiency on embedded systems.
#[inline]
#[allow(clippy::cast_lossless)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}
