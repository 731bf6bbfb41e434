//! Per-channel color arithmetic
//!
//! Every operation computes in `f32`/`i16` and clamps back into the
//! `0..=255` channel range before producing an [`Rgb`].

use rand::Rng;

use crate::color::Rgb;

/// Round a float channel value and clamp it into `0..=255`
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn channel_from_f32(value: f32) -> u8 {
    libm::roundf(value).clamp(0.0, 255.0) as u8
}

#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn channel_from_i16(value: i16) -> u8 {
    value.clamp(0, 255) as u8
}

/// Linearly blend two colors
///
/// # Arguments
/// * `a` - Color returned at `factor == 0.0`
/// * `b` - Color returned at `factor == 1.0`
/// * `factor` - Blend factor, clamped into `0.0..=1.0`
pub fn interpolate(a: Rgb, b: Rgb, factor: f32) -> Rgb {
    let factor = if factor.is_nan() { 0.0 } else { factor.clamp(0.0, 1.0) };
    let lerp = |from: u8, to: u8| {
        let from = f32::from(from);
        channel_from_f32(from + (f32::from(to) - from) * factor)
    };
    Rgb {
        r: lerp(a.r, b.r),
        g: lerp(a.g, b.g),
        b: lerp(a.b, b.b),
    }
}

/// Scale every channel by `factor` (clamped into `0.0..=1.0`)
pub fn apply_brightness(color: Rgb, factor: f32) -> Rgb {
    let factor = if factor.is_nan() { 0.0 } else { factor.clamp(0.0, 1.0) };
    Rgb {
        r: channel_from_f32(f32::from(color.r) * factor),
        g: channel_from_f32(f32::from(color.g) * factor),
        b: channel_from_f32(f32::from(color.b) * factor),
    }
}

/// Randomly nudge each channel of `color`
///
/// With probability `chance` every channel receives an independent offset
/// drawn from `-max_delta..=max_delta`. The result saturates at the channel
/// bounds.
pub fn jitter<R: Rng + ?Sized>(color: Rgb, chance: f32, max_delta: u8, rng: &mut R) -> Rgb {
    let chance = if chance.is_nan() { 0.0 } else { chance.clamp(0.0, 1.0) };
    if max_delta == 0 || !rng.gen_bool(f64::from(chance)) {
        return color;
    }

    let delta = i16::from(max_delta);
    let mut nudge = |value: u8| channel_from_i16(i16::from(value) + rng.gen_range(-delta..=delta));
    Rgb {
        r: nudge(color.r),
        g: nudge(color.g),
        b: nudge(color.b),
    }
}

/// Create an RGB color from a u32 value (0xRRGGBB format)
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}
