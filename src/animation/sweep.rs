//! Color sweep animations
//!
//! A gradient band moves from one end of a strand to the other, leaving the
//! new color behind it. Once the band has covered the strand the colors
//! rotate: the swept-in color becomes the background and a fresh color is
//! rolled for the next pass.

use super::{Animation, AnimationContext, Step};
use crate::{
    color::{BLACK, Rgb, interpolate},
    geometry::{Strand, StrandSnapshot},
};

const DEFAULT_STEPS: u32 = 80;
const DEFAULT_FADE_LENGTH: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepDirection {
    /// From strand index 0 toward the end
    Forward,
    /// From the strand end toward index 0
    Backward,
}

/// Colors and progress of the sweeping band
#[derive(Debug, Clone)]
struct SweepBand {
    from_color: Rgb,
    to_color: Rgb,
    position: u32,
}

impl Default for SweepBand {
    fn default() -> Self {
        Self {
            from_color: BLACK,
            to_color: BLACK,
            position: 0,
        }
    }
}

impl SweepBand {
    fn roll(ctx: &mut AnimationContext<'_>) -> Self {
        let from_color = ctx.random_color();
        let to_color = ctx.different_color(&[from_color]);
        Self {
            from_color,
            to_color,
            position: 0,
        }
    }

    /// Color at logical position `pos`, counted from the leading edge
    #[allow(clippy::cast_precision_loss)]
    fn color_at(&self, pos: usize, led_count: usize, fade_length: usize) -> Rgb {
        if fade_length == 0 {
            return self.to_color;
        }
        let fade = fade_length as f32;
        if pos < fade_length {
            interpolate(self.from_color, self.to_color, pos as f32 / fade)
        } else if pos > led_count.saturating_sub(fade_length) {
            let remaining = led_count.saturating_sub(pos) as f32;
            interpolate(self.to_color, self.from_color, remaining / fade)
        } else {
            self.to_color
        }
    }

    /// LED index range touched at the current position
    ///
    /// Integer math keeps the ranges of consecutive steps adjacent, and the
    /// last step of a pass always ends at `led_count`.
    fn touched(&self, led_count: usize, steps: u32, direction: SweepDirection) -> (usize, usize) {
        let position = self.position as usize;
        let steps = steps as usize;
        let lead = position * led_count / steps;
        let trail = (position + 1) * led_count / steps;

        match direction {
            SweepDirection::Forward => (lead.min(led_count), trail.min(led_count)),
            SweepDirection::Backward => (
                led_count.saturating_sub(trail),
                led_count.saturating_sub(lead),
            ),
        }
    }

    fn paint(
        &self,
        snapshot: &mut StrandSnapshot,
        strand: Strand,
        steps: u32,
        fade_length: usize,
        direction: SweepDirection,
    ) {
        let led_count = snapshot.strand_len(strand);
        let (start, end) = self.touched(led_count, steps, direction);
        for i in start..end {
            let pos = match direction {
                SweepDirection::Forward => i,
                SweepDirection::Backward => led_count - i - 1,
            };
            let color = self.color_at(pos, led_count, fade_length);
            if let Some(pixel) = snapshot.strand_pixel_mut(strand, i) {
                *pixel = color;
            }
        }
    }

    /// Move to the next position, rotating colors after a full pass
    ///
    /// Returns `true` when a pass has just completed.
    fn advance(&mut self, steps: u32, ctx: &mut AnimationContext<'_>) -> bool {
        self.position += 1;
        if self.position < steps {
            return false;
        }
        self.position = 0;
        self.from_color = self.to_color;
        self.to_color = ctx.different_color(&[self.from_color]);
        true
    }
}

/// Sweep a gradient band along a single strand
#[derive(Debug, Clone)]
pub struct ColorSweepAnimation {
    strand: Strand,
    steps: u32,
    fade_length: usize,
    direction: SweepDirection,
    band: SweepBand,
}

impl Default for ColorSweepAnimation {
    fn default() -> Self {
        Self::new(Strand::Top, DEFAULT_STEPS, SweepDirection::Forward)
    }
}

impl ColorSweepAnimation {
    /// Create a sweep covering `strand` in `steps` frames
    pub fn new(strand: Strand, steps: u32, direction: SweepDirection) -> Self {
        Self {
            strand,
            steps: steps.max(1),
            fade_length: DEFAULT_FADE_LENGTH,
            direction,
            band: SweepBand::default(),
        }
    }

    /// Set the number of LEDs over which the band edges fade
    #[must_use]
    pub fn with_fade_length(mut self, fade_length: usize) -> Self {
        self.fade_length = fade_length;
        self
    }

    pub const fn position(&self) -> u32 {
        self.band.position
    }

    pub const fn from_color(&self) -> Rgb {
        self.band.from_color
    }

    pub const fn to_color(&self) -> Rgb {
        self.band.to_color
    }
}

impl Animation for ColorSweepAnimation {
    fn initialize(&mut self, ctx: &mut AnimationContext<'_>) -> StrandSnapshot {
        self.band = SweepBand::roll(ctx);
        let mut snapshot = ctx.blank();
        snapshot.fill_strand(self.strand, self.band.from_color);
        snapshot
    }

    fn step(&mut self, previous: &StrandSnapshot, ctx: &mut AnimationContext<'_>) -> Step {
        let mut snapshot = previous.clone();
        self.band.paint(
            &mut snapshot,
            self.strand,
            self.steps,
            self.fade_length,
            self.direction,
        );

        if self.band.advance(self.steps, ctx) {
            Step::finished(snapshot)
        } else {
            Step::running(snapshot)
        }
    }
}

/// Sweep one band forward on one strand and backward on another
#[derive(Debug, Clone)]
pub struct DualColorSweepAnimation {
    forward: Strand,
    backward: Strand,
    steps: u32,
    fade_length: usize,
    band: SweepBand,
}

impl Default for DualColorSweepAnimation {
    fn default() -> Self {
        Self::new(Strand::Left, Strand::Right, DEFAULT_STEPS)
    }
}

impl DualColorSweepAnimation {
    pub fn new(forward: Strand, backward: Strand, steps: u32) -> Self {
        Self {
            forward,
            backward,
            steps: steps.max(1),
            fade_length: DEFAULT_FADE_LENGTH,
            band: SweepBand::default(),
        }
    }

    #[must_use]
    pub fn with_fade_length(mut self, fade_length: usize) -> Self {
        self.fade_length = fade_length;
        self
    }

    pub const fn position(&self) -> u32 {
        self.band.position
    }

    pub const fn from_color(&self) -> Rgb {
        self.band.from_color
    }

    pub const fn to_color(&self) -> Rgb {
        self.band.to_color
    }
}

impl Animation for DualColorSweepAnimation {
    fn initialize(&mut self, ctx: &mut AnimationContext<'_>) -> StrandSnapshot {
        self.band = SweepBand::roll(ctx);
        let mut snapshot = ctx.blank();
        snapshot.fill_strand(self.forward, self.band.from_color);
        snapshot.fill_strand(self.backward, self.band.from_color);
        snapshot
    }

    fn step(&mut self, previous: &StrandSnapshot, ctx: &mut AnimationContext<'_>) -> Step {
        let mut snapshot = previous.clone();
        self.band.paint(
            &mut snapshot,
            self.forward,
            self.steps,
            self.fade_length,
            SweepDirection::Forward,
        );
        self.band.paint(
            &mut snapshot,
            self.backward,
            self.steps,
            self.fade_length,
            SweepDirection::Backward,
        );

        if self.band.advance(self.steps, ctx) {
            Step::finished(snapshot)
        } else {
            Step::running(snapshot)
        }
    }
}
