//! Wave animation
//!
//! A band of fixed width travels down both side strands, one LED per frame,
//! over a background color. The top bar holds a third color.

use super::{Animation, AnimationContext, Step};
use crate::{
    color::{BLACK, Rgb},
    geometry::{Strand, StrandSnapshot},
};

const DEFAULT_WAVE_WIDTH: usize = 8;

#[derive(Debug, Clone)]
pub struct WaveAnimation {
    wave_width: usize,
    position: usize,
    wave_color: Rgb,
    background_color: Rgb,
    top_color: Rgb,
}

impl Default for WaveAnimation {
    fn default() -> Self {
        Self::new(DEFAULT_WAVE_WIDTH)
    }
}

impl WaveAnimation {
    pub const fn new(wave_width: usize) -> Self {
        Self {
            wave_width,
            position: 0,
            wave_color: BLACK,
            background_color: BLACK,
            top_color: BLACK,
        }
    }

    /// Index of the leading LED of the band on the side strands
    pub const fn position(&self) -> usize {
        self.position
    }

    pub const fn wave_color(&self) -> Rgb {
        self.wave_color
    }

    pub const fn background_color(&self) -> Rgb {
        self.background_color
    }

    pub const fn top_color(&self) -> Rgb {
        self.top_color
    }

    fn roll_colors(&mut self, ctx: &mut AnimationContext<'_>) {
        let [wave, background, top] = ctx.distinct_colors::<3>();
        self.wave_color = wave;
        self.background_color = background;
        self.top_color = top;
    }

    fn render(&self, ctx: &AnimationContext<'_>) -> StrandSnapshot {
        let mut snapshot = StrandSnapshot::filled(ctx.geometry, self.background_color);
        snapshot.top.fill(self.top_color);

        let end = (self.position + self.wave_width).min(ctx.geometry.sides());
        for strand in [Strand::Left, Strand::Right] {
            for i in self.position..end {
                if let Some(pixel) = snapshot.strand_pixel_mut(strand, i) {
                    *pixel = self.wave_color;
                }
            }
        }
        snapshot
    }
}

impl Animation for WaveAnimation {
    fn initialize(&mut self, ctx: &mut AnimationContext<'_>) -> StrandSnapshot {
        self.position = 0;
        self.roll_colors(ctx);
        self.render(ctx)
    }

    fn step(&mut self, _previous: &StrandSnapshot, ctx: &mut AnimationContext<'_>) -> Step {
        self.position += 1;
        if self.position >= ctx.geometry.sides() {
            self.position = 0;
            self.roll_colors(ctx);
            return Step::finished(self.render(ctx));
        }
        Step::running(self.render(ctx))
    }
}
