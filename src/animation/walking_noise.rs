//! Walking noise
//!
//! The side strands shimmer around a base color: every frame each LED is
//! jittered and then pulled part of the way back toward the base. A single
//! walker LED in its own color wanders up and down the sides, leaving a
//! trail that the pull slowly dissolves.

use rand::Rng;

use super::{Animation, AnimationContext, Step};
use crate::{
    color::{BLACK, Rgb, interpolate, jitter},
    geometry::{Strand, StrandSnapshot},
};

const DEFAULT_NOISE_CHANCE: f32 = 0.3;
const DEFAULT_NOISE_DELTA: u8 = 24;
const DEFAULT_PULL: f32 = 0.2;
const DEFAULT_WALK_STEPS: u32 = 300;

const SIDES: [Strand; 2] = [Strand::Left, Strand::Right];

#[derive(Debug, Clone)]
pub struct WalkingNoiseAnimation {
    noise_chance: f32,
    noise_delta: u8,
    pull: f32,
    walk_steps: u32,
    walker: usize,
    frame: u32,
    base_color: Rgb,
    walker_color: Rgb,
    top_color: Rgb,
}

impl Default for WalkingNoiseAnimation {
    fn default() -> Self {
        Self::new(DEFAULT_WALK_STEPS)
    }
}

impl WalkingNoiseAnimation {
    /// Create the animation, rerolling colors every `walk_steps` frames
    pub fn new(walk_steps: u32) -> Self {
        Self {
            noise_chance: DEFAULT_NOISE_CHANCE,
            noise_delta: DEFAULT_NOISE_DELTA,
            pull: DEFAULT_PULL,
            walk_steps: walk_steps.max(1),
            walker: 0,
            frame: 0,
            base_color: BLACK,
            walker_color: BLACK,
            top_color: BLACK,
        }
    }

    /// Set the per-frame jitter chance and maximum channel delta
    #[must_use]
    pub fn with_noise(mut self, chance: f32, max_delta: u8) -> Self {
        self.noise_chance = chance.clamp(0.0, 1.0);
        self.noise_delta = max_delta;
        self
    }

    /// Set how strongly LEDs are pulled back toward the base color
    #[must_use]
    pub fn with_pull(mut self, pull: f32) -> Self {
        self.pull = pull.clamp(0.0, 1.0);
        self
    }

    pub const fn walker(&self) -> usize {
        self.walker
    }

    pub const fn base_color(&self) -> Rgb {
        self.base_color
    }

    pub const fn walker_color(&self) -> Rgb {
        self.walker_color
    }

    pub const fn top_color(&self) -> Rgb {
        self.top_color
    }

    fn roll_colors(&mut self, ctx: &mut AnimationContext<'_>) {
        let [base, walker, top] = ctx.distinct_colors::<3>();
        self.base_color = base;
        self.walker_color = walker;
        self.top_color = top;
    }

    fn place_walker(&self, snapshot: &mut StrandSnapshot) {
        for strand in SIDES {
            if let Some(pixel) = snapshot.strand_pixel_mut(strand, self.walker) {
                *pixel = self.walker_color;
            }
        }
    }
}

impl Animation for WalkingNoiseAnimation {
    fn initialize(&mut self, ctx: &mut AnimationContext<'_>) -> StrandSnapshot {
        self.frame = 0;
        self.roll_colors(ctx);
        self.walker = ctx.rng.gen_range(0..ctx.geometry.sides());

        let mut snapshot = ctx.blank();
        snapshot.top.fill(self.top_color);
        snapshot.fill_sides(self.base_color);
        self.place_walker(&mut snapshot);
        snapshot
    }

    fn step(&mut self, previous: &StrandSnapshot, ctx: &mut AnimationContext<'_>) -> Step {
        let mut snapshot = previous.clone();
        snapshot.top.fill(self.top_color);

        for strand in SIDES {
            for i in 0..snapshot.strand_len(strand) {
                if let Some(pixel) = snapshot.strand_pixel_mut(strand, i) {
                    let noisy = jitter(*pixel, self.noise_chance, self.noise_delta, &mut *ctx.rng);
                    *pixel = interpolate(noisy, self.base_color, self.pull);
                }
            }
        }

        let last = ctx.geometry.sides().saturating_sub(1);
        self.walker = match ctx.rng.gen_range(-1i8..=1) {
            -1 => self.walker.saturating_sub(1),
            1 => (self.walker + 1).min(last),
            _ => self.walker.min(last),
        };
        self.place_walker(&mut snapshot);

        self.frame += 1;
        if self.frame >= self.walk_steps {
            self.frame = 0;
            self.roll_colors(ctx);
            return Step::finished(snapshot);
        }
        Step::running(snapshot)
    }
}
