//! Breathing quarters
//!
//! All four quarters pulse together along a sine curve while the top bar
//! holds a static color.

use core::f32::consts::TAU;

use super::{Animation, AnimationContext, Step};
use crate::{
    color::{BLACK, Rgb, apply_brightness},
    geometry::StrandSnapshot,
};

const DEFAULT_BREATH_SPEED: f32 = 0.05;
const DEFAULT_MIN_FACTOR: f32 = 0.1;
const DEFAULT_MAX_FACTOR: f32 = 1.0;
const DEFAULT_CYCLES_FOR_COLOR_CHANGE: u32 = 3;

/// Brightness factor at phase `t`
///
/// Equal to `min + ((sin(t - π/2) + 1) / 2) * (max - min)`, so every period
/// starts and ends at `min_factor` and peaks at `max_factor` halfway.
pub fn breathing_brightness(t: f32, min_factor: f32, max_factor: f32) -> f32 {
    let wave = 0.5 - 0.5 * libm::cosf(t);
    min_factor + wave * (max_factor - min_factor)
}

#[derive(Debug, Clone)]
pub struct BreathingQuartersAnimation {
    breath_speed: f32,
    min_factor: f32,
    max_factor: f32,
    cycles_for_color_change: u32,
    t: f32,
    quarter_color: Rgb,
    top_color: Rgb,
}

impl Default for BreathingQuartersAnimation {
    fn default() -> Self {
        Self::new(DEFAULT_BREATH_SPEED)
    }
}

impl BreathingQuartersAnimation {
    /// Create a breathing animation advancing the phase by `breath_speed`
    /// radians per frame
    pub fn new(breath_speed: f32) -> Self {
        Self {
            breath_speed: breath_speed.abs().max(f32::EPSILON),
            min_factor: DEFAULT_MIN_FACTOR,
            max_factor: DEFAULT_MAX_FACTOR,
            cycles_for_color_change: DEFAULT_CYCLES_FOR_COLOR_CHANGE,
            t: 0.0,
            quarter_color: BLACK,
            top_color: BLACK,
        }
    }

    /// Set the brightness range (both clamped into `0.0..=1.0`)
    #[must_use]
    pub fn with_range(mut self, min_factor: f32, max_factor: f32) -> Self {
        let min_factor = min_factor.clamp(0.0, 1.0);
        self.min_factor = min_factor;
        self.max_factor = max_factor.clamp(min_factor, 1.0);
        self
    }

    /// Set how many full breaths happen before the colors change
    #[must_use]
    pub fn with_cycles_for_color_change(mut self, cycles: u32) -> Self {
        self.cycles_for_color_change = cycles.max(1);
        self
    }

    pub const fn phase(&self) -> f32 {
        self.t
    }

    pub fn brightness(&self) -> f32 {
        breathing_brightness(self.t, self.min_factor, self.max_factor)
    }

    pub const fn quarter_color(&self) -> Rgb {
        self.quarter_color
    }

    pub const fn top_color(&self) -> Rgb {
        self.top_color
    }

    fn roll_colors(&mut self, ctx: &mut AnimationContext<'_>) {
        let [quarter, top] = ctx.distinct_colors::<2>();
        self.quarter_color = quarter;
        self.top_color = top;
    }

    fn render(&self, ctx: &AnimationContext<'_>) -> StrandSnapshot {
        let mut snapshot = ctx.blank();
        snapshot.top.fill(self.top_color);
        snapshot.fill_sides(apply_brightness(self.quarter_color, self.brightness()));
        snapshot
    }
}

impl Animation for BreathingQuartersAnimation {
    fn initialize(&mut self, ctx: &mut AnimationContext<'_>) -> StrandSnapshot {
        self.t = 0.0;
        self.roll_colors(ctx);
        self.render(ctx)
    }

    #[allow(clippy::cast_precision_loss)]
    fn step(&mut self, _previous: &StrandSnapshot, ctx: &mut AnimationContext<'_>) -> Step {
        self.t += self.breath_speed;
        if self.t >= self.cycles_for_color_change as f32 * TAU {
            self.t = 0.0;
            self.roll_colors(ctx);
            return Step::finished(self.render(ctx));
        }
        Step::running(self.render(ctx))
    }
}
