//! Quarter spiral
//!
//! Fills the quarters one after another (NW, NE, SE, SW) with a single
//! color. Every full round switches to the next color and shortens the
//! delay between quarters until it bottoms out, then lengthens it again
//! back to the starting delay.

use super::{Animation, AnimationContext, Step};
use crate::{
    color::{BLACK, Rgb},
    geometry::{Quarter, StrandSnapshot},
};

/// Shortest delay between two quarters, in frames
pub const MIN_SPIRAL_DELAY: f32 = 2.0;

const DEFAULT_INITIAL_DELAY: f32 = 20.0;
const DEFAULT_ACCELERATION: f32 = 0.04;

#[derive(Debug, Clone)]
struct SpiralState {
    quarter: usize,
    current_color: Rgb,
    next_color: Rgb,
    delay: f32,
    frames_waited: u32,
    accelerating: bool,
}

/// Accelerating/decelerating quarter-by-quarter fill
#[derive(Debug, Clone)]
pub struct QuarterSpiralAnimation {
    initial_delay: f32,
    acceleration: f32,
    state: SpiralState,
}

impl Default for QuarterSpiralAnimation {
    fn default() -> Self {
        Self::new(DEFAULT_INITIAL_DELAY, DEFAULT_ACCELERATION)
    }
}

impl QuarterSpiralAnimation {
    /// # Arguments
    /// * `initial_delay` - Frames between quarters at the start of a cycle
    /// * `acceleration` - Relative delay change per round (0.0 to 1.0)
    pub fn new(initial_delay: f32, acceleration: f32) -> Self {
        let initial_delay = initial_delay.max(MIN_SPIRAL_DELAY);
        Self {
            initial_delay,
            acceleration: acceleration.clamp(0.0, 1.0),
            state: SpiralState {
                quarter: 0,
                current_color: BLACK,
                next_color: BLACK,
                delay: initial_delay,
                frames_waited: 0,
                accelerating: true,
            },
        }
    }

    /// Current delay between quarters, in frames
    pub const fn delay(&self) -> f32 {
        self.state.delay
    }

    pub const fn initial_delay(&self) -> f32 {
        self.initial_delay
    }

    pub const fn is_accelerating(&self) -> bool {
        self.state.accelerating
    }

    pub const fn current_color(&self) -> Rgb {
        self.state.current_color
    }

    /// Delay for the next round
    ///
    /// The relative change scales with the cube root of
    /// `delay / initial_delay`, so it gets smaller as the delay shortens.
    fn next_delay(&mut self) -> f32 {
        let state = &mut self.state;
        let reduction = libm::cbrtf(state.delay / self.initial_delay) * self.acceleration * 2.0;
        if state.accelerating {
            let delay = (state.delay * (1.0 - reduction)).max(MIN_SPIRAL_DELAY);
            if delay <= MIN_SPIRAL_DELAY {
                state.accelerating = false;
            }
            delay
        } else {
            (state.delay * (1.0 + reduction)).min(self.initial_delay)
        }
    }
}

impl Animation for QuarterSpiralAnimation {
    fn initialize(&mut self, ctx: &mut AnimationContext<'_>) -> StrandSnapshot {
        let current_color = ctx.random_color();
        self.state = SpiralState {
            quarter: 0,
            current_color,
            next_color: ctx.different_color(&[current_color]),
            delay: self.initial_delay,
            frames_waited: 0,
            accelerating: true,
        };
        ctx.blank()
    }

    #[allow(clippy::cast_precision_loss)]
    fn step(&mut self, previous: &StrandSnapshot, ctx: &mut AnimationContext<'_>) -> Step {
        let mut snapshot = previous.clone();

        self.state.frames_waited += 1;
        if self.state.frames_waited as f32 >= self.state.delay {
            snapshot.fill_quarter(
                Quarter::CLOCKWISE[self.state.quarter],
                self.state.current_color,
            );
            self.state.frames_waited = 0;
            self.state.quarter += 1;

            if self.state.quarter >= Quarter::CLOCKWISE.len() {
                self.state.quarter = 0;
                self.state.current_color = self.state.next_color;
                self.state.next_color = ctx.different_color(&[self.state.current_color]);
                self.state.delay = self.next_delay();
            }
        }

        // A cycle ends once the delay has climbed back to where it started
        if !self.state.accelerating && self.state.delay >= self.initial_delay {
            self.state.accelerating = true;
            return Step::finished(snapshot);
        }
        Step::running(snapshot)
    }
}
