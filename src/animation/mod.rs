//! Animation system with compile-time known animation variants
//!
//! All animations are stored in an enum to avoid heap allocations.
//! Each animation implements the `Animation` trait and produces a complete
//! [`StrandSnapshot`] on every call.

mod breathing;
mod quarter_spiral;
mod sweep;
mod top_scroll;
mod walking_noise;
mod wave;

pub use breathing::{BreathingQuartersAnimation, breathing_brightness};
pub use quarter_spiral::{MIN_SPIRAL_DELAY, QuarterSpiralAnimation};
pub use sweep::{ColorSweepAnimation, DualColorSweepAnimation, SweepDirection};
pub use top_scroll::{HIGHLIGHT_ORDER, TopScrollAndQuartersAnimation};
pub use walking_noise::WalkingNoiseAnimation;
pub use wave::WaveAnimation;

use rand::RngCore;

use crate::color::{Palette, Rgb};
use crate::geometry::{Geometry, StrandSnapshot};

const ANIMATION_NAME_COLOR_SWEEP: &str = "color_sweep";
const ANIMATION_NAME_DUAL_COLOR_SWEEP: &str = "dual_color_sweep";
const ANIMATION_NAME_QUARTER_SPIRAL: &str = "quarter_spiral";
const ANIMATION_NAME_WAVE: &str = "wave";
const ANIMATION_NAME_TOP_SCROLL_AND_QUARTERS: &str = "top_scroll_and_quarters";
const ANIMATION_NAME_BREATHING_QUARTERS: &str = "breathing_quarters";
const ANIMATION_NAME_WALKING_NOISE: &str = "walking_noise";

const ANIMATION_ID_COLOR_SWEEP: u8 = 0;
const ANIMATION_ID_DUAL_COLOR_SWEEP: u8 = 1;
const ANIMATION_ID_QUARTER_SPIRAL: u8 = 2;
const ANIMATION_ID_WAVE: u8 = 3;
const ANIMATION_ID_TOP_SCROLL_AND_QUARTERS: u8 = 4;
const ANIMATION_ID_BREATHING_QUARTERS: u8 = 5;
const ANIMATION_ID_WALKING_NOISE: u8 = 6;

/// Everything an animation may consult while producing a frame
pub struct AnimationContext<'a> {
    pub geometry: &'a Geometry,
    pub palette: &'a Palette,
    pub rng: &'a mut dyn RngCore,
}

impl<'a> AnimationContext<'a> {
    pub fn new(geometry: &'a Geometry, palette: &'a Palette, rng: &'a mut dyn RngCore) -> Self {
        Self {
            geometry,
            palette,
            rng,
        }
    }

    pub fn random_color(&mut self) -> Rgb {
        self.palette.random_color(&mut *self.rng)
    }

    pub fn different_color(&mut self, excluding: &[Rgb]) -> Rgb {
        self.palette.different_random_color(excluding, &mut *self.rng)
    }

    pub fn distinct_colors<const N: usize>(&mut self) -> [Rgb; N] {
        self.palette.distinct_colors::<N, _>(&mut *self.rng)
    }

    /// Dark snapshot for the current geometry
    pub fn blank(&self) -> StrandSnapshot {
        StrandSnapshot::new(self.geometry)
    }
}

/// Result of advancing an animation by one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub snapshot: StrandSnapshot,
    /// One logical cycle of the animation just finished
    pub done: bool,
}

impl Step {
    pub const fn running(snapshot: StrandSnapshot) -> Self {
        Self {
            snapshot,
            done: false,
        }
    }

    pub const fn finished(snapshot: StrandSnapshot) -> Self {
        Self {
            snapshot,
            done: true,
        }
    }
}

pub trait Animation {
    /// Roll fresh activation state and return the first frame
    ///
    /// Called on every activation. Nothing from a previous activation
    /// survives this call.
    fn initialize(&mut self, ctx: &mut AnimationContext<'_>) -> StrandSnapshot;

    /// Advance by exactly one frame
    fn step(&mut self, previous: &StrandSnapshot, ctx: &mut AnimationContext<'_>) -> Step;
}

/// Animation slot - enum containing all possible animations
#[derive(Debug, Clone)]
pub enum AnimationSlot {
    /// Gradient band sweeping along one strand
    ColorSweep(ColorSweepAnimation),
    /// Gradient band sweeping two strands in opposite directions
    DualColorSweep(DualColorSweepAnimation),
    /// Quarter-by-quarter fill with an accelerating/decelerating delay
    QuarterSpiral(QuarterSpiralAnimation),
    /// Band traveling down both sides
    Wave(WaveAnimation),
    /// Scrolling top blocks with one highlighted quarter
    TopScrollAndQuarters(TopScrollAndQuartersAnimation),
    /// Sinusoidal brightness on all quarters
    BreathingQuarters(BreathingQuartersAnimation),
    /// Noisy sides with a randomly walking LED
    WalkingNoise(WalkingNoiseAnimation),
}

/// Known animation ids that can be requested
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum AnimationId {
    ColorSweep = ANIMATION_ID_COLOR_SWEEP,
    DualColorSweep = ANIMATION_ID_DUAL_COLOR_SWEEP,
    QuarterSpiral = ANIMATION_ID_QUARTER_SPIRAL,
    Wave = ANIMATION_ID_WAVE,
    TopScrollAndQuarters = ANIMATION_ID_TOP_SCROLL_AND_QUARTERS,
    BreathingQuarters = ANIMATION_ID_BREATHING_QUARTERS,
    WalkingNoise = ANIMATION_ID_WALKING_NOISE,
}

impl AnimationId {
    pub const ALL: [Self; 7] = [
        Self::ColorSweep,
        Self::DualColorSweep,
        Self::QuarterSpiral,
        Self::Wave,
        Self::TopScrollAndQuarters,
        Self::BreathingQuarters,
        Self::WalkingNoise,
    ];

    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            ANIMATION_ID_COLOR_SWEEP => Self::ColorSweep,
            ANIMATION_ID_DUAL_COLOR_SWEEP => Self::DualColorSweep,
            ANIMATION_ID_QUARTER_SPIRAL => Self::QuarterSpiral,
            ANIMATION_ID_WAVE => Self::Wave,
            ANIMATION_ID_TOP_SCROLL_AND_QUARTERS => Self::TopScrollAndQuarters,
            ANIMATION_ID_BREATHING_QUARTERS => Self::BreathingQuarters,
            ANIMATION_ID_WALKING_NOISE => Self::WalkingNoise,
            _ => return None,
        })
    }

    /// Build the animation with its default parameters
    pub fn to_slot(self) -> AnimationSlot {
        match self {
            Self::ColorSweep => AnimationSlot::ColorSweep(ColorSweepAnimation::default()),
            Self::DualColorSweep => {
                AnimationSlot::DualColorSweep(DualColorSweepAnimation::default())
            }
            Self::QuarterSpiral => AnimationSlot::QuarterSpiral(QuarterSpiralAnimation::default()),
            Self::Wave => AnimationSlot::Wave(WaveAnimation::default()),
            Self::TopScrollAndQuarters => {
                AnimationSlot::TopScrollAndQuarters(TopScrollAndQuartersAnimation::default())
            }
            Self::BreathingQuarters => {
                AnimationSlot::BreathingQuarters(BreathingQuartersAnimation::default())
            }
            Self::WalkingNoise => AnimationSlot::WalkingNoise(WalkingNoiseAnimation::default()),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ColorSweep => ANIMATION_NAME_COLOR_SWEEP,
            Self::DualColorSweep => ANIMATION_NAME_DUAL_COLOR_SWEEP,
            Self::QuarterSpiral => ANIMATION_NAME_QUARTER_SPIRAL,
            Self::Wave => ANIMATION_NAME_WAVE,
            Self::TopScrollAndQuarters => ANIMATION_NAME_TOP_SCROLL_AND_QUARTERS,
            Self::BreathingQuarters => ANIMATION_NAME_BREATHING_QUARTERS,
            Self::WalkingNoise => ANIMATION_NAME_WALKING_NOISE,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            ANIMATION_NAME_COLOR_SWEEP => Some(Self::ColorSweep),
            ANIMATION_NAME_DUAL_COLOR_SWEEP => Some(Self::DualColorSweep),
            ANIMATION_NAME_QUARTER_SPIRAL => Some(Self::QuarterSpiral),
            ANIMATION_NAME_WAVE => Some(Self::Wave),
            ANIMATION_NAME_TOP_SCROLL_AND_QUARTERS => Some(Self::TopScrollAndQuarters),
            ANIMATION_NAME_BREATHING_QUARTERS => Some(Self::BreathingQuarters),
            ANIMATION_NAME_WALKING_NOISE => Some(Self::WalkingNoise),
            _ => None,
        }
    }
}

impl From<AnimationId> for AnimationSlot {
    fn from(id: AnimationId) -> Self {
        id.to_slot()
    }
}

impl AnimationSlot {
    /// Re-initialize the animation for a new activation
    pub fn initialize(&mut self, ctx: &mut AnimationContext<'_>) -> StrandSnapshot {
        match self {
            Self::ColorSweep(animation) => animation.initialize(ctx),
            Self::DualColorSweep(animation) => animation.initialize(ctx),
            Self::QuarterSpiral(animation) => animation.initialize(ctx),
            Self::Wave(animation) => animation.initialize(ctx),
            Self::TopScrollAndQuarters(animation) => animation.initialize(ctx),
            Self::BreathingQuarters(animation) => animation.initialize(ctx),
            Self::WalkingNoise(animation) => animation.initialize(ctx),
        }
    }

    /// Advance the animation by one frame
    pub fn step(&mut self, previous: &StrandSnapshot, ctx: &mut AnimationContext<'_>) -> Step {
        match self {
            Self::ColorSweep(animation) => animation.step(previous, ctx),
            Self::DualColorSweep(animation) => animation.step(previous, ctx),
            Self::QuarterSpiral(animation) => animation.step(previous, ctx),
            Self::Wave(animation) => animation.step(previous, ctx),
            Self::TopScrollAndQuarters(animation) => animation.step(previous, ctx),
            Self::BreathingQuarters(animation) => animation.step(previous, ctx),
            Self::WalkingNoise(animation) => animation.step(previous, ctx),
        }
    }

    /// Get the animation ID for external observation
    pub fn id(&self) -> AnimationId {
        match self {
            Self::ColorSweep(_) => AnimationId::ColorSweep,
            Self::DualColorSweep(_) => AnimationId::DualColorSweep,
            Self::QuarterSpiral(_) => AnimationId::QuarterSpiral,
            Self::Wave(_) => AnimationId::Wave,
            Self::TopScrollAndQuarters(_) => AnimationId::TopScrollAndQuarters,
            Self::BreathingQuarters(_) => AnimationId::BreathingQuarters,
            Self::WalkingNoise(_) => AnimationId::WalkingNoise,
        }
    }
}
