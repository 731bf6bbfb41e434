//! Animation director
//!
//! Owns the rotation of animations, advances the active one once per frame
//! and maps every snapshot onto the physical strands.

use heapless::Vec;
use rand::RngCore;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::animation::{AnimationContext, AnimationId, AnimationSlot};
use crate::command::DirectorCommand;
use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::geometry::{Geometry, PhysicalFrame, StrandSnapshot};

/// Maximum number of animations in one rotation
pub const MAX_ANIMATIONS: usize = 8;

/// Frames per activation used by the default rotation policy
pub const DEFAULT_FRAME_BUDGET: u32 = 600;

/// When to move on to the next animation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationPolicy {
    /// Rotate after this many frames of one activation
    pub frame_budget: Option<u32>,
    /// Rotate as soon as the animation reports a finished cycle
    pub rotate_on_done: bool,
}

impl Default for RotationPolicy {
    fn default() -> Self {
        Self::fixed_frames(DEFAULT_FRAME_BUDGET)
    }
}

impl RotationPolicy {
    /// Rotate purely on a frame budget, ignoring completion
    pub const fn fixed_frames(frames: u32) -> Self {
        Self {
            frame_budget: Some(frames),
            rotate_on_done: false,
        }
    }

    /// Rotate only when the animation reports completion
    pub const fn on_completion() -> Self {
        Self {
            frame_budget: None,
            rotate_on_done: true,
        }
    }

    /// Rotate on completion or after `frames`, whichever comes first
    pub const fn either(frames: u32) -> Self {
        Self {
            frame_budget: Some(frames),
            rotate_on_done: true,
        }
    }

    pub const fn should_rotate(self, frames_in_activation: u32, done: bool) -> bool {
        if self.rotate_on_done && done {
            return true;
        }
        match self.frame_budget {
            Some(budget) => frames_in_activation >= budget,
            None => false,
        }
    }
}

/// Director - the frame loop orchestrator
pub struct Director<'a, R: RngCore> {
    // External dependencies and configuration
    config: &'a EngineConfig,
    rng: R,
    rotation: RotationPolicy,

    // Internal state
    animations: Vec<AnimationSlot, MAX_ANIMATIONS>,
    active: usize,
    frames_in_activation: u32,
    snapshot: StrandSnapshot,
    /// The initial frame of the activation has not been shown yet
    fresh: bool,
}

impl<'a, R: RngCore> Director<'a, R> {
    /// Create a director and activate the first animation
    pub fn new<I>(config: &'a EngineConfig, rng: R, animations: I) -> Result<Self, EngineError>
    where
        I: IntoIterator<Item = AnimationSlot>,
    {
        let mut slots = Vec::new();
        let mut animations = animations.into_iter();
        while let Some(animation) = animations.next() {
            if slots.push(animation).is_err() {
                // Count the rest so the error reports the real size
                let count = MAX_ANIMATIONS + 1 + animations.count();
                return Err(EngineError::TooManyAnimations(count));
            }
        }
        if slots.is_empty() {
            return Err(EngineError::NoAnimations);
        }

        let mut director = Self {
            config,
            rng,
            rotation: config.rotation,
            animations: slots,
            active: 0,
            frames_in_activation: 0,
            snapshot: StrandSnapshot::new(&config.geometry),
            fresh: true,
        };
        director.activate_index(0);
        Ok(director)
    }

    /// Produce the next frame
    ///
    /// The first call after an activation shows the animation's initial
    /// frame; every later call steps it once. A frame that does not fit the
    /// geometry is rejected as a whole and the previous snapshot is kept.
    pub fn advance(&mut self) -> Result<PhysicalFrame, EngineError> {
        let config = self.config;
        let (snapshot, done) = if self.fresh {
            (self.snapshot.clone(), false)
        } else {
            let mut ctx = AnimationContext::new(&config.geometry, &config.palette, &mut self.rng);
            let step = self.animations[self.active].step(&self.snapshot, &mut ctx);
            (step.snapshot, step.done)
        };

        let frame = match config.geometry.map(&snapshot) {
            Ok(frame) => frame,
            Err(error) => {
                #[cfg(feature = "esp32-log")]
                println!(
                    "[Director.advance] rejecting frame of {}: {:?}",
                    self.active_id().as_str(),
                    error
                );
                return Err(error.into());
            }
        };

        self.fresh = false;
        self.snapshot = snapshot;
        self.frames_in_activation = self.frames_in_activation.saturating_add(1);

        if self.rotation.should_rotate(self.frames_in_activation, done) {
            self.next();
        }
        Ok(frame)
    }

    /// Switch to the next animation in the rotation (wrapping)
    pub fn next(&mut self) {
        let next = (self.active + 1) % self.animations.len();
        self.activate_index(next);
    }

    /// Switch to the first animation with the given id
    pub fn activate(&mut self, id: AnimationId) -> Result<(), EngineError> {
        let index = self
            .animations
            .iter()
            .position(|animation| animation.id() == id)
            .ok_or(EngineError::UnknownAnimation(id))?;
        self.activate_index(index);
        Ok(())
    }

    pub fn set_rotation(&mut self, rotation: RotationPolicy) {
        self.rotation = rotation;
    }

    /// Apply a command received from outside the frame loop
    pub fn apply(&mut self, command: DirectorCommand) -> Result<(), EngineError> {
        match command {
            DirectorCommand::Next => self.next(),
            DirectorCommand::Activate(id) => self.activate(id)?,
            DirectorCommand::SetRotation(rotation) => self.set_rotation(rotation),
        }
        Ok(())
    }

    pub fn active_id(&self) -> AnimationId {
        self.animations[self.active].id()
    }

    pub const fn active_index(&self) -> usize {
        self.active
    }

    /// The active animation, for inspection
    pub fn active(&self) -> &AnimationSlot {
        &self.animations[self.active]
    }

    pub fn animations(&self) -> &[AnimationSlot] {
        &self.animations
    }

    pub const fn frames_in_activation(&self) -> u32 {
        self.frames_in_activation
    }

    pub const fn rotation(&self) -> RotationPolicy {
        self.rotation
    }

    /// Last snapshot that made it into a frame (or the initial one)
    pub const fn snapshot(&self) -> &StrandSnapshot {
        &self.snapshot
    }

    pub const fn geometry(&self) -> &'a Geometry {
        let config: &'a EngineConfig = self.config;
        &config.geometry
    }

    /// Re-initialize the animation at `index` and make it active
    ///
    /// Animations are rebuilt on every activation so phase state never
    /// carries over from an earlier run.
    fn activate_index(&mut self, index: usize) {
        let config = self.config;
        let mut ctx = AnimationContext::new(&config.geometry, &config.palette, &mut self.rng);
        self.snapshot = self.animations[index].initialize(&mut ctx);
        self.active = index;
        self.frames_in_activation = 0;
        self.fresh = true;

        #[cfg(feature = "esp32-log")]
        println!(
            "[Director.activate] {} ({}/{})",
            self.active_id().as_str(),
            index + 1,
            self.animations.len()
        );
    }
}
