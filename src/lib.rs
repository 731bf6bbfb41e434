#![no_std]

pub mod animation;
pub mod color;
pub mod command;
pub mod config;
pub mod director;
pub mod error;
pub mod frame_scheduler;
pub mod geometry;

pub use animation::{Animation, AnimationContext, AnimationId, AnimationSlot, Step};
pub use command::{CommandChannel, CommandReceiver, CommandSender, DirectorCommand};
pub use config::EngineConfig;
pub use director::{Director, RotationPolicy};
pub use error::EngineError;
pub use frame_scheduler::{FrameResult, FrameScheduler};
pub use geometry::{
    Geometry, GeometryError, LEN_SIDE_BOTTOM, LEN_SIDE_TOP, LEN_SIDES, LEN_TOP, PhysicalFrame,
    Quarter, Segment, Strand, StrandSnapshot,
};

pub use color::{Palette, Rgb};
pub use embassy_time::{Duration, Instant};

/// Abstract LED strand trait
///
/// Implement this trait for every hardware strand (or simulated one).
/// The frame scheduler is generic over it.
pub trait PhysicalStrand {
    /// Number of addressable LEDs
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Stage the color of one LED
    fn set(&mut self, index: usize, color: Rgb);

    /// Push the staged colors to the LEDs
    fn flush(&mut self);

    /// Stage a whole buffer and flush it
    fn write(&mut self, colors: &[Rgb]) {
        for (index, color) in colors.iter().enumerate() {
            self.set(index, *color);
        }
        self.flush();
    }
}
