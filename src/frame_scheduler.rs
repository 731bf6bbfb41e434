//! Frame scheduling and timing utilities.
//!
//! Drives the director once per tick, pushes the result to the three
//! physical strands and tells the caller how long to wait. The caller is
//! responsible for sleeping/waiting between frames.

use embassy_time::{Duration, Instant};
use rand::RngCore;

use crate::director::Director;
use crate::error::EngineError;
use crate::geometry::Strand;
use crate::PhysicalStrand;

/// Default target frame rate (30 FPS).
pub const DEFAULT_FPS: u32 = 30;

/// Default frame duration based on target FPS.
pub const DEFAULT_FRAME_DURATION: Duration = Duration::from_millis(1000 / DEFAULT_FPS as u64);

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (may be zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Portable frame scheduler that manages timing without async.
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = FrameScheduler::new(director, left, right, top)?;
///
/// loop {
///     let now = get_current_time_ms();
///     let result = scheduler.tick(Instant::from_millis(now))?;
///
///     // Platform-specific sleep
///     sleep_ms(result.sleep_duration.as_millis());
/// }
/// ```
pub struct FrameScheduler<'a, S: PhysicalStrand, R: RngCore> {
    director: Director<'a, R>,
    left: S,
    right: S,
    top: S,
    next_frame: Instant,
    frame_duration: Duration,
}

impl<'a, S: PhysicalStrand, R: RngCore> FrameScheduler<'a, S, R> {
    /// Create a new frame scheduler.
    ///
    /// Fails if a strand length does not match the director's geometry.
    pub fn new(director: Director<'a, R>, left: S, right: S, top: S) -> Result<Self, EngineError> {
        Self::with_frame_duration(director, left, right, top, DEFAULT_FRAME_DURATION)
    }

    /// Create a new frame scheduler with custom frame duration.
    pub fn with_frame_duration(
        director: Director<'a, R>,
        left: S,
        right: S,
        top: S,
        frame_duration: Duration,
    ) -> Result<Self, EngineError> {
        let geometry = director.geometry();
        geometry.check_strand(Strand::Left, left.len())?;
        geometry.check_strand(Strand::Right, right.len())?;
        geometry.check_strand(Strand::Top, top.len())?;

        Ok(Self {
            director,
            left,
            right,
            top,
            next_frame: Instant::from_millis(0),
            frame_duration,
        })
    }

    /// Advance one frame and return timing information.
    ///
    /// This method:
    /// 1. Applies drift correction if we've fallen too far behind
    /// 2. Asks the director for the next frame
    /// 3. Writes and flushes the left, right and top strands
    /// 4. Returns the deadline for the next frame
    ///
    /// A rejected frame writes nothing and leaves the schedule untouched.
    pub fn tick(&mut self, now: Instant) -> Result<FrameResult, EngineError> {
        // Skip the backlog instead of catching up after long stalls
        let max_drift_ms = self.frame_duration.as_millis() * 2;
        if now.as_millis() > self.next_frame.as_millis() + max_drift_ms {
            self.next_frame = now;
        }

        let frame = self.director.advance()?;
        self.left.write(&frame.left);
        self.right.write(&frame.right);
        self.top.write(&frame.top);

        self.next_frame += self.frame_duration;

        let sleep_duration = if self.next_frame.as_millis() > now.as_millis() {
            Duration::from_millis(self.next_frame.as_millis() - now.as_millis())
        } else {
            Duration::from_millis(0)
        };

        Ok(FrameResult {
            next_deadline: self.next_frame,
            sleep_duration,
        })
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame_duration
    }

    pub fn set_frame_duration(&mut self, frame_duration: Duration) {
        self.frame_duration = frame_duration;
    }

    /// Get a reference to the director.
    pub fn director(&self) -> &Director<'a, R> {
        &self.director
    }

    /// Get a mutable reference to the director.
    pub fn director_mut(&mut self) -> &mut Director<'a, R> {
        &mut self.director
    }

    /// Get the sink of one physical strand.
    pub fn strand(&self, strand: Strand) -> &S {
        match strand {
            Strand::Left => &self.left,
            Strand::Right => &self.right,
            Strand::Top => &self.top,
        }
    }
}
