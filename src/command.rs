//! Director commands
//!
//! A bounded queue built on `critical-section` and `heapless::Deque` lets
//! UI code, interrupts or other threads steer the director without touching
//! it directly. The frame loop drains the queue between frames.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;
use rand::RngCore;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::animation::AnimationId;
use crate::director::{Director, RotationPolicy};

/// Request to change what the director plays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectorCommand {
    /// Skip to the next animation in the rotation
    Next,
    /// Jump to a specific animation
    Activate(AnimationId),
    /// Replace the rotation policy
    SetRotation(RotationPolicy),
}

/// Returned when the queue has no room; carries the rejected command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueFull(pub DirectorCommand);

/// A bounded, interrupt-safe command queue
pub struct CommandChannel<const SIZE: usize> {
    queue: Mutex<RefCell<Deque<DirectorCommand, SIZE>>>,
}

impl<const SIZE: usize> CommandChannel<SIZE> {
    pub const fn new() -> Self {
        Self {
            queue: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Handle for the producing side
    pub const fn sender(&self) -> CommandSender<'_, SIZE> {
        CommandSender { channel: self }
    }

    /// Handle for the frame loop
    pub const fn receiver(&self) -> CommandReceiver<'_, SIZE> {
        CommandReceiver { channel: self }
    }

    pub fn try_send(&self, command: DirectorCommand) -> Result<(), QueueFull> {
        critical_section::with(|cs| {
            let mut queue = self.queue.borrow(cs).borrow_mut();
            queue.push_back(command).map_err(QueueFull)
        })
    }

    pub fn try_receive(&self) -> Option<DirectorCommand> {
        critical_section::with(|cs| self.queue.borrow(cs).borrow_mut().pop_front())
    }
}

impl<const SIZE: usize> Default for CommandChannel<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Copy)]
pub struct CommandSender<'a, const SIZE: usize> {
    channel: &'a CommandChannel<SIZE>,
}

impl<const SIZE: usize> CommandSender<'_, SIZE> {
    pub fn try_send(&self, command: DirectorCommand) -> Result<(), QueueFull> {
        self.channel.try_send(command)
    }
}

#[derive(Clone, Copy)]
pub struct CommandReceiver<'a, const SIZE: usize> {
    channel: &'a CommandChannel<SIZE>,
}

impl<const SIZE: usize> CommandReceiver<'_, SIZE> {
    pub fn try_receive(&self) -> Option<DirectorCommand> {
        self.channel.try_receive()
    }

    /// Apply every pending command to `director`
    ///
    /// Commands the director cannot honor (e.g. an animation that is not in
    /// the rotation) are dropped. Returns the number of applied commands.
    pub fn process_pending<R: RngCore>(&self, director: &mut Director<'_, R>) -> usize {
        let mut applied = 0;
        while let Some(command) = self.try_receive() {
            match director.apply(command) {
                Ok(()) => applied += 1,
                Err(_error) => {
                    #[cfg(feature = "esp32-log")]
                    println!(
                        "[CommandReceiver.process_pending] dropping {:?}: {:?}",
                        command, _error
                    );
                }
            }
        }
        applied
    }
}
