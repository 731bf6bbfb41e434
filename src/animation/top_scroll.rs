//! Scrolling top bar with a highlighted quarter
//!
//! The top bar is a window onto a longer buffer of colored blocks that moves
//! by one LED per frame. Independently, one quarter at a time is shown in a
//! highlight color while the other three hold a base color.

use heapless::Vec;

use super::{Animation, AnimationContext, Step};
use crate::{
    color::{BLACK, Rgb},
    geometry::{MAX_SEGMENT_LEDS, Quarter, StrandSnapshot},
};

const DEFAULT_BLOCK_SIZE: usize = 5;
const DEFAULT_HIGHLIGHT_INTERVAL: u32 = 30;

/// Top bar plus a block-aligned pre-roll, for the largest block size
const MAX_SCROLL_LEDS: usize = 3 * MAX_SEGMENT_LEDS;

type ScrollBuffer = Vec<Rgb, MAX_SCROLL_LEDS>;

/// Round-robin order of the highlighted quarter
pub const HIGHLIGHT_ORDER: [Quarter; 4] = [
    Quarter::TopLeft,
    Quarter::TopRight,
    Quarter::BottomLeft,
    Quarter::BottomRight,
];

#[derive(Debug, Clone)]
pub struct TopScrollAndQuartersAnimation {
    block_size: usize,
    highlight_interval: u32,
    scroll: ScrollBuffer,
    offset: usize,
    highlighted: usize,
    frames_highlighted: u32,
    base_color: Rgb,
    highlight_color: Rgb,
}

impl Default for TopScrollAndQuartersAnimation {
    fn default() -> Self {
        Self::new(DEFAULT_BLOCK_SIZE, DEFAULT_HIGHLIGHT_INTERVAL)
    }
}

impl TopScrollAndQuartersAnimation {
    /// # Arguments
    /// * `block_size` - LEDs per run of identical color on the top bar
    /// * `highlight_interval` - Frames each quarter stays highlighted
    pub fn new(block_size: usize, highlight_interval: u32) -> Self {
        Self {
            block_size: block_size.clamp(1, MAX_SEGMENT_LEDS),
            highlight_interval: highlight_interval.max(1),
            scroll: Vec::new(),
            offset: 0,
            highlighted: 0,
            frames_highlighted: 0,
            base_color: BLACK,
            highlight_color: BLACK,
        }
    }

    pub const fn highlighted(&self) -> Quarter {
        HIGHLIGHT_ORDER[self.highlighted]
    }

    pub const fn offset(&self) -> usize {
        self.offset
    }

    pub fn scroll_len(&self) -> usize {
        self.scroll.len()
    }

    pub const fn base_color(&self) -> Rgb {
        self.base_color
    }

    pub const fn highlight_color(&self) -> Rgb {
        self.highlight_color
    }

    /// Fill the scroll buffer with runs of `block_size` colors
    ///
    /// Each run differs from the one before it.
    fn roll_scroll(&mut self, ctx: &mut AnimationContext<'_>) {
        let top = ctx.geometry.top();
        let len = top.div_ceil(self.block_size) * self.block_size + self.block_size;

        self.scroll.clear();
        let mut color = BLACK;
        for i in 0..len.min(MAX_SCROLL_LEDS) {
            if i % self.block_size == 0 {
                color = if i == 0 {
                    ctx.random_color()
                } else {
                    ctx.different_color(&[color])
                };
            }
            if self.scroll.push(color).is_err() {
                break;
            }
        }
        self.offset = 0;
    }

    fn roll_quarter_colors(&mut self, ctx: &mut AnimationContext<'_>) {
        let [base, highlight] = ctx.distinct_colors::<2>();
        self.base_color = base;
        self.highlight_color = highlight;
    }

    fn render(&self, ctx: &AnimationContext<'_>) -> StrandSnapshot {
        let mut snapshot = ctx.blank();
        for (led, color) in snapshot.top.iter_mut().zip(&self.scroll[self.offset..]) {
            *led = *color;
        }

        snapshot.fill_sides(self.base_color);
        snapshot.fill_quarter(self.highlighted(), self.highlight_color);
        snapshot
    }
}

impl Animation for TopScrollAndQuartersAnimation {
    fn initialize(&mut self, ctx: &mut AnimationContext<'_>) -> StrandSnapshot {
        self.roll_scroll(ctx);
        self.roll_quarter_colors(ctx);
        self.highlighted = 0;
        self.frames_highlighted = 0;
        self.render(ctx)
    }

    fn step(&mut self, _previous: &StrandSnapshot, ctx: &mut AnimationContext<'_>) -> Step {
        self.offset += 1;
        if self.offset + ctx.geometry.top() > self.scroll.len() {
            self.roll_scroll(ctx);
        }

        let mut done = false;
        self.frames_highlighted += 1;
        if self.frames_highlighted >= self.highlight_interval {
            self.frames_highlighted = 0;
            self.highlighted = (self.highlighted + 1) % HIGHLIGHT_ORDER.len();
            if self.highlighted == 0 {
                self.roll_quarter_colors(ctx);
                done = true;
            }
        }

        let snapshot = self.render(ctx);
        Step { snapshot, done }
    }
}
