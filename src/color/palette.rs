//! Curated color pool used for every random color decision

use core::fmt;

use heapless::Vec;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::color::{Rgb, rgb_from_u32};

/// Maximum number of colors a palette can hold
pub const MAX_PALETTE_COLORS: usize = 16;

/// Create a palette from a list of hex colors (0xRRGGBB format)
macro_rules! hex_palette {
    ($($color:expr),* $(,)?) => {
        [
            $(rgb_from_u32($color)),*
        ]
    };
}

/// Saturated colors that stay distinguishable on WS2812 strips
#[allow(clippy::unreadable_literal)]
pub const DEFAULT_PALETTE: [Rgb; 11] = hex_palette![
    0xFF0000, // Red
    0x00FF00, // Lime green
    0x0000FF, // Blue
    0xFFFF00, // Yellow
    0x00FFFF, // Cyan
    0xFF00FF, // Magenta
    0xFF8000, // Orange
    0x8000FF, // Purple
    0xFF0080, // Rose
    0x32CD32, // Lime green (alt)
    0x4B0082, // Indigo
];

/// Reasons a palette cannot be built
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteError {
    /// No colors were given
    Empty,
    /// More than [`MAX_PALETTE_COLORS`] colors were given
    TooManyColors(usize),
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "palette has no colors"),
            Self::TooManyColors(count) => write!(
                f,
                "palette has {} colors, at most {} are supported",
                count, MAX_PALETTE_COLORS
            ),
        }
    }
}

impl core::error::Error for PaletteError {}

/// Immutable, ordered set of colors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Rgb, MAX_PALETTE_COLORS>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_PALETTE.iter().copied().collect(),
        }
    }
}

impl Palette {
    /// Build a palette from a color table
    pub fn new(colors: &[Rgb]) -> Result<Self, PaletteError> {
        if colors.is_empty() {
            return Err(PaletteError::Empty);
        }
        let colors =
            Vec::from_slice(colors).map_err(|()| PaletteError::TooManyColors(colors.len()))?;
        Ok(Self { colors })
    }

    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Uniformly pick one palette color
    pub fn random_color<R: Rng + ?Sized>(&self, rng: &mut R) -> Rgb {
        self.colors.choose(rng).copied().unwrap_or_default()
    }

    /// Pick a palette color that is not in `excluding`
    ///
    /// Falls back to [`Palette::random_color`] when every palette color is
    /// excluded, so this never blocks.
    pub fn different_random_color<R: Rng + ?Sized>(&self, excluding: &[Rgb], rng: &mut R) -> Rgb {
        let candidates: Vec<Rgb, MAX_PALETTE_COLORS> = self
            .colors
            .iter()
            .copied()
            .filter(|color| !excluding.contains(color))
            .collect();

        match candidates.choose(rng) {
            Some(color) => *color,
            None => self.random_color(rng),
        }
    }

    /// Pick `N` colors without repetition
    ///
    /// The palette is shuffled and its first `N` entries are returned. When
    /// `N` exceeds the palette size the tail is padded with independent
    /// uniform picks, so duplicates become possible.
    pub fn distinct_colors<const N: usize, R: Rng + ?Sized>(&self, rng: &mut R) -> [Rgb; N] {
        let mut shuffled = self.colors.clone();
        shuffled.shuffle(rng);

        core::array::from_fn(|i| match shuffled.get(i) {
            Some(color) => *color,
            None => self.random_color(&mut *rng),
        })
    }
}
