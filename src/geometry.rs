//! Strand geometry of the triangular display
//!
//! The display is built from five logical segments: the top bar and four
//! "quarters" (the upper and lower halves of the left and right sides).
//! Three physical strands carry them:
//!
//! - left  = top-left ++ bottom-left
//! - right = top-right ++ bottom-right
//! - top   = top bar

use core::fmt;
use core::iter;

use heapless::Vec;

use crate::color::{BLACK, Rgb};

/// LEDs on the top bar
pub const LEN_TOP: usize = 30;
/// LEDs on the upper half of each side
pub const LEN_SIDE_TOP: usize = 16;
/// LEDs on the lower half of each side
pub const LEN_SIDE_BOTTOM: usize = 17;
/// LEDs on a whole side strand
pub const LEN_SIDES: usize = LEN_SIDE_TOP + LEN_SIDE_BOTTOM;

/// Capacity of a single segment buffer
pub const MAX_SEGMENT_LEDS: usize = 64;
/// Capacity of a physical strand buffer
pub const MAX_STRAND_LEDS: usize = 2 * MAX_SEGMENT_LEDS;

pub type SegmentBuffer = Vec<Rgb, MAX_SEGMENT_LEDS>;
pub type StrandBuffer = Vec<Rgb, MAX_STRAND_LEDS>;

/// One of the five logical LED regions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Top,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Segment {
    pub const ALL: [Self; 5] = [
        Self::Top,
        Self::TopLeft,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomRight,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::TopLeft => "top_left",
            Self::TopRight => "top_right",
            Self::BottomLeft => "bottom_left",
            Self::BottomRight => "bottom_right",
        }
    }
}

/// One half of a side strand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quarter {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

impl Quarter {
    /// Quarters in clockwise order, starting at the upper left (NW, NE, SE, SW)
    pub const CLOCKWISE: [Self; 4] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomRight,
        Self::BottomLeft,
    ];

    pub const fn segment(self) -> Segment {
        match self {
            Self::TopLeft => Segment::TopLeft,
            Self::TopRight => Segment::TopRight,
            Self::BottomRight => Segment::BottomRight,
            Self::BottomLeft => Segment::BottomLeft,
        }
    }
}

/// One of the three hardware strands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strand {
    Left,
    Right,
    Top,
}

impl Strand {
    pub const ALL: [Self; 3] = [Self::Left, Self::Right, Self::Top];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Top => "top",
        }
    }
}

/// Length violations detected while building or mapping frames
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    /// A configured segment length is zero or exceeds [`MAX_SEGMENT_LEDS`]
    InvalidLength { segment: Segment, len: usize },
    /// A snapshot buffer does not match its segment length
    SegmentLength {
        segment: Segment,
        expected: usize,
        actual: usize,
    },
    /// A physical sink does not match its strand length
    StrandLength {
        strand: Strand,
        expected: usize,
        actual: usize,
    },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { segment, len } => write!(
                f,
                "segment {} cannot hold {} LEDs (1..={})",
                segment.as_str(),
                len,
                MAX_SEGMENT_LEDS
            ),
            Self::SegmentLength {
                segment,
                expected,
                actual,
            } => write!(
                f,
                "segment {} has {} LEDs, expected {}",
                segment.as_str(),
                actual,
                expected
            ),
            Self::StrandLength {
                strand,
                expected,
                actual,
            } => write!(
                f,
                "strand {} has {} LEDs, expected {}",
                strand.as_str(),
                actual,
                expected
            ),
        }
    }
}

impl core::error::Error for GeometryError {}

/// Segment lengths of the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    top: usize,
    side_top: usize,
    side_bottom: usize,
}

impl Default for Geometry {
    fn default() -> Self {
        Self {
            top: LEN_TOP,
            side_top: LEN_SIDE_TOP,
            side_bottom: LEN_SIDE_BOTTOM,
        }
    }
}

impl Geometry {
    /// Create a geometry with custom segment lengths
    pub fn new(top: usize, side_top: usize, side_bottom: usize) -> Result<Self, GeometryError> {
        for (segment, len) in [
            (Segment::Top, top),
            (Segment::TopLeft, side_top),
            (Segment::BottomLeft, side_bottom),
        ] {
            if len == 0 || len > MAX_SEGMENT_LEDS {
                return Err(GeometryError::InvalidLength { segment, len });
            }
        }
        Ok(Self {
            top,
            side_top,
            side_bottom,
        })
    }

    pub const fn top(&self) -> usize {
        self.top
    }

    pub const fn side_top(&self) -> usize {
        self.side_top
    }

    pub const fn side_bottom(&self) -> usize {
        self.side_bottom
    }

    /// Length of a whole side strand
    pub const fn sides(&self) -> usize {
        self.side_top + self.side_bottom
    }

    pub const fn segment_len(&self, segment: Segment) -> usize {
        match segment {
            Segment::Top => self.top,
            Segment::TopLeft | Segment::TopRight => self.side_top,
            Segment::BottomLeft | Segment::BottomRight => self.side_bottom,
        }
    }

    pub const fn strand_len(&self, strand: Strand) -> usize {
        match strand {
            Strand::Left | Strand::Right => self.sides(),
            Strand::Top => self.top,
        }
    }

    /// Check that a physical sink has the length of `strand`
    pub const fn check_strand(&self, strand: Strand, len: usize) -> Result<(), GeometryError> {
        let expected = self.strand_len(strand);
        if len == expected {
            Ok(())
        } else {
            Err(GeometryError::StrandLength {
                strand,
                expected,
                actual: len,
            })
        }
    }

    /// Concatenate the snapshot segments into the three physical strands
    ///
    /// Fails without producing anything if a single segment is off.
    pub fn map(&self, snapshot: &StrandSnapshot) -> Result<PhysicalFrame, GeometryError> {
        for segment in Segment::ALL {
            let expected = self.segment_len(segment);
            let actual = snapshot.segment(segment).len();
            if actual != expected {
                return Err(GeometryError::SegmentLength {
                    segment,
                    expected,
                    actual,
                });
            }
        }

        Ok(PhysicalFrame {
            left: concat(&snapshot.top_left, &snapshot.bottom_left),
            right: concat(&snapshot.top_right, &snapshot.bottom_right),
            top: snapshot.top.iter().copied().collect(),
        })
    }
}

fn concat(upper: &[Rgb], lower: &[Rgb]) -> StrandBuffer {
    upper.iter().chain(lower).copied().collect()
}

fn filled(len: usize, color: Rgb) -> SegmentBuffer {
    iter::repeat_n(color, len.min(MAX_SEGMENT_LEDS)).collect()
}

/// Colors of all five segments for one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrandSnapshot {
    pub top: SegmentBuffer,
    pub top_left: SegmentBuffer,
    pub top_right: SegmentBuffer,
    pub bottom_left: SegmentBuffer,
    pub bottom_right: SegmentBuffer,
}

impl StrandSnapshot {
    /// Dark snapshot sized for `geometry`
    pub fn new(geometry: &Geometry) -> Self {
        Self::filled(geometry, BLACK)
    }

    /// Snapshot sized for `geometry` with every LED set to `color`
    pub fn filled(geometry: &Geometry, color: Rgb) -> Self {
        Self {
            top: filled(geometry.top, color),
            top_left: filled(geometry.side_top, color),
            top_right: filled(geometry.side_top, color),
            bottom_left: filled(geometry.side_bottom, color),
            bottom_right: filled(geometry.side_bottom, color),
        }
    }

    pub fn segment(&self, segment: Segment) -> &[Rgb] {
        match segment {
            Segment::Top => &self.top,
            Segment::TopLeft => &self.top_left,
            Segment::TopRight => &self.top_right,
            Segment::BottomLeft => &self.bottom_left,
            Segment::BottomRight => &self.bottom_right,
        }
    }

    /// Mutable pixels of a segment; the length cannot change through this
    pub fn segment_mut(&mut self, segment: Segment) -> &mut [Rgb] {
        match segment {
            Segment::Top => &mut self.top,
            Segment::TopLeft => &mut self.top_left,
            Segment::TopRight => &mut self.top_right,
            Segment::BottomLeft => &mut self.bottom_left,
            Segment::BottomRight => &mut self.bottom_right,
        }
    }

    pub fn fill_segment(&mut self, segment: Segment, color: Rgb) {
        self.segment_mut(segment).fill(color);
    }

    pub fn fill_quarter(&mut self, quarter: Quarter, color: Rgb) {
        self.fill_segment(quarter.segment(), color);
    }

    /// Fill all four quarters
    pub fn fill_sides(&mut self, color: Rgb) {
        for quarter in Quarter::CLOCKWISE {
            self.fill_quarter(quarter, color);
        }
    }

    /// Fill every LED belonging to a physical strand
    pub fn fill_strand(&mut self, strand: Strand, color: Rgb) {
        let (upper, lower) = Self::strand_segments(strand);
        self.fill_segment(upper, color);
        if let Some(lower) = lower {
            self.fill_segment(lower, color);
        }
    }

    /// Number of LEDs the snapshot currently holds for a physical strand
    pub fn strand_len(&self, strand: Strand) -> usize {
        let (upper, lower) = Self::strand_segments(strand);
        self.segment(upper).len() + lower.map_or(0, |lower| self.segment(lower).len())
    }

    /// Pixel at a physical strand index
    pub fn strand_pixel(&self, strand: Strand, index: usize) -> Option<Rgb> {
        let (upper, lower) = Self::strand_segments(strand);
        let upper = self.segment(upper);
        if index < upper.len() {
            return Some(upper[index]);
        }
        let lower = self.segment(lower?);
        lower.get(index - upper.len()).copied()
    }

    /// Mutable pixel at a physical strand index
    pub fn strand_pixel_mut(&mut self, strand: Strand, index: usize) -> Option<&mut Rgb> {
        let (upper, lower) = Self::strand_segments(strand);
        let upper_len = self.segment(upper).len();
        if index < upper_len {
            return self.segment_mut(upper).get_mut(index);
        }
        self.segment_mut(lower?).get_mut(index - upper_len)
    }

    const fn strand_segments(strand: Strand) -> (Segment, Option<Segment>) {
        match strand {
            Strand::Left => (Segment::TopLeft, Some(Segment::BottomLeft)),
            Strand::Right => (Segment::TopRight, Some(Segment::BottomRight)),
            Strand::Top => (Segment::Top, None),
        }
    }
}

/// Buffers ready to be written to the three physical strands
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhysicalFrame {
    pub left: StrandBuffer,
    pub right: StrandBuffer,
    pub top: StrandBuffer,
}

impl PhysicalFrame {
    pub fn strand(&self, strand: Strand) -> &[Rgb] {
        match strand {
            Strand::Left => &self.left,
            Strand::Right => &self.right,
            Strand::Top => &self.top,
        }
    }
}
