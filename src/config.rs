use crate::color::Palette;
use crate::director::RotationPolicy;
use crate::geometry::Geometry;

/// Process-wide engine configuration
///
/// Built once at startup and shared by reference with every component.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineConfig {
    /// Segment lengths of the display
    pub geometry: Geometry,
    /// Color pool for every random color decision
    pub palette: Palette,
    /// When the director moves on to the next animation
    pub rotation: RotationPolicy,
}

impl EngineConfig {
    #[must_use]
    pub fn with_geometry(mut self, geometry: Geometry) -> Self {
        self.geometry = geometry;
        self
    }

    #[must_use]
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    #[must_use]
    pub fn with_rotation(mut self, rotation: RotationPolicy) -> Self {
        self.rotation = rotation;
        self
    }
}
