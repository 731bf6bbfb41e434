use core::fmt;

use crate::animation::AnimationId;
use crate::director::MAX_ANIMATIONS;
use crate::geometry::GeometryError;

/// Errors reported by the director and the frame scheduler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// A frame or a strand violated the display geometry; nothing was written
    Geometry(GeometryError),
    /// The director was built without animations
    NoAnimations,
    /// More than [`MAX_ANIMATIONS`] animations were given
    TooManyAnimations(usize),
    /// The requested animation is not part of the rotation
    UnknownAnimation(AnimationId),
}

impl From<GeometryError> for EngineError {
    fn from(error: GeometryError) -> Self {
        Self::Geometry(error)
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Geometry(error) => write!(f, "frame rejected: {}", error),
            Self::NoAnimations => write!(f, "no animations to play"),
            Self::TooManyAnimations(count) => write!(
                f,
                "{} animations given, at most {} are supported",
                count, MAX_ANIMATIONS
            ),
            Self::UnknownAnimation(id) => {
                write!(f, "animation {} is not in the rotation", id.as_str())
            }
        }
    }
}

impl core::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Geometry(error) => Some(error),
            _ => None,
        }
    }
}
