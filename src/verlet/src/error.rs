use std::fmt;

/// Contract violations at the public seams. Degenerate numerics
/// (coincident particles, non-positive mass or radius) are not errors;
/// they propagate as non-finite positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhysicsError {
	/// Tick loop started or driven without a drawing surface attached.
	SurfaceMissing,
	/// Link endpoint index outside the particle store.
	LinkOutOfBounds { index: usize, count: usize },
	/// Link with both endpoints on the same particle.
	LinkSelfReference { index: usize },
}

impl fmt::Display for PhysicsError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			PhysicsError::SurfaceMissing => {
				write!(f, "no drawing surface attached")
			}
			PhysicsError::LinkOutOfBounds { index, count } => {
				write!(
					f,
					"link endpoint {} out of bounds (particle count {})",
					index, count
				)
			}
			PhysicsError::LinkSelfReference { index } => {
				write!(f, "link endpoints both reference particle {}", index)
			}
		}
	}
}

impl std::error::Error for PhysicsError {}
