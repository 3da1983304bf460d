// surface: what the sandbox needs from a canvas, nothing more

use crate::V2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b }
	}
}

pub trait DrawSurface {
	fn size(&self) -> [f64; 2];

	fn clear(&mut self);

	fn fill_circle(&mut self, center: V2, radius: f64, color: Color);

	fn line(&mut self, p1: V2, p2: V2, color: Color);

	fn text(&mut self, pos: V2, s: &str, color: Color);
}

/// Headless surface for benches and tests.
pub struct NullSurface {
	size: [f64; 2],
}

impl Default for NullSurface {
	fn default() -> Self {
		Self {
			size: [800., 600.],
		}
	}
}

impl NullSurface {
	pub fn with_size(size: [f64; 2]) -> Self {
		Self { size }
	}
}

impl DrawSurface for NullSurface {
	fn size(&self) -> [f64; 2] {
		self.size
	}

	fn clear(&mut self) {}

	fn fill_circle(&mut self, _center: V2, _radius: f64, _color: Color) {}

	fn line(&mut self, _p1: V2, _p2: V2, _color: Color) {}

	fn text(&mut self, _pos: V2, _s: &str, _color: Color) {}
}
