use crate::particle::Particle;
use crate::V2;

/// Circular containment. Purely positional: overshooting particles are
/// projected back onto the admissible circle, velocity is whatever the
/// next Verlet step derives from the clamped position.
#[derive(Clone, Copy, Debug)]
pub struct CircleBound {
	pub center: V2,
	pub radius: f64,
}

impl CircleBound {
	pub fn new(center: V2, radius: f64) -> Self {
		Self { center, radius }
	}

	/// Derive containment from surface dimensions: centered, with a
	/// small margin to keep the rim on screen.
	pub fn from_surface(size: [f64; 2]) -> Self {
		let center = V2::new(size[0] / 2., size[1] / 2.);
		let radius = size[0].min(size[1]) / 2. - 20.;
		Self { center, radius }
	}

	pub fn apply(&self, p: &mut Particle) -> bool {
		let limit = self.radius - p.radius;
		let dp = p.pos - self.center;
		let dist = dp.magnitude();
		if dist > limit {
			p.pos = self.center + dp / dist * limit;
			true
		} else {
			false
		}
	}
}
