use crate::particle::Particle;
use crate::V2;

/// Distance constraint between two particles in the world's store.
/// Holds stable indices, never references; particles are append-only.
#[derive(Clone, Debug)]
pub struct Link {
	pub a: usize,
	pub b: usize,
	pub target_len: f64,
}

impl Link {
	pub fn new(a: usize, b: usize, target_len: f64) -> Self {
		Self { a, b, target_len }
	}

	/// One sequential positional correction. Exact satisfaction is not
	/// expected when particles share links; repeated substeps converge.
	///
	/// NOTE: coincident endpoints divide by zero here and the resulting
	/// non-finite positions stick. Deliberately unguarded, unlike the
	/// collision pass.
	pub fn apply(&self, particles: &mut [Particle]) {
		let axis = particles[self.b].pos - particles[self.a].pos;
		let dist = axis.magnitude();
		let delta = axis / dist * (dist - self.target_len);
		match (particles[self.a].is_anchored(), particles[self.b].is_anchored()) {
			(true, true) => {}
			(true, false) => particles[self.b].pos -= delta,
			(false, true) => particles[self.a].pos += delta,
			(false, false) => {
				let (delta_a, delta_b) = mass_split(
					delta,
					particles[self.a].mass,
					particles[self.b].mass,
				);
				particles[self.a].pos += delta_a;
				particles[self.b].pos -= delta_b;
			}
		}
	}
}

/// Split a correction so the heavier endpoint moves less: the first
/// share scales with the second mass and vice versa. massA = 3 massB
/// moves A by 1/4 and B by 3/4 of the correction.
pub fn mass_split(delta: V2, mass_a: f64, mass_b: f64) -> (V2, V2) {
	let delta_b = delta * (mass_a / (mass_a + mass_b));
	let delta_a = delta - delta_b;
	(delta_a, delta_b)
}
