use std::f64::consts::PI;

use crate::link::Link;
use crate::particle::Particle;
use crate::V2;

pub const CHAIN_COUNT: usize = 10;
pub const CHAIN_REST_LEN: f64 = 100.;
pub const ROPE_SEGMENTS: usize = 9;
pub const ROPE_REST_LEN: f64 = 50.;
pub const BOB_MASS: f64 = 10000.;

const PARTICLE_RADIUS: f64 = 5.;
const PARTICLE_MASS: f64 = 1.;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scenario {
	/// Ten two-segment pendulums off one anchor, base angles perturbed
	/// per chain to seed divergence.
	DoublePendulums,
	/// One nine-segment rope with a heavy bob at the end.
	LongPendulum,
	/// Empty scene inside the containment circle; particles spawn on a
	/// timer while the tick loop runs.
	BoundedObjects,
}

/// Initial particles, links and flags for one scenario. Construction is
/// pure; the world installs the model and owns it from there.
#[derive(Default)]
pub struct ScenarioModel {
	pub particles: Vec<Particle>,
	pub links: Vec<Link>,
	pub bounded: bool,
	pub collisions: bool,
}

impl Scenario {
	pub fn build(&self, anchor: V2) -> ScenarioModel {
		match self {
			Scenario::DoublePendulums => ScenarioModel::double_pendulums(anchor),
			Scenario::LongPendulum => ScenarioModel::long_pendulum(anchor),
			Scenario::BoundedObjects => ScenarioModel::bounded_objects(),
		}
	}
}

impl ScenarioModel {
	pub fn double_pendulums(anchor: V2) -> Self {
		let mut particles = vec![Particle::anchored(anchor, PARTICLE_RADIUS)];
		let mut links = vec![];
		for i in 0..CHAIN_COUNT {
			// tiny per-chain offset, enough to break symmetry
			let angle = i as f64 * PI / 10000. / CHAIN_COUNT as f64;
			let dir = V2::new(angle.cos(), angle.sin());
			let elbow = particles.len();
			particles.push(Particle::new(
				anchor + dir * CHAIN_REST_LEN,
				PARTICLE_RADIUS,
				PARTICLE_MASS,
			));
			particles.push(Particle::new(
				anchor + dir * (2. * CHAIN_REST_LEN),
				PARTICLE_RADIUS,
				PARTICLE_MASS,
			));
			links.push(Link::new(0, elbow, CHAIN_REST_LEN));
			links.push(Link::new(elbow, elbow + 1, CHAIN_REST_LEN));
		}
		Self {
			particles,
			links,
			bounded: false,
			collisions: false,
		}
	}

	pub fn long_pendulum(anchor: V2) -> Self {
		let mut particles = vec![Particle::anchored(anchor, PARTICLE_RADIUS)];
		let mut links = vec![];
		for i in 1..=ROPE_SEGMENTS {
			particles.push(Particle::new(
				anchor + V2::new(i as f64 * ROPE_REST_LEN, 0.),
				PARTICLE_RADIUS,
				PARTICLE_MASS,
			));
			links.push(Link::new(i - 1, i, ROPE_REST_LEN));
		}
		// heavy bob at the free end
		particles.last_mut().unwrap().mass = BOB_MASS;
		Self {
			particles,
			links,
			bounded: false,
			collisions: false,
		}
	}

	pub fn bounded_objects() -> Self {
		Self {
			bounded: true,
			collisions: true,
			..Default::default()
		}
	}
}
