use crate::V2;
use protocol::surface::Color;

const FREE_COLOR: Color = Color::rgb(0xe8, 0xe8, 0xe8);
const ANCHOR_COLOR: Color = Color::rgb(0xd9, 0x4f, 0x4f);

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Kind {
	Free,
	/// Excluded from dynamics, carries its fixed attachment point.
	Anchored(V2),
}

#[derive(Clone, Debug)]
pub struct Particle {
	pub pos: V2,
	pub ppos: V2,
	pub accel: V2,
	pub radius: f64,
	pub mass: f64,
	pub kind: Kind,
}

impl Particle {
	pub fn new(pos: V2, radius: f64, mass: f64) -> Self {
		Self {
			pos,
			ppos: pos,
			accel: V2::zeros(),
			radius,
			mass,
			kind: Kind::Free,
		}
	}

	/// Anchor at `pos`. Mass and radius are cosmetic for this kind;
	/// inf keeps the mass out of any weighted split by accident.
	pub fn anchored(pos: V2, radius: f64) -> Self {
		Self {
			pos,
			ppos: pos,
			accel: V2::zeros(),
			radius,
			mass: f64::INFINITY,
			kind: Kind::Anchored(pos),
		}
	}

	pub fn is_anchored(&self) -> bool {
		matches!(self.kind, Kind::Anchored(_))
	}

	/// Accumulate acceleration for the current substep. Additive across
	/// calls; the integrate step consumes and clears it.
	pub fn accelerate(&mut self, a: V2) {
		self.accel += a;
	}

	/// Implicit velocity of the last committed substep.
	pub fn velocity(&self) -> V2 {
		self.pos - self.ppos
	}

	/// Commit step. Free particles take a Stormer-Verlet step from the
	/// accumulated acceleration; anchored particles snap back to their
	/// anchor, undoing any constraint nudge applied earlier in the
	/// substep.
	pub fn integrate(&mut self, dt: f64) {
		match self.kind {
			Kind::Anchored(anchor) => {
				self.pos = anchor;
				self.ppos = anchor;
				self.accel = V2::zeros();
			}
			Kind::Free => {
				let ppos = self.pos;
				let dp = self.pos - self.ppos + self.accel * dt * dt;
				self.pos += dp;
				self.ppos = ppos;
				self.accel = V2::zeros();
			}
		}
	}

	pub fn color(&self) -> Color {
		match self.kind {
			Kind::Anchored(_) => ANCHOR_COLOR,
			Kind::Free => FREE_COLOR,
		}
	}
}
