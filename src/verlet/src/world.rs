use log::{debug, info, warn};
use rand::Rng;

use crate::boundary::CircleBound;
use crate::error::PhysicsError;
use crate::link::{mass_split, Link};
use crate::particle::Particle;
use crate::scenario::Scenario;
use crate::timing::{FrameTimer, SUBSTEPS};
use crate::V2;
use protocol::scheduler::{FrameScheduler, TickHandle};
use protocol::surface::{Color, DrawSurface};

pub const MAX_PARTICLES: usize = 100;
const SPAWN_PERIOD_MS: f64 = 500.;
const SPAWN_RADIUS_MIN: f64 = 10.;
const SPAWN_RADIUS_MAX: f64 = 30.;

const LINK_COLOR: Color = Color::rgb(0x80, 0x80, 0x80);
const TEXT_COLOR: Color = Color::rgb(0xff, 0xff, 0xff);

/// Scene owner and tick driver. Single-threaded: one tick runs all
/// substeps and draws before returning; the injected scheduler only
/// decides when the host calls `tick` next.
pub struct World {
	particles: Vec<Particle>,
	links: Vec<Link>,
	gravity: V2,
	pub bounded: bool,
	pub collisions: bool,
	boundary: CircleBound,
	scenario: Option<Scenario>,
	spawn_point: V2,

	playing: bool,
	timer: FrameTimer,
	pending: Option<TickHandle>,

	surface: Option<Box<dyn DrawSurface>>,
	scheduler: Box<dyn FrameScheduler>,
}

impl World {
	pub fn new(scheduler: Box<dyn FrameScheduler>) -> Self {
		let boundary = CircleBound::new(V2::zeros(), 300.);
		Self {
			particles: Vec::new(),
			links: Vec::new(),
			gravity: V2::new(0., 1000.),
			bounded: false,
			collisions: false,
			boundary,
			scenario: None,
			spawn_point: boundary.center,
			playing: false,
			timer: FrameTimer::default(),
			pending: None,
			surface: None,
			scheduler,
		}
	}

	pub fn with_surface(mut self, surface: Box<dyn DrawSurface>) -> Self {
		self.surface = Some(surface);
		self
	}

	pub fn with_gravity(mut self, gravity: V2) -> Self {
		self.gravity = gravity;
		self
	}

	pub fn set_boundary(&mut self, boundary: CircleBound) {
		self.boundary = boundary;
	}

	pub fn boundary(&self) -> CircleBound {
		self.boundary
	}

	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	pub fn links(&self) -> &[Link] {
		&self.links
	}

	pub fn is_playing(&self) -> bool {
		self.playing
	}

	pub fn add_particle(&mut self, p: Particle) -> usize {
		self.particles.push(p);
		self.particles.len() - 1
	}

	pub fn add_link(&mut self, link: Link) -> Result<(), PhysicsError> {
		let count = self.particles.len();
		for index in [link.a, link.b] {
			if index >= count {
				return Err(PhysicsError::LinkOutOfBounds { index, count });
			}
		}
		if link.a == link.b {
			return Err(PhysicsError::LinkSelfReference { index: link.a });
		}
		self.links.push(link);
		Ok(())
	}

	/// Replace the scene with a scenario preset. Containment and the
	/// anchor point derive from the surface dimensions, so a surface
	/// must be attached first.
	pub fn load_scenario(&mut self, scenario: Scenario) -> Result<(), PhysicsError> {
		let size = self
			.surface
			.as_ref()
			.ok_or(PhysicsError::SurfaceMissing)?
			.size();
		self.boundary = CircleBound::from_surface(size);
		self.spawn_point =
			self.boundary.center - V2::new(0., self.boundary.radius / 2.);
		let model = scenario.build(self.boundary.center);
		info!(
			"load scenario {:?}: {} particles, {} links",
			scenario,
			model.particles.len(),
			model.links.len()
		);
		self.particles = model.particles;
		self.links = model.links;
		self.bounded = model.bounded;
		self.collisions = model.collisions;
		self.scenario = Some(scenario);
		Ok(())
	}

	/// One substep. Order is fixed: accelerations and positional
	/// corrections first, integration commits last.
	pub fn update(&mut self, dt: f64) {
		for p in self.particles.iter_mut() {
			p.accelerate(self.gravity);
		}
		if self.bounded {
			for p in self.particles.iter_mut() {
				self.boundary.apply(p);
			}
		}
		if self.collisions {
			self.collide();
		}
		for link in self.links.iter() {
			link.apply(&mut self.particles);
		}
		for p in self.particles.iter_mut() {
			p.integrate(dt);
		}
	}

	/// All-pairs overlap resolution, one pass. Same kind dispatch and
	/// mass weighting as Link, target separation is the radius sum and
	/// the correction pushes apart. Coincident pairs are skipped here
	/// (Link leaves the same case unguarded).
	fn collide(&mut self) {
		for i in 0..self.particles.len() {
			for j in i + 1..self.particles.len() {
				let axis = self.particles[i].pos - self.particles[j].pos;
				let dist = axis.magnitude();
				if dist == 0. {
					warn!("coincident pair {} {}, skipping", i, j);
					continue;
				}
				let target = self.particles[i].radius + self.particles[j].radius;
				if dist >= target {
					continue;
				}
				let delta = axis / dist * (dist - target);
				match (
					self.particles[i].is_anchored(),
					self.particles[j].is_anchored(),
				) {
					(true, true) => {}
					(true, false) => self.particles[j].pos += delta,
					(false, true) => self.particles[i].pos -= delta,
					(false, false) => {
						let (delta_a, delta_b) = mass_split(
							delta,
							self.particles[i].mass,
							self.particles[j].mass,
						);
						self.particles[i].pos -= delta_a;
						self.particles[j].pos += delta_b;
					}
				}
			}
		}
	}

	/// Stopped -> playing; runs the first tick immediately with a
	/// sentinel timestamp of zero.
	pub fn start(&mut self) -> Result<(), PhysicsError> {
		if self.surface.is_none() {
			return Err(PhysicsError::SurfaceMissing);
		}
		if self.playing {
			return Ok(());
		}
		self.playing = true;
		self.timer.reset();
		self.tick(0.)
	}

	/// Playing -> stopped. Cancels the pending tick, leaves the scene
	/// untouched.
	pub fn stop(&mut self) {
		self.playing = false;
		if let Some(handle) = self.pending.take() {
			self.scheduler.cancel_tick(handle);
		}
	}

	/// One frame: fixed substep count, then draw, then reschedule.
	pub fn tick(&mut self, now_ms: f64) -> Result<(), PhysicsError> {
		self.pending = None;
		let (dt_wall, sub_dt) = self.timer.take_time(now_ms);
		for _ in 0..SUBSTEPS {
			self.update(sub_dt);
		}
		self.draw()?;
		if self.playing {
			self.pending = Some(self.scheduler.request_tick());
		}
		if self.scenario == Some(Scenario::BoundedObjects) {
			self.maybe_spawn(now_ms, dt_wall);
		}
		Ok(())
	}

	// edge-triggered near the period boundary, about twice per second
	fn maybe_spawn(&mut self, now_ms: f64, dt_wall: f64) {
		if self.particles.len() >= MAX_PARTICLES {
			return;
		}
		if now_ms % SPAWN_PERIOD_MS >= dt_wall * 1e3 {
			return;
		}
		let radius = rand::thread_rng().gen_range(SPAWN_RADIUS_MIN..SPAWN_RADIUS_MAX);
		let mass = radius * radius;
		self.particles
			.push(Particle::new(self.spawn_point, radius, mass));
		debug!(
			"spawned r={:.1} ({} particles)",
			radius,
			self.particles.len()
		);
	}

	fn draw(&mut self) -> Result<(), PhysicsError> {
		let surface = self.surface.as_mut().ok_or(PhysicsError::SurfaceMissing)?;
		surface.clear();
		for link in self.links.iter() {
			surface.line(
				self.particles[link.a].pos,
				self.particles[link.b].pos,
				LINK_COLOR,
			);
		}
		for p in self.particles.iter() {
			surface.fill_circle(p.pos, p.radius, p.color());
		}
		surface.text(
			V2::new(10., 20.),
			&format!("particles: {}", self.particles.len()),
			TEXT_COLOR,
		);
		Ok(())
	}
}
