use approx::assert_abs_diff_eq;

use verlet::particle::{Kind, Particle};
use verlet::V2;

#[test]
fn particle_at_rest_stays_at_rest() {
	let mut p = Particle::new(V2::new(3., 4.), 5., 1.);
	for _ in 0..1000 {
		p.integrate(0.01);
	}
	assert_eq!(p.pos, V2::new(3., 4.));
	assert_eq!(p.velocity(), V2::zeros());
}

#[test]
fn acceleration_is_additive_within_a_substep() {
	let mut p = Particle::new(V2::zeros(), 5., 1.);
	p.accelerate(V2::new(0., 600.));
	p.accelerate(V2::new(0., 400.));
	assert_eq!(p.accel, V2::new(0., 1000.));
	p.integrate(0.1);
	// cleared by the commit step
	assert_eq!(p.accel, V2::zeros());
}

#[test]
fn free_fall_matches_half_g_t_squared() {
	// discrete Verlet from rest covers g*t^2/2 * (1 + 1/n)
	let g = 1000.;
	let total = 1.;
	for n in [100u32, 1000] {
		let mut p = Particle::new(V2::zeros(), 5., 1.);
		let dt = total / n as f64;
		for _ in 0..n {
			p.accelerate(V2::new(0., g));
			p.integrate(dt);
		}
		let exact = 0.5 * g * total * total;
		let error = (p.pos[1] - exact).abs();
		assert!(
			error <= 1.5 * exact / n as f64,
			"n={}: fell {}, exact {}, error {}",
			n,
			p.pos[1],
			exact,
			error
		);
	}
}

#[test]
fn free_fall_error_shrinks_with_substep_count() {
	let g = 1000.;
	let total = 1.;
	let exact = 0.5 * g * total * total;
	let mut errors = vec![];
	for n in [10u32, 100, 1000] {
		let mut p = Particle::new(V2::zeros(), 5., 1.);
		let dt = total / n as f64;
		for _ in 0..n {
			p.accelerate(V2::new(0., g));
			p.integrate(dt);
		}
		errors.push((p.pos[1] - exact).abs());
	}
	assert!(errors[0] > errors[1] && errors[1] > errors[2]);
}

#[test]
fn gravity_acts_at_canvas_scale_coordinates() {
	// one 16ms frame split into 1000 substeps: the per-substep delta is
	// ~2.6e-7 px, so the fall must survive far from the origin too
	let dt = 0.016 / 1000.;
	let mut near = Particle::new(V2::zeros(), 5., 1.);
	let mut far = Particle::new(V2::new(850., 300.), 5., 1.);
	for _ in 0..1000 {
		near.accelerate(V2::new(0., 1000.));
		near.integrate(dt);
		far.accelerate(V2::new(0., 1000.));
		far.integrate(dt);
	}
	assert!(near.pos[1] > 0., "near particle never fell");
	assert!(far.pos[1] > 300., "far particle never fell");
	assert_abs_diff_eq!(far.pos[1] - 300., near.pos[1], epsilon = 1e-9);
}

#[test]
fn velocity_is_implicit_in_position_delta() {
	let mut p = Particle::new(V2::zeros(), 5., 1.);
	p.accelerate(V2::new(100., 0.));
	p.integrate(0.1);
	assert_abs_diff_eq!(p.velocity()[0], 100. * 0.1 * 0.1, epsilon = 1e-6);
}

#[test]
fn anchored_particle_ignores_forces() {
	let anchor = V2::new(50., 60.);
	let mut p = Particle::anchored(anchor, 5.);
	for _ in 0..100 {
		p.accelerate(V2::new(0., 1000.));
		p.integrate(0.01);
	}
	assert_eq!(p.pos, anchor);
	assert_eq!(p.ppos, anchor);
}

#[test]
fn anchored_particle_heals_position_nudges() {
	let anchor = V2::new(0., 0.);
	let mut p = Particle::anchored(anchor, 5.);
	// a constraint pass shoves it around mid-substep
	p.pos = V2::new(17., -4.);
	p.integrate(0.01);
	assert_eq!(p.pos, anchor);
	assert_eq!(p.kind, Kind::Anchored(anchor));
}
