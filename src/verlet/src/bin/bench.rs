use std::time::SystemTime;

use protocol::scheduler::NullScheduler;
use protocol::surface::NullSurface;
use verlet::scenario::Scenario;
use verlet::world::World;

fn main() {
	env_logger::init();
	let start = SystemTime::now();
	let mut world = World::new(Box::<NullScheduler>::default())
		.with_surface(Box::<NullSurface>::default());
	world.load_scenario(Scenario::DoublePendulums).unwrap();
	world.start().unwrap();
	let rframes = 100;
	for frame in 1..=rframes {
		world.tick(frame as f64 * 16.).unwrap();
	}
	let duration = SystemTime::now().duration_since(start).unwrap().as_micros();
	eprintln!("{:.1}us per frame", duration as f32 / rframes as f32);
}
