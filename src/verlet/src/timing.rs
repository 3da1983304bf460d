/// Substeps per tick. Fixed count: a slow frame does not buy extra
/// work, simulated time falls behind real time instead.
pub const SUBSTEPS: u32 = 1000;

/// Cap on simulated seconds per tick.
pub const MAX_FRAME_DT: f64 = 1. / 50.;

/// Wall-clock bookkeeping for the tick driver. The first tick after a
/// reset sees dt_wall = 0.
#[derive(Default)]
pub struct FrameTimer {
	last_ms: Option<f64>,
}

impl FrameTimer {
	pub fn reset(&mut self) {
		self.last_ms = None;
	}

	/// Returns (wall seconds since last tick, substep dt).
	pub fn take_time(&mut self, now_ms: f64) -> (f64, f64) {
		let last_ms = self.last_ms.unwrap_or(now_ms);
		self.last_ms = Some(now_ms);
		let dt_wall = (now_ms - last_ms) / 1e3;
		let sub_dt = dt_wall.min(MAX_FRAME_DT) / SUBSTEPS as f64;
		(dt_wall, sub_dt)
	}
}
