// scheduler: per-frame callback source, host-owned
//
// the host asks for a tick, then later calls World::tick with a
// monotonically increasing millisecond timestamp. cancel only prevents
// ticks that have not fired yet.

pub type TickHandle = u64;

pub trait FrameScheduler {
	fn request_tick(&mut self) -> TickHandle;

	fn cancel_tick(&mut self, handle: TickHandle);
}

/// Scheduler that hands out handles and never fires; the owner drives
/// ticks itself. Used by the bench binary.
#[derive(Default)]
pub struct NullScheduler {
	next: TickHandle,
}

impl FrameScheduler for NullScheduler {
	fn request_tick(&mut self) -> TickHandle {
		self.next += 1;
		self.next
	}

	fn cancel_tick(&mut self, _handle: TickHandle) {}
}
