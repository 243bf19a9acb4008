/// A source of frame timestamps.
///
/// On a real display this is the platform's vsync/frame callback (e.g. "frame time in
/// nanoseconds" from a choreographer). Headless code and tests use [`SyntheticClock`].
///
/// Timestamps must be monotonic; they do not need to be evenly spaced.
pub trait FrameClock {
    /// Waits for (or simulates) the next frame and returns its timestamp in nanoseconds.
    fn next_frame_nanos(&mut self) -> u64;
}

impl<F: FnMut() -> u64> FrameClock for F {
    fn next_frame_nanos(&mut self) -> u64 {
        self()
    }
}

/// A deterministic frame clock yielding evenly spaced timestamps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SyntheticClock {
    now_nanos: u64,
    interval_nanos: u64,
}

impl SyntheticClock {
    pub fn new(start_nanos: u64, interval_nanos: u64) -> Self {
        Self {
            now_nanos: start_nanos,
            interval_nanos,
        }
    }

    /// A clock ticking at `hz` frames per second, starting at zero.
    pub fn at_hz(hz: u32) -> Self {
        Self::new(0, 1_000_000_000 / u64::from(hz.max(1)))
    }

    pub fn now_nanos(&self) -> u64 {
        self.now_nanos
    }

    pub fn interval_nanos(&self) -> u64 {
        self.interval_nanos
    }
}

impl FrameClock for SyntheticClock {
    fn next_frame_nanos(&mut self) -> u64 {
        let now = self.now_nanos;
        self.now_nanos = self.now_nanos.saturating_add(self.interval_nanos);
        now
    }
}
