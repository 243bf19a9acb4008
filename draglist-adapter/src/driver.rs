use draglist::Scrollable;

use crate::FrameClock;

/// Tuning for [`ScrollDriver`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollDriverOptions {
    /// A frame that consumes less than this (in absolute value) means the list hit the end of
    /// its scroll range; the driver stops.
    pub saturation_epsilon: f32,
}

impl ScrollDriverOptions {
    pub const DEFAULT_SATURATION_EPSILON: f32 = 0.5;

    pub fn with_saturation_epsilon(mut self, saturation_epsilon: f32) -> Self {
        self.saturation_epsilon = saturation_epsilon;
        self
    }
}

impl Default for ScrollDriverOptions {
    fn default() -> Self {
        Self {
            saturation_epsilon: Self::DEFAULT_SATURATION_EPSILON,
        }
    }
}

/// What a single [`ScrollDriver::tick`] did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScrollStep {
    /// The velocity is zero; the driver is not running.
    Idle,
    /// First frame after (re)starting: the timestamp was recorded, nothing scrolled yet.
    Armed,
    /// The list was asked to scroll by `requested` and moved by `consumed`.
    Scrolled { requested: f32, consumed: f32 },
    /// The list did not move enough; the driver stopped and its velocity is now zero.
    Saturated { requested: f32, consumed: f32 },
}

impl ScrollStep {
    /// The amount the list actually moved during this frame.
    pub fn consumed(&self) -> f32 {
        match *self {
            Self::Scrolled { consumed, .. } | Self::Saturated { consumed, .. } => consumed,
            Self::Idle | Self::Armed => 0.0,
        }
    }
}

/// Frame-driven auto-scroll.
///
/// While the velocity is non-zero, every frame integrates it over the elapsed frame time and
/// asks the list to scroll by the result. The elapsed time always comes from the frame
/// timestamps, never from an assumed refresh rate.
///
/// The driver holds no UI objects; adapters call [`Self::tick`] from their frame callback (or
/// [`Self::run`] with a [`FrameClock`]) and [`Self::cancel`] when the drag session ends.
#[derive(Clone, Debug, Default)]
pub struct ScrollDriver {
    options: ScrollDriverOptions,
    velocity: f32,
    last_frame_nanos: Option<u64>,
}

impl ScrollDriver {
    pub fn new(options: ScrollDriverOptions) -> Self {
        Self {
            options,
            velocity: 0.0,
            last_frame_nanos: None,
        }
    }

    pub fn options(&self) -> &ScrollDriverOptions {
        &self.options
    }

    /// Current velocity in units per second (negative scrolls toward the start).
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn is_running(&self) -> bool {
        self.velocity != 0.0
    }

    /// Updates the velocity. Zero (or a non-finite value) stops the driver right away.
    ///
    /// Changing a non-zero velocity keeps the frame timing, so no frame is lost.
    pub fn set_velocity(&mut self, velocity: f32) {
        if velocity == 0.0 || !velocity.is_finite() {
            self.cancel();
            return;
        }
        if !self.is_running() {
            adebug!(velocity, "ScrollDriver: start");
            self.last_frame_nanos = None;
        }
        self.velocity = velocity;
    }

    /// Stops the driver and forgets the frame timing.
    pub fn cancel(&mut self) {
        if self.is_running() {
            adebug!(velocity = self.velocity, "ScrollDriver: stop");
        }
        self.velocity = 0.0;
        self.last_frame_nanos = None;
    }

    /// Advances the driver to the frame at `frame_time_nanos`.
    pub fn tick<S: Scrollable + ?Sized>(
        &mut self,
        frame_time_nanos: u64,
        scrollable: &mut S,
    ) -> ScrollStep {
        if !self.is_running() {
            return ScrollStep::Idle;
        }
        let Some(last) = self.last_frame_nanos.replace(frame_time_nanos) else {
            return ScrollStep::Armed;
        };
        if frame_time_nanos < last {
            awarn!(
                last,
                now = frame_time_nanos,
                "ScrollDriver: frame time went backwards"
            );
        }

        let dt = frame_delta_seconds(last, frame_time_nanos);
        let requested = self.velocity * dt;
        if requested == 0.0 {
            return ScrollStep::Scrolled {
                requested,
                consumed: 0.0,
            };
        }

        let consumed = scrollable.scroll_by(requested);
        atrace!(requested, consumed, "ScrollDriver: frame");

        let eps = self.options.saturation_epsilon;
        if consumed > -eps && consumed < eps {
            adebug!(requested, consumed, "ScrollDriver: scroll range saturated");
            self.cancel();
            return ScrollStep::Saturated {
                requested,
                consumed,
            };
        }
        ScrollStep::Scrolled {
            requested,
            consumed,
        }
    }

    /// Drives frames from `clock` until the driver stops or `max_frames` frames have elapsed.
    ///
    /// Returns the number of frames consumed from the clock.
    pub fn run<C: FrameClock + ?Sized, S: Scrollable + ?Sized>(
        &mut self,
        clock: &mut C,
        scrollable: &mut S,
        max_frames: usize,
    ) -> usize {
        let mut frames = 0;
        while self.is_running() && frames < max_frames {
            self.tick(clock.next_frame_nanos(), scrollable);
            frames += 1;
        }
        frames
    }
}

/// Seconds between two frame timestamps. A non-monotonic pair yields zero.
pub fn frame_delta_seconds(last_nanos: u64, now_nanos: u64) -> f32 {
    (now_nanos.saturating_sub(last_nanos) as f64 / 1_000_000_000.0) as f32
}
