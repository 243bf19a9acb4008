use alloc::vec::Vec;

use draglist::{
    DragEvent, DragResponse, DragSession, DropError, ItemId, Keyed, Reorder, Scrollable,
    SessionOptions,
};

use crate::{FrameClock, ScrollDriver, ScrollDriverOptions, ScrollStep};

/// A framework-neutral controller that owns a drag session, its auto-scroll driver and the
/// list geometry.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_enter` / `on_move` / `on_exit` / `on_end` / `on_drop` (or `handle`) from gesture
///   callbacks
/// - `tick(frame_time_nanos)` from the frame callback while `needs_frame()` is true
///
/// The driver lives exactly as long as the session: exit, end and drop all cancel it, so no
/// scrolling happens after the gesture is over.
#[derive(Clone, Debug)]
pub struct DragController<G> {
    session: DragSession,
    driver: ScrollDriver,
    geometry: G,
}

impl<G: Scrollable> DragController<G> {
    pub fn new(options: SessionOptions, geometry: G) -> Self {
        Self {
            session: DragSession::new(options),
            driver: ScrollDriver::default(),
            geometry,
        }
    }

    pub fn with_driver_options(mut self, options: ScrollDriverOptions) -> Self {
        self.driver = ScrollDriver::new(options);
        self
    }

    pub fn session(&self) -> &DragSession {
        &self.session
    }

    pub fn driver(&self) -> &ScrollDriver {
        &self.driver
    }

    pub fn geometry(&self) -> &G {
        &self.geometry
    }

    /// Mutable access to the geometry, e.g. to apply a layout pass.
    ///
    /// Follow up with [`Self::refresh`] if the layout moved under the pointer.
    pub fn geometry_mut(&mut self) -> &mut G {
        &mut self.geometry
    }

    pub fn into_geometry(self) -> G {
        self.geometry
    }

    pub fn current_target_index(&self) -> Option<usize> {
        self.session.current_target_index()
    }

    pub fn currently_dragged_item_id(&self) -> Option<ItemId> {
        self.session.currently_dragged_item_id()
    }

    pub fn is_autoscrolling(&self) -> bool {
        self.driver.is_running()
    }

    /// Whether the adapter should keep requesting frame callbacks.
    pub fn needs_frame(&self) -> bool {
        self.session.is_active() && self.driver.is_running()
    }

    pub fn begin(&mut self, item_id: ItemId) {
        self.session.begin(item_id);
    }

    pub fn on_enter(&mut self, pointer_y: f32) {
        self.session.on_enter(pointer_y, &self.geometry);
        self.sync_driver();
    }

    pub fn on_move(&mut self, pointer_y: f32) -> bool {
        let applied = self.session.on_move(pointer_y, &self.geometry);
        self.sync_driver();
        applied
    }

    pub fn on_exit(&mut self) {
        self.session.on_exit();
        self.sync_driver();
    }

    pub fn on_end(&mut self) {
        self.session.on_end();
        self.sync_driver();
    }

    pub fn on_drop<T: Keyed>(&mut self, pointer_y: f32, payload: &str, items: &mut Vec<T>) -> bool {
        self.try_drop(pointer_y, payload, items).is_ok()
    }

    /// Like [`Self::on_drop`], but reports the committed move or the reason for rejection.
    ///
    /// A committed move is forwarded to the geometry through [`Scrollable::apply_reorder`], so
    /// per-item sizes follow the new order.
    pub fn try_drop<T: Keyed>(
        &mut self,
        pointer_y: f32,
        payload: &str,
        items: &mut Vec<T>,
    ) -> Result<Reorder, DropError> {
        let result = self
            .session
            .try_drop(pointer_y, payload, items, &self.geometry);
        if let Ok(reorder) = &result {
            self.commit_layout(reorder);
        }
        self.sync_driver();
        result
    }

    pub fn handle<T: Keyed>(&mut self, event: DragEvent<'_>, items: &mut Vec<T>) -> DragResponse {
        let response = self.session.handle(event, items, &self.geometry);
        if let DragResponse::Dropped(reorder) = &response {
            self.commit_layout(reorder);
        }
        self.sync_driver();
        response
    }

    /// Re-resolves the target slot after the layout changed under a stationary pointer.
    pub fn refresh(&mut self) {
        self.session.refresh(&self.geometry);
    }

    /// Advances auto-scroll to the frame at `frame_time_nanos`.
    ///
    /// After a scroll step the target slot is re-resolved at the last pointer position. When the
    /// list saturates, the session's velocity is forced to zero until the next move.
    pub fn tick(&mut self, frame_time_nanos: u64) -> ScrollStep {
        if !self.session.is_active() {
            self.driver.cancel();
            return ScrollStep::Idle;
        }

        let step = self.driver.tick(frame_time_nanos, &mut self.geometry);
        match step {
            ScrollStep::Scrolled { consumed, .. } if consumed != 0.0 => {
                self.session.refresh(&self.geometry);
            }
            ScrollStep::Saturated { consumed, .. } => {
                if consumed != 0.0 {
                    self.session.refresh(&self.geometry);
                }
                self.session.halt_scroll();
            }
            _ => {}
        }
        step
    }

    /// Drives frames from `clock` until auto-scroll stops or `max_frames` frames have elapsed.
    ///
    /// Returns the number of frames consumed from the clock.
    pub fn run<C: FrameClock + ?Sized>(&mut self, clock: &mut C, max_frames: usize) -> usize {
        let mut frames = 0;
        while self.needs_frame() && frames < max_frames {
            self.tick(clock.next_frame_nanos());
            frames += 1;
        }
        frames
    }

    fn commit_layout(&mut self, reorder: &Reorder) {
        if !reorder.is_noop() {
            self.geometry.apply_reorder(reorder);
        }
    }

    fn sync_driver(&mut self) {
        if self.session.is_active() {
            self.driver.set_velocity(self.session.scroll_velocity());
        } else {
            self.driver.cancel();
        }
    }
}
