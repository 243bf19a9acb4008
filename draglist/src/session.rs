use alloc::vec::Vec;

use crate::reorder::{apply_reorder, plan_reorder};
use crate::{
    DropError, GeometryProvider, ItemGeometry, ItemId, Keyed, Reorder, SessionOptions,
    TargetTransition, compute_velocity, resolve_target_index,
};

/// Lifecycle phase of a drag session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DragPhase {
    /// No gesture over the list.
    #[default]
    Idle,
    /// The pointer entered the drop region; no move reported yet.
    Entered,
    /// At least one move was reported.
    Dragging,
}

/// A gesture callback, as reported by the UI layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragEvent<'a> {
    Enter { pointer_y: f32 },
    Move { pointer_y: f32 },
    Exit,
    End,
    /// `payload` is the transferred item identifier (base-10 text).
    Drop { pointer_y: f32, payload: &'a str },
}

/// What [`DragSession::handle`] did with an event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DragResponse {
    /// Transient state was updated (enter/move).
    Updated,
    /// The event was not applicable in the current phase and was ignored.
    Ignored,
    /// The session was reset without a drop (exit/end).
    Reset,
    /// The drop was accepted. The move may be a no-op.
    Dropped(Reorder),
    /// The drop was rejected and the collection left unchanged.
    Rejected(DropError),
}

impl DragResponse {
    /// `false` only for a rejected drop.
    pub fn is_accepted(&self) -> bool {
        !matches!(self, Self::Rejected(_))
    }
}

/// A serializable view of the transient drag state.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionSnapshot {
    pub phase: DragPhase,
    pub dragged_item_id: Option<ItemId>,
    pub last_pointer_y: Option<f32>,
    pub target_index: Option<usize>,
    pub scroll_velocity: f32,
}

/// The drag session state machine.
///
/// It owns the transient state of one gesture and is driven by the gesture callbacks
/// (`on_enter`, `on_move`, `on_exit`, `on_end`, `on_drop`) or by [`DragSession::handle`].
/// Geometry is pulled from a [`GeometryProvider`] on every call; nothing about the layout is
/// cached between calls.
///
/// Exit, end and drop all reset the session to [`DragPhase::Idle`] with every field cleared.
#[derive(Clone, Debug, Default)]
pub struct DragSession {
    options: SessionOptions,
    phase: DragPhase,
    dragged_item_id: Option<ItemId>,
    last_pointer_y: Option<f32>,
    target_index: Option<usize>,
    scroll_velocity: f32,
    transition: Option<TargetTransition>,
    scratch: Vec<ItemGeometry>,
}

impl DragSession {
    pub fn new(options: SessionOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: SessionOptions) {
        self.options = options;
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        self.phase != DragPhase::Idle
    }

    pub fn current_target_index(&self) -> Option<usize> {
        self.target_index
    }

    pub fn currently_dragged_item_id(&self) -> Option<ItemId> {
        self.dragged_item_id
    }

    pub fn last_pointer_y(&self) -> Option<f32> {
        self.last_pointer_y
    }

    /// Current auto-scroll velocity in units per second (see [`compute_velocity`] for the sign).
    pub fn scroll_velocity(&self) -> f32 {
        self.scroll_velocity
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            phase: self.phase,
            dragged_item_id: self.dragged_item_id,
            last_pointer_y: self.last_pointer_y,
            target_index: self.target_index,
            scroll_velocity: self.scroll_velocity,
        }
    }

    /// Whether the target slot has a net change since the last [`Self::take_target_transition`].
    pub fn target_changed(&self) -> bool {
        self.transition.is_some()
    }

    /// Returns (and clears) the net target slot change since the last call.
    ///
    /// `previous` is the slot observed at the last take; changes that return to it in between
    /// (e.g. 0 → 1 → 0) cancel out and report nothing.
    pub fn take_target_transition(&mut self) -> Option<TargetTransition> {
        self.transition.take()
    }

    /// Records the item being dragged, as known to the drag source.
    ///
    /// The drop payload stays authoritative; this only feeds `currently_dragged_item_id`.
    pub fn begin(&mut self, item_id: ItemId) {
        ddebug!(item_id, "DragSession::begin");
        self.dragged_item_id = Some(item_id);
    }

    /// Idle → Entered. A repeated enter while active is treated as a move.
    pub fn on_enter<G: GeometryProvider + ?Sized>(&mut self, pointer_y: f32, geometry: &G) {
        if self.phase == DragPhase::Idle {
            ddebug!(pointer_y, "DragSession: enter");
            self.phase = DragPhase::Entered;
        } else {
            self.phase = DragPhase::Dragging;
        }
        self.track(pointer_y, geometry);
    }

    /// Entered/Dragging → Dragging. Ignored (returns `false`) while idle.
    pub fn on_move<G: GeometryProvider + ?Sized>(&mut self, pointer_y: f32, geometry: &G) -> bool {
        if self.phase == DragPhase::Idle {
            dtrace!(pointer_y, "DragSession: move while idle ignored");
            return false;
        }
        self.phase = DragPhase::Dragging;
        self.track(pointer_y, geometry);
        true
    }

    /// The pointer left the drop region. Nothing is committed.
    pub fn on_exit(&mut self) {
        ddebug!(phase = ?self.phase, "DragSession: exit");
        self.reset();
    }

    /// The gesture finished without a drop on this list.
    pub fn on_end(&mut self) {
        ddebug!(phase = ?self.phase, "DragSession: end");
        self.reset();
    }

    /// Drops the item identified by `payload` at `pointer_y`.
    ///
    /// Accepted in any phase, not only after a move: the target is always re-resolved at
    /// `pointer_y`. Returns `false` when the drop is rejected. The session is reset either way.
    pub fn on_drop<T: Keyed, G: GeometryProvider + ?Sized>(
        &mut self,
        pointer_y: f32,
        payload: &str,
        items: &mut Vec<T>,
        geometry: &G,
    ) -> bool {
        self.try_drop(pointer_y, payload, items, geometry).is_ok()
    }

    /// Like [`Self::on_drop`], but reports the committed move or the reason for rejection.
    pub fn try_drop<T: Keyed, G: GeometryProvider + ?Sized>(
        &mut self,
        pointer_y: f32,
        payload: &str,
        items: &mut Vec<T>,
        geometry: &G,
    ) -> Result<Reorder, DropError> {
        let result = self.commit_drop(pointer_y, payload, items, geometry);
        #[cfg(feature = "tracing")]
        log_drop(&result);
        self.reset();
        result
    }

    /// Dispatches a tagged gesture event.
    pub fn handle<T: Keyed, G: GeometryProvider + ?Sized>(
        &mut self,
        event: DragEvent<'_>,
        items: &mut Vec<T>,
        geometry: &G,
    ) -> DragResponse {
        match event {
            DragEvent::Enter { pointer_y } => {
                self.on_enter(pointer_y, geometry);
                DragResponse::Updated
            }
            DragEvent::Move { pointer_y } => {
                if self.on_move(pointer_y, geometry) {
                    DragResponse::Updated
                } else {
                    DragResponse::Ignored
                }
            }
            DragEvent::Exit => {
                self.on_exit();
                DragResponse::Reset
            }
            DragEvent::End => {
                self.on_end();
                DragResponse::Reset
            }
            DragEvent::Drop { pointer_y, payload } => {
                match self.try_drop(pointer_y, payload, items, geometry) {
                    Ok(reorder) => DragResponse::Dropped(reorder),
                    Err(err) => DragResponse::Rejected(err),
                }
            }
        }
    }

    /// Re-resolves the target slot at the last pointer position.
    ///
    /// Call this after the content scrolled under a stationary pointer. The scroll velocity is
    /// left alone; it only follows pointer moves.
    pub fn refresh<G: GeometryProvider + ?Sized>(&mut self, geometry: &G) {
        if !self.is_active() {
            return;
        }
        if let Some(pointer_y) = self.last_pointer_y {
            self.retarget(pointer_y, geometry);
        }
    }

    /// Forces the auto-scroll velocity to zero (e.g. the list hit the end of its range).
    ///
    /// The next move recomputes it from the pointer position.
    pub fn halt_scroll(&mut self) {
        self.scroll_velocity = 0.0;
    }

    /// Clears every transient field and returns to [`DragPhase::Idle`].
    pub fn reset(&mut self) {
        self.phase = DragPhase::Idle;
        self.dragged_item_id = None;
        self.last_pointer_y = None;
        self.target_index = None;
        self.scroll_velocity = 0.0;
        self.transition = None;
        self.scratch.clear();
    }

    fn track<G: GeometryProvider + ?Sized>(&mut self, pointer_y: f32, geometry: &G) {
        self.last_pointer_y = Some(pointer_y);
        self.retarget(pointer_y, geometry);
        self.scroll_velocity = compute_velocity(
            pointer_y,
            geometry.viewport_bounds(),
            &self.options.auto_scroll,
        );
    }

    fn retarget<G: GeometryProvider + ?Sized>(&mut self, pointer_y: f32, geometry: &G) {
        let target = resolve_target_index(
            self.options.target_mode,
            pointer_y,
            geometry,
            &mut self.scratch,
        );
        self.set_target(Some(target));
    }

    fn set_target(&mut self, target: Option<usize>) {
        if self.target_index == target {
            return;
        }
        let transition = TargetTransition {
            previous: self.target_index,
            current: target,
        };
        dtrace!(
            previous = ?transition.previous,
            current = ?transition.current,
            "DragSession: target changed"
        );
        self.target_index = target;
        let previous = self
            .transition
            .map_or(transition.previous, |pending| pending.previous);
        self.transition = (previous != target).then_some(TargetTransition {
            previous,
            current: target,
        });
        self.options.notify_target_change(transition);
    }

    fn commit_drop<T: Keyed, G: GeometryProvider + ?Sized>(
        &mut self,
        pointer_y: f32,
        payload: &str,
        items: &mut Vec<T>,
        geometry: &G,
    ) -> Result<Reorder, DropError> {
        let item_id = parse_payload(payload)?;
        let raw_target = resolve_target_index(
            self.options.target_mode,
            pointer_y,
            geometry,
            &mut self.scratch,
        );
        let reorder = plan_reorder(items, item_id, raw_target)?;
        if reorder.is_noop() {
            return Ok(reorder);
        }
        if !self.options.allows(&reorder) {
            return Err(DropError::Rejected { id: item_id });
        }
        apply_reorder(items, &reorder);
        self.options.notify_reorder(&reorder);
        Ok(reorder)
    }
}

#[cfg(feature = "tracing")]
fn log_drop(result: &Result<Reorder, DropError>) {
    match result {
        Ok(reorder) => ddebug!(
            item_id = reorder.item_id,
            from = reorder.from,
            to = reorder.to,
            "DragSession: drop committed"
        ),
        Err(err) => dwarn!(error = %err, "DragSession: drop rejected"),
    }
}

/// Parses a transferred item identifier (plain base-10 text).
pub fn parse_payload(payload: &str) -> Result<ItemId, DropError> {
    payload
        .parse::<ItemId>()
        .map_err(|_| DropError::InvalidPayload)
}
