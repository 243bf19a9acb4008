use alloc::sync::Arc;

use crate::{Reorder, TargetTransition};

/// A predicate deciding whether a proposed move may be committed.
///
/// It receives the resolved move (`from` in the pre-drop collection, `to` in the post-drop one).
pub type CanDropCallback = Arc<dyn Fn(&Reorder) -> bool + Send + Sync>;

/// A callback fired whenever the hovered insertion slot changes during a drag.
pub type OnTargetChangeCallback = Arc<dyn Fn(TargetTransition) + Send + Sync>;

/// A callback fired after a drop moved an item.
pub type OnReorderCallback = Arc<dyn Fn(&Reorder) + Send + Sync>;

/// Edge auto-scroll tuning, in density-independent units.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AutoScrollOptions {
    /// Width of the trigger band at the bottom edge (and the base width at the top edge).
    pub scroll_threshold: f32,
    /// Extra width added to the top band to account for a header overlaying the viewport.
    pub edge_extra: f32,
    /// Magnitude of the scroll velocity inside a band, in units per second.
    pub scroll_speed: f32,
}

impl AutoScrollOptions {
    pub const DEFAULT_SCROLL_THRESHOLD: f32 = 96.0;
    pub const DEFAULT_EDGE_EXTRA: f32 = 64.0;
    pub const DEFAULT_SCROLL_SPEED: f32 = 1200.0;

    pub fn new(scroll_threshold: f32, edge_extra: f32, scroll_speed: f32) -> Self {
        Self {
            scroll_threshold,
            edge_extra,
            scroll_speed,
        }
    }

    pub fn with_scroll_threshold(mut self, scroll_threshold: f32) -> Self {
        self.scroll_threshold = scroll_threshold;
        self
    }

    pub fn with_edge_extra(mut self, edge_extra: f32) -> Self {
        self.edge_extra = edge_extra;
        self
    }

    pub fn with_scroll_speed(mut self, scroll_speed: f32) -> Self {
        self.scroll_speed = scroll_speed;
        self
    }

    /// Converts density-independent values into pixels for a display density.
    pub fn scaled(self, density: f32) -> Self {
        Self {
            scroll_threshold: self.scroll_threshold * density,
            edge_extra: self.edge_extra * density,
            scroll_speed: self.scroll_speed * density,
        }
    }

    /// Width of the band along the leading (top) edge.
    pub fn start_band(&self) -> f32 {
        self.scroll_threshold + self.edge_extra
    }

    /// Width of the band along the trailing (bottom) edge.
    pub fn end_band(&self) -> f32 {
        self.scroll_threshold
    }
}

impl Default for AutoScrollOptions {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_SCROLL_THRESHOLD,
            Self::DEFAULT_EDGE_EXTRA,
            Self::DEFAULT_SCROLL_SPEED,
        )
    }
}

/// Fixed-height row layout used by the arithmetic resolution mode.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UniformRows {
    pub row_height: f32,
    /// Content placed before the first row (e.g. a list header).
    pub header_height: f32,
    /// When set, a pointer past the middle of a row targets the slot after it.
    pub round_to_nearest: bool,
}

impl UniformRows {
    pub fn new(row_height: f32) -> Self {
        Self {
            row_height,
            header_height: 0.0,
            round_to_nearest: false,
        }
    }

    pub fn with_header_height(mut self, header_height: f32) -> Self {
        self.header_height = header_height;
        self
    }

    pub fn with_round_to_nearest(mut self, round_to_nearest: bool) -> Self {
        self.round_to_nearest = round_to_nearest;
        self
    }
}

/// How a pointer position is mapped to an insertion slot.
///
/// The two modes can disagree for the same pointer position (notably near the scroll
/// boundaries), so pick the one that matches how the list is laid out.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TargetMode {
    /// Compare against the vertical midpoint of each visible item. Works with virtualized
    /// lists where only a window of items has geometry.
    #[default]
    Midpoint,
    /// Divide the absolute content position by a fixed row height.
    UniformRows(UniformRows),
}

/// Configuration for [`crate::DragSession`].
///
/// Cheap to clone: callbacks are stored in `Arc`s.
#[derive(Clone, Default)]
pub struct SessionOptions {
    pub target_mode: TargetMode,
    pub auto_scroll: AutoScrollOptions,
    /// Optional veto for a proposed move. When absent, every valid move is allowed.
    pub can_drop: Option<CanDropCallback>,
    /// Hover feedback hook (haptics, emphasis). Fires only when the slot actually changes.
    pub on_target_change: Option<OnTargetChangeCallback>,
    /// Commit hook fired after a drop moved an item.
    pub on_reorder: Option<OnReorderCallback>,
}

impl SessionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_target_mode(mut self, target_mode: TargetMode) -> Self {
        self.target_mode = target_mode;
        self
    }

    pub fn with_auto_scroll(mut self, auto_scroll: AutoScrollOptions) -> Self {
        self.auto_scroll = auto_scroll;
        self
    }

    pub fn with_can_drop(
        mut self,
        can_drop: Option<impl Fn(&Reorder) -> bool + Send + Sync + 'static>,
    ) -> Self {
        self.can_drop = can_drop.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_target_change(
        mut self,
        on_target_change: Option<impl Fn(TargetTransition) + Send + Sync + 'static>,
    ) -> Self {
        self.on_target_change = on_target_change.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_reorder(
        mut self,
        on_reorder: Option<impl Fn(&Reorder) + Send + Sync + 'static>,
    ) -> Self {
        self.on_reorder = on_reorder.map(|f| Arc::new(f) as _);
        self
    }

    pub(crate) fn allows(&self, reorder: &Reorder) -> bool {
        self.can_drop.as_ref().is_none_or(|f| f(reorder))
    }

    pub(crate) fn notify_reorder(&self, reorder: &Reorder) {
        if let Some(cb) = &self.on_reorder {
            cb(reorder);
        }
    }

    pub(crate) fn notify_target_change(&self, transition: TargetTransition) {
        if let Some(cb) = &self.on_target_change {
            cb(transition);
        }
    }
}

impl core::fmt::Debug for SessionOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SessionOptions")
            .field("target_mode", &self.target_mode)
            .field("auto_scroll", &self.auto_scroll)
            .field("can_drop", &self.can_drop.is_some())
            .field("on_target_change", &self.on_target_change.is_some())
            .field("on_reorder", &self.on_reorder.is_some())
            .finish_non_exhaustive()
    }
}

