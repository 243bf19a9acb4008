//! A headless drag-and-drop reorder engine for vertical lists.
//!
//! For frame-driven utilities (the auto-scroll driver and a controller that ties everything
//! together), see the `draglist-adapter` crate.
//!
//! This crate focuses on the logic behind "drag a row to reorder it": mapping a pointer
//! position to an insertion slot, deciding when the list should auto-scroll near its edges, and
//! moving the dragged item inside an ordered collection.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - gesture callbacks (enter/move/exit/end/drop) with a pointer coordinate
//! - item geometry and viewport bounds (see [`GeometryProvider`])
//! - the transferred item identifier on drop
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod error;
mod geometry;
mod options;
mod reorder;
mod resolve;
mod session;
mod types;
mod velocity;


pub use error::{DropError, ReorderError};
pub use geometry::{GeometryProvider, ListModel, Scrollable};
pub use options::{
    AutoScrollOptions, CanDropCallback, OnReorderCallback, OnTargetChangeCallback,
    SessionOptions, TargetMode, UniformRows,
};
pub use reorder::{insertion_index, plan_reorder, reorder, reordered};
pub use resolve::{resolve_by_midpoint, resolve_by_uniform_rows, resolve_target_index};
pub use session::{
    DragEvent, DragPhase, DragResponse, DragSession, SessionSnapshot, parse_payload,
};
pub use types::{ItemGeometry, ItemId, Keyed, Reorder, TargetTransition, ViewportBounds};
pub use velocity::compute_velocity;
