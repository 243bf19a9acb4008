//! Adapter utilities for the `draglist` crate.
//!
//! The `draglist` crate is UI-agnostic and focuses on the drag/reorder math and state. This
//! crate provides the frame-driven pieces an adapter embeds in its UI loop:
//!
//! - Edge auto-scroll driven by frame timestamps ([`ScrollDriver`])
//! - An injectable frame clock, with a deterministic one for headless use ([`SyntheticClock`])
//! - A controller tying a drag session, its auto-scroll and the list geometry together
//!   ([`DragController`])
//!
//! This crate is intentionally framework-agnostic (no egui/gpui/ratatui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod clock;
mod controller;
mod driver;

#[cfg(test)]
mod tests;

pub use clock::{FrameClock, SyntheticClock};
pub use controller::DragController;
pub use driver::{ScrollDriver, ScrollDriverOptions, ScrollStep, frame_delta_seconds};
