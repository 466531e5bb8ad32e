//! Adapter utilities for the `spiralgrid` crate.
//!
//! The `spiralgrid` crate is UI-agnostic and focuses on the core math and
//! state. This crate provides small, framework-neutral helpers commonly
//! needed by adapters:
//!
//! - An event [`Controller`] translating raw pointer/wheel/resize events into
//!   engine calls and frame scheduling hints
//! - Screen placement helpers mapping visible cells to pixel rectangles
//!
//! This crate is intentionally framework-agnostic (no winit/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod controller;
mod placement;


pub use controller::Controller;
pub use placement::{CellPlacement, cell_placement, collect_placements, for_each_placement};
