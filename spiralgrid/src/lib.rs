//! A headless, infinitely-pannable 2D grid engine.
//!
//! For host-driving utilities (event controller, screen placement), see the
//! `spiralgrid-adapter` crate.
//!
//! This crate focuses on the core algorithms needed to pan an unbounded grid
//! at interactive frame rates: a spiral enumeration assigning every integer
//! coordinate a stable content index, the window of cells covering the
//! viewport at the current offset, a memoized visible set, and an inertial
//! drag/coast state machine with debounced rest detection.
//!
//! It is UI-agnostic. A host layer is expected to provide:
//! - viewport size (width/height)
//! - pointer and wheel events, with millisecond timestamps
//! - a per-frame call to [`GridEngine::tick`] while the engine wants one
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod cache;
mod engine;
mod kinematics;
mod math;
mod options;
mod rest;
mod spiral;
mod state;
mod types;
mod window;


pub use cache::VisibleSetCache;
pub use engine::GridEngine;
pub use kinematics::{Kinematics, Phase, ReleaseOutcome, TickOutcome};
pub use options::{GridOptions, OnChangeCallback};
pub use rest::RestDetector;
pub use spiral::{spiral_index, spiral_layer};
pub use state::MotionState;
pub use types::{GridCoord, GridItem, Vec2, Viewport};
pub use window::{CoordWindow, coord_window};
