#![forbid(unsafe_code)]

//! Shared primitives for the trellis layout engine.
//!
//! This crate holds the types every other trellis crate agrees on:
//!
//! - [`geometry`] - cell-grid rectangles, sizes, and split axes
//! - [`extent`] - per-slot sizing declarations ([`Extent`])
//! - [`fit`] - content fit policies ([`FitMode`]) and the [`FrameInfo`]
//!   descriptor handed to content providers
//! - [`error`] - the layout error taxonomy ([`LayoutError`])
//! - [`trace`] - the optional path-addressed trace-sink contract
//!
//! All cell quantities are `i32`: negative values are representable so that
//! validation can reject them explicitly, and successful outputs are always
//! non-negative.

pub mod error;
pub mod extent;
pub mod fit;
pub mod geometry;
pub mod trace;

pub use error::{ConfigIssue, ExtentIssue, LayoutError, Shortfall};
pub use extent::{Extent, ExtentKind};
pub use fit::{FitMode, FrameInfo};
pub use geometry::{Axis, Rect, Size};
pub use trace::{TraceEvent, TraceSink, WriterSink};
