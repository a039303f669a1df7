#![forbid(unsafe_code)]

//! Fit resolution and plain-cell composition for arranged trellis layouts.
//!
//! This crate consumes the rectangle trees produced by `trellis-layout` and
//! turns them into strings:
//!
//! - [`metrics`] - display-width text measurement, wrapping, and clipping
//!   behind the [`TextMetrics`] seam
//! - [`fit`] - the fit resolver: chrome validation, content-box derivation,
//!   and the five fit disciplines
//! - [`render`] - content/style collaborator contracts and the [`Renderer`]
//!   that composes frames bottom-up
//! - [`debug`] - a stock [`DebugProvider`] that renders each frame's
//!   geometry into its content box
//!
//! Styling (borders, padding, color) is out of scope; frames are composed
//! as unadorned cell blocks with content at the top-left of each
//! allocation.

pub mod debug;
pub mod fit;
pub mod metrics;
pub mod render;

pub use debug::DebugProvider;
pub use fit::{Chrome, frame_info, resolve_fit};
pub use metrics::{CellMetrics, TextMetrics};
pub use render::{ContentProvider, ContentTransform, Renderer, StyleProvider};
