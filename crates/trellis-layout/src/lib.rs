#![forbid(unsafe_code)]

//! Deterministic cell distribution and rectangle-tree arrangement.
//!
//! This crate is the allocation core of trellis:
//!
//! - [`distribute`] - split a capacity across an ordered list of
//!   [`Extent`](trellis_core::Extent)s (fixed sizes, weighted flex shares,
//!   minimums, soft caps)
//! - [`spec`] - the polymorphic spec tree: [`Split`] stacks and [`Pane`]
//!   frames behind the [`Spec`] / [`StackSpec`] / [`FrameSpec`] seams
//! - [`arrange`] - recursively walk a spec tree and produce an
//!   absolute-coordinate [`Layout`] tree, or fail with a tagged
//!   [`LayoutError`](trellis_core::LayoutError)
//!
//! Everything here is pure and synchronous: identical inputs always produce
//! identical outputs, and a pass either completes or fails with no partial
//! result.
//!
//! # Example
//!
//! ```
//! use trellis_core::{Axis, Extent, FitMode, Size};
//! use trellis_layout::{Pane, Split, arrange};
//!
//! let spec = Split::new(Axis::Horizontal, Extent::fill())
//!     .with_slot(Pane::new(Extent::fixed(3), FitMode::Clip, "sidebar"))
//!     .with_slot(Pane::new(Extent::fill(), FitMode::Clip, "main"));
//!
//! let layout = arrange(&spec, Size::new(10, 5)).unwrap();
//! assert_eq!(layout.width, 10);
//! ```

pub mod arrange;
pub mod distribute;
pub mod spec;

pub use arrange::{Layout, LayoutNode, arrange, arrange_traced};
pub use distribute::{Allocation, distribute};
pub use spec::{FrameSpec, Pane, Spec, SpecView, Split, StackSpec};
