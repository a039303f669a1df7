#![forbid(unsafe_code)]

//! The polymorphic spec tree.
//!
//! A spec tree is built from two node kinds: stacks, which split their
//! allocation across child slots along an axis, and frames, which are
//! terminal and later receive content. The seams are traits so callers can
//! supply their own node types; dispatch goes through the exhaustive
//! [`SpecView`] enum so the arranger pattern-matches rather than downcasts.
//!
//! [`Split`] and [`Pane`] are the stock implementations.

use trellis_core::extent::Extent;
use trellis_core::fit::FitMode;
use trellis_core::geometry::Axis;

/// A node in the spec tree. Exposes its own footprint along the parent's
/// split axis and a view for dispatch.
pub trait Spec<I> {
    /// This node's sizing declaration.
    fn extent(&self) -> Extent;

    /// Which kind of node this is.
    fn view(&self) -> SpecView<'_, I>;
}

/// Exhaustive view of a spec node for dispatch.
pub enum SpecView<'a, I> {
    /// A stack splitting its allocation across slots.
    Stack(&'a dyn StackSpec<I>),
    /// A terminal frame.
    Frame(&'a dyn FrameSpec<I>),
}

/// A composite node that splits capacity across indexed child slots.
///
/// `slot` must be stable within one arrangement pass: the arranger fetches
/// each slot once to collect extents and once more to recurse, and expects
/// the same spec both times. Returning `None` for an index below `len()` is
/// reported as a fatal slot error, not retried.
pub trait StackSpec<I>: Spec<I> {
    /// The axis along which this stack splits its allocation.
    fn axis(&self) -> Axis;

    /// Number of slots.
    fn len(&self) -> usize;

    /// Whether the stack has no slots.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The spec occupying `index`, if present.
    fn slot(&self, index: usize) -> Option<&dyn Spec<I>>;
}

/// A terminal node that will receive rendered content.
pub trait FrameSpec<I>: Spec<I> {
    /// Identifier used by content and style collaborators.
    fn id(&self) -> &I;

    /// How content is fitted into this frame's content box.
    fn fit(&self) -> FitMode;
}

/// Stock stack: an axis, a footprint, and owned child specs.
///
/// # Example
///
/// ```
/// use trellis_core::{Axis, Extent, FitMode};
/// use trellis_layout::{Pane, Split};
///
/// let spec = Split::new(Axis::Vertical, Extent::fill())
///     .with_slot(Pane::new(Extent::fixed(1), FitMode::Clip, "header"))
///     .with_slot(Pane::new(Extent::fill(), FitMode::WrapClip, "body"));
/// ```
pub struct Split<I> {
    extent: Extent,
    axis: Axis,
    slots: Vec<Box<dyn Spec<I>>>,
}

impl<I> Split<I> {
    /// Create an empty split along `axis` with the given footprint.
    #[must_use]
    pub fn new(axis: Axis, extent: Extent) -> Self {
        Self {
            extent,
            axis,
            slots: Vec::new(),
        }
    }

    /// Append a child slot.
    #[must_use]
    pub fn with_slot(mut self, spec: impl Spec<I> + 'static) -> Self {
        self.slots.push(Box::new(spec));
        self
    }

    /// Append an already-boxed child slot.
    pub fn push(&mut self, spec: Box<dyn Spec<I>>) {
        self.slots.push(spec);
    }
}

impl<I> Spec<I> for Split<I> {
    fn extent(&self) -> Extent {
        self.extent
    }

    fn view(&self) -> SpecView<'_, I> {
        SpecView::Stack(self)
    }
}

impl<I> StackSpec<I> for Split<I> {
    fn axis(&self) -> Axis {
        self.axis
    }

    fn len(&self) -> usize {
        self.slots.len()
    }

    fn slot(&self, index: usize) -> Option<&dyn Spec<I>> {
        self.slots.get(index).map(|slot| slot.as_ref())
    }
}

/// Stock frame: a footprint, a fit mode, and an identifier.
pub struct Pane<I> {
    extent: Extent,
    fit: FitMode,
    id: I,
}

impl<I> Pane<I> {
    /// Create a frame spec.
    #[must_use]
    pub fn new(extent: Extent, fit: FitMode, id: I) -> Self {
        Self { extent, fit, id }
    }
}

impl<I> Spec<I> for Pane<I> {
    fn extent(&self) -> Extent {
        self.extent
    }

    fn view(&self) -> SpecView<'_, I> {
        SpecView::Frame(self)
    }
}

impl<I> FrameSpec<I> for Pane<I> {
    fn id(&self) -> &I {
        &self.id
    }

    fn fit(&self) -> FitMode {
        self.fit
    }
}
