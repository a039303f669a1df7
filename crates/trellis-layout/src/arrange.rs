#![forbid(unsafe_code)]

//! Recursive arrangement of a spec tree into absolute rectangles.
//!
//! [`arrange`] walks a spec tree depth-first. At each stack it collects the
//! slot extents, asks [`distribute`](crate::distribute::distribute) to split
//! the rectangle's extent along the stack axis, and recurses into each slot
//! with its share; frames terminate the recursion. The result mirrors the
//! spec tree's shape with every node carrying its absolute [`Rect`].
//!
//! Any failure aborts the whole pass: no partial trees are ever returned.

use trellis_core::error::{LayoutError, Shortfall};
use trellis_core::fit::FitMode;
use trellis_core::geometry::{Axis, Rect, Size};
use trellis_core::trace::{TraceEvent, TraceSink, append_path};

use crate::distribute::distribute;
use crate::spec::{Spec, SpecView, StackSpec};

/// An arranged tree with the size it was arranged for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout<I> {
    /// Width the tree was arranged at.
    pub width: i32,
    /// Height the tree was arranged at.
    pub height: i32,
    /// The root node.
    pub root: LayoutNode<I>,
}

/// One node of an arranged tree.
///
/// Stack slots partition the parent's rect exactly along the split axis and
/// copy it along the cross axis. Frame nodes carry the identifier and fit
/// mode cloned from their spec, which is all the render layer needs for
/// content and style lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutNode<I> {
    /// An arranged stack and its slots, in slot order.
    Stack {
        /// The split axis.
        axis: Axis,
        /// Absolute allocation of the whole stack.
        rect: Rect,
        /// Arranged children.
        slots: Vec<LayoutNode<I>>,
    },
    /// An arranged frame.
    Frame {
        /// Absolute allocation.
        rect: Rect,
        /// Identifier from the frame spec.
        id: I,
        /// Fit mode from the frame spec.
        fit: FitMode,
    },
}

impl<I> LayoutNode<I> {
    /// This node's absolute allocation.
    #[must_use]
    pub fn rect(&self) -> Rect {
        match self {
            LayoutNode::Stack { rect, .. } | LayoutNode::Frame { rect, .. } => *rect,
        }
    }
}

/// Arrange a spec tree at the given size.
pub fn arrange<I: Clone>(spec: &dyn Spec<I>, size: Size) -> Result<Layout<I>, LayoutError> {
    arrange_inner(spec, size, None)
}

/// Arrange a spec tree, reporting allocation and error events to `sink`.
///
/// Tracing is purely observational: the arranged tree is identical to what
/// [`arrange`] produces for the same inputs.
pub fn arrange_traced<I: Clone>(
    spec: &dyn Spec<I>,
    size: Size,
    sink: &dyn TraceSink,
) -> Result<Layout<I>, LayoutError> {
    arrange_inner(spec, size, Some(sink))
}

fn arrange_inner<I: Clone>(
    spec: &dyn Spec<I>,
    size: Size,
    sink: Option<&dyn TraceSink>,
) -> Result<Layout<I>, LayoutError> {
    // Paths are only materialized when someone is listening.
    let path = if sink.is_some() { "/" } else { "" };
    let root = arrange_node(spec, Rect::from_size(size), path, sink)?;
    Ok(Layout {
        width: size.width,
        height: size.height,
        root,
    })
}

fn arrange_node<I: Clone>(
    spec: &dyn Spec<I>,
    rect: Rect,
    path: &str,
    sink: Option<&dyn TraceSink>,
) -> Result<LayoutNode<I>, LayoutError> {
    match spec.view() {
        SpecView::Frame(frame) => Ok(LayoutNode::Frame {
            rect,
            id: frame.id().clone(),
            fit: frame.fit(),
        }),
        SpecView::Stack(stack) => arrange_stack(stack, rect, path, sink),
    }
}

fn arrange_stack<I: Clone>(
    stack: &dyn StackSpec<I>,
    rect: Rect,
    path: &str,
    sink: Option<&dyn TraceSink>,
) -> Result<LayoutNode<I>, LayoutError> {
    let axis = stack.axis();
    let len = stack.len();
    if len == 0 {
        return Ok(LayoutNode::Stack {
            axis,
            rect,
            slots: Vec::new(),
        });
    }

    let mut extents = Vec::with_capacity(len);
    for index in 0..len {
        let Some(slot) = stack.slot(index) else {
            return Err(trace_error(sink, path, "stack.slot", LayoutError::Slot { index }));
        };
        extents.push(slot.extent());
    }

    let total = axis.extent_of(rect.size());
    let allocation = match distribute(total, &extents) {
        Ok(allocation) => allocation,
        Err(LayoutError::ExtentTooSmall { need, .. }) => {
            let err = LayoutError::ExtentTooSmall {
                axis: Some(axis),
                need,
                have: total,
                source: Some(stage_label(axis).to_string()),
                reason: Shortfall::Allocation,
            };
            return Err(trace_error(sink, path, "stack.distribute", err));
        }
        Err(err) => return Err(trace_error(sink, path, "stack.distribute", err)),
    };

    if let Some(sink) = sink {
        sink.event(
            TraceEvent::StackAlloc,
            path,
            &format!(
                "axis={axis} total={total} slots={} sizes={:?} required={}",
                allocation.sizes.len(),
                allocation.sizes,
                allocation.required,
            ),
        );
    }

    let mut slots = Vec::with_capacity(len);
    let mut offset = 0;
    for (index, &size) in allocation.sizes.iter().enumerate() {
        // Slot access must be stable within the pass; an index that was
        // present during extent collection may not vanish here.
        let Some(slot) = stack.slot(index) else {
            return Err(trace_error(sink, path, "stack.slot", LayoutError::Slot { index }));
        };

        let slot_rect = match axis {
            Axis::Horizontal => Rect::new(rect.x + offset, rect.y, size, rect.height),
            Axis::Vertical => Rect::new(rect.x, rect.y + offset, rect.width, size),
        };

        let slot_path = if sink.is_some() {
            append_path(path, index)
        } else {
            String::new()
        };

        match arrange_node(slot, slot_rect, &slot_path, sink) {
            Ok(node) => slots.push(node),
            Err(err) => return Err(trace_error(sink, path, "stack.recurse", err)),
        }

        offset += size;
    }

    Ok(LayoutNode::Stack { axis, rect, slots })
}

fn stage_label(axis: Axis) -> &'static str {
    match axis {
        Axis::Horizontal => "horizontal split",
        Axis::Vertical => "vertical split",
    }
}

fn trace_error(
    sink: Option<&dyn TraceSink>,
    path: &str,
    stage: &str,
    err: LayoutError,
) -> LayoutError {
    if let Some(sink) = sink {
        sink.event(TraceEvent::Error, path, &format!("stage={stage} err={err}"));
    }
    err
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use trellis_core::Extent;

    use crate::spec::{Pane, Split};

    fn pane(extent: Extent, id: &'static str) -> Pane<&'static str> {
        Pane::new(extent, FitMode::Clip, id)
    }

    #[test]
    fn frame_spec_arranges_to_a_single_frame() {
        let layout = arrange(&pane(Extent::fill(), "only"), Size::new(8, 3)).unwrap();
        assert_eq!(
            layout.root,
            LayoutNode::Frame {
                rect: Rect::new(0, 0, 8, 3),
                id: "only",
                fit: FitMode::Clip,
            }
        );
    }

    #[test]
    fn empty_stack_arranges_to_childless_node() {
        let split: Split<&str> = Split::new(Axis::Horizontal, Extent::fill());
        let layout = arrange(&split, Size::new(10, 4)).unwrap();
        match layout.root {
            LayoutNode::Stack { rect, ref slots, .. } => {
                assert_eq!(rect, Rect::new(0, 0, 10, 4));
                assert!(slots.is_empty());
            }
            LayoutNode::Frame { .. } => panic!("expected stack"),
        }
    }

    #[test]
    fn nested_stacks_partition_exactly() {
        let inner = Split::new(Axis::Vertical, Extent::fill())
            .with_slot(pane(Extent::fixed(2), "top"))
            .with_slot(pane(Extent::fill(), "bottom"));
        let spec = Split::new(Axis::Horizontal, Extent::fill())
            .with_slot(pane(Extent::fixed(3), "left"))
            .with_slot(inner);

        let layout = arrange(&spec, Size::new(10, 5)).unwrap();
        let LayoutNode::Stack { slots, .. } = layout.root else {
            panic!("expected stack root");
        };

        assert_eq!(slots[0].rect(), Rect::new(0, 0, 3, 5));
        assert_eq!(slots[1].rect(), Rect::new(3, 0, 7, 5));

        let LayoutNode::Stack { slots: inner, .. } = &slots[1] else {
            panic!("expected nested stack");
        };
        assert_eq!(inner[0].rect(), Rect::new(3, 0, 7, 2));
        assert_eq!(inner[1].rect(), Rect::new(3, 2, 7, 3));
    }

    #[test]
    fn offsets_accumulate_slot_sizes() {
        let spec = Split::new(Axis::Horizontal, Extent::fill())
            .with_slot(pane(Extent::fixed(2), "a"))
            .with_slot(pane(Extent::fixed(3), "b"))
            .with_slot(pane(Extent::fill(), "c"));

        let layout = arrange(&spec, Size::new(12, 1)).unwrap();
        let LayoutNode::Stack { slots, .. } = layout.root else {
            panic!("expected stack root");
        };
        assert_eq!(slots[0].rect().x, 0);
        assert_eq!(slots[1].rect().x, 2);
        assert_eq!(slots[2].rect().x, 5);
        assert_eq!(slots[2].rect().width, 7);
    }

    #[test]
    fn shortfall_is_tagged_with_axis_and_stage() {
        let spec = Split::new(Axis::Vertical, Extent::fill())
            .with_slot(pane(Extent::fixed(4), "a"))
            .with_slot(pane(Extent::fixed(4), "b"));

        let err = arrange(&spec, Size::new(10, 5)).unwrap_err();
        match err {
            LayoutError::ExtentTooSmall {
                axis,
                need,
                have,
                source,
                reason,
            } => {
                assert_eq!(axis, Some(Axis::Vertical));
                assert_eq!(need, 8);
                assert_eq!(have, 5);
                assert_eq!(source.as_deref(), Some("vertical split"));
                assert_eq!(reason, Shortfall::Allocation);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn extent_validation_failures_propagate_unchanged() {
        let spec = Split::new(Axis::Horizontal, Extent::fill())
            .with_slot(pane(Extent::fixed(2), "ok"))
            .with_slot(pane(Extent::flex(0), "bad"));

        let err = arrange(&spec, Size::new(10, 2)).unwrap_err();
        match err {
            LayoutError::Extent { index, .. } => assert_eq!(index, 1),
            other => panic!("unexpected error: {other}"),
        }
    }

    /// A stack whose slot access returns `None` at one index.
    struct HoleyStack {
        hole: usize,
        slots: Vec<Pane<&'static str>>,
    }

    impl Spec<&'static str> for HoleyStack {
        fn extent(&self) -> Extent {
            Extent::fill()
        }

        fn view(&self) -> SpecView<'_, &'static str> {
            SpecView::Stack(self)
        }
    }

    impl StackSpec<&'static str> for HoleyStack {
        fn axis(&self) -> Axis {
            Axis::Horizontal
        }

        fn len(&self) -> usize {
            self.slots.len()
        }

        fn slot(&self, index: usize) -> Option<&dyn Spec<&'static str>> {
            if index == self.hole {
                return None;
            }
            self.slots.get(index).map(|slot| slot as &dyn Spec<_>)
        }
    }

    #[test]
    fn absent_slot_surfaces_its_index() {
        for hole in [0, 1, 2] {
            let stack = HoleyStack {
                hole,
                slots: vec![
                    pane(Extent::fill(), "a"),
                    pane(Extent::fill(), "b"),
                    pane(Extent::fill(), "c"),
                ],
            };
            match arrange(&stack, Size::new(9, 1)).unwrap_err() {
                LayoutError::Slot { index } => assert_eq!(index, hole),
                other => panic!("unexpected error: {other}"),
            }
        }
    }

    #[test]
    fn arrangement_is_idempotent() {
        let spec = Split::new(Axis::Horizontal, Extent::fill())
            .with_slot(pane(Extent::flex(1), "a"))
            .with_slot(pane(Extent::flex(3), "b"));
        let first = arrange(&spec, Size::new(10, 2)).unwrap();
        let second = arrange(&spec, Size::new(10, 2)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn trace_events_carry_paths() {
        let events = RefCell::new(Vec::new());
        let sink = |event: TraceEvent, path: &str, message: &str| {
            events
                .borrow_mut()
                .push((event, path.to_string(), message.to_string()));
        };

        let inner = Split::new(Axis::Vertical, Extent::fill())
            .with_slot(pane(Extent::fixed(1), "top"))
            .with_slot(pane(Extent::fill(), "bottom"));
        let spec = Split::new(Axis::Horizontal, Extent::fill())
            .with_slot(pane(Extent::fixed(3), "left"))
            .with_slot(inner);

        arrange_traced(&spec, Size::new(10, 5), &sink).unwrap();

        let events = events.into_inner();
        let paths: Vec<&str> = events
            .iter()
            .filter(|(event, _, _)| *event == TraceEvent::StackAlloc)
            .map(|(_, path, _)| path.as_str())
            .collect();
        assert_eq!(paths, vec!["/", "/1"]);
        assert!(events[0].2.contains("axis=horizontal"));
        assert!(events[0].2.contains("sizes=[3, 7]"));
    }

    #[test]
    fn traced_errors_are_reported_then_propagated() {
        let events = RefCell::new(Vec::new());
        let sink = |event: TraceEvent, path: &str, message: &str| {
            events
                .borrow_mut()
                .push((event, path.to_string(), message.to_string()));
        };

        let stack = HoleyStack {
            hole: 1,
            slots: vec![pane(Extent::fill(), "a"), pane(Extent::fill(), "b")],
        };
        let err = arrange_traced(&stack, Size::new(4, 1), &sink).unwrap_err();
        assert!(err.is_config());

        let events = events.into_inner();
        assert!(
            events
                .iter()
                .any(|(event, path, message)| *event == TraceEvent::Error
                    && path == "/"
                    && message.contains("stage=stack.slot"))
        );
    }

    #[test]
    fn tracing_does_not_change_the_result() {
        let spec = Split::new(Axis::Horizontal, Extent::fill())
            .with_slot(pane(Extent::flex_max(1, 2), "a"))
            .with_slot(pane(Extent::flex_max(1, 2), "b"));

        let silent = arrange(&spec, Size::new(7, 1)).unwrap();
        let noisy =
            arrange_traced(&spec, Size::new(7, 1), &|_: TraceEvent, _: &str, _: &str| {}).unwrap();
        assert_eq!(silent, noisy);
    }

    #[test]
    fn frame_nodes_keep_spec_fit() {
        let spec: Pane<&str> = Pane::new(Extent::fill(), FitMode::WrapStrict, "body");
        let layout = arrange(&spec, Size::new(5, 5)).unwrap();
        match layout.root {
            LayoutNode::Frame { fit, id, .. } => {
                assert_eq!(fit, FitMode::WrapStrict);
                assert_eq!(id, "body");
            }
            LayoutNode::Stack { .. } => panic!("expected frame"),
        }
    }
}
