#![forbid(unsafe_code)]

//! Bottom-up string composition of an arranged layout tree.
//!
//! The renderer walks a [`Layout`], asks the style collaborator for each
//! frame's chrome, asks the content collaborator for the frame's text,
//! resolves the frame's fit mode, and joins slot blocks left-to-right or
//! top-to-bottom into one string. Content is placed at the top-left of each
//! frame's allocation; drawing borders or padding is a styling concern that
//! lives outside this crate.

use std::fmt;

use trellis_core::error::LayoutError;
use trellis_core::fit::{FitMode, FrameInfo};
use trellis_core::geometry::{Axis, Rect};
use trellis_core::trace::{TraceEvent, TraceSink, append_path};
use trellis_layout::{Layout, LayoutNode};
use unicode_width::UnicodeWidthStr;

use crate::fit::{Chrome, frame_info, resolve_fit};
use crate::metrics::TextMetrics;

/// A per-frame content rewrite supplied by the style collaborator.
pub type ContentTransform = Box<dyn Fn(&str) -> String>;

/// Style collaborator: chrome lookup by frame identifier.
///
/// Returning `None` means "no style": zero chrome.
pub trait StyleProvider<I> {
    /// The chrome footprint for `id`, if any.
    fn chrome(&self, id: &I) -> Option<Chrome>;

    /// An optional transform applied to the frame's content before
    /// measurement and fit resolution, so it can change `Exact` and
    /// `WrapStrict` outcomes.
    fn transform(&self, id: &I) -> Option<ContentTransform> {
        let _ = id;
        None
    }
}

impl<I, F> StyleProvider<I> for F
where
    F: Fn(&I) -> Option<Chrome>,
{
    fn chrome(&self, id: &I) -> Option<Chrome> {
        self(id)
    }
}

/// Content collaborator: text lookup by frame identifier and allocation.
///
/// Providers should respect `info.content_width` / `info.content_height`;
/// the fit mode in `info` is applied to whatever they return. Rejecting an
/// identifier is reported via [`LayoutError::UnknownId`], never swallowed.
pub trait ContentProvider<I> {
    /// The raw content for `id` given its allocation.
    fn content(&self, id: &I, info: &FrameInfo) -> Result<String, LayoutError>;
}

impl<I, F> ContentProvider<I> for F
where
    F: Fn(&I, &FrameInfo) -> Result<String, LayoutError>,
{
    fn content(&self, id: &I, info: &FrameInfo) -> Result<String, LayoutError> {
        self(id, info)
    }
}

/// Composes arranged layouts into strings.
pub struct Renderer<'a, I> {
    metrics: &'a dyn TextMetrics,
    style: Option<&'a dyn StyleProvider<I>>,
    content: Option<&'a dyn ContentProvider<I>>,
    sink: Option<&'a dyn TraceSink>,
}

impl<'a, I: fmt::Display> Renderer<'a, I> {
    /// Create a renderer over the given text metrics.
    #[must_use]
    pub fn new(metrics: &'a dyn TextMetrics) -> Self {
        Self {
            metrics,
            style: None,
            content: None,
            sink: None,
        }
    }

    /// Attach a style collaborator.
    #[must_use]
    pub fn with_style(mut self, style: &'a dyn StyleProvider<I>) -> Self {
        self.style = Some(style);
        self
    }

    /// Attach a content collaborator.
    #[must_use]
    pub fn with_content(mut self, content: &'a dyn ContentProvider<I>) -> Self {
        self.content = Some(content);
        self
    }

    /// Attach a trace sink for per-frame render and error events.
    #[must_use]
    pub fn with_trace(mut self, sink: &'a dyn TraceSink) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Render the whole layout to one newline-joined string.
    ///
    /// Every line is padded to its block's width, so the result is a
    /// rectangular block of `layout.width` columns unless an `Overflow`
    /// frame spilled wider.
    pub fn render(&self, layout: &Layout<I>) -> Result<String, LayoutError> {
        let path = if self.sink.is_some() { "/" } else { "" };
        let block = self.render_node(&layout.root, path)?;
        Ok(block.into_string())
    }

    fn render_node(&self, node: &LayoutNode<I>, path: &str) -> Result<Block, LayoutError> {
        match node {
            LayoutNode::Frame { rect, id, fit } => self.render_frame(*rect, id, *fit, path),
            LayoutNode::Stack { axis, rect, slots } => {
                if slots.is_empty() {
                    return Ok(Block::blank(rect.width, rect.height));
                }
                let mut blocks = Vec::with_capacity(slots.len());
                for (index, slot) in slots.iter().enumerate() {
                    let slot_path = if self.sink.is_some() {
                        append_path(path, index)
                    } else {
                        String::new()
                    };
                    blocks.push(self.render_node(slot, &slot_path)?);
                }
                Ok(match axis {
                    Axis::Horizontal => Block::join_horizontal(blocks),
                    Axis::Vertical => Block::join_vertical(blocks),
                })
            }
        }
    }

    fn render_frame(
        &self,
        rect: Rect,
        id: &I,
        fit: FitMode,
        path: &str,
    ) -> Result<Block, LayoutError> {
        let chrome = self
            .style
            .and_then(|style| style.chrome(id))
            .unwrap_or(Chrome::NONE);
        let source = format!("frame {id}");

        let info = match frame_info(rect, &chrome, fit, &source) {
            Ok(info) => info,
            Err(err) => return Err(self.trace_error(path, "frame.chrome", err)),
        };

        tracing::debug!(
            id = %id,
            width = info.width,
            height = info.height,
            content_width = info.content_width,
            content_height = info.content_height,
            fit = %fit,
            "render frame"
        );
        if let Some(sink) = self.sink {
            sink.event(
                TraceEvent::FrameRender,
                path,
                &format!(
                    "id={id} alloc={}x{} frame={}x{} content={}x{} fit={fit}",
                    info.width,
                    info.height,
                    info.frame_width,
                    info.frame_height,
                    info.content_width,
                    info.content_height,
                ),
            );
        }

        let content = match self.content {
            Some(provider) => provider.content(id, &info),
            None => Err(LayoutError::ContentProviderMissing { id: id.to_string() }),
        };
        let content = match content {
            Ok(content) => content,
            Err(err) => return Err(self.trace_error(path, "frame.content", err)),
        };

        // Transforms run ahead of fit resolution, never after it.
        let content = match self.style.and_then(|style| style.transform(id)) {
            Some(transform) => transform(&content),
            None => content,
        };

        match resolve_fit(&info, &content, self.metrics, &source) {
            Ok(fitted) => Ok(Block::from_text(&fitted, rect.width, rect.height)),
            Err(err) => Err(self.trace_error(path, "frame.fit", err)),
        }
    }

    fn trace_error(&self, path: &str, stage: &str, err: LayoutError) -> LayoutError {
        tracing::debug!(stage, error = %err, "render error");
        if let Some(sink) = self.sink {
            sink.event(TraceEvent::Error, path, &format!("stage={stage} err={err}"));
        }
        err
    }
}

/// A rectangular block of text under composition.
///
/// Lines are padded to `width` display columns. Overflowing frame content
/// may exceed the nominal width; joins pad to the widest member instead of
/// truncating, so composition never panics on oversized content.
struct Block {
    width: i32,
    lines: Vec<String>,
}

impl Block {
    fn blank(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let blank = " ".repeat(width as usize);
        Self {
            width,
            lines: vec![blank; height.max(0) as usize],
        }
    }

    /// Lay text into a block of at least `width` x `height` cells.
    fn from_text(text: &str, width: i32, height: i32) -> Self {
        let mut block = Self {
            width: width.max(0),
            lines: Vec::new(),
        };
        if !text.is_empty() {
            block.lines = text.split('\n').map(str::to_string).collect();
            block.width = block
                .width
                .max(block.lines.iter().map(|l| l.width() as i32).max().unwrap_or(0));
        }
        block.pad(block.width, height.max(0));
        block
    }

    /// Pad to at least `width` columns and `height` lines.
    fn pad(&mut self, width: i32, height: i32) {
        self.width = self.width.max(width);
        while (self.lines.len() as i32) < height {
            self.lines.push(String::new());
        }
        for line in &mut self.lines {
            let used = line.width() as i32;
            if used < self.width {
                line.push_str(&" ".repeat((self.width - used) as usize));
            }
        }
    }

    fn join_horizontal(mut blocks: Vec<Block>) -> Block {
        let height = blocks
            .iter()
            .map(|block| block.lines.len())
            .max()
            .unwrap_or(0) as i32;
        let mut width = 0;
        for block in &mut blocks {
            block.pad(block.width, height);
            width += block.width;
        }

        let mut lines = Vec::with_capacity(height as usize);
        for row in 0..height as usize {
            let mut line = String::new();
            for block in &blocks {
                line.push_str(&block.lines[row]);
            }
            lines.push(line);
        }
        Block { width, lines }
    }

    fn join_vertical(mut blocks: Vec<Block>) -> Block {
        let width = blocks.iter().map(|block| block.width).max().unwrap_or(0);
        let mut lines = Vec::new();
        for block in &mut blocks {
            block.pad(width, 0);
            lines.append(&mut block.lines);
        }
        Block { width, lines }
    }

    fn into_string(self) -> String {
        self.lines.join("\n")
    }
}
