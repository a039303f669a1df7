#![forbid(unsafe_code)]

//! Fit resolution: validating and reshaping frame content against its
//! allocated rectangle.
//!
//! Resolution runs in two steps. [`frame_info`] checks that the frame's
//! chrome fits the allocation on both axes and derives the content box;
//! [`resolve_fit`] then applies the frame's [`FitMode`] to the retrieved
//! content, delegating all string inspection to a
//! [`TextMetrics`](crate::metrics::TextMetrics) implementation.

use trellis_core::error::{LayoutError, Shortfall};
use trellis_core::fit::{FitMode, FrameInfo};
use trellis_core::geometry::{Axis, Rect};

use crate::metrics::TextMetrics;

/// A frame's chrome footprint as reported by the style collaborator.
///
/// `frame_width`/`frame_height` are the total footprint (padding + border +
/// margin) and drive the content-box computation; the margin and border
/// components are carried separately for style layers that draw them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Chrome {
    /// Total horizontal footprint.
    pub frame_width: i32,
    /// Total vertical footprint.
    pub frame_height: i32,
    /// Horizontal margin component.
    pub margin_width: i32,
    /// Vertical margin component.
    pub margin_height: i32,
    /// Horizontal border component.
    pub border_width: i32,
    /// Vertical border component.
    pub border_height: i32,
}

impl Chrome {
    /// No chrome at all; the content box is the full allocation.
    pub const NONE: Self = Self {
        frame_width: 0,
        frame_height: 0,
        margin_width: 0,
        margin_height: 0,
        border_width: 0,
        border_height: 0,
    };

    /// Chrome with only a total footprint (no margin/border breakdown).
    #[must_use]
    pub const fn frame(frame_width: i32, frame_height: i32) -> Self {
        Self {
            frame_width,
            frame_height,
            margin_width: 0,
            margin_height: 0,
            border_width: 0,
            border_height: 0,
        }
    }
}

/// Validate that `chrome` fits inside `rect` and derive the [`FrameInfo`]
/// handed to the content provider.
///
/// Fails with a frame-stage shortfall on the first axis where the chrome
/// alone exceeds the allocation.
pub fn frame_info(
    rect: Rect,
    chrome: &Chrome,
    fit: FitMode,
    source: &str,
) -> Result<FrameInfo, LayoutError> {
    if chrome.frame_width > rect.width {
        return Err(LayoutError::ExtentTooSmall {
            axis: Some(Axis::Horizontal),
            need: chrome.frame_width,
            have: rect.width,
            source: Some(source.to_string()),
            reason: Shortfall::Frame,
        });
    }
    if chrome.frame_height > rect.height {
        return Err(LayoutError::ExtentTooSmall {
            axis: Some(Axis::Vertical),
            need: chrome.frame_height,
            have: rect.height,
            source: Some(source.to_string()),
            reason: Shortfall::Frame,
        });
    }

    Ok(FrameInfo {
        width: rect.width,
        height: rect.height,
        content_width: rect.width - chrome.frame_width,
        content_height: rect.height - chrome.frame_height,
        frame_width: chrome.frame_width,
        frame_height: chrome.frame_height,
        fit,
    })
}

/// Apply `info.fit` to `content`, returning the text to compose.
///
/// `Clip` and `WrapClip` never fail on size. `Exact` and `WrapStrict` fail
/// with a content-stage shortfall when the (wrapped) content exceeds the
/// content box. `Overflow` passes content through untouched.
pub fn resolve_fit(
    info: &FrameInfo,
    content: &str,
    metrics: &dyn TextMetrics,
    source: &str,
) -> Result<String, LayoutError> {
    match info.fit {
        FitMode::Exact => {
            check_content_box(info, metrics.measure(content), source)?;
            Ok(content.to_string())
        }
        FitMode::Clip => Ok(metrics.clip(content, info.content_width, info.content_height)),
        FitMode::WrapClip => {
            let wrapped = metrics.wrap(content, info.content_width);
            Ok(metrics.clip(&wrapped, info.content_width, info.content_height))
        }
        FitMode::WrapStrict => {
            let wrapped = metrics.wrap(content, info.content_width);
            check_content_box(info, metrics.measure(&wrapped), source)?;
            Ok(wrapped)
        }
        FitMode::Overflow => Ok(content.to_string()),
    }
}

fn check_content_box(
    info: &FrameInfo,
    measured: trellis_core::geometry::Size,
    source: &str,
) -> Result<(), LayoutError> {
    if measured.width > info.content_width {
        return Err(LayoutError::ExtentTooSmall {
            axis: Some(Axis::Horizontal),
            need: info.frame_width + measured.width,
            have: info.width,
            source: Some(source.to_string()),
            reason: Shortfall::Content,
        });
    }
    if measured.height > info.content_height {
        return Err(LayoutError::ExtentTooSmall {
            axis: Some(Axis::Vertical),
            need: info.frame_height + measured.height,
            have: info.height,
            source: Some(source.to_string()),
            reason: Shortfall::Content,
        });
    }
    Ok(())
}
