#![forbid(unsafe_code)]

//! Content fit policies.

use std::fmt;

/// How frame content is reshaped and validated against its content box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FitMode {
    /// No reshaping; error if content exceeds the content box on either axis.
    #[default]
    Exact,
    /// Wrap to the content box width, then clip vertically to fit.
    WrapClip,
    /// Wrap to the content box width; error if the wrapped content exceeds
    /// the content box height.
    WrapStrict,
    /// Clip content to the content box on both axes.
    Clip,
    /// Let content overflow its box; no reshaping, no validation.
    Overflow,
}

impl FitMode {
    /// Short label for display.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            FitMode::Exact => "exact",
            FitMode::WrapClip => "wrap-clip",
            FitMode::WrapStrict => "wrap-strict",
            FitMode::Clip => "clip",
            FitMode::Overflow => "overflow",
        }
    }
}

impl fmt::Display for FitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The allocation handed to a content provider for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameInfo {
    /// Total allocated width.
    pub width: i32,
    /// Total allocated height.
    pub height: i32,
    /// Inner content box width (allocation minus chrome).
    pub content_width: i32,
    /// Inner content box height (allocation minus chrome).
    pub content_height: i32,
    /// Horizontal chrome footprint (padding + border + margin).
    pub frame_width: i32,
    /// Vertical chrome footprint (padding + border + margin).
    pub frame_height: i32,
    /// Fit mode that will be applied to the returned content.
    pub fit: FitMode,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_fit_is_exact() {
        assert_eq!(FitMode::default(), FitMode::Exact);
    }

    #[test]
    fn labels_are_stable() {
        assert_eq!(FitMode::WrapStrict.label(), "wrap-strict");
        assert_eq!(FitMode::Overflow.to_string(), "overflow");
    }
}
