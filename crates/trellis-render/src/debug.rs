#![forbid(unsafe_code)]

//! Stock debug content provider.

use std::fmt;

use trellis_core::error::LayoutError;
use trellis_core::fit::FrameInfo;

use crate::metrics::truncate_columns;
use crate::render::ContentProvider;

/// Content provider that renders each frame's geometry into its content
/// box, for inspecting arrangements before real content exists.
///
/// Output adapts to the box height: one line gets a compact summary, two
/// lines get the identifier plus the summary, taller boxes get one field
/// per line. Every line is truncated to the content width.
#[derive(Debug, Clone, Copy, Default)]
pub struct DebugProvider;

impl<I: fmt::Display> ContentProvider<I> for DebugProvider {
    fn content(&self, id: &I, info: &FrameInfo) -> Result<String, LayoutError> {
        if info.content_width <= 0 || info.content_height <= 0 {
            return Ok(String::new());
        }
        let width = info.content_width as usize;

        let compact = format!(
            "id:{id}|a:{}x{}|f:{}x{}|c:{}x{}|ft:{}",
            info.width,
            info.height,
            info.frame_width,
            info.frame_height,
            info.content_width,
            info.content_height,
            info.fit,
        );
        if info.content_height == 1 {
            return Ok(truncate_columns(&compact, width));
        }
        if info.content_height == 2 {
            return Ok(format!(
                "{}\n{}",
                truncate_columns(&format!("id:{id}"), width),
                truncate_columns(&compact, width),
            ));
        }

        let fields = [
            format!("id:{id}"),
            format!("alloc:{}x{}", info.width, info.height),
            format!("frame:{}x{}", info.frame_width, info.frame_height),
            format!("content:{}x{}", info.content_width, info.content_height),
            format!("fit:{}", info.fit),
        ];
        let keep = (info.content_height as usize).min(fields.len());
        let lines: Vec<String> = fields[..keep]
            .iter()
            .map(|line| truncate_columns(line, width))
            .collect();
        Ok(lines.join("\n"))
    }
}
