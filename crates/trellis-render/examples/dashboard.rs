//! A small dashboard composed with trellis.
//!
//! Run with: cargo run -p trellis-render --example dashboard

use trellis_core::{Axis, Extent, FitMode, FrameInfo, LayoutError};
use trellis_layout::{Pane, Split, arrange};
use trellis_render::{CellMetrics, Chrome, Renderer};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let spec = Split::new(Axis::Vertical, Extent::fill())
        .with_slot(Pane::new(Extent::fixed(2), FitMode::Clip, "header"))
        .with_slot(
            Split::new(Axis::Horizontal, Extent::fill())
                .with_slot(Pane::new(
                    Extent::flex_bounded(1, 12, 18),
                    FitMode::WrapClip,
                    "sidebar",
                ))
                .with_slot(Pane::new(Extent::flex(3), FitMode::WrapClip, "main")),
        )
        .with_slot(Pane::new(Extent::fixed(1), FitMode::Clip, "status"));

    let layout = arrange(&spec, trellis_core::Size::new(60, 14))?;

    let style = |id: &&str| match *id {
        "sidebar" | "main" => Some(Chrome::frame(2, 1)),
        _ => None,
    };
    let content = |id: &&str, info: &FrameInfo| -> Result<String, LayoutError> {
        match *id {
            "header" => Ok(format!(
                "trellis dashboard ({}x{})",
                info.width, info.height
            )),
            "sidebar" => Ok("overview\nalerts\nhosts\nsettings".to_string()),
            "main" => Ok(
                "All systems nominal. This panel wraps its text to the \
                 content box and clips whatever does not fit vertically."
                    .to_string(),
            ),
            "status" => Ok("ready".to_string()),
            other => Err(LayoutError::UnknownId {
                id: other.to_string(),
            }),
        }
    };

    let output = Renderer::new(&CellMetrics)
        .with_style(&style)
        .with_content(&content)
        .render(&layout)?;
    println!("{output}");
    Ok(())
}
