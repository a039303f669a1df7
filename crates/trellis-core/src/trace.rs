#![forbid(unsafe_code)]

//! Optional path-addressed tracing.
//!
//! The arranger and renderer accept a [`TraceSink`] observer and report
//! allocation, per-frame render, and error events, each addressed by the
//! slash-delimited slot path of the node that produced it (`/`, `/0`,
//! `/1/2`, ...). Tracing is one-way and optional: every engine invariant
//! holds identically whether or not a sink is attached.

use std::fmt;
use std::io::Write;
use std::sync::Mutex;

/// The kind of a trace event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraceEvent {
    /// A stack distributed its capacity across slots.
    StackAlloc,
    /// A frame was resolved for rendering.
    FrameRender,
    /// A pass failed; the message carries the stage and error.
    Error,
}

impl TraceEvent {
    /// Short label for display.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            TraceEvent::StackAlloc => "stack.alloc",
            TraceEvent::FrameRender => "frame.render",
            TraceEvent::Error => "render.error",
        }
    }
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Receiver for trace events.
///
/// Implemented for any `Fn(TraceEvent, &str, &str)` closure, so tests and
/// callers can collect events without a dedicated type.
pub trait TraceSink {
    /// Observe one event at the given slot path.
    fn event(&self, event: TraceEvent, path: &str, message: &str);
}

impl<F> TraceSink for F
where
    F: Fn(TraceEvent, &str, &str),
{
    fn event(&self, event: TraceEvent, path: &str, message: &str) {
        self(event, path, message);
    }
}

/// A trace sink that writes tab-separated lines (`event\tpath\tmessage`) to
/// any writer. Safe for concurrent use; write failures are ignored.
pub struct WriterSink<W: Write> {
    inner: Mutex<W>,
}

impl<W: Write> WriterSink<W> {
    /// Create a sink over the given writer.
    pub fn new(writer: W) -> Self {
        Self {
            inner: Mutex::new(writer),
        }
    }

    /// Unwrap the inner writer.
    pub fn into_inner(self) -> W {
        match self.inner.into_inner() {
            Ok(writer) => writer,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl<W: Write> TraceSink for WriterSink<W> {
    fn event(&self, event: TraceEvent, path: &str, message: &str) {
        if let Ok(mut writer) = self.inner.lock() {
            let _ = writeln!(writer, "{event}\t{path}\t{message}");
        }
    }
}

/// Extend a slash-delimited slot path with a child index.
#[must_use]
pub fn append_path(path: &str, index: usize) -> String {
    if path == "/" {
        format!("/{index}")
    } else {
        format!("{path}/{index}")
    }
}
