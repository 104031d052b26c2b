//! Shared pieces of the chart transcripts.

use std::fmt::Write;

/// Rendered in place of an absent value so every transcript keeps its shape.
pub const PLACEHOLDER: &str = "无";

/// A line buffer for building transcripts.
#[derive(Debug, Default)]
pub(crate) struct Transcript {
    out: String,
}

impl Transcript {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Append `label：value` as one line.
    pub(crate) fn field(&mut self, label: &str, value: impl std::fmt::Display) {
        let _ = writeln!(self.out, "{label}：{value}");
    }

    /// Append a raw line.
    pub(crate) fn line(&mut self, text: impl std::fmt::Display) {
        let _ = writeln!(self.out, "{text}");
    }

    /// Append an empty line separating blocks.
    pub(crate) fn blank(&mut self) {
        self.out.push('\n');
    }

    pub(crate) fn finish(self) -> String {
        self.out
    }
}

/// `是` or `否`.
pub(crate) fn yes_no(flag: bool) -> &'static str {
    if flag { "是" } else { "否" }
}

/// The value's display, or [`PLACEHOLDER`] when absent.
pub(crate) fn or_placeholder<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map_or_else(|| PLACEHOLDER.to_string(), |v| v.to_string())
}
