//! Formatting configuration for failure messages.

use serde::{Deserialize, Serialize};

/// Explicit formatting settings passed into every verification.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    /// Separator between the primary sentence and each listed member.
    pub line_separator: String,
    /// Cap on listed members; the rest are summarized in one line.
    pub max_listed_members: Option<usize>,
}

impl FormatConfig {
    /// Windows-style line endings.
    pub fn crlf() -> Self {
        Self {
            line_separator: "\r\n".into(),
            ..Self::default()
        }
    }

    pub fn with_max_listed_members(mut self, max: usize) -> Self {
        self.max_listed_members = Some(max);
        self
    }

    /// Render listing lines, each preceded by the line separator.
    pub fn render_listing(&self, lines: &[String]) -> String {
        let shown = match self.max_listed_members {
            Some(max) if lines.len() > max => max,
            _ => lines.len(),
        };
        let mut out = String::new();
        for line in &lines[..shown] {
            out.push_str(&self.line_separator);
            out.push_str(line);
        }
        if shown < lines.len() {
            out.push_str(&self.line_separator);
            out.push_str(&format!("... and {} more", lines.len() - shown));
        }
        out
    }
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            line_separator: "\n".into(),
            max_listed_members: None,
        }
    }
}
