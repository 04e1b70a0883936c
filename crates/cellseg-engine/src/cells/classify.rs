use crate::{
    document::{LineRef, Span},
    intervals::CellKind,
};

/// Settings for recognising cell marker lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellOptions {
    /// Text a marker line starts with, e.g. `# %%`.
    pub marker_prefix: String,
}

impl Default for CellOptions {
    fn default() -> Self {
        Self {
            marker_prefix: "# %%".to_string(),
        }
    }
}

/// Local facts about a marker line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerLine {
    /// The marker text, without its line terminator.
    pub span: Span,
    pub kind: CellKind,
    /// Free text between the prefix and the optional `[tag]`.
    pub title: Option<String>,
}

/// Classifies individual lines as cell markers or content.
///
/// Each line is looked at on its own; ordering and partitioning happen later.
pub struct CellLineClassifier<'a> {
    options: &'a CellOptions,
}

impl<'a> CellLineClassifier<'a> {
    pub fn new(options: &'a CellOptions) -> Self {
        Self { options }
    }

    /// Returns the marker facts if `lr` is a marker line.
    ///
    /// The prefix must start the line and be followed by end of line,
    /// whitespace or a `[tag]`.
    pub fn classify(&self, lr: &LineRef) -> Option<MarkerLine> {
        let content = lr.content();
        let rest = content.strip_prefix(self.options.marker_prefix.as_str())?;
        if !(rest.is_empty() || rest.starts_with(char::is_whitespace) || rest.starts_with('[')) {
            return None;
        }

        let (title, kind) = split_tag(rest.trim());
        Some(MarkerLine {
            span: Span::new(lr.span.start, lr.span.start + content.len()),
            kind,
            title: (!title.is_empty()).then(|| title.to_string()),
        })
    }
}

/// Splits a trailing `[tag]` off the marker remainder.
fn split_tag(rest: &str) -> (&str, CellKind) {
    if let Some(body) = rest.strip_suffix(']')
        && let Some(open) = body.rfind('[')
    {
        let kind = match body[open + 1..].trim().to_ascii_lowercase().as_str() {
            "markdown" | "md" => Some(CellKind::Markdown),
            "raw" => Some(CellKind::Raw),
            _ => None,
        };
        if let Some(kind) = kind {
            return (body[..open].trim_end(), kind);
        }
    }
    (rest, CellKind::Code)
}
