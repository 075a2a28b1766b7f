//! Span types produced by the annotator
//!
//! A `Span` is a typed, positioned substring of the annotated text. The spans
//! returned for one input are contiguous, never overlap, and concatenate back
//! to the input exactly.

use serde::{Deserialize, Serialize};

// ==================== TYPE DEFINITIONS ====================

/// Kind of span detected in the text
///
/// Serialized as the lowercase tag the rendering layer switches on
/// (`"text"`, `"url"`, `"hashtag"`, `"mention"`).
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SpanKind {
    #[serde(rename = "text")]
    PlainText,
    Url,
    Hashtag,
    Mention,
}

impl SpanKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpanKind::PlainText => "text",
            SpanKind::Url => "url",
            SpanKind::Hashtag => "hashtag",
            SpanKind::Mention => "mention",
        }
    }

    /// Leading sigil of a token kind (`#` for hashtags, `@` for mentions)
    pub fn sigil(&self) -> Option<char> {
        match self {
            SpanKind::Hashtag => Some('#'),
            SpanKind::Mention => Some('@'),
            SpanKind::PlainText | SpanKind::Url => None,
        }
    }
}

impl std::fmt::Display for SpanKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A typed, positioned piece of the original text
///
/// `start`/`end` are half-open offsets into the original string, measured in
/// the engine's configured `OffsetUnit` (chars by default).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Span {
    pub kind: SpanKind,
    pub text: String,
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(kind: SpanKind, text: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            start,
            end,
        }
    }

    /// Span length in the configured offset unit
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn is_plain(&self) -> bool {
        self.kind == SpanKind::PlainText
    }

    /// Token text without its sigil: `#golang` -> `golang`, `@jane` -> `jane`
    ///
    /// Returns `None` for plain text and URLs.
    pub fn label(&self) -> Option<&str> {
        let sigil = self.kind.sigil()?;
        self.text.strip_prefix(sigil)
    }
}

/// Concatenate span texts in order
///
/// For any output of the annotator this reproduces the annotated input.
pub fn reconstruct(spans: &[Span]) -> String {
    let capacity = spans.iter().map(|s| s.text.len()).sum();
    spans.iter().fold(String::with_capacity(capacity), |mut out, span| {
        out.push_str(&span.text);
        out
    })
}

// ==================== TESTS ====================
