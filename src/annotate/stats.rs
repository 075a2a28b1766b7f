//! Scan report: spans plus per-call statistics

use serde::{Deserialize, Serialize};

use super::span::{Span, SpanKind};

/// Statistics for one annotation call
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AnnotationStats {
    pub total_us: u64,
    /// Input length in the configured offset unit
    pub text_length: usize,
    /// Matches produced by all patterns before overlap resolution
    pub candidates: usize,
    /// Candidates discarded because they began inside a kept span
    pub dropped: usize,
    pub plain_text: usize,
    pub urls: usize,
    pub hashtags: usize,
    pub mentions: usize,
}

impl AnnotationStats {
    pub(crate) fn count_kinds(&mut self, spans: &[Span]) {
        for span in spans {
            match span.kind {
                SpanKind::PlainText => self.plain_text += 1,
                SpanKind::Url => self.urls += 1,
                SpanKind::Hashtag => self.hashtags += 1,
                SpanKind::Mention => self.mentions += 1,
            }
        }
    }

    /// Number of non-plain spans
    pub fn tokens(&self) -> usize {
        self.urls + self.hashtags + self.mentions
    }
}

/// Spans with their statistics
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AnnotationReport {
    pub spans: Vec<Span>,
    pub stats: AnnotationStats,
}

impl AnnotationReport {
    /// Distinct hashtag labels (no `#`) in order of first appearance
    pub fn hashtags(&self) -> Vec<&str> {
        distinct(self.spans.iter().filter(|s| s.kind == SpanKind::Hashtag).filter_map(Span::label))
    }

    /// Distinct mention labels (no `@`) in order of first appearance
    pub fn mentions(&self) -> Vec<&str> {
        distinct(self.spans.iter().filter(|s| s.kind == SpanKind::Mention).filter_map(Span::label))
    }

    /// Distinct URLs, verbatim, in order of first appearance
    pub fn urls(&self) -> Vec<&str> {
        distinct(self.spans.iter().filter(|s| s.kind == SpanKind::Url).map(|s| s.text.as_str()))
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = std::collections::HashSet::new();
    values.filter(|v| seen.insert(*v)).collect()
}
