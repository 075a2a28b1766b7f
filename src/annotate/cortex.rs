//! AnnotationCortex - post text annotation engine
//!
//! Splits free text into a contiguous, lossless sequence of typed spans
//! (plain text, URL, hashtag, mention) for differentiated rendering.
//!
//! # Pipeline
//! 1. Every pattern scans the original text independently -> candidates
//! 2. Candidates are stable-sorted by start and swept greedily
//! 3. Gaps become plain-text spans; byte offsets become the configured unit
//!
//! The engine holds only compiled patterns and config. It is `Send + Sync`
//! and can be shared across threads without locking.
//!
//! # Usage (JavaScript)
//! ```javascript,ignore
//! import init, { AnnotationCortex, annotateText } from 'feedcore';
//!
//! await init();
//! annotateText("love #golang and @jane");
//! // [{ kind: "text", text: "love ", start: 0, end: 5 }, { kind: "hashtag", ... }, ...]
//!
//! const cortex = new AnnotationCortex({ offset_unit: "utf16" });
//! const report = cortex.scan(post.content);
//! ```

use std::sync::OnceLock;

use wasm_bindgen::prelude::*;

use super::config::AnnotatorConfig;
use super::error::AnnotateError;
use super::merge::{fill_gaps, resolve_overlaps};
use super::offset::{unit_len, OffsetMapper};
use super::patterns::{Candidate, PatternSet};
use super::span::Span;
use super::stats::{AnnotationReport, AnnotationStats};

// ==================== MAIN IMPLEMENTATION ====================

/// Post text annotator
#[wasm_bindgen]
#[derive(Clone, Debug)]
pub struct AnnotationCortex {
    patterns: PatternSet,
    config: AnnotatorConfig,
}

impl Default for AnnotationCortex {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl AnnotationCortex {
    /// Create a new AnnotationCortex with optional configuration
    ///
    /// # Arguments
    /// * `config` - Optional config object; `null`/`undefined` uses defaults
    #[wasm_bindgen(constructor)]
    pub fn js_new(config: JsValue) -> Result<AnnotationCortex, JsValue> {
        let config: AnnotatorConfig = if config.is_null() || config.is_undefined() {
            AnnotatorConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)
                .map_err(|e| JsValue::from_str(&format!("Invalid config: {}", e)))?
        };

        Self::with_config(config).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Annotate text (JS binding)
    ///
    /// Non-string or absent input is treated as empty text and yields `[]`.
    #[wasm_bindgen(js_name = annotate)]
    pub fn js_annotate(&self, text: JsValue) -> JsValue {
        let spans = self.annotate(&js_text(&text));
        to_js(&spans, "annotate")
    }

    /// Annotate and return spans with statistics (JS binding)
    #[wasm_bindgen(js_name = scan)]
    pub fn js_scan(&self, text: JsValue) -> JsValue {
        let report = self.scan(&js_text(&text));
        to_js(&report, "scan")
    }

    /// Distinct hashtag labels, without `#` (JS binding)
    #[wasm_bindgen(js_name = hashtags)]
    pub fn js_hashtags(&self, text: JsValue) -> js_sys::Array {
        let report = self.scan(&js_text(&text));
        report.hashtags().into_iter().map(JsValue::from_str).collect()
    }

    /// Distinct mention labels, without `@` (JS binding)
    #[wasm_bindgen(js_name = mentions)]
    pub fn js_mentions(&self, text: JsValue) -> js_sys::Array {
        let report = self.scan(&js_text(&text));
        report.mentions().into_iter().map(JsValue::from_str).collect()
    }
}

impl AnnotationCortex {
    /// Create an annotator with the default configuration
    pub fn new() -> Self {
        Self::with_config(AnnotatorConfig::default())
            .expect("Default annotation patterns should compile")
    }

    /// Create an annotator with a custom configuration
    pub fn with_config(config: AnnotatorConfig) -> Result<Self, AnnotateError> {
        let patterns = PatternSet::from_config(&config)?;
        Ok(Self { patterns, config })
    }

    pub fn config(&self) -> &AnnotatorConfig {
        &self.config
    }

    /// Split text into contiguous typed spans
    ///
    /// Empty text yields an empty vector. For any other input the spans cover
    /// `0..len(text)` without gaps or overlap, and their texts concatenate
    /// back to `text`.
    pub fn annotate(&self, text: &str) -> Vec<Span> {
        let (segments, _) = self.segment(text);
        self.to_spans(text, segments)
    }

    /// Annotate and collect statistics
    pub fn scan(&self, text: &str) -> AnnotationReport {
        let start = instant::Instant::now();

        let (segments, (candidates, dropped)) = self.segment(text);
        let spans = self.to_spans(text, segments);

        let mut stats = AnnotationStats {
            text_length: unit_len(text, self.config.offset_unit),
            candidates,
            dropped,
            ..AnnotationStats::default()
        };
        stats.count_kinds(&spans);
        stats.total_us = start.elapsed().as_micros() as u64;

        AnnotationReport { spans, stats }
    }

    /// Byte-offset segments plus (candidate count, dropped count)
    fn segment(&self, text: &str) -> (Vec<Candidate>, (usize, usize)) {
        if text.is_empty() {
            return (Vec::new(), (0, 0));
        }

        let candidates = self.patterns.collect(text);
        let total = candidates.len();
        let resolved = resolve_overlaps(candidates);
        let dropped = resolved.dropped;

        (fill_gaps(text.len(), resolved.kept), (total, dropped))
    }

    fn to_spans(&self, text: &str, segments: Vec<Candidate>) -> Vec<Span> {
        let mut mapper = OffsetMapper::new(text, self.config.offset_unit);
        segments
            .into_iter()
            .map(|seg| {
                let start = mapper.map(seg.start);
                let end = mapper.map(seg.end);
                Span::new(seg.kind, &text[seg.start..seg.end], start, end)
            })
            .collect()
    }
}

// ==================== DEFAULT ENGINE ====================

static DEFAULT_CORTEX: OnceLock<AnnotationCortex> = OnceLock::new();

/// Shared default annotator, built on first use
pub fn default_cortex() -> &'static AnnotationCortex {
    DEFAULT_CORTEX.get_or_init(AnnotationCortex::new)
}

/// Annotate text with the default configuration (char offsets)
///
/// ```
/// use feedcore::{annotate, SpanKind};
///
/// let spans = annotate("love #golang and @jane");
/// assert_eq!(spans[1].kind, SpanKind::Hashtag);
/// assert_eq!(spans[1].text, "#golang");
/// assert_eq!((spans[1].start, spans[1].end), (5, 12));
/// ```
pub fn annotate(text: &str) -> Vec<Span> {
    default_cortex().annotate(text)
}

/// Annotate text with the default configuration (JS binding)
#[wasm_bindgen(js_name = annotateText)]
pub fn js_annotate_text(text: JsValue) -> JsValue {
    default_cortex().js_annotate(text)
}

// ==================== JS HELPERS ====================

fn js_text(value: &JsValue) -> String {
    value.as_string().unwrap_or_default()
}

fn to_js<T: serde::Serialize>(value: &T, op: &str) -> JsValue {
    match serde_wasm_bindgen::to_value(value) {
        Ok(v) => v,
        Err(e) => {
            web_sys::console::error_1(
                &format!("[AnnotationCortex] {} serialization failed: {:?}", op, e).into(),
            );
            JsValue::NULL
        }
    }
}

// ==================== TESTS ====================
