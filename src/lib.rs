//! FeedCore: Post Text Annotator
//!
//! A Rust/WASM implementation of the feed's free-text annotation engine. It
//! splits a post or comment body into typed spans so the rendering layer can
//! linkify URLs and style hashtags and mentions apart from plain prose.
//!
//! # Architecture
//!
//! ## Annotator Components
//! - `span.rs` - Span / SpanKind: the output data model
//! - `patterns.rs` - URL, hashtag and mention matchers (linear-time regex)
//! - `merge.rs` - Stable sort, greedy overlap sweep, plain-text gap filling
//! - `offset.rs` - Byte to char / UTF-16 offset conversion
//! - `config.rs` - AnnotatorConfig: offset unit, word class, enabled kinds
//! - `stats.rs` - AnnotationReport + AnnotationStats
//! - `cortex.rs` - AnnotationCortex: the engine and its WASM binding
//!
//! # Usage (Rust)
//! ```
//! use feedcore::{annotate, Span, SpanKind};
//!
//! let spans = annotate("check https://example.com/x now");
//! assert_eq!(spans, vec![
//!     Span::new(SpanKind::PlainText, "check ", 0, 6),
//!     Span::new(SpanKind::Url, "https://example.com/x", 6, 27),
//!     Span::new(SpanKind::PlainText, " now", 27, 31),
//! ]);
//! ```
//!
//! # Usage (WASM)
//! ```javascript,ignore
//! import init, { AnnotationCortex } from 'feedcore';
//!
//! await init();
//!
//! const cortex = new AnnotationCortex({ offset_unit: "utf16" });
//! for (const span of cortex.annotate(post.content)) {
//!   switch (span.kind) {
//!     case "url":     /* link, opens in a new tab */ break;
//!     case "hashtag": /* styled label */ break;
//!     case "mention": /* styled label */ break;
//!     default:        /* verbatim text */
//!   }
//! }
//! ```

pub mod annotate;

// Public exports - Annotator
pub use annotate::*;

use wasm_bindgen::prelude::*;

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator for smaller WASM bundle size.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Get version information
#[wasm_bindgen]
pub fn version() -> String {
    format!("feedcore v{}", env!("CARGO_PKG_VERSION"))
}
