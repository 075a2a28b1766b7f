//! AnnotatorConfig - engine configuration
//!
//! Every field has a serde default, so `{}` (or `null` from JS) yields the
//! default engine: char offsets, ASCII + Hangul word class, all kinds enabled.

use serde::{Deserialize, Serialize};

use super::error::AnnotateError;

// ==================== TYPE DEFINITIONS ====================

/// Unit used for `Span::start` / `Span::end`
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OffsetUnit {
    /// Unicode scalar values (`str::chars`)
    #[default]
    Char,
    /// UTF-16 code units, matching JS string indexing
    Utf16,
    /// UTF-8 bytes, valid for slicing the Rust `&str`
    Byte,
}

/// Characters allowed after `#` / `@`
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum WordClass {
    /// ASCII letters, digits, underscore and Hangul syllables (U+AC00..=U+D7A3)
    #[default]
    Hangul,
    /// Any Unicode word character (letters, marks, digits, connector punctuation)
    Unicode,
}

impl WordClass {
    /// Regex character class for one word character
    pub(crate) fn class(&self) -> &'static str {
        match self {
            WordClass::Hangul => r"[A-Za-z0-9_\x{AC00}-\x{D7A3}]",
            WordClass::Unicode => r"\w",
        }
    }
}

/// Configuration for the AnnotationCortex
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AnnotatorConfig {
    #[serde(default)]
    pub offset_unit: OffsetUnit,
    #[serde(default)]
    pub word_class: WordClass,
    #[serde(default = "default_true")]
    pub enable_urls: bool,
    #[serde(default = "default_true")]
    pub enable_hashtags: bool,
    #[serde(default = "default_true")]
    pub enable_mentions: bool,
}

fn default_true() -> bool { true }

impl Default for AnnotatorConfig {
    fn default() -> Self {
        Self {
            offset_unit: OffsetUnit::default(),
            word_class: WordClass::default(),
            enable_urls: true,
            enable_hashtags: true,
            enable_mentions: true,
        }
    }
}

impl AnnotatorConfig {
    /// Parse a JSON configuration object
    pub fn from_json(json: &str) -> Result<Self, AnnotateError> {
        Ok(serde_json::from_str(json)?)
    }
}

// ==================== TESTS ====================
