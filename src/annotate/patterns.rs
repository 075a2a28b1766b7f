//! Pattern matchers
//!
//! Each pattern scans the whole input independently and yields candidates
//! with byte offsets. Patterns do not see each other's matches; overlap
//! resolution happens afterwards in `merge`.
//!
//! - URL: `http://` or `https://` followed by a run of non-whitespace
//! - Hashtag: `#` followed by one or more word characters
//! - Mention: `@` followed by one or more word characters
//!
//! All patterns compile to finite automata (`regex` crate), so matching is
//! linear in input length with no backtracking.

use regex::Regex;

use super::config::{AnnotatorConfig, WordClass};
use super::error::AnnotateError;
use super::span::SpanKind;

// ==================== TYPE DEFINITIONS ====================

/// Provisional match from a single pattern, in byte offsets
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Candidate {
    pub kind: SpanKind,
    pub start: usize,
    pub end: usize,
}

/// A compiled matcher for one span kind
#[derive(Clone, Debug)]
pub struct Pattern {
    kind: SpanKind,
    regex: Regex,
}

impl Pattern {
    pub fn new(kind: SpanKind, source: &str) -> Result<Self, AnnotateError> {
        let regex = Regex::new(source).map_err(|e| AnnotateError::Pattern {
            kind,
            message: e.to_string(),
        })?;
        Ok(Self { kind, regex })
    }

    pub fn url() -> Result<Self, AnnotateError> {
        Self::new(SpanKind::Url, r"https?://\S+")
    }

    pub fn hashtag(word_class: WordClass) -> Result<Self, AnnotateError> {
        Self::new(SpanKind::Hashtag, &format!("#{}+", word_class.class()))
    }

    pub fn mention(word_class: WordClass) -> Result<Self, AnnotateError> {
        Self::new(SpanKind::Mention, &format!("@{}+", word_class.class()))
    }

    pub fn kind(&self) -> SpanKind {
        self.kind
    }

    /// Every non-overlapping match of this pattern, left to right
    ///
    /// `find_iter` always advances past the previous match, so the scan
    /// terminates even for patterns that could match the empty string.
    pub fn find_all<'t>(&'t self, text: &'t str) -> impl Iterator<Item = Candidate> + 't {
        self.regex
            .find_iter(text)
            .filter(|m| !m.is_empty())
            .map(move |m| Candidate {
                kind: self.kind,
                start: m.start(),
                end: m.end(),
            })
    }
}

/// Patterns in registration order
///
/// Registration order is the tie-break when two candidates start at the same
/// offset: Url, then Hashtag, then Mention.
#[derive(Clone, Debug)]
pub struct PatternSet {
    patterns: Vec<Pattern>,
}

impl PatternSet {
    pub fn from_config(config: &AnnotatorConfig) -> Result<Self, AnnotateError> {
        let mut patterns = Vec::with_capacity(3);
        if config.enable_urls {
            patterns.push(Pattern::url()?);
        }
        if config.enable_hashtags {
            patterns.push(Pattern::hashtag(config.word_class)?);
        }
        if config.enable_mentions {
            patterns.push(Pattern::mention(config.word_class)?);
        }
        Ok(Self { patterns })
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn kinds(&self) -> Vec<SpanKind> {
        self.patterns.iter().map(Pattern::kind).collect()
    }

    /// Collect candidates from every pattern over the original text
    ///
    /// Output is grouped by pattern in registration order, each group in
    /// ascending `start`. Nothing is sorted or filtered here.
    pub fn collect(&self, text: &str) -> Vec<Candidate> {
        self.patterns
            .iter()
            .flat_map(|pattern| pattern.find_all(text))
            .collect()
    }
}

// ==================== TESTS ====================

#[cfg(test)]
mod tests {
    use super::*;

    fn default_set() -> PatternSet {
        PatternSet::from_config(&AnnotatorConfig::default()).unwrap()
    }

    fn texts<'a>(text: &'a str, candidates: &[Candidate]) -> Vec<&'a str> {
        candidates.iter().map(|c| &text[c.start..c.end]).collect()
    }

    // -------------------------------------------------------------------------
    // Requirement 1: URL pattern
    // -------------------------------------------------------------------------
    #[test]
    fn test_url_runs_to_whitespace() {
        let pattern = Pattern::url().unwrap();
        let text = "see https://example.com/a?b=c#d, and http://x.io\nnext";
        let found: Vec<_> = pattern.find_all(text).collect();

        assert_eq!(texts(text, &found), vec!["https://example.com/a?b=c#d,", "http://x.io"]);
    }

    #[test]
    fn test_url_requires_scheme_and_body() {
        let pattern = Pattern::url().unwrap();
        assert_eq!(pattern.find_all("https:// nothing").count(), 0);
        assert_eq!(pattern.find_all("ftp://host/file").count(), 0);
        assert_eq!(pattern.find_all("www.example.com").count(), 0);
    }

    #[test]
    fn test_url_stops_at_unicode_whitespace() {
        let pattern = Pattern::url().unwrap();
        let text = "http://a.io\u{3000}다음";
        let found: Vec<_> = pattern.find_all(text).collect();
        assert_eq!(texts(text, &found), vec!["http://a.io"]);
    }

    // -------------------------------------------------------------------------
    // Requirement 2: Hashtag / mention word class
    // -------------------------------------------------------------------------
    #[test]
    fn test_hashtag_ascii_and_hangul() {
        let pattern = Pattern::hashtag(WordClass::Hangul).unwrap();
        let text = "#rust_lang #태그2 #-nope #";
        let found: Vec<_> = pattern.find_all(text).collect();
        assert_eq!(texts(text, &found), vec!["#rust_lang", "#태그2"]);
    }

    #[test]
    fn test_hangul_class_excludes_other_scripts() {
        let pattern = Pattern::hashtag(WordClass::Hangul).unwrap();
        let text = "#café #日本";
        let found: Vec<_> = pattern.find_all(text).collect();
        // 'é' ends the ASCII run; Han characters are not in the class
        assert_eq!(texts(text, &found), vec!["#caf"]);
    }

    #[test]
    fn test_unicode_class() {
        let pattern = Pattern::hashtag(WordClass::Unicode).unwrap();
        let text = "#café #日本";
        let found: Vec<_> = pattern.find_all(text).collect();
        assert_eq!(texts(text, &found), vec!["#café", "#日本"]);
    }

    #[test]
    fn test_mention() {
        let pattern = Pattern::mention(WordClass::Hangul).unwrap();
        let text = "cc @jane_doe, @김철수 and mail@host";
        let found: Vec<_> = pattern.find_all(text).collect();
        assert_eq!(texts(text, &found), vec!["@jane_doe", "@김철수", "@host"]);
    }

    // -------------------------------------------------------------------------
    // Requirement 3: Registration order and independence
    // -------------------------------------------------------------------------
    #[test]
    fn test_registration_order() {
        assert_eq!(
            default_set().kinds(),
            vec![SpanKind::Url, SpanKind::Hashtag, SpanKind::Mention]
        );
    }

    #[test]
    fn test_disabled_kinds_not_registered() {
        let config = AnnotatorConfig {
            enable_urls: false,
            enable_mentions: false,
            ..AnnotatorConfig::default()
        };
        let set = PatternSet::from_config(&config).unwrap();
        assert_eq!(set.kinds(), vec![SpanKind::Hashtag]);
    }

    #[test]
    fn test_patterns_scan_independently() {
        // The hashtag inside the URL is still a candidate; merge drops it later
        let text = "http://a.com#frag";
        let candidates = default_set().collect(text);

        assert_eq!(
            candidates,
            vec![
                Candidate { kind: SpanKind::Url, start: 0, end: 17 },
                Candidate { kind: SpanKind::Hashtag, start: 12, end: 17 },
            ]
        );
    }

    #[test]
    fn test_empty_text() {
        assert!(default_set().collect("").is_empty());
    }

    #[test]
    fn test_invalid_pattern_is_error() {
        let err = Pattern::new(SpanKind::Url, "(unclosed").unwrap_err();
        assert!(matches!(err, AnnotateError::Pattern { kind: SpanKind::Url, .. }));
    }
}
