//! Overlap resolution and gap filling
//!
//! 1. Stable sort of all candidates by `start` (ties keep registration order)
//! 2. Greedy left-to-right sweep: keep a candidate only if it starts at or
//!    after the end of the last kept one. Later overlapping candidates are
//!    dropped whole, never truncated or merged.
//! 3. Fill the gaps between kept candidates with plain-text segments,
//!    skipping zero-length gaps.
//!
//! Everything here works in byte offsets over the original text.

use super::patterns::Candidate;
use super::span::SpanKind;

/// Result of the greedy sweep
#[derive(Debug, Default)]
pub struct Resolved {
    pub kept: Vec<Candidate>,
    pub dropped: usize,
}

/// Sort candidates and keep the leftmost, earliest-registered non-overlapping set
pub fn resolve_overlaps(mut candidates: Vec<Candidate>) -> Resolved {
    // sort_by_key is stable: equal starts keep the order patterns were registered
    candidates.sort_by_key(|c| c.start);

    let mut resolved = Resolved {
        kept: Vec::with_capacity(candidates.len()),
        dropped: 0,
    };

    for candidate in candidates {
        let free = resolved.kept.last().map_or(true, |last| candidate.start >= last.end);
        if free {
            resolved.kept.push(candidate);
        } else {
            resolved.dropped += 1;
        }
    }

    resolved
}

/// Interleave kept candidates with plain-text segments covering `0..text_len`
pub fn fill_gaps(text_len: usize, kept: Vec<Candidate>) -> Vec<Candidate> {
    let mut segments = Vec::with_capacity(kept.len() * 2 + 1);
    let mut cursor = 0;

    for candidate in kept {
        if candidate.start > cursor {
            segments.push(Candidate {
                kind: SpanKind::PlainText,
                start: cursor,
                end: candidate.start,
            });
        }
        cursor = candidate.end;
        segments.push(candidate);
    }

    if cursor < text_len {
        segments.push(Candidate {
            kind: SpanKind::PlainText,
            start: cursor,
            end: text_len,
        });
    }

    segments
}

// ==================== TESTS ====================
