//! Word-count bound enforcement.

use crate::wordcount::count_words;
use copy_core::CopyConstraints;

/// Filler phrases appended, in order, to copy that is too short.
/// `{brand}` is replaced with the brand name.
pub const FILLER_PHRASES: &[&str] = &["with {brand}", "for optimal results", "designed for you"];

/// Filler phrases with the brand name substituted.
pub fn filler_phrases(brand_name: &str) -> Vec<String> {
    FILLER_PHRASES.iter().map(|p| p.replace("{brand}", brand_name)).collect()
}

/// First `max_words` words of `text`, re-joined with single spaces.
fn truncate_words(text: &str, max_words: usize) -> String {
    text.split_whitespace()
        .take(max_words)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Enforce `constraints`' word-count bounds on `text`.
///
/// Text over `max_length` is cut to its first `max_length` words, re-joined
/// with single spaces. Text under `min_length` gets filler phrases appended
/// until the minimum is met or the fillers run out; padding never takes the
/// text past `max_length`. Anything else is returned unchanged.
pub fn normalize_length(text: &str, constraints: &CopyConstraints, brand_name: &str) -> String {
    let count = count_words(text);

    if count > constraints.max_length {
        return truncate_words(text, constraints.max_length);
    }

    if count < constraints.min_length {
        let mut padded = text.to_string();
        for filler in filler_phrases(brand_name) {
            if count_words(&padded) >= constraints.min_length {
                break;
            }
            if padded.trim().is_empty() {
                padded = filler;
            } else {
                padded.push(' ');
                padded.push_str(&filler);
            }
        }

        let padded_count = count_words(&padded);
        if padded_count < constraints.min_length {
            tracing::warn!(
                words = padded_count,
                min_length = constraints.min_length,
                "filler phrases exhausted before reaching minimum length"
            );
        }
        if padded_count > constraints.max_length {
            return truncate_words(&padded, constraints.max_length);
        }
        return padded;
    }

    text.to_string()
}
