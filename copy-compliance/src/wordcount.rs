//! Word counting for text and tabular copy.

use copy_core::{CopyContent, CopyTable};

/// Whitespace token count.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Approximate word count of a table: spaces in its rendering, plus one.
///
/// This is not a true word count. It is kept so that word counts stay
/// comparable with copy produced by earlier tooling.
pub fn table_word_count(table: &CopyTable) -> usize {
    table.render().chars().filter(|c| *c == ' ').count() + 1
}

/// Word count for either content shape.
pub fn content_word_count(content: &CopyContent) -> usize {
    match content {
        CopyContent::Text(text) => count_words(text),
        CopyContent::Table(table) => table_word_count(table),
    }
}
