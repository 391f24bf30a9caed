/*! Text flattening

The flattened text is the reference for every character span:
a sentence is its words joined by single spaces, and a document is its sentences each followed by a newline.

Lengths are counted in `char`s.
!*/
use itertools::Itertools;

use crate::agiga::{Document, Sentence};

/// Join words with single spaces, trimmed.
pub fn join_words<'a>(mut words: impl Iterator<Item = &'a str>) -> String {
    words.join(" ").trim().to_string()
}

pub fn flatten_sentence(sentence: &Sentence) -> String {
    join_words(sentence.words())
}

/// Flatten the whole document, one sentence per line.
pub fn flatten_document(document: &Document) -> String {
    let mut text = String::new();
    for sentence in &document.sentences {
        text.push_str(&flatten_sentence(sentence));
        text.push('\n');
    }
    text
}

/// Length of `text`, in `char`s.
pub(crate) fn char_len(text: &str) -> usize {
    text.chars().count()
}
