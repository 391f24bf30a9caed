/*! Annotated Gigaword documents

Input side of the conversion: documents with tokens (word, lemma, POS, NER), a constituency parse,
three flavors of typed dependencies per sentence, and coreference chains.
!*/
mod document;

pub use document::{Coref, Document, Mention, Sentence, Token, TypedDependency};
