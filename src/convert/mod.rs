/*! Agiga to Concrete conversion

[Converter] turns an [crate::agiga::Document] into a [crate::concrete::Communication].

Conversion happens in two stages:

1. the document text is flattened and the section/sentence hierarchy is built,
   each sentence owning its tokenization (tokens, taggings, parse, dependency parses),
2. coreference chains are linked against the now complete list of tokenizations.

Every record gets a freshly generated [crate::concrete::Uuid]: converting the same document twice
yields the same structure with different identifiers.
!*/
mod coref;
mod dependency;
mod document;
mod parse;
mod sentence;
mod tagging;
mod text;

pub use coref::link_chain;
pub use dependency::DependencyFlavor;
pub use text::{flatten_document, flatten_sentence, join_words};

use crate::concrete::MetadataFactory;
use crate::trees::{CollinsHeadFinder, HeadFinder};

/// Document converter.
///
/// Holds the [HeadFinder] used for constituency parses and the [MetadataFactory]
/// stamping every produced annotation.
#[derive(Debug, Clone)]
pub struct Converter<H = CollinsHeadFinder> {
    head_finder: H,
    metadata: MetadataFactory,
}

impl Converter<CollinsHeadFinder> {
    pub fn new(metadata: MetadataFactory) -> Self {
        Self::with_head_finder(CollinsHeadFinder::new(), metadata)
    }
}

impl<H: HeadFinder> Converter<H> {
    pub fn with_head_finder(head_finder: H, metadata: MetadataFactory) -> Self {
        Self {
            head_finder,
            metadata,
        }
    }

    pub fn metadata(&self) -> &MetadataFactory {
        &self.metadata
    }
}

impl Default for Converter<CollinsHeadFinder> {
    fn default() -> Self {
        Self::new(MetadataFactory::default())
    }
}
