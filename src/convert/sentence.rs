//! Sentences, sentence segmentation and sections.
use crate::agiga;
use crate::concrete::{
    Section, SectionKind, SectionSegmentation, Sentence, SentenceSegmentation, TextSpan, Uuid,
};
use crate::trees::HeadFinder;

use super::text::{char_len, flatten_sentence};
use super::Converter;

const SPLITTER_REFERENCE: &str = " Splitta http://www.aclweb.org/anthology-new/N/N09/N09-2061.pdf";

impl<H: HeadFinder> Converter<H> {
    /// Convert a sentence starting at character `offset` of the document text.
    pub fn sentence(&self, sentence: &agiga::Sentence, offset: usize) -> Sentence {
        let len = char_len(&flatten_sentence(sentence));
        Sentence {
            uuid: Uuid::generate(),
            text_span: TextSpan::new(offset, offset + len),
            tokenization: self.tokenization(sentence),
        }
    }

    /// Convert every sentence of `document`, in order.
    pub fn sentence_segmentation(&self, document: &agiga::Document) -> SentenceSegmentation {
        let mut offset = 0;
        let mut sentences = Vec::with_capacity(document.sentences.len());
        for sentence in &document.sentences {
            let converted = self.sentence(sentence, offset);
            // skip the newline ending the sentence
            offset = converted.text_span.end + 1;
            sentences.push(converted);
        }

        SentenceSegmentation {
            uuid: Uuid::generate(),
            metadata: self.metadata.with_suffix(SPLITTER_REFERENCE),
            sentences,
        }
    }

    /// Build the segmentation of `document` into a single passage spanning the whole `text`.
    pub fn section_segmentation(
        &self,
        document: &agiga::Document,
        text: &str,
    ) -> SectionSegmentation {
        let section = Section {
            uuid: Uuid::generate(),
            kind: SectionKind::Passage,
            text_span: TextSpan::new(0, char_len(text)),
            sentence_segmentations: vec![self.sentence_segmentation(document)],
        };

        SectionSegmentation {
            uuid: Uuid::generate(),
            metadata: self.metadata.metadata(),
            sections: vec![section],
        }
    }
}
