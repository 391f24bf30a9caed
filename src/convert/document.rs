//! Document conversion.
use crate::agiga;
use crate::concrete::metadata::CORPUS_NAME;
use crate::concrete::{Communication, CommunicationGuid, CommunicationKind, Tokenization, Uuid};
use crate::error::Error;
use crate::trees::HeadFinder;

use super::text::flatten_document;
use super::Converter;

impl<H: HeadFinder> Converter<H> {
    /// Convert a whole document.
    ///
    /// Sentences (and their tokenizations) are all built before any coreference chain gets linked.
    /// Fails if a chain references a sentence or tokens that do not exist, in which case nothing is returned.
    pub fn convert(&self, document: &agiga::Document) -> Result<Communication, Error> {
        let text = flatten_document(document);
        let sections = self.section_segmentation(document, &text);

        let (mention_set, entity_set) = {
            let tokenizations: Vec<&Tokenization> = sections.tokenizations().collect();
            self.link_corefs(document, &tokenizations)?
        };

        Ok(Communication {
            uuid: Uuid::generate(),
            guid: CommunicationGuid {
                corpus_name: CORPUS_NAME.to_string(),
                communication_id: document.id.clone(),
            },
            kind: CommunicationKind::News,
            text,
            section_segmentations: vec![sections],
            entity_mention_sets: vec![mention_set],
            entity_sets: vec![entity_set],
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use serde_json::Value;

    use super::*;
    use crate::concrete::{validate, MetadataFactory, TextSpan};
    use crate::convert::fixtures;

    fn converter() -> Converter {
        Converter::new(MetadataFactory::new("t", 0))
    }

    /// Replace every identifier by a placeholder, keeping everything else.
    fn without_ids(comm: &Communication) -> Value {
        fn strip(value: &mut Value) {
            match value {
                Value::String(s) if uuid::Uuid::parse_str(s.as_str()).is_ok() => {
                    *s = "<id>".to_string()
                }
                Value::Array(items) => items.iter_mut().for_each(strip),
                Value::Object(fields) => fields.values_mut().for_each(strip),
                _ => (),
            }
        }
        let mut value = serde_json::to_value(comm).unwrap();
        strip(&mut value);
        value
    }

    #[test]
    fn cat_sat() {
        let comm = converter().convert(&fixtures::cat_sat()).unwrap();

        assert_eq!(comm.text, "The cat sat\n");
        assert_eq!(comm.guid.corpus_name, "Annotated Gigaword");
        assert_eq!(comm.guid.communication_id, "CAT_0001");
        assert_eq!(comm.kind, CommunicationKind::News);

        let sentence = comm.sentences().next().unwrap();
        assert_eq!(sentence.text_span, TextSpan::new(0, 11));
        let spans: Vec<TextSpan> = sentence
            .tokenization
            .tokens
            .iter()
            .map(|t| t.text_span)
            .collect();
        assert_eq!(
            spans,
            vec![TextSpan::new(0, 3), TextSpan::new(4, 7), TextSpan::new(8, 11)]
        );

        let basic = &sentence.tokenization.dependency_parses[0];
        let root = basic.dependencies.iter().find(|d| d.dep == 1).unwrap();
        assert_eq!(root.gov, None);

        assert!(comm.mentions().next().is_none());
        assert!(comm.entities().next().is_none());
        assert_eq!(comm.entity_mention_sets.len(), 1);
        assert_eq!(comm.entity_sets.len(), 1);
        assert!(validate(&comm).is_empty());
    }

    #[test]
    fn coref_references_resolve() {
        let comm = converter().convert(&fixtures::john_smith()).unwrap();

        let tokenizations: HashSet<&Uuid> = comm.tokenizations().map(|t| &t.uuid).collect();
        let mentions: Vec<_> = comm.mentions().collect();
        assert_eq!(mentions.len(), 2);
        assert!(mentions
            .iter()
            .all(|m| tokenizations.contains(&m.tokens.tokenization_id)));

        let entity = comm.entities().next().unwrap();
        let ids: Vec<&Uuid> = mentions.iter().map(|m| &m.uuid).collect();
        assert_eq!(entity.mention_ids.iter().collect::<Vec<_>>(), ids);
        assert_eq!(mentions[0].text, "John Smith");
        assert_eq!(mentions[1].text, "the man");

        let second = comm.tokenizations().nth(1).unwrap();
        assert_eq!(mentions[1].tokens.tokenization_id, second.uuid);
        assert!(validate(&comm).is_empty());
    }

    #[test]
    fn identifiers_are_unique() {
        let comm = converter().convert(&fixtures::john_smith()).unwrap();
        let mut ids = Vec::new();
        ids.push(&comm.uuid);
        for segmentation in &comm.section_segmentations {
            ids.push(&segmentation.uuid);
            for section in &segmentation.sections {
                ids.push(&section.uuid);
            }
        }
        for sentence in comm.sentences() {
            ids.push(&sentence.uuid);
            let t = &sentence.tokenization;
            ids.push(&t.uuid);
            ids.extend(t.parses.iter().map(|p| &p.uuid));
            ids.extend(t.dependency_parses.iter().map(|p| &p.uuid));
            ids.extend(t.lemmas.iter().chain(&t.pos_tags).chain(&t.ner_tags).map(|x| &x.uuid));
        }
        ids.extend(comm.mentions().map(|m| &m.uuid));
        ids.extend(comm.entities().map(|e| &e.uuid));

        let unique: HashSet<&&Uuid> = ids.iter().collect();
        assert_eq!(unique.len(), ids.len());
    }

    #[test]
    fn idempotent() {
        let doc = fixtures::john_smith();
        let conv = converter();
        let first = conv.convert(&doc).unwrap();
        let second = conv.convert(&doc).unwrap();

        assert_ne!(first.uuid, second.uuid);
        assert_eq!(without_ids(&first), without_ids(&second));
    }

    #[test]
    fn bad_mention_fails_document() {
        let mut doc = fixtures::john_smith();
        doc.corefs[0].mentions[1].sentence = 2;
        let err = converter().convert(&doc);
        assert!(matches!(err, Err(Error::MissingTokenization { sentence: 2, .. })));
    }

    #[test]
    fn accepted_mentions_validate() {
        let mut doc = fixtures::john_smith();
        doc.corefs[0].mentions[1].start = 3;
        let comm = converter().convert(&doc).unwrap();
        assert!(validate(&comm).is_empty());

        doc.corefs[0].mentions[1].start = 4;
        assert!(matches!(
            converter().convert(&doc),
            Err(Error::MentionOutOfBounds { start: 4, end: 4, .. })
        ));
    }

    #[test]
    fn parse_mismatch_is_kept() {
        let mut doc = fixtures::cat_sat();
        // one leaf too many
        doc.sentences[0].parse = "(ROOT (S (NP (DT The) (NN cat)) (VP (VBD sat) (RB down))))"
            .parse()
            .unwrap();
        let comm = converter().convert(&doc).unwrap();

        let root = comm.tokenizations().next().unwrap().parses[0]
            .root()
            .unwrap()
            .clone();
        assert_eq!(root.token_sequence.token_indices, vec![0, 1, 2, 3]);

        let found = validate(&comm);
        assert_eq!(found.len(), 1);
        assert!(matches!(
            found[0],
            crate::concrete::Inconsistency::ParseLength {
                leaves: 4,
                tokens: 3,
                ..
            }
        ));
    }
}
