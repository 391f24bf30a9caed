/*! Coreference chains

Each chain becomes an [Entity] listing the identifiers of its [EntityMention]s, in chain order.
Mentions reference the tokenization of their sentence, which must already be built:
linking only takes the tokenizations produced by the sentence stage.
!*/
use itertools::Itertools;

use crate::agiga;
use crate::concrete::{
    Entity, EntityMention, EntityMentionSet, EntitySet, EntityType, PhraseType, TokenRefSequence,
    Tokenization, Uuid,
};
use crate::error::Error;
use crate::trees::HeadFinder;

use super::Converter;

const COREF_REFERENCE: &str = " http://nlp.stanford.edu/pubs/conllst2011-coref.pdf";

/// Convert one mention against the tokenizations of the document.
fn mention(
    mention: &agiga::Mention,
    sentences: &[agiga::Sentence],
    tokenizations: &[&Tokenization],
) -> Result<EntityMention, Error> {
    let (sentence, tokenization) = match (
        sentences.get(mention.sentence),
        tokenizations.get(mention.sentence),
    ) {
        (Some(s), Some(t)) => (s, t),
        _ => {
            return Err(Error::MissingTokenization {
                sentence: mention.sentence,
                available: tokenizations.len(),
            })
        }
    };

    let words = match sentence.tokens.get(mention.start..mention.end) {
        Some(words) if !words.is_empty() => words,
        _ => {
            return Err(Error::MentionOutOfBounds {
                sentence: mention.sentence,
                start: mention.start,
                end: mention.end,
                len: sentence.tokens.len(),
            })
        }
    };

    Ok(EntityMention {
        uuid: Uuid::generate(),
        tokens: TokenRefSequence::from_range(
            mention.start,
            mention.end,
            mention.head,
            &tokenization.uuid,
        ),
        entity_type: EntityType::Unknown,
        phrase_type: PhraseType::Name,
        confidence: 1f32,
        text: words.iter().map(|t| t.word.as_str()).join(" "),
    })
}

/// Link a chain into an [Entity], pushing its mentions into `mentions`.
///
/// `tokenizations` holds the tokenization of each sentence, in sentence order.
/// On error, `mentions` is left untouched.
pub fn link_chain(
    chain: &agiga::Coref,
    sentences: &[agiga::Sentence],
    tokenizations: &[&Tokenization],
    mentions: &mut Vec<EntityMention>,
) -> Result<Entity, Error> {
    let converted = chain
        .mentions
        .iter()
        .map(|m| mention(m, sentences, tokenizations))
        .collect::<Result<Vec<_>, Error>>()?;

    let entity = Entity {
        uuid: Uuid::generate(),
        mention_ids: converted.iter().map(|m| m.uuid.clone()).collect(),
    };
    mentions.extend(converted);
    Ok(entity)
}

impl<H: HeadFinder> Converter<H> {
    /// Link every coreference chain of `document`.
    pub fn link_corefs(
        &self,
        document: &agiga::Document,
        tokenizations: &[&Tokenization],
    ) -> Result<(EntityMentionSet, EntitySet), Error> {
        let mut mentions = Vec::new();
        let entities = document
            .corefs
            .iter()
            .map(|chain| link_chain(chain, &document.sentences, tokenizations, &mut mentions))
            .collect::<Result<Vec<_>, Error>>()?;

        let mention_set = EntityMentionSet {
            uuid: Uuid::generate(),
            metadata: self.metadata.with_suffix(COREF_REFERENCE),
            mentions,
        };
        let entity_set = EntitySet {
            uuid: Uuid::generate(),
            metadata: self.metadata.with_suffix(COREF_REFERENCE),
            entities,
        };
        Ok((mention_set, entity_set))
    }
}
