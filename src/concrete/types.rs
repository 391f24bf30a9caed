/*! Concrete records

Field order matters: it must follow [super::SCHEMA], since records are (de)serialized through Avro.
!*/
use serde::{Deserialize, Serialize};

use super::id::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationMetadata {
    pub tool: String,
    pub timestamp: i64,
    pub confidence: f32,
}

/// Character span `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextSpan {
    pub start: usize,
    pub end: usize,
}

impl TextSpan {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Contiguous token range of a given tokenization, with an optional anchor (head) token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRefSequence {
    pub token_indices: Vec<usize>,
    pub anchor_token_index: Option<usize>,
    pub tokenization_id: Uuid,
}

impl TokenRefSequence {
    /// Reference tokens `[start, end)` of `tokenization_id`.
    ///
    /// `anchor` is kept only if it falls within the range.
    pub fn from_range(
        start: usize,
        end: usize,
        anchor: Option<usize>,
        tokenization_id: &Uuid,
    ) -> Self {
        Self {
            token_indices: (start..end).collect(),
            anchor_token_index: anchor.filter(|a| (start..end).contains(a)),
            tokenization_id: tokenization_id.clone(),
        }
    }

    /// First token index, if any.
    pub fn start(&self) -> Option<usize> {
        self.token_indices.first().copied()
    }

    /// One past the last token index, if any.
    pub fn end(&self) -> Option<usize> {
        self.token_indices.last().map(|i| i + 1)
    }

    pub fn len(&self) -> usize {
        self.token_indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.token_indices.is_empty()
    }

    /// True if indices are strictly increasing by one.
    pub fn is_contiguous(&self) -> bool {
        self.token_indices.windows(2).all(|w| w[1] == w[0] + 1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub token_index: usize,
    pub text: String,
    /// relative to the start of the sentence
    pub text_span: TextSpan,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaggedToken {
    pub token_index: usize,
    pub tag: String,
    pub confidence: f32,
}

/// One tag per token, in token order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenTagging {
    pub uuid: Uuid,
    pub metadata: AnnotationMetadata,
    pub tagged_tokens: Vec<TaggedToken>,
}

/// A node of a [Parse].
///
/// `id` is the position of the constituent in [Parse::constituents] (pre-order),
/// `children` are constituent ids and `head_child_index` indexes into `children`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constituent {
    pub id: usize,
    pub tag: String,
    pub token_sequence: TokenRefSequence,
    pub children: Vec<usize>,
    pub head_child_index: Option<usize>,
}

/// A constituency parse, stored flat in pre-order. The root is the first constituent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parse {
    pub uuid: Uuid,
    pub metadata: AnnotationMetadata,
    pub constituents: Vec<Constituent>,
}

impl Parse {
    pub fn root(&self) -> Option<&Constituent> {
        self.constituents.first()
    }

    pub fn constituent(&self, id: usize) -> Option<&Constituent> {
        self.constituents.get(id)
    }

    /// Children of `constituent`, in order. Dangling ids are skipped.
    pub fn children<'a>(
        &'a self,
        constituent: &'a Constituent,
    ) -> impl Iterator<Item = &'a Constituent> + 'a {
        constituent
            .children
            .iter()
            .filter_map(move |id| self.constituent(*id))
    }

    /// Head child of `constituent`, if one is set.
    pub fn head_child(&self, constituent: &Constituent) -> Option<&Constituent> {
        constituent
            .head_child_index
            .and_then(|idx| constituent.children.get(idx))
            .and_then(|id| self.constituent(*id))
    }
}

/// Typed dependency. `gov` is [None] when `dep` attaches to the root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    pub dep: usize,
    pub gov: Option<usize>,
    pub edge_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DependencyParse {
    pub uuid: Uuid,
    pub metadata: AnnotationMetadata,
    pub dependencies: Vec<Dependency>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenizationKind {
    TokenList,
    TokenLattice,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tokenization {
    pub uuid: Uuid,
    pub metadata: AnnotationMetadata,
    pub kind: TokenizationKind,
    pub tokens: Vec<Token>,
    pub lemmas: Vec<TokenTagging>,
    pub pos_tags: Vec<TokenTagging>,
    pub ner_tags: Vec<TokenTagging>,
    pub parses: Vec<Parse>,
    pub dependency_parses: Vec<DependencyParse>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sentence {
    pub uuid: Uuid,
    /// relative to the start of the communication text
    pub text_span: TextSpan,
    pub tokenization: Tokenization,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentenceSegmentation {
    pub uuid: Uuid,
    pub metadata: AnnotationMetadata,
    pub sentences: Vec<Sentence>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SectionKind {
    Passage,
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub uuid: Uuid,
    pub kind: SectionKind,
    pub text_span: TextSpan,
    pub sentence_segmentations: Vec<SentenceSegmentation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionSegmentation {
    pub uuid: Uuid,
    pub metadata: AnnotationMetadata,
    pub sections: Vec<Section>,
}

impl SectionSegmentation {
    /// Sentences of every section, in document order.
    pub fn sentences(&self) -> impl Iterator<Item = &Sentence> {
        self.sections
            .iter()
            .flat_map(|section| section.sentence_segmentations.iter())
            .flat_map(|segmentation| segmentation.sentences.iter())
    }

    /// Tokenizations of every sentence, in document order.
    pub fn tokenizations(&self) -> impl Iterator<Item = &Tokenization> {
        self.sentences().map(|sentence| &sentence.tokenization)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityType {
    Person,
    Organization,
    Location,
    Other,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PhraseType {
    Name,
    Pronoun,
    Common,
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityMention {
    pub uuid: Uuid,
    pub tokens: TokenRefSequence,
    pub entity_type: EntityType,
    pub phrase_type: PhraseType,
    pub confidence: f32,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityMentionSet {
    pub uuid: Uuid,
    pub metadata: AnnotationMetadata,
    pub mentions: Vec<EntityMention>,
}

/// Co-referring mentions, referenced by identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub uuid: Uuid,
    pub mention_ids: Vec<Uuid>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntitySet {
    pub uuid: Uuid,
    pub metadata: AnnotationMetadata,
    pub entities: Vec<Entity>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunicationGuid {
    pub corpus_name: String,
    pub communication_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommunicationKind {
    News,
    Other,
}

/// A converted document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Communication {
    pub uuid: Uuid,
    pub guid: CommunicationGuid,
    pub kind: CommunicationKind,
    pub text: String,
    pub section_segmentations: Vec<SectionSegmentation>,
    pub entity_mention_sets: Vec<EntityMentionSet>,
    pub entity_sets: Vec<EntitySet>,
}

impl Communication {
    pub fn sentences(&self) -> impl Iterator<Item = &Sentence> {
        self.section_segmentations
            .iter()
            .flat_map(|segmentation| segmentation.sentences())
    }

    /// Tokenizations in sentence order.
    pub fn tokenizations(&self) -> impl Iterator<Item = &Tokenization> {
        self.sentences().map(|sentence| &sentence.tokenization)
    }

    pub fn mentions(&self) -> impl Iterator<Item = &EntityMention> {
        self.entity_mention_sets
            .iter()
            .flat_map(|set| set.mentions.iter())
    }

    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.entity_sets.iter().flat_map(|set| set.entities.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_ref_from_range() {
        let id = Uuid::generate();
        let r = TokenRefSequence::from_range(2, 5, Some(3), &id);
        assert_eq!(r.token_indices, vec![2, 3, 4]);
        assert_eq!(r.anchor_token_index, Some(3));
        assert_eq!(r.start(), Some(2));
        assert_eq!(r.end(), Some(5));
        assert!(r.is_contiguous());
        assert_eq!(r.tokenization_id, id);
    }

    #[test]
    fn token_ref_anchor_outside_range() {
        let id = Uuid::generate();
        assert_eq!(
            TokenRefSequence::from_range(2, 5, Some(5), &id).anchor_token_index,
            None
        );
        assert_eq!(
            TokenRefSequence::from_range(2, 5, Some(1), &id).anchor_token_index,
            None
        );
        assert_eq!(
            TokenRefSequence::from_range(2, 5, None, &id).anchor_token_index,
            None
        );
    }

    #[test]
    fn empty_token_ref() {
        let r = TokenRefSequence::from_range(3, 3, Some(3), &Uuid::generate());
        assert!(r.is_empty());
        assert_eq!(r.start(), None);
        assert_eq!(r.anchor_token_index, None);
    }

    #[test]
    fn enums_serialize_screaming() {
        assert_eq!(
            serde_json::to_string(&TokenizationKind::TokenList).unwrap(),
            "\"TOKEN_LIST\""
        );
        assert_eq!(
            serde_json::to_string(&EntityType::Unknown).unwrap(),
            "\"UNKNOWN\""
        );
    }

    #[test]
    fn text_span_len() {
        assert_eq!(TextSpan::new(4, 7).len(), 3);
        assert!(TextSpan::new(4, 4).is_empty());
    }
}
