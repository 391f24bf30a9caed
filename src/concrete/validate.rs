/*! Structural validation of communications

Conversion never fails on structural mismatches (such as a parse with more leaves than the tokenization has tokens).
[validate] is the place where those are detected, after the fact.

Character offsets are counted in `char`s.
!*/
use std::collections::HashSet;
use std::fmt;

use super::id::Uuid;
use super::types::{Communication, Parse, TokenTagging, Tokenization};

/// A broken invariant of a [Communication].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inconsistency {
    /// text length does not match sentence spans
    TextLength { expected: usize, found: usize },
    /// sentence span does not start right after the previous one, or does not match its tokens
    SentenceSpan { sentence: Uuid },
    /// token span does not follow the single-space join of the previous tokens
    TokenSpan { tokenization: Uuid, token: usize },
    TaggingLength {
        tokenization: Uuid,
        expected: usize,
        found: usize,
    },
    /// parse root range does not cover the tokenization (parse/tokenizer mismatch)
    ParseLength {
        tokenization: Uuid,
        leaves: usize,
        tokens: usize,
    },
    /// children ranges do not concatenate into the parent's range
    ConstituentRange { tokenization: Uuid, constituent: usize },
    LeafWidth { tokenization: Uuid, constituent: usize },
    DanglingChild { tokenization: Uuid, constituent: usize },
    HeadChild { tokenization: Uuid, constituent: usize },
    /// token reference pointing to another tokenization than the one holding it
    ForeignReference { tokenization: Uuid, constituent: usize },
    DependencyIndex { tokenization: Uuid, dep: usize },
    UnknownTokenization { mention: Uuid, tokenization: Uuid },
    MentionRange { mention: Uuid },
    UnknownMention { entity: Uuid, mention: Uuid },
}

impl fmt::Display for Inconsistency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Inconsistency::*;
        match self {
            TextLength { expected, found } => write!(
                f,
                "text has {} characters, sentences account for {}",
                found, expected
            ),
            SentenceSpan { sentence } => write!(f, "sentence {}: bad text span", sentence),
            TokenSpan {
                tokenization,
                token,
            } => write!(f, "tokenization {}: bad span for token {}", tokenization, token),
            TaggingLength {
                tokenization,
                expected,
                found,
            } => write!(
                f,
                "tokenization {}: tagging has {} entries for {} tokens",
                tokenization, found, expected
            ),
            ParseLength {
                tokenization,
                leaves,
                tokens,
            } => write!(
                f,
                "tokenization {}: parse covers {} leaves but there are {} tokens",
                tokenization, leaves, tokens
            ),
            ConstituentRange {
                tokenization,
                constituent,
            } => write!(
                f,
                "tokenization {}: constituent {} range is not its children's",
                tokenization, constituent
            ),
            LeafWidth {
                tokenization,
                constituent,
            } => write!(
                f,
                "tokenization {}: leaf constituent {} is not one token wide",
                tokenization, constituent
            ),
            DanglingChild {
                tokenization,
                constituent,
            } => write!(
                f,
                "tokenization {}: constituent {} has a dangling child",
                tokenization, constituent
            ),
            HeadChild {
                tokenization,
                constituent,
            } => write!(
                f,
                "tokenization {}: constituent {} head child index out of range",
                tokenization, constituent
            ),
            ForeignReference {
                tokenization,
                constituent,
            } => write!(
                f,
                "tokenization {}: constituent {} references another tokenization",
                tokenization, constituent
            ),
            DependencyIndex { tokenization, dep } => write!(
                f,
                "tokenization {}: dependency of token {} is out of bounds",
                tokenization, dep
            ),
            UnknownTokenization {
                mention,
                tokenization,
            } => write!(
                f,
                "mention {} references unknown tokenization {}",
                mention, tokenization
            ),
            MentionRange { mention } => write!(f, "mention {}: bad token range", mention),
            UnknownMention { entity, mention } => {
                write!(f, "entity {} references unknown mention {}", entity, mention)
            }
        }
    }
}

/// Check every structural invariant of `comm`, returning the broken ones.
pub fn validate(comm: &Communication) -> Vec<Inconsistency> {
    let mut found = Vec::new();
    check_spans(comm, &mut found);
    for tokenization in comm.tokenizations() {
        check_tokenization(tokenization, &mut found);
    }
    check_references(comm, &mut found);
    found
}

fn check_spans(comm: &Communication, found: &mut Vec<Inconsistency>) {
    let mut expected_start = 0;
    let mut nb_sentences = 0;
    let mut covered = 0;
    for sentence in comm.sentences() {
        let tokens = &sentence.tokenization.tokens;
        let tokens_len = match (tokens.first(), tokens.last()) {
            (Some(first), Some(last)) => last.text_span.end - first.text_span.start,
            _ => 0,
        };
        if sentence.text_span.start != expected_start || sentence.text_span.len() != tokens_len {
            found.push(Inconsistency::SentenceSpan {
                sentence: sentence.uuid.clone(),
            });
        }
        // one newline after each sentence
        expected_start = sentence.text_span.end + 1;
        covered += sentence.text_span.len();
        nb_sentences += 1;
    }

    let text_len = comm.text.chars().count();
    if covered + nb_sentences != text_len {
        found.push(Inconsistency::TextLength {
            expected: covered + nb_sentences,
            found: text_len,
        });
    }
}

fn check_tokenization(tokenization: &Tokenization, found: &mut Vec<Inconsistency>) {
    let id = &tokenization.uuid;
    let nb_tokens = tokenization.tokens.len();

    let mut offset = 0;
    for (idx, token) in tokenization.tokens.iter().enumerate() {
        if token.token_index != idx
            || token.text_span.start != offset
            || token.text_span.len() != token.text.chars().count()
        {
            found.push(Inconsistency::TokenSpan {
                tokenization: id.clone(),
                token: idx,
            });
        }
        offset = token.text_span.end + 1;
    }

    let taggings = tokenization
        .lemmas
        .iter()
        .chain(&tokenization.pos_tags)
        .chain(&tokenization.ner_tags);
    for tagging in taggings {
        if !is_parallel(tagging, nb_tokens) {
            found.push(Inconsistency::TaggingLength {
                tokenization: id.clone(),
                expected: nb_tokens,
                found: tagging.tagged_tokens.len(),
            });
        }
    }

    for parse in &tokenization.parses {
        check_parse(parse, tokenization, found);
    }

    for dependency in tokenization
        .dependency_parses
        .iter()
        .flat_map(|dp| dp.dependencies.iter())
    {
        if dependency.dep >= nb_tokens || dependency.gov.map_or(false, |g| g >= nb_tokens) {
            found.push(Inconsistency::DependencyIndex {
                tokenization: id.clone(),
                dep: dependency.dep,
            });
        }
    }
}

fn is_parallel(tagging: &TokenTagging, nb_tokens: usize) -> bool {
    tagging.tagged_tokens.len() == nb_tokens
        && tagging
            .tagged_tokens
            .iter()
            .enumerate()
            .all(|(idx, t)| t.token_index == idx)
}

fn check_parse(parse: &Parse, tokenization: &Tokenization, found: &mut Vec<Inconsistency>) {
    let id = &tokenization.uuid;
    if let Some(root) = parse.root() {
        let leaves = root.token_sequence.len();
        if leaves != tokenization.tokens.len() || root.token_sequence.start().unwrap_or(0) != 0 {
            found.push(Inconsistency::ParseLength {
                tokenization: id.clone(),
                leaves,
                tokens: tokenization.tokens.len(),
            });
        }
    }

    for constituent in &parse.constituents {
        let broken = |kind: fn(Uuid, usize) -> Inconsistency| kind(id.clone(), constituent.id);

        if &constituent.token_sequence.tokenization_id != id {
            found.push(broken(|tokenization, constituent| {
                Inconsistency::ForeignReference {
                    tokenization,
                    constituent,
                }
            }));
        }

        if constituent.children.is_empty() {
            if constituent.token_sequence.len() != 1 {
                found.push(broken(|tokenization, constituent| Inconsistency::LeafWidth {
                    tokenization,
                    constituent,
                }));
            }
            continue;
        }

        // children come after their parent in pre-order
        let dangling = constituent
            .children
            .iter()
            .any(|child| *child <= constituent.id || *child >= parse.constituents.len());
        if dangling {
            found.push(broken(|tokenization, constituent| {
                Inconsistency::DanglingChild {
                    tokenization,
                    constituent,
                }
            }));
            continue;
        }

        let concatenated: Vec<usize> = parse
            .children(constituent)
            .flat_map(|child| child.token_sequence.token_indices.iter().copied())
            .collect();
        if concatenated != constituent.token_sequence.token_indices {
            found.push(broken(|tokenization, constituent| {
                Inconsistency::ConstituentRange {
                    tokenization,
                    constituent,
                }
            }));
        }

        if let Some(head) = constituent.head_child_index {
            if head >= constituent.children.len() {
                found.push(broken(|tokenization, constituent| Inconsistency::HeadChild {
                    tokenization,
                    constituent,
                }));
            }
        }
    }
}

fn check_references(comm: &Communication, found: &mut Vec<Inconsistency>) {
    let tokenizations: Vec<&Tokenization> = comm.tokenizations().collect();
    let tokenization_ids: HashSet<&Uuid> = tokenizations.iter().map(|t| &t.uuid).collect();

    for mention in comm.mentions() {
        let target = &mention.tokens.tokenization_id;
        if !tokenization_ids.contains(target) {
            found.push(Inconsistency::UnknownTokenization {
                mention: mention.uuid.clone(),
                tokenization: target.clone(),
            });
            continue;
        }
        let nb_tokens = tokenizations
            .iter()
            .find(|t| &t.uuid == target)
            .map_or(0, |t| t.tokens.len());
        let in_bounds = mention.tokens.end().map_or(false, |end| end <= nb_tokens);
        if !in_bounds || !mention.tokens.is_contiguous() {
            found.push(Inconsistency::MentionRange {
                mention: mention.uuid.clone(),
            });
        }
    }

    let mention_ids: HashSet<&Uuid> = comm.mentions().map(|m| &m.uuid).collect();
    for entity in comm.entities() {
        for mention in &entity.mention_ids {
            if !mention_ids.contains(mention) {
                found.push(Inconsistency::UnknownMention {
                    entity: entity.uuid.clone(),
                    mention: mention.clone(),
                });
            }
        }
    }
}
