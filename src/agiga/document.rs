use serde::{Deserialize, Serialize};

use crate::trees::Tree;

/// An annotated document, as read from the corpus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub sentences: Vec<Sentence>,
    #[serde(default)]
    pub corefs: Vec<Coref>,
}

impl Document {
    pub fn new(id: String, sentences: Vec<Sentence>, corefs: Vec<Coref>) -> Self {
        Self {
            id,
            sentences,
            corefs,
        }
    }
}

/// A sentence, with its tokens, constituency parse and typed dependencies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sentence {
    pub tokens: Vec<Token>,
    pub parse: Tree,
    #[serde(default)]
    pub basic_deps: Vec<TypedDependency>,
    #[serde(default)]
    pub col_deps: Vec<TypedDependency>,
    #[serde(default)]
    pub col_ccproc_deps: Vec<TypedDependency>,
}

impl Sentence {
    /// Token words, in order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(|t| t.word.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub word: String,
    pub lemma: String,
    pub pos: String,
    pub ner: String,
}

impl Token {
    pub fn new(word: &str, lemma: &str, pos: &str, ner: &str) -> Self {
        Self {
            word: word.to_string(),
            lemma: lemma.to_string(),
            pos: pos.to_string(),
            ner: ner.to_string(),
        }
    }
}

/// A typed dependency between two 0-based token indices.
///
/// A negative `gov` means that `dep` attaches to the virtual root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypedDependency {
    pub dep: usize,
    pub gov: i64,
    #[serde(rename = "type")]
    pub kind: String,
}

impl TypedDependency {
    pub fn new(dep: usize, gov: i64, kind: &str) -> Self {
        Self {
            dep,
            gov,
            kind: kind.to_string(),
        }
    }

    /// Governor index, or [None] when attached to the root.
    pub fn governor(&self) -> Option<usize> {
        usize::try_from(self.gov).ok()
    }
}

/// A coreference chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coref {
    pub mentions: Vec<Mention>,
}

/// A mention of a coreference chain: tokens `[start, end)` of sentence `sentence`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mention {
    pub sentence: usize,
    pub start: usize,
    pub end: usize,
    #[serde(default)]
    pub head: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_document() {
        let doc = r#"{
            "id": "NYT_ENG_19940701.0001",
            "kind": "multi",
            "sentences": [{
                "tokens": [
                    {"word": "The", "lemma": "the", "pos": "DT", "ner": "O"},
                    {"word": "cat", "lemma": "cat", "pos": "NN", "ner": "O"}
                ],
                "parse": "(ROOT (NP (DT The) (NN cat)))",
                "basic_deps": [{"dep": 0, "gov": 1, "type": "det"}, {"dep": 1, "gov": -1, "type": "root"}]
            }],
            "corefs": [{"mentions": [{"sentence": 0, "start": 0, "end": 2, "head": 1}]}]
        }"#;

        let doc: Document = serde_json::from_str(doc).unwrap();
        assert_eq!(doc.sentences.len(), 1);
        let sentence = &doc.sentences[0];
        assert_eq!(sentence.words().collect::<Vec<_>>(), vec!["The", "cat"]);
        assert_eq!(sentence.parse.leaf_count(sentence.parse.root()), 2);
        assert!(sentence.col_deps.is_empty());
        assert_eq!(sentence.basic_deps[0].governor(), Some(1));
        assert_eq!(sentence.basic_deps[1].governor(), None);
        assert_eq!(doc.corefs[0].mentions[0].head, Some(1));
    }

    #[test]
    fn bad_parse_is_rejected() {
        let doc = r#"{"id": "x", "sentences": [{"tokens": [], "parse": "(ROOT"}]}"#;
        assert!(serde_json::from_str::<Document>(doc).is_err());
    }
}
