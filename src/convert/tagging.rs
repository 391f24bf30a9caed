/*! Tokens, taggings and tokenizations

Token spans are relative to the start of the sentence and follow the flattening convention:
each token starts one character after the end of the previous one.
!*/
use crate::agiga;
use crate::concrete::{
    TaggedToken, TextSpan, Token, TokenTagging, Tokenization, TokenizationKind, Uuid,
};
use crate::trees::HeadFinder;

use super::dependency::DependencyFlavor;
use super::text::char_len;
use super::Converter;

const TOKENIZER_REFERENCE: &str = " http://nlp.stanford.edu/software/tokensregex.shtml";

/// Index tokens and compute their character spans.
pub(crate) fn tokens(sentence: &agiga::Sentence) -> Vec<Token> {
    let mut offset = 0;
    sentence
        .tokens
        .iter()
        .enumerate()
        .map(|(token_index, token)| {
            let len = char_len(&token.word);
            let text_span = TextSpan::new(offset, offset + len);
            offset += len + 1;
            Token {
                token_index,
                text: token.word.clone(),
                text_span,
            }
        })
        .collect()
}

impl<H: HeadFinder> Converter<H> {
    /// Build a tagging with one entry per token, using `tag` to pick the annotation.
    pub fn tagging<F>(&self, sentence: &agiga::Sentence, tag: F) -> TokenTagging
    where
        F: Fn(&agiga::Token) -> &str,
    {
        let tagged_tokens = sentence
            .tokens
            .iter()
            .enumerate()
            .map(|(token_index, token)| TaggedToken {
                token_index,
                tag: tag(token).to_string(),
                confidence: 1f32,
            })
            .collect();

        TokenTagging {
            uuid: Uuid::generate(),
            metadata: self.metadata.metadata(),
            tagged_tokens,
        }
    }

    /// Build the tokenization of a sentence: tokens, lemma/POS/NER taggings,
    /// the constituency parse and the three dependency parses.
    pub fn tokenization(&self, sentence: &agiga::Sentence) -> Tokenization {
        let uuid = Uuid::generate();

        let lemmas = self.tagging(sentence, |t| t.lemma.as_str());
        let pos_tags = self.tagging(sentence, |t| t.pos.as_str());
        let ner_tags = self.tagging(sentence, |t| t.ner.as_str());
        let parse = self.parse(&sentence.parse, &uuid);
        let dependency_parses = DependencyFlavor::ALL
            .iter()
            .map(|flavor| self.dependency_parse(flavor.of(sentence), *flavor))
            .collect();

        Tokenization {
            uuid,
            metadata: self.metadata.with_suffix(TOKENIZER_REFERENCE),
            kind: TokenizationKind::TokenList,
            tokens: tokens(sentence),
            lemmas: vec![lemmas],
            pos_tags: vec![pos_tags],
            ner_tags: vec![ner_tags],
            parses: vec![parse],
            dependency_parses,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::concrete::MetadataFactory;
    use crate::convert::{fixtures, flatten_sentence};

    #[test]
    fn token_spans() {
        let doc = fixtures::cat_sat();
        let tokens = tokens(&doc.sentences[0]);
        let spans: Vec<(usize, usize)> = tokens
            .iter()
            .map(|t| (t.text_span.start, t.text_span.end))
            .collect();
        assert_eq!(spans, vec![(0, 3), (4, 7), (8, 11)]);
        let indices: Vec<usize> = tokens.iter().map(|t| t.token_index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn spans_match_flattened_text() {
        for doc in [fixtures::cat_sat(), fixtures::john_smith()] {
            for sentence in &doc.sentences {
                let flat = flatten_sentence(sentence);
                let tokens = tokens(sentence);
                let total: usize = tokens.iter().map(|t| t.text_span.len()).sum();
                assert_eq!(total + tokens.len() - 1, flat.chars().count());
                for t in &tokens {
                    let text: String = flat
                        .chars()
                        .skip(t.text_span.start)
                        .take(t.text_span.len())
                        .collect();
                    assert_eq!(text, t.text);
                }
            }
        }
    }

    #[test]
    fn multibyte_words() {
        let sentence = agiga::Sentence {
            tokens: vec![
                agiga::Token::new("Zürich", "Zürich", "NNP", "LOCATION"),
                agiga::Token::new("café", "café", "NN", "O"),
            ],
            parse: "(ROOT (NP (NNP Zürich) (NN café)))".parse().unwrap(),
            basic_deps: vec![],
            col_deps: vec![],
            col_ccproc_deps: vec![],
        };
        let tokens = tokens(&sentence);
        assert_eq!(tokens[0].text_span, TextSpan::new(0, 6));
        assert_eq!(tokens[1].text_span, TextSpan::new(7, 11));
    }

    #[test]
    fn tokenization() {
        let doc = fixtures::cat_sat();
        let conv = Converter::new(MetadataFactory::new("t", 0));
        let tokenization = conv.tokenization(&doc.sentences[0]);

        assert_eq!(tokenization.kind, TokenizationKind::TokenList);
        assert_eq!(tokenization.tokens.len(), 3);
        let pos: Vec<&str> = tokenization.pos_tags[0]
            .tagged_tokens
            .iter()
            .map(|t| t.tag.as_str())
            .collect();
        assert_eq!(pos, vec!["DT", "NN", "VBD"]);
        assert_eq!(tokenization.lemmas[0].tagged_tokens[2].tag, "sit");
        assert_eq!(tokenization.ner_tags[0].tagged_tokens.len(), 3);
        assert_eq!(tokenization.parses.len(), 1);
        assert_eq!(
            tokenization.parses[0]
                .root()
                .unwrap()
                .token_sequence
                .tokenization_id,
            tokenization.uuid
        );
        let flavors: Vec<&str> = tokenization
            .dependency_parses
            .iter()
            .map(|d| d.metadata.tool.split(' ').nth(1).unwrap())
            .collect();
        assert_eq!(flavors, vec!["basic-deps", "col-deps", "col-ccproc-deps"]);
        assert_eq!(
            tokenization.metadata.tool,
            "t http://nlp.stanford.edu/software/tokensregex.shtml"
        );
    }

    #[test]
    fn fresh_identifiers() {
        let doc = fixtures::cat_sat();
        let conv = Converter::new(MetadataFactory::new("t", 0));
        let t = conv.tokenization(&doc.sentences[0]);
        let ids = vec![
            &t.uuid,
            &t.lemmas[0].uuid,
            &t.pos_tags[0].uuid,
            &t.ner_tags[0].uuid,
            &t.parses[0].uuid,
        ];
        for (i, a) in ids.iter().enumerate() {
            for b in &ids[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
