/*! Avro schema of Communication records

Each named record is declared on its own and referenced by name by the records that follow it.
Field order follows the struct declarations in [super::types].
!*/
use avro_rs::Schema;
use lazy_static::lazy_static;

const ENUMS: [&str; 4] = [
    r#"{"type": "enum", "name": "tokenization_kind", "symbols": ["TOKEN_LIST", "TOKEN_LATTICE"]}"#,
    r#"{"type": "enum", "name": "section_kind", "symbols": ["PASSAGE", "OTHER"]}"#,
    r#"{"type": "enum", "name": "entity_type", "symbols": ["PERSON", "ORGANIZATION", "LOCATION", "OTHER", "UNKNOWN"]}"#,
    r#"{"type": "enum", "name": "phrase_type", "symbols": ["NAME", "PRONOUN", "COMMON", "OTHER"]}"#,
];

const COMMUNICATION_KIND: &str =
    r#"{"type": "enum", "name": "communication_kind", "symbols": ["NEWS", "OTHER"]}"#;

const ANNOTATION_METADATA: &str = r#"
{"type": "record", "name": "annotation_metadata", "fields": [
  {"name": "tool", "type": "string"},
  {"name": "timestamp", "type": "long"},
  {"name": "confidence", "type": "float"}
]}
"#;

const TEXT_SPAN: &str = r#"
{"type": "record", "name": "text_span", "fields": [
  {"name": "start", "type": "long"},
  {"name": "end", "type": "long"}
]}
"#;

const TOKEN_REF_SEQUENCE: &str = r#"
{"type": "record", "name": "token_ref_sequence", "fields": [
  {"name": "token_indices", "type": {"type": "array", "items": "long"}},
  {"name": "anchor_token_index", "type": ["null", "long"]},
  {"name": "tokenization_id", "type": "string"}
]}
"#;

const TOKEN: &str = r#"
{"type": "record", "name": "token", "fields": [
  {"name": "token_index", "type": "long"},
  {"name": "text", "type": "string"},
  {"name": "text_span", "type": "text_span"}
]}
"#;

const TAGGED_TOKEN: &str = r#"
{"type": "record", "name": "tagged_token", "fields": [
  {"name": "token_index", "type": "long"},
  {"name": "tag", "type": "string"},
  {"name": "confidence", "type": "float"}
]}
"#;

const TOKEN_TAGGING: &str = r#"
{"type": "record", "name": "token_tagging", "fields": [
  {"name": "uuid", "type": "string"},
  {"name": "metadata", "type": "annotation_metadata"},
  {"name": "tagged_tokens", "type": {"type": "array", "items": "tagged_token"}}
]}
"#;

const CONSTITUENT: &str = r#"
{"type": "record", "name": "constituent", "fields": [
  {"name": "id", "type": "long"},
  {"name": "tag", "type": "string"},
  {"name": "token_sequence", "type": "token_ref_sequence"},
  {"name": "children", "type": {"type": "array", "items": "long"}},
  {"name": "head_child_index", "type": ["null", "long"]}
]}
"#;

const PARSE: &str = r#"
{"type": "record", "name": "parse", "fields": [
  {"name": "uuid", "type": "string"},
  {"name": "metadata", "type": "annotation_metadata"},
  {"name": "constituents", "type": {"type": "array", "items": "constituent"}}
]}
"#;

const DEPENDENCY: &str = r#"
{"type": "record", "name": "dependency", "fields": [
  {"name": "dep", "type": "long"},
  {"name": "gov", "type": ["null", "long"]},
  {"name": "edge_type", "type": "string"}
]}
"#;

const DEPENDENCY_PARSE: &str = r#"
{"type": "record", "name": "dependency_parse", "fields": [
  {"name": "uuid", "type": "string"},
  {"name": "metadata", "type": "annotation_metadata"},
  {"name": "dependencies", "type": {"type": "array", "items": "dependency"}}
]}
"#;

const TOKENIZATION: &str = r#"
{"type": "record", "name": "tokenization", "fields": [
  {"name": "uuid", "type": "string"},
  {"name": "metadata", "type": "annotation_metadata"},
  {"name": "kind", "type": "tokenization_kind"},
  {"name": "tokens", "type": {"type": "array", "items": "token"}},
  {"name": "lemmas", "type": {"type": "array", "items": "token_tagging"}},
  {"name": "pos_tags", "type": {"type": "array", "items": "token_tagging"}},
  {"name": "ner_tags", "type": {"type": "array", "items": "token_tagging"}},
  {"name": "parses", "type": {"type": "array", "items": "parse"}},
  {"name": "dependency_parses", "type": {"type": "array", "items": "dependency_parse"}}
]}
"#;

const SENTENCE: &str = r#"
{"type": "record", "name": "sentence", "fields": [
  {"name": "uuid", "type": "string"},
  {"name": "text_span", "type": "text_span"},
  {"name": "tokenization", "type": "tokenization"}
]}
"#;

const SENTENCE_SEGMENTATION: &str = r#"
{"type": "record", "name": "sentence_segmentation", "fields": [
  {"name": "uuid", "type": "string"},
  {"name": "metadata", "type": "annotation_metadata"},
  {"name": "sentences", "type": {"type": "array", "items": "sentence"}}
]}
"#;

const SECTION: &str = r#"
{"type": "record", "name": "section", "fields": [
  {"name": "uuid", "type": "string"},
  {"name": "kind", "type": "section_kind"},
  {"name": "text_span", "type": "text_span"},
  {"name": "sentence_segmentations", "type": {"type": "array", "items": "sentence_segmentation"}}
]}
"#;

const SECTION_SEGMENTATION: &str = r#"
{"type": "record", "name": "section_segmentation", "fields": [
  {"name": "uuid", "type": "string"},
  {"name": "metadata", "type": "annotation_metadata"},
  {"name": "sections", "type": {"type": "array", "items": "section"}}
]}
"#;

const ENTITY_MENTION: &str = r#"
{"type": "record", "name": "entity_mention", "fields": [
  {"name": "uuid", "type": "string"},
  {"name": "tokens", "type": "token_ref_sequence"},
  {"name": "entity_type", "type": "entity_type"},
  {"name": "phrase_type", "type": "phrase_type"},
  {"name": "confidence", "type": "float"},
  {"name": "text", "type": "string"}
]}
"#;

const ENTITY_MENTION_SET: &str = r#"
{"type": "record", "name": "entity_mention_set", "fields": [
  {"name": "uuid", "type": "string"},
  {"name": "metadata", "type": "annotation_metadata"},
  {"name": "mentions", "type": {"type": "array", "items": "entity_mention"}}
]}
"#;

const ENTITY: &str = r#"
{"type": "record", "name": "entity", "fields": [
  {"name": "uuid", "type": "string"},
  {"name": "mention_ids", "type": {"type": "array", "items": "string"}}
]}
"#;

const ENTITY_SET: &str = r#"
{"type": "record", "name": "entity_set", "fields": [
  {"name": "uuid", "type": "string"},
  {"name": "metadata", "type": "annotation_metadata"},
  {"name": "entities", "type": {"type": "array", "items": "entity"}}
]}
"#;

const COMMUNICATION_GUID: &str = r#"
{"type": "record", "name": "communication_guid", "fields": [
  {"name": "corpus_name", "type": "string"},
  {"name": "communication_id", "type": "string"}
]}
"#;

const COMMUNICATION: &str = r#"
{"type": "record", "name": "communication", "fields": [
  {"name": "uuid", "type": "string"},
  {"name": "guid", "type": "communication_guid"},
  {"name": "kind", "type": "communication_kind"},
  {"name": "text", "type": "string"},
  {"name": "section_segmentations", "type": {"type": "array", "items": "section_segmentation"}},
  {"name": "entity_mention_sets", "type": {"type": "array", "items": "entity_mention_set"}},
  {"name": "entity_sets", "type": {"type": "array", "items": "entity_set"}}
]}
"#;

lazy_static! {
    /// Schema of a [super::Communication] record.
    pub static ref SCHEMA: Schema = {
        let mut schemas: Vec<&str> = ENUMS.to_vec();
        schemas.extend([
            COMMUNICATION_KIND,
            ANNOTATION_METADATA,
            TEXT_SPAN,
            TOKEN_REF_SEQUENCE,
            TOKEN,
            TAGGED_TOKEN,
            TOKEN_TAGGING,
            CONSTITUENT,
            PARSE,
            DEPENDENCY,
            DEPENDENCY_PARSE,
            TOKENIZATION,
            SENTENCE,
            SENTENCE_SEGMENTATION,
            SECTION,
            SECTION_SEGMENTATION,
            ENTITY_MENTION,
            ENTITY_MENTION_SET,
            ENTITY,
            ENTITY_SET,
            COMMUNICATION_GUID,
            COMMUNICATION,
        ]);

        let mut parsed = Schema::parse_list(&schemas).expect("invalid communication schema");
        parsed.pop().expect("empty communication schema list")
    };
}

#[cfg(test)]
mod tests {
    use avro_rs::Schema;

    use super::SCHEMA;

    #[test]
    fn schema_is_communication_record() {
        match &*SCHEMA {
            Schema::Record { name, fields, .. } => {
                assert_eq!(name.name, "communication");
                let names: Vec<&str> = fields.iter().map(|f| f.name.as_str()).collect();
                assert_eq!(
                    names,
                    vec![
                        "uuid",
                        "guid",
                        "kind",
                        "text",
                        "section_segmentations",
                        "entity_mention_sets",
                        "entity_sets"
                    ]
                );
            }
            other => panic!("unexpected schema {:?}", other),
        }
    }
}
