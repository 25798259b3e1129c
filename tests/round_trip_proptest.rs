//! Property-based tests for the delimited text codec
//!
//! These tests check the round-trip law: serializing a sequence and parsing
//! it back with the same delimiters and a matching decoder gives back the same
//! sequence, as long as no identifier or text span contains a delimiter.

use proptest::prelude::*;
use tokenized::codec::{parse, serialize, Delimiters};
use tokenized::{Element, TokenSequence};

/// Delimiter pairs used across the properties
fn delimiters_strategy() -> impl Strategy<Value = Delimiters> {
    prop_oneof![
        Just(Delimiters::default()),
        Just(Delimiters::new("{{", "}}")),
        Just(Delimiters::new("<", ">")),
        Just(Delimiters::new("$", "$")),
    ]
}

/// Identifiers never contain delimiter characters
fn identifier_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9 _-]{0,10}"
}

/// Non-empty text without delimiter characters
fn text_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ,.!?\n]{1,20}"
}

fn element_strategy() -> impl Strategy<Value = Element<String>> {
    prop_oneof![
        identifier_strategy().prop_map(Element::Token),
        text_strategy().prop_map(Element::Text),
    ]
}

/// Sequences as the parser would build them: no empty text spans and no two
/// text spans next to each other.
fn sequence_strategy() -> impl Strategy<Value = TokenSequence<String>> {
    prop::collection::vec(element_strategy(), 0..12).prop_map(|elements| {
        let mut normalized: Vec<Element<String>> = Vec::new();
        for element in elements {
            if let (Some(Element::Text(previous)), Element::Text(text)) =
                (normalized.last_mut(), &element)
            {
                previous.push_str(text);
                continue;
            }
            normalized.push(element);
        }
        TokenSequence::from(normalized)
    })
}

#[allow(clippy::ptr_arg)]
fn encode(token: &String) -> String {
    token.clone()
}

fn decode(identifier: &str) -> Option<String> {
    Some(identifier.to_string())
}

proptest! {
    #[test]
    fn test_serialize_then_parse(
        sequence in sequence_strategy(),
        delimiters in delimiters_strategy(),
    ) {
        let (prefix, suffix) = (delimiters.prefix(), delimiters.suffix());
        let text = serialize(&sequence, prefix, suffix, encode);
        let parsed = parse(&text, prefix, suffix, decode);
        prop_assert_eq!(parsed, Ok(sequence));
    }

    #[test]
    fn test_parse_then_serialize(
        sequence in sequence_strategy(),
        delimiters in delimiters_strategy(),
    ) {
        let (prefix, suffix) = (delimiters.prefix(), delimiters.suffix());
        let text = serialize(&sequence, prefix, suffix, encode);
        let parsed = parse(&text, prefix, suffix, decode).unwrap();
        prop_assert_eq!(serialize(&parsed, prefix, suffix, encode), text);
    }

    #[test]
    fn test_text_without_prefix_is_single_span(text in "[a-zA-Z0-9 \\]]{1,40}") {
        let parsed = parse(&text, "%[", "]", decode).unwrap();
        prop_assert_eq!(parsed.into_elements(), vec![Element::Text(text)]);
    }

    #[test]
    fn test_parser_never_emits_empty_text(input in "[a-z%\\[\\] ]{0,40}") {
        if let Ok(parsed) = parse(&input, "%[", "]", decode) {
            prop_assert!(parsed.iter().all(|element| element.as_text() != Some("")));
        }
    }

    #[test]
    fn test_flatten_with_identity_matches_concatenation(sequence in sequence_strategy()) {
        let expected: String = sequence
            .iter()
            .map(|element| element.raw_value(encode))
            .collect();
        prop_assert_eq!(sequence.flatten(encode), expected);
    }
}
