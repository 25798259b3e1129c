//! Property-based tests for the structured interchange records
//!
//! Unlike the delimited text format, records keep every element as written:
//! empty text spans and neighbouring text spans survive unchanged.

use proptest::prelude::*;
use tokenized::{Element, TokenSequence};

/// Any text, including empty strings and delimiter characters.
fn text_strategy() -> BoxedStrategy<String> {
    prop_oneof![Just(String::new()), "[ -~]{0,12}", "\\PC{0,6}"].boxed()
}

/// Plain text with delimiter characters, kept away from YAML scalar edge cases.
fn yaml_text_strategy() -> BoxedStrategy<String> {
    "[a-zA-Z0-9 %\\[\\]]{0,12}".boxed()
}

fn element_strategy<S>(text: S) -> impl Strategy<Value = Element<String>>
where
    S: Strategy<Value = String> + Clone,
{
    prop_oneof![
        text.clone().prop_map(Element::Token),
        text.prop_map(Element::Text),
    ]
}

/// Sequences with no normalization applied.
fn sequence_strategy<S>(text: S) -> impl Strategy<Value = TokenSequence<String>>
where
    S: Strategy<Value = String> + Clone,
{
    prop::collection::vec(element_strategy(text), 0..12).prop_map(TokenSequence::from)
}

proptest! {
    #[test]
    fn test_json_preserves_any_sequence(sequence in sequence_strategy(text_strategy())) {
        let json = serde_json::to_string(&sequence).unwrap();
        let decoded: TokenSequence<String> = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(decoded, sequence);
    }

    #[test]
    fn test_yaml_preserves_any_sequence(sequence in sequence_strategy(yaml_text_strategy())) {
        let yaml = serde_yaml::to_string(&sequence).unwrap();
        let decoded: TokenSequence<String> = serde_yaml::from_str(&yaml).unwrap();
        prop_assert_eq!(decoded, sequence);
    }

    #[test]
    fn test_adjacent_text_spans_stay_separate(
        first in text_strategy(),
        second in text_strategy(),
    ) {
        let sequence: TokenSequence<String> =
            vec![Element::Text(first), Element::Text(second)].into();
        let json = serde_json::to_string(&sequence).unwrap();
        let decoded: TokenSequence<String> = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(decoded.len(), 2);
        prop_assert_eq!(decoded, sequence);
    }
}
