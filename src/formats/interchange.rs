//! Structured interchange encoding.
//!
//! A [`TokenSequence`](crate::sequence::TokenSequence) serializes as an ordered
//! list of single-key records:
//!
//! ```text
//! [{"string": "Hello "}, {"token": "name"}, {"string": "!"}]
//! ```
//!
//! Decoding is strict. A record with no entries, more than one entry, or a key
//! other than `token` / `string` is a structural error.

use crate::sequence::Element;
use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;

/// Record key for token elements.
pub const TOKEN_KEY: &str = "token";
/// Record key for text elements.
pub const TEXT_KEY: &str = "string";

const KEYS: &[&str] = &[TOKEN_KEY, TEXT_KEY];

impl<T: Serialize> Serialize for Element<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        match self {
            Element::Token(token) => map.serialize_entry(TOKEN_KEY, token)?,
            Element::Text(text) => map.serialize_entry(TEXT_KEY, text)?,
        }
        map.end()
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Element<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(ElementVisitor(PhantomData))
    }
}

struct ElementVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> Visitor<'de> for ElementVisitor<T> {
    type Value = Element<T>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a map with exactly one `{}` or `{}` entry", TOKEN_KEY, TEXT_KEY)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let key: String = match map.next_key()? {
            Some(key) => key,
            None => return Err(de::Error::invalid_length(0, &self)),
        };

        let element = match key.as_str() {
            TOKEN_KEY => Element::Token(map.next_value()?),
            TEXT_KEY => Element::Text(map.next_value()?),
            other => return Err(de::Error::unknown_field(other, KEYS)),
        };

        let mut extra = 0;
        while map.next_key::<de::IgnoredAny>()?.is_some() {
            map.next_value::<de::IgnoredAny>()?;
            extra += 1;
        }
        if extra > 0 {
            return Err(de::Error::invalid_length(1 + extra, &self));
        }

        Ok(element)
    }
}

#[cfg(test)]
mod tests {
    use crate::sequence::{Element, TokenSequence};

    fn sample() -> TokenSequence<String> {
        vec![
            Element::text("Hello "),
            Element::token("name".to_string()),
            Element::text("!"),
        ]
        .into()
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert_eq!(
            json,
            r#"[{"string":"Hello "},{"token":"name"},{"string":"!"}]"#
        );
    }

    #[test]
    fn test_json_decode() {
        let seq: TokenSequence<String> =
            serde_json::from_str(r#"[{"string":"Hello "},{"token":"name"},{"string":"!"}]"#)
                .unwrap();
        assert_eq!(seq, sample());
    }

    #[test]
    fn test_rejects_empty_record() {
        let err = serde_json::from_str::<TokenSequence<String>>(r#"[{}]"#).unwrap_err();
        assert!(err.to_string().contains("invalid length 0"), "{}", err);
    }

    #[test]
    fn test_rejects_two_key_record() {
        let result =
            serde_json::from_str::<TokenSequence<String>>(r#"[{"token":"a","string":"b"}]"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_duplicate_key_record() {
        let result =
            serde_json::from_str::<TokenSequence<String>>(r#"[{"token":"a","token":"b"}]"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_unknown_key() {
        let err = serde_json::from_str::<TokenSequence<String>>(r#"[{"text":"a"}]"#).unwrap_err();
        assert!(err.to_string().contains("unknown field `text`"), "{}", err);
    }

    #[test]
    fn test_rejects_non_map_record() {
        assert!(serde_json::from_str::<TokenSequence<String>>(r#"["a"]"#).is_err());
    }

    #[test]
    fn test_typed_tokens() {
        #[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
        #[serde(rename_all = "lowercase")]
        enum Kind {
            Date,
            Time,
        }

        let seq: TokenSequence<Kind> = vec![
            Element::token(Kind::Date),
            Element::text(" "),
            Element::token(Kind::Time),
        ]
        .into();
        let json = serde_json::to_string(&seq).unwrap();
        assert_eq!(json, r#"[{"token":"date"},{"string":" "},{"token":"time"}]"#);

        let back: TokenSequence<Kind> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, seq);

        assert!(serde_json::from_str::<TokenSequence<Kind>>(r#"[{"token":"week"}]"#).is_err());
    }

    #[test]
    fn test_yaml_decode() {
        let yaml = "- string: \"Hello \"\n- token: name\n- string: \"!\"\n";
        let seq: TokenSequence<String> = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(seq, sample());
    }
}
