// Season key extraction from sheet and row labels.

use std::fmt;

use serde::de::Visitor;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A season identifier: either the all-seasons career aggregate or a
/// two-digit year.
///
/// `Ord` puts career before any year and years in ascending order, which
/// fixes the key order of the JSON artifact (`career`, `24`, `25`, ...).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SeasonKey {
    Career,
    Year(String),
}

impl fmt::Display for SeasonKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeasonKey::Career => f.write_str("career"),
            SeasonKey::Year(y) => f.write_str(y),
        }
    }
}

impl Serialize for SeasonKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SeasonKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct KeyVisitor;

        impl Visitor<'_> for KeyVisitor {
            type Value = SeasonKey;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a season key string")
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<SeasonKey, E> {
                if v == "career" {
                    Ok(SeasonKey::Career)
                } else {
                    Ok(SeasonKey::Year(v.to_string()))
                }
            }
        }

        deserializer.deserialize_str(KeyVisitor)
    }
}

/// Split a label into its season and name parts.
///
/// A label of the form `"<2 digits><whitespace><rest>"` yields
/// `(Year(digits), rest)`; anything else degrades to `(Career, label)` — no
/// error is signaled for malformed input. A name that itself begins with two
/// digits and a space is misclassified as a season row; that ambiguity is
/// inherited from the source data, not fixed here.
pub fn split_label(label: &str) -> (SeasonKey, &str) {
    let bytes = label.as_bytes();
    if bytes.len() > 2 && bytes[0].is_ascii_digit() && bytes[1].is_ascii_digit() {
        let rest = &label[2..];
        if let Some(sep) = rest.chars().next() {
            if sep.is_whitespace() {
                let name = &rest[sep.len_utf8()..];
                if !name.is_empty() {
                    return (SeasonKey::Year(label[..2].to_string()), name);
                }
            }
        }
    }
    (SeasonKey::Career, label)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
