//! Codecs for sequences, sets and mappings.
//!
//! Containers are flat delimiter-joined strings of their element encodings:
//!
//! ```text
//! Vec<u16>                 80,443
//! BTreeSet<String>         blue,red
//! BTreeMap<String, u16>    http:80,https:443
//! ```
//!
//! There is no escaping or quoting. An element whose encoding contains a
//! delimiter will not survive the round trip.
//!
//! Splitting is literal, so empty components are kept: `""` is one empty
//! element and `","` is two. A `Vec<String>` parses `""` as `[""]`, while a
//! `Vec<i32>` fails on it because `""` is not an integer.
//!
//! Any element or entry that fails to parse fails the whole container.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::hash::{BuildHasher, Hash};

use crate::{StringCodec, PAIR_DELIMITER, SEQUENCE_DELIMITER};

/// Parse comma-separated elements into any collection, in order.
pub fn parse_sequence<T, C>(raw: &str) -> Option<C>
where
    T: StringCodec,
    C: FromIterator<T>,
{
    raw.split(SEQUENCE_DELIMITER).map(T::parse).collect()
}

/// Format elements in iteration order, joined by commas.
pub fn format_sequence<'a, T, I>(items: I) -> String
where
    T: StringCodec + 'a,
    I: IntoIterator<Item = &'a T>,
{
    items
        .into_iter()
        .map(StringCodec::format)
        .collect::<Vec<_>>()
        .join(&SEQUENCE_DELIMITER.to_string())
}

/// Parse comma-separated `key:value` entries into any collection of pairs.
///
/// Each entry must split into exactly two parts on the colon. Entries are
/// yielded in order, so maps keep the last value for a repeated key.
pub fn parse_pairs<K, V, C>(raw: &str) -> Option<C>
where
    K: StringCodec,
    V: StringCodec,
    C: FromIterator<(K, V)>,
{
    raw.split(SEQUENCE_DELIMITER).map(parse_pair).collect()
}

fn parse_pair<K: StringCodec, V: StringCodec>(entry: &str) -> Option<(K, V)> {
    let mut parts = entry.split(PAIR_DELIMITER);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(key), Some(value), None) => Some((K::parse(key)?, V::parse(value)?)),
        _ => None,
    }
}

/// Format entries as `key:value`, joined by commas.
pub fn format_pairs<'a, K, V, I>(entries: I) -> String
where
    K: StringCodec + 'a,
    V: StringCodec + 'a,
    I: IntoIterator<Item = (&'a K, &'a V)>,
{
    entries
        .into_iter()
        .map(|(key, value)| format!("{}{}{}", key.format(), PAIR_DELIMITER, value.format()))
        .collect::<Vec<_>>()
        .join(&SEQUENCE_DELIMITER.to_string())
}

// Sequences

impl<T: StringCodec> StringCodec for Vec<T> {
    fn parse(raw: &str) -> Option<Self> {
        parse_sequence(raw)
    }

    fn format(&self) -> String {
        format_sequence(self)
    }
}

impl<T: StringCodec> StringCodec for VecDeque<T> {
    fn parse(raw: &str) -> Option<Self> {
        parse_sequence(raw)
    }

    fn format(&self) -> String {
        format_sequence(self)
    }
}

// Sets

impl<T, S> StringCodec for HashSet<T, S>
where
    T: StringCodec + Eq + Hash,
    S: BuildHasher + Default,
{
    fn parse(raw: &str) -> Option<Self> {
        parse_sequence(raw)
    }

    fn format(&self) -> String {
        format_sequence(self)
    }
}

impl<T: StringCodec + Ord> StringCodec for BTreeSet<T> {
    fn parse(raw: &str) -> Option<Self> {
        parse_sequence(raw)
    }

    fn format(&self) -> String {
        format_sequence(self)
    }
}

// Mappings

impl<K, V, S> StringCodec for HashMap<K, V, S>
where
    K: StringCodec + Eq + Hash,
    V: StringCodec,
    S: BuildHasher + Default,
{
    fn parse(raw: &str) -> Option<Self> {
        parse_pairs(raw)
    }

    fn format(&self) -> String {
        format_pairs(self)
    }
}

impl<K: StringCodec + Ord, V: StringCodec> StringCodec for BTreeMap<K, V> {
    fn parse(raw: &str) -> Option<Self> {
        parse_pairs(raw)
    }

    fn format(&self) -> String {
        format_pairs(self)
    }
}
