//! envconv codecs: the string layer
//!
//! Every environment variable is a string. This layer defines how typed
//! values get in and out of that string:
//! - `StringCodec`: Parse a value from a string, format it back
//! - Scalars: integers, floats, booleans and `String`
//! - Self-describing types: anything with a lossless `FromStr`/`Display` pair
//! - Raw-value types: enums backed by a value that already has a codec
//! - Containers: sequences, sets and mappings built from their element codecs
//!
//! Failure is always `None`. There is no error type at this layer.
//!
//! # Example
//!
//! ```rust
//! use envconv_codec::StringCodec;
//!
//! let ports = <Vec<u16> as StringCodec>::parse("80,443").unwrap();
//! assert_eq!(ports, vec![80, 443]);
//! assert_eq!(ports.format(), "80,443");
//!
//! assert!(<Vec<u16> as StringCodec>::parse("80,https").is_none());
//! ```

mod codec;
mod collections;
mod raw_value;
mod scalar;
mod self_describing;

pub use codec::{StringCodec, PAIR_DELIMITER, SEQUENCE_DELIMITER};
pub use collections::{format_pairs, format_sequence, parse_pairs, parse_sequence};
pub use raw_value::{format_raw_value, parse_raw_value, RawRepresentable};
pub use self_describing::{format_display, parse_from_str};

pub use bytes::Bytes;
