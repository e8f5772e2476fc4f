//! Codecs for types that already round-trip through a string.
//!
//! A type whose `Display` output is accepted back by its `FromStr` can
//! reuse that pair as its codec. `from_str_codec!` writes the impl.

use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;

use bytes::Bytes;

use crate::StringCodec;

/// Parse with the type's own `FromStr`, discarding the error.
pub fn parse_from_str<T: FromStr>(raw: &str) -> Option<T> {
    raw.parse().ok()
}

/// Format with the type's own `Display`.
pub fn format_display<T: Display + ?Sized>(value: &T) -> String {
    value.to_string()
}

/// Implement `StringCodec` through `FromStr` and `Display`.
///
/// Only use this when `Display` is lossless: whatever it writes, `FromStr`
/// must read back as an equal value.
///
/// ```rust
/// use std::fmt;
/// use std::str::FromStr;
///
/// use envconv_codec::{from_str_codec, StringCodec};
///
/// #[derive(Debug, PartialEq)]
/// struct Region(String);
///
/// impl FromStr for Region {
///     type Err = ();
///
///     fn from_str(s: &str) -> Result<Self, ()> {
///         if s.len() == 2 && s.chars().all(|c| c.is_ascii_lowercase()) {
///             Ok(Region(s.to_string()))
///         } else {
///             Err(())
///         }
///     }
/// }
///
/// impl fmt::Display for Region {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         f.write_str(&self.0)
///     }
/// }
///
/// from_str_codec!(Region);
///
/// assert_eq!(<Region as StringCodec>::parse("eu"), Some(Region("eu".into())));
/// assert_eq!(<Region as StringCodec>::parse("EU"), None);
/// ```
#[macro_export]
macro_rules! from_str_codec {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::StringCodec for $ty {
                fn parse(raw: &str) -> ::core::option::Option<Self> {
                    $crate::parse_from_str(raw)
                }

                fn format(&self) -> ::std::string::String {
                    $crate::format_display(self)
                }
            }
        )+
    };
}

crate::from_str_codec!(
    char,
    std::net::IpAddr,
    std::net::Ipv4Addr,
    std::net::Ipv6Addr,
    std::net::SocketAddr,
    std::num::NonZeroU8,
    std::num::NonZeroU16,
    std::num::NonZeroU32,
    std::num::NonZeroU64,
    std::num::NonZeroU128,
    std::num::NonZeroUsize,
    std::num::NonZeroI8,
    std::num::NonZeroI16,
    std::num::NonZeroI32,
    std::num::NonZeroI64,
    std::num::NonZeroI128,
    std::num::NonZeroIsize,
);

#[cfg(feature = "url")]
crate::from_str_codec!(url::Url);

#[cfg(feature = "uuid")]
crate::from_str_codec!(uuid::Uuid);

impl StringCodec for PathBuf {
    fn parse(raw: &str) -> Option<Self> {
        Some(PathBuf::from(raw))
    }

    fn format(&self) -> String {
        self.to_string_lossy().into_owned()
    }
}

// Environment strings are text, so only UTF-8 buffers survive a round trip.
impl StringCodec for Bytes {
    fn parse(raw: &str) -> Option<Self> {
        Some(Bytes::copy_from_slice(raw.as_bytes()))
    }

    fn format(&self) -> String {
        String::from_utf8_lossy(self).into_owned()
    }
}
