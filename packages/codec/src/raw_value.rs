//! Codecs for types backed by a raw value.
//!
//! An enum whose cases map to values of another codec type (`u8`, `String`,
//! ...) gets its codec by going through that raw value. The string is parsed
//! as the raw type first, then matched against the cases.

use crate::StringCodec;

/// A type with a one-to-one mapping onto some subset of a raw value type.
///
/// # Example
///
/// ```rust
/// use envconv_codec::{raw_value_codec, RawRepresentable, StringCodec};
///
/// #[derive(Debug, PartialEq)]
/// enum Level {
///     Low = 1,
///     High = 2,
/// }
///
/// impl RawRepresentable for Level {
///     type Raw = u8;
///
///     fn from_raw(raw: u8) -> Option<Self> {
///         match raw {
///             1 => Some(Level::Low),
///             2 => Some(Level::High),
///             _ => None,
///         }
///     }
///
///     fn to_raw(&self) -> u8 {
///         match self {
///             Level::Low => 1,
///             Level::High => 2,
///         }
///     }
/// }
///
/// raw_value_codec!(Level);
///
/// assert_eq!(Level::parse("2"), Some(Level::High));
/// assert_eq!(Level::parse("3"), None);
/// assert_eq!(Level::Low.format(), "1");
/// ```
pub trait RawRepresentable: Sized {
    /// The type the cases are backed by.
    type Raw: StringCodec;

    /// The case for a raw value, if there is one.
    fn from_raw(raw: Self::Raw) -> Option<Self>;

    /// The raw value of this case.
    fn to_raw(&self) -> Self::Raw;
}

/// Parse the raw value with its own codec, then map it to a case.
///
/// Fails if the raw parse fails or no case has that raw value.
pub fn parse_raw_value<T: RawRepresentable>(raw: &str) -> Option<T> {
    let value = <T::Raw as StringCodec>::parse(raw)?;
    T::from_raw(value)
}

/// Format the case's raw value with the raw type's codec.
pub fn format_raw_value<T: RawRepresentable>(value: &T) -> String {
    value.to_raw().format()
}

/// Implement `StringCodec` for `RawRepresentable` types.
///
/// A type that wants different strings (case names instead of numbers,
/// say) implements `StringCodec` itself instead of using this macro.
#[macro_export]
macro_rules! raw_value_codec {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::StringCodec for $ty {
                fn parse(raw: &str) -> ::core::option::Option<Self> {
                    $crate::parse_raw_value(raw)
                }

                fn format(&self) -> ::std::string::String {
                    $crate::format_raw_value(self)
                }
            }
        )+
    };
}
