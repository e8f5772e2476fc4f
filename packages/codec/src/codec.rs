//! The StringCodec trait.

/// Separates elements of sequences, sets and mapping entries.
pub const SEQUENCE_DELIMITER: char = ',';

/// Separates a key from its value inside one mapping entry.
pub const PAIR_DELIMITER: char = ':';

/// A type that can be stored in an environment variable.
///
/// Codecs define the canonical two-way mapping between a value and the raw
/// string the operating system stores.
///
/// # Round-Trip
///
/// `parse(&v.format())` must return a value equal to `v` for every value
/// the codec can produce. The other direction is not guaranteed:
/// `"+7"` parses as `7_i32`, which formats as `"7"`.
///
/// # Failure
///
/// `parse` returns `None` for anything that is not a valid representation.
/// It never panics, and there is no partial result.
///
/// # Implementing Custom Codecs
///
/// ```rust
/// use envconv_codec::StringCodec;
///
/// #[derive(Debug, PartialEq)]
/// enum Switch {
///     On,
///     Off,
/// }
///
/// impl StringCodec for Switch {
///     fn parse(raw: &str) -> Option<Self> {
///         match raw {
///             "on" => Some(Switch::On),
///             "off" => Some(Switch::Off),
///             _ => None,
///         }
///     }
///
///     fn format(&self) -> String {
///         match self {
///             Switch::On => "on".to_string(),
///             Switch::Off => "off".to_string(),
///         }
///     }
/// }
///
/// assert_eq!(Switch::parse("on"), Some(Switch::On));
/// assert_eq!(Switch::Off.format(), "off");
/// assert_eq!(Switch::parse("ON"), None);
/// ```
pub trait StringCodec: Sized {
    /// Parse a value from its raw string representation.
    fn parse(raw: &str) -> Option<Self>;

    /// Format the value into its raw string representation.
    fn format(&self) -> String;
}

impl<T: StringCodec> StringCodec for Box<T> {
    fn parse(raw: &str) -> Option<Self> {
        T::parse(raw).map(Box::new)
    }

    fn format(&self) -> String {
        self.as_ref().format()
    }
}
