//! envconv: typed access to environment variables
//!
//! Environment variables are strings. envconv reads and writes them as
//! numbers, booleans, URLs, enums, lists, sets and maps, using the
//! [`StringCodec`] of the requested type.
//!
//! - [`get`] / [`set`] / [`remove`]: the process environment, by name
//! - [`TypedReader`] / [`TypedWriter`]: the same on any store
//! - [`EnvVar`]: a name and a default, read fresh on every access
//!
//! A missing variable and an unparsable one look the same: `None`. Supply a
//! default when a value is required.
//!
//! # Example
//!
//! ```rust
//! use envconv::EnvVar;
//!
//! let port = EnvVar::new("ENVCONV_DOC_PORT", 8000_u16);
//! assert_eq!(port.get(), 8000);
//!
//! envconv::set("ENVCONV_DOC_PORT", &9000_u16).unwrap();
//! assert_eq!(port.get(), 9000);
//!
//! envconv::set_raw("ENVCONV_DOC_PORT", "not a port").unwrap();
//! assert_eq!(port.get(), 8000);
//! assert_eq!(envconv::get::<u16>("ENVCONV_DOC_PORT"), None);
//!
//! envconv::remove("ENVCONV_DOC_PORT").unwrap();
//! ```

mod binding;
mod typed;

pub use binding::EnvVar;
pub use typed::{TypedReader, TypedWriter};

// Re-export the lower layers for convenience
pub use envconv_codec::{
    format_display, format_pairs, format_raw_value, format_sequence, from_str_codec,
    parse_from_str, parse_pairs, parse_raw_value, parse_sequence, raw_value_codec,
    RawRepresentable, StringCodec, PAIR_DELIMITER, SEQUENCE_DELIMITER,
};
pub use envconv_store::{EnvReader, EnvStore, EnvWriter, Error, MemoryEnv, SystemEnv};

/// Raw value of a process environment variable.
///
/// `None` when unset. Values that are not valid Unicode are an error.
pub fn get_raw(name: &str) -> Result<Option<String>, Error> {
    SystemEnv.read(name)
}

/// Set a process environment variable to a raw string.
pub fn set_raw(name: &str, value: &str) -> Result<(), Error> {
    SystemEnv.write(name, value)
}

/// Typed value of a process environment variable.
///
/// `None` when the variable is unset, unreadable or does not parse as `T`.
pub fn get<T: StringCodec>(name: &str) -> Option<T> {
    SystemEnv.read_as(name)
}

/// Typed value of a process environment variable, or `default`.
pub fn get_or<T: StringCodec>(name: &str, default: T) -> T {
    SystemEnv.read_or(name, default)
}

/// Format `value` and store it in the process environment.
pub fn set<T: StringCodec>(name: &str, value: &T) -> Result<(), Error> {
    SystemEnv.write_as(name, value)
}

/// Store `value` in the process environment, or unset the variable on `None`.
pub fn set_opt<T: StringCodec>(name: &str, value: Option<&T>) -> Result<(), Error> {
    SystemEnv.write_opt(name, value)
}

/// Unset a process environment variable.
pub fn remove(name: &str) -> Result<(), Error> {
    SystemEnv.remove(name)
}
