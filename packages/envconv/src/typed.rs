//! Typed reader and writer extension traits.

use std::any::type_name;

use envconv_codec::StringCodec;
use envconv_store::{EnvReader, EnvWriter, Error};

/// Extension trait for typed reads.
///
/// This trait is automatically implemented for all `EnvReader`
/// implementations.
///
/// # Example
///
/// ```rust
/// use envconv::{MemoryEnv, TypedReader};
///
/// let env: MemoryEnv = [("WORKERS", "4"), ("HOSTS", "a,b")].into_iter().collect();
///
/// assert_eq!(env.read_as::<u32>("WORKERS"), Some(4));
/// assert_eq!(env.read_as::<Vec<String>>("HOSTS").unwrap().len(), 2);
/// assert_eq!(env.read_or("TIMEOUT", 30_u64), 30);
/// ```
pub trait TypedReader: EnvReader {
    /// Read a variable and parse it as `T`.
    ///
    /// Returns `None` if the variable is unset, cannot be read, or does not
    /// parse. The three cases are not distinguished.
    fn read_as<T: StringCodec>(&self, name: &str) -> Option<T> {
        let raw = match self.read(name) {
            Ok(raw) => raw?,
            Err(error) => {
                tracing::debug!(name, %error, "unreadable environment variable");
                return None;
            }
        };

        let parsed = T::parse(&raw);
        if parsed.is_none() {
            tracing::debug!(
                name,
                target_type = type_name::<T>(),
                "environment variable does not parse"
            );
        }
        parsed
    }

    /// Read a variable as `T`, or return `default` when `read_as` would be
    /// `None`.
    fn read_or<T: StringCodec>(&self, name: &str, default: T) -> T {
        self.read_as(name).unwrap_or(default)
    }
}

// Blanket implementation for all readers
impl<R: EnvReader + ?Sized> TypedReader for R {}

/// Extension trait for typed writes.
///
/// This trait is automatically implemented for all `EnvWriter`
/// implementations.
///
/// # Example
///
/// ```rust
/// use std::collections::BTreeMap;
///
/// use envconv::{EnvReader, MemoryEnv, TypedWriter};
///
/// let mut env = MemoryEnv::new();
/// let weights = BTreeMap::from([("a".to_string(), 1_u8), ("b".to_string(), 2)]);
/// env.write_as("WEIGHTS", &weights).unwrap();
///
/// assert_eq!(env.read("WEIGHTS").unwrap().as_deref(), Some("a:1,b:2"));
/// ```
pub trait TypedWriter: EnvWriter {
    /// Format `value` with its codec and store the result.
    fn write_as<T: StringCodec>(&mut self, name: &str, value: &T) -> Result<(), Error> {
        self.write(name, &value.format())
    }

    /// Store `value`, or unset the variable when it is `None`.
    ///
    /// `None` never stores an empty string.
    fn write_opt<T: StringCodec>(&mut self, name: &str, value: Option<&T>) -> Result<(), Error> {
        match value {
            Some(value) => self.write_as(name, value),
            None => self.remove(name),
        }
    }
}

// Blanket implementation for all writers
impl<W: EnvWriter + ?Sized> TypedWriter for W {}
