//! Named environment variables with defaults.

use std::any::type_name;
use std::borrow::Cow;
use std::fmt;

use envconv_codec::StringCodec;
use envconv_store::{EnvReader, EnvWriter, Error, SystemEnv};

/// An environment variable name bound to a type and a default value.
///
/// Nothing is cached: every `get` reads the environment and parses again,
/// and every `set` writes through immediately.
///
/// - Unset or unparsable reads return the default. The parse failure is
///   not reported.
/// - Writes format the value with its codec.
/// - For `EnvVar<Option<U>>`, writing `None` unsets the variable.
///
/// # Example
///
/// ```rust
/// use envconv::{EnvReader, EnvVar, MemoryEnv};
///
/// struct ServerSettings;
///
/// impl ServerSettings {
///     fn port() -> EnvVar<u16> {
///         EnvVar::new("PORT", 8000)
///     }
///
///     fn host() -> EnvVar<Option<String>> {
///         EnvVar::optional("HOST")
///     }
/// }
///
/// let mut env = MemoryEnv::new();
/// assert_eq!(ServerSettings::port().get_in(&env), 8000);
/// assert_eq!(ServerSettings::host().get_in(&env), None);
///
/// ServerSettings::host().set_in(&mut env, &Some("example.com".into())).unwrap();
/// assert_eq!(env.read("HOST").unwrap().as_deref(), Some("example.com"));
///
/// ServerSettings::host().set_in(&mut env, &None).unwrap();
/// assert_eq!(env.read("HOST").unwrap(), None);
/// ```
#[derive(Clone)]
pub struct EnvVar<T> {
    name: Cow<'static, str>,
    default: T,
    parse: fn(&str) -> Option<T>,
    format: fn(&T) -> Option<String>,
}

impl<T: fmt::Debug> fmt::Debug for EnvVar<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvVar")
            .field("name", &self.name)
            .field("default", &self.default)
            .finish()
    }
}

impl<T: StringCodec> EnvVar<T> {
    /// Bind `name` to `T`'s codec, falling back to `default`.
    pub fn new(name: impl Into<Cow<'static, str>>, default: T) -> Self {
        Self {
            name: name.into(),
            default,
            parse: T::parse,
            format: format_value::<T>,
        }
    }
}

impl<U: StringCodec> EnvVar<Option<U>> {
    /// Bind `name` to an optional `U` with no default.
    pub fn optional(name: impl Into<Cow<'static, str>>) -> Self {
        Self::optional_or(name, None)
    }

    /// Bind `name` to an optional `U`, falling back to `default`.
    pub fn optional_or(name: impl Into<Cow<'static, str>>, default: Option<U>) -> Self {
        Self {
            name: name.into(),
            default,
            parse: parse_some::<U>,
            format: format_option::<U>,
        }
    }
}

impl<T> EnvVar<T> {
    /// The variable name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The value reads fall back to.
    pub fn default_value(&self) -> &T {
        &self.default
    }

    /// Write `value` to `env`, or unset the variable when the value has no
    /// string form (a `None` optional).
    pub fn set_in<W: EnvWriter + ?Sized>(&self, env: &mut W, value: &T) -> Result<(), Error> {
        match (self.format)(value) {
            Some(raw) => env.write(&self.name, &raw),
            None => env.remove(&self.name),
        }
    }

    /// Write `value` to the process environment.
    pub fn set(&self, value: &T) -> Result<(), Error> {
        self.set_in(&mut SystemEnv, value)
    }
}

impl<T: Clone> EnvVar<T> {
    /// Read from `env`, falling back to the default.
    pub fn get_in<R: EnvReader + ?Sized>(&self, env: &R) -> T {
        let raw = match env.read(&self.name) {
            Ok(Some(raw)) => raw,
            Ok(None) => return self.default.clone(),
            Err(error) => {
                tracing::debug!(name = %self.name, %error, "using default for unreadable variable");
                return self.default.clone();
            }
        };

        match (self.parse)(&raw) {
            Some(value) => value,
            None => {
                tracing::debug!(
                    name = %self.name,
                    target_type = type_name::<T>(),
                    "using default for unparsable variable"
                );
                self.default.clone()
            }
        }
    }

    /// Read from the process environment, falling back to the default.
    pub fn get(&self) -> T {
        self.get_in(&SystemEnv)
    }
}

fn format_value<T: StringCodec>(value: &T) -> Option<String> {
    Some(value.format())
}

fn parse_some<U: StringCodec>(raw: &str) -> Option<Option<U>> {
    U::parse(raw).map(Some)
}

fn format_option<U: StringCodec>(value: &Option<U>) -> Option<String> {
    value.as_ref().map(StringCodec::format)
}
