//! Error types for the store layer.

/// Errors from reading or writing a raw environment variable.
///
/// An unset variable is not an error: reads return `Ok(None)` for that.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The stored value is not valid Unicode.
    #[error("environment variable '{name}' is not valid unicode")]
    NotUnicode { name: String },

    /// The name cannot be stored in a process environment.
    #[error("invalid environment variable name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    /// The value cannot be stored in a process environment.
    #[error("invalid value for environment variable '{name}': {reason}")]
    InvalidValue { name: String, reason: String },
}

impl Error {
    pub fn not_unicode(name: impl Into<String>) -> Self {
        Error::NotUnicode { name: name.into() }
    }

    pub fn invalid_name(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::InvalidName {
            name: name.into(),
            reason: reason.into(),
        }
    }

    pub fn invalid_value(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::InvalidValue {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// The variable name the error is about.
    pub fn name(&self) -> &str {
        match self {
            Error::NotUnicode { name }
            | Error::InvalidName { name, .. }
            | Error::InvalidValue { name, .. } => name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_unicode_display() {
        let e = Error::not_unicode("PATH");
        assert_eq!(
            e.to_string(),
            "environment variable 'PATH' is not valid unicode"
        );
    }

    #[test]
    fn invalid_name_display() {
        let e = Error::invalid_name("A=B", "name contains '='");
        let display = e.to_string();
        assert!(display.contains("invalid environment variable name"));
        assert!(display.contains("A=B"));
        assert!(display.contains("contains '='"));
    }

    #[test]
    fn invalid_value_display() {
        let e = Error::invalid_value("TOKEN", "value contains a NUL byte");
        let display = e.to_string();
        assert!(display.contains("TOKEN"));
        assert!(display.contains("NUL"));
    }

    #[test]
    fn name_accessor() {
        assert_eq!(Error::not_unicode("A").name(), "A");
        assert_eq!(Error::invalid_name("B", "x").name(), "B");
        assert_eq!(Error::invalid_value("C", "y").name(), "C");
    }

    #[test]
    fn is_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
        assert_error(&Error::not_unicode("A"));
    }
}
