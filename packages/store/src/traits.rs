//! Core traits for raw environment access.

use crate::Error;

/// Read raw values by name.
///
/// Values are returned exactly as stored. No trimming, no parsing.
///
/// # Object Safety
///
/// This trait is object-safe: you can use `&dyn EnvReader`.
pub trait EnvReader {
    /// Read the raw value of a variable.
    ///
    /// # Returns
    ///
    /// * `Ok(None)` - The variable is not set.
    /// * `Ok(Some(value))` - The stored value. May be empty.
    /// * `Err(Error)` - The value exists but cannot be read as a string.
    fn read(&self, name: &str) -> Result<Option<String>, Error>;

    /// Snapshot of every readable variable.
    ///
    /// Order is unspecified.
    fn vars(&self) -> Vec<(String, String)>;
}

/// Write raw values by name.
///
/// # Object Safety
///
/// This trait is object-safe: you can use `&mut dyn EnvWriter`.
pub trait EnvWriter {
    /// Set a variable, creating or overwriting it.
    fn write(&mut self, name: &str, value: &str) -> Result<(), Error>;

    /// Unset a variable. Removing a variable that is not set succeeds.
    fn remove(&mut self, name: &str) -> Result<(), Error>;
}

/// Combined read/write access.
pub trait EnvStore: EnvReader + EnvWriter {}
impl<T: EnvReader + EnvWriter> EnvStore for T {}

// Blanket implementations for references and boxes

impl<T: EnvReader + ?Sized> EnvReader for &T {
    fn read(&self, name: &str) -> Result<Option<String>, Error> {
        (**self).read(name)
    }

    fn vars(&self) -> Vec<(String, String)> {
        (**self).vars()
    }
}

impl<T: EnvReader + ?Sized> EnvReader for &mut T {
    fn read(&self, name: &str) -> Result<Option<String>, Error> {
        (**self).read(name)
    }

    fn vars(&self) -> Vec<(String, String)> {
        (**self).vars()
    }
}

impl<T: EnvWriter + ?Sized> EnvWriter for &mut T {
    fn write(&mut self, name: &str, value: &str) -> Result<(), Error> {
        (**self).write(name, value)
    }

    fn remove(&mut self, name: &str) -> Result<(), Error> {
        (**self).remove(name)
    }
}

impl<T: EnvReader + ?Sized> EnvReader for Box<T> {
    fn read(&self, name: &str) -> Result<Option<String>, Error> {
        self.as_ref().read(name)
    }

    fn vars(&self) -> Vec<(String, String)> {
        self.as_ref().vars()
    }
}

impl<T: EnvWriter + ?Sized> EnvWriter for Box<T> {
    fn write(&mut self, name: &str, value: &str) -> Result<(), Error> {
        self.as_mut().write(name, value)
    }

    fn remove(&mut self, name: &str) -> Result<(), Error> {
        self.as_mut().remove(name)
    }
}
