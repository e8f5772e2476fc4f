//! The process environment.

use std::env;

use crate::{validate, EnvReader, EnvWriter, Error};

/// Store backed by the environment of the current process.
///
/// Zero-sized. Every call goes straight to `std::env`, so changes made by
/// other code in the process are visible immediately.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemEnv;

impl SystemEnv {
    pub fn new() -> Self {
        Self
    }
}

impl EnvReader for SystemEnv {
    fn read(&self, name: &str) -> Result<Option<String>, Error> {
        match env::var(name) {
            Ok(value) => Ok(Some(value)),
            Err(env::VarError::NotPresent) => Ok(None),
            Err(env::VarError::NotUnicode(_)) => Err(Error::not_unicode(name)),
        }
    }

    fn vars(&self) -> Vec<(String, String)> {
        env::vars_os()
            .filter_map(|(name, value)| Some((name.into_string().ok()?, value.into_string().ok()?)))
            .collect()
    }
}

impl EnvWriter for SystemEnv {
    fn write(&mut self, name: &str, value: &str) -> Result<(), Error> {
        validate(name, Some(value))?;
        tracing::trace!(name, "setting environment variable");
        env::set_var(name, value);
        Ok(())
    }

    fn remove(&mut self, name: &str) -> Result<(), Error> {
        validate(name, None)?;
        tracing::trace!(name, "removing environment variable");
        env::remove_var(name);
        Ok(())
    }
}
