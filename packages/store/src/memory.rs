//! In-memory store.

use std::collections::HashMap;

use crate::{validate, EnvReader, EnvWriter, Error};

/// A private environment held in a `HashMap`.
///
/// Applies the same name and value rules as [`SystemEnv`](crate::SystemEnv),
/// so code tested against it behaves the same against the real process
/// environment, without touching global state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryEnv {
    vars: HashMap<String, String>,
}

impl MemoryEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of variables currently set.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Unset everything.
    pub fn clear(&mut self) {
        self.vars.clear();
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MemoryEnv {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

impl EnvReader for MemoryEnv {
    fn read(&self, name: &str) -> Result<Option<String>, Error> {
        Ok(self.vars.get(name).cloned())
    }

    fn vars(&self) -> Vec<(String, String)> {
        self.vars
            .iter()
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect()
    }
}

impl EnvWriter for MemoryEnv {
    fn write(&mut self, name: &str, value: &str) -> Result<(), Error> {
        validate(name, Some(value))?;
        tracing::trace!(name, "setting in-memory variable");
        self.vars.insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, name: &str) -> Result<(), Error> {
        validate(name, None)?;
        tracing::trace!(name, "removing in-memory variable");
        self.vars.remove(name);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let env = MemoryEnv::new();
        assert!(env.is_empty());
        assert_eq!(env.read("HOME").unwrap(), None);
        assert!(env.vars().is_empty());
    }

    #[test]
    fn from_pairs() {
        let env: MemoryEnv = [("HOST", "example.com"), ("PORT", "80")].into_iter().collect();
        assert_eq!(env.len(), 2);
        assert_eq!(env.read("PORT").unwrap().as_deref(), Some("80"));
    }

    #[test]
    fn overwrite_and_remove() {
        let mut env = MemoryEnv::new();
        env.write("MODE", "fast").unwrap();
        env.write("MODE", "slow").unwrap();
        assert_eq!(env.read("MODE").unwrap().as_deref(), Some("slow"));
        assert_eq!(env.len(), 1);

        env.remove("MODE").unwrap();
        assert_eq!(env.read("MODE").unwrap(), None);
        assert!(env.remove("MODE").is_ok());
    }

    #[test]
    fn empty_value_is_stored() {
        let mut env = MemoryEnv::new();
        env.write("EMPTY", "").unwrap();
        assert_eq!(env.read("EMPTY").unwrap().as_deref(), Some(""));
    }

    #[test]
    fn same_rules_as_system() {
        let mut env = MemoryEnv::new();
        assert!(matches!(env.write("", "x"), Err(Error::InvalidName { .. })));
        assert!(matches!(env.write("A=B", "x"), Err(Error::InvalidName { .. })));
        assert!(matches!(env.write("A", "\0"), Err(Error::InvalidValue { .. })));
        assert!(env.is_empty());
    }

    #[test]
    fn clear_unsets_everything() {
        let mut env: MemoryEnv = [("A", "1"), ("B", "2")].into_iter().collect();
        env.clear();
        assert!(env.is_empty());
    }
}
