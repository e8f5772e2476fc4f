//! envconv stores: raw name/value access
//!
//! This is the bottom of the envconv stack. Everything at this level is a
//! plain string: no parsing, no types, no defaults.
//!
//! - `EnvReader` / `EnvWriter`: get, set and unset by name
//! - `SystemEnv`: the environment of the current process
//! - `MemoryEnv`: a private map with the same rules, for tests and sandboxes
//!
//! # Example
//!
//! ```rust
//! use envconv_store::{EnvReader, EnvWriter, MemoryEnv};
//!
//! let mut env = MemoryEnv::new();
//! env.write("HOST", "example.com").unwrap();
//! assert_eq!(env.read("HOST").unwrap().as_deref(), Some("example.com"));
//!
//! env.remove("HOST").unwrap();
//! assert_eq!(env.read("HOST").unwrap(), None);
//! ```
//!
//! # Concurrency
//!
//! The process environment is shared by every thread and is not
//! synchronized by this crate. Concurrent writers race, and the last write
//! wins. Read-modify-write sequences need external locking.

mod error;
mod memory;
mod system;
mod traits;

pub use error::Error;
pub use memory::MemoryEnv;
pub use system::SystemEnv;
pub use traits::{EnvReader, EnvStore, EnvWriter};

/// Check that a name/value pair can be stored in a process environment.
///
/// Only the platform's hard limits are enforced. Names are otherwise free:
/// lower case, dots and leading digits are all accepted.
pub fn validate(name: &str, value: Option<&str>) -> Result<(), Error> {
    if name.is_empty() {
        return Err(Error::invalid_name(name, "name is empty"));
    }
    if name.contains('=') {
        return Err(Error::invalid_name(name, "name contains '='"));
    }
    if name.contains('\0') {
        return Err(Error::invalid_name(name, "name contains a NUL byte"));
    }
    if value.is_some_and(|v| v.contains('\0')) {
        return Err(Error::invalid_value(name, "value contains a NUL byte"));
    }
    Ok(())
}
