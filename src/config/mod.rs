//! Instrument configuration: built-in tables, definition-file loading, and
//! structural validation.

pub mod instruments;
mod loader;
pub mod validation;

pub use instruments::{builtin, builtins, GARDNER24, GARDNER24_ID, GARDNER41, GARDNER41_ID, HOLLAND, HOLLAND_ID};
pub use loader::{load_instruments, parse_instruments, resolve_instrument};
pub use validation::validate;
