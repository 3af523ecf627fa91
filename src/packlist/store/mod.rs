//! # Storage Layer
//!
//! The [`DataStore`] trait is the persistence adapter for the packing list: one
//! named slot holding the whole collection, read once at startup and rewritten after
//! every mutation.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, a JSON array in `<dir>/<slot>.json`
//! - [`memory::InMemoryStore`]: for tests; can be told to fail loads or saves
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── packing-list.json   # [{"id":..,"description":..,"quantity":..,"packed":..}, ...]
//! └── config.json         # PackConfig
//! ```
//!
//! Items are written in canonical (insertion) order and read back verbatim.

use crate::error::Result;
use crate::model::Collection;

pub mod fs;
pub mod memory;

pub trait DataStore {
    /// Read the stored collection. A slot that was never written loads as empty;
    /// unreadable or malformed data is an error.
    fn load(&self) -> Result<Collection>;

    /// Replace the stored collection.
    fn save(&mut self, collection: &Collection) -> Result<()>;
}
