//! Record store for the zoo catalog.
//!
//! Animals live in an ordered in-memory sequence loaded once from a JSON
//! document shaped `{ "animals": [...] }`. Reads never touch the disk. Every
//! creation rewrites the whole document before it returns.
//!
//! # Operations
//!
//! - [`filter_by_query`] -- stable AND-filter over a record slice
//! - [`find_by_id`] -- first record with a matching id
//! - [`create_new_animal`] -- assign id, append, persist
//!
//! # Storage Backends
//!
//! All backends implement the [`CatalogStorage`] trait:
//!
//! - [`JsonFileStorage`] -- pretty-printed JSON file, replaced atomically
//! - [`InMemoryStorage`] -- keeps the last saved snapshot, for tests
//!
//! # Design Rules
//!
//! 1. Ids are assigned by the store from the current length, never by clients.
//! 2. In-memory and persisted sequences are equal after every call to
//!    [`create_new_animal`], including failed ones.
//! 3. [`Catalog`] serializes writers: count, assign, append and persist run
//!    under one write lock.

pub mod catalog;
pub mod error;
pub mod file;
pub mod filter;
pub mod lookup;
pub mod memory;
pub mod traits;
pub mod writer;

pub use catalog::Catalog;
pub use error::{StoreError, StoreResult};
pub use file::{CatalogDocument, JsonFileStorage};
pub use filter::filter_by_query;
pub use lookup::find_by_id;
pub use memory::InMemoryStorage;
pub use traits::CatalogStorage;
pub use writer::create_new_animal;
