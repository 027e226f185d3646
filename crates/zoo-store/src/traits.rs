use zoo_types::Animal;

use crate::error::StoreResult;

/// Durable home of the catalog sequence.
///
/// Implementations must satisfy:
/// - `save` replaces the whole persisted sequence; there is no append.
/// - After a successful `save(s)`, `load()` returns a sequence equal to `s`.
/// - A failed `save` leaves the previously persisted sequence readable.
pub trait CatalogStorage: Send + Sync {
    /// Read the full persisted sequence, in stored order.
    fn load(&self) -> StoreResult<Vec<Animal>>;

    /// Overwrite the persisted sequence with `animals`.
    fn save(&self, animals: &[Animal]) -> StoreResult<()>;
}
