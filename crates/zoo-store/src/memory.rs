use std::io;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::RwLock;

use zoo_types::Animal;

use crate::error::{StoreError, StoreResult};
use crate::traits::CatalogStorage;

/// Storage that keeps the last saved sequence in memory.
///
/// Intended for tests and embedding. Saves can be switched to fail so
/// callers can exercise their persistence-failure paths.
pub struct InMemoryStorage {
    animals: RwLock<Vec<Animal>>,
    saves: AtomicUsize,
    failing: AtomicBool,
}

impl InMemoryStorage {
    /// Create an empty storage.
    pub fn new() -> Self {
        Self::with_animals(Vec::new())
    }

    /// Create a storage whose first `load` returns `animals`.
    pub fn with_animals(animals: Vec<Animal>) -> Self {
        Self {
            animals: RwLock::new(animals),
            saves: AtomicUsize::new(0),
            failing: AtomicBool::new(false),
        }
    }

    /// Snapshot of the currently persisted sequence.
    pub fn saved(&self) -> Vec<Animal> {
        self.animals.read().expect("lock poisoned").clone()
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    /// Make every subsequent `save` fail (or succeed again).
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogStorage for InMemoryStorage {
    fn load(&self) -> StoreResult<Vec<Animal>> {
        Ok(self.saved())
    }

    fn save(&self, animals: &[Animal]) -> StoreResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(StoreError::Io(io::Error::new(
                io::ErrorKind::Other,
                "in-memory storage set to fail",
            )));
        }
        *self.animals.write().expect("lock poisoned") = animals.to_vec();
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

impl std::fmt::Debug for InMemoryStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryStorage")
            .field("animal_count", &self.saved().len())
            .field("save_count", &self.save_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zoo_types::AnimalId;

    fn animal(index: usize) -> Animal {
        Animal {
            id: AnimalId::from_index(index),
            name: format!("animal-{index}"),
            species: "fox".into(),
            diet: "carnivore".into(),
            personality_traits: vec![],
        }
    }

    #[test]
    fn load_returns_seed() {
        let storage = InMemoryStorage::with_animals(vec![animal(0)]);
        assert_eq!(storage.load().unwrap(), vec![animal(0)]);
        assert_eq!(storage.save_count(), 0);
    }

    #[test]
    fn save_overwrites_and_counts() {
        let storage = InMemoryStorage::new();
        storage.save(&[animal(0), animal(1)]).unwrap();
        storage.save(&[animal(0)]).unwrap();
        assert_eq!(storage.saved(), vec![animal(0)]);
        assert_eq!(storage.save_count(), 2);
    }

    #[test]
    fn failing_save_keeps_previous() {
        let storage = InMemoryStorage::with_animals(vec![animal(0)]);
        storage.set_failing(true);
        assert!(matches!(storage.save(&[]), Err(StoreError::Io(_))));
        assert_eq!(storage.saved(), vec![animal(0)]);

        storage.set_failing(false);
        storage.save(&[]).unwrap();
        assert!(storage.saved().is_empty());
    }

    #[test]
    fn debug_format() {
        let storage = InMemoryStorage::new();
        let debug = format!("{storage:?}");
        assert!(debug.contains("InMemoryStorage"));
        assert!(debug.contains("animal_count"));
    }
}
