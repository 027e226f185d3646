use std::sync::RwLock;

use zoo_types::{Animal, AnimalDraft, AnimalQuery};

use crate::error::StoreResult;
use crate::filter::filter_by_query;
use crate::lookup::find_by_id;
use crate::traits::CatalogStorage;
use crate::writer::create_new_animal;

/// The live catalog: the in-memory sequence plus the storage it mirrors.
///
/// Reads share the lock. [`Catalog::create`] holds the write lock from id
/// assignment through persistence, so there is at most one writer and no two
/// creations can observe the same length.
pub struct Catalog {
    animals: RwLock<Vec<Animal>>,
    storage: Box<dyn CatalogStorage>,
}

impl Catalog {
    /// Load the persisted sequence from `storage` and take ownership of both.
    pub fn open<S>(storage: S) -> StoreResult<Self>
    where
        S: CatalogStorage + 'static,
    {
        let animals = storage.load()?;
        tracing::info!(count = animals.len(), "catalog opened");
        Ok(Self {
            animals: RwLock::new(animals),
            storage: Box::new(storage),
        })
    }

    /// Animals matching `query`, in catalog order.
    pub fn list(&self, query: &AnimalQuery) -> Vec<Animal> {
        let animals = self.animals.read().expect("lock poisoned");
        let matched = filter_by_query(query, &animals);
        matched.into_iter().cloned().collect()
    }

    /// The animal with the given id, if any.
    pub fn get(&self, id: &str) -> Option<Animal> {
        let animals = self.animals.read().expect("lock poisoned");
        find_by_id(id, &animals).cloned()
    }

    /// Store a validated draft and return it with its assigned id.
    pub fn create(&self, draft: AnimalDraft) -> StoreResult<Animal> {
        let mut animals = self.animals.write().expect("lock poisoned");
        create_new_animal(draft, &mut animals, self.storage.as_ref())
    }

    /// Full copy of the current sequence.
    pub fn snapshot(&self) -> Vec<Animal> {
        self.animals.read().expect("lock poisoned").clone()
    }

    pub fn len(&self) -> usize {
        self.animals.read().expect("lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Debug for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Catalog")
            .field("animal_count", &self.len())
            .finish()
    }
}
