use tracing::{error, info};
use zoo_types::{Animal, AnimalDraft, AnimalId};

use crate::error::StoreResult;
use crate::traits::CatalogStorage;

/// Assign the next id to `draft`, append it and persist the whole sequence.
///
/// The id is the current length of `animals`, so ids run `"0"`, `"1"`, ...
/// for a catalog that only grows. If `storage` rejects the save, the append
/// is undone and the error returned, leaving `animals` equal to what is
/// persisted.
pub fn create_new_animal<S>(
    draft: AnimalDraft,
    animals: &mut Vec<Animal>,
    storage: &S,
) -> StoreResult<Animal>
where
    S: CatalogStorage + ?Sized,
{
    let id = AnimalId::from_index(animals.len());
    let animal = draft.into_animal(id);
    animals.push(animal.clone());

    if let Err(e) = storage.save(animals) {
        animals.pop();
        error!(id = %animal.id, error = %e, "failed to persist new animal");
        return Err(e);
    }

    info!(id = %animal.id, name = %animal.name, "created animal");
    Ok(animal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::InMemoryStorage;

    fn draft(name: &str) -> AnimalDraft {
        AnimalDraft::new(name, "cat", "omnivore", vec!["Curious".into()]).unwrap()
    }

    #[test]
    fn ids_follow_sequence_length() {
        let storage = InMemoryStorage::new();
        let mut animals = Vec::new();

        let first = create_new_animal(draft("Zoe"), &mut animals, &storage).unwrap();
        let second = create_new_animal(draft("Milo"), &mut animals, &storage).unwrap();

        assert_eq!(first.id.as_str(), "0");
        assert_eq!(second.id.as_str(), "1");
        assert_eq!(animals, vec![first, second]);
    }

    #[test]
    fn every_write_persists_full_sequence() {
        let storage = InMemoryStorage::new();
        let mut animals = Vec::new();

        create_new_animal(draft("Zoe"), &mut animals, &storage).unwrap();
        create_new_animal(draft("Milo"), &mut animals, &storage).unwrap();

        assert_eq!(storage.save_count(), 2);
        assert_eq!(storage.saved(), animals);
    }

    #[test]
    fn failed_persist_rolls_back() {
        let storage = InMemoryStorage::new();
        let mut animals = Vec::new();
        create_new_animal(draft("Zoe"), &mut animals, &storage).unwrap();

        storage.set_failing(true);
        assert!(create_new_animal(draft("Milo"), &mut animals, &storage).is_err());
        assert_eq!(animals.len(), 1);
        assert_eq!(storage.saved(), animals);

        storage.set_failing(false);
        let retried = create_new_animal(draft("Milo"), &mut animals, &storage).unwrap();
        assert_eq!(retried.id.as_str(), "1");
    }

    #[test]
    fn works_through_trait_object() {
        let storage: Box<dyn CatalogStorage> = Box::new(InMemoryStorage::new());
        let mut animals = Vec::new();
        let animal = create_new_animal(draft("Zoe"), &mut animals, storage.as_ref()).unwrap();
        assert_eq!(animal.name, "Zoe");
    }
}
