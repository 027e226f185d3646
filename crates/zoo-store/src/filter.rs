use zoo_types::{Animal, AnimalQuery};

/// Return the animals matching every criterion in `query`, in input order.
///
/// Each personality trait narrows the result further, so a record must carry
/// all listed traits. `diet`, `species` and `name` compare by exact string
/// equality. An empty query returns the whole slice.
pub fn filter_by_query<'a>(query: &AnimalQuery, animals: &'a [Animal]) -> Vec<&'a Animal> {
    let mut results: Vec<&Animal> = animals.iter().collect();

    for trait_name in &query.personality_traits {
        results.retain(|animal| animal.has_trait(trait_name));
    }
    if let Some(diet) = &query.diet {
        results.retain(|animal| &animal.diet == diet);
    }
    if let Some(species) = &query.species {
        results.retain(|animal| &animal.species == species);
    }
    if let Some(name) = &query.name {
        results.retain(|animal| &animal.name == name);
    }

    tracing::debug!(
        matched = results.len(),
        total = animals.len(),
        "filtered animals"
    );
    results
}
