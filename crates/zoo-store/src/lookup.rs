use zoo_types::Animal;

/// First animal whose id equals `id`, in sequence order.
pub fn find_by_id<'a>(id: &str, animals: &'a [Animal]) -> Option<&'a Animal> {
    animals.iter().find(|animal| animal.id == *id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use zoo_types::AnimalId;

    fn animal(id: &str, name: &str) -> Animal {
        Animal {
            id: AnimalId::from(id),
            name: name.into(),
            species: "cat".into(),
            diet: "omnivore".into(),
            personality_traits: vec![],
        }
    }

    #[test]
    fn finds_matching_record() {
        let animals = vec![animal("0", "Zoe"), animal("1", "Rex")];
        assert_eq!(find_by_id("1", &animals).map(|a| a.name.as_str()), Some("Rex"));
    }

    #[test]
    fn absent_id_is_none() {
        let animals = vec![animal("0", "Zoe"), animal("1", "Rex")];
        assert!(find_by_id("5", &animals).is_none());
        assert!(find_by_id("", &animals).is_none());
    }

    #[test]
    fn first_duplicate_wins() {
        let animals = vec![animal("0", "Zoe"), animal("0", "Shadow")];
        assert_eq!(find_by_id("0", &animals).map(|a| a.name.as_str()), Some("Zoe"));
    }
}
