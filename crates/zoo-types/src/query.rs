//! Filter criteria for listing animals.
//!
//! Every criterion is optional. A query with no criteria matches every
//! record. Empty-string values are treated as absent.

/// Criteria applied with logical AND across fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AnimalQuery {
    /// Every listed trait must be present on a matching record.
    pub personality_traits: Vec<String>,
    pub diet: Option<String>,
    pub species: Option<String>,
    pub name: Option<String>,
}

impl AnimalQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build criteria from decoded URL query pairs.
    ///
    /// `personalityTraits` and `personalityTraits[]` accumulate in order. A
    /// repeated scalar key (`?name=a&name=b`) keeps its last non-empty value.
    /// Unknown keys are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            let value: String = value.into();
            if value.is_empty() {
                continue;
            }
            match key.as_ref() {
                "personalityTraits" | "personalityTraits[]" => query.personality_traits.push(value),
                "diet" => query.diet = Some(value),
                "species" => query.species = Some(value),
                "name" => query.name = Some(value),
                _ => {}
            }
        }
        query
    }

    pub fn with_trait(mut self, trait_name: impl Into<String>) -> Self {
        let trait_name = trait_name.into();
        if !trait_name.is_empty() {
            self.personality_traits.push(trait_name);
        }
        self
    }

    pub fn with_diet(mut self, diet: impl Into<String>) -> Self {
        self.diet = non_empty(diet.into());
        self
    }

    pub fn with_species(mut self, species: impl Into<String>) -> Self {
        self.species = non_empty(species.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = non_empty(name.into());
        self
    }

    /// True when no criterion is set, i.e. the query matches everything.
    pub fn is_empty(&self) -> bool {
        self.personality_traits.is_empty()
            && self.diet.is_none()
            && self.species.is_none()
            && self.name.is_none()
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
