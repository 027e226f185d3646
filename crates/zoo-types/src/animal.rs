use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ValidationError;

/// Identifier of a stored animal.
///
/// Ids are assigned by the store from the insertion index (`"0"`, `"1"`, ...)
/// and never taken from client input.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnimalId(String);

impl AnimalId {
    /// Id for the record stored at `index` in the catalog sequence.
    pub fn from_index(index: usize) -> Self {
        Self(index.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AnimalId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for AnimalId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl PartialEq<str> for AnimalId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl fmt::Debug for AnimalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AnimalId({})", self.0)
    }
}

impl fmt::Display for AnimalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A catalog record as stored and served.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Animal {
    pub id: AnimalId,
    pub name: String,
    pub species: String,
    pub diet: String,
    /// Stored as submitted. Only string items ever match a trait filter.
    #[serde(default)]
    pub personality_traits: Vec<Value>,
}

impl Animal {
    /// Whether this animal lists `trait_name` among its personality traits.
    pub fn has_trait(&self, trait_name: &str) -> bool {
        self.personality_traits
            .iter()
            .any(|t| matches!(t, Value::String(s) if s == trait_name))
    }

    /// Personality traits rendered as text, strings unquoted.
    pub fn trait_labels(&self) -> Vec<String> {
        self.personality_traits
            .iter()
            .map(|t| match t {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect()
    }
}

/// A candidate record that passed validation but has no id yet.
///
/// The only ways to obtain one are [`AnimalDraft::new`] and
/// [`AnimalDraft::from_value`], so holding a draft means the checks ran.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnimalDraft {
    name: String,
    species: String,
    diet: String,
    personality_traits: Vec<Value>,
}

impl AnimalDraft {
    /// Build a draft from typed parts.
    pub fn new(
        name: impl Into<String>,
        species: impl Into<String>,
        diet: impl Into<String>,
        personality_traits: Vec<String>,
    ) -> Result<Self, ValidationError> {
        let name = non_empty("name", name.into())?;
        let species = non_empty("species", species.into())?;
        let diet = non_empty("diet", diet.into())?;
        Ok(Self {
            name,
            species,
            diet,
            personality_traits: personality_traits.into_iter().map(Value::String).collect(),
        })
    }

    /// Build a draft from an untyped request body.
    ///
    /// Fields are checked in the order `name`, `species`, `diet`,
    /// `personalityTraits`; the first failure is returned. Trait items are
    /// kept whatever their JSON type. Unknown keys, including a
    /// client-supplied `id`, are dropped.
    pub fn from_value(value: &Value) -> Result<Self, ValidationError> {
        let obj = value.as_object().ok_or(ValidationError::NotAnObject)?;
        let name = required_string(obj, "name")?;
        let species = required_string(obj, "species")?;
        let diet = required_string(obj, "diet")?;
        let personality_traits = required_array(obj, "personalityTraits")?;
        Ok(Self {
            name,
            species,
            diet,
            personality_traits,
        })
    }

    /// Turn the draft into a stored record under `id`.
    pub fn into_animal(self, id: AnimalId) -> Animal {
        Animal {
            id,
            name: self.name,
            species: self.species,
            diet: self.diet,
            personality_traits: self.personality_traits,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn species(&self) -> &str {
        &self.species
    }

    pub fn diet(&self) -> &str {
        &self.diet
    }

    pub fn personality_traits(&self) -> &[Value] {
        &self.personality_traits
    }
}

/// Pass/fail check over an untyped candidate.
pub fn validate_animal(value: &Value) -> bool {
    AnimalDraft::from_value(value).is_ok()
}

fn non_empty(field: &'static str, value: String) -> Result<String, ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    Ok(value)
}

fn required_string(
    obj: &Map<String, Value>,
    field: &'static str,
) -> Result<String, ValidationError> {
    match obj.get(field) {
        None | Some(Value::Null) => Err(ValidationError::MissingField(field)),
        Some(Value::String(s)) => non_empty(field, s.clone()),
        Some(_) => Err(ValidationError::WrongType {
            field,
            expected: "a string",
        }),
    }
}

fn required_array(
    obj: &Map<String, Value>,
    field: &'static str,
) -> Result<Vec<Value>, ValidationError> {
    match obj.get(field) {
        None | Some(Value::Null) => Err(ValidationError::MissingField(field)),
        Some(Value::Array(items)) => Ok(items.clone()),
        Some(_) => Err(ValidationError::WrongType {
            field,
            expected: "an array",
        }),
    }
}
