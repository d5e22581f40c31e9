//! Draft — in-progress, unsaved form input for creating one record.

use serde_json::{Map, Value};

use crate::error::{ValidationError, Violation};
use crate::resource::ResourceDefinition;

/// Mutable form input for one new record.
///
/// A draft holds exactly the fields its resource definition declares, in
/// definition order. Choice fields start at their default option, everything
/// else starts empty. A draft is owned by a single screen and is reset only
/// after a successful submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    definition: &'static ResourceDefinition,
    values: Vec<String>,
}

impl Draft {
    /// Create an empty draft for the given resource.
    #[must_use]
    pub fn new(definition: &'static ResourceDefinition) -> Self {
        let values = definition
            .fields
            .iter()
            .map(|field| field.kind.initial_value().to_string())
            .collect();
        Self { definition, values }
    }

    /// The resource definition this draft belongs to.
    #[must_use]
    pub const fn definition(&self) -> &'static ResourceDefinition {
        self.definition
    }

    /// Current value of one field.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.position(key).map(|i| self.values[i].as_str())
    }

    /// Overwrite one field's value.
    ///
    /// # Errors
    ///
    /// Returns [`Violation::UnknownField`] when `key` is not part of the
    /// resource definition.
    pub fn set(&mut self, key: &str, value: impl Into<String>) -> Result<(), ValidationError> {
        let Some(i) = self.position(key) else {
            return Err(ValidationError::single(Violation::UnknownField {
                key: key.to_string(),
            }));
        };
        self.values[i] = value.into();
        Ok(())
    }

    /// Restore every field to its initial value.
    pub fn reset(&mut self) {
        for (field, value) in self.definition.fields.iter().zip(&mut self.values) {
            *value = field.kind.initial_value().to_string();
        }
    }

    /// Whether every field still holds its initial value.
    #[must_use]
    pub fn is_pristine(&self) -> bool {
        self.definition
            .fields
            .iter()
            .zip(&self.values)
            .all(|(field, value)| value == field.kind.initial_value())
    }

    /// All violated constraints, in field order.
    #[must_use]
    pub fn violations(&self) -> Vec<Violation> {
        self.definition
            .fields
            .iter()
            .zip(&self.values)
            .filter_map(|(field, value)| field.check(value))
            .collect()
    }

    /// Check every field against its constraints.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] listing every violated constraint.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let violations = self.violations();
        if violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new(violations))
        }
    }

    /// The JSON object sent on create: every field, values as entered.
    #[must_use]
    pub fn payload(&self) -> Value {
        let mut object = Map::new();
        for (field, value) in self.definition.fields.iter().zip(&self.values) {
            object.insert(field.key.to_string(), Value::String(value.clone()));
        }
        Value::Object(object)
    }

    /// Fields and their current values, in definition order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.definition
            .fields
            .iter()
            .zip(&self.values)
            .map(|(field, value)| (field.key, value.as_str()))
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.definition.fields.iter().position(|field| field.key == key)
    }
}
