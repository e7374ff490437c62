//! Transient per-form state: current values, touched flags and error slots.
//! Created on mount from a schema, mutated on every edit and submit attempt,
//! and discarded on navigation. Nothing in here persists.

use super::schema::Schema;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Clone, Debug)]
pub struct FormState {
    schema: Schema,
    values: BTreeMap<String, String>,
    touched: BTreeSet<String>,
    errors: BTreeMap<String, String>,
}

impl FormState {
    /// Seeds the value map from the schema's field initials. All fields
    /// start untouched and error-free.
    pub fn new(schema: Schema) -> Self {
        let values = schema
            .fields()
            .iter()
            .map(|field| (field.name.to_string(), field.initial.to_string()))
            .collect();

        Self {
            schema,
            values,
            touched: BTreeSet::new(),
            errors: BTreeMap::new(),
        }
    }

    /// Current value for `name`; unknown fields read as empty.
    pub fn value(&self, name: &str) -> &str {
        self.values.get(name).map_or("", String::as_str)
    }

    /// Current error for `name`, if validation has produced one. Inputs only
    /// render this once the field has been touched, and validation only runs
    /// on touch, so an untouched field never shows an error.
    pub fn error(&self, name: &str) -> Option<&str> {
        self.errors.get(name).map(String::as_str)
    }

    pub fn is_touched(&self, name: &str) -> bool {
        self.touched.contains(name)
    }

    /// Updates a field's value. Touched fields re-validate immediately so
    /// mistakes clear as the user types; untouched fields defer validation
    /// until `touch`.
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) {
        self.values.insert(name.to_string(), value.into());

        if self.touched.contains(name) {
            self.validate_field(name);
        }
    }

    /// Marks a field touched and validates it. Idempotent: re-touching runs
    /// the same pure rules over the same value.
    pub fn touch(&mut self, name: &str) {
        self.touched.insert(name.to_string());
        self.validate_field(name);
    }

    /// Marks every schema field touched and validates each independently.
    /// Returns whether the whole form is clean; callers must not build a
    /// payload or start a request when this is false.
    pub fn validate_all(&mut self) -> bool {
        let names: Vec<&'static str> = self
            .schema
            .fields()
            .iter()
            .map(|field| field.name)
            .collect();

        for name in names {
            self.touched.insert(name.to_string());
            self.validate_field(name);
        }

        !self.has_errors()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    fn validate_field(&mut self, name: &str) {
        let value = self.value(name).to_string();

        match self.schema.validate(name, &value) {
            Some(message) => {
                self.errors.insert(name.to_string(), message.to_string());
            }
            None => {
                self.errors.remove(name);
            }
        }
    }
}
