//! Declarative form engine: per-field rules interpreted by iteration, plus
//! the transient state that tracks values, touched flags and errors for one
//! form instance. Everything here is pure and synchronous; pages own the
//! async submit step.

pub(crate) mod rules;
pub(crate) mod schema;
pub(crate) mod state;

pub(crate) use schema::{FieldSpec, Rule, Schema};
pub(crate) use state::FormState;
