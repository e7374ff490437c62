//! Domain-level frontend features. Routes import these so view code stays
//! focused on rendering while validation, sessions and API access live in
//! dedicated modules.

pub(crate) mod auth;
