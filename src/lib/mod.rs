//! Shared frontend utilities: API access, configuration and the error type.
//! These helpers keep request setup and failure handling identical across
//! routes; none of them ever log or render token material.

pub(crate) mod api;
pub(crate) mod build_info;
pub(crate) mod config;
pub(crate) mod errors;

pub(crate) use api::{post_json, post_json_response};
pub(crate) use errors::AppError;
