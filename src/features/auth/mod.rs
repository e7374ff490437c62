//! Auth feature: form schemas for sign-in and sign-up, the API client, the
//! session store and the guard that gates protected views. Keeps security
//! handling out of view code; token material must never be logged or
//! rendered.

pub(crate) mod captcha;
pub(crate) mod client;
pub(crate) mod forms;
pub(crate) mod guards;
pub(crate) mod session;
pub(crate) mod types;
