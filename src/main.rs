// The UI tree is only reachable from the wasm entry point; native builds
// compile it for the test suite.
#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

mod app;
#[path = "lib/mod.rs"]
mod app_lib;
mod components;
mod features;
mod forms;
mod routes;

#[cfg(target_arch = "wasm32")]
use crate::app::App;
#[cfg(target_arch = "wasm32")]
use leptos::prelude::mount_to_body;

#[cfg(target_arch = "wasm32")]
pub fn main() {
    mount_to_body(App);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn main() {}
