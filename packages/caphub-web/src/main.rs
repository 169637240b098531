//! Capability Hub - Dioxus web client for the consulting capability directory
//!
//! Talks to the directory API (`/capabilities` and its register/unregister
//! mutations); the server and its persistence live elsewhere.
//!
//! ## Running
//!
//! Development (with hot reload):
//! ```bash
//! dx serve --features web
//! ```
//!
//! Production build:
//! ```bash
//! dx build --release --features web
//! ```

#![allow(non_snake_case)]

mod api;
mod app;
mod components;
mod pages;
mod state;
mod types;

use dioxus::prelude::*;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Launch the Dioxus app
    dioxus::launch(app::App);
}
