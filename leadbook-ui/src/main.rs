//! Leadbook Frontend
//!
//! Lead tracker built with Leptos (WASM).
//!
//! # Features
//!
//! - Customer list with links to each lead
//! - Create and edit form for leads
//! - Leads persisted to browser local storage on every change
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. There is no server: the `leadbook` store runs in the page
//! against `window.localStorage`.

use leptos::*;

mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
