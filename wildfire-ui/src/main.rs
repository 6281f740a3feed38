//! WildFire AI Dashboard
//!
//! Wildfire risk monitoring dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Live hotspot count and global risk indicator, polled every 30 seconds
//! - Weather trend charts rendered on HTML5 canvas
//! - Satellite data fetch that pre-fills the prediction form
//! - Risk prediction with SMS/Telegram notification status
//! - Email/password login and registration through Firebase Auth
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It talks to the WildFire server over HTTP and to the hosted
//! identity provider over its REST API. Page logic lives in `state` (owned
//! reactive context plus pure selectors) and `workflows` (async request
//! orchestration against the `api` traits), so it can be tested natively.

use leptos::*;

mod api;
mod app;
mod charts;
mod components;
mod config;
mod forms;
mod logging;
mod pages;
mod state;
mod workflows;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    logging::init();

    mount_to_body(|| view! { <app::App /> });
}
