//! Avia Interview Copilot
//!
//! Marketing site and member dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Public landing page with animated stats and a live product demo
//! - Sign-in flow backed by a single browser-local session marker
//! - Session-gated dashboard with onboarding steps, survey, and referrals
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. There is no backend: "auth" and referral codes are synthesized
//! in the browser, and the only persisted state is one `localStorage` key.

use leptos::*;

mod app;
mod components;
mod content;
mod effects;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
