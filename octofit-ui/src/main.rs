//! OctoFit Dashboard
//!
//! Fitness dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Activities, leaderboard, teams, users and workouts pages
//! - Backend address from the Codespaces name baked in at build time
//! - Paginated or bare list responses
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Record types, view state and page statistics come from the
//! `octofit` core crate; this crate only adds transport and markup.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
