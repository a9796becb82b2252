//! This crate contains the moderation dashboard views shared by the frontends.

// Dioxus `rsx!` macro expands to unwraps internally; allow to avoid false positives.
#![allow(clippy::disallowed_methods)]

pub mod moderation;
pub mod state;
