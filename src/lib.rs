// Player index: name-to-UUID lookups against the Mojang profile API.
//
// This is the library root. `profile` holds the lookup pipeline; `web`
// exposes it over HTTP when the `web` feature is enabled.

pub mod config;
pub mod profile;

#[cfg(feature = "web")]
pub mod web;
