// Profile resolution: Mojang profile lookups and identifier handling.
//
// The upstream API speaks undashed UUIDs and loosely-typed JSON. Each
// submodule owns one step of turning player names into validated UUIDs:
// identifier parsing, record validation, the HTTP client, and the final
// projection down to a set of identifiers.

pub mod client;
pub mod extract;
pub mod identifier;
pub mod model;

pub use client::{ProfileClient, ProfileResolver};
pub use extract::{extract_identifiers, lookup_identifiers};
pub use model::PlayerProfile;
