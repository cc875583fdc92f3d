// Asana API module.
// Provides client and types for interacting with the Asana REST API.

pub mod client;
pub mod endpoints;
pub mod types;

pub use client::AsanaClient;
pub use types::*;
