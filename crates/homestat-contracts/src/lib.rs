// Public contracts for the Homestat API
// This crate defines the request/response DTOs exchanged over the wire.
// Request parameters are explicit per-operation structs, validated at the
// boundary before reaching the core.

pub mod auth;
pub mod common;
pub mod readings;

pub use auth::*;
pub use common::*;
pub use readings::*;
