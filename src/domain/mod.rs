//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Rich domain types (validated, view-ready)
//! - `wire.rs` — Raw serde structs matching backend responses
//! - `convert.rs` — `TryFrom` conversions with validation
//! - `state.rs` — The slice: state container + transition logic
//! - `client.rs` — Sub-client that runs requests against the slice

pub mod auth;
pub mod wallet;
