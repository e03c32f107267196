//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — domain types and constants
//! - `wire.rs` — raw serde structs matching exchange responses/requests
//! - `convert.rs` — wire→domain conversions (incl. fixed-point scaling)
//! - `client.rs` — sub-client with the domain's HTTP operations

pub mod account;
pub mod market;
pub mod order;
