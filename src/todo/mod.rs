//! Todo lifecycle management.
//!
//! This module implements the todo CRUD lifecycle: creating records from
//! validated input, listing and fetching active records, partially
//! updating them, and soft-deleting them. Soft-deleted records stay in
//! storage but are invisible to every read and immutable through the
//! service. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
