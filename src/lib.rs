//! Todoapp: todo list service with a REST API.
//!
//! This crate implements a CRUD lifecycle for todo work items: create,
//! list, fetch-by-id, partial update, and soft-delete, exposed over HTTP
//! and backed by `PostgreSQL`.
//!
//! # Architecture
//!
//! Todoapp follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, HTTP)
//!
//! # Modules
//!
//! - [`todo`]: Todo records, their lifecycle service, and adapters

pub mod todo;
