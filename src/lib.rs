//! Character Wiki Backend Library
//!
//! This library crate defines the core modules of the wiki service.
//! It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! The system is composed of three loosely coupled subsystems:
//!
//! - **`catalog`**: The content layer. Defines the four entity types (Series,
//!   Character, Category, User), their display projections, and the CRUD
//!   handlers that create and read them over HTTP.
//! - **`search`**: The core query resolution logic. Contains the query
//!   tokenizer, per-collection matchers, the relational expander that walks
//!   series/category references, and result assembly.
//! - **`store`**: The state layer. An in-memory document store
//!   (`EntityStore`) holding one concurrent collection per entity type,
//!   injected into handlers so tests can construct isolated instances.

pub mod catalog;
pub mod search;
pub mod store;
