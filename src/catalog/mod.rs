//! Catalog Module
//!
//! The content layer of the wiki: entity definitions, display projections,
//! and the CRUD endpoints that populate the store the search engine reads.
//!
//! ## Submodules
//! - **`types`**: Stored documents and card projections.
//! - **`view`**: Detail projections with references resolved to cards.
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`seed`**: Startup seeding of the fixed category set.

pub mod handlers;
pub mod seed;
pub mod types;
pub mod view;
