//! Search Service Module
//!
//! The core component responsible for resolving free-text queries against
//! the four wiki collections.
//!
//! ## Overview
//! A query is tokenized into case-insensitive substring matchers, run
//! through one matcher per collection, and the series/category matches are
//! expanded through their reference lists to pull in characters the query
//! text never touched. Results from the different discovery paths are
//! merged by identity into four response buckets.
//!
//! ## Responsibilities
//! - **Tokenization**: Splitting the raw query into compiled term matchers.
//! - **Matching**: Scanning each collection for documents where any term
//!   hits any designated field.
//! - **Expansion**: Walking series -> characters and
//!   category -> series -> characters references.
//! - **API**: Exposing the public search endpoint via the Axum web server.
//!
//! ## Submodules
//! - **`tokenizer`**: Query parsing and term matcher compilation.
//! - **`matchers`**: Per-collection direct matching.
//! - **`expand`**: Relational expansion from matched series and categories.
//! - **`engine`**: Orchestration, deduplication, and result assembly.
//! - **`types`**: Response DTOs.
//! - **`handlers`**: HTTP request handlers for the Axum web server.

pub mod engine;
pub mod error;
pub mod expand;
pub mod handlers;
pub mod matchers;
pub mod tokenizer;
pub mod types;
