//! # Star Wars API Rust client
//!
//! A Rust client library for [SWAPI](https://swapi.dev), the Star Wars API,
//! exposing the `people` and `films` collections as typed models with lazy,
//! paginated iteration.
//!
//! ## Overview
//!
//! This library provides:
//! - Typed models for people and films via [`People`] and [`Film`]
//! - Lazy pagination over whole collections via [`QuerySet`]
//! - Verbatim access to raw record fields via [`Record`]
//! - An explicitly constructed, injectable API client via [`SwapiClient`]
//! - Type-safe configuration via [`SwapiConfig`] and [`SwapiConfigBuilder`]
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use starwars_api::{People, Resource, SwapiClient};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = SwapiClient::new();
//!
//! // Fetch a single person by id
//! let luke = People::get(&client, 1).await?;
//! println!("{luke}"); // Person: Luke Skywalker
//!
//! // Walk the whole collection; pages are fetched on demand
//! let mut people = People::all(&client);
//! while let Some(person) = people.try_next().await? {
//!     println!("{person}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Pagination
//!
//! SWAPI serves collections in server-side pages. [`QuerySet`] hides that:
//! the caller sees a flat sequence of models, and page fetches happen lazily
//! at the boundaries. The collection total is learned from the first page
//! fetch, so [`QuerySet::count`] costs at most one request:
//!
//! ```rust,no_run
//! use starwars_api::{Film, Resource, SwapiClient};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = SwapiClient::new();
//! let total = Film::all(&client).count().await?;
//! println!("{total} films");
//! # Ok(())
//! # }
//! ```
//!
//! ## Configuration
//!
//! The base URL is configurable, so tests can point the client at a local
//! mock server:
//!
//! ```rust
//! use starwars_api::{ApiBaseUrl, SwapiClient, SwapiConfig};
//!
//! let config = SwapiConfig::builder()
//!     .base_url(ApiBaseUrl::new("http://localhost:8080/api").unwrap())
//!     .user_agent_prefix("my-app")
//!     .build();
//!
//! let client = SwapiClient::with_config(&config);
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: the client is constructed explicitly and passed by
//!   reference into models and query sets
//! - **Lazy by default**: building a query set performs no I/O
//! - **No schema enforcement**: records preserve every field the server
//!   sent; absent fields error at access time, not construction time
//! - **No hidden recovery**: client failures propagate unchanged — no
//!   retries, no default values
//! - **Thread-safe**: clients are `Send + Sync`; each query set owns its
//!   cursor exclusively

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{ApiBaseUrl, SwapiConfig, SwapiConfigBuilder};
pub use error::ConfigError;

// Re-export HTTP and SWAPI client types
pub use clients::{
    ClientError, HttpClient, HttpError, HttpResponse, HttpResponseError, Page, ResourceKind,
    SwapiClient,
};

// Re-export resource types
pub use rest::{Film, People, QuerySet, Record, Resource, ResourceError};
