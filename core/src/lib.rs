//! Data-access service for the hero API.
//!
//! # Overview
//! Performs CRUD against a REST backend (list, get, tolerant find, search,
//! add, delete, update). Every operation is one awaited HTTP round-trip
//! wrapped in a uniform recovery protocol: log the outcome to a shared
//! [`MessageLog`] and, on any failure, return a per-operation fallback
//! value instead of an error.
//!
//! # Design
//! - `HeroClient` is stateless — it holds only `base_url` and splits each
//!   operation into `build_*` (produces a request) and `parse_*` (consumes
//!   a response), so the I/O boundary is explicit and unit-testable.
//! - `HttpTransport` is the async execution seam; `ReqwestTransport` is the
//!   default implementation and tests substitute canned ones.
//! - `HeroService` composes the two with a `MessageLog` and owns the
//!   never-propagate error policy.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod messages;
pub mod service;
pub mod transport;
pub mod types;

pub use client::HeroClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use messages::MessageLog;
pub use service::HeroService;
pub use transport::{HttpTransport, ReqwestTransport};
pub use types::{Hero, HeroRef, NewHero};
