//! API client core for the items service.
//!
//! # Overview
//! `ItemClient` builds `HttpRequest` values and parses `HttpResponse` values
//! without touching the network (host-does-IO pattern). `ItemApi` wraps it
//! with a `reqwest` transport for callers that just want async calls.
//!
//! # Design
//! - `ItemClient` is stateless: it holds only the validated base URL.
//! - Each operation is split into `build_*` and `parse_*`, so the I/O
//!   boundary is explicit.
//! - Any non-2xx response is `ApiError::RequestFailed`; transport failures
//!   are `ApiError::Transport`.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod types;

pub use api::ItemApi;
pub use client::ItemClient;
pub use config::ClientConfig;
pub use error::{ApiError, ApiResult, Operation};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{Item, ItemPayload};
