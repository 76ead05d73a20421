//! API layer for HTTP request handling.
//!
//! This module contains the REST API implementation:
//!
//! - **[`handlers`]**: Axum route handlers for the public endpoints
//!
//! # API Structure
//!
//! The public surface lives under the `/api/v1` prefix:
//!
//! - **Images** (`/api/v1/process-all-images`): multipart intake for the
//!   processing pipeline
//! - **Status** (`/api/v1/ping`): liveness check
//!
//! # OpenAPI Documentation
//!
//! All endpoints are documented with OpenAPI annotations using `utoipa`.
//! API documentation is available at `/docs` when the server is running.

pub mod handlers;
