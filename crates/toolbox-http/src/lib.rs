//! # Toolbox HTTP Runtime
//!
//! Serves the Toolbox catalog over HTTP: server-rendered pages for people,
//! a JSON API for scripts, and the operational endpoints a deployment
//! expects.
//!
//! ## Endpoints
//!
//! - `GET /` and `GET /tools/{slug}`: HTML pages
//! - `GET /api/tools`, `GET /api/tools/{slug}`, `POST /api/tools/{slug}/run`,
//!   `GET /api/categories`: JSON API
//! - `GET /health`, `GET /api-docs/openapi.json`, `GET /docs`
//!
//! ## Features
//!
//! - `openapi` (default): mounts the OpenAPI document and Swagger UI when
//!   [`HttpRuntimeConfig::enable_openapi`] is set

pub mod runtime;

pub use runtime::*;
