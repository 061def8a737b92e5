//! # ModKit
//!
//! Shared building blocks for server modules:
//!
//! - module contracts (`Module`, `DbModule`, `RestfulModule`) and their `ModuleCtx`;
//! - RFC 9457 `Problem` responses for REST handlers;
//! - page/offset pagination and bearer-token parsing;
//! - OS signal based shutdown.
//!
//! ## Example
//!
//! ```rust,ignore
//! use modkit::{DbModule, Module, RestfulModule};
//!
//! pub struct Inventory;
//!
//! // Implement the capabilities the module needs...
//! ```

pub use anyhow::Result;
pub use async_trait::async_trait;

// Core module contracts and traits
pub mod contracts;
pub use crate::contracts::*;

pub mod context;
pub use context::{ConfigProvider, ModuleCtx, ModuleCtxBuilder};

// REST helpers
pub mod api;
pub use api::pagination::{PageRequest, PageWindow, PaginationError};
pub use api::problem::{Problem, ProblemResponse, ValidationError, APPLICATION_PROBLEM_JSON};
pub use api::request_id::{current_request_id, with_request_id};

pub mod auth;
pub use auth::{bearer_token, BearerError};

pub mod shutdown;
pub use shutdown::wait_for_shutdown;
