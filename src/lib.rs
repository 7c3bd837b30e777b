//! InvClothing Library
//!
//! View-state and filtering engine of a clothing retail back office:
//! page-level services over in-memory collections (inventory
//! verification, stock movements, orders, point of sale, reporting and
//! settings), plus the collaborators they lean on.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

// Core modules
pub mod aggregates;
pub mod collection;
pub mod config;
pub mod errors;
pub mod filters;
pub mod models;
pub mod services;

// Collaborators
pub mod auth;
pub mod format;
pub mod routes;
pub mod seed;
pub mod theme;

pub use collection::{Draft, Entity, EntityCollection};
pub use errors::{ServiceError, ServiceResult};
pub use filters::{apply_filter, Filter, SearchQuery, Selection};
pub use services::Transition;
