//! Madrona Core - Shared types library.
//!
//! This crate provides the common types used across all Madrona components:
//! - `storefront` - The API gateway, domain slices, and persisted cache
//! - `cli` - Command-line driver for the store
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no storage
//! access. This keeps it lightweight and allows it to be used anywhere.
//!
//! All entity types mirror the storefront API's wire format: camelCase field
//! names with Mongo-style `_id` identifiers.
//!
//! # Modules
//!
//! - [`types`] - Entities, newtype IDs, and cart totals arithmetic

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
