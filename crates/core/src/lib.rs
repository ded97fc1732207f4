//! Barback Core - shared types library.
//!
//! This crate provides common types used across all Barback components:
//! - `server` - HTTP service for inventory and shift checklists
//! - `cli` - command-line tools for migrations and seeding
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - newtype IDs, provider attribution, and checklist entries

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
