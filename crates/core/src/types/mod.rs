//! Core types for Barback.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod checklist;
pub mod id;
pub mod provider;

pub use checklist::ChecklistEntry;
pub use id::*;
pub use provider::Provider;
