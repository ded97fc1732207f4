//! Integration tests for Barback.
//!
//! # Running Tests
//!
//! ```bash
//! # Start PostgreSQL, run migrations, start the server
//! cargo run -p barback-cli -- migrate
//! cargo run -p barback-server
//!
//! # Run integration tests (ignored by default)
//! cargo test -p barback-integration-tests -- --ignored
//! ```
//!
//! # Test Categories
//!
//! - `tests/api.rs` - HTTP API tests against a running server
//! - `tests/db.rs` - Repository tests against a live database
//!
//! # Environment Variables
//!
//! - `BARBACK_BASE_URL` - Server base URL (default: `http://localhost:8000`)
//! - `BARBACK_DATABASE_URL` - `PostgreSQL` connection string for the
//!   repository tests (falls back to `DATABASE_URL`)
