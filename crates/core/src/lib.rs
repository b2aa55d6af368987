//! Domain types, validation, and pagination math for the media entry API.
//!
//! Everything here is pure logic with no database or HTTP dependencies, so it
//! can be unit-tested in isolation and shared by the `db` and `api` crates.

pub mod entry;
pub mod error;
pub mod pagination;
pub mod types;
pub mod validation;
