//! Domain model structs.
//!
//! Each submodule contains a `FromRow` + `Serialize` entity struct matching
//! the database row. Create/update inputs are defined in `cinedex_core` next
//! to their validation rules and re-exported here.

pub mod entry;
