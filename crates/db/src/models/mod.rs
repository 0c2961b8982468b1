//! Row structs and insert DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A create DTO for inserts

pub mod customer;
pub mod movie;
pub mod rental;
