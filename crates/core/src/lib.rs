//! Types and errors shared by the movie-rentals crates.

pub mod error;
pub mod types;
