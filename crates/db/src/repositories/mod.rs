//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument and run a single statement.

pub mod customer_repo;
pub mod movie_repo;
pub mod rental_repo;

pub use customer_repo::CustomerRepo;
pub use movie_repo::MovieRepo;
pub use rental_repo::RentalRepo;
