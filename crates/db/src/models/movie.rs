//! Movie entity model and DTOs.

use movie_rentals_core::types::DbId;
use sqlx::FromRow;

/// A movie row from the `movies` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Movie {
    pub id: DbId,
    pub title: String,
    pub year: i32,
    pub genre: String,
    pub director: String,
}

/// DTO for inserting a movie. Duplicates of existing movies are allowed.
#[derive(Debug, Clone)]
pub struct CreateMovie {
    pub title: String,
    pub year: i32,
    pub genre: String,
    pub director: String,
}
