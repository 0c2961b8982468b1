//! Rental entity model and DTOs.

use chrono::NaiveDate;
use movie_rentals_core::types::DbId;
use sqlx::FromRow;

/// A rental row from the `rentals` table.
///
/// Both references cascade: deleting the customer or the movie deletes
/// the rental.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Rental {
    pub id: DbId,
    pub customer_id: Option<DbId>,
    pub movie_id: Option<DbId>,
    pub rental_date: NaiveDate,
    /// `None` while the movie is still out.
    pub return_date: Option<NaiveDate>,
}

/// DTO for inserting a rental.
#[derive(Debug, Clone)]
pub struct CreateRental {
    pub customer_id: DbId,
    pub movie_id: DbId,
    pub rental_date: NaiveDate,
    pub return_date: Option<NaiveDate>,
}
