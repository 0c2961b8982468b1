//! Repository for the `rentals` table.

use movie_rentals_core::types::DbId;
use sqlx::PgPool;

use crate::models::rental::{CreateRental, Rental};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, customer_id, movie_id, rental_date, return_date";

/// Provides insert and lookups for rentals.
pub struct RentalRepo;

impl RentalRepo {
    /// Insert a new rental, returning the created row.
    ///
    /// Fails with a foreign key violation if the customer or movie is missing.
    pub async fn create(pool: &PgPool, input: &CreateRental) -> Result<Rental, sqlx::Error> {
        let query = format!(
            "INSERT INTO rentals (customer_id, movie_id, rental_date, return_date)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Rental>(&query)
            .bind(input.customer_id)
            .bind(input.movie_id)
            .bind(input.rental_date)
            .bind(input.return_date)
            .fetch_one(pool)
            .await
    }

    /// Find a rental by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Rental>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM rentals WHERE id = $1");
        sqlx::query_as::<_, Rental>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a customer's rentals, oldest first.
    pub async fn list_by_customer(
        pool: &PgPool,
        customer_id: DbId,
    ) -> Result<Vec<Rental>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM rentals WHERE customer_id = $1 ORDER BY rental_date, id"
        );
        sqlx::query_as::<_, Rental>(&query)
            .bind(customer_id)
            .fetch_all(pool)
            .await
    }
}
