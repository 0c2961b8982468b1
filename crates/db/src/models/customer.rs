//! Customer entity model and DTOs.

use movie_rentals_core::types::DbId;
use sqlx::FromRow;

/// A customer row from the `customers` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Customer {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    /// Unique across all customers (`uq_customers_email`).
    pub email: String,
    pub phone_number: String,
}

/// DTO for inserting a customer.
#[derive(Debug, Clone)]
pub struct CreateCustomer {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
}
