//! Idempotent schema creation, run on every process start.

use sqlx::PgPool;

/// Table DDL in creation order. `rentals` references the other two and
/// must come last.
pub const TABLES: [(&str, &str); 3] = [
    (
        "movies",
        "CREATE TABLE IF NOT EXISTS movies (
            id SERIAL PRIMARY KEY,
            title VARCHAR(255) NOT NULL,
            year INT NOT NULL,
            genre VARCHAR(100) NOT NULL,
            director VARCHAR(255) NOT NULL
        )",
    ),
    (
        "customers",
        "CREATE TABLE IF NOT EXISTS customers (
            id SERIAL PRIMARY KEY,
            first_name VARCHAR(100) NOT NULL,
            last_name VARCHAR(100) NOT NULL,
            email VARCHAR(255) NOT NULL,
            phone_number TEXT NOT NULL,
            CONSTRAINT uq_customers_email UNIQUE (email)
        )",
    ),
    (
        "rentals",
        "CREATE TABLE IF NOT EXISTS rentals (
            id SERIAL PRIMARY KEY,
            customer_id INT REFERENCES customers(id) ON DELETE CASCADE,
            movie_id INT REFERENCES movies(id) ON DELETE CASCADE,
            rental_date DATE NOT NULL,
            return_date DATE
        )",
    ),
];

/// Create the movies, customers and rentals tables if they are absent.
///
/// Existing tables are left untouched. Stops at the first failing
/// statement and returns its error.
pub async fn init_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    for (table, ddl) in TABLES {
        sqlx::query(ddl).execute(pool).await?;
        tracing::debug!(table, "Ensured table exists");
    }
    Ok(())
}
