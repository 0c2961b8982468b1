//! Command handlers. Each runs exactly one statement against the store and
//! returns the text to print on success.

use movie_rentals_core::error::CoreError;
use movie_rentals_core::types::DbId;
use movie_rentals_db::models::movie::CreateMovie;
use movie_rentals_db::repositories::{CustomerRepo, MovieRepo};
use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::render;

pub async fn insert_movie(pool: &PgPool, input: &CreateMovie) -> AppResult<String> {
    let movie = MovieRepo::create(pool, input).await?;
    tracing::debug!(movie_id = movie.id, "Movie inserted");
    Ok(format!("Movie \"{}\" inserted successfully.", movie.title))
}

pub async fn display_movies(pool: &PgPool) -> AppResult<String> {
    let movies = MovieRepo::list(pool).await?;
    Ok(format!("Movies:\n{}", render::movies_table(&movies)))
}

/// Set a customer's email.
///
/// An unknown id is reported as success unless `strict` is set, in which
/// case it becomes [`CoreError::NotFound`].
pub async fn update_customer_email(
    pool: &PgPool,
    customer_id: DbId,
    new_email: &str,
    strict: bool,
) -> AppResult<String> {
    let updated = CustomerRepo::update_email(pool, customer_id, new_email).await?;
    if !updated {
        tracing::debug!(customer_id, "No customer matched the update");
        if strict {
            return Err(customer_not_found(customer_id));
        }
    }
    Ok(format!("Customer {customer_id}'s email updated to {new_email}"))
}

/// Delete a customer; their rentals go with them by cascade.
///
/// Same unknown-id rule as [`update_customer_email`].
pub async fn remove_customer(pool: &PgPool, customer_id: DbId, strict: bool) -> AppResult<String> {
    let deleted = CustomerRepo::delete(pool, customer_id).await?;
    if !deleted {
        tracing::debug!(customer_id, "No customer matched the delete");
        if strict {
            return Err(customer_not_found(customer_id));
        }
    }
    Ok(format!("Customer {customer_id} and their rental history removed."))
}

fn customer_not_found(id: DbId) -> AppError {
    CoreError::NotFound {
        entity: "customer",
        id,
    }
    .into()
}
