//! Runs one parsed invocation and maps its outcome to an exit status.

use movie_rentals_core::types::parse_int;
use movie_rentals_db::models::movie::CreateMovie;
use sqlx::PgPool;

use crate::cli::{Command, Invocation, USAGE};
use crate::error::AppResult;
use crate::handlers;

/// How an invocation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    /// Usage text was printed; nothing ran.
    Usage,
    /// The handler failed and the error was logged.
    Failed,
}

/// Maps an [`Outcome`] to a process exit status.
///
/// Outside strict mode every outcome exits 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExitPolicy {
    pub strict: bool,
}

impl ExitPolicy {
    pub fn exit_status(&self, outcome: Outcome) -> u8 {
        if !self.strict {
            return 0;
        }
        match outcome {
            Outcome::Completed => 0,
            Outcome::Failed => 1,
            Outcome::Usage => 2,
        }
    }
}

/// Coerce the command's arguments and run its handler.
pub async fn execute(pool: &PgPool, command: &Command, strict: bool) -> AppResult<String> {
    match command {
        Command::Insert {
            title,
            year,
            genre,
            director,
        } => {
            let input = CreateMovie {
                title: title.clone(),
                year: parse_int("year", year)?,
                genre: genre.clone(),
                director: director.clone(),
            };
            handlers::insert_movie(pool, &input).await
        }
        Command::Show => handlers::display_movies(pool).await,
        Command::Update {
            customer_id,
            new_email,
        } => {
            let id = parse_int("customer_id", customer_id)?;
            handlers::update_customer_email(pool, id, new_email, strict).await
        }
        Command::Remove { customer_id } => {
            let id = parse_int("customer_id", customer_id)?;
            handlers::remove_customer(pool, id, strict).await
        }
    }
}

/// Run an invocation, printing its output to stdout and logging failures.
///
/// Strict mode is whatever the invocation carries; merge the environment
/// setting in with [`Invocation::or_strict`] first.
pub async fn dispatch(pool: &PgPool, invocation: &Invocation) -> Outcome {
    match invocation {
        Invocation::Print(text) => {
            print!("{text}");
            Outcome::Completed
        }
        Invocation::Usage { .. } => {
            println!("{USAGE}");
            Outcome::Usage
        }
        Invocation::Run { command, strict } => match execute(pool, command, *strict).await {
            Ok(output) => {
                println!("{output}");
                Outcome::Completed
            }
            Err(err) => {
                tracing::error!(error = %err, "Error {}", command.operation());
                Outcome::Failed
            }
        },
    }
}
