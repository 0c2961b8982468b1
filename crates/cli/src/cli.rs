//! Argument parsing.
//!
//! Every command takes an exact number of positional arguments. Anything
//! clap rejects (unknown command, missing or extra arguments) falls back to
//! the usage text instead of clap's own error.

use std::ffi::OsString;

use clap::error::ErrorKind;
use clap::{Parser, Subcommand};

pub const USAGE: &str = "\
Usage:
  movie-rentals insert <title> <year> <genre> <director> - Insert a movie
  movie-rentals show - Show all movies
  movie-rentals update <customer_id> <new_email> - Update a customer's email
  movie-rentals remove <customer_id> - Remove a customer from the database";

#[derive(Parser, Debug)]
#[command(
    name = "movie-rentals",
    version,
    about = "Manage the movie rentals database",
    disable_help_subcommand = true
)]
pub struct Cli {
    /// Treat unknown customer ids as errors and report failures in the exit code
    #[arg(long, global = true)]
    pub strict: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Insert a movie
    Insert {
        #[arg(allow_hyphen_values = true)]
        title: String,
        /// Release year, coerced to an integer
        #[arg(allow_hyphen_values = true)]
        year: String,
        #[arg(allow_hyphen_values = true)]
        genre: String,
        #[arg(allow_hyphen_values = true)]
        director: String,
    },
    /// Show all movies
    Show,
    /// Update a customer's email
    Update {
        #[arg(allow_hyphen_values = true)]
        customer_id: String,
        #[arg(allow_hyphen_values = true)]
        new_email: String,
    },
    /// Remove a customer and their rental history
    Remove {
        #[arg(allow_hyphen_values = true)]
        customer_id: String,
    },
}

impl Command {
    /// Operation name used in error logs, e.g. "Error inserting movie".
    pub fn operation(&self) -> &'static str {
        match self {
            Command::Insert { .. } => "inserting movie",
            Command::Show => "retrieving movies",
            Command::Update { .. } => "updating customer email",
            Command::Remove { .. } => "removing customer",
        }
    }
}

/// What a single process invocation should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// Run one command against the store.
    Run { command: Command, strict: bool },
    /// Print the usage text and touch nothing.
    Usage { strict: bool },
    /// Print clap-generated text (`--help`, `--version`). Never touches the store.
    Print(String),
}

impl Invocation {
    /// Whether strict mode is on for this invocation.
    pub fn strict(&self) -> bool {
        match self {
            Invocation::Run { strict, .. } | Invocation::Usage { strict } => *strict,
            Invocation::Print(_) => false,
        }
    }

    /// Turn strict mode on when `enabled`, e.g. from `MOVIE_RENTALS_STRICT`.
    ///
    /// Never turns it off.
    pub fn or_strict(self, enabled: bool) -> Self {
        match self {
            Invocation::Run { command, strict } => Invocation::Run {
                command,
                strict: strict || enabled,
            },
            Invocation::Usage { strict } => Invocation::Usage {
                strict: strict || enabled,
            },
            print @ Invocation::Print(_) => print,
        }
    }
}

/// Parse a full argument vector, program name included.
///
/// `--strict` is honored on usage fall-backs too, including argument
/// vectors clap rejects.
pub fn parse_invocation<I, T>(args: I) -> Invocation
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();

    match Cli::try_parse_from(&args) {
        Ok(Cli {
            command: Some(command),
            strict,
        }) => Invocation::Run { command, strict },
        Ok(Cli {
            command: None,
            strict,
        }) => Invocation::Usage { strict },
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            Invocation::Print(err.to_string())
        }
        Err(err) => {
            tracing::debug!(kind = ?err.kind(), "Arguments rejected");
            Invocation::Usage {
                strict: args.iter().skip(1).any(|arg| arg == "--strict"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Invocation {
        parse_invocation(std::iter::once("movie-rentals").chain(args.iter().copied()))
    }

    #[test]
    fn parses_insert() {
        assert_eq!(
            parse(&["insert", "Inception", "2010", "Sci-Fi", "Christopher Nolan"]),
            Invocation::Run {
                command: Command::Insert {
                    title: "Inception".into(),
                    year: "2010".into(),
                    genre: "Sci-Fi".into(),
                    director: "Christopher Nolan".into(),
                },
                strict: false,
            }
        );
    }

    #[test]
    fn parses_show_update_remove() {
        assert_eq!(
            parse(&["show"]),
            Invocation::Run {
                command: Command::Show,
                strict: false
            }
        );
        assert_eq!(
            parse(&["update", "3", "new@example.com"]),
            Invocation::Run {
                command: Command::Update {
                    customer_id: "3".into(),
                    new_email: "new@example.com".into(),
                },
                strict: false,
            }
        );
        assert_eq!(
            parse(&["remove", "3"]),
            Invocation::Run {
                command: Command::Remove {
                    customer_id: "3".into()
                },
                strict: false,
            }
        );
    }

    #[test]
    fn year_is_kept_as_text_until_the_handler() {
        let invocation = parse(&["insert", "Heat", "nineteen", "Crime", "Michael Mann"]);
        assert!(matches!(
            invocation,
            Invocation::Run { command: Command::Insert { ref year, .. }, .. } if year == "nineteen"
        ));
    }

    #[test]
    fn negative_numbers_are_values_not_flags() {
        assert_eq!(
            parse(&["remove", "-1"]),
            Invocation::Run {
                command: Command::Remove {
                    customer_id: "-1".into()
                },
                strict: false,
            }
        );
    }

    #[test]
    fn strict_flag_is_global() {
        assert!(parse(&["--strict", "remove", "4"]).strict());
        assert!(parse(&["remove", "4", "--strict"]).strict());
        assert!(!parse(&["remove", "4"]).strict());
    }

    #[test]
    fn missing_or_unknown_command_is_usage() {
        let usage = Invocation::Usage { strict: false };
        assert_eq!(parse(&[]), usage);
        assert_eq!(parse(&["foo"]), usage);
        assert_eq!(parse(&["help"]), usage);
    }

    #[test]
    fn wrong_argument_count_is_usage() {
        let usage = Invocation::Usage { strict: false };
        assert_eq!(parse(&["insert", "Inception", "2010", "Sci-Fi"]), usage);
        assert_eq!(
            parse(&["insert", "Inception", "2010", "Sci-Fi", "Nolan", "extra"]),
            usage
        );
        assert_eq!(parse(&["show", "extra"]), usage);
        assert_eq!(parse(&["update", "1"]), usage);
        assert_eq!(parse(&["remove"]), usage);
        assert_eq!(parse(&["remove", "1", "2"]), usage);
    }

    #[test]
    fn strict_survives_usage_fall_back() {
        let strict_usage = Invocation::Usage { strict: true };
        assert_eq!(parse(&["--strict"]), strict_usage);
        assert_eq!(parse(&["--strict", "foo"]), strict_usage);
        assert_eq!(parse(&["--strict", "insert", "A", "1", "B"]), strict_usage);
        assert_eq!(parse(&["show", "extra", "--strict"]), strict_usage);
        assert!(parse(&["--strict", "foo"]).strict());
    }

    #[test]
    fn strict_from_environment_is_merged() {
        assert!(parse(&["foo"]).or_strict(true).strict());
        assert!(parse(&["remove", "4"]).or_strict(true).strict());
        assert!(parse(&["--strict", "remove", "4"]).or_strict(false).strict());
        assert!(!parse(&["--version"]).or_strict(true).strict());
    }

    #[test]
    fn help_is_printed_by_clap() {
        match parse(&["--help"]) {
            Invocation::Print(text) => assert!(text.contains("Insert a movie")),
            other => panic!("expected help text, got {other:?}"),
        }
    }

    #[test]
    fn operation_names() {
        assert_eq!(Command::Show.operation(), "retrieving movies");
        assert_eq!(
            Command::Remove {
                customer_id: "1".into()
            }
            .operation(),
            "removing customer"
        );
    }
}
