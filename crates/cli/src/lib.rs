//! The `movie-rentals` command line: argument parsing, configuration,
//! the four command handlers and the dispatcher that ties them together.

pub mod cli;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod handlers;
pub mod render;
