pub mod commands;
pub mod error;
pub mod handlers;
pub mod output;

pub use error::CliError;
