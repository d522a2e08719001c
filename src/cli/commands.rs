use clap::{Args, Parser, Subcommand};

use crate::model::line::LineKind;

#[derive(Parser)]
#[command(
    name = "tp",
    about = concat!("tp v", env!("CARGO_PKG_VERSION"), " - inspect TaskPaper outlines read from stdin"),
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Count projects, tasks and comments
    Stats,
    /// List lines, optionally filtered by kind or tag
    List(ListArgs),
    /// Show one line in detail
    Show(ShowArgs),
    /// List every tag with its occurrences and values
    Tags,
    /// Search line titles by regex
    Search(SearchArgs),
    /// Print the document back out
    Cat,
}

#[derive(Args)]
pub struct ListArgs {
    /// Only lines of this kind (project, task, comment)
    #[arg(long)]
    pub kind: Option<LineKind>,
    /// Only lines carrying this tag (name without `@`)
    #[arg(long)]
    pub tag: Option<String>,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Line number, starting at 1
    pub number: usize,
}

#[derive(Args)]
pub struct SearchArgs {
    /// Regex matched against titles
    pub pattern: String,
    /// Only lines of this kind (project, task, comment)
    #[arg(long)]
    pub kind: Option<LineKind>,
}
