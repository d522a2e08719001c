/// Error type for the `tp` command line
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("could not read standard input: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {number} is out of range (document has {total} lines)")]
    LineOutOfRange { number: usize, total: usize },
    #[error("invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
    #[error("could not serialize output: {0}")]
    Json(#[from] serde_json::Error),
}
