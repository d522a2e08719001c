pub mod document_parser;
pub mod document_serializer;
pub mod grammar;
pub mod line_parser;
pub mod tag_parser;

pub use document_parser::{parse_document, split_lines};
pub use document_serializer::serialize_document;
pub use line_parser::classify;
pub use tag_parser::extract_tags;
