pub mod document;
pub mod line;
pub mod tag;

pub use document::*;
pub use line::*;
pub use tag::*;
