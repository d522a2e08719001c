pub mod query;
pub mod tag_index;
