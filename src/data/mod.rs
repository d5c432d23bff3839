pub mod error;
pub mod reader;
pub mod schema;
pub mod writer;
