pub mod templates;
pub mod writer;
