pub mod category;
pub mod filter;
pub mod participation;
