pub mod get;
pub mod put;
pub mod search;
