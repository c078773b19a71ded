pub mod get;
pub mod patch;
pub mod put;
