pub mod daily;
pub mod error;
