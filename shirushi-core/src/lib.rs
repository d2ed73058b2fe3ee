pub mod array;
pub mod config;
pub mod constants;
pub mod errors;
pub mod label;
pub mod logging;
pub mod query;
pub mod types;
