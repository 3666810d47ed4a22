pub mod config;
pub mod cursor;
