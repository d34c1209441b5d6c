pub mod config;
pub mod console;
pub mod convert;
pub mod data;
