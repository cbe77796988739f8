pub mod commands;
pub mod mapping;
pub mod rename;
pub mod utils;
pub mod validation;
