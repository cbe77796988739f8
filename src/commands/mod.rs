pub mod rename;
pub mod status;
