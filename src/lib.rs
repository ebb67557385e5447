pub mod cli;
pub mod component;
pub mod error;
pub mod init;
pub mod menu;
pub mod signal;
pub mod tools;

pub use error::RenameError;
