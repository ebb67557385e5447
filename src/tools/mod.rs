mod file_scanner;
mod path_validator;

pub use file_scanner::{FileInfo, list_directory_files};
pub use path_validator::validate_directory_exists;
