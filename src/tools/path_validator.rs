use crate::error::RenameError;
use std::path::Path;

pub fn validate_directory_exists(path: &Path) -> Result<(), RenameError> {
    if !path.exists() {
        return Err(RenameError::DirectoryNotFound(path.to_path_buf()));
    }
    if !path.is_dir() {
        return Err(RenameError::NotADirectory(path.to_path_buf()));
    }
    Ok(())
}
