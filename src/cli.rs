//! 命令列參數

use crate::component::RenameOptions;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Rename Yi camera recordings to <id>_<seq>.mp4 and delete .SEC preview files"
)]
pub struct Args {
    /// Only print what would be renamed or deleted
    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        default_value_t = false,
        default_missing_value = "true",
        value_name = "BOOL"
    )]
    pub dry_run: bool,

    /// Delete .SEC preview files after renaming
    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        default_value_t = true,
        default_missing_value = "true",
        value_name = "BOOL"
    )]
    pub delete_sec: bool,

    /// Directory containing the camera files
    #[arg(short, long, default_value = ".", value_hint = clap::ValueHint::DirPath)]
    pub directory: PathBuf,

    /// Ask for the directory, preview with a dry run and confirm before renaming
    #[arg(short, long)]
    pub interactive: bool,
}

impl Args {
    #[must_use]
    pub fn rename_options(&self) -> RenameOptions {
        RenameOptions {
            directory: self.directory.clone(),
            dry_run: self.dry_run,
            delete_sec: self.delete_sec,
        }
    }
}
