use crate::error::RenameError;
use anyhow::Result;
use log::debug;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    pub path: PathBuf,
    pub name: String,
}

/// 列出資料夾第一層的一般檔案（不遞迴、不跟隨連結），依檔名排序
///
/// 子資料夾與其他類型的項目會被略過，非 UTF-8 的檔名也會略過
pub fn list_directory_files(directory: &Path) -> Result<Vec<FileInfo>> {
    let mut files = Vec::new();

    let walker = WalkDir::new(directory)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .sort_by_file_name();

    for entry in walker {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(directory).to_path_buf();
            match e.into_io_error() {
                Some(io_error) => RenameError::filesystem("讀取目錄", path, io_error),
                None => RenameError::filesystem(
                    "讀取目錄",
                    path,
                    std::io::Error::other("檔案系統迴圈"),
                ),
            }
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            debug!("略過非 UTF-8 檔名: {}", entry.path().display());
            continue;
        };

        files.push(FileInfo {
            path: entry.into_path(),
            name,
        });
    }

    Ok(files)
}
