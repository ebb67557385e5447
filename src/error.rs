//! 錯誤類型
//!
//! 一般的錯誤傳遞使用 `anyhow`，需要讓呼叫端辨識種類的失敗才放在這裡

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// 重新命名流程中可被辨識的錯誤
#[derive(Error, Debug)]
pub enum RenameError {
    #[error("路徑不存在: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("路徑不是資料夾: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("無法{operation} {}: {source}", .path.display())]
    Filesystem {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl RenameError {
    /// 是否為無效的工作資料夾（不存在或不是資料夾）
    #[must_use]
    pub const fn is_invalid_directory(&self) -> bool {
        matches!(self, Self::DirectoryNotFound(_) | Self::NotADirectory(_))
    }

    pub(crate) fn filesystem(
        operation: &'static str,
        path: impl Into<PathBuf>,
        source: io::Error,
    ) -> Self {
        Self::Filesystem {
            operation,
            path: path.into(),
            source,
        }
    }
}
