//! Yi 相機錄影重新命名元件
//!
//! 將 `YDXJ0732.MP4`、`YN010732.MP4` 這類分段檔案改名為 `0732_00.mp4`、`0732_01.mp4`，
//! 並清理 `.SEC` 預覽檔

mod action;
mod classifier;
mod grouper;
mod main;
mod target_name;
mod warning;

pub use action::{ActionMode, Apply, FileAction, Simulate};
pub use classifier::{FilenameClassifier, Fragment, FragmentKind, NamingRule};
pub use grouper::{Recording, RecordingSet};
pub use main::{
    PREVIEW_EXTENSION, RecordingRenamer, RenameOptions, RunSummary, find_preview_files,
};
pub use target_name::target_name;
pub use warning::{LogWarnings, RenameWarning, WarningSink};
