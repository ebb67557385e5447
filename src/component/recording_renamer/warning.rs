//! 警告通知
//!
//! 原本會默默發生的情況（片段覆蓋、缺少第一個檔案、目標檔已存在）不會中止流程，
//! 但會透過 `WarningSink` 回報，呼叫端可以自行決定是否要更嚴格地處理

use log::warn;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameWarning {
    /// 兩個檔案對應到同一個（錄影編號, 序號），後掃描到的取代先前的
    DuplicateFragment {
        recording_id: String,
        sequence_number: u32,
        kept: String,
        replaced: String,
    },
    /// 錄影只有後續檔案，沒有序號 0
    MissingPrimary { recording_id: String },
    /// 重新命名的目標已存在，會被覆蓋
    TargetExists { source: String, target: String },
}

impl fmt::Display for RenameWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateFragment {
                recording_id,
                sequence_number,
                kept,
                replaced,
            } => write!(
                f,
                "錄影 {recording_id} 序號 {sequence_number} 重複: {kept} 取代了 {replaced}"
            ),
            Self::MissingPrimary { recording_id } => {
                write!(f, "錄影 {recording_id} 沒有第一個檔案")
            }
            Self::TargetExists { source, target } => {
                write!(f, "目標已存在，將被覆蓋: {source} -> {target}")
            }
        }
    }
}

pub trait WarningSink {
    fn warn(&mut self, warning: RenameWarning);
}

/// 預設：寫到日誌
#[derive(Debug, Default, Clone, Copy)]
pub struct LogWarnings;

impl WarningSink for LogWarnings {
    fn warn(&mut self, warning: RenameWarning) {
        warn!("{warning}");
    }
}

/// 收集警告，同時也寫到日誌
impl WarningSink for Vec<RenameWarning> {
    fn warn(&mut self, warning: RenameWarning) {
        warn!("{warning}");
        self.push(warning);
    }
}
