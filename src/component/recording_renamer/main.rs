//! 錄影重新命名主模組
//!
//! 協調掃描、分組、重新命名與 .SEC 預覽檔清理的整體流程。
//! 所有檔案操作都以明確的資料夾路徑進行，不會更改行程的工作目錄

use super::action::{ActionMode, FileAction};
use super::classifier::FilenameClassifier;
use super::grouper::RecordingSet;
use super::target_name::target_name;
use super::warning::{LogWarnings, RenameWarning, WarningSink};
use crate::tools::{list_directory_files, validate_directory_exists};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// 預覽檔副檔名（比對時不分大小寫）
pub const PREVIEW_EXTENSION: &str = ".sec";

/// 執行選項
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameOptions {
    /// 要處理的資料夾
    pub directory: PathBuf,
    /// 試跑：只輸出動作，不改動檔案
    pub dry_run: bool,
    /// 是否刪除 .SEC 預覽檔
    pub delete_sec: bool,
}

impl Default for RenameOptions {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            dry_run: false,
            delete_sec: true,
        }
    }
}

/// 執行結果統計
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub renamed: usize,
    /// 沒有執行清理時為 `None`
    pub deleted: Option<usize>,
    /// 是否因中斷信號提前停止
    pub interrupted: bool,
}

/// 錄影重新命名器
pub struct RecordingRenamer {
    options: RenameOptions,
    classifier: FilenameClassifier,
    shutdown_signal: Arc<AtomicBool>,
}

impl RecordingRenamer {
    pub fn new(options: RenameOptions) -> Self {
        Self {
            options,
            classifier: FilenameClassifier::new(),
            shutdown_signal: Arc::new(AtomicBool::new(false)),
        }
    }

    /// 設定中斷信號，每個檔案處理前檢查
    #[must_use]
    pub fn with_shutdown_signal(mut self, shutdown_signal: Arc<AtomicBool>) -> Self {
        self.shutdown_signal = shutdown_signal;
        self
    }

    #[must_use]
    pub fn with_classifier(mut self, classifier: FilenameClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    pub const fn options(&self) -> &RenameOptions {
        &self.options
    }

    /// 執行完整流程，警告寫到日誌
    pub fn run(&self, out: &mut dyn Write) -> Result<RunSummary> {
        self.run_with_sink(out, &mut LogWarnings)
    }

    /// 執行完整流程，警告交給 `sink`
    ///
    /// 資料夾無效時在任何改動之前失敗；檔案操作失敗會中止剩下的批次，
    /// 已完成的重新命名不會還原
    pub fn run_with_sink(
        &self,
        out: &mut dyn Write,
        sink: &mut dyn WarningSink,
    ) -> Result<RunSummary> {
        let directory = self.options.directory.as_path();
        validate_directory_exists(directory)?;
        let display_dir = std::path::absolute(directory)
            .with_context(|| format!("無法取得絕對路徑: {}", directory.display()))?;

        let action = ActionMode::from_dry_run(self.options.dry_run).action();
        let dry_run_prefix = if action.is_dry_run() { "(dry run) " } else { "" };

        info!("開始掃描目錄: {}", display_dir.display());
        let recordings = self.scan_recordings(directory, sink)?;
        info!(
            "找到 {} 段錄影，共 {} 個檔案",
            recordings.len(),
            recordings.fragment_count()
        );

        let mut summary = RunSummary {
            renamed: self.rename_all(&recordings, directory, action, out, sink)?,
            ..RunSummary::default()
        };
        summary.interrupted = self.is_interrupted();

        if summary.renamed > 0 {
            writeln!(out, "{dry_run_prefix}Renamed {} files.", summary.renamed)?;
        } else {
            writeln!(out, "No files to rename in {}.", display_dir.display())?;
        }

        if self.options.delete_sec && !summary.interrupted {
            let deleted = self.delete_previews(directory, action, out)?;
            summary.interrupted = self.is_interrupted();

            if deleted > 0 {
                writeln!(out, "{dry_run_prefix}Deleted {deleted} SEC files.")?;
            } else {
                writeln!(out, "No SEC files to delete in {}.", display_dir.display())?;
            }
            summary.deleted = Some(deleted);
        }

        if summary.interrupted {
            warn!("收到中斷信號，已停止處理");
        }

        Ok(summary)
    }

    /// 掃描資料夾並分組
    pub fn scan_recordings(
        &self,
        directory: &Path,
        sink: &mut dyn WarningSink,
    ) -> Result<RecordingSet> {
        let files = list_directory_files(directory)?;
        Ok(RecordingSet::from_files(&files, &self.classifier, sink))
    }

    fn rename_all(
        &self,
        recordings: &RecordingSet,
        directory: &Path,
        action: &dyn FileAction,
        out: &mut dyn Write,
        sink: &mut dyn WarningSink,
    ) -> Result<usize> {
        let mut renamed = 0;

        for fragment in recordings.fragments() {
            if self.is_interrupted() {
                break;
            }

            let target = target_name(&fragment.recording_id, fragment.sequence_number);

            // 不阻止覆蓋，只回報
            if fragment.original_name != target && directory.join(&target).exists() {
                sink.warn(RenameWarning::TargetExists {
                    source: fragment.original_name.clone(),
                    target: target.clone(),
                });
            }

            action.rename(directory, &fragment.original_name, &target, out)?;
            renamed += 1;
        }

        Ok(renamed)
    }

    fn delete_previews(
        &self,
        directory: &Path,
        action: &dyn FileAction,
        out: &mut dyn Write,
    ) -> Result<usize> {
        let mut deleted = 0;

        for name in find_preview_files(directory)? {
            if self.is_interrupted() {
                break;
            }
            action.delete(directory, &name, out)?;
            deleted += 1;
        }

        Ok(deleted)
    }

    fn is_interrupted(&self) -> bool {
        self.shutdown_signal.load(Ordering::SeqCst)
    }
}

/// 列出資料夾內的 .SEC 預覽檔（一般檔案，副檔名不分大小寫），依檔名排序
pub fn find_preview_files(directory: &Path) -> Result<Vec<String>> {
    let names = list_directory_files(directory)?
        .into_iter()
        .map(|file| file.name)
        .filter(|name| is_preview_file(name))
        .collect::<Vec<_>>();

    debug!("找到 {} 個預覽檔", names.len());
    Ok(names)
}

fn is_preview_file(name: &str) -> bool {
    name.to_lowercase().ends_with(PREVIEW_EXTENSION)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(dir: &Path, names: &[&str]) {
        for name in names {
            fs::write(dir.join(name), name.as_bytes()).unwrap();
        }
    }

    fn output_of(renamer: &RecordingRenamer) -> (String, RunSummary) {
        let mut out: Vec<u8> = Vec::new();
        let summary = renamer.run(&mut out).unwrap();
        (String::from_utf8(out).unwrap(), summary)
    }

    #[test]
    fn test_is_preview_file() {
        assert!(is_preview_file("A.SEC"));
        assert!(is_preview_file("b.sec"));
        assert!(is_preview_file("YDXJ0732.Sec"));
        assert!(!is_preview_file("YDXJ0732.MP4"));
        assert!(!is_preview_file("second.txt"));
    }

    #[test]
    fn test_find_preview_files_skips_directories() {
        let temp_dir = TempDir::new().unwrap();
        touch(temp_dir.path(), &["A.SEC", "b.sec", "YDXJ0001.MP4"]);
        fs::create_dir(temp_dir.path().join("old.sec")).unwrap();

        let previews = find_preview_files(temp_dir.path()).unwrap();
        assert_eq!(previews, vec!["A.SEC", "b.sec"]);
    }

    #[test]
    fn test_dry_run_rename_lines() {
        let temp_dir = TempDir::new().unwrap();
        touch(temp_dir.path(), &["YDXJ0732.MP4", "YN010732.MP4"]);

        let renamer = RecordingRenamer::new(RenameOptions {
            directory: temp_dir.path().to_path_buf(),
            dry_run: true,
            delete_sec: false,
        });
        let (output, summary) = output_of(&renamer);

        assert_eq!(
            output,
            "rename:     YDXJ0732.MP4 -> 0732_00.mp4\n\
             rename:     YN010732.MP4 -> 0732_01.mp4\n\
             (dry run) Renamed 2 files.\n"
        );
        assert_eq!(summary.renamed, 2);
        assert_eq!(summary.deleted, None);
        assert!(temp_dir.path().join("YDXJ0732.MP4").exists());
    }

    #[test]
    fn test_cleanup_disabled_keeps_previews() {
        let temp_dir = TempDir::new().unwrap();
        touch(temp_dir.path(), &["A.SEC"]);

        let renamer = RecordingRenamer::new(RenameOptions {
            directory: temp_dir.path().to_path_buf(),
            dry_run: false,
            delete_sec: false,
        });
        let (output, summary) = output_of(&renamer);

        assert_eq!(
            output,
            format!("No files to rename in {}.\n", temp_dir.path().display())
        );
        assert_eq!(summary.deleted, None);
        assert!(temp_dir.path().join("A.SEC").exists());
    }

    #[test]
    fn test_interrupted_before_start() {
        let temp_dir = TempDir::new().unwrap();
        touch(temp_dir.path(), &["YDXJ0732.MP4", "A.SEC"]);

        let renamer = RecordingRenamer::new(RenameOptions {
            directory: temp_dir.path().to_path_buf(),
            ..RenameOptions::default()
        })
        .with_shutdown_signal(Arc::new(AtomicBool::new(true)));
        let (_, summary) = output_of(&renamer);

        assert!(summary.interrupted);
        assert_eq!(summary.renamed, 0);
        assert_eq!(summary.deleted, None);
        assert!(temp_dir.path().join("YDXJ0732.MP4").exists());
        assert!(temp_dir.path().join("A.SEC").exists());
    }

    #[test]
    fn test_target_exists_warning() {
        let temp_dir = TempDir::new().unwrap();
        touch(temp_dir.path(), &["YDXJ0732.MP4", "0732_00.mp4"]);

        let renamer = RecordingRenamer::new(RenameOptions {
            directory: temp_dir.path().to_path_buf(),
            dry_run: true,
            delete_sec: false,
        });
        let mut out: Vec<u8> = Vec::new();
        let mut warnings: Vec<RenameWarning> = Vec::new();
        renamer.run_with_sink(&mut out, &mut warnings).unwrap();

        assert_eq!(
            warnings,
            vec![RenameWarning::TargetExists {
                source: "YDXJ0732.MP4".to_string(),
                target: "0732_00.mp4".to_string(),
            }]
        );
    }

    #[test]
    fn test_default_options() {
        let options = RenameOptions::default();
        assert_eq!(options.directory, PathBuf::from("."));
        assert!(!options.dry_run);
        assert!(options.delete_sec);
    }
}
