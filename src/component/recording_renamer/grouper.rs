//! 錄影分組模組
//!
//! 將分類後的片段依錄影編號分組，每組內以序號為鍵

use super::classifier::{FilenameClassifier, Fragment};
use super::warning::{RenameWarning, WarningSink};
use crate::tools::FileInfo;
use log::debug;
use std::collections::BTreeMap;

/// 一段錄影：序號 -> 片段
pub type Recording = BTreeMap<u32, Fragment>;

/// 錄影編號 -> 錄影
///
/// 迭代順序固定為錄影編號、序號遞增
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingSet {
    recordings: BTreeMap<String, Recording>,
}

impl RecordingSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// 分類檔案並分組，不符合任何規則的檔案直接略過
    pub fn from_files(
        files: &[FileInfo],
        classifier: &FilenameClassifier,
        sink: &mut dyn WarningSink,
    ) -> Self {
        let fragments = files.iter().filter_map(|file| {
            let fragment = classifier.classify(&file.name);
            if fragment.is_none() {
                debug!("略過不符合命名規則的檔案: {}", file.name);
            }
            fragment
        });

        Self::from_fragments(fragments, sink)
    }

    pub fn from_fragments(
        fragments: impl IntoIterator<Item = Fragment>,
        sink: &mut dyn WarningSink,
    ) -> Self {
        let mut set = Self::new();
        for fragment in fragments {
            set.insert(fragment, sink);
        }
        set.report_missing_primaries(sink);
        set
    }

    /// 加入片段；同一位置已有片段時以新的取代舊的，並回傳被取代的片段
    pub fn insert(&mut self, fragment: Fragment, sink: &mut dyn WarningSink) -> Option<Fragment> {
        let recording_id = fragment.recording_id.clone();
        let sequence_number = fragment.sequence_number;
        let kept = fragment.original_name.clone();

        let replaced = self
            .recordings
            .entry(recording_id.clone())
            .or_default()
            .insert(sequence_number, fragment);

        if let Some(previous) = &replaced {
            sink.warn(RenameWarning::DuplicateFragment {
                recording_id,
                sequence_number,
                kept,
                replaced: previous.original_name.clone(),
            });
        }

        replaced
    }

    fn report_missing_primaries(&self, sink: &mut dyn WarningSink) {
        for (recording_id, recording) in &self.recordings {
            if !recording.contains_key(&0) {
                sink.warn(RenameWarning::MissingPrimary {
                    recording_id: recording_id.clone(),
                });
            }
        }
    }

    pub fn get(&self, recording_id: &str) -> Option<&Recording> {
        self.recordings.get(recording_id)
    }

    /// 錄影數量
    pub fn len(&self) -> usize {
        self.recordings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recordings.is_empty()
    }

    /// 所有錄影的片段總數
    pub fn fragment_count(&self) -> usize {
        self.recordings.values().map(BTreeMap::len).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Recording)> {
        self.recordings.iter().map(|(id, rec)| (id.as_str(), rec))
    }

    pub fn fragments(&self) -> impl Iterator<Item = &Fragment> {
        self.recordings.values().flat_map(BTreeMap::values)
    }
}
