//! 檔名分類模組
//!
//! 以規則表辨識相機輸出的檔名：每條規則是一個正規表示式加上擷取群組的位置

use anyhow::Result;
use regex::Regex;
use std::sync::LazyLock;

/// 片段類型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentKind {
    /// 錄影的第一個檔案
    Primary,
    /// 因檔案大小限制而切出的後續檔案
    Continuation,
}

/// 屬於某段錄影的單一檔案
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    /// 目前在磁碟上的檔名
    pub original_name: String,
    /// 四位數錄影編號（保留前導零）
    pub recording_id: String,
    /// 0 為第一個檔案，1 之後為後續檔案
    pub sequence_number: u32,
    pub kind: FragmentKind,
}

/// 一條命名規則
#[derive(Debug, Clone)]
pub struct NamingRule {
    pub kind: FragmentKind,
    pattern: Regex,
    recording_group: usize,
    /// 沒有序號群組時序號固定為 0
    sequence_group: Option<usize>,
}

impl NamingRule {
    pub fn new(
        kind: FragmentKind,
        pattern: &str,
        recording_group: usize,
        sequence_group: Option<usize>,
    ) -> Result<Self> {
        Ok(Self {
            kind,
            pattern: Regex::new(pattern)?,
            recording_group,
            sequence_group,
        })
    }

    /// 套用規則，成功時回傳片段
    pub fn apply(&self, filename: &str) -> Option<Fragment> {
        let captures = self.pattern.captures(filename)?;
        let recording_id = captures.get(self.recording_group)?.as_str().to_string();
        let sequence_number = match self.sequence_group {
            Some(group) => captures.get(group)?.as_str().parse().ok()?,
            None => 0,
        };

        Some(Fragment {
            original_name: filename.to_string(),
            recording_id,
            sequence_number,
            kind: self.kind,
        })
    }
}

// 只錨定開頭：`YDXJ0732.MP4` 之後多出的字元不影響比對
static DEFAULT_RULES: LazyLock<Vec<NamingRule>> = LazyLock::new(|| {
    vec![
        NamingRule::new(FragmentKind::Primary, r"^YDXJ([0-9]{4})\.MP4", 1, None)
            .expect("Invalid regex"),
        NamingRule::new(
            FragmentKind::Continuation,
            r"^YN([0-9]{2})([0-9]{4})\.MP4",
            2,
            Some(1),
        )
        .expect("Invalid regex"),
    ]
});

/// 檔名分類器
#[derive(Debug, Clone)]
pub struct FilenameClassifier {
    rules: Vec<NamingRule>,
}

impl Default for FilenameClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl FilenameClassifier {
    /// 使用 Yi 相機的兩條預設規則
    pub fn new() -> Self {
        Self {
            rules: DEFAULT_RULES.clone(),
        }
    }

    /// 追加一條規則，排在既有規則之後
    #[must_use]
    pub fn with_rule(mut self, rule: NamingRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// 依序套用規則，第一條符合的規則決定結果；都不符合時回傳 `None`
    pub fn classify(&self, filename: &str) -> Option<Fragment> {
        self.rules.iter().find_map(|rule| rule.apply(filename))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(name: &str) -> Option<Fragment> {
        FilenameClassifier::new().classify(name)
    }

    #[test]
    fn test_primary_fragment() {
        let fragment = classify("YDXJ0732.MP4").unwrap();
        assert_eq!(fragment.recording_id, "0732");
        assert_eq!(fragment.sequence_number, 0);
        assert_eq!(fragment.kind, FragmentKind::Primary);
        assert_eq!(fragment.original_name, "YDXJ0732.MP4");
    }

    #[test]
    fn test_continuation_fragment() {
        let fragment = classify("YN020732.MP4").unwrap();
        assert_eq!(fragment.recording_id, "0732");
        assert_eq!(fragment.sequence_number, 2);
        assert_eq!(fragment.kind, FragmentKind::Continuation);
    }

    #[test]
    fn test_continuation_two_digit_sequence() {
        let fragment = classify("YN150001.MP4").unwrap();
        assert_eq!(fragment.recording_id, "0001");
        assert_eq!(fragment.sequence_number, 15);
    }

    #[test]
    fn test_leading_zero_id_kept() {
        let fragment = classify("YDXJ0007.MP4").unwrap();
        assert_eq!(fragment.recording_id, "0007");
    }

    #[test]
    fn test_case_sensitive_extension_and_prefix() {
        assert!(classify("YDXJ0732.mp4").is_none());
        assert!(classify("ydxj0732.MP4").is_none());
        assert!(classify("yn010732.MP4").is_none());
    }

    #[test]
    fn test_must_match_at_start() {
        assert!(classify("xYDXJ0732.MP4").is_none());
        assert!(classify(" YN010732.MP4").is_none());
    }

    #[test]
    fn test_trailing_text_still_matches() {
        let fragment = classify("YDXJ0732.MP4.bak").unwrap();
        assert_eq!(fragment.recording_id, "0732");
        assert_eq!(fragment.original_name, "YDXJ0732.MP4.bak");
    }

    #[test]
    fn test_wrong_digit_counts_ignored() {
        assert!(classify("YDXJ732.MP4").is_none());
        assert!(classify("YDXJ07321.MP4").is_none());
        assert!(classify("YN10732.MP4").is_none());
    }

    #[test]
    fn test_unrelated_files_ignored() {
        assert!(classify("YDXJ0732.SEC").is_none());
        assert!(classify("0732_00.mp4").is_none());
        assert!(classify("notes.txt").is_none());
        assert!(classify("").is_none());
    }

    #[test]
    fn test_non_ascii_digits_ignored() {
        assert!(classify("YDXJ０７３２.MP4").is_none());
    }

    #[test]
    fn test_custom_rule_appended() {
        let rule = NamingRule::new(FragmentKind::Primary, r"^GOPR([0-9]{4})\.MP4", 1, None).unwrap();
        let classifier = FilenameClassifier::new().with_rule(rule);

        let fragment = classifier.classify("GOPR0100.MP4").unwrap();
        assert_eq!(fragment.recording_id, "0100");
        assert_eq!(fragment.sequence_number, 0);
        assert!(classifier.classify("YN010100.MP4").is_some());
    }

    #[test]
    fn test_invalid_rule_pattern() {
        assert!(NamingRule::new(FragmentKind::Primary, r"(", 1, None).is_err());
    }
}
