/// 產生新檔名：`{錄影編號}_{序號補零到兩位}.mp4`，副檔名一律小寫
///
/// 序號 100 以上會超過兩位數，不做截斷
pub fn target_name(recording_id: &str, sequence_number: u32) -> String {
    format!("{recording_id}_{sequence_number:02}.mp4")
}
