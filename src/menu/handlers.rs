//! 互動模式
//!
//! 詢問資料夾、先試跑預覽、確認後才實際執行

use crate::component::{RecordingRenamer, RenameOptions, RunSummary};
use anyhow::Result;
use console::{Term, style};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input};
use log::{info, warn};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// `options.directory` 作為輸入提示的預設值；`options.dry_run` 為真時只預覽
pub fn run_interactive(
    term: &Term,
    shutdown_signal: &Arc<AtomicBool>,
    options: &RenameOptions,
) -> Result<()> {
    println!("{}", style("=== Yi 錄影重新命名 ===").cyan().bold());

    let directory = prompt_directory(options)?;
    let mut stdout = term.clone();

    println!("{}", style("預覽（不會改動任何檔案）：").dim());
    let preview = RecordingRenamer::new(RenameOptions {
        directory: directory.clone(),
        dry_run: true,
        delete_sec: options.delete_sec,
    })
    .run(&mut stdout)?;

    if !has_work(&preview) {
        println!("{}", style("沒有需要處理的檔案").yellow());
        return Ok(());
    }

    if options.dry_run {
        println!("{}", style("試跑模式，未改動任何檔案").yellow());
        return Ok(());
    }

    if !confirm_run()? {
        println!("{}", style("操作已取消").yellow());
        return Ok(());
    }

    if shutdown_signal.load(Ordering::SeqCst) {
        warn!("收到中斷信號，停止處理");
        return Ok(());
    }

    writeln!(stdout)?;
    let summary = RecordingRenamer::new(RenameOptions {
        directory,
        dry_run: false,
        delete_sec: options.delete_sec,
    })
    .with_shutdown_signal(Arc::clone(shutdown_signal))
    .run(&mut stdout)?;

    if summary.interrupted {
        println!("{}", style("操作已中斷").yellow());
    } else {
        println!("{}", style("完成").green().bold());
    }
    info!(
        "互動模式完成 - 重新命名: {}, 刪除: {}",
        summary.renamed,
        summary.deleted.unwrap_or(0)
    );

    Ok(())
}

/// 預覽中是否有任何要重新命名或刪除的檔案
fn has_work(preview: &RunSummary) -> bool {
    preview.renamed > 0 || preview.deleted.unwrap_or(0) > 0
}

fn prompt_directory(options: &RenameOptions) -> Result<PathBuf> {
    let path: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("請輸入錄影資料夾路徑")
        .default(options.directory.to_string_lossy().to_string())
        .interact_text()?;
    Ok(PathBuf::from(path.trim()))
}

fn confirm_run() -> Result<bool> {
    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt("確定要重新命名這些檔案嗎？")
        .default(false)
        .interact()?;
    Ok(confirmed)
}
