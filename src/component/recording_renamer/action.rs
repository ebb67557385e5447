//! 檔案操作策略
//!
//! 實際執行與試跑共用同一套流程，差別只在這裡的實作：
//! `Apply` 真的改動檔案系統，`Simulate` 只輸出會做什麼

use crate::error::RenameError;
use anyhow::Result;
use log::info;
use std::fs;
use std::io::Write;
use std::path::Path;

pub trait FileAction {
    /// 將 `directory` 內的 `source` 重新命名為 `target`
    fn rename(
        &self,
        directory: &Path,
        source: &str,
        target: &str,
        out: &mut dyn Write,
    ) -> Result<()>;

    /// 刪除 `directory` 內的 `name`
    fn delete(&self, directory: &Path, name: &str, out: &mut dyn Write) -> Result<()>;

    fn is_dry_run(&self) -> bool;
}

/// 實際改動檔案系統
#[derive(Debug, Default, Clone, Copy)]
pub struct Apply;

/// 試跑：只輸出動作
#[derive(Debug, Default, Clone, Copy)]
pub struct Simulate;

impl FileAction for Apply {
    fn rename(
        &self,
        directory: &Path,
        source: &str,
        target: &str,
        _out: &mut dyn Write,
    ) -> Result<()> {
        let source_path = directory.join(source);
        fs::rename(&source_path, directory.join(target))
            .map_err(|e| RenameError::filesystem("重新命名", source_path, e))?;
        info!("重新命名: {source} -> {target}");
        Ok(())
    }

    fn delete(&self, directory: &Path, name: &str, _out: &mut dyn Write) -> Result<()> {
        let path = directory.join(name);
        fs::remove_file(&path).map_err(|e| RenameError::filesystem("刪除", path, e))?;
        info!("刪除: {name}");
        Ok(())
    }

    fn is_dry_run(&self) -> bool {
        false
    }
}

impl FileAction for Simulate {
    fn rename(
        &self,
        _directory: &Path,
        source: &str,
        target: &str,
        out: &mut dyn Write,
    ) -> Result<()> {
        writeln!(out, "rename: {source:>16} -> {target}")?;
        Ok(())
    }

    fn delete(&self, _directory: &Path, name: &str, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "delete: {name}")?;
        Ok(())
    }

    fn is_dry_run(&self) -> bool {
        true
    }
}

/// 每次執行只選一次，重新命名與刪除共用
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ActionMode {
    #[default]
    Apply,
    Simulate,
}

impl ActionMode {
    #[must_use]
    pub const fn from_dry_run(dry_run: bool) -> Self {
        if dry_run { Self::Simulate } else { Self::Apply }
    }

    #[must_use]
    pub fn action(self) -> &'static dyn FileAction {
        match self {
            Self::Apply => &Apply,
            Self::Simulate => &Simulate,
        }
    }
}
