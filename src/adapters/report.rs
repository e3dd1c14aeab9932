use crate::core::ReportSink;
use crate::utils::error::Result;
use chrono::{DateTime, Local};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

pub const DEFAULT_REPORT_PATH: &str = "coffee_report.txt";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// `<timestamp> - <message>\n`
pub fn format_report_line(timestamp: DateTime<Local>, message: &str) -> String {
    format!("{} - {}\n", timestamp.format(TIMESTAMP_FORMAT), message)
}

/// 只會附加的文字報表檔
#[derive(Debug, Clone)]
pub struct FileReport {
    path: PathBuf,
}

impl FileReport {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileReport {
    fn default() -> Self {
        Self::new(DEFAULT_REPORT_PATH)
    }
}

impl ReportSink for FileReport {
    fn append_line(&mut self, message: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let line = format_report_line(Local::now(), message);
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        // 一次寫完整行，避免多個寫入者交錯
        file.write_all(line.as_bytes())?;

        tracing::debug!("Appended report line to {}", self.path.display());
        Ok(())
    }
}

/// 記憶體內的報表，給不需要檔案系統的呼叫端
#[derive(Debug, Clone, Default)]
pub struct MemoryReport {
    lines: Vec<String>,
}

impl MemoryReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// 含時間戳記的完整行
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// 去掉時間戳記後的訊息
    pub fn messages(&self) -> Vec<&str> {
        self.lines
            .iter()
            .map(|line| {
                line.trim_end_matches('\n')
                    .split_once(" - ")
                    .map_or(line.as_str(), |(_, message)| message)
            })
            .collect()
    }
}

impl ReportSink for MemoryReport {
    fn append_line(&mut self, message: &str) -> Result<()> {
        self.lines.push(format_report_line(Local::now(), message));
        Ok(())
    }
}
