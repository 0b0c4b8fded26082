//! 警告写入服务 - 业务能力层
//!
//! 只负责把"找到了题目却填不进去"的字段追加到 warn.txt，不关心流程

use anyhow::Result;
use std::fs::OpenOptions;
use std::io::Write;
use tracing::debug;

/// 警告写入服务
pub struct WarnWriter {
    warn_file_path: String,
}

impl WarnWriter {
    pub fn new() -> Self {
        Self {
            warn_file_path: "warn.txt".to_string(),
        }
    }

    /// 使用自定义文件路径创建
    pub fn with_path(path: impl Into<String>) -> Self {
        Self {
            warn_file_path: path.into(),
        }
    }

    /// 记录一个无法填写的字段
    pub async fn write(&self, row_number: usize, field: &str, answer: &str) -> Result<()> {
        debug!("写入警告: 行 {} | 字段 {}", row_number, field);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.warn_file_path)?;

        let warn_msg = format!("行 {} | 字段 {} | 答案: {}\n", row_number, field, answer);
        file.write_all(warn_msg.as_bytes())?;

        Ok(())
    }
}

impl Default for WarnWriter {
    fn default() -> Self {
        Self::new()
    }
}
