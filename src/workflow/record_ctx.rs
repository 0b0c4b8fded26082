//! 提交上下文
//!
//! 封装"我正在提交数据集的第几行"这一信息

use std::fmt::Display;

/// 单行提交的上下文
#[derive(Debug, Clone)]
pub struct RecordCtx {
    /// 数据集中的行索引（从0开始）
    pub row_index: usize,

    /// 展示用的行号（从1开始，仅用于日志）
    pub row_number: usize,
}

impl RecordCtx {
    pub fn new(row_index: usize) -> Self {
        Self {
            row_index,
            row_number: row_index + 1,
        }
    }
}

impl Display for RecordCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[行 {}]", self.row_number)
    }
}
