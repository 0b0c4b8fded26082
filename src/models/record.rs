//! 数据集模型
//!
//! 一行数据对应一次表单提交，提交状态记录在数据集自身的状态列中

/// 状态列中表示"已提交"的标记值
pub const STATUS_DONE: &str = "Done";

/// 数据集中的一行（一次计划中的提交）
#[derive(Debug, Clone)]
pub struct SubmissionRecord {
    /// 按表头顺序排列的单元格值
    pub values: Vec<String>,
}

impl SubmissionRecord {
    pub fn new(values: Vec<String>) -> Self {
        Self { values }
    }
}

/// 内存中的完整数据集
///
/// 状态列与同名数据列（例如问卷里的 Status 字段）按列名精确区分，
/// 永远不会互相混用
#[derive(Debug, Clone)]
pub struct Dataset {
    headers: Vec<String>,
    status_index: usize,
    rows: Vec<SubmissionRecord>,
}

impl Dataset {
    /// 创建数据集
    ///
    /// 如果表头中不存在状态列，会自动追加一列并为每行补上空值
    pub fn new(mut headers: Vec<String>, mut rows: Vec<SubmissionRecord>, status_column: &str) -> Self {
        let status_index = match headers.iter().position(|h| h == status_column) {
            Some(idx) => idx,
            None => {
                headers.push(status_column.to_string());
                headers.len() - 1
            }
        };

        // 补齐短行、截断超长行，保证每行与表头等宽
        for row in rows.iter_mut() {
            row.values.truncate(headers.len());
            while row.values.len() < headers.len() {
                row.values.push(String::new());
            }
        }

        Self {
            headers,
            status_index,
            rows,
        }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[SubmissionRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 按列名取某行的单元格值
    pub fn value(&self, row: usize, column: &str) -> Option<&str> {
        let col = self.headers.iter().position(|h| h == column)?;
        self.rows.get(row).and_then(|r| r.values.get(col)).map(String::as_str)
    }

    /// 该行是否已提交完成
    pub fn is_done(&self, row: usize) -> bool {
        self.rows
            .get(row)
            .and_then(|r| r.values.get(self.status_index))
            .map(|v| v == STATUS_DONE)
            .unwrap_or(false)
    }

    /// 将该行标记为已提交
    ///
    /// 只应在最终提交按钮被成功点击后调用
    pub fn mark_done(&mut self, row: usize) {
        if let Some(r) = self.rows.get_mut(row) {
            if let Some(cell) = r.values.get_mut(self.status_index) {
                *cell = STATUS_DONE.to_string();
            }
        }
    }

    /// 所有未提交行的索引
    pub fn pending_indices(&self) -> Vec<usize> {
        (0..self.rows.len()).filter(|&i| !self.is_done(i)).collect()
    }
}
