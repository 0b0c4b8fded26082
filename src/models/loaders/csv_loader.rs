//! CSV 数据集加载与写回
//!
//! 启动时无法读取数据集是整个运行中唯一的致命错误

use crate::models::record::{Dataset, SubmissionRecord};
use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;

/// 从 CSV 文件加载数据集
///
/// 如果状态列不存在会自动创建（默认为空，即全部待提交）
pub async fn load_dataset(path: &Path, status_column: &str) -> Result<Dataset> {
    let content = fs::read_to_string(path)
        .await
        .with_context(|| format!("无法读取数据集文件: {}", path.display()))?;

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .with_context(|| format!("无法解析CSV表头: {}", path.display()))?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.with_context(|| format!("无法解析CSV行: {}", path.display()))?;
        rows.push(SubmissionRecord::new(
            record.iter().map(|v| v.to_string()).collect(),
        ));
    }

    let dataset = Dataset::new(headers, rows, status_column);
    tracing::info!("成功加载 {} 行数据", dataset.len());

    Ok(dataset)
}

/// 将数据集整体写回原文件
///
/// 整个运行只在结束时写回一次，不做增量持久化
pub async fn save_dataset(path: &Path, dataset: &Dataset) -> Result<()> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record(dataset.headers())
        .context("无法写入CSV表头")?;
    for row in dataset.rows() {
        writer.write_record(&row.values).context("无法写入CSV行")?;
    }

    let data = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("无法完成CSV序列化: {}", e))?;

    fs::write(path, data)
        .await
        .with_context(|| format!("无法写回数据集文件: {}", path.display()))?;

    tracing::info!("数据集已写回: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_csv(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("form_auto_submit_{}_{}", std::process::id(), name));
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn load_creates_missing_status_column() {
        tokio_test::block_on(async {
            let path = temp_csv("load.csv", "Gender,Age\nMale,25\nFemale,30\n");
            let dataset = load_dataset(&path, "Submission_Status").await.unwrap();

            assert_eq!(dataset.len(), 2);
            assert_eq!(dataset.headers().last().unwrap(), "Submission_Status");
            assert_eq!(dataset.pending_indices(), vec![0, 1]);
            assert_eq!(dataset.value(1, "Age"), Some("30"));

            std::fs::remove_file(path).ok();
        });
    }

    #[test]
    fn save_round_trips_status_updates() {
        tokio_test::block_on(async {
            let path = temp_csv("roundtrip.csv", "Gender,Age,Submission_Status\nMale,25,\n");
            let mut dataset = load_dataset(&path, "Submission_Status").await.unwrap();

            dataset.mark_done(0);
            save_dataset(&path, &dataset).await.unwrap();

            let reloaded = load_dataset(&path, "Submission_Status").await.unwrap();
            assert!(reloaded.is_done(0));
            assert!(reloaded.pending_indices().is_empty());

            std::fs::remove_file(path).ok();
        });
    }

    #[test]
    fn missing_file_is_an_error() {
        tokio_test::block_on(async {
            let path = std::env::temp_dir().join("form_auto_submit_does_not_exist.csv");
            assert!(load_dataset(&path, "Submission_Status").await.is_err());
        });
    }
}
