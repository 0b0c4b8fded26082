//! 应用编排层
//!
//! 负责整次运行：加载数据集 → 过滤待提交行 → 启动浏览器 →
//! 逐行提交 → 标记完成 → 写回数据集

use anyhow::Result;
use std::path::Path;
use tracing::{error, info};

use crate::browser;
use crate::config::Config;
use crate::infrastructure::GoogleFormPage;
use crate::models::{self, AnswerValue, Dataset, PlannedAnswer, QUESTION_MAP};
use crate::utils::logging;
use crate::workflow::{RecordCtx, SubmissionFlow, SubmitOutcome};

/// 应用主结构
pub struct App {
    config: Config,
    dataset: Dataset,
}

impl App {
    /// 初始化应用：写日志文件头并加载数据集
    ///
    /// 数据集无法加载是整个运行中唯一的致命错误
    pub async fn initialize(config: Config) -> Result<Self> {
        logging::init_log_file(&config.output_log_file)?;

        let dataset =
            models::load_dataset(Path::new(&config.dataset_file), &config.status_column).await?;

        Ok(Self { config, dataset })
    }

    /// 运行应用主逻辑
    pub async fn run(mut self) -> Result<()> {
        let pending = self.dataset.pending_indices();
        if pending.is_empty() {
            // 全部完成时不碰浏览器，也不写文件
            info!("✅ 所有行都已提交完成，无需任何操作");
            return Ok(());
        }

        logging::log_startup(self.config.batch_size);
        logging::log_dataset_loaded(self.dataset.len(), pending.len());

        let batch: Vec<usize> = pending.into_iter().take(self.config.batch_size).collect();
        let total = batch.len();
        info!("📦 本次将提交 {} 行", total);

        let (browser, page) = browser::launch_headless_browser("about:blank").await?;
        let dom = GoogleFormPage::new(page);
        let flow = SubmissionFlow::new(&self.config);

        let mut success = 0usize;
        let mut failed = 0usize;

        for row_index in batch {
            let ctx = RecordCtx::new(row_index);
            info!("\n{}", "=".repeat(40));
            info!("{} 开始处理", ctx);

            let answers = plan_answers(&self.dataset, row_index);

            match flow.run(&dom, &answers, &ctx).await {
                Ok(SubmitOutcome::Submitted) => {
                    self.dataset.mark_done(row_index);
                    success += 1;
                }
                Ok(SubmitOutcome::SubmitMissing) => {
                    error!("{} ❌ 该行未能提交，保持待提交状态", ctx);
                    failed += 1;
                }
                Err(e) => {
                    // 单行的错误只中止这一行，运行继续处理下一行
                    error!("{} ❌ 提交过程中发生错误: {}", ctx, e);
                    failed += 1;
                }
            }
        }

        browser::shutdown_browser(browser).await;

        // 整个运行只在结束时写回一次
        models::save_dataset(Path::new(&self.config.dataset_file), &self.dataset).await?;
        logging::print_final_stats(success, failed, total, &self.config.output_log_file);

        Ok(())
    }
}

/// 从映射表和一行数据构建待提交的答案列表
///
/// 数据集中不存在的映射字段直接跳过
fn plan_answers(dataset: &Dataset, row_index: usize) -> Vec<PlannedAnswer> {
    QUESTION_MAP
        .iter()
        .filter_map(|(field, label)| {
            dataset
                .value(row_index, field)
                .map(|raw| PlannedAnswer::new(*field, *label, AnswerValue::parse(raw)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SubmissionRecord;

    #[test]
    fn plan_answers_skips_unmapped_columns() {
        let dataset = Dataset::new(
            vec!["Gender".to_string(), "Age".to_string(), "Unmapped".to_string()],
            vec![SubmissionRecord::new(vec![
                "Male".to_string(),
                "25.0".to_string(),
                "ignored".to_string(),
            ])],
            "Submission_Status",
        );

        let answers = plan_answers(&dataset, 0);

        assert_eq!(answers.len(), 2);
        assert_eq!(answers[0].field, "Gender");
        assert_eq!(answers[0].label, "What is your Gender");
        assert_eq!(answers[1].value.normalized(), "25");
    }

    #[test]
    fn plan_answers_maps_status_data_field_to_its_question() {
        // Status 是问卷里的就业状态字段，不是提交状态列
        let dataset = Dataset::new(
            vec!["Status".to_string()],
            vec![SubmissionRecord::new(vec!["Employed".to_string()])],
            "Submission_Status",
        );

        let answers = plan_answers(&dataset, 0);

        assert_eq!(answers.len(), 1);
        assert_eq!(answers[0].label, "employment status");
    }
}
