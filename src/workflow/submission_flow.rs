//! 单行提交流程 - 流程层
//!
//! 定义"一行数据 → 一次表单提交"的完整流程：
//! 打开表单 → 逐页机会式填写全部字段 → 翻页 → 最终提交。
//! 字段落在哪一页事先未知，所以每一页都会把所有字段重试一遍，
//! 出现在当前页的就填，没出现的留给后面的页

use anyhow::Result;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, error, info, warn};

use crate::config::Config;
use crate::infrastructure::form_page::FormDom;
use crate::models::answer::PlannedAnswer;
use crate::services::{AnswerResolver, ResolveOutcome, WarnWriter};
use crate::workflow::record_ctx::RecordCtx;

/// 翻页按钮的可见文本
const NEXT_BUTTON_LABEL: &str = "Next";
/// 最终提交按钮的可见文本
const SUBMIT_BUTTON_LABEL: &str = "Submit";

/// 单行提交的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// 找到并点击了提交按钮
    Submitted,
    /// 走完了所有页面但没有找到提交按钮，该行保持待提交
    SubmitMissing,
}

/// 填写统计
#[derive(Debug, Default, Clone, Copy)]
pub struct FillStats {
    pub applied: usize,
    pub skipped: usize,
    pub not_found: usize,
    pub fill_failed: usize,
}

/// 单行提交流程
pub struct SubmissionFlow {
    resolver: AnswerResolver,
    warn_writer: WarnWriter,
    form_url: String,
    page_count: usize,
    load_wait: Duration,
    nav_wait: Duration,
    submit_wait: Duration,
    verbose_logging: bool,
}

impl SubmissionFlow {
    pub fn new(config: &Config) -> Self {
        Self {
            resolver: AnswerResolver::new(),
            warn_writer: WarnWriter::with_path(config.warn_file.clone()),
            form_url: config.form_url.clone(),
            page_count: config.page_count,
            load_wait: Duration::from_millis(config.load_wait_ms),
            nav_wait: Duration::from_millis(config.nav_wait_ms),
            submit_wait: Duration::from_millis(config.submit_wait_ms),
            verbose_logging: config.verbose_logging,
        }
    }

    /// 提交一行数据
    pub async fn run<D: FormDom>(
        &self,
        dom: &D,
        answers: &[PlannedAnswer],
        ctx: &RecordCtx,
    ) -> Result<SubmitOutcome> {
        info!("{} 打开表单页面...", ctx);
        dom.navigate(&self.form_url).await?;
        sleep(self.load_wait).await;

        let mut stats = FillStats::default();

        for page_num in 1..=self.page_count {
            info!("{} ─ 第 {}/{} 页", ctx, page_num, self.page_count);
            self.fill_page(dom, answers, ctx, &mut stats).await?;

            // 最后一页不翻页，直接提交
            if page_num < self.page_count {
                match dom.advance(NEXT_BUTTON_LABEL).await {
                    Ok(true) => {}
                    Ok(false) => debug!("{} 当前页没有翻页按钮", ctx),
                    Err(e) => warn!("{} 翻页失败: {}", ctx, e),
                }
                sleep(self.nav_wait).await;
            }
        }

        self.log_stats(ctx, &stats);

        // 最终提交：只有点到提交按钮才算成功
        if dom.advance(SUBMIT_BUTTON_LABEL).await? {
            sleep(self.submit_wait).await;
            info!("{} ✅ 提交成功", ctx);
            Ok(SubmitOutcome::Submitted)
        } else {
            error!("{} ❌ 未找到提交按钮", ctx);
            Ok(SubmitOutcome::SubmitMissing)
        }
    }

    /// 在当前页面把所有字段尝试一遍
    async fn fill_page<D: FormDom>(
        &self,
        dom: &D,
        answers: &[PlannedAnswer],
        ctx: &RecordCtx,
        stats: &mut FillStats,
    ) -> Result<()> {
        for answer in answers {
            let outcome = self
                .resolver
                .resolve_and_apply(dom, &answer.label, &answer.value)
                .await?;

            match outcome {
                ResolveOutcome::Applied(_) => stats.applied += 1,
                ResolveOutcome::Skipped => stats.skipped += 1,
                ResolveOutcome::NotFound => {
                    stats.not_found += 1;
                    if self.verbose_logging {
                        debug!("{} 字段 {} 不在当前页", ctx, answer.field);
                    }
                }
                ResolveOutcome::FillFailed => {
                    stats.fill_failed += 1;
                    self.warn_writer
                        .write(ctx.row_number, &answer.field, &answer.value.normalized())
                        .await?;
                }
            }
        }
        Ok(())
    }

    fn log_stats(&self, ctx: &RecordCtx, stats: &FillStats) {
        info!(
            "{} 填写统计: 成功 {}, 跳过 {}, 未出现 {}, 失败 {}",
            ctx, stats.applied, stats.skipped, stats.not_found, stats.fill_failed
        );
    }
}
