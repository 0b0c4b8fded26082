//! 答案填写核心 - 业务能力层
//!
//! 给定题目标签文本和答案值，在当前页面定位题目块，
//! 按固定顺序尝试三种填写策略，第一个成功的生效：
//! 1. 评分匹配（单个数字 → 评分控件）
//! 2. 选项匹配（显示文本包含答案 → 点击选项）
//! 3. 自由文本（清空后写入文本输入框）

use anyhow::Result;
use tracing::{debug, info, warn};

use crate::infrastructure::form_page::FormDom;
use crate::models::answer::AnswerValue;

/// 填写策略
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// 评分控件匹配（仅当规范化值是单个数字时适用）
    RatingScale,
    /// 选项显示文本匹配
    OptionText,
    /// 自由文本输入
    FreeText,
}

impl Strategy {
    /// 固定的尝试顺序
    pub const ORDER: [Strategy; 3] = [Strategy::RatingScale, Strategy::OptionText, Strategy::FreeText];

    /// 日志标签
    pub fn tag(self) -> &'static str {
        match self {
            Strategy::RatingScale => "Rate",
            Strategy::OptionText => "Click",
            Strategy::FreeText => "Type",
        }
    }
}

/// 单个字段一次填写尝试的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveOutcome {
    /// 某个策略完成了一次 UI 激活
    Applied(Strategy),
    /// 无值可填，未做任何操作
    Skipped,
    /// 当前页面没有包含该标签的题目块（题目应该在其他页面上）
    NotFound,
    /// 找到了题目块，但所有策略都失败
    FillFailed,
}

/// 答案填写器
///
/// 调用之间无状态；每次调用只作用于当前渲染的页面。
/// 字段落在哪一页事先未知，调用方需要在每次翻页后对同一字段重新调用
pub struct AnswerResolver;

impl AnswerResolver {
    pub fn new() -> Self {
        Self
    }

    /// 定位题目块并按策略顺序提交答案
    ///
    /// 成功时恰好发生一次 UI 激活；Skipped / NotFound 不触碰页面
    pub async fn resolve_and_apply<D: FormDom>(
        &self,
        dom: &D,
        label_text: &str,
        value: &AnswerValue,
    ) -> Result<ResolveOutcome> {
        let normalized = value.normalized();
        if normalized.is_empty() {
            return Ok(ResolveOutcome::Skipped);
        }

        // 定位：文本包含标签的题目块，多个匹配时取文档顺序的第一个
        let blocks = dom.question_blocks().await?;
        let Some(block) = blocks.iter().find(|b| b.text.contains(label_text)) else {
            return Ok(ResolveOutcome::NotFound);
        };

        for strategy in Strategy::ORDER {
            match self.attempt(dom, strategy, block.index, &normalized).await {
                Ok(true) => {
                    info!(
                        "  [{}] 已为 '{}' 填入 '{}'",
                        strategy.tag(),
                        label_text,
                        normalized
                    );
                    return Ok(ResolveOutcome::Applied(strategy));
                }
                Ok(false) => {}
                // 单个策略的失败不能阻止后续策略的尝试
                Err(e) => debug!("  [{}] 策略执行出错: {}", strategy.tag(), e),
            }
        }

        warn!(
            "  [FAIL] 找到了题目 '{}' 但无法填入 '{}'",
            label_text, normalized
        );
        Ok(ResolveOutcome::FillFailed)
    }

    async fn attempt<D: FormDom>(
        &self,
        dom: &D,
        strategy: Strategy,
        block: usize,
        normalized: &str,
    ) -> Result<bool> {
        match strategy {
            Strategy::RatingScale => {
                if !is_single_digit(normalized) {
                    return Ok(false);
                }
                dom.activate_rating(block, normalized).await
            }
            Strategy::OptionText => dom.activate_option(block, normalized).await,
            Strategy::FreeText => dom.write_text(block, normalized).await,
        }
    }
}

impl Default for AnswerResolver {
    fn default() -> Self {
        Self::new()
    }
}

fn is_single_digit(s: &str) -> bool {
    s.len() == 1 && s.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::form_page::mock::{MockAction, MockBlock, MockDom};

    fn resolver() -> AnswerResolver {
        AnswerResolver::new()
    }

    #[tokio::test]
    async fn empty_value_is_skipped_without_activation() {
        let dom = MockDom::single_page(vec![
            MockBlock::labeled("What is your age").with_text_entry()
        ]);

        let outcome = resolver()
            .resolve_and_apply(&dom, "What is your age", &AnswerValue::Empty)
            .await
            .unwrap();

        assert_eq!(outcome, ResolveOutcome::Skipped);
        assert_eq!(dom.activation_count(), 0);
    }

    #[tokio::test]
    async fn absent_label_reports_not_found_without_activation() {
        let dom = MockDom::single_page(vec![
            MockBlock::labeled("What is your Gender").with_options(&["Male", "Female"])
        ]);

        let outcome = resolver()
            .resolve_and_apply(&dom, "monthly salary range", &AnswerValue::parse("50k-75k"))
            .await
            .unwrap();

        assert_eq!(outcome, ResolveOutcome::NotFound);
        assert_eq!(dom.activation_count(), 0);
    }

    #[tokio::test]
    async fn single_digit_prefers_rating_over_option() {
        // 同一个题目块同时满足评分匹配和选项匹配，评分必须赢
        let dom = MockDom::single_page(vec![MockBlock::labeled("Overall student satisfaction")
            .with_rating(&["1", "2", "3", "4", "5"])
            .with_options(&["5 - Excellent"])]);

        let outcome = resolver()
            .resolve_and_apply(&dom, "Overall student satisfaction", &AnswerValue::parse("5.0"))
            .await
            .unwrap();

        assert_eq!(outcome, ResolveOutcome::Applied(Strategy::RatingScale));
        assert_eq!(
            dom.actions.borrow().as_slice(),
            &[MockAction::Rating {
                block: 0,
                digit: "5".to_string()
            }]
        );
    }

    #[tokio::test]
    async fn broken_rating_attempt_falls_through_to_option() {
        let dom = MockDom::single_page(vec![MockBlock::labeled("Faculty & teaching quality")
            .with_rating(&["4"])
            .broken_rating()
            .with_options(&["4"])]);

        let outcome = resolver()
            .resolve_and_apply(&dom, "Faculty & teaching quality", &AnswerValue::parse("4"))
            .await
            .unwrap();

        assert_eq!(outcome, ResolveOutcome::Applied(Strategy::OptionText));
        assert_eq!(dom.activation_count(), 1);
    }

    #[tokio::test]
    async fn multi_word_value_clicks_matching_option() {
        let dom = MockDom::single_page(vec![MockBlock::labeled("What is your Gender")
            .with_options(&["Male", "Female", "Prefer not to say"])]);

        let outcome = resolver()
            .resolve_and_apply(&dom, "What is your Gender", &AnswerValue::parse("Female"))
            .await
            .unwrap();

        assert_eq!(outcome, ResolveOutcome::Applied(Strategy::OptionText));
    }

    #[tokio::test]
    async fn free_text_is_the_last_resort() {
        let dom = MockDom::single_page(vec![
            MockBlock::labeled("What hardships did you face").with_text_entry()
        ]);

        let outcome = resolver()
            .resolve_and_apply(
                &dom,
                "What hardships did you face",
                &AnswerValue::parse("Financial pressure"),
            )
            .await
            .unwrap();

        assert_eq!(outcome, ResolveOutcome::Applied(Strategy::FreeText));
        assert_eq!(
            dom.actions.borrow().as_slice(),
            &[MockAction::Write {
                block: 0,
                text: "Financial pressure".to_string()
            }]
        );
    }

    #[tokio::test]
    async fn all_strategies_exhausted_reports_fill_failed() {
        // 题目块存在但没有任何可用控件
        let dom = MockDom::single_page(vec![MockBlock::labeled("city your university is located")]);

        let outcome = resolver()
            .resolve_and_apply(&dom, "city your university is located", &AnswerValue::parse("Lahore"))
            .await
            .unwrap();

        assert_eq!(outcome, ResolveOutcome::FillFailed);
        assert_eq!(dom.activation_count(), 0);
    }

    #[tokio::test]
    async fn ambiguous_label_takes_first_block_in_document_order() {
        let dom = MockDom::single_page(vec![
            MockBlock::labeled("Overall student satisfaction").with_options(&["5"]),
            MockBlock::labeled("Overall student satisfaction explain").with_text_entry(),
        ]);

        let outcome = resolver()
            .resolve_and_apply(&dom, "Overall student satisfaction", &AnswerValue::parse("5"))
            .await
            .unwrap();

        assert_eq!(outcome, ResolveOutcome::Applied(Strategy::OptionText));
        assert_eq!(
            dom.actions.borrow().as_slice(),
            &[MockAction::Option {
                block: 0,
                text: "5".to_string()
            }]
        );
    }
}
