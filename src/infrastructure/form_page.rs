//! 表单页面能力抽象 - 基础设施层
//!
//! 定义填表核心所依赖的全部 UI 自动化能力：
//! 导航、枚举题目块、激活选项、写入文本、翻页/提交。
//! 上层（resolver / workflow）只依赖这个 trait，不接触具体浏览器

use anyhow::Result;
use serde::Deserialize;

/// 页面上的一个题目块（题目标签与输入控件的分组）
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionBlock {
    /// 在当前页面中的文档顺序索引
    pub index: usize,
    /// 题目块的合并文本内容
    pub text: String,
}

/// UI 自动化能力
///
/// 职责：
/// - 只暴露对"当前渲染页面"的操作
/// - 各个 activate / write 方法返回是否找到并激活了控件
/// - 不认识字段映射，也不关心策略顺序
#[allow(async_fn_in_trait)]
pub trait FormDom {
    /// 导航到指定 URL
    async fn navigate(&self, url: &str) -> Result<()>;

    /// 枚举当前可见的全部题目块
    async fn question_blocks(&self) -> Result<Vec<QuestionBlock>>;

    /// 在指定题目块内按数字激活评分控件
    ///
    /// 匹配规则：控件的机器值或无障碍标签等于或包含该数字
    async fn activate_rating(&self, block: usize, digit: &str) -> Result<bool>;

    /// 在指定题目块内激活显示文本包含给定值的选项
    async fn activate_option(&self, block: usize, text: &str) -> Result<bool>;

    /// 在指定题目块内找到文本输入控件，清空后写入给定值
    async fn write_text(&self, block: usize, text: &str) -> Result<bool>;

    /// 按可见标签点击翻页或提交按钮，返回是否找到
    async fn advance(&self, button_label: &str) -> Result<bool>;
}
