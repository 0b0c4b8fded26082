//! Google 表单页面驱动 - 基础设施层
//!
//! 持有唯一的 Page 资源，通过执行 JS 片段实现 FormDom 能力。
//! Google 表单的题目块是 div[role='listitem']，评分控件是
//! div[role='radio']（带 data-value），翻页/提交按钮是包含
//! "Next"/"Submit" 文本的 span

use anyhow::{Context, Result};
use chromiumoxide::Page;
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;
use tracing::debug;

use crate::infrastructure::form_page::{FormDom, QuestionBlock};

/// Google 表单页面驱动
pub struct GoogleFormPage {
    page: Page,
}

impl GoogleFormPage {
    pub fn new(page: Page) -> Self {
        Self { page }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    /// 执行 JS 代码并返回 JSON 结果
    async fn eval(&self, js_code: impl Into<String>) -> Result<JsonValue> {
        let result = self.page.evaluate(js_code.into()).await?;
        let json_value = result.into_value().context("无法解析JS执行结果")?;
        Ok(json_value)
    }

    /// 执行 JS 代码并反序列化为指定类型
    async fn eval_as<T: DeserializeOwned>(&self, js_code: impl Into<String>) -> Result<T> {
        let json_value = self.eval(js_code).await?;
        let typed_value = serde_json::from_value(json_value)?;
        Ok(typed_value)
    }
}

impl FormDom for GoogleFormPage {
    async fn navigate(&self, url: &str) -> Result<()> {
        debug!("导航到: {}", url);
        self.page
            .goto(url)
            .await
            .with_context(|| format!("导航到 {} 失败", url))?;
        Ok(())
    }

    async fn question_blocks(&self) -> Result<Vec<QuestionBlock>> {
        let js = r#"
            (() => {
                const blocks = Array.from(document.querySelectorAll("div[role='listitem']"));
                return blocks.map((block, index) => ({
                    index,
                    text: block.innerText || block.textContent || ""
                }));
            })()
        "#;
        let blocks: Vec<QuestionBlock> = self.eval_as(js).await?;
        debug!("当前页面有 {} 个题目块", blocks.len());
        Ok(blocks)
    }

    async fn activate_rating(&self, block: usize, digit: &str) -> Result<bool> {
        let needle = serde_json::to_string(digit)?;
        let js = format!(
            r#"
            (() => {{
                const blocks = document.querySelectorAll("div[role='listitem']");
                const block = blocks[{block}];
                if (!block) return false;
                const needle = {needle};
                const choices = block.querySelectorAll("div[role='radio'], div[role='checkbox']");
                for (const choice of choices) {{
                    const value = choice.getAttribute('data-value') || '';
                    const label = choice.getAttribute('aria-label') || '';
                    if (value === needle || value.includes(needle)
                        || label === needle || label.includes(needle)) {{
                        choice.click();
                        return true;
                    }}
                }}
                return false;
            }})()
            "#
        );
        self.eval_as(js).await
    }

    async fn activate_option(&self, block: usize, text: &str) -> Result<bool> {
        let needle = serde_json::to_string(text)?;
        let js = format!(
            r#"
            (() => {{
                const blocks = document.querySelectorAll("div[role='listitem']");
                const block = blocks[{block}];
                if (!block) return false;
                const needle = {needle};
                const spans = block.querySelectorAll("span");
                for (const span of spans) {{
                    if ((span.textContent || '').includes(needle)) {{
                        span.click();
                        return true;
                    }}
                }}
                return false;
            }})()
            "#
        );
        self.eval_as(js).await
    }

    async fn write_text(&self, block: usize, text: &str) -> Result<bool> {
        let content = serde_json::to_string(text)?;
        // 通过原生 value setter 写入并派发 input 事件，
        // 否则表单的前端框架不会记录这次输入
        let js = format!(
            r#"
            (() => {{
                const blocks = document.querySelectorAll("div[role='listitem']");
                const block = blocks[{block}];
                if (!block) return false;
                const input = block.querySelector("input[type='text'], textarea");
                if (!input) return false;
                const proto = input.tagName === 'TEXTAREA'
                    ? HTMLTextAreaElement.prototype
                    : HTMLInputElement.prototype;
                const setter = Object.getOwnPropertyDescriptor(proto, 'value').set;
                setter.call(input, '');
                setter.call(input, {content});
                input.dispatchEvent(new Event('input', {{ bubbles: true }}));
                return true;
            }})()
            "#
        );
        self.eval_as(js).await
    }

    async fn advance(&self, button_label: &str) -> Result<bool> {
        let needle = serde_json::to_string(button_label)?;
        let js = format!(
            r#"
            (() => {{
                const needle = {needle};
                const spans = document.querySelectorAll("span");
                for (const span of spans) {{
                    if ((span.textContent || '').includes(needle)) {{
                        span.click();
                        return true;
                    }}
                }}
                return false;
            }})()
            "#
        );
        self.eval_as(js).await
    }
}
