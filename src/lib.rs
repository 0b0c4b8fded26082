//! # Form Auto Submit
//!
//! 一个把 CSV 数据集逐行提交到固定 Google 表单的自动化工具
//!
//! ## 架构设计
//!
//! 本系统采用分层架构：
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有稀缺资源（Page），只暴露能力
//! - `FormDom` - UI 自动化能力抽象（枚举题目块 / 激活控件 / 翻页）
//! - `GoogleFormPage` - 基于 chromiumoxide 的 Google 表单实现
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，只处理单个字段
//! - `AnswerResolver` - 定位题目块并按固定策略顺序填写答案
//! - `WarnWriter` - 记录填不进去的字段
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一行数据"的完整提交流程
//! - `RecordCtx` - 上下文封装（正在提交第几行）
//! - `SubmissionFlow` - 流程编排（打开表单 → 逐页填写 → 提交）
//!
//! ### ④ 编排层（App）
//! - `app` - 加载数据集、过滤待提交行、逐行驱动流程、写回状态
//!
//! ## 模块结构

pub mod app;
pub mod browser;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod models;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use app::App;
pub use browser::launch_headless_browser;
pub use config::Config;
pub use error::{AppError, AppResult};
pub use infrastructure::{FormDom, GoogleFormPage, QuestionBlock};
pub use models::{AnswerValue, Dataset, PlannedAnswer, QUESTION_MAP};
pub use services::{AnswerResolver, ResolveOutcome, Strategy};
pub use workflow::{RecordCtx, SubmissionFlow, SubmitOutcome};
