//! 答案值模型
//!
//! CSV 单元格解析出的标量答案，以及提交前的规范化规则

use std::fmt;

/// 一个待提交的答案值
///
/// 从 CSV 单元格解析而来。数值判定以整列失去类型信息为前提：
/// 只要整个单元格能解析成数字，就按数字处理（与 pandas 读入数值列的行为一致）
#[derive(Debug, Clone, PartialEq)]
pub enum AnswerValue {
    /// 空单元格（或 NaN），提交时直接跳过
    Empty,
    /// 整数
    Integer(i64),
    /// 浮点数
    Float(f64),
    /// 普通文本
    Text(String),
}

impl AnswerValue {
    /// 从 CSV 原始单元格解析答案值
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return AnswerValue::Empty;
        }
        if let Ok(i) = trimmed.parse::<i64>() {
            return AnswerValue::Integer(i);
        }
        if let Ok(f) = trimmed.parse::<f64>() {
            if f.is_nan() {
                return AnswerValue::Empty;
            }
            return AnswerValue::Float(f);
        }
        AnswerValue::Text(raw.to_string())
    }

    /// 是否为空值（无需提交）
    pub fn is_empty(&self) -> bool {
        matches!(self, AnswerValue::Empty)
    }

    /// 规范化为用于匹配和填写的显示字符串
    ///
    /// 规则：整数值的浮点数按整数截断渲染（5.0 → "5"，-0.0 → "0"），
    /// 其余按默认字符串形式渲染。超出 i64 范围的浮点数保持默认渲染
    pub fn normalized(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerValue::Empty => Ok(()),
            AnswerValue::Integer(i) => write!(f, "{}", i),
            AnswerValue::Float(v) => {
                let integral = v.is_finite()
                    && *v == v.trunc()
                    && *v >= i64::MIN as f64
                    && *v <= i64::MAX as f64;
                if integral {
                    write!(f, "{}", *v as i64)
                } else {
                    write!(f, "{}", v)
                }
            }
            AnswerValue::Text(s) => write!(f, "{}", s),
        }
    }
}

/// 一条计划提交的答案：字段标识 + 题目标签文本 + 答案值
#[derive(Debug, Clone)]
pub struct PlannedAnswer {
    /// 数据集中的列名
    pub field: String,
    /// 预期出现在题目标签中的文本片段
    pub label: String,
    /// 答案值
    pub value: AnswerValue,
}

impl PlannedAnswer {
    pub fn new(field: impl Into<String>, label: impl Into<String>, value: AnswerValue) -> Self {
        Self {
            field: field.into(),
            label: label.into(),
            value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_float_renders_without_suffix() {
        assert_eq!(AnswerValue::parse("5.0").normalized(), "5");
        assert_eq!(AnswerValue::parse("3").normalized(), "3");
        assert_eq!(AnswerValue::parse("-2.0").normalized(), "-2");
    }

    #[test]
    fn non_integral_float_renders_losslessly() {
        assert_eq!(AnswerValue::parse("4.5").normalized(), "4.5");
        assert_eq!(AnswerValue::parse("-0.25").normalized(), "-0.25");
    }

    #[test]
    fn negative_zero_uses_integer_cast_rule() {
        // 字符串后缀裁剪会得到 "-0"，整数截断规则得到 "0"
        assert_eq!(AnswerValue::parse("-0.0").normalized(), "0");
    }

    #[test]
    fn scientific_notation_uses_integer_cast_rule() {
        assert_eq!(AnswerValue::parse("1e2").normalized(), "100");
    }

    #[test]
    fn empty_and_nan_cells_are_empty() {
        assert!(AnswerValue::parse("").is_empty());
        assert!(AnswerValue::parse("   ").is_empty());
        assert!(AnswerValue::parse("NaN").is_empty());
        assert_eq!(AnswerValue::parse("").normalized(), "");
    }

    #[test]
    fn text_passes_through_unchanged() {
        assert_eq!(
            AnswerValue::parse("Computer Science").normalized(),
            "Computer Science"
        );
        assert_eq!(AnswerValue::parse("4-5 years").normalized(), "4-5 years");
    }
}
