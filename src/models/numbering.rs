use std::ops::Range;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::section::Section;

/// 题号模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberingMode {
    /// 每个题组填写题目数量
    #[default]
    Amount,
    /// 每个题组填写结束题号
    End,
}

impl NumberingMode {
    /// 题组从 `next_question` 开始时实际贡献的题目数量
    pub fn contributed_count(self, count_or_end: u32, next_question: u32) -> u32 {
        match self {
            NumberingMode::Amount => count_or_end,
            NumberingMode::End => count_or_end.saturating_add(1).saturating_sub(next_question),
        }
    }

    /// 表单输入框的提示文字
    pub fn input_label(self) -> &'static str {
        match self {
            NumberingMode::Amount => "Number of Questions",
            NumberingMode::End => "Ending Question Number",
        }
    }
}

impl std::fmt::Display for NumberingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NumberingMode::Amount => write!(f, "amount"),
            NumberingMode::End => write!(f, "end"),
        }
    }
}

impl FromStr for NumberingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "amount" | "count" => Ok(NumberingMode::Amount),
            "end" => Ok(NumberingMode::End),
            other => Err(format!("未知题号模式: {} (可选 amount / end)", other)),
        }
    }
}

/// 一个题组分到的题号区间
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionRange {
    /// 起始题号（从 1 开始）
    pub first: u32,
    /// 题目数量，可能为 0
    pub count: u32,
}

impl QuestionRange {
    /// 该区间之后的下一个题号
    pub fn next(&self) -> u32 {
        self.first.saturating_add(self.count)
    }

    /// 区间内的全部题号，count 为 0 时为空
    pub fn numbers(&self) -> Range<u32> {
        self.first..self.next()
    }
}

/// 从左到右扫描题组，为每个题组分配连续的题号区间
pub fn assign_ranges(mode: NumberingMode, sections: &[Section]) -> Vec<QuestionRange> {
    let mut next_question = 1;
    sections
        .iter()
        .map(|section| {
            let range = QuestionRange {
                first: next_question,
                count: mode.contributed_count(section.count_or_end, next_question),
            };
            next_question = range.next();
            range
        })
        .collect()
}

/// 所有题组之后的下一个题号
pub fn next_question_number(mode: NumberingMode, sections: &[Section]) -> u32 {
    assign_ranges(mode, sections)
        .last()
        .map(QuestionRange::next)
        .unwrap_or(1)
}
