use std::num::NonZeroU32;

use serde::Serialize;

use crate::error::SheetError;
use crate::models::answer_type::AnswerType;

/// 匹配题的额外参数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SectionExtra {
    /// 非匹配题，没有额外参数
    #[default]
    None,
    /// 罗马数字匹配题的最大序号
    MaxRoman(NonZeroU32),
    /// 字母匹配题的最大字母（大写）
    MaxLetter(char),
}

impl SectionExtra {
    pub fn is_none(&self) -> bool {
        matches!(self, SectionExtra::None)
    }
}

impl std::fmt::Display for SectionExtra {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SectionExtra::None => Ok(()),
            SectionExtra::MaxRoman(max) => write!(f, "{}", max),
            SectionExtra::MaxLetter(letter) => write!(f, "{}", letter),
        }
    }
}

impl Serialize for SectionExtra {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SectionExtra::None => serializer.serialize_none(),
            other => serializer.serialize_some(&other.to_string()),
        }
    }
}

/// 题组：一段连续编号、题型相同的题目
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub answer_type: AnswerType,
    /// 题目数量（数量模式）或结束题号（结束题号模式）
    pub count_or_end: u32,
    pub extra: SectionExtra,
}

impl Section {
    /// 校验表单输入并创建题组
    ///
    /// 校验顺序：先校验匹配题的额外参数，再校验数量 / 结束题号。
    /// 非匹配题的 `extra` 会被忽略。结束题号与已有题组的关系由
    /// `SectionModel` 负责校验。
    pub fn parse(answer_type: AnswerType, count_or_end: &str, extra: &str) -> Result<Self, SheetError> {
        let extra = match answer_type {
            AnswerType::MatchingRoman => SectionExtra::MaxRoman(parse_max_roman(extra)?),
            AnswerType::MatchingLetter => SectionExtra::MaxLetter(parse_max_letter(extra)?),
            _ => SectionExtra::None,
        };

        let count_or_end = parse_positive(count_or_end).ok_or_else(|| SheetError::InvalidCount {
            value: count_or_end.to_string(),
        })?;

        Ok(Self {
            answer_type,
            count_or_end,
            extra,
        })
    }
}

fn parse_max_roman(extra: &str) -> Result<NonZeroU32, SheetError> {
    parse_positive(extra)
        .and_then(NonZeroU32::new)
        .ok_or_else(|| SheetError::InvalidExtraRoman {
            extra: extra.to_string(),
        })
}

fn parse_max_letter(extra: &str) -> Result<char, SheetError> {
    let mut chars = extra.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(letter), None) if letter.is_ascii_alphabetic() => Ok(letter.to_ascii_uppercase()),
        _ => Err(SheetError::InvalidExtraLetter {
            extra: extra.to_string(),
        }),
    }
}

/// 非空、全数字、大于 0
fn parse_positive(value: &str) -> Option<u32> {
    let value = value.trim();
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse::<u32>().ok().filter(|v| *v > 0)
}
