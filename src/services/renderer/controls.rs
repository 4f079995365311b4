//! 作答控件
//!
//! 每个题型只定义一次选项集合，学生作答控件和标准答案控件都从同一个
//! `ControlShape` 生成。

use crate::models::{AnswerType, Section, SectionExtra};
use crate::services::roman;

use super::markup::Element;

const TRUE_FALSE: [&str; 3] = ["True", "False", "Not Given"];
const YES_NO: [&str; 3] = ["Yes", "No", "Not Given"];
const CHOICES: [&str; 4] = ["A", "B", "C", "D"];

/// 控件形态
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlShape {
    /// 自由填写的文本框
    FreeText,
    /// 下拉选择，第一项总是空白
    Choice(Vec<String>),
}

/// 控件用途
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlRole {
    /// 学生作答
    Answer,
    /// 标准答案（评分模式下显示）
    CorrectAnswer,
}

impl ControlRole {
    fn class(self) -> &'static str {
        match self {
            ControlRole::Answer => "answer",
            ControlRole::CorrectAnswer => "correct-answer",
        }
    }
}

impl ControlShape {
    /// 根据题组的题型和额外参数确定控件形态
    pub fn for_section(section: &Section) -> Self {
        match (section.answer_type, section.extra) {
            (AnswerType::FillBlank, _) => ControlShape::FreeText,
            (AnswerType::TrueFalseNotGiven, _) => Self::fixed(&TRUE_FALSE),
            (AnswerType::YesNoNotGiven, _) => Self::fixed(&YES_NO),
            (AnswerType::MultipleChoice, _) => Self::fixed(&CHOICES),
            (AnswerType::MatchingRoman, SectionExtra::MaxRoman(max)) => {
                ControlShape::Choice(roman::numerals(max).collect())
            }
            (AnswerType::MatchingLetter, SectionExtra::MaxLetter(max)) => {
                ControlShape::Choice(('A'..=max).map(String::from).collect())
            }
            // 匹配题缺少额外参数时只保留空白选项
            (AnswerType::MatchingRoman | AnswerType::MatchingLetter, _) => {
                ControlShape::Choice(Vec::new())
            }
        }
    }

    fn fixed(options: &[&str]) -> Self {
        ControlShape::Choice(options.iter().map(|o| o.to_string()).collect())
    }

    /// 生成第 `question` 题的控件
    pub fn build(&self, role: ControlRole, question: u32) -> Element {
        let element = match self {
            ControlShape::FreeText => {
                let input = Element::new("input").class(role.class()).attr("type", "text");
                match role {
                    ControlRole::Answer => input,
                    ControlRole::CorrectAnswer => input.attr("placeholder", "Correct answer"),
                }
            }
            ControlShape::Choice(options) => Element::new("select")
                .class(role.class())
                .child(Element::new("option"))
                .children(options.iter().map(|o| Element::new("option").text(o.as_str()))),
        };

        match role {
            ControlRole::Answer => element,
            ControlRole::CorrectAnswer => element
                .id(format!("ca{}", question))
                .attr("data-question", question.to_string()),
        }
    }
}
