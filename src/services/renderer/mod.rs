//! 答题卡渲染 - 业务能力层
//!
//! 纯函数：题号模式 + 题组列表 → 完整的独立 HTML 文档。
//! 样式和脚本全部内联，不引用任何外部资源。

pub mod assets;
pub mod controls;
pub mod markup;

use tracing::debug;

use crate::models::{assign_ranges, NumberingMode, Section};

use self::assets::{INLINE_CSS, INLINE_JS};
use self::controls::{ControlRole, ControlShape};
use self::markup::Element;

/// 默认答题卡标题
pub const DEFAULT_TITLE: &str = "IELTS Reading – Answer Sheet";

/// 使用默认标题渲染，题组为空时返回 `None`
pub fn render(mode: NumberingMode, sections: &[Section]) -> Option<String> {
    SheetRenderer::new().render(mode, sections)
}

/// 答题卡渲染器
#[derive(Debug, Clone)]
pub struct SheetRenderer {
    title: String,
}

impl SheetRenderer {
    pub fn new() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
        }
    }

    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// 渲染完整文档
    ///
    /// 题组为空时返回 `None`，调用方应当视为"没有可渲染的内容"而不是错误
    pub fn render(&self, mode: NumberingMode, sections: &[Section]) -> Option<String> {
        if sections.is_empty() {
            return None;
        }

        let blocks = sections
            .iter()
            .zip(assign_ranges(mode, sections))
            .flat_map(|(section, range)| {
                let shape = ControlShape::for_section(section);
                let boxes: Vec<Element> = range
                    .numbers()
                    .map(|question| answer_block(&shape, question))
                    .collect();
                debug!(
                    "渲染题组: {} | 题号 {} 起 共 {} 题",
                    section.answer_type, range.first, range.count
                );
                [
                    Element::new("div")
                        .class("section-header")
                        .text(section.answer_type.label()),
                    Element::new("div").class("qgrid").children(boxes),
                ]
            });

        let head = Element::new("head")
            .child(Element::new("meta").attr("charset", "UTF-8"))
            .child(Element::new("title").text(self.title.as_str()))
            .child(Element::new("style").raw(INLINE_CSS));

        let body = Element::new("body")
            .child(Element::new("h2").text(self.title.as_str()))
            .child(toolbar())
            .children(blocks)
            .child(Element::new("script").raw(INLINE_JS));

        let html = Element::new("html")
            .attr("lang", "en")
            .child(head)
            .child(body)
            .to_document();

        Some(html)
    }
}

impl Default for SheetRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// 打印按钮、评分模式按钮、试卷编号和总分
fn toolbar() -> Element {
    Element::new("div")
        .class("toolbar")
        .child(
            Element::new("button")
                .id("printBtn")
                .attr("onclick", "window.print()")
                .text("Print / Save as PDF"),
        )
        .child(
            Element::new("button")
                .id("evalToggle")
                .attr("onclick", "toggleEvaluation()")
                .text("Enable Evaluation Mode"),
        )
        .child(
            Element::new("span")
                .class("field")
                .text("Model Number: ")
                .child(Element::new("input").attr("type", "text").id("model")),
        )
        .child(
            Element::new("span")
                .class("field")
                .text("Total Score: ")
                .child(
                    Element::new("input")
                        .attr("type", "text")
                        .id("totalscore")
                        .flag("readonly"),
                ),
        )
}

/// 单题作答块：题号、作答控件、评分复选框、标准答案控件
fn answer_block(shape: &ControlShape, question: u32) -> Element {
    Element::new("div")
        .class("qbox")
        .child(Element::new("b").text(format!("{}.", question)))
        .child(shape.build(ControlRole::Answer, question))
        .child(
            Element::new("input")
                .attr("type", "checkbox")
                .class("checkbox")
                .id(format!("chk{}", question))
                .attr("data-question", question.to_string())
                .attr("onchange", format!("onCheckboxChange({})", question)),
        )
        .child(shape.build(ControlRole::CorrectAnswer, question))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AnswerType;
    use crate::services::SectionModel;

    fn numbers_in(html: &str) -> Vec<u32> {
        html.split("<b>")
            .skip(1)
            .filter_map(|rest| rest.split(".</b>").next())
            .filter_map(|n| n.parse().ok())
            .collect()
    }

    #[test]
    fn test_empty_sections_render_nothing() {
        assert_eq!(render(NumberingMode::Amount, &[]), None);
        assert_eq!(render(NumberingMode::End, &[]), None);
    }

    #[test]
    fn test_fill_blank_amount_scenario() {
        let mut model = SectionModel::new(NumberingMode::Amount);
        model.add_section(AnswerType::FillBlank, "3", "").unwrap();

        let html = render(model.mode(), model.sections()).unwrap();

        assert_eq!(html.matches("class=\"qbox\"").count(), 3);
        assert_eq!(numbers_in(&html), vec![1, 2, 3]);
        assert_eq!(html.matches("<input class=\"answer\" type=\"text\">").count(), 3);
        assert_eq!(html.matches("placeholder=\"Correct answer\"").count(), 3);
        assert!(html.contains("<div class=\"section-header\">Fill in the Blanks</div>"));
    }

    #[test]
    fn test_multiple_choice_end_scenario() {
        let mut model = SectionModel::new(NumberingMode::End);
        model.add_section(AnswerType::MultipleChoice, "5", "").unwrap();

        let html = render(model.mode(), model.sections()).unwrap();

        assert_eq!(numbers_in(&html), vec![1, 2, 3, 4, 5]);
        let options =
            "<option></option><option>A</option><option>B</option><option>C</option><option>D</option></select>";
        // 每题一个作答控件 + 一个标准答案控件
        assert_eq!(html.matches(options).count(), 10);
    }

    #[test]
    fn test_numbers_are_contiguous_across_sections() {
        let mut model = SectionModel::new(NumberingMode::Amount);
        model.add_section(AnswerType::TrueFalseNotGiven, "4", "").unwrap();
        model.add_section(AnswerType::MatchingRoman, "3", "6").unwrap();
        model.add_section(AnswerType::FillBlank, "2", "").unwrap();

        let html = render(model.mode(), model.sections()).unwrap();

        assert_eq!(numbers_in(&html), (1..=9).collect::<Vec<_>>());
        assert_eq!(html.matches("class=\"section-header\"").count(), 3);
    }

    #[test]
    fn test_matching_letter_has_three_options() {
        let mut model = SectionModel::new(NumberingMode::Amount);
        model.add_section(AnswerType::MatchingLetter, "1", "c").unwrap();

        let html = render(model.mode(), model.sections()).unwrap();

        assert!(html.contains(
            "<select class=\"answer\"><option></option><option>A</option><option>B</option><option>C</option></select>"
        ));
        assert!(!html.contains("<option>D</option>"));
    }

    #[test]
    fn test_matching_roman_has_five_options() {
        let mut model = SectionModel::new(NumberingMode::Amount);
        model.add_section(AnswerType::MatchingRoman, "1", "5").unwrap();

        let html = render(model.mode(), model.sections()).unwrap();

        assert!(html.contains(
            "<select class=\"answer\"><option></option><option>I</option><option>II</option><option>III</option><option>IV</option><option>V</option></select>"
        ));
        assert!(!html.contains("<option>VI</option>"));
    }

    #[test]
    fn test_answer_block_pairs_checkbox_and_correct_answer() {
        let mut model = SectionModel::new(NumberingMode::Amount);
        model.add_section(AnswerType::FillBlank, "1", "").unwrap();

        let html = render(model.mode(), model.sections()).unwrap();

        assert!(html.contains(
            "<input type=\"checkbox\" class=\"checkbox\" id=\"chk1\" data-question=\"1\" onchange=\"onCheckboxChange(1)\">"
        ));
        assert!(html.contains("id=\"ca1\" data-question=\"1\""));
    }

    #[test]
    fn test_document_is_self_contained() {
        let mut model = SectionModel::new(NumberingMode::Amount);
        model.add_section(AnswerType::YesNoNotGiven, "2", "").unwrap();

        let html = SheetRenderer::with_title("Test <1>")
            .render(model.mode(), model.sections())
            .unwrap();

        assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"en\">"));
        assert!(html.contains("<title>Test &lt;1&gt;</title>"));
        assert!(html.contains("<h2>Test &lt;1&gt;</h2>"));
        assert!(html.contains("id=\"printBtn\""));
        assert!(html.contains("id=\"evalToggle\""));
        assert!(html.contains("<input type=\"text\" id=\"model\">"));
        assert!(html.contains("<input type=\"text\" id=\"totalscore\" readonly>"));
        assert!(html.contains("function toggleEvaluation()"));
        assert!(html.contains("@media print"));
        assert!(!html.contains("<link"));
        assert!(!html.contains("src="));
        assert!(html.trim_end().ends_with("</html>"));
    }
}
