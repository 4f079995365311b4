//! 题组模型 - 业务能力层
//!
//! 持有有序的题组列表和题号模式，负责增删、排序和题号推导。
//! 展示层每次修改后都通过 `describe_sections()` 重新获取列表，
//! 不在界面里自己计算题号。

use serde::Serialize;
use tracing::debug;

use crate::error::{AppError, AppResult, SheetError};
use crate::models::{
    assign_ranges, next_question_number, AnswerType, NumberingMode, Section, SectionExtra,
    SheetDefinition,
};

/// 题组列表中一项的展示信息
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionSummary {
    /// 在列表中的位置（从 1 开始）
    pub position: usize,
    pub answer_type: AnswerType,
    pub mode: NumberingMode,
    /// 起始题号
    pub start: u32,
    /// 结束题号；结束题号模式下就是用户填写的值
    pub end: u32,
    /// 实际贡献的题目数量
    pub count: u32,
    pub extra: SectionExtra,
}

impl std::fmt::Display for SectionSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.mode {
            NumberingMode::Amount => write!(f, "{} × {}", self.count, self.answer_type)?,
            NumberingMode::End => write!(f, "{}–{} — {}", self.start, self.end, self.answer_type)?,
        }
        if !self.extra.is_none() {
            write!(f, " (max={})", self.extra)?;
        }
        Ok(())
    }
}

/// 题组模型
#[derive(Debug, Clone, Default)]
pub struct SectionModel {
    mode: NumberingMode,
    sections: Vec<Section>,
}

impl SectionModel {
    /// 创建空的题组模型
    pub fn new(mode: NumberingMode) -> Self {
        Self {
            mode,
            sections: Vec::new(),
        }
    }

    /// 按定义文件的顺序逐个添加题组，第一个无效题组会中止加载
    pub fn from_definition(sheet: &SheetDefinition) -> AppResult<Self> {
        let mut model = Self::new(sheet.mode);
        for (idx, entry) in sheet.sections.iter().enumerate() {
            model
                .add_section(entry.answer_type, &entry.value, &entry.extra)
                .map_err(|source| AppError::InvalidSection {
                    position: idx + 1,
                    source,
                })?;
        }
        Ok(model)
    }

    pub fn mode(&self) -> NumberingMode {
        self.mode
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// 下一个题组的起始题号
    pub fn next_question_number(&self) -> u32 {
        next_question_number(self.mode, &self.sections)
    }

    /// 全部题目数量
    pub fn total_questions(&self) -> u32 {
        self.next_question_number() - 1
    }

    /// 校验并追加一个题组
    ///
    /// # 参数
    /// - `answer_type`: 题型
    /// - `count_or_end`: 题目数量或结束题号（原始输入）
    /// - `extra`: 匹配题的最大序号 / 最大字母，其他题型忽略
    pub fn add_section(
        &mut self,
        answer_type: AnswerType,
        count_or_end: &str,
        extra: &str,
    ) -> Result<&Section, SheetError> {
        let section = Section::parse(answer_type, count_or_end, extra)?;

        if self.mode == NumberingMode::End {
            let next = self.next_question_number();
            if section.count_or_end < next {
                return Err(SheetError::EndNumberTooLow {
                    end: section.count_or_end,
                    next,
                });
            }
        }

        debug!(
            "添加题组: {} | {} | extra={}",
            section.answer_type, section.count_or_end, section.extra
        );
        self.sections.push(section);
        Ok(&self.sections[self.sections.len() - 1])
    }

    /// 与上一个题组交换位置；已经在最上面时不做任何事，返回 `Ok(false)`
    pub fn move_up(&mut self, index: usize) -> Result<bool, SheetError> {
        self.check_index(index)?;
        if index == 0 {
            return Ok(false);
        }
        self.sections.swap(index, index - 1);
        Ok(true)
    }

    /// 与下一个题组交换位置；已经在最下面时不做任何事，返回 `Ok(false)`
    pub fn move_down(&mut self, index: usize) -> Result<bool, SheetError> {
        self.check_index(index)?;
        if index + 1 == self.sections.len() {
            return Ok(false);
        }
        self.sections.swap(index, index + 1);
        Ok(true)
    }

    /// 删除题组并返回被删除的题组
    pub fn remove_section(&mut self, index: usize) -> Result<Section, SheetError> {
        self.check_index(index)?;
        Ok(self.sections.remove(index))
    }

    /// 切换题号模式，不会重新校验或修改已有题组
    pub fn set_numbering_mode(&mut self, mode: NumberingMode) {
        self.mode = mode;
    }

    /// 按当前模式重新推导每个题组的题号
    pub fn describe_sections(&self) -> Vec<SectionSummary> {
        self.sections
            .iter()
            .zip(assign_ranges(self.mode, &self.sections))
            .enumerate()
            .map(|(idx, (section, range))| SectionSummary {
                position: idx + 1,
                answer_type: section.answer_type,
                mode: self.mode,
                start: range.first,
                end: match self.mode {
                    NumberingMode::Amount => range.next() - 1,
                    NumberingMode::End => section.count_or_end,
                },
                count: range.count,
                extra: section.extra,
            })
            .collect()
    }

    fn check_index(&self, index: usize) -> Result<(), SheetError> {
        if index >= self.sections.len() {
            return Err(SheetError::IndexOutOfRange {
                index,
                len: self.sections.len(),
            });
        }
        Ok(())
    }
}
