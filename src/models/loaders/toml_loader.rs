use std::path::Path;

use serde::Deserialize;
use tokio::fs;

use crate::error::{AppError, AppResult, FileError};
use crate::models::answer_type::AnswerType;
use crate::models::numbering::NumberingMode;

/// 答题卡定义文件（TOML）
#[derive(Debug, Clone, Deserialize)]
pub struct SheetDefinition {
    /// 答题卡标题，缺省时使用配置中的标题
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub mode: NumberingMode,
    #[serde(default)]
    pub sections: Vec<SectionEntry>,
}

/// 定义文件中的一个题组，字段保持原始文本，交给 `SectionModel` 校验
#[derive(Debug, Clone, Deserialize)]
pub struct SectionEntry {
    #[serde(rename = "type")]
    pub answer_type: AnswerType,
    #[serde(deserialize_with = "deserialize_raw")]
    pub value: String,
    #[serde(default, deserialize_with = "deserialize_raw")]
    pub extra: String,
}

impl SheetDefinition {
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

/// 从 TOML 文件加载答题卡定义
pub async fn load_sheet(path: &Path) -> AppResult<SheetDefinition> {
    let content = fs::read_to_string(path)
        .await
        .map_err(|e| AppError::file_read_failed(path, e))?;

    let sheet = SheetDefinition::from_toml_str(&content).map_err(|e| {
        AppError::File(FileError::TomlParseFailed {
            path: path.to_path_buf(),
            source: e,
        })
    })?;

    tracing::info!(
        "成功加载 {} 个题组: {}",
        sheet.sections.len(),
        path.file_name().unwrap_or_default().to_string_lossy()
    );

    Ok(sheet)
}

// 数值字段既可以写成整数也可以写成字符串
fn deserialize_raw<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Visitor;
    use std::fmt;

    struct RawVisitor;

    impl<'de> Visitor<'de> for RawVisitor {
        type Value = String;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or integer")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value.to_string())
        }
    }

    deserializer.deserialize_any(RawVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHEET: &str = r#"
title = "Cambridge 18 – Test 1"
mode = "end"

[[sections]]
type = "tfng"
value = 7

[[sections]]
type = "Matching (Roman)"
value = "13"
extra = 8

[[sections]]
type = "letter"
value = 20
extra = "f"
"#;

    #[test]
    fn test_parse_sheet_definition() {
        let sheet = SheetDefinition::from_toml_str(SHEET).unwrap();

        assert_eq!(sheet.title.as_deref(), Some("Cambridge 18 – Test 1"));
        assert_eq!(sheet.mode, NumberingMode::End);
        assert_eq!(sheet.sections.len(), 3);
        assert_eq!(sheet.sections[0].answer_type, AnswerType::TrueFalseNotGiven);
        assert_eq!(sheet.sections[0].value, "7");
        assert_eq!(sheet.sections[0].extra, "");
        assert_eq!(sheet.sections[1].value, "13");
        assert_eq!(sheet.sections[1].extra, "8");
        assert_eq!(sheet.sections[2].extra, "f");
    }

    #[test]
    fn test_defaults_to_amount_mode() {
        let sheet = SheetDefinition::from_toml_str("[[sections]]\ntype = \"mc\"\nvalue = 4\n").unwrap();
        assert_eq!(sheet.mode, NumberingMode::Amount);
        assert!(sheet.title.is_none());
    }

    #[test]
    fn test_unknown_answer_type_is_rejected() {
        assert!(SheetDefinition::from_toml_str("[[sections]]\ntype = \"essay\"\nvalue = 1\n").is_err());
    }

    #[tokio::test]
    async fn test_load_sheet_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sheet.toml");
        std::fs::write(&path, SHEET).unwrap();

        let sheet = load_sheet(&path).await.unwrap();
        assert_eq!(sheet.sections.len(), 3);
    }

    #[tokio::test]
    async fn test_load_missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");

        let err = load_sheet(&path).await.unwrap_err();
        assert!(matches!(err, AppError::File(FileError::ReadFailed { .. })));
        assert!(err.to_string().contains("missing.toml"));
    }
}
