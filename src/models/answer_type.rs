use phf::phf_map;

/// 题型枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum AnswerType {
    /// 判断题（True/False/Not Given）
    TrueFalseNotGiven,
    /// 判断题（Yes/No/Not Given）
    YesNoNotGiven,
    /// 填空题
    FillBlank,
    /// 罗马数字匹配题
    MatchingRoman,
    /// 字母匹配题
    MatchingLetter,
    /// 单选题（A–D）
    MultipleChoice,
}

/// 题型别名表（全部小写）
static ALIASES: phf::Map<&'static str, AnswerType> = phf_map! {
    "true/false/not given" => AnswerType::TrueFalseNotGiven,
    "tfng" => AnswerType::TrueFalseNotGiven,
    "yes/no/not given" => AnswerType::YesNoNotGiven,
    "ynng" => AnswerType::YesNoNotGiven,
    "fill in the blanks" => AnswerType::FillBlank,
    "fill" => AnswerType::FillBlank,
    "blank" => AnswerType::FillBlank,
    "matching (roman)" => AnswerType::MatchingRoman,
    "roman" => AnswerType::MatchingRoman,
    "matching (a/b/c)" => AnswerType::MatchingLetter,
    "letter" => AnswerType::MatchingLetter,
    "abc" => AnswerType::MatchingLetter,
    "multiple choice (a–d)" => AnswerType::MultipleChoice,
    "multiple choice (a-d)" => AnswerType::MultipleChoice,
    "mc" => AnswerType::MultipleChoice,
    "choice" => AnswerType::MultipleChoice,
};

impl AnswerType {
    /// 全部题型，按表单下拉框顺序
    pub const ALL: [AnswerType; 6] = [
        AnswerType::TrueFalseNotGiven,
        AnswerType::YesNoNotGiven,
        AnswerType::FillBlank,
        AnswerType::MatchingRoman,
        AnswerType::MatchingLetter,
        AnswerType::MultipleChoice,
    ];

    /// 获取显示名称（同时用作答题卡中的题组标题）
    pub fn label(self) -> &'static str {
        match self {
            AnswerType::TrueFalseNotGiven => "True/False/Not Given",
            AnswerType::YesNoNotGiven => "Yes/No/Not Given",
            AnswerType::FillBlank => "Fill in the Blanks",
            AnswerType::MatchingRoman => "Matching (Roman)",
            AnswerType::MatchingLetter => "Matching (A/B/C)",
            AnswerType::MultipleChoice => "Multiple Choice (A–D)",
        }
    }

    /// 获取简写别名（交互命令中使用）
    pub fn alias(self) -> &'static str {
        match self {
            AnswerType::TrueFalseNotGiven => "tfng",
            AnswerType::YesNoNotGiven => "ynng",
            AnswerType::FillBlank => "fill",
            AnswerType::MatchingRoman => "roman",
            AnswerType::MatchingLetter => "letter",
            AnswerType::MultipleChoice => "mc",
        }
    }

    /// 是否需要额外参数（最大序号 / 最大字母）
    pub fn requires_extra(self) -> bool {
        matches!(self, AnswerType::MatchingRoman | AnswerType::MatchingLetter)
    }

    /// 从名称或别名解析题型（忽略大小写和首尾空白）
    pub fn parse(s: &str) -> Option<Self> {
        ALIASES.get(s.trim().to_lowercase().as_str()).copied()
    }
}

impl std::fmt::Display for AnswerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl TryFrom<String> for AnswerType {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or_else(|| format!("未知题型: {}", value))
    }
}

impl From<AnswerType> for String {
    fn from(value: AnswerType) -> Self {
        value.label().to_string()
    }
}
