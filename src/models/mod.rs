pub mod answer_type;
pub mod loaders;
pub mod numbering;
pub mod section;

pub use answer_type::AnswerType;
pub use loaders::{load_sheet, SectionEntry, SheetDefinition};
pub use numbering::{assign_ranges, next_question_number, NumberingMode, QuestionRange};
pub use section::{Section, SectionExtra};
