use ielts_answer_sheet::{render, AnswerType, NumberingMode, SectionModel};
use proptest::prelude::*;

fn answer_type() -> impl Strategy<Value = AnswerType> {
    prop::sample::select(AnswerType::ALL.to_vec())
}

fn extra_for(answer_type: AnswerType) -> &'static str {
    match answer_type {
        AnswerType::MatchingRoman => "7",
        AnswerType::MatchingLetter => "e",
        _ => "",
    }
}

fn question_numbers(html: &str) -> Vec<u32> {
    html.split("<b>")
        .skip(1)
        .filter_map(|rest| rest.split(".</b>").next())
        .filter_map(|n| n.parse().ok())
        .collect()
}

proptest! {
    #[test]
    fn amount_mode_numbers_are_contiguous(
        sections in prop::collection::vec((answer_type(), 1u32..12), 1..8)
    ) {
        let mut model = SectionModel::new(NumberingMode::Amount);
        for (answer_type, count) in &sections {
            model.add_section(*answer_type, &count.to_string(), extra_for(*answer_type)).unwrap();
        }

        let total: u32 = sections.iter().map(|(_, count)| count).sum();
        let html = render(model.mode(), model.sections()).unwrap();

        prop_assert_eq!(question_numbers(&html), (1..=total).collect::<Vec<_>>());
        prop_assert_eq!(html.matches("class=\"qbox\"").count() as u32, total);
    }

    #[test]
    fn end_mode_numbers_are_contiguous(
        steps in prop::collection::vec((answer_type(), 0u32..10), 1..8)
    ) {
        let mut model = SectionModel::new(NumberingMode::End);
        let mut end = 0;
        for (answer_type, step) in &steps {
            // step 为 0 时结束题号等于下一题号，得到 1 题的题组
            end += step + 1;
            model.add_section(*answer_type, &end.to_string(), extra_for(*answer_type)).unwrap();
        }

        let html = render(model.mode(), model.sections()).unwrap();
        prop_assert_eq!(question_numbers(&html), (1..=end).collect::<Vec<_>>());
        prop_assert_eq!(model.total_questions(), end);
    }

    #[test]
    fn end_number_below_next_is_rejected(first_end in 1u32..50, gap in 1u32..50) {
        let mut model = SectionModel::new(NumberingMode::End);
        model.add_section(AnswerType::FillBlank, &first_end.to_string(), "").unwrap();

        let too_low = (first_end + 1).saturating_sub(gap);
        let result = model.add_section(AnswerType::FillBlank, &too_low.to_string(), "");
        prop_assert!(result.is_err());
        prop_assert_eq!(model.len(), 1);
    }

    #[test]
    fn remove_shifts_following_sections(
        counts in prop::collection::vec(1u32..10, 2..6),
        index in 0usize..5
    ) {
        let index = index % counts.len();
        let mut model = SectionModel::new(NumberingMode::Amount);
        for count in &counts {
            model.add_section(AnswerType::MultipleChoice, &count.to_string(), "").unwrap();
        }
        let before = model.describe_sections();

        model.remove_section(index).unwrap();
        let after = model.describe_sections();

        for (old, new) in before.iter().skip(index + 1).zip(after.iter().skip(index)) {
            prop_assert_eq!(new.start, old.start - counts[index]);
            prop_assert_eq!(new.count, old.count);
        }
    }

    #[test]
    fn swap_keeps_total(
        counts in prop::collection::vec(1u32..10, 2..6),
        index in 0usize..5
    ) {
        let index = index % (counts.len() - 1);
        let mut model = SectionModel::new(NumberingMode::Amount);
        for count in &counts {
            model.add_section(AnswerType::FillBlank, &count.to_string(), "").unwrap();
        }
        let total = model.total_questions();

        prop_assert!(model.move_down(index).unwrap());
        let summaries = model.describe_sections();
        prop_assert_eq!(model.total_questions(), total);
        prop_assert_eq!(summaries[index].count, counts[index + 1]);
        prop_assert_eq!(summaries[index + 1].count, counts[index]);
    }
}
