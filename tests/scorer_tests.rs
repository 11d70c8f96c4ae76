use checkin::catalog::{CategoryKey, QUESTIONS};
use checkin::scorer::{self, Answers, Tier};
use rstest::rstest;

// --- HELPERS ---

/// Same raw value for every question of each category, in category order.
fn uniform(values: [u8; 4]) -> Answers {
    QUESTIONS
        .iter()
        .map(|q| (q.id, values[q.category.position()]))
        .collect()
}

/// The answer set a perfectly content couple gives: 5 everywhere, 1 on the
/// reversed pattern questions.
fn ideal() -> Answers {
    QUESTIONS
        .iter()
        .map(|q| (q.id, if q.reversed { 1 } else { 5 }))
        .collect()
}

fn worst() -> Answers {
    QUESTIONS
        .iter()
        .map(|q| (q.id, if q.reversed { 5 } else { 1 }))
        .collect()
}

// --- TIERS ---

#[rstest]
#[case(100, Tier::Thriving)]
#[case(80, Tier::Thriving)]
#[case(79, Tier::Growing)]
#[case(55, Tier::Growing)]
#[case(54, Tier::Attention)]
#[case(0, Tier::Attention)]
fn test_tier_boundaries(#[case] score: u8, #[case] expected: Tier) {
    assert_eq!(Tier::from_score(score), expected, "score {}", score);
}

// --- WHOLE CHECK-INS ---

#[test]
fn test_ideal_answers_score_100_everywhere() {
    let result = scorer::calculate_result(&ideal());
    assert_eq!(result.overall, 100);
    assert_eq!(result.scores(), [100, 100, 100, 100]);
    assert!(result.categories.iter().all(|c| c.tier == Tier::Thriving));
    // All tied: the first category in order is the focus.
    assert_eq!(result.focus_area, CategoryKey::Connection);
}

#[test]
fn test_worst_answers_score_0_everywhere() {
    let result = scorer::calculate_result(&worst());
    assert_eq!(result.overall, 0);
    assert_eq!(result.scores(), [0, 0, 0, 0]);
    assert!(result.categories.iter().all(|c| c.tier == Tier::Attention));
    assert_eq!(result.focus_area, CategoryKey::Connection);
}

#[test]
fn test_all_fives_are_dragged_down_by_reversed_questions() {
    let result = scorer::calculate_result(&uniform([5, 5, 5, 5]));
    // Questions 9 and 12 count as 1 each: (12 - 4) / 16.
    assert_eq!(result.category_score(CategoryKey::Patterns).score, 50);
    assert_eq!(result.category_score(CategoryKey::Connection).score, 100);
    assert_eq!(result.overall, 88); // 87.5 rounds up
    assert_eq!(result.focus_area, CategoryKey::Patterns);
    assert_eq!(
        result.category_score(CategoryKey::Patterns).tier,
        Tier::Attention
    );
}

#[test]
fn test_middle_answers_are_reversal_neutral() {
    let result = scorer::calculate_result(&uniform([3, 3, 3, 3]));
    assert_eq!(result.scores(), [50, 50, 50, 50]);
    assert_eq!(result.overall, 50);
}

#[test]
fn test_overall_rounds_half_up() {
    let mut answers = uniform([5, 1, 3, 3]);
    // Make patterns perfect.
    answers.insert(9, 1);
    answers.insert(10, 5);
    answers.insert(11, 5);
    answers.insert(12, 1);

    let result = scorer::calculate_result(&answers);
    assert_eq!(result.scores(), [100, 0, 100, 50]);
    assert_eq!(result.overall, 63); // 62.5
    assert_eq!(result.focus_area, CategoryKey::Communication);
}

#[rstest]
#[case([4, 4, 4, 3], 69)] // 68.75
#[case([2, 2, 1, 1], 13)] // 12.5
#[case([1, 1, 1, 2], 6)] // 6.25
#[case([5, 5, 5, 4], 94)] // 93.75
fn test_category_rounding(#[case] values: [u8; 4], #[case] expected: u8) {
    let answers: Answers = (1..=4).zip(values).collect();
    let result = scorer::calculate_result(&answers);
    assert_eq!(result.category_score(CategoryKey::Connection).score, expected);
}

// --- PARTIAL ANSWERS ---

#[test]
fn test_partial_answers_only_count_what_was_given() {
    let answers: Answers = [(1, 4), (2, 4), (3, 3)].into_iter().collect();
    let result = scorer::calculate_result(&answers);
    // (11 - 3) / 12 = 66.67
    assert_eq!(result.category_score(CategoryKey::Connection).score, 67);
}

#[test]
fn test_unanswered_category_scores_zero() {
    let answers: Answers = [(1, 5)].into_iter().collect();
    let result = scorer::calculate_result(&answers);
    assert_eq!(result.scores(), [100, 0, 0, 0]);
    assert_eq!(result.overall, 25);
    assert_eq!(result.focus_area, CategoryKey::Communication);
}

#[test]
fn test_empty_answers() {
    let result = scorer::calculate_result(&Answers::new());
    assert_eq!(result.overall, 0);
    assert_eq!(result.focus_area, CategoryKey::Connection);
}

#[test]
fn test_unknown_question_ids_are_ignored_by_scoring() {
    let mut answers = ideal();
    answers.insert(99, 1);
    assert_eq!(scorer::calculate_result(&answers).overall, 100);
}

// --- VALIDATION ---

#[rstest]
#[case(1, 0, false)]
#[case(1, 1, true)]
#[case(16, 5, true)]
#[case(16, 6, false)]
#[case(17, 3, false)]
#[case(0, 3, false)]
fn test_validate_answers(#[case] id: u32, #[case] value: u8, #[case] ok: bool) {
    let answers: Answers = [(id, value)].into_iter().collect();
    assert_eq!(scorer::validate_answers(&answers).is_ok(), ok);
}

#[test]
fn test_scoring_is_deterministic() {
    let answers = uniform([4, 2, 3, 5]);
    assert_eq!(
        scorer::calculate_result(&answers),
        scorer::calculate_result(&answers)
    );
}
