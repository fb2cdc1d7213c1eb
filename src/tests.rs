//! Unit tests for the `mcq_engine` crate.
//!
//! Included from `lib.rs` under `#[cfg(test)]`.
//!
//! # Coverage
//!
//! | Group | What is tested |
//! |-------|----------------|
//! | Validation | Each malformed class yields no question, exactly one skip and exactly one warning; good records always parse silently |
//! | Shuffle | Uniform position frequencies; correct text survives shuffling |
//! | Answer key | One entry per question, pointing at the correct option, on every render |
//! | Grading | Key letter → Correct, others → Wrong, repeat picks identical, new pick clears old |
//! | Independence | Grading one question never touches another |
//! | Determinism | Same seed → same layout; re-renders draw fresh keys |
//! | Host | Missing container: no mutation, notice shown, `MissingHost` returned |
//! | Scenarios | The `2+2=?` walk-through and the dropped three-option record |

use crate::quiz_engine::{
    build_quiz, dataset, mount_quiz, parse_questions, render_quiz, DisplayLetter, Feedback,
    MalformedQuestion, Page, QuestionState, QuizError, QuizRequest, RawQuestionSpec, StaticPage,
    StructuredSpec, UiEvent, Verdict,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

// ── helpers ──────────────────────────────────────────────────────────────────

const ADD: &str = "question: 2+2=?\n4, 3, 5, 22";
const SKY: &str = "question: What colour is the sky?\nBlue, Green, Red, Yellow";
const CAPITAL: &str = "Question: Capital of Italy?\nRome, Milan, Turin, Naples";

/// Five seeds that span different RNG states.
const SEEDS: [u64; 5] = [1, 42, 999, 0xDEAD_BEEF, 7];

fn request(specs: &[&str], seed: u64) -> QuizRequest {
    QuizRequest::new(specs.iter().copied()).with_seed(seed)
}

fn structured(q: &str, options: [&str; 4], answer: i64) -> RawQuestionSpec {
    RawQuestionSpec::Object(StructuredSpec {
        q: q.to_string(),
        options: options.iter().map(|s| s.to_string()).collect(),
        answer,
        explanation: None,
        cite: None,
    })
}

// ── validation completeness ──────────────────────────────────────────────────

#[test]
fn every_malformed_class_is_skipped_exactly_once() {
    let cases: Vec<(RawQuestionSpec, MalformedQuestion)> = vec![
        ("question: a?".into(), MalformedQuestion::LineCount { found: 1 }),
        ("question: a?\n1, 2, 3, 4\n5".into(), MalformedQuestion::LineCount { found: 3 }),
        ("a?\n1, 2, 3, 4".into(), MalformedQuestion::MissingMarker),
        ("question: a?\n1, 2, 3".into(), MalformedQuestion::OptionCount { found: 3 }),
        ("question: a?\n1, 2, 3, 4, 5".into(), MalformedQuestion::OptionCount { found: 5 }),
        (structured("a?", ["1", "2", "3", "4"], 7), MalformedQuestion::AnswerOutOfRange { index: 7 }),
        (
            RawQuestionSpec::Unrecognized(serde_json::json!(["not", "a", "question"])),
            MalformedQuestion::MalformedStructure,
        ),
        (
            RawQuestionSpec::Unrecognized(serde_json::json!({ "q": "a?", "options": ["1", "2", "3", "4"], "answer": "x" })),
            MalformedQuestion::InvalidField { field: "answer" },
        ),
    ];

    testing_logger::setup();
    for (spec, expected) in cases {
        let report = parse_questions(std::slice::from_ref(&spec));
        assert!(report.questions.is_empty(), "{spec:?} should not parse");
        assert_eq!(report.skipped.len(), 1, "{spec:?} should be skipped once");
        assert_eq!(report.skipped[0].position, 1);
        assert_eq!(report.skipped[0].reason, expected);

        testing_logger::validate(|logs| {
            let warnings: Vec<_> = logs.iter().filter(|l| l.level == log::Level::Warn).collect();
            assert_eq!(warnings.len(), 1, "{spec:?} should warn once");
            assert_eq!(warnings[0].body, format!("question #1 skipped: {expected}"));
        });
    }
}

#[test]
fn only_the_bad_record_is_warned_about() {
    testing_logger::setup();
    let specs: Vec<RawQuestionSpec> = vec![ADD.into(), "question: a?\n1, 2, 3".into(), SKY.into()];
    let report = parse_questions(&specs);
    assert_eq!(report.questions.len(), 2);

    testing_logger::validate(|logs| {
        let warnings: Vec<_> = logs.iter().filter(|l| l.level == log::Level::Warn).collect();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].body.starts_with("question #2 skipped"), "{}", warnings[0].body);
    });
}

#[test]
fn well_formed_records_always_parse() {
    let specs: Vec<RawQuestionSpec> = vec![
        ADD.into(),
        SKY.into(),
        CAPITAL.into(),
        structured("Largest ocean?", ["Atlantic", "Pacific", "Indian", "Arctic"], 1),
    ];
    let report = parse_questions(&specs);
    assert_eq!(report.questions.len(), 4);
    assert!(report.skipped.is_empty());
    let ids: Vec<&str> = report.questions.iter().map(|q| q.id.as_str()).collect();
    assert_eq!(ids, ["q1", "q2", "q3", "q4"]);
    assert_eq!(report.questions[3].correct_text(), "Pacific");
}

#[test]
fn one_bad_record_does_not_break_the_quiz() {
    let built = build_quiz(&request(&[ADD, "question: broken\n3,4,5", SKY], 5));
    assert_eq!(built.report.questions.len(), 2);
    assert_eq!(built.report.skipped.len(), 1);
    assert_eq!(built.report.skipped[0].position, 2);
    assert_eq!(built.rendered.answer_key.len(), 2);
    assert!(built.rendered.answer_key.get("q2").is_none());
    assert!(built.rendered.answer_key.get("q3").is_some());
}

// ── shuffle correctness ──────────────────────────────────────────────────────

#[test]
fn options_land_on_every_letter_uniformly() {
    let report = parse_questions(&[RawQuestionSpec::from(ADD)]);
    let question = &report.questions[0];
    let mut rng = StdRng::seed_from_u64(0x5EED);

    let renders = 24_000usize;
    // counts[option][letter]
    let mut counts = [[0usize; 4]; 4];
    for _ in 0..renders {
        let quiz = render_quiz(&mut rng, std::slice::from_ref(question));
        for opt in &quiz.groups[0].options {
            let original = question.options.iter().position(|o| *o == opt.text).unwrap();
            counts[original][opt.letter.index()] += 1;
        }
    }

    let expected = renders / 4;
    let tolerance = expected / 20;
    for (option, row) in counts.iter().enumerate() {
        for (letter, &n) in row.iter().enumerate() {
            assert!(
                n.abs_diff(expected) < tolerance,
                "option {option} at letter {letter}: {n} (expected ≈{expected})"
            );
        }
    }
}

#[test]
fn correct_option_keeps_its_text_through_shuffles() {
    for seed in SEEDS {
        let built = build_quiz(&request(&[ADD, SKY, CAPITAL], seed));
        let expected = ["4", "Blue", "Rome"];
        for (group, text) in built.rendered.groups.iter().zip(expected) {
            let correct: Vec<_> = group.options.iter().filter(|o| o.is_correct).collect();
            assert_eq!(correct.len(), 1);
            assert_eq!(correct[0].text, text, "seed={seed}");
        }
    }
}

// ── answer-key soundness ─────────────────────────────────────────────────────

#[test]
fn answer_key_matches_rendered_correct_option() {
    for seed in 0..200u64 {
        let built = build_quiz(&request(&[ADD, SKY, CAPITAL], seed));
        let key = &built.rendered.answer_key;
        assert_eq!(key.len(), 3);
        for group in &built.rendered.groups {
            let letter = key.get(&group.question_id).unwrap();
            let correct = group.options.iter().find(|o| o.is_correct).unwrap();
            assert_eq!(letter, correct.letter, "seed={seed} {}", group.question_id);
            assert!(built.rendered.markup.contains(&format!(
                r#"name="{}" value="{}"> {}</label>"#,
                group.question_id, letter, correct.text
            )));
        }
    }
}

#[test]
fn rendering_does_not_mutate_questions() {
    let report = parse_questions(&[RawQuestionSpec::from(ADD), RawQuestionSpec::from(SKY)]);
    let before = report.questions.clone();
    let mut rng = StdRng::seed_from_u64(3);
    let _ = render_quiz(&mut rng, &report.questions);
    assert_eq!(report.questions, before);
}

// ── determinism / re-render ──────────────────────────────────────────────────

#[test]
fn same_seed_produces_identical_layout() {
    let a = build_quiz(&request(&[ADD, SKY, CAPITAL], 12345));
    let b = build_quiz(&request(&[ADD, SKY, CAPITAL], 12345));
    assert_eq!(a.rendered, b.rendered);
}

#[test]
fn rerenders_draw_fresh_keys() {
    // With 5 questions two independent renders share the whole key with
    // probability 4^-5; across 20 pairs a handful of matches is already a lot.
    let specs = [ADD, SKY, CAPITAL, "question: 1+1=?\n2, 1, 3, 11", "question: Red+Blue?\nPurple, Green, Orange, Brown"];
    let mut same = 0;
    for seed in 0..20u64 {
        let a = build_quiz(&request(&specs, seed));
        let b = build_quiz(&request(&specs, seed + 1000));
        if a.rendered.answer_key == b.rendered.answer_key {
            same += 1;
        }
    }
    assert!(same < 3, "too many identical keys across renders ({same}/20)");
}

#[test]
fn entropy_seed_produces_a_valid_quiz() {
    let built = build_quiz(&QuizRequest::new([ADD, SKY]));
    assert_eq!(built.rendered.answer_key.len(), 2);
    assert_eq!(built.rendered.controls.len(), 8);
}

// ── grading through a mounted session ────────────────────────────────────────

#[test]
fn grading_is_consistent_with_the_key() {
    for seed in SEEDS {
        let mut page = StaticPage::with_container("quizForm");
        let mut session = mount_quiz(&mut page, &request(&[ADD], seed)).unwrap();
        let correct = session.grading().answer_key().get("q1").unwrap();

        for letter in DisplayLetter::ALL {
            let out = session.dispatch(&UiEvent::change(format!("q1-{letter}"))).unwrap();
            let expected = if letter == correct { Verdict::Correct } else { Verdict::Incorrect };
            assert_eq!(out.verdict, expected, "seed={seed} letter={letter}");
        }
    }
}

#[test]
fn page_shows_feedback_only_for_the_latest_pick() {
    let mut page = StaticPage::with_container("quizForm");
    {
        let mut session = mount_quiz(&mut page, &request(&[ADD], 9)).unwrap();
        let correct = session.grading().answer_key().get("q1").unwrap();
        let wrong = DisplayLetter::ALL.into_iter().find(|&l| l != correct).unwrap();

        session.dispatch(&UiEvent::change(format!("q1-{wrong}")));
        assert_eq!(session.page().text(&format!("q1-{wrong}-feedback")), "Wrong");

        session.dispatch(&UiEvent::change(format!("q1-{correct}")));
        assert_eq!(session.page().text(&format!("q1-{wrong}-feedback")), "");
        assert_eq!(session.page().text(&format!("q1-{correct}-feedback")), "Correct");
        assert_eq!(session.grading().state("q1"), QuestionState::Answered(correct));
    }
    assert!(page.inner_html("quizForm").unwrap().contains("2+2=?"));
}

#[test]
fn repeated_pick_gives_identical_feedback() {
    let mut page = StaticPage::with_container("quizForm");
    let mut session = mount_quiz(&mut page, &request(&[ADD, SKY], 77)).unwrap();
    let first = session.dispatch(&UiEvent::change("q2-b")).unwrap();
    let second = session.dispatch(&UiEvent::change("q2-b")).unwrap();
    assert_eq!(first, second);
    assert_eq!(session.page().text("q2-b-feedback"), first.feedback.text());
}

#[test]
fn grading_one_question_leaves_others_alone() {
    let mut page = StaticPage::with_container("quizForm");
    let mut session = mount_quiz(&mut page, &request(&[ADD, SKY, CAPITAL], 31)).unwrap();
    let key_before = session.grading().answer_key().clone();

    let sky = session.dispatch(&UiEvent::change("q2-a")).unwrap();
    for letter in DisplayLetter::ALL {
        session.dispatch(&UiEvent::change(format!("q1-{letter}")));
        session.dispatch(&UiEvent::change(format!("q3-{letter}")));
    }

    assert_eq!(session.grading().feedback("q2-a"), &sky.feedback);
    assert_eq!(session.page().text("q2-a-feedback"), sky.feedback.text());
    assert_eq!(session.grading().state("q2"), QuestionState::Answered(DisplayLetter::A));
    assert_eq!(session.grading().answer_key(), &key_before);
}

#[test]
fn explanations_are_shown_with_feedback() {
    let spec = RawQuestionSpec::Object(StructuredSpec {
        q: "Boiling point of water at sea level?".to_string(),
        options: ["100 °C", "90 °C", "80 °C", "120 °C"].map(String::from).to_vec(),
        answer: 0,
        explanation: Some("At 1 atm water boils at 100 °C.".to_string()),
        cite: None,
    });
    let mut req = QuizRequest::new([spec]).with_seed(3);
    req.labels.incorrect = "Not quite".to_string();

    let mut page = StaticPage::with_container("quizForm");
    let mut session = mount_quiz(&mut page, &req).unwrap();
    let correct = session.grading().answer_key().get("q1").unwrap();
    let wrong = DisplayLetter::ALL.into_iter().find(|&l| l != correct).unwrap();

    let out = session.dispatch(&UiEvent::change(format!("q1-{wrong}"))).unwrap();
    assert_eq!(out.feedback, Feedback::Incorrect("Not quite. At 1 atm water boils at 100 °C.".into()));
}

// ── host boundary ────────────────────────────────────────────────────────────

#[test]
fn missing_host_is_reported_without_mutation() {
    let mut page = StaticPage::with_container("quizContainer");
    let before = page.clone();

    let err = mount_quiz(&mut page, &request(&[ADD], 1)).err();
    assert!(matches!(err, Some(QuizError::MissingHost(ref id)) if id == "quizForm"));

    assert_eq!(page.inner_html("quizContainer"), before.inner_html("quizContainer"));
    assert_eq!(page.notices().len(), 1);
}

#[test]
fn missing_host_without_notice_shows_nothing() {
    let mut page = StaticPage::default();
    let mut req = request(&[ADD], 1);
    req.missing_host_notice = None;
    assert!(mount_quiz(&mut page, &req).is_err());
    assert_eq!(page, StaticPage::default());
}

#[test]
fn custom_container_id_is_used() {
    let mut page = StaticPage::with_container("quizContainer");
    let req = request(&[ADD], 1).with_container("quizContainer");
    assert!(mount_quiz(&mut page, &req).is_ok());
    assert!(page.contains("quizContainer"));
    assert!(page.inner_html("quizContainer").unwrap().contains(r#"name="q1""#));
}

// ── scenarios ────────────────────────────────────────────────────────────────

#[test]
fn two_plus_two_walkthrough() {
    let report = parse_questions(&[RawQuestionSpec::from(ADD)]);
    let q = &report.questions[0];
    assert_eq!(q.text, "2+2=?");
    assert_eq!(q.options, ["4", "3", "5", "22"].map(String::from));
    assert_eq!(q.correct_index, 0);

    let mut page = StaticPage::with_container("quizForm");
    let mut session = mount_quiz(&mut page, &request(&[ADD], 2024)).unwrap();
    let letter = session.grading().answer_key().get("q1").unwrap();
    let group = session.rendered().group("q1").unwrap();
    assert_eq!(group.options[letter.index()].text, "4");

    let hit = session.dispatch(&UiEvent::change(format!("q1-{letter}"))).unwrap();
    assert_eq!(hit.feedback.text(), "Correct");
    for other in DisplayLetter::ALL.into_iter().filter(|&l| l != letter) {
        let miss = session.dispatch(&UiEvent::change(format!("q1-{other}"))).unwrap();
        assert_eq!(miss.feedback.text(), "Wrong");
    }
}

#[test]
fn three_option_record_is_dropped() {
    let specs = dataset::split_text_blocks(
        "question: 2+2=?\n4, 3, 5, 22\n\nquestion: 1+2=?\n3,4,5\n\nquestion: 5-1=?\n4, 6, 5, 3\n",
    );
    let report = parse_questions(&specs);
    assert_eq!(report.questions.len(), 2);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].position, 2);
    assert_eq!(report.skipped[0].reason, MalformedQuestion::OptionCount { found: 3 });
}

#[test]
fn json_dataset_end_to_end() {
    let specs = dataset::load_json(
        r#"[
            "question: 2+2=?\n4, 3, 5, 22",
            { "q": "Sky?", "options": ["Red", "Blue", "Green", "Pink"], "answer": 1, "cite": "[3]" },
            { "q": "Broken", "options": ["a", "b"], "answer": 0 }
        ]"#,
    )
    .unwrap();
    let built = build_quiz(&QuizRequest::new(specs).with_seed(8));
    assert_eq!(built.report.questions.len(), 2);
    assert_eq!(built.report.skipped[0].position, 3);
    let sky = built.rendered.group("q2").unwrap();
    let letter = built.rendered.answer_key.get("q2").unwrap();
    assert_eq!(sky.options[letter.index()].text, "Blue");
    assert!(built.rendered.markup.contains("[3]"));
}
