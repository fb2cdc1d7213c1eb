//! End-to-end walk through the quiz engine.
//!
//! Run with: `RUST_LOG=debug cargo run --example demo`
//!
//! 1. **Mount**: three questions (one of them malformed) are mounted into an
//!    in-memory page. The malformed one is skipped with a warning.
//! 2. **Grade**: a wrong pick, then the right one, on the same question.
//!    Only the latest pick keeps its feedback.
//! 3. **Re-render**: the same questions rendered again without a seed get a
//!    fresh option order and a fresh answer key.
//! 4. **Missing host**: mounting into a page without the container.

use mcq_engine::{
    build_quiz, mount_quiz, DisplayLetter, QuizRequest, StaticPage, UiEvent,
};

const QUESTIONS: [&str; 3] = [
    "question: 2+2=?\n4, 3, 5, 22",
    "question: Which planet is closest to the sun?\nMercury, Venus, Earth, Mars",
    "question: A question with only three options\n1, 2, 3",
];

fn main() {
    pretty_env_logger::init();

    // ── Mount ──────────────────────────────────────────────────────────────
    println!();
    println!("══ Mount ══");
    let request = QuizRequest::new(QUESTIONS).with_seed(1001);
    let mut page = StaticPage::with_container("quizForm");
    let mut session = match mount_quiz(&mut page, &request) {
        Ok(session) => session,
        Err(err) => {
            eprintln!("{err}");
            return;
        }
    };

    for skipped in &session.report().skipped {
        println!("  skipped #{}: {}", skipped.position, skipped.reason);
    }
    for group in &session.rendered().groups {
        println!("  {}: {}", group.question_id, group.text);
        for opt in &group.options {
            let marker = if opt.is_correct { "✓" } else { " " };
            println!("    [{}] {marker} {}", opt.letter, opt.text);
        }
    }

    // ── Grade ──────────────────────────────────────────────────────────────
    println!();
    println!("══ Grade q1 ══");
    let correct = session.grading().answer_key().get("q1").unwrap_or(DisplayLetter::A);
    let wrong = DisplayLetter::ALL
        .into_iter()
        .find(|&l| l != correct)
        .unwrap_or(DisplayLetter::B);

    for letter in [wrong, correct] {
        let Some(event) = UiEvent::from_form("q1", letter.as_str()) else {
            continue;
        };
        if let Some(outcome) = session.dispatch(&event) {
            println!("  picked {letter}: {} ({})", outcome.verdict, outcome.feedback.text());
        }
        for l in DisplayLetter::ALL {
            let text = session.page().text(&format!("q1-{l}-feedback"));
            println!("    q1-{l}-feedback = {text:?}");
        }
    }

    // ── Re-render ──────────────────────────────────────────────────────────
    println!();
    println!("══ Re-render without a seed ══");
    for round in 1..=3 {
        let built = build_quiz(&QuizRequest::new(QUESTIONS));
        let key: Vec<String> = built
            .rendered
            .answer_key
            .iter()
            .map(|(id, letter)| format!("{id}={letter}"))
            .collect();
        println!("  render {round}: {}", key.join(" "));
    }

    // ── Missing host ───────────────────────────────────────────────────────
    println!();
    println!("══ Missing host ══");
    let mut empty = StaticPage::with_container("sidebar");
    if let Err(err) = mount_quiz(&mut empty, &request) {
        println!("  {err}");
        for notice in empty.notices() {
            println!("  notice: {notice}");
        }
    }
}
