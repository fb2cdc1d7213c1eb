//! # mcq_engine
//!
//! Renders multiple-choice quizzes from static question lists and grades each
//! selection as it is made.
//!
//! Every question has one correct answer and three distractors. Datasets write
//! them either as a two-line text block, correct answer first:
//!
//! ```text
//! question: 2+2=?
//! 4, 3, 5, 22
//! ```
//!
//! or as an object with `q`, `options`, `answer` and optional `explanation`
//! and `cite` fields.
//!
//! ## How it works
//!
//! 1. Create a [`QuizRequest`] with the raw questions, the id of the host
//!    container and an optional RNG seed.
//! 2. Call [`mount_quiz`] with a [`Page`]. Malformed questions are dropped
//!    with a logged warning; the rest are shuffled, rendered as radio groups
//!    and injected into the container. The correct letter of each question is
//!    kept in an [`AnswerKey`] owned by the returned [`QuizSession`].
//! 3. Feed UI events to [`QuizSession::dispatch`]. A change on a radio
//!    control clears the group's old feedback and marks the new pick
//!    correct or wrong.
//!
//! [`build_quiz`] does steps 1–2 without a page, for callers that inject the
//! markup themselves.
//!
//! ## Key features
//!
//! - **Deterministic**: `rng_seed: Some(u64)` reproduces the same option order.
//!   Without a seed every render draws a fresh order and a fresh key.
//! - **Graceful**: a bad question, a missing container or an unknown question
//!   id is logged through the `log` facade and never aborts the quiz.
//!
//! ## Quick start
//!
//! ```rust
//! use mcq_engine::{mount_quiz, QuizRequest, StaticPage, UiEvent, Verdict};
//!
//! let request = QuizRequest::new(["question: 2+2=?\n4, 3, 5, 22"]).with_seed(42);
//! let mut page = StaticPage::with_container("quizForm");
//! let mut session = mount_quiz(&mut page, &request).unwrap();
//!
//! let correct = session.grading().answer_key().get("q1").unwrap();
//! let outcome = session.dispatch(&UiEvent::change(format!("q1-{correct}"))).unwrap();
//! assert_eq!(outcome.verdict, Verdict::Correct);
//! ```

pub mod quiz_engine;

// Convenience re-exports so callers can use `mcq_engine::mount_quiz`
// directly without reaching into `quiz_engine::`.
pub use quiz_engine::{
    build_quiz, mount_quiz, AnswerKey, BuiltQuiz, DisplayLetter, EventKind, Feedback,
    FeedbackLabels, GradeOutcome, GradingContext, MalformedQuestion, Page, ParseReport, Question,
    QuestionState, QuizError, QuizRequest, QuizSession, RawQuestionSpec, RenderedQuiz,
    StaticPage, StructuredSpec, UiEvent, Verdict,
};

#[cfg(test)]
mod tests;
