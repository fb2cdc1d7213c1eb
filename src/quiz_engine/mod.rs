//! Quiz engine: parsing, shuffling, rendering and grading.
//!
//! ## Module overview
//!
//! | Module     | Purpose |
//! |------------|---------|
//! | `models`   | Shared types: raw records, questions, display letters, answer key, request |
//! | `error`    | Malformed-question reasons and the crate error type |
//! | `parser`   | Raw record → validated `Question`, skipping and logging bad records |
//! | `shuffle`  | Fisher-Yates shuffle of one question's four options |
//! | `helpers`  | Element-id scheme, HTML escaping, feedback text |
//! | `renderer` | Questions → form markup + `AnswerKey` + control lookup |
//! | `grader`   | `GradingContext`: per-selection feedback state machine |
//! | `host`     | `Page` trait for the host document, in-memory `StaticPage` |
//! | `engine`   | Entry points `build_quiz()` and `mount_quiz()` |
//! | `dataset`  | Loading raw question lists from JSON or text |
//! | `client`   | JSON payloads for browser clients |

pub mod client;
pub mod dataset;
pub mod engine;
pub mod error;
pub mod grader;
pub mod helpers;
pub mod host;
pub mod models;
pub mod parser;
pub mod renderer;
pub mod shuffle;

// Re-export the public API surface so callers can use
// `quiz_engine::build_quiz` without reaching into sub-modules.
pub use engine::{build_quiz, mount_quiz, BuiltQuiz, QuizSession};
pub use error::{MalformedQuestion, QuizError, Result};
pub use grader::{EventKind, GradeOutcome, GradingContext, UiEvent};
pub use host::{Page, StaticPage};
pub use models::{
    AnswerKey, ControlRef, DisplayLetter, Feedback, FeedbackLabels, Question, QuestionState,
    QuizRequest, RawQuestionSpec, RenderedOption, StructuredSpec, Verdict,
};
pub use parser::{parse_questions, ParseReport, SkippedQuestion};
pub use renderer::{render_quiz, RenderedGroup, RenderedQuiz};
