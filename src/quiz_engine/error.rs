//! Error taxonomy.
//!
//! Nothing here is fatal. A malformed question is dropped, a missing host
//! skips rendering, an ungraded selection shows no feedback.

use thiserror::Error;

/// Why one raw record could not become a `Question`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedQuestion {
    #[error("expected 2 non-empty lines, found {found}")]
    LineCount { found: usize },

    #[error("first line does not start with \"question:\"")]
    MissingMarker,

    #[error("question text is empty")]
    EmptyText,

    #[error("expected 4 options, found {found}")]
    OptionCount { found: usize },

    #[error("option {position} is empty")]
    EmptyOption { position: usize },

    #[error("option {text:?} is listed more than once")]
    DuplicateOption { text: String },

    #[error("answer index {index} is outside 0..=3")]
    AnswerOutOfRange { index: i64 },

    #[error("field `{field}` is missing or has the wrong type")]
    InvalidField { field: &'static str },

    #[error("record is neither a text block nor a question object")]
    MalformedStructure,
}

#[derive(Debug, Error)]
pub enum QuizError {
    #[error("question #{position} skipped: {reason}")]
    MalformedQuestion {
        position: usize,
        #[source]
        reason: MalformedQuestion,
    },

    #[error("host container {0:?} not found; quiz not rendered")]
    MissingHost(String),

    #[error("selection for question {0:?} has no answer key entry")]
    UngradedSelection(String),

    #[error("dataset is not valid JSON: {0}")]
    Dataset(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, QuizError>;
