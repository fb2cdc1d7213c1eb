//! Small builders shared by the renderer, the grader and the host page.
//!
//! Element ids follow one scheme everywhere:
//!
//! | Element            | Id                      |
//! |--------------------|-------------------------|
//! | question group     | `<qid>-group`           |
//! | radio control      | `<qid>-<letter>`        |
//! | feedback placeholder | `<qid>-<letter>-feedback` |

use crate::quiz_engine::models::{DisplayLetter, FeedbackLabels, Feedback, Verdict};

pub fn group_id(question_id: &str) -> String {
    format!("{question_id}-group")
}

pub fn control_id(question_id: &str, letter: DisplayLetter) -> String {
    format!("{question_id}-{letter}")
}

pub fn feedback_id(question_id: &str, letter: DisplayLetter) -> String {
    format!("{question_id}-{letter}-feedback")
}

/// Build the feedback for a graded pick.
///
/// The explanation, when the question has one, follows the label.
/// `Ungraded` yields no feedback.
pub fn feedback(verdict: Verdict, labels: &FeedbackLabels, explanation: Option<&str>) -> Feedback {
    let with_explanation = |label: &str| match explanation {
        Some(expl) => format!("{label}. {expl}"),
        None => label.to_string(),
    };
    match verdict {
        Verdict::Correct   => Feedback::Correct(with_explanation(&labels.correct)),
        Verdict::Incorrect => Feedback::Incorrect(with_explanation(&labels.incorrect)),
        Verdict::Ungraded  => Feedback::Blank,
    }
}
