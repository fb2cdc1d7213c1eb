//! Per-selection grading.
//!
//! A [`GradingContext`] owns everything the handler needs: the answer key,
//! the control → question lookup, and the feedback currently shown. Events
//! are plain values, so grading runs without a page.
//!
//! Per question the state moves `Unanswered → Answered(letter)` on every
//! selection. Picking again simply re-enters `Answered`; nothing is locked.

use std::collections::BTreeMap;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::quiz_engine::{
    error::QuizError,
    helpers::{control_id, feedback},
    models::{
        AnswerKey, ControlRef, DisplayLetter, Feedback, FeedbackLabels, QuestionState, Verdict,
    },
    renderer::RenderedQuiz,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    /// The selected control changed. The only kind that grades.
    Change,
    Click,
    Focus,
    Blur,
    Input,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiEvent {
    pub kind: EventKind,
    pub control_id: String,
}

impl UiEvent {
    pub fn change(control_id: impl Into<String>) -> Self {
        UiEvent { kind: EventKind::Change, control_id: control_id.into() }
    }

    /// A change event from a submitted radio group: `name` is the question id,
    /// `value` the picked letter. `None` when the value is not a letter.
    pub fn from_form(name: &str, value: &str) -> Option<Self> {
        let letter: DisplayLetter = value.parse().ok()?;
        Some(UiEvent::change(control_id(name.trim(), letter)))
    }
}

/// Result of grading one selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeOutcome {
    pub question_id: String,
    pub selected: DisplayLetter,
    pub verdict: Verdict,
    /// Feedback now shown next to the selected control.
    pub feedback: Feedback,
}

#[derive(Debug, Clone)]
pub struct GradingContext {
    answer_key: AnswerKey,
    controls: BTreeMap<String, ControlRef>,
    labels: FeedbackLabels,
    explanations: BTreeMap<String, String>,
    states: BTreeMap<String, QuestionState>,
    feedback: BTreeMap<String, Feedback>,
}

impl GradingContext {
    pub fn new(
        answer_key: AnswerKey,
        controls: BTreeMap<String, ControlRef>,
        labels: FeedbackLabels,
        explanations: BTreeMap<String, String>,
    ) -> Self {
        GradingContext {
            answer_key,
            controls,
            labels,
            explanations,
            states: BTreeMap::new(),
            feedback: BTreeMap::new(),
        }
    }

    pub fn from_rendered(quiz: &RenderedQuiz, labels: FeedbackLabels) -> Self {
        let explanations = quiz
            .groups
            .iter()
            .filter_map(|g| Some((g.question_id.clone(), g.explanation.clone()?)))
            .collect();
        Self::new(quiz.answer_key.clone(), quiz.controls.clone(), labels, explanations)
    }

    pub fn answer_key(&self) -> &AnswerKey {
        &self.answer_key
    }

    pub fn state(&self, question_id: &str) -> QuestionState {
        self.states.get(question_id).copied().unwrap_or_default()
    }

    /// Feedback next to `control_id`; blank when nothing is shown.
    pub fn feedback(&self, control_id: &str) -> &Feedback {
        const BLANK: &Feedback = &Feedback::Blank;
        self.feedback.get(control_id).unwrap_or(BLANK)
    }

    /// Ids of all controls in the group that owns `question_id`.
    pub fn group_controls(&self, question_id: &str) -> Vec<String> {
        DisplayLetter::ALL
            .iter()
            .map(|&letter| control_id(question_id, letter))
            .filter(|id| self.controls.contains_key(id))
            .collect()
    }

    /// Grade one UI event.
    ///
    /// Returns `None` for anything that is not a selection of a known control.
    pub fn handle_event(&mut self, event: &UiEvent) -> Option<GradeOutcome> {
        if event.kind != EventKind::Change {
            return None;
        }
        let Some(control) = self.controls.get(&event.control_id).cloned() else {
            debug!("ignoring change on unknown control {:?}", event.control_id);
            return None;
        };

        for id in self.group_controls(&control.question_id) {
            self.feedback.remove(&id);
        }
        self.states
            .insert(control.question_id.clone(), QuestionState::Answered(control.letter));

        let verdict = match self.answer_key.get(&control.question_id) {
            Some(correct) if correct == control.letter => Verdict::Correct,
            Some(_) => Verdict::Incorrect,
            None => {
                warn!("{}", QuizError::UngradedSelection(control.question_id.clone()));
                Verdict::Ungraded
            }
        };

        let shown = feedback(
            verdict,
            &self.labels,
            self.explanations.get(&control.question_id).map(String::as_str),
        );
        if !shown.is_blank() {
            self.feedback.insert(event.control_id.clone(), shown.clone());
        }
        debug!("graded {} = {} ({verdict})", control.question_id, control.letter);

        Some(GradeOutcome {
            question_id: control.question_id,
            selected: control.letter,
            verdict,
            feedback: shown,
        })
    }
}
