//! Questions → form markup plus the answer key for this render.
//!
//! Each call shuffles every question afresh, so two renders of the same
//! questions produce independent letter layouts and independent keys.

use std::collections::BTreeMap;

use log::debug;
use maud::{html, Markup};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::quiz_engine::{
    helpers::{control_id, feedback_id, group_id},
    models::{AnswerKey, ControlRef, Question, RenderedOption, OPTION_COUNT},
    shuffle::shuffle_options,
};

/// One question as laid out on screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedGroup {
    pub question_id: String,
    pub text: String,
    pub options: [RenderedOption; OPTION_COUNT],
    pub explanation: Option<String>,
    pub cite: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedQuiz {
    pub markup: String,
    pub answer_key: AnswerKey,
    /// Control id (`<qid>-<letter>`) → owning question and letter.
    pub controls: BTreeMap<String, ControlRef>,
    pub groups: Vec<RenderedGroup>,
}

impl RenderedQuiz {
    pub fn group(&self, question_id: &str) -> Option<&RenderedGroup> {
        self.groups.iter().find(|g| g.question_id == question_id)
    }
}

/// Render `questions` in order. Question order is kept; option order is shuffled.
pub fn render_quiz<R: Rng>(rng: &mut R, questions: &[Question]) -> RenderedQuiz {
    let mut markup = String::new();
    let mut answer_key = AnswerKey::default();
    let mut controls = BTreeMap::new();
    let mut groups = Vec::with_capacity(questions.len());

    for (n, question) in questions.iter().enumerate() {
        let options = shuffle_options(rng, question);

        for opt in &options {
            if opt.is_correct {
                answer_key.record(&question.id, opt.letter);
            }
            controls.insert(
                control_id(&question.id, opt.letter),
                ControlRef { question_id: question.id.clone(), letter: opt.letter },
            );
        }

        markup.push_str(&question_group(n + 1, question, &options).into_string());

        groups.push(RenderedGroup {
            question_id: question.id.clone(),
            text: question.text.clone(),
            options,
            explanation: question.explanation.clone(),
            cite: question.cite.clone(),
        });
    }

    debug!("rendered {} questions, {} controls", groups.len(), controls.len());
    RenderedQuiz { markup, answer_key, controls, groups }
}

/// One `<fieldset>` with a radio control and an empty feedback slot per option.
fn question_group(number: usize, question: &Question, options: &[RenderedOption]) -> Markup {
    html! {
        fieldset.quiz-question id=(group_id(&question.id)) {
            legend { (number) ". " (question.text) }
            @for opt in options {
                @let cid = control_id(&question.id, opt.letter);
                label for=(cid) {
                    input type="radio" id=(cid) name=(question.id) value=(opt.letter.as_str());
                    " " (opt.text)
                }
                " "
                span.feedback id=(feedback_id(&question.id, opt.letter)) {}
                br;
            }
            @if let Some(cite) = &question.cite {
                small.cite { (cite) }
            }
        }
    }
}
