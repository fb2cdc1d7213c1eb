use serde_json::{json, Value};

use crate::quiz_engine::{
    grader::GradeOutcome,
    helpers::control_id,
    renderer::{RenderedGroup, RenderedQuiz},
};

/// One question for a browser client. Correctness is left out.
fn client_question(group: &RenderedGroup) -> Value {
    let options: Vec<Value> = group
        .options
        .iter()
        .map(|opt| {
            json!({
                "control_id": control_id(&group.question_id, opt.letter),
                "letter":     opt.letter,
                "text":       opt.text,
            })
        })
        .collect();
    json!({
        "id":      group.question_id,
        "text":    group.text,
        "options": options,
        "cite":    group.cite,
    })
}

/// Everything a client needs to draw the quiz itself, minus the answer key.
pub fn to_client_payload(quiz: &RenderedQuiz) -> Value {
    let questions: Vec<Value> = quiz.groups.iter().map(client_question).collect();
    json!({
        "questions": questions,
        "markup":    quiz.markup,
    })
}

/// Response body for one graded selection.
pub fn grade_response(outcome: &GradeOutcome) -> Value {
    json!({
        "question_id": outcome.question_id,
        "selected":    outcome.selected,
        "verdict":     outcome.verdict,
        "feedback":    outcome.feedback.text(),
    })
}
