use log::{debug, warn};
use rand::{rngs::StdRng, SeedableRng};

use crate::quiz_engine::{
    error::{QuizError, Result},
    grader::{GradeOutcome, GradingContext, UiEvent},
    helpers::feedback_id,
    host::Page,
    models::{DisplayLetter, QuizRequest},
    parser::{parse_questions, ParseReport},
    renderer::{render_quiz, RenderedQuiz},
};

/// Parsed and rendered quiz, not yet attached to any page.
#[derive(Debug, Clone)]
pub struct BuiltQuiz {
    pub report: ParseReport,
    pub rendered: RenderedQuiz,
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    }
}

/// Parse and render a request. Malformed questions are dropped and logged.
pub fn build_quiz(request: &QuizRequest) -> BuiltQuiz {
    let mut rng = make_rng(request.rng_seed);
    let report = parse_questions(&request.questions);
    let rendered = render_quiz(&mut rng, &report.questions);
    BuiltQuiz { report, rendered }
}

/// A quiz injected into a page, answering selection events.
pub struct QuizSession<'p, P: Page> {
    page: &'p mut P,
    grading: GradingContext,
    report: ParseReport,
    rendered: RenderedQuiz,
}

/// Render `request` into its container on `page`.
///
/// When the container is missing nothing is parsed or injected: the
/// configured notice is shown, a warning is logged and
/// [`QuizError::MissingHost`] is returned.
pub fn mount_quiz<'p, P: Page>(page: &'p mut P, request: &QuizRequest) -> Result<QuizSession<'p, P>> {
    if !page.contains(&request.container_id) {
        let err = QuizError::MissingHost(request.container_id.clone());
        warn!("{err}");
        if let Some(notice) = &request.missing_host_notice {
            page.show_notice(notice);
        }
        return Err(err);
    }

    let BuiltQuiz { report, rendered } = build_quiz(request);
    if !page.set_inner_html(&request.container_id, &rendered.markup) {
        // The container vanished between the check and the write.
        return Err(QuizError::MissingHost(request.container_id.clone()));
    }
    debug!(
        "mounted {} questions into {:?} ({} skipped)",
        report.questions.len(),
        request.container_id,
        report.skipped.len()
    );

    let grading = GradingContext::from_rendered(&rendered, request.labels.clone());
    Ok(QuizSession { page, grading, report, rendered })
}

impl<'p, P: Page> QuizSession<'p, P> {
    /// Grade one event and update the feedback elements of its question.
    pub fn dispatch(&mut self, event: &UiEvent) -> Option<GradeOutcome> {
        let outcome = self.grading.handle_event(event)?;
        for letter in DisplayLetter::ALL {
            let id = feedback_id(&outcome.question_id, letter);
            let text = if letter == outcome.selected { outcome.feedback.text() } else { "" };
            self.page.set_text(&id, text);
        }
        Some(outcome)
    }

    pub fn grading(&self) -> &GradingContext {
        &self.grading
    }

    pub fn report(&self) -> &ParseReport {
        &self.report
    }

    pub fn rendered(&self) -> &RenderedQuiz {
        &self.rendered
    }

    pub fn page(&self) -> &P {
        &*self.page
    }
}
