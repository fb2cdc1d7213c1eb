//! Raw question records → validated [`Question`]s.
//!
//! Text block grammar:
//!
//! ```text
//! "question:" TEXT NEWLINE OPT "," OPT "," OPT "," OPT
//! ```
//!
//! The first option of a text block is the correct one. Structured records
//! carry an explicit `answer` index instead.

use std::collections::HashSet;

use log::warn;

use crate::quiz_engine::{
    error::{MalformedQuestion, QuizError},
    models::{Question, RawQuestionSpec, StructuredSpec, OPTION_COUNT},
};

const MARKER: &str = "question:";

/// A record that was dropped, with its 1-based input position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedQuestion {
    pub position: usize,
    pub reason: MalformedQuestion,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseReport {
    pub questions: Vec<Question>,
    pub skipped: Vec<SkippedQuestion>,
}

/// Id for the question at 1-based `position`.
pub fn question_id(position: usize) -> String {
    format!("q{position}")
}

/// Validate one record. `position` is 1-based.
pub fn parse_question(
    spec: &RawQuestionSpec,
    position: usize,
) -> Result<Question, MalformedQuestion> {
    match spec {
        RawQuestionSpec::Text(block) => parse_text_block(block, position),
        RawQuestionSpec::Object(obj) => parse_structured(obj, position),
        RawQuestionSpec::Unrecognized(value) => Err(unrecognized_reason(value)),
    }
}

/// Name the first bad field of something that looks like a question object.
fn unrecognized_reason(value: &serde_json::Value) -> MalformedQuestion {
    let Some(obj) = value.as_object() else {
        return MalformedQuestion::MalformedStructure;
    };
    if !["q", "options", "answer"].iter().any(|k| obj.contains_key(*k)) {
        return MalformedQuestion::MalformedStructure;
    }

    let options_ok = obj
        .get("options")
        .and_then(|o| o.as_array())
        .is_some_and(|items| items.iter().all(|item| item.is_string()));
    let field = if !obj.get("q").is_some_and(|q| q.is_string()) {
        "q"
    } else if !options_ok {
        "options"
    } else {
        "answer"
    };
    MalformedQuestion::InvalidField { field }
}

pub fn parse_text_block(block: &str, position: usize) -> Result<Question, MalformedQuestion> {
    let lines: Vec<&str> = block
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    if lines.len() != 2 {
        return Err(MalformedQuestion::LineCount { found: lines.len() });
    }

    let text = strip_marker(lines[0]).ok_or(MalformedQuestion::MissingMarker)?;
    let options: Vec<&str> = lines[1].split(',').collect();

    Ok(Question {
        id: question_id(position),
        text: non_empty_text(text)?,
        options: validate_options(&options)?,
        correct_index: 0,
        explanation: None,
        cite: None,
    })
}

pub fn parse_structured(
    spec: &StructuredSpec,
    position: usize,
) -> Result<Question, MalformedQuestion> {
    let text = non_empty_text(&spec.q)?;
    let options: Vec<&str> = spec.options.iter().map(String::as_str).collect();
    let options = validate_options(&options)?;
    let correct_index = usize::try_from(spec.answer)
        .ok()
        .filter(|&i| i < OPTION_COUNT)
        .ok_or(MalformedQuestion::AnswerOutOfRange { index: spec.answer })?;

    Ok(Question {
        id: question_id(position),
        text,
        options,
        correct_index,
        explanation: optional_text(spec.explanation.as_deref()),
        cite: optional_text(spec.cite.as_deref()),
    })
}

/// Validate a whole list, dropping malformed records.
///
/// Each dropped record is logged once and listed in [`ParseReport::skipped`];
/// the rest of the list is still parsed.
pub fn parse_questions(specs: &[RawQuestionSpec]) -> ParseReport {
    let mut report = ParseReport::default();
    for (i, spec) in specs.iter().enumerate() {
        let position = i + 1;
        match parse_question(spec, position) {
            Ok(question) => report.questions.push(question),
            Err(reason) => {
                warn!("{}", QuizError::MalformedQuestion { position, reason: reason.clone() });
                report.skipped.push(SkippedQuestion { position, reason });
            }
        }
    }
    report
}

/// Text after a case-insensitive `question:` prefix.
fn strip_marker(line: &str) -> Option<&str> {
    let prefix = line.get(..MARKER.len())?;
    if prefix.eq_ignore_ascii_case(MARKER) {
        Some(&line[MARKER.len()..])
    } else {
        None
    }
}

fn non_empty_text(text: &str) -> Result<String, MalformedQuestion> {
    let text = text.trim();
    if text.is_empty() {
        Err(MalformedQuestion::EmptyText)
    } else {
        Ok(text.to_string())
    }
}

fn optional_text(text: Option<&str>) -> Option<String> {
    text.map(str::trim).filter(|t| !t.is_empty()).map(str::to_string)
}

fn validate_options(raw: &[&str]) -> Result<[String; OPTION_COUNT], MalformedQuestion> {
    if raw.len() != OPTION_COUNT {
        return Err(MalformedQuestion::OptionCount { found: raw.len() });
    }

    let mut seen = HashSet::new();
    let mut options: [String; OPTION_COUNT] = Default::default();
    for (i, opt) in raw.iter().enumerate() {
        let opt = opt.trim();
        if opt.is_empty() {
            return Err(MalformedQuestion::EmptyOption { position: i + 1 });
        }
        if !seen.insert(opt) {
            return Err(MalformedQuestion::DuplicateOption { text: opt.to_string() });
        }
        options[i] = opt.to_string();
    }
    Ok(options)
}
