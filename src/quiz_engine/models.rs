use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Raw input records
// ---------------------------------------------------------------------------

/// One unvalidated question as supplied by a dataset.
///
/// Datasets mix two shapes: a two-line text block
/// (`"question: <text>\n<correct>, <wrong>, <wrong>, <wrong>"`) and a
/// structured object. Anything else deserializes into `Unrecognized` so a
/// single odd record never fails a whole dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawQuestionSpec {
    Text(String),
    Object(StructuredSpec),
    Unrecognized(serde_json::Value),
}

impl From<&str> for RawQuestionSpec {
    fn from(block: &str) -> Self {
        RawQuestionSpec::Text(block.to_string())
    }
}

impl From<String> for RawQuestionSpec {
    fn from(block: String) -> Self {
        RawQuestionSpec::Text(block)
    }
}

impl From<StructuredSpec> for RawQuestionSpec {
    fn from(spec: StructuredSpec) -> Self {
        RawQuestionSpec::Object(spec)
    }
}

/// Object form of a question. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuredSpec {
    pub q: String,
    pub options: Vec<String>,
    /// Index of the correct entry in `options`. Signed so that negative
    /// values in a dataset surface as a range error rather than a parse error.
    #[serde(deserialize_with = "deserialize_answer")]
    pub answer: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cite: Option<String>,
}

/// Accept the answer index as a JSON integer, a whole float (`1.0`) or a
/// numeric string (`"1"`), since hand-edited datasets use all three.
fn deserialize_answer<'de, D: serde::Deserializer<'de>>(d: D) -> Result<i64, D::Error> {
    struct Vis;
    impl<'de> serde::de::Visitor<'de> for Vis {
        type Value = i64;
        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("an integer, a whole number or a numeric string")
        }
        fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<i64, E> { Ok(v) }
        fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<i64, E> {
            i64::try_from(v).map_err(E::custom)
        }
        fn visit_f64<E: serde::de::Error>(self, v: f64) -> Result<i64, E> {
            if v.fract() == 0.0 && v.abs() <= i64::MAX as f64 {
                Ok(v as i64)
            } else {
                Err(E::custom(format!("answer {v} is not a whole number")))
            }
        }
        fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<i64, E> {
            v.trim().parse().map_err(E::custom)
        }
    }
    d.deserialize_any(Vis)
}

// ---------------------------------------------------------------------------
// Validated questions
// ---------------------------------------------------------------------------

/// Number of options every question carries.
pub const OPTION_COUNT: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// `q<position>` where position is the 1-based index in the input list.
    pub id: String,
    pub text: String,
    pub options: [String; OPTION_COUNT],
    /// Pre-shuffle index of the correct option.
    pub correct_index: usize,
    pub explanation: Option<String>,
    pub cite: Option<String>,
}

impl Question {
    pub fn correct_text(&self) -> &str {
        &self.options[self.correct_index]
    }
}

/// Display letter assigned to an option by its position after shuffling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayLetter {
    A,
    B,
    C,
    D,
}

impl DisplayLetter {
    pub const ALL: [DisplayLetter; OPTION_COUNT] =
        [DisplayLetter::A, DisplayLetter::B, DisplayLetter::C, DisplayLetter::D];

    pub fn index(self) -> usize {
        match self {
            DisplayLetter::A => 0,
            DisplayLetter::B => 1,
            DisplayLetter::C => 2,
            DisplayLetter::D => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DisplayLetter::A => "a",
            DisplayLetter::B => "b",
            DisplayLetter::C => "c",
            DisplayLetter::D => "d",
        }
    }
}

impl fmt::Display for DisplayLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DisplayLetter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a" => Ok(DisplayLetter::A),
            "b" => Ok(DisplayLetter::B),
            "c" => Ok(DisplayLetter::C),
            "d" => Ok(DisplayLetter::D),
            other => Err(format!("not a display letter: {other:?}")),
        }
    }
}

/// One option of one question as it appears on screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedOption {
    pub letter: DisplayLetter,
    pub text: String,
    pub is_correct: bool,
}

// ---------------------------------------------------------------------------
// Answer key and control lookup
// ---------------------------------------------------------------------------

/// Question id → letter of the correct option after shuffling.
///
/// Built once by the renderer. There is no public way to modify it; a new
/// render produces a new key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerKey {
    entries: BTreeMap<String, DisplayLetter>,
}

impl AnswerKey {
    pub(crate) fn record(&mut self, question_id: &str, letter: DisplayLetter) {
        self.entries.insert(question_id.to_string(), letter);
    }

    pub fn get(&self, question_id: &str) -> Option<DisplayLetter> {
        self.entries.get(question_id).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, DisplayLetter)> {
        self.entries.iter().map(|(id, letter)| (id.as_str(), *letter))
    }
}

impl FromIterator<(String, DisplayLetter)> for AnswerKey {
    fn from_iter<I: IntoIterator<Item = (String, DisplayLetter)>>(iter: I) -> Self {
        AnswerKey { entries: iter.into_iter().collect() }
    }
}

/// Which question group and letter a rendered control belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlRef {
    pub question_id: String,
    pub letter: DisplayLetter,
}

// ---------------------------------------------------------------------------
// Grading state
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum QuestionState {
    #[default]
    Unanswered,
    Answered(DisplayLetter),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Correct,
    Incorrect,
    /// The question had no answer key entry.
    Ungraded,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Correct   => write!(f, "Correct"),
            Verdict::Incorrect => write!(f, "Incorrect"),
            Verdict::Ungraded  => write!(f, "Ungraded"),
        }
    }
}

/// Feedback shown in the placeholder next to one control.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Feedback {
    #[default]
    Blank,
    Correct(String),
    Incorrect(String),
}

impl Feedback {
    pub fn text(&self) -> &str {
        match self {
            Feedback::Blank => "",
            Feedback::Correct(text) | Feedback::Incorrect(text) => text,
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Feedback::Blank)
    }
}

// ---------------------------------------------------------------------------
// Request / configuration
// ---------------------------------------------------------------------------

/// Words shown for a right or wrong pick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackLabels {
    #[serde(default = "default_correct_label")]
    pub correct: String,
    #[serde(default = "default_incorrect_label")]
    pub incorrect: String,
}

impl Default for FeedbackLabels {
    fn default() -> Self {
        FeedbackLabels {
            correct: default_correct_label(),
            incorrect: default_incorrect_label(),
        }
    }
}

fn default_correct_label() -> String {
    "Correct".to_string()
}

fn default_incorrect_label() -> String {
    "Wrong".to_string()
}

pub const DEFAULT_CONTAINER_ID: &str = "quizForm";

fn default_container_id() -> String {
    DEFAULT_CONTAINER_ID.to_string()
}

fn default_missing_host_notice() -> Option<String> {
    Some("Quiz unavailable: the page has no place to show it.".to_string())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizRequest {
    pub questions: Vec<RawQuestionSpec>,
    #[serde(default = "default_container_id")]
    pub container_id: String,
    #[serde(default)]
    pub rng_seed: Option<u64>,
    #[serde(default)]
    pub labels: FeedbackLabels,
    /// Shown through the host when the container is missing. `None` shows nothing.
    #[serde(default = "default_missing_host_notice")]
    pub missing_host_notice: Option<String>,
}

impl QuizRequest {
    /// Request with defaults: `quizForm` container, entropy seed, default labels.
    pub fn new(questions: impl IntoIterator<Item = impl Into<RawQuestionSpec>>) -> Self {
        QuizRequest {
            questions: questions.into_iter().map(Into::into).collect(),
            container_id: default_container_id(),
            rng_seed: None,
            labels: FeedbackLabels::default(),
            missing_host_notice: default_missing_host_notice(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    pub fn with_container(mut self, container_id: impl Into<String>) -> Self {
        self.container_id = container_id.into();
        self
    }
}
