//! Reading question lists from dataset files.
//!
//! Two layouts are accepted: a JSON array whose items are text blocks or
//! question objects, and plain text where each question is a two-line block
//! separated from the next by a blank line.

use crate::quiz_engine::{error::Result, models::RawQuestionSpec};

/// Load a JSON array of raw questions.
///
/// Only an unreadable document is an error. Items of the wrong shape load as
/// [`RawQuestionSpec::Unrecognized`] and are rejected later by the parser.
pub fn load_json(json: &str) -> Result<Vec<RawQuestionSpec>> {
    Ok(serde_json::from_str(json)?)
}

/// Split plain text into blocks at blank lines.
pub fn split_text_blocks(text: &str) -> Vec<RawQuestionSpec> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                blocks.push(RawQuestionSpec::Text(current.join("\n")));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        blocks.push(RawQuestionSpec::Text(current.join("\n")));
    }
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz_engine::error::QuizError;

    #[test]
    fn json_mixes_text_and_objects() {
        let specs = load_json(
            r#"[
                "question: 2+2=?\n4, 3, 5, 22",
                { "q": "Sky?", "options": ["Blue", "Red", "Green", "Pink"], "answer": 0,
                  "explanation": "Rayleigh scattering.", "cite": "Physics 101", "ref": "[12]" },
                { "question": "not our shape" },
                42
            ]"#,
        )
        .unwrap();

        assert_eq!(specs.len(), 4);
        assert!(matches!(specs[0], RawQuestionSpec::Text(_)));
        match &specs[1] {
            RawQuestionSpec::Object(obj) => {
                assert_eq!(obj.answer, 0);
                assert_eq!(obj.cite.as_deref(), Some("Physics 101"));
            }
            other => panic!("expected object, got {other:?}"),
        }
        assert!(matches!(specs[2], RawQuestionSpec::Unrecognized(_)));
        assert!(matches!(specs[3], RawQuestionSpec::Unrecognized(_)));
    }

    #[test]
    fn answer_index_accepts_loose_numbers() {
        let specs = load_json(
            r#"[
                { "q": "a?", "options": ["1", "2", "3", "4"], "answer": 1.0 },
                { "q": "b?", "options": ["1", "2", "3", "4"], "answer": "2" },
                { "q": "c?", "options": ["1", "2", "3", "4"], "answer": 2.5 }
            ]"#,
        )
        .unwrap();

        let answers: Vec<Option<i64>> = specs
            .iter()
            .map(|s| match s {
                RawQuestionSpec::Object(obj) => Some(obj.answer),
                _ => None,
            })
            .collect();
        assert_eq!(answers, [Some(1), Some(2), None]);
    }

    #[test]
    fn invalid_json_is_a_dataset_error() {
        assert!(matches!(load_json("[\"unterminated"), Err(QuizError::Dataset(_))));
    }

    #[test]
    fn text_blocks_split_on_blank_lines() {
        let specs = split_text_blocks(
            "question: a?\n1, 2, 3, 4\n\n  \nquestion: b?\n5, 6, 7, 8\nstray\n\n",
        );
        assert_eq!(
            specs,
            vec![
                RawQuestionSpec::Text("question: a?\n1, 2, 3, 4".into()),
                RawQuestionSpec::Text("question: b?\n5, 6, 7, 8\nstray".into()),
            ]
        );
    }
}
