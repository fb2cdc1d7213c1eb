use rand::Rng;

use crate::quiz_engine::models::{DisplayLetter, Question, RenderedOption, OPTION_COUNT};

/// Uniform in-place Fisher-Yates shuffle.
pub fn fisher_yates<T, R: Rng>(rng: &mut R, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// Shuffle one question's options and letter them by final position.
///
/// The shuffle moves `(text, is_correct)` pairs, so the correct option keeps
/// its flag wherever it lands. Letters are assigned only afterwards.
pub fn shuffle_options<R: Rng>(rng: &mut R, question: &Question) -> [RenderedOption; OPTION_COUNT] {
    let mut pairs: [(&str, bool); OPTION_COUNT] = [("", false); OPTION_COUNT];
    for (i, text) in question.options.iter().enumerate() {
        pairs[i] = (text.as_str(), i == question.correct_index);
    }

    fisher_yates(rng, &mut pairs);

    let mut slot = 0;
    pairs.map(|(text, is_correct)| {
        let letter = DisplayLetter::ALL[slot];
        slot += 1;
        RenderedOption { letter, text: text.to_string(), is_correct }
    })
}
