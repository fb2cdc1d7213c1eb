//! Loading question datasets in both supported layouts.
//!
//! Run with: `cargo run --example datasets`
//!
//! Each block shows:
//!   • the raw dataset
//!   • which records were kept and which were skipped (and why)
//!   • the JSON payload a browser client would receive

use mcq_engine::quiz_engine::{client::to_client_payload, dataset};
use mcq_engine::{build_quiz, QuizRequest};

const TEXT_DATASET: &str = "\
question: What is the chemical symbol for gold?
Au, Ag, Gd, Go

question: How many legs does a spider have?
8, 6, 10, 12

question: Which gas do plants absorb?
Carbon dioxide, Oxygen
";

const JSON_DATASET: &str = r#"[
    {
        "q": "Which organelle produces most of a cell's ATP?",
        "options": ["Nucleus", "Mitochondrion", "Ribosome", "Golgi apparatus"],
        "answer": 1,
        "explanation": "Oxidative phosphorylation happens in the mitochondria.",
        "cite": "Campbell Biology, ch. 9"
    },
    {
        "q": "DNA is copied during which phase?",
        "options": ["G1", "S", "G2", "M"],
        "answer": 1,
        "ref": "[cite: 41]"
    },
    { "q": "Out of range", "options": ["a", "b", "c", "d"], "answer": 4 }
]"#;

fn show(name: &str, request: QuizRequest) {
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  {name}");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    let built = build_quiz(&request);
    for q in &built.report.questions {
        println!("  kept    {}: {}  (answer: {})", q.id, q.text, q.correct_text());
    }
    for s in &built.report.skipped {
        println!("  skipped #{}: {}", s.position, s.reason);
    }
    let payload = to_client_payload(&built.rendered);
    match serde_json::to_string_pretty(&payload["questions"]) {
        Ok(json) => println!("{json}"),
        Err(err) => eprintln!("  could not format payload: {err}"),
    }
    println!();
}

fn main() {
    pretty_env_logger::init();

    show(
        "Text blocks",
        QuizRequest::new(dataset::split_text_blocks(TEXT_DATASET)).with_seed(7),
    );

    match dataset::load_json(JSON_DATASET) {
        Ok(specs) => show("JSON objects", QuizRequest::new(specs).with_seed(7)),
        Err(err) => eprintln!("{err}"),
    }
}
