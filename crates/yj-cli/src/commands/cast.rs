use std::path::Path;

use colored::Colorize;

use yj_session::{DivinationSession, SessionConfig, render};

pub fn run(
    seed: Option<u64>,
    question: Option<&str>,
    json: bool,
    output: Option<&Path>,
) -> Result<(), String> {
    let seed = seed.unwrap_or_else(rand::random);
    let mut config = SessionConfig::default().with_seed(seed);
    if let Some(q) = question {
        config = config.with_question(q);
    }
    let question = config.question.clone();

    let mut session =
        DivinationSession::new(config).map_err(|e| format!("failed to start session: {e}"))?;
    let reading = session.cast().map_err(|e| e.to_string())?;

    let content = if json {
        let export = serde_json::json!({
            "seed": seed,
            "question": question,
            "reading": reading,
        });
        let mut s = serde_json::to_string_pretty(&export)
            .map_err(|e| format!("JSON serialization error: {e}"))?;
        s.push('\n');
        s
    } else {
        format!("{}\n", render::reading(reading, question.as_deref()))
    };

    if let Some(path) = output {
        std::fs::write(path, &content)
            .map_err(|e| format!("cannot write to {}: {e}", path.display()))?;
        println!("  Saved reading to {}", path.display());
    } else {
        print!("{content}");
    }

    if !json {
        println!();
        println!(
            "  {}",
            format!("seed {seed} (replay with --seed {seed})").dimmed()
        );
    }

    Ok(())
}
