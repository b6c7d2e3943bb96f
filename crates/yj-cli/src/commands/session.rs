use std::io::{self, BufRead, Write};

use colored::Colorize;

use yj_session::{DivinationSession, SessionConfig};

pub fn run(seed: u64, question: Option<&str>) -> Result<(), String> {
    let mut config = SessionConfig::default().with_seed(seed);
    if let Some(q) = question {
        config = config.with_question(q);
    }

    let mut session =
        DivinationSession::new(config).map_err(|e| format!("failed to start session: {e}"))?;

    println!("  {} Divination Session", "Starting".bold());
    println!("  Seed: {seed}");
    if let Some(q) = session.question() {
        println!("  Question: {q}");
    }
    println!("  Type 'help' for commands, 'quit' to exit.\n");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break,
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match session.process(input) {
            Ok(output) => {
                if !output.is_empty() {
                    println!("{output}\n");
                }
                if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q") {
                    break;
                }
            }
            Err(e) => {
                println!("{}\n", e.to_string().yellow());
            }
        }
    }

    Ok(())
}
