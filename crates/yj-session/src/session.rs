//! Divination session management.
//!
//! `DivinationSession` owns the coin source and tosses lines strictly in
//! order. The sixth toss resolves the reading and records it in the journal.
//! `process` exposes the same operations as text commands.

use chrono::Utc;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

use yj_core::{CoinSource, LineRecord, PartialReading, Reading, Resolver, generate_line};

use crate::config::SessionConfig;
use crate::error::{SessionError, SessionResult};
use crate::journal::entry::JournalEntry;
use crate::journal::log::Journal;
use crate::render;

/// An interactive divination session.
pub struct DivinationSession<S = StdRng> {
    source: S,
    seed: u64,
    resolver: Resolver<'static>,
    lines: Vec<LineRecord>,
    reading: Option<Reading<'static>>,
    question: Option<String>,
    journal: Journal,
}

impl DivinationSession {
    /// Create a session with a seeded RNG.
    pub fn new(config: SessionConfig) -> SessionResult<Self> {
        let rng = StdRng::seed_from_u64(config.seed);
        Self::with_source(rng, config)
    }
}

impl<S: CoinSource> DivinationSession<S> {
    /// Create a session drawing flips from `source`.
    ///
    /// The configured seed is only reported; it does not reseed `source`.
    pub fn with_source(source: S, config: SessionConfig) -> SessionResult<Self> {
        let resolver = Resolver::standard();
        resolver.validate()?;
        info!(seed = config.seed, "divination session started");

        Ok(Self {
            source,
            seed: config.seed,
            resolver,
            lines: Vec::with_capacity(6),
            reading: None,
            question: config.question,
            journal: Journal::new(),
        })
    }

    /// The configured seed.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// The resolver backing this session.
    pub fn resolver(&self) -> Resolver<'static> {
        self.resolver
    }

    /// The current question.
    pub fn question(&self) -> Option<&str> {
        self.question.as_deref()
    }

    /// Set the question for the next reading.
    pub fn ask(&mut self, question: &str) {
        let question = question.trim();
        self.question = (!question.is_empty()).then(|| question.to_string());
    }

    /// Get the journal.
    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    /// The lines tossed so far.
    pub fn partial(&self) -> PartialReading<'_> {
        PartialReading::new(&self.lines)
    }

    /// The completed reading, if all six lines are in.
    pub fn reading(&self) -> Option<&Reading<'static>> {
        self.reading.as_ref()
    }

    /// Toss the next line. The sixth toss resolves the reading.
    pub fn toss(&mut self) -> SessionResult<LineRecord> {
        if self.lines.len() >= 6 {
            return Err(SessionError::ReadingComplete);
        }
        let line = generate_line(&mut self.source);
        self.lines.push(line);
        if self.lines.len() == 6 {
            self.complete()?;
        }
        Ok(line)
    }

    /// Toss every remaining line and return the reading.
    pub fn cast(&mut self) -> SessionResult<&Reading<'static>> {
        if self.lines.len() >= 6 {
            return Err(SessionError::ReadingComplete);
        }
        while self.lines.len() < 6 {
            self.toss()?;
        }
        self.reading.as_ref().ok_or(SessionError::NoReading)
    }

    /// Discard the lines and reading. The question and journal are kept.
    pub fn reset(&mut self) {
        self.lines.clear();
        self.reading = None;
        info!("reading reset");
    }

    fn complete(&mut self) -> SessionResult<()> {
        let reading = self.resolver.resolve(&self.lines)?;
        info!(
            primary = reading.primary.number,
            secondary = reading.secondary.number,
            changing = reading.changing.len(),
            "reading complete"
        );
        self.journal
            .append(JournalEntry::from_reading(&reading, self.question.as_deref()));
        self.reading = Some(reading);
        Ok(())
    }

    /// Process a line of user input and return a response.
    pub fn process(&mut self, input: &str) -> SessionResult<String> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(String::new());
        }

        let parts: Vec<&str> = trimmed.splitn(2, ' ').collect();
        let cmd = parts[0].to_lowercase();
        let rest = parts.get(1).map(|s| s.trim()).unwrap_or("");

        match cmd.as_str() {
            "ask" => self.do_ask(rest),
            "toss" => self.do_toss(),
            "cast" => self.do_cast(),
            "status" => self.do_status(),
            "reading" => self.do_reading(),
            "reset" => {
                self.reset();
                Ok("Reading cleared.".to_string())
            }
            "hexagram" | "hex" | "show" => self.do_hexagram(rest),
            "note" => self.do_note(rest),
            "journal" => self.do_journal_show(),
            "export" => self.do_journal_export(rest),
            "help" => Ok(HELP.to_string()),
            "quit" | "q" => Ok("Goodbye!".to_string()),
            other => Err(SessionError::UnknownCommand(other.to_string())),
        }
    }

    fn do_ask(&mut self, question: &str) -> SessionResult<String> {
        if question.is_empty() {
            return Err(SessionError::InvalidChoice(
                "usage: ask <question>".to_string(),
            ));
        }
        self.ask(question);
        Ok(format!("Question: {question}"))
    }

    fn do_toss(&mut self) -> SessionResult<String> {
        let index = self.lines.len();
        let line = self.toss()?;
        let mut out = render::toss(index, &line);
        if let Some(reading) = &self.reading {
            out.push_str("\n\n");
            out.push_str(&render::reading(reading, self.question.as_deref()));
        }
        Ok(out)
    }

    fn do_cast(&mut self) -> SessionResult<String> {
        self.cast()?;
        self.do_reading()
    }

    fn do_reading(&self) -> SessionResult<String> {
        let reading = self.reading.as_ref().ok_or(SessionError::NoReading)?;
        Ok(render::reading(reading, self.question.as_deref()))
    }

    fn do_status(&self) -> SessionResult<String> {
        let mut out = format!("Seed: {}\n", self.seed);
        match &self.question {
            Some(q) => out.push_str(&format!("Question: {q}\n")),
            None => out.push_str("No question set.\n"),
        }
        out.push_str(&render::partial(&self.partial()));
        out.push('\n');
        if let Some(reading) = &self.reading {
            out.push_str(&format!("Reading: {}\n", reading.primary.label()));
        }
        out.push_str(&format!("Journal: {} entries", self.journal.len()));
        Ok(out)
    }

    fn do_hexagram(&self, query: &str) -> SessionResult<String> {
        if query.is_empty() {
            return Err(SessionError::InvalidChoice(
                "usage: hexagram <number|name>".to_string(),
            ));
        }
        let h = self.resolver.lookup(query)?;
        Ok(render::hexagram(h, self.resolver.interpretation(h.number)))
    }

    fn do_note(&mut self, text: &str) -> SessionResult<String> {
        if text.is_empty() {
            return Err(SessionError::InvalidChoice("usage: note <text>".to_string()));
        }
        self.journal.append(JournalEntry::Note {
            text: text.to_string(),
            timestamp: Utc::now(),
        });
        Ok("Note recorded.".to_string())
    }

    fn do_journal_show(&self) -> SessionResult<String> {
        if self.journal.is_empty() {
            return Ok("Journal is empty.".to_string());
        }
        // Last 10 entries.
        let entries = self.journal.entries();
        let start = entries.len().saturating_sub(10);
        let recent = &entries[start..];

        let mut out = format!(
            "Journal ({} entries, showing last {}):\n\n",
            entries.len(),
            recent.len()
        );
        let mut mini = Journal::new();
        for e in recent {
            mini.append(e.clone());
        }
        out.push_str(&mini.export_text());
        Ok(out.trim_end().to_string())
    }

    fn do_journal_export(&self, format: &str) -> SessionResult<String> {
        match format.to_lowercase().as_str() {
            "markdown" | "md" | "" => Ok(self.journal.export_markdown()),
            "text" | "txt" => Ok(self.journal.export_text()),
            other => Err(SessionError::InvalidChoice(format!(
                "unknown format '{other}', use: markdown, text"
            ))),
        }
    }
}

const HELP: &str = "\
Divination Commands:
  ask <question>              Set the question for the next reading
  toss                        Toss the next line (three coins)
  cast                        Toss all remaining lines
  status                      Show progress of the current reading
  reading                     Show the completed reading
  reset                       Start a new reading
  hexagram <number|name>      Look up a hexagram
  note <text>                 Add journal note
  journal                     Show journal
  export [markdown|text]      Export journal
  help                        Show this help
  quit                        Exit";

#[cfg(test)]
mod tests {
    use super::*;
    use yj_core::{FixedFlips, LineValue, YiError};

    fn test_session() -> DivinationSession {
        DivinationSession::new(SessionConfig::default()).unwrap()
    }

    fn scripted(heads: &[u8]) -> DivinationSession<FixedFlips> {
        DivinationSession::with_source(FixedFlips::from_heads(heads), SessionConfig::default())
            .unwrap()
    }

    #[test]
    fn create_session() {
        let s = test_session();
        assert_eq!(s.seed(), 42);
        assert!(s.reading().is_none());
        assert_eq!(s.partial().tossed(), 0);
        assert!(s.journal().is_empty());
    }

    #[test]
    fn tosses_in_order_and_resolves_on_sixth() {
        let mut s = scripted(&[3, 2, 1, 0, 2, 1]);
        for n in 1..=5 {
            s.toss().unwrap();
            assert_eq!(s.partial().tossed(), n);
            assert!(s.reading().is_none());
        }
        assert_eq!(s.partial().changing_indices(), vec![0, 3]);
        let last = s.toss().unwrap();
        assert_eq!(last.value(), LineValue::YoungYin);

        let reading = s.reading().unwrap();
        assert_eq!(reading.primary.number, 60);
        assert_eq!(reading.secondary.number, 47);
        assert_eq!(s.journal().reading_count(), 1);
    }

    #[test]
    fn toss_after_completion_fails() {
        let mut s = scripted(&[2; 6]);
        s.cast().unwrap();
        assert!(matches!(s.toss(), Err(SessionError::ReadingComplete)));
        assert!(matches!(s.cast(), Err(SessionError::ReadingComplete)));
    }

    #[test]
    fn cast_finishes_a_partial_reading() {
        let mut s = scripted(&[0, 0, 3, 3, 3, 3]);
        s.toss().unwrap();
        s.toss().unwrap();
        let reading = s.cast().unwrap();
        assert_eq!(reading.values(), [6, 6, 9, 9, 9, 9]);
        assert_eq!(reading.changing.len(), 6);
    }

    #[test]
    fn reset_starts_over() {
        let mut s = test_session();
        s.ask("Will it rain?");
        s.cast().unwrap();
        s.reset();
        assert!(s.reading().is_none());
        assert_eq!(s.partial().tossed(), 0);
        assert_eq!(s.question(), Some("Will it rain?"));
        assert!(s.cast().is_ok());
        assert_eq!(s.journal().reading_count(), 2);
    }

    #[test]
    fn same_seed_same_reading() {
        let mut a = test_session();
        let mut b = test_session();
        assert_eq!(a.cast().unwrap(), b.cast().unwrap());

        let mut c = DivinationSession::new(SessionConfig::default().with_seed(7)).unwrap();
        let mut d = DivinationSession::new(SessionConfig::default().with_seed(7)).unwrap();
        assert_eq!(c.cast().unwrap().values(), d.cast().unwrap().values());
    }

    #[test]
    fn question_from_config_is_journaled() {
        let config = SessionConfig::default().with_question("New job?");
        let mut s = DivinationSession::with_source(FixedFlips::from_heads(&[2; 6]), config).unwrap();
        s.cast().unwrap();
        let md = s.journal().export_markdown();
        assert!(md.contains("**Question**: New job?"));
    }

    #[test]
    fn process_ask_and_cast() {
        let mut s = scripted(&[3, 2, 1, 0, 2, 1]);
        assert_eq!(s.process("ask Should I go?").unwrap(), "Question: Should I go?");
        let out = s.process("cast").unwrap();
        assert!(out.starts_with("Question: Should I go?"));
        assert!(out.contains("No. 60 Jie"));
        assert!(out.contains("Becomes: ䷮ No. 47 Kun (Oppression)"));
    }

    #[test]
    fn process_toss_reports_line() {
        let mut s = scripted(&[3, 2, 1, 0, 2, 1]);
        let out = s.process("toss").unwrap();
        assert!(out.starts_with("Line 1 (Initial): heads, heads, heads = 9 old yang"));
        for _ in 0..4 {
            s.process("toss").unwrap();
        }
        let out = s.process("toss").unwrap();
        assert!(out.starts_with("Line 6 (Top)"));
        assert!(out.contains("Primary:"));
        assert!(s.process("toss").is_err());
    }

    #[test]
    fn process_reading_before_cast() {
        let mut s = test_session();
        assert!(matches!(
            s.process("reading"),
            Err(SessionError::NoReading)
        ));
    }

    #[test]
    fn process_hexagram_lookup() {
        let mut s = test_session();
        let out = s.process("hexagram 60").unwrap();
        assert!(out.contains("Jie (Limitation)"));
        let out = s.process("hexagram wei ji").unwrap();
        assert!(out.contains("No. 64"));
        assert!(matches!(
            s.process("hexagram 0"),
            Err(SessionError::Core(YiError::UnknownHexagram(_)))
        ));
        assert!(s.process("hexagram").is_err());
    }

    #[test]
    fn process_status() {
        let mut s = test_session();
        s.process("toss").unwrap();
        let status = s.process("status").unwrap();
        assert!(status.contains("Seed: 42"));
        assert!(status.contains("Lines tossed: 1/6"));
        assert!(status.contains("Journal: 0 entries"));
    }

    #[test]
    fn note_and_journal() {
        let mut s = test_session();
        s.process("note Dreamed of a well").unwrap();
        assert_eq!(s.journal().len(), 1);
        let journal = s.process("journal").unwrap();
        assert!(journal.contains("Dreamed of a well"));
        assert!(s.process("note").is_err());
    }

    #[test]
    fn journal_export() {
        let mut s = test_session();
        s.process("cast").unwrap();

        let md = s.process("export markdown").unwrap();
        assert!(md.contains("# Yijing Journal"));
        assert!(md.contains("## Reading 1"));

        let txt = s.process("export text").unwrap();
        assert!(txt.contains("Yijing Journal"));

        assert!(s.process("export pdf").is_err());
    }

    #[test]
    fn empty_and_unknown_input() {
        let mut s = test_session();
        assert_eq!(s.process("   ").unwrap(), "");
        assert!(matches!(
            s.process("dance"),
            Err(SessionError::UnknownCommand(_))
        ));
        assert_eq!(s.process("quit").unwrap(), "Goodbye!");
        assert!(s.process("help").unwrap().contains("toss"));
    }
}
