//! Plain-text rendering of lines, hexagrams and readings.

use yj_core::line::position_name;
use yj_core::{Hexagram, Interpretation, LineRecord, PartialReading, Reading};

/// One figure row: position, glyph, value and change marker.
pub fn line_row(index: usize, line: &LineRecord) -> String {
    let value = line.value();
    let mut row = format!(
        "{:<7} {} {}",
        position_name(index),
        line.polarity().glyph(),
        value.number()
    );
    if let Some(marker) = value.change_marker() {
        row.push(' ');
        row.push(marker);
    }
    row
}

/// The figure drawn top line first, one row per line.
pub fn figure(lines: &[LineRecord]) -> String {
    let rows: Vec<String> = lines
        .iter()
        .enumerate()
        .rev()
        .map(|(i, l)| format!("  {}", line_row(i, l)))
        .collect();
    rows.join("\n")
}

/// Describe a single toss.
pub fn toss(index: usize, line: &LineRecord) -> String {
    let faces: Vec<String> = line.flips().iter().map(|f| f.to_string()).collect();
    let value = line.value();
    format!(
        "Line {} ({}): {} = {} {} {}{}",
        index + 1,
        position_name(index),
        faces.join(", "),
        value.number(),
        value,
        line.polarity().glyph(),
        if line.is_changing() { " (changing)" } else { "" }
    )
}

/// Progress of a reading still being tossed.
pub fn partial(view: &PartialReading<'_>) -> String {
    let mut out = format!("Lines tossed: {}/6", view.tossed());
    if view.tossed() > 0 {
        out.push('\n');
        out.push_str(&figure(view.lines()));
    }
    out
}

/// A hexagram's figure data, judgment and line texts.
pub fn hexagram(h: &Hexagram, interpretation: Option<&Interpretation>) -> String {
    let mut out = format!("{} {}\n", h, h.character);
    out.push_str(&format!("  {} over {}\n", h.upper, h.lower));
    out.push_str(&format!("  Pattern: {}\n\n", h.pattern()));
    out.push_str(&format!("Judgment: {}\n\n", h.judgment));
    out.push_str("Lines:\n");
    for (i, text) in h.lines.iter().enumerate().rev() {
        out.push_str(&format!("  {:<7} {}\n", position_name(i), text));
    }
    if let Some(interp) = interpretation {
        out.push('\n');
        out.push_str(&interpretation_block(interp));
    }
    out.trim_end().to_string()
}

fn interpretation_block(interp: &Interpretation) -> String {
    let mut out = String::new();
    for (name, text) in interp.sections() {
        out.push_str(&format!("  {name}: {text}\n"));
    }
    out
}

/// A full reading: figure, both hexagrams, guidance and interpretations.
pub fn reading(reading: &Reading<'_>, question: Option<&str>) -> String {
    let mut out = String::new();
    if let Some(q) = question {
        out.push_str(&format!("Question: {q}\n\n"));
    }
    out.push_str(&figure(&reading.lines));
    out.push_str("\n\n");

    let primary = reading.primary;
    out.push_str(&format!("Primary: {} {}\n", primary, primary.character));
    out.push_str(&format!("  {} over {}\n", primary.upper, primary.lower));
    out.push_str(&format!("  {}\n", primary.judgment));

    match reading.secondary_if_changed() {
        Some(secondary) => {
            let names: Vec<&str> = reading.changing.iter().map(|&i| position_name(i)).collect();
            out.push_str(&format!("Changing lines: {}\n", names.join(", ")));
            out.push_str(&format!(
                "Becomes: {} {}\n",
                secondary, secondary.character
            ));
            out.push_str(&format!("  {} over {}\n", secondary.upper, secondary.lower));
            out.push_str(&format!("  {}\n", secondary.judgment));
        }
        None => out.push_str("No changing lines.\n"),
    }

    out.push_str(&format!("\nGuidance: {}\n", reading.guidance));
    for e in reading.emphasis() {
        out.push_str(&format!("  - {e}\n"));
    }

    if let Some(interp) = reading.primary_interpretation {
        out.push_str(&format!("\nInterpretation ({}):\n", primary.label()));
        out.push_str(&interpretation_block(interp));
    }
    if let Some(interp) = reading.secondary_interpretation {
        out.push_str(&format!(
            "\nInterpretation ({}):\n",
            reading.secondary.label()
        ));
        out.push_str(&interpretation_block(interp));
    }
    out.trim_end().to_string()
}
