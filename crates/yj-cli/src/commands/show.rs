use colored::Colorize;

use yj_core::Resolver;
use yj_core::line::position_name;

pub fn run(query: &str, json: bool) -> Result<(), String> {
    let resolver = Resolver::standard();
    let h = resolver.lookup(query).map_err(|e| e.to_string())?;
    let interpretation = resolver.interpretation(h.number);

    if json {
        let export = serde_json::json!({
            "hexagram": h,
            "pattern": h.pattern(),
            "interpretation": interpretation,
        });
        let s = serde_json::to_string_pretty(&export)
            .map_err(|e| format!("JSON serialization error: {e}"))?;
        println!("{s}");
        return Ok(());
    }

    println!("  {} {}", h.to_string().bold(), h.character);
    println!(
        "  {} over {} [{}]",
        h.upper,
        h.lower,
        h.pattern().to_string().dimmed()
    );
    println!();
    println!("  {}", h.judgment);
    println!();

    for (i, text) in h.lines.iter().enumerate().rev() {
        let glyph = h.pattern().line(i).glyph();
        println!("  {glyph} {:<7} {text}", position_name(i));
    }

    if let Some(interp) = interpretation {
        println!();
        for (name, text) in interp.sections() {
            println!("  {}: {text}", name.bold());
        }
    }

    Ok(())
}
