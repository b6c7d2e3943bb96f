use comfy_table::{ContentArrangement, Table};

use yj_core::{Resolver, Trigram};

pub fn run(trigram: Option<&str>) -> Result<(), String> {
    let filter = match trigram {
        Some(name) => Some(Trigram::parse(name).ok_or_else(|| format!("unknown trigram: \"{name}\""))?),
        None => None,
    };

    let results: Vec<_> = Resolver::standard()
        .hexagrams()
        .iter()
        .filter(|h| filter.is_none_or(|t| h.upper == t || h.lower == t))
        .collect();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["No.", "", "Name", "English", "Upper", "Lower"]);

    for h in &results {
        table.add_row(vec![
            h.number.to_string(),
            format!("{} {}", h.symbol(), h.character),
            h.name.to_string(),
            h.full_name.to_string(),
            format!("{} {}", h.upper.symbol(), h.upper.image()),
            format!("{} {}", h.lower.symbol(), h.lower.image()),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} hexagrams", results.len());

    Ok(())
}
