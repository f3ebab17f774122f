//! Recommend strains from a catalog CSV for one stated need.
//!
//! Usage: match_strains <catalog.csv> <symptom key> [top_n] [--json]
//!
//! Example: match_strains strain_database_enhanced_v2.csv "need Sleep" 6

use anyhow::Result;
use std::time::Instant;
use strainmatch::{recommend, StrainCatalog, SymptomRegistry};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "strainmatch=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args: Vec<String> = std::env::args().collect();
    let as_json = args.iter().any(|a| a == "--json");
    let positional: Vec<&String> = args[1..].iter().filter(|a| *a != "--json").collect();

    if positional.len() < 2 {
        eprintln!("Usage: match_strains <catalog.csv> <symptom key> [top_n] [--json]");
        let registry = SymptomRegistry::builtin()?;
        eprintln!("Known symptom keys:");
        for key in registry.keys() {
            eprintln!("  {}", key);
        }
        std::process::exit(2);
    }

    let catalog_path = positional[0];
    let symptom_key = positional[1];
    let top_n: usize = match positional.get(2) {
        Some(raw) => raw.parse()?,
        None => 6,
    };

    let registry = SymptomRegistry::builtin()?;

    let load_start = Instant::now();
    let catalog = StrainCatalog::load(catalog_path)?;
    let load_time = load_start.elapsed();

    let score_start = Instant::now();
    let ranked = recommend(&registry, symptom_key, &catalog.strains, top_n)?;
    let score_time = score_start.elapsed();

    if as_json {
        let results: Vec<_> = ranked.iter().map(|r| &r.result).collect();
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    let profile = registry.get(symptom_key).expect("profile checked above");
    println!("\n{}: top {} of {} strains", symptom_key, ranked.len(), catalog.len());
    println!("\"{}\"", profile.pitch);
    println!(
        "(catalog loaded in {:?}, scored in {:?})\n",
        load_time, score_time
    );

    for (rank, entry) in ranked.iter().enumerate() {
        let result = &entry.result;
        println!(
            "#{} {} [{}]  {:.0}% ({})",
            rank + 1,
            entry.strain.name,
            entry.strain.strain_class,
            result.score,
            result.label()
        );
        if let Some(dominant) = &entry.strain.dominant_terpene {
            println!(
                "    dominant terpene: {}  |  total terpenes: {:.2}%",
                dominant,
                entry.strain.total_terpenes * 100.0
            );
        }
        for note in &result.explanation.notes {
            println!("    - {}", note);
        }
    }

    Ok(())
}
