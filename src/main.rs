// Application shell around the tracker core: loads a dataset snapshot from
// disk, validates it, and prints either the stats overview or lint
// findings. The website shell does the same validation server-side; this
// binary exists for data maintainers.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use wero_tracker::model::TrackerView;
use wero_tracker::{
    compute_bank_stats, compute_merchant_stats, derive_user_country, schema, stats, VERSION,
};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args: Vec<String> = env::args().collect();

    match args.get(1).map(|s| s.as_str()) {
        Some("check") => run_check(&data_path(args.get(2).map(|s| s.as_str()))?),
        Some("stats") => run_stats(&data_path(args.get(2).map(|s| s.as_str()))?),
        Some(path) => run_stats(&data_path(Some(path))?),
        None => run_stats(&data_path(None)?),
    }
}

/// Dataset path from the argument or the WERO_DATA_PATH environment variable.
fn data_path(arg: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = arg {
        return Ok(PathBuf::from(path));
    }
    if let Ok(path) = env::var("WERO_DATA_PATH") {
        return Ok(PathBuf::from(path));
    }
    bail!("no dataset given; pass a path or set WERO_DATA_PATH");
}

fn load_dataset(path: &Path) -> Result<wero_tracker::Dataset> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let raw: serde_json::Value =
        serde_json::from_str(&content).context("dataset is not valid JSON")?;

    match schema::validate(raw) {
        Ok(dataset) => Ok(dataset),
        Err(err) => {
            // Constraint failures carry a per-field list worth showing in full
            for field in err.field_errors() {
                eprintln!("  ✗ {field}");
            }
            Err(anyhow::Error::new(err).context("dataset failed validation"))
        }
    }
}

fn run_stats(path: &Path) -> Result<()> {
    println!("wero-tracker v{VERSION}");

    let dataset = load_dataset(path)?;
    println!(
        "✓ Loaded {} bank brands, {} merchants from {}\n",
        dataset.banks.brands.len(),
        dataset.merchants.brands.len(),
        path.display()
    );

    let bank_refs: Vec<_> = dataset.banks.brands.iter().collect();
    let merchant_refs: Vec<_> = dataset.merchants.brands.iter().collect();

    let bank_stats = compute_bank_stats(&bank_refs);
    println!("Banks:     {}", bank_stats.summary());

    let merchant_stats = compute_merchant_stats(&merchant_refs);
    println!("Merchants: {}", merchant_stats.summary());

    let top = stats::top_supported_countries(&bank_refs, 5);
    if !top.is_empty() {
        println!("\nTop countries by supported banks:");
        for (code, count) in top {
            println!("  {code}  {count}");
        }
    }

    // Same locale bias the website applies to country sections. LANG is
    // "de_DE.UTF-8" shaped, so normalize it to a language tag first.
    let locale = env::var("LANG")
        .ok()
        .map(|lang| lang.split('.').next().unwrap_or_default().replace('_', "-"));
    if let Some(country) = derive_user_country(locale.as_deref()) {
        println!("\nPreferred country from locale: {country}");
    }

    println!(
        "\nCountry options: {}",
        dataset.available_countries(TrackerView::Banks).join(", ")
    );

    Ok(())
}

fn run_check(path: &Path) -> Result<()> {
    println!("wero-tracker v{VERSION} — dataset check");

    let dataset = match load_dataset(path) {
        Ok(dataset) => dataset,
        Err(err) => {
            eprintln!("✗ {err:#}");
            std::process::exit(1);
        }
    };
    println!("✓ Schema valid");

    // Non-fatal findings: tolerated at render time but worth fixing in data
    let mut findings = 0usize;
    for brand in &dataset.banks.brands {
        for (bank_name, app_id) in brand.dangling_app_refs() {
            println!(
                "  ⚠ {}: bank \"{bank_name}\" references unknown app id {app_id}",
                brand.name
            );
            findings += 1;
        }
        if brand.banks.is_empty() {
            println!("  ⚠ {}: brand has no banks", brand.name);
            findings += 1;
        }
    }

    if findings == 0 {
        println!("✓ No findings");
    } else {
        println!("{findings} finding(s); dataset still renders, fix at the source");
    }

    Ok(())
}
