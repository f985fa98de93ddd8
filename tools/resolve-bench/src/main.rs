//! Resolver benchmark for Curio.
//!
//! Replays stored vision responses (JSON with `labels` and `entities`
//! arrays of `{description, score}`) through the entity resolver and
//! prints one CSV row per file. Used to tune the term tables offline
//! without spending API quota.
//!
//! Usage:
//!   cargo run -- fixtures/                     Every .json in a directory
//!   cargo run -- a.json b.json --domain food   Specific files, food rules
//!   cargo run -- fixtures/ --expect            Compare against "expected"

use clap::Parser;
use curio_lib::vision::{self, terms, VisionObservations};
use curio_lib::Domain;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "resolve-bench", about = "Replay vision fixtures through the resolver")]
struct Args {
    /// Fixture files or directories of fixtures
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// artwork, food or architecture
    #[arg(short, long, default_value = "artwork")]
    domain: Domain,

    /// Score each fixture against its top-level "expected" subject
    #[arg(long)]
    expect: bool,
}

struct Fixture {
    path: PathBuf,
    observations: VisionObservations,
    expected: Option<String>,
}

fn main() {
    let args = Args::parse();

    let mut files = Vec::new();
    for path in &args.paths {
        collect(path, &mut files);
    }
    files.sort();
    if files.is_empty() {
        eprintln!("No .json fixtures found");
        std::process::exit(1);
    }

    println!("file,subject,creator,confidence,resolved,expected,match,micros");

    let mut resolved = 0usize;
    let mut scored = 0usize;
    let mut matched = 0usize;
    let mut total_us = 0u128;

    for file in &files {
        let fixture = match load(file) {
            Ok(f) => f,
            Err(e) => {
                eprintln!("[SKIP] {}: {}", file.display(), e);
                continue;
            }
        };

        let start = Instant::now();
        let result = vision::resolve_for(
            args.domain,
            &fixture.observations.labels,
            &fixture.observations.entities,
        );
        let micros = start.elapsed().as_micros();
        total_us += micros;

        if result.is_resolved() {
            resolved += 1;
        }

        let subject = result.subject_display(args.domain);
        let hit = match (&fixture.expected, args.expect) {
            (Some(expected), true) => {
                scored += 1;
                let hit = expected.eq_ignore_ascii_case(subject);
                if hit {
                    matched += 1;
                }
                Some(hit)
            }
            _ => None,
        };

        println!(
            "{},{},{},{:.3},{},{},{},{}",
            csv(&fixture.path.display().to_string()),
            csv(subject),
            csv(result.creator_display(args.domain)),
            result.confidence,
            result.is_resolved(),
            csv(fixture.expected.as_deref().unwrap_or("")),
            hit.map(|h| h.to_string()).unwrap_or_default(),
            micros
        );
    }

    eprintln!();
    eprintln!("=== SUMMARY ({}, terms v{}) ===", args.domain, terms::TERMS_VERSION);
    eprintln!("  Fixtures:  {}", files.len());
    eprintln!("  Resolved:  {}", resolved);
    if scored > 0 {
        eprintln!(
            "  Correct:   {}/{} ({:.1}%)",
            matched,
            scored,
            matched as f64 * 100.0 / scored as f64
        );
    }
    eprintln!("  Total:     {:.2}ms", total_us as f64 / 1000.0);
}

fn collect(path: &Path, out: &mut Vec<PathBuf>) {
    if path.is_dir() {
        let entries = match std::fs::read_dir(path) {
            Ok(entries) => entries,
            Err(e) => {
                eprintln!("[SKIP] {}: {}", path.display(), e);
                return;
            }
        };
        for entry in entries.flatten() {
            let p = entry.path();
            if p.extension().and_then(|e| e.to_str()) == Some("json") {
                out.push(p);
            }
        }
    } else {
        out.push(path.to_path_buf());
    }
}

fn load(path: &Path) -> Result<Fixture, String> {
    let text = std::fs::read_to_string(path).map_err(|e| e.to_string())?;
    let value: serde_json::Value = serde_json::from_str(&text).map_err(|e| e.to_string())?;
    let expected = value
        .get("expected")
        .and_then(|v| v.as_str())
        .map(str::to_string);
    let observations: VisionObservations =
        serde_json::from_value(value).map_err(|e| e.to_string())?;
    Ok(Fixture {
        path: path.to_path_buf(),
        observations,
        expected,
    })
}

/// Quote a CSV field when it needs it.
fn csv(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
