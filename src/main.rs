//! Headless simulation runner (default binary).
//!
//! Drives the engine with a seeded random player on a simulated clock and prints
//! the final state as JSON. Progress goes to stderr.

use anyhow::Result;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let report = blockfall::sim::run(&args)?;

    eprintln!(
        "[sim] finished after {} ticks: score={} lines={} level={}",
        report.ticks, report.snapshot.score, report.snapshot.lines, report.snapshot.level
    );
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
