use anyhow::{Context, Result};
use bytes::Bytes;
use colored::*;
use std::fs;
use tracing::info;
use tubemend_core::repair::{repair, RepairOutcome};

use super::check::read_input;

pub fn execute(input: &str, output: &str) -> Result<()> {
    info!("Repairing file: {}", input);

    let data = read_input(input)?;
    info!("File size: {} bytes", data.len());

    let outcome = repair(Bytes::from(data));

    match &outcome {
        RepairOutcome::Truncated { offset: 0, .. } => {
            println!("{} already starts with a marker, nothing dropped", "✓".green());
        }
        RepairOutcome::Truncated { offset, .. } => {
            println!(
                "{} dropped {} leading bytes before the first marker",
                "✓".green(),
                offset
            );
        }
        RepairOutcome::Prepended { .. } => {
            println!(
                "{} no marker found, prepended a generic frame header",
                "!".yellow()
            );
        }
    }

    let repaired = outcome.into_bytes();
    fs::write(output, &repaired)
        .with_context(|| format!("Failed to write output file: {}", output))?;

    println!("Wrote {} bytes to {}", repaired.len(), output);

    Ok(())
}
