use anyhow::{Context, Result};
use colored::*;
use serde::Serialize;
use std::fs;
use std::io::{self, Read};
use tracing::info;
use tubemend_core::sniff::{sniff, Marker, SniffResult};

#[derive(Serialize)]
struct Verdict {
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    marker: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    offset: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<&'static str>,
}

impl From<SniffResult> for Verdict {
    fn from(result: SniffResult) -> Self {
        match result {
            SniffResult::Valid { marker, offset } => Verdict {
                valid: true,
                marker: Some(marker_name(marker)),
                offset: Some(offset),
                reason: None,
            },
            SniffResult::Invalid { reason } => Verdict {
                valid: false,
                marker: None,
                offset: None,
                reason: Some(reason),
            },
        }
    }
}

fn marker_name(marker: Marker) -> &'static str {
    match marker {
        Marker::Id3v2 => "id3v2",
        Marker::FrameSync => "frame_sync",
    }
}

pub fn execute(input: &str, json: Option<&str>) -> Result<()> {
    info!("Sniffing file: {}", input);

    let data = read_input(input)?;
    info!("File size: {} bytes", data.len());

    let result = sniff(&data);

    match result {
        SniffResult::Valid { marker, offset } => {
            println!(
                "{} looks like an MP3 container ({} at offset {})",
                "✓".green(),
                marker_name(marker),
                offset
            );
        }
        SniffResult::Invalid { reason } => {
            println!("{} not a recognizable MP3 container: {}", "✗".red(), reason);
        }
    }

    if let Some(json_path) = json {
        let verdict = Verdict::from(result);
        let rendered = serde_json::to_string_pretty(&verdict)
            .with_context(|| "Failed to serialize verdict")?;

        if json_path == "-" {
            println!("{rendered}");
        } else {
            fs::write(json_path, rendered)
                .with_context(|| format!("Failed to write output file: {}", json_path))?;
            info!("Verdict written to: {}", json_path);
        }
    }

    Ok(())
}

pub(crate) fn read_input(input: &str) -> Result<Vec<u8>> {
    if input == "-" {
        let mut buf = Vec::new();
        io::stdin().read_to_end(&mut buf)?;
        Ok(buf)
    } else {
        fs::read(input).with_context(|| format!("Failed to read input file: {}", input))
    }
}
