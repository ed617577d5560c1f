use anyhow::{bail, Context, Result};
use bytes::Bytes;
use colored::*;
use std::fs;
use std::time::Duration;
use tracing::{info, warn};
use tubemend_core::{
    accept::{prepare_delivery, screen_body, Attachment, Screen},
    sniff::sniff,
    source::{FetchTarget, SourcePlan},
    video::{default_filename, extract_video_id},
};

/// Some converter endpoints answer differently for non-browser agents
const BROWSER_UA: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                          (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

const FETCH_TIMEOUT: Duration = Duration::from_secs(60);

pub fn execute(url: &str, endpoints: &str, output: Option<&str>, bitrate: u32) -> Result<()> {
    let id = extract_video_id(url)?;
    info!("Extracted video id: {}", id);

    let plan_json = fs::read_to_string(endpoints)
        .with_context(|| format!("Failed to read endpoints file: {}", endpoints))?;
    let plan = SourcePlan::from_json(&plan_json)?;
    let targets = plan.render_all(&id, bitrate)?;
    info!("Trying {} endpoints in order", targets.len());

    let client = reqwest::blocking::Client::builder()
        .user_agent(BROWSER_UA)
        .timeout(FETCH_TIMEOUT)
        .build()
        .context("Failed to build HTTP client")?;

    let filename = output.map(str::to_string).unwrap_or_else(|| default_filename(&id));

    // Try each endpoint until one yields a sniff-passing body. Keep the last
    // plausible body around so repair can run on it as a last resort.
    let mut last_body: Option<Bytes> = None;

    for target in &targets {
        match try_endpoint(&client, target) {
            Ok(body) => {
                if sniff(&body).is_valid() {
                    info!("Endpoint {:?} produced a sniff-passing payload", target.name);
                    let attachment = prepare_delivery(filename.clone(), body);
                    return deliver(&attachment);
                }
                warn!("Endpoint {:?} returned bytes that fail sniffing", target.name);
                last_body = Some(body);
            }
            Err(e) => {
                warn!("Endpoint {:?} failed: {:#}", target.name, e);
            }
        }
    }

    match last_body {
        Some(body) => {
            println!(
                "{} no endpoint produced clean audio, repairing the best candidate",
                "!".yellow()
            );
            let attachment = prepare_delivery(filename, body);
            deliver(&attachment)
        }
        None => bail!("all {} endpoints failed to produce a usable payload", targets.len()),
    }
}

/// Fetch one endpoint, following a single landing-page direct link
fn try_endpoint(client: &reqwest::blocking::Client, target: &FetchTarget) -> Result<Bytes> {
    info!("Fetching {} ({})", target.url, target.name);

    let (content_type, body) = get(client, target.url.as_str())?;

    match screen_body(content_type.as_deref(), &body)? {
        Screen::Payload => Ok(body),
        Screen::FollowLink(link) => {
            info!("Following direct link from landing page");
            let (_, body) = get(client, &link)?;
            // The linked file gets the size screen too, but not another
            // round of link extraction.
            if body.len() < tubemend_core::constants::MIN_PLAUSIBLE_BODY {
                bail!("direct link body too small: {} bytes", body.len());
            }
            Ok(body)
        }
    }
}

fn get(client: &reqwest::blocking::Client, url: &str) -> Result<(Option<String>, Bytes)> {
    let response = client
        .get(url)
        .send()
        .with_context(|| format!("Request to {} failed", url))?;

    let status = response.status();
    if !status.is_success() {
        bail!("{} answered {}", url, status);
    }

    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let body = response
        .bytes()
        .with_context(|| format!("Failed to read body from {}", url))?;

    Ok((content_type, body))
}

fn deliver(attachment: &Attachment) -> Result<()> {
    fs::write(&attachment.filename, &attachment.data)
        .with_context(|| format!("Failed to write output file: {}", attachment.filename))?;

    if attachment.repaired {
        println!(
            "{} wrote {} bytes to {} (repaired; may not be playable audio)",
            "!".yellow(),
            attachment.data.len(),
            attachment.filename
        );
    } else {
        println!(
            "{} wrote {} bytes to {}",
            "✓".green(),
            attachment.data.len(),
            attachment.filename
        );
    }

    Ok(())
}
