use std::fs::File;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use log::debug;

use gzdec_codecs::start_session;
use gzdec_core::{DecoderConfig, Method, DEFAULT_BLOCK_SIZE};

// ── CLI definition ─────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "gzdec",
    about = "Decode a gzip or bzip2 compressed stream to raw bytes",
    version
)]
struct Cli {
    /// Compressed input file ("-" reads stdin)
    input: PathBuf,
    /// Destination file for the decoded bytes ("-" writes to stdout)
    output: PathBuf,
    /// Decoding method: gzip | bzip (numeric selectors 0 and 1 also accepted)
    #[arg(short, long, default_value = "gzip")]
    method: String,
    /// Bytes requested from the decoder per step and output growth increment
    /// (0 = use the input buffer's size)
    #[arg(short, long, default_value_t = DEFAULT_BLOCK_SIZE)]
    block_size: u32,
}

// ── Helpers ────────────────────────────────────────────────────────────────

fn method_from_name(name: &str) -> anyhow::Result<Method> {
    // Numeric selectors go through the same validation boundary a host's
    // raw integer property would.
    if let Ok(raw) = name.parse::<u32>() {
        return Ok(Method::try_from(raw)?);
    }
    match name {
        "gzip" | "gz" => Ok(Method::Gzip),
        "bzip" | "bzip2" | "bz2" => Ok(Method::Bzip),
        other => anyhow::bail!("unknown method '{}'. Valid options: gzip, bzip", other),
    }
}

fn human_bytes(n: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    let mut v = n as f64;
    let mut unit = 0;
    while v >= 1024.0 && unit < UNITS.len() - 1 {
        v /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{} B", n)
    } else {
        format!("{:.2} {}", v, UNITS[unit])
    }
}

fn read_input(input: &PathBuf) -> anyhow::Result<Vec<u8>> {
    let mut buf = Vec::new();
    if input.to_str() == Some("-") {
        io::stdin().lock().read_to_end(&mut buf)?;
    } else {
        File::open(input)
            .with_context(|| format!("opening input file {:?}", input))?
            .read_to_end(&mut buf)?;
    }
    Ok(buf)
}

// ── Entry point ────────────────────────────────────────────────────────────

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = DecoderConfig {
        method: method_from_name(&cli.method)?,
        block_size: cli.block_size,
    };
    let compressed = read_input(&cli.input)?;
    debug!(
        "decoding {} compressed bytes as {} (block size {})",
        compressed.len(),
        config.method,
        config.block_size
    );

    let mut session = start_session(config.method)?;

    let t0 = Instant::now();
    let raw = session
        .decode(&compressed, config.block_size)
        .with_context(|| format!("decoding {:?}", cli.input))?;
    let elapsed = t0.elapsed();
    session.stop();

    if cli.output.to_str() == Some("-") {
        io::stdout().lock().write_all(&raw)?;
    } else {
        File::create(&cli.output)
            .with_context(|| format!("creating output file {:?}", cli.output))?
            .write_all(&raw)?;
    }

    let ratio = if compressed.is_empty() {
        1.0
    } else {
        raw.len() as f64 / compressed.len() as f64
    };
    eprintln!("  method      : {}", config.method);
    eprintln!("  compressed  : {}", human_bytes(compressed.len() as u64));
    eprintln!("  raw size    : {}", human_bytes(raw.len() as u64));
    eprintln!("  ratio       : {:.2}x", ratio);
    eprintln!(
        "  throughput  : {}/s",
        human_bytes((raw.len() as f64 / elapsed.as_secs_f64()) as u64)
    );
    eprintln!("  elapsed     : {:.3}s", elapsed.as_secs_f64());
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    run(Cli::parse())
}
