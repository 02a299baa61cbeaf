// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-surrogate project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

// Command line entry point for the surrogate field generator

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use rust_surrogate::config::{output_config_schema, Config};
use rust_surrogate::surrogate::create_generator;
use rust_surrogate::utility::{read_field, write_batch};

/// Generate random fields sharing the 2D power spectrum of an input field
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input field (JSON array of rows)
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output file for the sample batch (JSON), stdout if not set
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Configuration file (YAML), created with defaults if missing
    #[arg(short, long, value_name = "FILE", default_value = "config.yaml")]
    config: PathBuf,

    /// Number of samples to generate
    #[arg(short = 'n', long)]
    samples: Option<usize>,

    /// Do not apply the Hamming taper
    #[arg(long)]
    no_window: bool,

    /// Seed for reproducible phases
    #[arg(short, long)]
    seed: Option<u64>,

    /// Include the per-sample and original spectra in the output
    #[arg(long)]
    include_spectra: bool,

    /// Print the configuration JSON schema and exit
    #[arg(long)]
    show_config_schema: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.show_config_schema {
        return output_config_schema();
    }

    let mut config = Config::from_file(&args.config)?;
    config.apply_args(
        args.samples,
        args.no_window.then_some(false),
        args.seed,
        args.include_spectra.then_some(true),
    );
    config.validate()?;

    let input = args
        .input
        .context("An input field is required (--input FILE)")?;
    let field = read_field(&input)?;
    let (ny, nx) = field.dim();
    info!("Loaded {}x{} field from {}", ny, nx, input.display());

    let mut generator = create_generator(config.generator.seed);
    let batch = generator
        .generate(
            &field,
            config.generator.n_samples,
            config.generator.apply_window,
        )
        .with_context(|| format!("Failed to generate samples of {}", input.display()))?;

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            write_batch(
                &batch,
                config.output.include_spectra,
                config.output.pretty,
                &mut writer,
            )?;
            writer
                .flush()
                .with_context(|| format!("Failed to write output file {}", path.display()))?;
            info!("Wrote {} samples to {}", batch.len(), path.display());
        }
        None => {
            let stdout = io::stdout();
            write_batch(
                &batch,
                config.output.include_spectra,
                config.output.pretty,
                stdout.lock(),
            )?;
        }
    }

    Ok(())
}
