// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-surrogate project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

// Synthetic field generator for testing
// Writes a plane wave plus Gaussian noise as a JSON array of rows

use clap::Parser;
use std::path::PathBuf;

use rust_surrogate::utility::test_fields::FieldGenerator;
use rust_surrogate::utility::write_field;

/// Synthetic 2D field generator for testing
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Output file path (.json)
    #[arg(short, long, value_name = "FILE")]
    output: PathBuf,

    /// Number of rows
    #[arg(long, default_value_t = 64)]
    ny: usize,

    /// Number of columns
    #[arg(long, default_value_t = 64)]
    nx: usize,

    /// Cycles of the plane wave along y
    #[arg(long, default_value_t = 0.0)]
    ky: f64,

    /// Cycles of the plane wave along x
    #[arg(long, default_value_t = 4.0)]
    kx: f64,

    /// Amplitude of the plane wave
    #[arg(short, long, default_value_t = 1.0)]
    amplitude: f64,

    /// Standard deviation of the added Gaussian noise
    #[arg(long, default_value_t = 0.1)]
    noise: f64,

    /// Seed for the noise, system entropy if not set
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if args.ny == 0 || args.nx == 0 {
        eprintln!("Error: Field dimensions must be at least 1x1");
        std::process::exit(1);
    }

    if args.noise < 0.0 {
        eprintln!("Error: Noise standard deviation must be non-negative");
        std::process::exit(1);
    }

    println!("Generating {}x{} field...", args.ny, args.nx);
    println!("Plane wave: ky = {}, kx = {}, amplitude = {}", args.ky, args.kx, args.amplitude);
    println!("Noise: {}", args.noise);

    let mut generator = match args.seed {
        Some(seed) => FieldGenerator::new(seed),
        None => FieldGenerator::new_from_entropy(),
    };

    let mut field = FieldGenerator::sinusoid_field(args.ny, args.nx, args.ky, args.kx, args.amplitude);
    if args.noise > 0.0 {
        field += &generator.gaussian_field(args.ny, args.nx, args.noise);
    }

    write_field(&field, &args.output)?;
    println!("Field successfully generated and saved to: {}", args.output.display());

    Ok(())
}
