//! SHUU CLI - Command-line front end for the deterministic random provider
//!
//! This binary provides commands for deriving seeds, rolling and shuffling
//! with a seeded provider, and rendering noise maps.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use shuu_cli::commands;
use shuu_cli::commands::noise::NoiseOverrides;

/// SHUU - Deterministic random provider tools
#[derive(Parser)]
#[command(name = "shuu")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Derive a seed from a string or the system clock
    Seed {
        /// Text to hash into a seed
        text: Option<String>,

        /// Use the system clock instead of TEXT
        #[arg(long)]
        clock: bool,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Draw integers in [min, max) from a seeded provider
    Roll {
        /// Provider seed
        #[arg(short, long, allow_negative_numbers = true)]
        seed: i32,

        /// Inclusive lower bound
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        min: i32,

        /// Exclusive upper bound
        #[arg(long, allow_negative_numbers = true)]
        max: i32,

        /// Number of values to draw
        #[arg(short, long, default_value_t = 1)]
        count: usize,

        /// Call count to resume from (as printed by a previous roll).
        /// Resuming replays every skipped draw, so cost is linear in this
        /// value; at most 1000000000 is accepted
        #[arg(long, default_value_t = 0)]
        skip: u64,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Shuffle items, or pick a unique subset, with a seeded provider
    Shuffle {
        /// Provider seed
        #[arg(short, long, allow_negative_numbers = true)]
        seed: i32,

        /// Return only this many unique items
        #[arg(short, long)]
        pick: Option<usize>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,

        /// Items to shuffle
        items: Vec<String>,
    },

    /// Render fractal Perlin noise to a grayscale PNG
    Noise {
        /// Path to a JSON noise settings file
        #[arg(long)]
        config: Option<String>,

        /// Seed of the provider phasing the field
        #[arg(short, long, allow_negative_numbers = true)]
        seed: Option<i32>,

        /// Frequency multiplier
        #[arg(long)]
        scale: Option<f32>,

        /// Width in pixels
        #[arg(long)]
        width: Option<u32>,

        /// Height in pixels
        #[arg(long)]
        height: Option<u32>,

        /// Number of fBm octaves
        #[arg(long)]
        octaves: Option<u32>,

        /// Output PNG path
        #[arg(short, long)]
        out: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Seed { text, clock, json } => commands::seed::run(text.as_deref(), clock, json),
        Commands::Roll {
            seed,
            min,
            max,
            count,
            skip,
            json,
        } => commands::roll::run(seed, min, max, count, skip, json),
        Commands::Shuffle {
            seed,
            pick,
            json,
            items,
        } => commands::shuffle::run(seed, &items, pick, json),
        Commands::Noise {
            config,
            seed,
            scale,
            width,
            height,
            octaves,
            out,
            json,
        } => {
            let overrides = NoiseOverrides {
                seed,
                scale,
                width,
                height,
                octaves,
            };
            commands::noise::run(config.as_deref(), &overrides, &out, json)
        }
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
