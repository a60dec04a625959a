//! CLI Module
//!
//! Argument definitions for the `delay-wav` and `random-wav` tools, plus the
//! logging and error reporting both binaries share.

pub mod commands;

use std::path::PathBuf;

use clap::Parser;
use env_logger::Env;

use crate::config::ToolConfig;
use crate::engine::delay::{DelaySpec, DelayUnit, FillMode};
use crate::engine::noise::NoiseConfig;
use crate::error::WavToolError;

pub use commands::{delay_wav, random_wav, DelayOptions, NoiseOptions};

/// Create a delayed copy of a WAV file
#[derive(Parser, Debug)]
#[command(name = "delay-wav")]
#[command(version, about, long_about = None)]
pub struct DelayArgs {
    /// Name of the input file
    pub input: PathBuf,

    /// Delay length, in milliseconds unless --unit says otherwise
    pub delay: u64,

    /// Name of the output file [default: delay.wav]
    pub output: Option<PathBuf>,

    /// Prepend random bytes instead of 0
    #[arg(long)]
    pub random: bool,

    /// Unit of the delay argument: "ms" or "samples" [default: ms]
    #[arg(long)]
    pub unit: Option<DelayUnit>,

    /// Seed for the random filler
    #[arg(long)]
    pub seed: Option<u64>,

    /// JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl DelayArgs {
    /// Combine the arguments with `config`; arguments take precedence
    pub fn into_options(self, config: &ToolConfig) -> DelayOptions {
        DelayOptions {
            input: self.input,
            delay: DelaySpec {
                amount: self.delay,
                unit: self.unit.unwrap_or(config.delay_unit),
            },
            output: self.output.unwrap_or_else(|| config.default_output.clone()),
            fill: if self.random {
                FillMode::Random
            } else {
                FillMode::Zero
            },
            seed: self.seed.or(config.seed),
        }
    }
}

/// Create a WAV file with random content in it
#[derive(Parser, Debug)]
#[command(name = "random-wav")]
#[command(version, about, long_about = None)]
pub struct NoiseArgs {
    /// Name of the output file
    pub output: PathBuf,

    /// Length of the file in seconds
    #[arg(allow_negative_numbers = true)]
    pub length: f64,

    /// Sample rate in Hz [default: 16000]
    #[arg(long)]
    pub sample_rate: Option<u32>,

    /// Largest absolute sample value [default: 32767]
    #[arg(long)]
    pub amplitude: Option<f64>,

    /// Seed for the noise generator
    #[arg(long)]
    pub seed: Option<u64>,

    /// JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl NoiseArgs {
    /// Combine the arguments with `config`; arguments take precedence
    pub fn into_options(self, config: &ToolConfig) -> NoiseOptions {
        NoiseOptions {
            output: self.output,
            length_secs: self.length,
            noise: NoiseConfig {
                sample_rate: self.sample_rate.unwrap_or(config.noise.sample_rate),
                amplitude: self.amplitude.unwrap_or(config.noise.amplitude),
            },
            seed: self.seed.or(config.seed),
        }
    }
}

/// Initialize the logger; `RUST_LOG` overrides the default level
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level)).init();
}

/// Print an error and its recovery suggestions to stderr
pub fn report_error(program: &str, err: &WavToolError) {
    eprintln!("{}: {}", program, err);
    for suggestion in err.recovery_suggestions() {
        eprintln!("  hint: {}", suggestion);
    }
}
