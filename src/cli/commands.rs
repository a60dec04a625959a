//! CLI Command Implementations
//!
//! Each command is a single pass: read or generate, transform, write.

use std::path::PathBuf;

use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engine::delay::{build_filler, DelaySpec, FillMode};
use crate::engine::io::{read_container, write_container};
use crate::engine::noise::{write_noise, NoiseConfig};
use crate::error::Result;

/// Resolved settings for one `delay-wav` run
#[derive(Debug, Clone, PartialEq)]
pub struct DelayOptions {
    pub input: PathBuf,
    pub delay: DelaySpec,
    pub output: PathBuf,
    pub fill: FillMode,
    pub seed: Option<u64>,
}

/// Resolved settings for one `random-wav` run
#[derive(Debug, Clone, PartialEq)]
pub struct NoiseOptions {
    pub output: PathBuf,
    pub length_secs: f64,
    pub noise: NoiseConfig,
    pub seed: Option<u64>,
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Write a delayed copy of the input file.
///
/// Prints the resolved delay in samples before the output is written and
/// returns it.
pub fn delay_wav(options: &DelayOptions) -> Result<u64> {
    info!(
        "Delaying {} by {} {}",
        options.input.display(),
        options.delay.amount,
        options.delay.unit
    );

    let input = read_container(&options.input)?;
    let delay_samples = options.delay.resolve(input.descriptor.sample_rate);

    println!("Delaying samples: {}", delay_samples);

    let mut rng = make_rng(options.seed);
    let filler = build_filler(
        &input.descriptor,
        delay_samples,
        input.samples.len(),
        options.fill,
        &mut rng,
    )?;
    write_container(&options.output, &input.descriptor, &filler, &input.samples)?;

    info!("Delayed copy written: {}", options.output.display());

    Ok(delay_samples)
}

/// Write a file of uniform noise. Returns the number of samples written.
pub fn random_wav(options: &NoiseOptions) -> Result<usize> {
    info!(
        "Generating {}s of noise into {}",
        options.length_secs,
        options.output.display()
    );

    let mut rng = make_rng(options.seed);
    let noise = write_noise(&options.output, &options.noise, options.length_secs, &mut rng)?;

    info!("Noise written: {}", options.output.display());

    Ok(noise.num_frames())
}
