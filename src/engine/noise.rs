//! White noise generation
//!
//! Produces mono 16-bit PCM noise with every sample drawn uniformly from
//! `[-amplitude, amplitude]`.

use std::path::Path;

use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::engine::io::{write_container, Container};
use crate::engine::stream::{check_data_size, SampleBuffer, StreamDescriptor};
use crate::error::{Result, WavToolError};

/// Default noise sample rate in Hz
pub const DEFAULT_NOISE_SAMPLE_RATE: u32 = 16000;

/// Default amplitude bound (full scale for 16-bit PCM)
pub const DEFAULT_NOISE_AMPLITUDE: f64 = 32767.0;

/// Noise generator settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseConfig {
    /// Sample rate of the generated container
    pub sample_rate: u32,
    /// Samples are drawn from `[-amplitude, amplitude]`
    pub amplitude: f64,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        NoiseConfig {
            sample_rate: DEFAULT_NOISE_SAMPLE_RATE,
            amplitude: DEFAULT_NOISE_AMPLITUDE,
        }
    }
}

impl NoiseConfig {
    pub fn validate(&self) -> Result<()> {
        if self.sample_rate == 0 {
            return Err(WavToolError::argument("sample rate must be non-zero"));
        }
        // The draw range spans 2 * amplitude, which must stay finite
        if !(2.0 * self.amplitude).is_finite() || self.amplitude <= 0.0 {
            return Err(WavToolError::argument(format!(
                "amplitude must be a positive number, got {}",
                self.amplitude
            )));
        }
        Ok(())
    }

    /// Mono, 2 bytes per sample
    pub fn descriptor(&self) -> StreamDescriptor {
        StreamDescriptor::new(self.sample_rate, 1, 2)
    }

    /// `floor(length_secs * sample_rate)`
    pub fn num_samples(&self, length_secs: f64) -> Result<usize> {
        if !length_secs.is_finite() || length_secs < 0.0 {
            return Err(WavToolError::argument(format!(
                "length must be a non-negative number of seconds, got {}",
                length_secs
            )));
        }

        let samples = (length_secs * self.sample_rate as f64).floor();
        check_data_size((samples * 2.0).min(u64::MAX as f64) as u64)?;

        Ok(samples as usize)
    }
}

/// Generate `length_secs` of noise
///
/// Each value is truncated toward zero and clamped into the 16-bit range
/// before being packed little-endian.
pub fn generate_noise<R: Rng + ?Sized>(
    config: &NoiseConfig,
    length_secs: f64,
    rng: &mut R,
) -> Result<Container> {
    config.validate()?;
    let num_samples = config.num_samples(length_secs)?;

    let mut bytes = Vec::with_capacity(num_samples * 2);
    for _ in 0..num_samples {
        let value = rng.gen_range(-config.amplitude..=config.amplitude);
        let sample = value.trunc().clamp(i16::MIN as f64, i16::MAX as f64) as i16;
        bytes.extend_from_slice(&sample.to_le_bytes());
    }

    debug!(
        "Generated {} noise samples at {} Hz (amplitude {})",
        num_samples, config.sample_rate, config.amplitude
    );

    Ok(Container {
        descriptor: config.descriptor(),
        samples: SampleBuffer::from_bytes(bytes),
    })
}

/// Generate noise and write it to `path`
pub fn write_noise<R: Rng + ?Sized>(
    path: &Path,
    config: &NoiseConfig,
    length_secs: f64,
    rng: &mut R,
) -> Result<Container> {
    let noise = generate_noise(config, length_secs, rng)?;
    write_container(path, &noise.descriptor, &SampleBuffer::new(), &noise.samples)?;
    Ok(noise)
}
