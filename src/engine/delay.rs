//! Delay filler construction
//!
//! A delay is realised by prepending filler frames to the original sample
//! bytes. The filler is either silence (all zero bytes) or byte-level noise.

use std::fmt;
use std::str::FromStr;

use log::debug;
use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::engine::stream::{check_data_size, SampleBuffer, StreamDescriptor};
use crate::error::{Result, WavToolError};

/// Unit of the delay given on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DelayUnit {
    /// Milliseconds, converted with the stream's sample rate
    #[default]
    #[serde(rename = "ms")]
    Milliseconds,
    /// Samples per channel, used as is
    #[serde(rename = "samples")]
    Samples,
}

impl fmt::Display for DelayUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DelayUnit::Milliseconds => write!(f, "ms"),
            DelayUnit::Samples => write!(f, "samples"),
        }
    }
}

impl FromStr for DelayUnit {
    type Err = WavToolError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "ms" | "milliseconds" => Ok(DelayUnit::Milliseconds),
            "samples" => Ok(DelayUnit::Samples),
            other => Err(WavToolError::argument(format!(
                "unknown delay unit '{}' (expected 'ms' or 'samples')",
                other
            ))),
        }
    }
}

/// A requested delay, before it is tied to a sample rate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelaySpec {
    pub amount: u64,
    pub unit: DelayUnit,
}

impl DelaySpec {
    pub fn milliseconds(amount: u64) -> Self {
        DelaySpec {
            amount,
            unit: DelayUnit::Milliseconds,
        }
    }

    pub fn samples(amount: u64) -> Self {
        DelaySpec {
            amount,
            unit: DelayUnit::Samples,
        }
    }

    /// Delay length in samples per channel at `sample_rate`
    ///
    /// Milliseconds are converted with `floor(ms * rate / 1000)`.
    pub fn resolve(&self, sample_rate: u32) -> u64 {
        match self.unit {
            DelayUnit::Samples => self.amount,
            DelayUnit::Milliseconds => {
                let samples = self.amount as u128 * sample_rate as u128 / 1000;
                u64::try_from(samples).unwrap_or(u64::MAX)
            }
        }
    }
}

/// What the prepended frames contain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FillMode {
    /// Every byte is 0x00
    #[default]
    Zero,
    /// Every byte is uniform over 0..=255
    Random,
}

/// Build the filler for `delay_samples` frames of the given shape
///
/// `main_len` is the size of the sample data the filler will be prepended
/// to; together they must fit in one container. Random filler is byte
/// noise, not amplitude-scaled sample noise.
///
/// # Errors
/// * `Argument` - If filler plus main data exceeds the WAV size limit
pub fn build_filler<R: RngCore + ?Sized>(
    descriptor: &StreamDescriptor,
    delay_samples: u64,
    main_len: usize,
    mode: FillMode,
    rng: &mut R,
) -> Result<SampleBuffer> {
    let too_large =
        || WavToolError::argument(format!("delay of {} samples is too large", delay_samples));

    let filler_len = delay_samples
        .checked_mul(descriptor.frame_size() as u64)
        .ok_or_else(too_large)?;
    let total = filler_len
        .checked_add(main_len as u64)
        .ok_or_else(too_large)?;
    check_data_size(total)?;
    let len = usize::try_from(filler_len).map_err(|_| too_large())?;

    let mut filler = SampleBuffer::from_bytes(vec![0u8; len]);
    if mode == FillMode::Random {
        rng.fill_bytes(filler.bytes_mut());
    }

    debug!("Built {:?} filler: {} bytes", mode, len);

    Ok(filler)
}
