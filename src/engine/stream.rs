//! Stream descriptor and raw sample buffer
//!
//! A container is described by its sample rate, channel count and sample
//! width. Sample data is carried as raw little-endian bytes and is never
//! decoded into amplitudes by the delay pipeline.

use hound::{SampleFormat, WavSpec};
use serde::{Deserialize, Serialize};

use crate::error::{Result, WavToolError};

/// Largest sample payload a WAV data chunk can declare
pub const MAX_DATA_BYTES: u64 = u32::MAX as u64;

/// Fail unless `len` bytes of sample data fit in one container
pub fn check_data_size(len: u64) -> Result<()> {
    if len > MAX_DATA_BYTES {
        return Err(WavToolError::argument(format!(
            "{} bytes of sample data exceeds the {} byte WAV limit",
            len, MAX_DATA_BYTES
        )));
    }
    Ok(())
}

/// How individual samples are encoded in the byte stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SampleEncoding {
    /// Signed integer PCM (8-bit samples are stored unsigned on disk)
    Int,
    /// IEEE 754 float
    Float,
}

/// Parameters shared by an input stream and every stream derived from it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamDescriptor {
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Number of interleaved channels
    pub channel_count: u16,
    /// Bytes per sample
    pub sample_width_bytes: u16,
    /// Sample encoding
    pub encoding: SampleEncoding,
}

impl StreamDescriptor {
    /// Create an integer PCM descriptor
    pub fn new(sample_rate: u32, channel_count: u16, sample_width_bytes: u16) -> Self {
        StreamDescriptor {
            sample_rate,
            channel_count,
            sample_width_bytes,
            encoding: SampleEncoding::Int,
        }
    }

    /// Create a 32-bit float descriptor
    pub fn float(sample_rate: u32, channel_count: u16) -> Self {
        StreamDescriptor {
            sample_rate,
            channel_count,
            sample_width_bytes: 4,
            encoding: SampleEncoding::Float,
        }
    }

    /// Bytes in one frame (one sample for every channel)
    pub fn frame_size(&self) -> usize {
        self.channel_count as usize * self.sample_width_bytes as usize
    }

    /// Check the descriptor describes something we can store
    pub fn validate(&self) -> Result<()> {
        if self.sample_rate == 0 {
            return Err(WavToolError::format("sample rate must be non-zero"));
        }
        if self.channel_count == 0 {
            return Err(WavToolError::format("channel count must be non-zero"));
        }
        match (self.encoding, self.sample_width_bytes) {
            (SampleEncoding::Int, 1..=4) | (SampleEncoding::Float, 4) => Ok(()),
            (encoding, width) => Err(WavToolError::format(format!(
                "unsupported sample width: {} bytes ({:?})",
                width, encoding
            ))),
        }
    }

    /// Build a descriptor from a `hound` header
    pub fn from_spec(spec: &WavSpec) -> Result<Self> {
        if spec.bits_per_sample % 8 != 0 {
            return Err(WavToolError::format(format!(
                "unsupported bit depth: {} bits",
                spec.bits_per_sample
            )));
        }

        let descriptor = StreamDescriptor {
            sample_rate: spec.sample_rate,
            channel_count: spec.channels,
            sample_width_bytes: spec.bits_per_sample / 8,
            encoding: match spec.sample_format {
                SampleFormat::Int => SampleEncoding::Int,
                SampleFormat::Float => SampleEncoding::Float,
            },
        };
        descriptor.validate()?;

        Ok(descriptor)
    }

    /// Header declared for a container with these parameters
    pub fn to_spec(&self) -> WavSpec {
        WavSpec {
            channels: self.channel_count,
            sample_rate: self.sample_rate,
            bits_per_sample: self.sample_width_bytes * 8,
            sample_format: match self.encoding {
                SampleEncoding::Int => SampleFormat::Int,
                SampleEncoding::Float => SampleFormat::Float,
            },
        }
    }
}

/// Raw interleaved sample bytes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SampleBuffer {
    bytes: Vec<u8>,
}

impl SampleBuffer {
    /// An empty buffer
    pub fn new() -> Self {
        SampleBuffer { bytes: Vec::new() }
    }

    /// Wrap existing bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        SampleBuffer { bytes }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Number of whole frames for the given descriptor
    pub fn num_frames(&self, descriptor: &StreamDescriptor) -> usize {
        match descriptor.frame_size() {
            0 => 0,
            frame_size => self.bytes.len() / frame_size,
        }
    }

    /// Fail unless the buffer holds a whole number of frames
    pub fn check_alignment(&self, descriptor: &StreamDescriptor) -> Result<()> {
        let frame_size = descriptor.frame_size();
        if frame_size == 0 || self.bytes.len() % frame_size != 0 {
            return Err(WavToolError::format(format!(
                "buffer of {} bytes is not a whole number of {}-byte frames",
                self.bytes.len(),
                frame_size
            )));
        }
        Ok(())
    }

    pub(crate) fn bytes_mut(&mut self) -> &mut Vec<u8> {
        &mut self.bytes
    }
}
