//! Audio Engine Module
//!
//! Core of both tools:
//! - Stream descriptor and raw sample buffer
//! - Container file I/O
//! - Delay filler construction
//! - Noise generation
//! - Float delay line

pub mod delay;
pub mod delay_line;
pub mod io;
pub mod noise;
pub mod stream;

pub use delay::{build_filler, DelaySpec, DelayUnit, FillMode};
pub use delay_line::{randomize_samples, DelayLine};
pub use io::{read_container, read_container_from, write_container, write_container_to, Container};
pub use noise::{generate_noise, write_noise, NoiseConfig};
pub use stream::{SampleBuffer, SampleEncoding, StreamDescriptor};
