//! wavdelay - WAV delay and noise tools
//!
//! Two small utilities built on the same container layer:
//! 1. `delay-wav` - prepend silence or byte noise to an existing WAV file
//! 2. `random-wav` - write a WAV file of uniform random samples
//!
//! # Architecture
//!
//! - `engine` decodes and encodes containers as raw sample bytes and builds
//!   filler and noise buffers
//! - `config` holds the optional JSON configuration
//! - `cli` defines the command-line surface and runs each command

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;

pub use config::ToolConfig;
pub use error::{Result, WavToolError};
