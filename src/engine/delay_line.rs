//! Fixed delay line over float samples
//!
//! Used to produce reference signals when checking delay estimates: the
//! output lags the input by a constant number of samples and the line
//! starts out full of zeros.

use rand::Rng;

use crate::error::{Result, WavToolError};

/// Circular buffer delaying a signal by a fixed number of samples
#[derive(Debug, Clone)]
pub struct DelayLine {
    buffer: Vec<f32>,
    write_pos: usize,
}

impl DelayLine {
    pub fn new(delay: usize) -> Self {
        DelayLine {
            buffer: vec![0.0; delay],
            write_pos: 0,
        }
    }

    /// Delay in samples
    pub fn delay(&self) -> usize {
        self.buffer.len()
    }

    /// Clear the stored history
    pub fn reset(&mut self) {
        self.buffer.fill(0.0);
        self.write_pos = 0;
    }

    /// Write `input` into the line and the delayed signal into `output`
    ///
    /// State carries across calls, so a signal may be fed in blocks.
    pub fn process(&mut self, input: &[f32], output: &mut [f32]) -> Result<()> {
        if input.len() != output.len() {
            return Err(WavToolError::argument(format!(
                "input and output blocks differ in length ({} vs {})",
                input.len(),
                output.len()
            )));
        }

        if self.buffer.is_empty() {
            output.copy_from_slice(input);
            return Ok(());
        }

        for (x, y) in input.iter().zip(output.iter_mut()) {
            *y = self.buffer[self.write_pos];
            self.buffer[self.write_pos] = *x;
            self.write_pos = (self.write_pos + 1) % self.buffer.len();
        }

        Ok(())
    }
}

/// Fill `samples` with values uniform over `[-amplitude, amplitude]`
pub fn randomize_samples<R: Rng + ?Sized>(rng: &mut R, samples: &mut [f32], amplitude: f32) {
    let amplitude = amplitude.abs();
    for sample in samples.iter_mut() {
        *sample = rng.gen_range(-amplitude..=amplitude);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_zero_delay_copies() {
        let mut line = DelayLine::new(0);
        let input = [0.25, -0.5, 1.0];
        let mut output = [0.0; 3];

        line.process(&input, &mut output).unwrap();
        assert_eq!(output, input);
    }

    #[test]
    fn test_delay_shifts_signal() {
        let mut line = DelayLine::new(2);
        let input = [1.0, 2.0, 3.0, 4.0, 5.0];
        let mut output = [0.0; 5];

        line.process(&input, &mut output).unwrap();
        assert_eq!(output, [0.0, 0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_state_carries_across_blocks() {
        let mut line = DelayLine::new(3);
        let mut first = [0.0; 2];
        let mut second = [0.0; 2];

        line.process(&[1.0, 2.0], &mut first).unwrap();
        line.process(&[3.0, 4.0], &mut second).unwrap();

        assert_eq!(first, [0.0, 0.0]);
        assert_eq!(second, [0.0, 1.0]);
    }

    #[test]
    fn test_reset() {
        let mut line = DelayLine::new(1);
        let mut output = [0.0; 1];
        line.process(&[7.0], &mut output).unwrap();
        line.reset();
        line.process(&[8.0], &mut output).unwrap();
        assert_eq!(output, [0.0]);
        assert_eq!(line.delay(), 1);
    }

    #[test]
    fn test_length_mismatch() {
        let mut line = DelayLine::new(4);
        let mut output = [0.0; 2];
        assert!(line.process(&[1.0, 2.0, 3.0], &mut output).is_err());
    }

    #[test]
    fn test_randomize_within_bounds() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut samples = vec![0.0f32; 4096];
        randomize_samples(&mut rng, &mut samples, 32767.0);

        assert!(samples.iter().all(|s| s.abs() <= 32767.0));
        let mean = samples.iter().map(|&s| s as f64).sum::<f64>() / samples.len() as f64;
        assert_relative_eq!(mean, 0.0, epsilon = 2000.0);
    }
}
