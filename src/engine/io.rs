//! Container file I/O
//!
//! Reads and writes uncompressed WAV containers through `hound`, keeping the
//! sample data as raw little-endian bytes. Decoding then encoding a container
//! reproduces the descriptor and every sample byte.

use std::fs::File;
use std::io::{BufWriter, Read, Seek, Write};
use std::path::Path;

use hound::{WavReader, WavWriter};
use log::debug;

use crate::engine::stream::{SampleBuffer, SampleEncoding, StreamDescriptor};
use crate::error::{Result, WavToolError};

/// Label used in error messages for containers that do not come from a file
const STREAM_ORIGIN: &str = "<stream>";

/// A fully decoded container
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    pub descriptor: StreamDescriptor,
    pub samples: SampleBuffer,
}

impl Container {
    /// Number of frames in the container
    pub fn num_frames(&self) -> usize {
        self.samples.num_frames(&self.descriptor)
    }
}

/// Read a whole container from disk
///
/// The file handle is owned by the reader and dropped on every return path,
/// including decode failures.
///
/// # Errors
/// * `Io` - If the file cannot be opened or read
/// * `Format` - If the file is not a supported WAV container or is truncated
pub fn read_container(path: &Path) -> Result<Container> {
    let reader = WavReader::open(path).map_err(|e| WavToolError::from_hound(path, e))?;
    let container = decode(reader, path)?;

    debug!(
        "Read {}: {} Hz, {} ch, {} bytes/sample, {} frames",
        path.display(),
        container.descriptor.sample_rate,
        container.descriptor.channel_count,
        container.descriptor.sample_width_bytes,
        container.num_frames()
    );

    Ok(container)
}

/// Read a whole container from any byte source
pub fn read_container_from<R: Read>(source: R) -> Result<Container> {
    let origin = Path::new(STREAM_ORIGIN);
    let reader = WavReader::new(source).map_err(|e| WavToolError::from_hound(origin, e))?;
    decode(reader, origin)
}

/// Write a container whose frames are `filler` followed by `main`
///
/// An existing file at `path` is replaced. Both buffers are checked before
/// the file is created. A failure partway through leaves whatever was
/// written on disk.
///
/// # Errors
/// * `Format` - If the descriptor is unsupported or a buffer is not frame aligned
/// * `Io` - If the file cannot be created or written
pub fn write_container(
    path: &Path,
    descriptor: &StreamDescriptor,
    filler: &SampleBuffer,
    main: &SampleBuffer,
) -> Result<()> {
    check_writable(descriptor, filler, main)?;

    let file = File::create(path).map_err(|e| WavToolError::io(path, e))?;
    encode(BufWriter::new(file), path, descriptor, filler, main)?;

    debug!(
        "Wrote {}: {} filler bytes + {} sample bytes",
        path.display(),
        filler.len(),
        main.len()
    );

    Ok(())
}

/// Write a container into any seekable sink
pub fn write_container_to<W: Write + Seek>(
    sink: W,
    descriptor: &StreamDescriptor,
    filler: &SampleBuffer,
    main: &SampleBuffer,
) -> Result<()> {
    check_writable(descriptor, filler, main)?;
    encode(sink, Path::new(STREAM_ORIGIN), descriptor, filler, main)
}

// ============================================================================
// Internal helper functions
// ============================================================================

fn check_writable(
    descriptor: &StreamDescriptor,
    filler: &SampleBuffer,
    main: &SampleBuffer,
) -> Result<()> {
    descriptor.validate()?;
    filler.check_alignment(descriptor)?;
    main.check_alignment(descriptor)
}

fn decode<R: Read>(mut reader: WavReader<R>, origin: &Path) -> Result<Container> {
    let descriptor = StreamDescriptor::from_spec(&reader.spec())?;
    let width = descriptor.sample_width_bytes as usize;
    let expected_samples = reader.len() as usize;

    let mut bytes = Vec::with_capacity(expected_samples * width);
    let hound_err = |e| WavToolError::from_hound(origin, e);

    match (descriptor.encoding, width) {
        (SampleEncoding::Float, _) => {
            for sample in reader.samples::<f32>() {
                bytes.extend_from_slice(&sample.map_err(hound_err)?.to_bits().to_le_bytes());
            }
        }
        // 8-bit WAV is unsigned on disk; hound hands it back re-centred on zero
        (SampleEncoding::Int, 1) => {
            for sample in reader.samples::<i8>() {
                bytes.push((sample.map_err(hound_err)? as u8) ^ 0x80);
            }
        }
        (SampleEncoding::Int, 2) => {
            for sample in reader.samples::<i16>() {
                bytes.extend_from_slice(&sample.map_err(hound_err)?.to_le_bytes());
            }
        }
        (SampleEncoding::Int, _) => {
            for sample in reader.samples::<i32>() {
                bytes.extend_from_slice(&sample.map_err(hound_err)?.to_le_bytes()[..width]);
            }
        }
    }

    if bytes.len() != expected_samples * width {
        return Err(WavToolError::format(format!(
            "{} is truncated: expected {} samples",
            origin.display(),
            expected_samples
        )));
    }

    Ok(Container {
        descriptor,
        samples: SampleBuffer::from_bytes(bytes),
    })
}

fn encode<W: Write + Seek>(
    sink: W,
    origin: &Path,
    descriptor: &StreamDescriptor,
    filler: &SampleBuffer,
    main: &SampleBuffer,
) -> Result<()> {
    let hound_err = |e| WavToolError::from_hound(origin, e);

    let mut writer = WavWriter::new(sink, descriptor.to_spec()).map_err(hound_err)?;

    // Filler goes out completely before the main content
    for buffer in [filler, main] {
        write_raw(&mut writer, descriptor, buffer.as_bytes()).map_err(hound_err)?;
    }

    writer.finalize().map_err(hound_err)
}

/// Push raw sample bytes through the writer without changing any of them
fn write_raw<W: Write + Seek>(
    writer: &mut WavWriter<W>,
    descriptor: &StreamDescriptor,
    bytes: &[u8],
) -> std::result::Result<(), hound::Error> {
    let width = descriptor.sample_width_bytes as usize;

    for chunk in bytes.chunks_exact(width) {
        match (descriptor.encoding, width) {
            (SampleEncoding::Float, _) => {
                let bits = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
                writer.write_sample(f32::from_bits(bits))?;
            }
            (SampleEncoding::Int, 1) => writer.write_sample((chunk[0] ^ 0x80) as i8)?,
            (SampleEncoding::Int, 2) => {
                writer.write_sample(i16::from_le_bytes([chunk[0], chunk[1]]))?
            }
            (SampleEncoding::Int, 3) => {
                let sign = if chunk[2] & 0x80 != 0 { 0xFF } else { 0x00 };
                writer.write_sample(i32::from_le_bytes([chunk[0], chunk[1], chunk[2], sign]))?
            }
            (SampleEncoding::Int, _) => writer.write_sample(i32::from_le_bytes([
                chunk[0], chunk[1], chunk[2], chunk[3],
            ]))?,
        }
    }

    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;
    use tempfile::tempdir;
    use test_case::test_case;

    fn counting_bytes(len: usize) -> SampleBuffer {
        SampleBuffer::from_bytes((0..len).map(|i| (i * 37 % 256) as u8).collect())
    }

    #[test_case(StreamDescriptor::new(8000, 1, 1) ; "8-bit mono")]
    #[test_case(StreamDescriptor::new(16000, 1, 2) ; "16-bit mono")]
    #[test_case(StreamDescriptor::new(44100, 2, 2) ; "16-bit stereo")]
    #[test_case(StreamDescriptor::new(48000, 2, 3) ; "24-bit stereo")]
    #[test_case(StreamDescriptor::new(48000, 1, 4) ; "32-bit int mono")]
    #[test_case(StreamDescriptor::float(96000, 2) ; "32-bit float stereo")]
    fn test_round_trip_preserves_bytes(descriptor: StreamDescriptor) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("round_trip.wav");
        let samples = counting_bytes(descriptor.frame_size() * 50);

        write_container(&path, &descriptor, &SampleBuffer::new(), &samples).unwrap();
        let container = read_container(&path).unwrap();

        assert_eq!(container.descriptor, descriptor);
        assert_eq!(container.samples, samples);
    }

    #[test]
    fn test_filler_precedes_main() {
        let descriptor = StreamDescriptor::new(16000, 1, 2);
        let filler = SampleBuffer::from_bytes(vec![0xAA; 4]);
        let main = SampleBuffer::from_bytes(vec![1, 2, 3, 4]);

        let mut cursor = Cursor::new(Vec::new());
        write_container_to(&mut cursor, &descriptor, &filler, &main).unwrap();
        cursor.set_position(0);

        let container = read_container_from(cursor).unwrap();
        assert_eq!(
            container.samples.as_bytes(),
            &[0xAA, 0xAA, 0xAA, 0xAA, 1, 2, 3, 4]
        );
        assert_eq!(container.num_frames(), 4);
    }

    #[test]
    fn test_empty_container() {
        let descriptor = StreamDescriptor::new(16000, 1, 2);
        let mut cursor = Cursor::new(Vec::new());
        write_container_to(&mut cursor, &descriptor, &SampleBuffer::new(), &SampleBuffer::new())
            .unwrap();
        cursor.set_position(0);

        let container = read_container_from(cursor).unwrap();
        assert!(container.samples.is_empty());
        assert_eq!(container.descriptor, descriptor);
    }

    #[test]
    fn test_misaligned_buffer_writes_nothing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("misaligned.wav");
        let descriptor = StreamDescriptor::new(16000, 2, 2);

        let result = write_container(
            &path,
            &descriptor,
            &SampleBuffer::new(),
            &SampleBuffer::from_bytes(vec![0; 3]),
        );

        assert!(matches!(result, Err(WavToolError::Format { .. })));
        assert!(!path.exists());
    }

    #[test]
    fn test_overwrites_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("existing.wav");
        std::fs::write(&path, b"not a wav file at all").unwrap();

        let descriptor = StreamDescriptor::new(16000, 1, 2);
        let samples = counting_bytes(20);
        write_container(&path, &descriptor, &SampleBuffer::new(), &samples).unwrap();

        assert_eq!(read_container(&path).unwrap().samples, samples);
    }

    #[test]
    fn test_read_nonexistent_file() {
        let result = read_container(Path::new("/nonexistent/path/audio.wav"));

        match result.unwrap_err() {
            WavToolError::Io { path, .. } => assert!(path.contains("nonexistent")),
            other => panic!("Expected Io error, got: {:?}", other),
        }
    }

    #[test]
    fn test_read_garbage_is_format_error() {
        let result = read_container_from(Cursor::new(b"RIFX garbage header".to_vec()));
        assert!(matches!(result, Err(WavToolError::Format { .. })));
    }

    #[test]
    fn test_read_truncated_data_is_format_error() {
        let descriptor = StreamDescriptor::new(16000, 1, 2);
        let mut cursor = Cursor::new(Vec::new());
        write_container_to(
            &mut cursor,
            &descriptor,
            &SampleBuffer::new(),
            &counting_bytes(200),
        )
        .unwrap();

        let mut bytes = cursor.into_inner();
        bytes.truncate(bytes.len() - 51);

        let result = read_container_from(Cursor::new(bytes));
        assert!(matches!(result, Err(WavToolError::Format { .. })));
    }

    #[test]
    fn test_create_in_missing_directory_is_io_error() {
        let descriptor = StreamDescriptor::new(16000, 1, 2);
        let result = write_container(
            Path::new("/nonexistent/dir/out.wav"),
            &descriptor,
            &SampleBuffer::new(),
            &SampleBuffer::new(),
        );
        assert!(matches!(result, Err(WavToolError::Io { .. })));
    }
}
