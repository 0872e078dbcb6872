//! Deterministic grayscale PNG output for noise maps.
//!
//! Uses fixed compression settings so the same map always encodes to the
//! same bytes, which makes the BLAKE3 hash usable as a determinism check.

use std::io::Write;
use std::path::Path;

use png::{BitDepth, ColorType, Compression, Encoder, FilterType};
use thiserror::Error;

use crate::noise::NoiseMap;

/// Errors from PNG operations.
#[derive(Debug, Error)]
pub enum PngError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PNG encoding error: {0}")]
    Encoding(#[from] png::EncodingError),

    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),
}

/// PNG export configuration for deterministic output.
#[derive(Debug, Clone)]
pub struct PngConfig {
    /// Compression level. Use a fixed value for determinism.
    pub compression: Compression,
    /// Filter type. Use a fixed value for determinism.
    pub filter: FilterType,
}

impl Default for PngConfig {
    fn default() -> Self {
        Self {
            compression: Compression::Default,
            filter: FilterType::NoFilter,
        }
    }
}

impl PngConfig {
    /// Smaller files, slower encoding.
    pub fn best_compression() -> Self {
        Self {
            compression: Compression::Best,
            filter: FilterType::Paeth,
        }
    }
}

/// Write a noise map as an 8-bit grayscale PNG to any writer.
pub fn write_noise_map_to_writer<W: Write>(
    map: &NoiseMap,
    writer: W,
    config: &PngConfig,
) -> Result<(), PngError> {
    if map.width() == 0 || map.height() == 0 {
        return Err(PngError::InvalidDimensions(format!(
            "{}x{} map has no pixels",
            map.width(),
            map.height()
        )));
    }

    let mut encoder = Encoder::new(writer, map.width(), map.height());
    encoder.set_color(ColorType::Grayscale);
    encoder.set_depth(BitDepth::Eight);
    encoder.set_compression(config.compression);
    encoder.set_filter(config.filter);

    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(&map.to_gray8())?;

    Ok(())
}

/// Write a noise map as an 8-bit grayscale PNG file.
pub fn write_noise_map(map: &NoiseMap, path: &Path, config: &PngConfig) -> Result<(), PngError> {
    let file = std::fs::File::create(path)?;
    let writer = std::io::BufWriter::new(file);

    write_noise_map_to_writer(map, writer, config)
}

/// Compute the BLAKE3 hash of PNG data.
pub fn hash_png(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}

/// Encode to a `Vec<u8>` and return the bytes with their hash.
pub fn encode_noise_map_with_hash(
    map: &NoiseMap,
    config: &PngConfig,
) -> Result<(Vec<u8>, String), PngError> {
    let mut data = Vec::new();
    write_noise_map_to_writer(map, &mut data, config)?;
    let hash = hash_png(&data);
    Ok((data, hash))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PerlinNoise2D, RandomProvider};

    #[test]
    fn test_noise_png_deterministic() {
        let noise = PerlinNoise2D::new(&mut RandomProvider::new(42), 0.05);
        let map = noise.noise_map(64, 32);
        let config = PngConfig::default();

        let (data1, hash1) = encode_noise_map_with_hash(&map, &config).unwrap();
        let (data2, hash2) = encode_noise_map_with_hash(&map, &config).unwrap();

        assert_eq!(data1, data2);
        assert_eq!(hash1, hash2);
        assert_eq!(hash1.len(), 64);
        assert_eq!(&data1[1..4], b"PNG");
    }

    #[test]
    fn test_empty_map_rejected() {
        let map = NoiseMap::from_fn(0, 4, |_, _| 0.0);
        let err = encode_noise_map_with_hash(&map, &PngConfig::default()).unwrap_err();
        assert!(matches!(err, PngError::InvalidDimensions(_)));
    }

    #[test]
    fn test_write_noise_map_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("noise.png");
        let map = NoiseMap::from_fn(16, 16, |x, y| ((x + y) % 2) as f32);

        write_noise_map(&map, &path, &PngConfig::best_compression()).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        let (expected, _) =
            encode_noise_map_with_hash(&map, &PngConfig::best_compression()).unwrap();
        assert_eq!(bytes, expected);
    }
}
