//! Provider-phased Perlin noise field.

use super::{fractal, gradient_noise, Noise2D, NoiseMap};
use crate::provider::RandomProvider;

/// Half-width of the interval the field offsets are drawn from.
const OFFSET_EXTENT: f32 = 100_000.0;

/// 2D Perlin noise field whose phase is fixed by a [`RandomProvider`].
///
/// Construction draws `offset_x` then `offset_y` (two draws); sampling never
/// touches the provider again.
///
/// # Example
/// ```
/// use shuu_random::{PerlinNoise2D, RandomProvider};
///
/// let mut rng = RandomProvider::new(42);
/// let noise = PerlinNoise2D::new(&mut rng, 0.1);
/// let v = noise.sample(3.0, 4.0);
/// assert!((0.0..=1.0).contains(&v));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerlinNoise2D {
    scale: f32,
    offset_x: f32,
    offset_y: f32,
}

impl PerlinNoise2D {
    /// Create a field with offsets drawn from `provider`.
    pub fn new(provider: &mut RandomProvider, scale: f32) -> Self {
        let offset_x = provider.range_f32(-OFFSET_EXTENT, OFFSET_EXTENT);
        let offset_y = provider.range_f32(-OFFSET_EXTENT, OFFSET_EXTENT);
        Self {
            scale,
            offset_x,
            offset_y,
        }
    }

    /// Frequency multiplier applied to offset coordinates.
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Offsets fixing the field's phase.
    pub fn offsets(&self) -> (f32, f32) {
        (self.offset_x, self.offset_y)
    }

    /// Noise in `[0, 1]` at `((x + offset_x) * scale, (y + offset_y) * scale)`.
    pub fn sample(&self, x: f32, y: f32) -> f32 {
        let scale = self.scale as f64;
        let nx = (x as f64 + self.offset_x as f64) * scale;
        let ny = (y as f64 + self.offset_y as f64) * scale;
        let n = gradient_noise(nx, ny);
        ((n + 1.0) * 0.5).clamp(0.0, 1.0) as f32
    }

    /// Fractal (fBm) noise built from `octaves` calls to [`sample`](Self::sample).
    ///
    /// A single octave returns exactly `sample(x, y)`.
    pub fn fractal_noise(
        &self,
        x: f32,
        y: f32,
        octaves: u32,
        lacunarity: f32,
        persistence: f32,
    ) -> f32 {
        fractal(self, x, y, octaves, lacunarity, persistence)
    }

    /// Sample every integer cell of a `width` x `height` grid.
    pub fn noise_map(&self, width: u32, height: u32) -> NoiseMap {
        self.map(width, height)
    }
}

impl Noise2D for PerlinNoise2D {
    fn sample(&self, x: f32, y: f32) -> f32 {
        PerlinNoise2D::sample(self, x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_draws_two_values() {
        let mut rng = RandomProvider::new(42);
        let noise = PerlinNoise2D::new(&mut rng, 0.05);
        assert_eq!(rng.get_state(), 2);

        let (ox, oy) = noise.offsets();
        assert!((-OFFSET_EXTENT..=OFFSET_EXTENT).contains(&ox));
        assert!((-OFFSET_EXTENT..=OFFSET_EXTENT).contains(&oy));
    }

    #[test]
    fn test_perlin_deterministic() {
        let noise1 = PerlinNoise2D::new(&mut RandomProvider::new(42), 0.1);
        let noise2 = PerlinNoise2D::new(&mut RandomProvider::new(42), 0.1);
        assert_eq!(noise1, noise2);

        for i in 0..100 {
            let x = i as f32 * 0.7;
            let y = i as f32 * 1.3;
            assert_eq!(noise1.sample(x, y), noise2.sample(x, y));
        }
    }

    #[test]
    fn test_different_providers_shift_phase() {
        let a = PerlinNoise2D::new(&mut RandomProvider::new(1), 0.1);
        let b = PerlinNoise2D::new(&mut RandomProvider::new(2), 0.1);
        let differs = (0..50).any(|i| a.sample(i as f32, 0.5) != b.sample(i as f32, 0.5));
        assert!(differs);
    }

    #[test]
    fn test_sample_range() {
        let noise = PerlinNoise2D::new(&mut RandomProvider::new(7), 0.05);
        for i in 0..200 {
            for j in 0..200 {
                let v = noise.sample(i as f32, j as f32);
                assert!((0.0..=1.0).contains(&v));
            }
        }
    }

    #[test]
    fn test_single_octave_equals_sample() {
        let noise = PerlinNoise2D::new(&mut RandomProvider::new(99), 0.03);
        for i in 0..50 {
            let x = i as f32 * 1.7;
            let y = i as f32 * -0.4;
            assert_eq!(noise.fractal_noise(x, y, 1, 2.0, 0.5), noise.sample(x, y));
        }
    }

    #[test]
    fn test_noise_map_matches_samples() {
        let noise = PerlinNoise2D::new(&mut RandomProvider::new(5), 0.2);
        let map = noise.noise_map(8, 4);
        assert_eq!(map.width(), 8);
        assert_eq!(map.height(), 4);
        for y in 0..4 {
            for x in 0..8 {
                assert_eq!(map.get(x, y), noise.sample(x as f32, y as f32));
            }
        }
    }
}
