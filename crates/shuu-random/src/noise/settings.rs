//! Serializable noise rendering settings.

use serde::{Deserialize, Serialize};

use super::{Fbm, Noise2D, NoiseMap, PerlinNoise2D};
use crate::provider::RandomProvider;

/// Parameters for rendering a fractal Perlin noise map.
///
/// Missing fields take their defaults, so a partial JSON object is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseSettings {
    /// Seed of the provider that phases the field.
    pub seed: i32,
    /// Frequency multiplier.
    pub scale: f32,
    /// Map width in cells.
    pub width: u32,
    /// Map height in cells.
    pub height: u32,
    /// Number of fBm octaves.
    pub octaves: u32,
    /// Frequency multiplier per octave.
    pub lacunarity: f32,
    /// Amplitude multiplier per octave.
    pub persistence: f32,
}

impl Default for NoiseSettings {
    fn default() -> Self {
        Self {
            seed: 0,
            scale: 0.05,
            width: 256,
            height: 256,
            octaves: 4,
            lacunarity: 2.0,
            persistence: 0.5,
        }
    }
}

impl NoiseSettings {
    /// Build the fractal sampler described by these settings.
    pub fn sampler(&self) -> Fbm<PerlinNoise2D> {
        let mut provider = RandomProvider::new(self.seed);
        Fbm::new(PerlinNoise2D::new(&mut provider, self.scale))
            .with_octaves(self.octaves)
            .with_lacunarity(self.lacunarity)
            .with_persistence(self.persistence)
    }

    /// Render the map.
    pub fn render(&self) -> NoiseMap {
        self.sampler().map(self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings: NoiseSettings =
            serde_json::from_str(r#"{ "seed": 9, "width": 32 }"#).unwrap();
        assert_eq!(
            settings,
            NoiseSettings {
                seed: 9,
                width: 32,
                ..NoiseSettings::default()
            }
        );
    }

    #[test]
    fn test_render_matches_fractal_noise() {
        let settings = NoiseSettings {
            seed: 17,
            width: 6,
            height: 5,
            octaves: 3,
            ..NoiseSettings::default()
        };
        let map = settings.render();

        let noise = PerlinNoise2D::new(&mut RandomProvider::new(17), settings.scale);
        for y in 0..5 {
            for x in 0..6 {
                assert_eq!(
                    map.get(x, y),
                    noise.fractal_noise(x as f32, y as f32, 3, 2.0, 0.5)
                );
            }
        }
    }
}
