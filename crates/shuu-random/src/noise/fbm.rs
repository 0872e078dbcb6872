//! Fractal Brownian Motion (FBM) noise.
//!
//! FBM layers multiple octaves of noise to create natural-looking patterns.

use super::Noise2D;

/// Sum `octaves` samples of `noise` at increasing frequency and decreasing
/// amplitude, normalized by the total amplitude.
///
/// Zero octaves yield `0.0`. One octave returns the base sample unchanged.
pub fn fractal<N: Noise2D + ?Sized>(
    noise: &N,
    x: f32,
    y: f32,
    octaves: u32,
    lacunarity: f32,
    persistence: f32,
) -> f32 {
    let mut total = 0.0;
    let mut amplitude = 1.0;
    let mut frequency = 1.0;
    let mut max_value = 0.0; // Used for normalizing

    for _ in 0..octaves {
        total += noise.sample(x * frequency, y * frequency) * amplitude;
        max_value += amplitude;
        amplitude *= persistence;
        frequency *= lacunarity;
    }

    if max_value == 0.0 {
        return 0.0;
    }
    total / max_value
}

/// Fractal Brownian Motion sampler.
///
/// Wraps a base sampler with fixed octave settings so the result can be
/// used anywhere a [`Noise2D`] is expected.
#[derive(Debug, Clone)]
pub struct Fbm<N: Noise2D> {
    /// The base noise function.
    noise: N,
    /// Number of octaves to combine.
    octaves: u32,
    /// Amplitude multiplier per octave. Typical value: 0.5.
    persistence: f32,
    /// Frequency multiplier per octave. Typical value: 2.0.
    lacunarity: f32,
}

impl<N: Noise2D> Fbm<N> {
    /// Create a new FBM generator with default settings.
    ///
    /// Default: 4 octaves, 0.5 persistence, 2.0 lacunarity.
    pub fn new(noise: N) -> Self {
        Self {
            noise,
            octaves: 4,
            persistence: 0.5,
            lacunarity: 2.0,
        }
    }

    /// Set the number of octaves.
    pub fn with_octaves(mut self, octaves: u32) -> Self {
        self.octaves = octaves;
        self
    }

    /// Set the persistence (amplitude multiplier per octave).
    pub fn with_persistence(mut self, persistence: f32) -> Self {
        self.persistence = persistence;
        self
    }

    /// Set the lacunarity (frequency multiplier per octave).
    pub fn with_lacunarity(mut self, lacunarity: f32) -> Self {
        self.lacunarity = lacunarity;
        self
    }
}

impl<N: Noise2D> Noise2D for Fbm<N> {
    fn sample(&self, x: f32, y: f32) -> f32 {
        fractal(
            &self.noise,
            x,
            y,
            self.octaves,
            self.lacunarity,
            self.persistence,
        )
    }
}
