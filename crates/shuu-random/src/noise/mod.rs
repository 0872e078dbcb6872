//! Coherent noise.
//!
//! The gradient primitive is pure Rust with a fixed permutation table, so a
//! noise field is determined entirely by the offsets drawn from its
//! [`RandomProvider`](crate::RandomProvider).

mod fbm;
mod gradient;
mod map;
mod perlin;
mod settings;

pub use fbm::{fractal, Fbm};
pub use gradient::gradient_noise;
pub use map::NoiseMap;
pub use perlin::PerlinNoise2D;
pub use settings::NoiseSettings;

/// Trait for 2D noise samplers.
pub trait Noise2D {
    /// Sample the noise at a given 2D coordinate.
    fn sample(&self, x: f32, y: f32) -> f32;

    /// Sample every integer cell of a `width` x `height` grid.
    fn map(&self, width: u32, height: u32) -> NoiseMap {
        NoiseMap::from_fn(width, height, |x, y| self.sample(x as f32, y as f32))
    }
}

impl<F> Noise2D for F
where
    F: Fn(f32, f32) -> f32,
{
    fn sample(&self, x: f32, y: f32) -> f32 {
        self(x, y)
    }
}

/// Quintic interpolation.
#[inline]
pub(crate) fn quintic(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

/// Linear interpolation.
#[inline]
pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}
