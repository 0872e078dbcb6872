//! Sampled noise grids.

/// A `width` x `height` grid of noise samples, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct NoiseMap {
    width: u32,
    height: u32,
    data: Vec<f32>,
}

impl NoiseMap {
    /// Build a map by evaluating `f(x, y)` for every cell.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Self
    where
        F: FnMut(u32, u32) -> f32,
    {
        let mut data = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// Width in cells.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in cells.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Value at cell `(x, y)`.
    ///
    /// # Panics
    /// Panics if the cell is outside the map.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> f32 {
        assert!(x < self.width && y < self.height, "cell ({}, {}) out of bounds", x, y);
        self.data[y as usize * self.width as usize + x as usize]
    }

    /// Row-major sample data.
    pub fn values(&self) -> &[f32] {
        &self.data
    }

    /// Smallest and largest sample, or `None` for an empty map.
    pub fn min_max(&self) -> Option<(f32, f32)> {
        let first = *self.data.first()?;
        Some(
            self.data
                .iter()
                .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v))),
        )
    }

    /// Quantize samples to 8-bit gray levels, clamping to `[0, 1]`.
    pub fn to_gray8(&self) -> Vec<u8> {
        self.data
            .iter()
            .map(|v| (v.clamp(0.0, 1.0) * 255.0).round() as u8)
            .collect()
    }
}
