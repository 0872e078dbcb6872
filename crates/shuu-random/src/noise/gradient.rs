//! Fixed-table 2D gradient noise.

use super::{lerp, quintic};

/// Ken Perlin's reference permutation.
const PERMUTATION: [u8; 256] = [
    151, 160, 137, 91, 90, 15, 131, 13, 201, 95, 96, 53, 194, 233, 7, 225,
    140, 36, 103, 30, 69, 142, 8, 99, 37, 240, 21, 10, 23, 190, 6, 148,
    247, 120, 234, 75, 0, 26, 197, 62, 94, 252, 219, 203, 117, 35, 11, 32,
    57, 177, 33, 88, 237, 149, 56, 87, 174, 20, 125, 136, 171, 168, 68, 175,
    74, 165, 71, 134, 139, 48, 27, 166, 77, 146, 158, 231, 83, 111, 229, 122,
    60, 211, 133, 230, 220, 105, 92, 41, 55, 46, 245, 40, 244, 102, 143, 54,
    65, 25, 63, 161, 1, 216, 80, 73, 209, 76, 132, 187, 208, 89, 18, 169,
    200, 196, 135, 130, 116, 188, 159, 86, 164, 100, 109, 198, 173, 186, 3, 64,
    52, 217, 226, 250, 124, 123, 5, 202, 38, 147, 118, 126, 255, 82, 85, 212,
    207, 206, 59, 227, 47, 16, 58, 17, 182, 189, 28, 42, 223, 183, 170, 213,
    119, 248, 152, 2, 44, 154, 163, 70, 221, 153, 101, 155, 167, 43, 172, 9,
    129, 22, 39, 253, 19, 98, 108, 110, 79, 113, 224, 232, 178, 185, 112, 104,
    218, 246, 97, 228, 251, 34, 242, 193, 238, 210, 144, 12, 191, 179, 162, 241,
    81, 51, 145, 235, 249, 14, 239, 107, 49, 192, 214, 31, 181, 199, 106, 157,
    184, 84, 204, 176, 115, 121, 50, 45, 127, 4, 150, 254, 138, 236, 205, 93,
    222, 114, 67, 29, 24, 72, 243, 141, 128, 195, 78, 66, 215, 61, 156, 180,
];

/// Gradient vectors for 2D.
const GRAD2: [[f64; 2]; 8] = [
    [1.0, 0.0],
    [-1.0, 0.0],
    [0.0, 1.0],
    [0.0, -1.0],
    [1.0, 1.0],
    [-1.0, 1.0],
    [1.0, -1.0],
    [-1.0, -1.0],
];

/// Hash function for grid coordinates.
#[inline]
fn hash(x: i64, y: i64) -> usize {
    let xi = (x & 255) as usize;
    let yi = (y & 255) as usize;
    let inner = PERMUTATION[yi] as usize;
    PERMUTATION[(xi + inner) & 255] as usize
}

/// Compute gradient dot product.
#[inline]
fn grad(hash: usize, x: f64, y: f64) -> f64 {
    let g = &GRAD2[hash & 7];
    g[0] * x + g[1] * y
}

/// Classic 2D gradient noise, roughly in `[-1, 1]`, zero at lattice points.
///
/// The lattice repeats every 256 cells.
pub fn gradient_noise(x: f64, y: f64) -> f64 {
    // Grid cell coordinates
    let x0 = x.floor() as i64;
    let y0 = y.floor() as i64;
    let x1 = x0 + 1;
    let y1 = y0 + 1;

    // Fractional parts
    let fx = x - x0 as f64;
    let fy = y - y0 as f64;

    let u = quintic(fx);
    let v = quintic(fy);

    let n00 = grad(hash(x0, y0), fx, fy);
    let n10 = grad(hash(x1, y0), fx - 1.0, fy);
    let n01 = grad(hash(x0, y1), fx, fy - 1.0);
    let n11 = grad(hash(x1, y1), fx - 1.0, fy - 1.0);

    let nx0 = lerp(n00, n10, u);
    let nx1 = lerp(n01, n11, u);
    lerp(nx0, nx1, v)
}
