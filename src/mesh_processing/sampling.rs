// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    geometry::{point::Point2, spatial_element::SpatialElement},
    numeric::scalar::Scalar,
};

/// Jittered grid over the unit square.
///
/// One sample per cell for cells `-1..=samples` on both axes. Each coordinate is the cell
/// center moved by up to half a cell times `disturbance`, then clamped to `[0, 1]`; the
/// outer ring of cells lands on the square's border so the samples cover it edge to edge.
pub fn jittered_grid<T: Scalar, R: Rng + ?Sized>(
    samples: usize,
    disturbance: T,
    rng: &mut R,
) -> Vec<Point2<T>> {
    if samples == 0 {
        return Vec::new();
    }

    let count = T::of(samples as f64);
    let side = samples + 2;
    let mut out = Vec::with_capacity(side * side);

    for sx in -1..=samples as i64 {
        for sy in -1..=samples as i64 {
            let x = jittered(sx, count, disturbance, rng);
            let y = jittered(sy, count, disturbance, rng);
            out.push(Point2::new([x, y]));
        }
    }
    out
}

#[inline(always)]
fn jittered<T: Scalar, R: Rng + ?Sized>(cell: i64, count: T, disturbance: T, rng: &mut R) -> T {
    let jitter = T::of(rng.random_range(-0.5f64..0.5)) * disturbance;
    ((T::of(cell as f64) + T::of(0.5) + jitter) / count)
        .max(T::zero())
        .min(T::one())
}

/// [`jittered_grid`] driven by a [`StdRng`] seeded with `seed`.
pub fn jittered_grid_seeded<T: Scalar>(samples: usize, disturbance: T, seed: u64) -> Vec<Point2<T>> {
    let mut rng = StdRng::seed_from_u64(seed);
    jittered_grid(samples, disturbance, &mut rng)
}
