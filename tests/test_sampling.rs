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

use trifill::{
    Triangulate2D, Triangulation2, TriangulationOpts, jittered_grid, jittered_grid_seeded,
};
use rand::{SeedableRng, rngs::StdRng};

#[test]
fn test_grid_matches_seeded_helper() {
    let mut rng = StdRng::seed_from_u64(69);
    let a = jittered_grid::<f64, _>(5, 0.5, &mut rng);
    let b = jittered_grid_seeded::<f64>(5, 0.5, 69);
    assert_eq!(a, b);
    assert_eq!(a.len(), 49);
}

#[test]
fn test_zero_samples() {
    assert!(jittered_grid_seeded::<f64>(0, 0.5, 1).is_empty());
}

#[test]
fn test_grid_covers_unit_square() {
    let cloud = jittered_grid_seeded::<f64>(6, 0.3, 3);
    let t = Triangulation2::triangulate(&cloud, &TriangulationOpts::default());

    assert!(t.validate().is_ok());
    let area: f64 = t
        .live_triangles()
        .map(|(i, _)| {
            let [a, b, c] = t.corners(i);
            ((b[0] - a[0]) * (c[1] - a[1]) - (b[1] - a[1]) * (c[0] - a[0])).abs() / 2.0
        })
        .sum();
    assert!((area - 1.0).abs() < 1e-9);
}
