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
    BoundaryLoop, DecompositionError, FillError, FillParams, Point3, Tolerances, Vector3,
    decompose, generate_fill,
    geometry::{spatial_element::SpatialElement, vector::VectorOps},
};

fn flat(xy: &[(f64, f64)]) -> BoundaryLoop<f64> {
    let points = xy.iter().map(|&(x, y)| Point3::from_vals([x, y, 0.0])).collect();
    BoundaryLoop::planar(points, Vector3::from_vals([0.0, 0.0, 1.0]))
}

fn square() -> BoundaryLoop<f64> {
    flat(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)])
}

fn l_shape() -> BoundaryLoop<f64> {
    flat(&[(0.0, 3.0), (0.0, 0.0), (3.0, 0.0), (3.0, 1.0), (1.0, 1.0), (1.0, 3.0)])
}

#[test]
fn test_flat_fill() {
    let fill = generate_fill(&square(), &FillParams::default()).unwrap();

    assert_eq!(fill.top.triangulation.triangles.len(), 2);
    assert_eq!(fill.top.normals.len(), 4);
    assert_eq!(fill.top.tangents.len(), 4);
    assert!(fill.bottom.is_none());
    assert!(fill.rim.is_none());
    assert!(fill.collision.is_empty());
    assert_eq!(fill.regions.len(), 1);
}

#[test]
fn test_slab_has_bottom_rim_and_collision() {
    let fill = generate_fill(&square(), &FillParams::slab(1.0)).unwrap();

    let bottom = fill.bottom.as_ref().unwrap();
    assert!(bottom.triangulation.points.iter().all(|p| p[2] == -1.0));
    assert!(bottom.normals.iter().all(|n| n[2] == -1.0));

    let rim = fill.rim.as_ref().unwrap();
    assert_eq!(rim.triangulation.points.len(), 16);
    assert_eq!(rim.triangulation.triangles.len(), 8);
    assert!(rim.triangulation.validate().is_ok());

    assert_eq!(fill.collision.len(), 1);
    assert_eq!(fill.collision[0].len(), 8);
}

#[test]
fn test_rim_normals_face_outwards() {
    let fill = generate_fill(&square(), &FillParams::slab(0.5)).unwrap();
    let rim = fill.rim.unwrap();
    let center = Point3::<f64>::from_vals([0.5, 0.5, 0.0]);

    for (p, n) in rim.triangulation.points.iter().zip(&rim.normals) {
        let out = Vector3::<f64>::from_vals([p[0] - center[0], p[1] - center[1], 0.0]);
        assert!(n.dot(&out) > 0.0);
        assert!((n.norm() - 1.0).abs() < 1e-9);
    }
}

#[test]
fn test_extrude_alone_makes_a_slab() {
    let params = FillParams::<f64>::default().with_extrude(Vector3::from_vals([0.0, 0.0, 2.0]));
    let fill = generate_fill(&square(), &params).unwrap();

    let bottom = fill.bottom.unwrap();
    assert!(bottom.triangulation.points.iter().all(|p| p[2] == -2.0));
}

#[test]
fn test_concave_slab_gets_one_hull_per_region() {
    let fill = generate_fill(&l_shape(), &FillParams::slab(1.0)).unwrap();
    assert_eq!(fill.regions.len(), 2);
    assert_eq!(fill.collision.len(), 2);
    assert!(fill.collision.iter().all(|c| c.len() == 8));
    assert!(fill.concave_recursions >= 1);
}

#[test]
fn test_without_delaunay_keeps_decomposition() {
    let fill = generate_fill(&l_shape(), &FillParams::default().without_delaunay()).unwrap();
    let plain = decompose(&l_shape(), Tolerances::default()).unwrap();
    assert_eq!(fill.top.triangulation, plain.triangulation);
}

#[test]
fn test_decomposition_failure_is_reported() {
    let err = generate_fill(&square().open(), &FillParams::default()).unwrap_err();
    assert_eq!(err, FillError::Decomposition(DecompositionError::OpenBoundary));
}
