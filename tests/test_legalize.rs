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
    BoundaryLoop, GenTriangle, Legalize, LegalizeOpts, Point2, Point3, Tolerances,
    TopologyError, Triangulate2D, Triangulation2, TriangulationOpts, Vector3, decompose,
    geometry::{point::PointOps, spatial_element::SpatialElement},
};

fn spiral(n: usize) -> Vec<Point2<f64>> {
    (0..n)
        .map(|i| {
            let r = (i as f64).sqrt();
            let a = i as f64 * 2.399963;
            Point2::from_vals([r * a.cos(), r * a.sin()])
        })
        .collect()
}

/// No point strictly inside any circumcircle, up to `slack`.
fn is_delaunay(t: &Triangulation2<f64>, slack: f64) -> bool {
    t.live_triangles().all(|(i, tri)| {
        let circle = t.circumcircle(i, 1e-8);
        t.points
            .iter()
            .enumerate()
            .filter(|(v, _)| !tri.has_vertex(*v))
            .all(|(_, p)| circle.center.distance_squared_to(p) >= circle.radius_sq - slack)
    })
}

#[test]
fn test_planar_pass_reaches_delaunay() {
    let mut t = Triangulation2::triangulate(&spiral(40), &TriangulationOpts::default());
    let report = t.legalize(&LegalizeOpts::default()).unwrap();

    assert!(report.changed);
    assert!(report.flips > 0);
    assert!(t.validate().is_ok());
    assert!(is_delaunay(&t, 1e-6));
}

#[test]
fn test_second_planar_pass_changes_nothing() {
    let mut t = Triangulation2::triangulate(&spiral(25), &TriangulationOpts::default());
    t.legalize(&LegalizeOpts::default()).unwrap();
    let snapshot = t.clone();

    let report = t.legalize(&LegalizeOpts::default()).unwrap();
    assert!(!report.changed);
    assert_eq!(report.flips, 0);
    assert_eq!(t, snapshot);
}

#[test]
fn test_legalize_after_insertions() {
    let mut t = Triangulation2::<f64>::with_borders(
        Point2::from_vals([0.0, 0.0]),
        Point2::from_vals([4.0, 4.0]),
    );
    for (x, y) in [(1.0, 1.0), (3.0, 1.0), (2.0, 3.0), (2.0, 2.0), (0.5, 3.5), (2.0, 0.0)] {
        t.add_point(Point2::from_vals([x, y]), 1e-8);
    }
    assert_eq!(t.points.len(), 10);
    assert!(t.validate().is_ok());

    t.legalize(&LegalizeOpts::default()).unwrap();
    assert!(t.validate().is_ok());
    assert!(is_delaunay(&t, 1e-6));
}

#[test]
fn test_link_without_shared_edge_aborts() {
    let points: Vec<Point2<f64>> =
        (0..6).map(|i| Point2::from_vals([i as f64, (i % 2) as f64])).collect();
    let mut t = Triangulation2::from_parts(points, &[[0, 1, 2], [3, 4, 5]]);
    t.triangles[0].adjs[0] = Some(1);

    assert_eq!(
        t.legalize(&LegalizeOpts::default()),
        Err(TopologyError::MissingOpposite { triangle: 1, neighbour: 0 })
    );
}

#[test]
fn test_surface_pass_keeps_links_consistent() {
    let corners = [(0.0, 3.0), (0.0, 0.0), (3.0, 0.0), (3.0, 1.0), (1.0, 1.0), (1.0, 3.0)];
    let points: Vec<Point3<f64>> = corners
        .iter()
        .map(|&(x, y)| Point3::from_vals([x, y, 0.0]))
        .collect();
    let boundary = BoundaryLoop::planar(points, Vector3::from_vals([0.0, 0.0, 1.0]));
    let mut t = decompose(&boundary, Tolerances::default()).unwrap().triangulation;

    let report = t.legalize(&LegalizeOpts::default()).unwrap();
    assert_eq!(report.flips, 1);
    assert_eq!(t.triangles.len(), 4);
    assert!(t.validate().is_ok());

    let again = t.legalize(&LegalizeOpts::default()).unwrap();
    assert!(!again.changed);
}

#[test]
fn test_surface_pass_on_disabled_triangle() {
    let points: Vec<Point3<f64>> = vec![
        Point3::from_vals([0.0, 0.0, 0.0]),
        Point3::from_vals([1.0, 0.0, 0.0]),
        Point3::from_vals([0.0, 1.0, 0.0]),
    ];
    let mut t = trifill::Triangulation3::from_parts(points, &[[0, 1, 2]]);
    t.triangles.push(GenTriangle {
        enabled: false,
        ..GenTriangle::new(0, 2, 1)
    });

    let report = t.legalize(&LegalizeOpts::default()).unwrap();
    assert_eq!(report.flips, 0);
}
