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

use smallvec::{SmallVec, smallvec};
use tracing::debug;

use crate::{
    geometry::{
        point::Point2,
        spatial_element::SpatialElement,
        vector::Cross2,
    },
    mesh::basic_types::{GenTriangle, SplitResult, SplitResultKind, Triangulation2},
    numeric::scalar::Scalar,
};

impl<T: Scalar> Triangulation2<T> {
    /// Two linked triangles covering the box `[min, max]`, ready for [`Self::add_point`].
    pub fn with_borders(min: Point2<T>, max: Point2<T>) -> Self {
        let points = vec![
            Point2::new([min[0], min[1]]),
            Point2::new([max[0], min[1]]),
            Point2::new([min[0], max[1]]),
            Point2::new([max[0], max[1]]),
        ];

        let mut left = GenTriangle::new(1, 0, 2);
        left.adjs[1] = Some(1);
        let mut right = GenTriangle::new(3, 1, 2);
        right.adjs[0] = Some(0);

        Self {
            points,
            triangles: vec![left, right],
        }
    }

    /// Per-edge containment products of `p` against triangle `t`.
    ///
    /// Entry `i` is the signed sub-area on the inner side of the edge opposite `verts[i]`
    /// times the full signed area, so it is non-negative inside and zero on that edge.
    /// `None` for triangles whose area is below `eps`.
    fn containment(&self, t: usize, p: &Point2<T>, eps: T) -> Option<[T; 3]> {
        let [a, b, c] = self.corners(t);

        let full = [
            (c - b).cross(&(a - b)),
            (a - c).cross(&(b - c)),
            (b - a).cross(&(c - a)),
        ];
        if full[0] * full[0] < eps {
            return None;
        }

        let inside = [
            (c - b).cross(&(*p - b)),
            (a - c).cross(&(*p - c)),
            (b - a).cross(&(*p - a)),
        ];
        Some([inside[0] * full[0], inside[1] * full[1], inside[2] * full[2]])
    }

    fn locate(&self, p: &Point2<T>, eps: T) -> Option<(usize, [T; 3])> {
        self.live_triangles().find_map(|(t, _)| {
            let checks = self.containment(t, p, eps)?;
            let min = checks[0].min(checks[1]).min(checks[2]);
            (min >= -eps).then_some((t, checks))
        })
    }

    /// First live, non-degenerate triangle containing `p` (boundary included).
    pub fn find_triangle(&self, p: &Point2<T>, eps: T) -> Option<usize> {
        self.locate(p, eps).map(|(t, _)| t)
    }

    /// Splits `t` at vertex `v` placed on the edge opposite `slot`.
    ///
    /// `t` keeps the half next to `verts[slot + 1]`; the returned clone takes the other half.
    /// Links are left stale for the caller to [`reparent`](Self::reparent).
    pub fn cut_edge(&mut self, t: usize, slot: usize, v: usize) -> usize {
        let mut clone = self.triangles[t];
        clone.verts[(slot + 1) % 3] = v;
        self.triangles[t].verts[(slot + 2) % 3] = v;
        self.push_triangle(clone)
    }

    /// Inserts `p` into the triangle containing it.
    ///
    /// Points outside every triangle and points within `eps` of an existing vertex are
    /// ignored (`NoSplit`, nothing appended). A point on an edge splits both triangles
    /// sharing that edge.
    pub fn add_point(&mut self, p: Point2<T>, eps: T) -> SplitResult {
        let Some((center, checks)) = self.locate(&p, eps) else {
            debug!(x = ?p[0], y = ?p[1], "point outside triangulation, not inserted");
            return SplitResult::none();
        };

        let on_edges: SmallVec<[usize; 3]> = (0..3).filter(|&i| checks[i] < eps).collect();
        match on_edges.as_slice() {
            [] => self.split_face(center, p),
            &[slot] => self.split_edge(center, slot, p),
            _ => {
                debug!(triangle = center, "point duplicates a vertex, not inserted");
                SplitResult::none()
            }
        }
    }

    fn split_face(&mut self, center: usize, p: Point2<T>) -> SplitResult {
        let v = self.push_point(p);

        let base = self.triangles[center];
        let mut right = base;
        right.verts[1] = v;
        let mut left = base;
        left.verts[2] = v;
        self.triangles[center].verts[0] = v;

        let right = self.push_triangle(right);
        let left = self.push_triangle(left);
        self.reparent(&[center, right, left]);

        SplitResult {
            kind: SplitResultKind::SplitFace,
            vertex: Some(v),
            triangles: smallvec![center, right, left],
        }
    }

    fn split_edge(&mut self, center: usize, slot: usize, p: Point2<T>) -> SplitResult {
        let v = self.push_point(p);
        let mut touched: SmallVec<[usize; 4]> = smallvec![center];

        let neighbour = self.triangles[center].adjs[slot]
            .filter(|&n| n < self.triangles.len() && self.triangles[n].enabled);
        if let Some(n) = neighbour {
            if let Some(f) = self.triangles[n].opposite_of(&self.triangles[center]) {
                let clone = self.cut_edge(n, f, v);
                touched.push(n);
                touched.push(clone);
            }
        }

        let clone = self.cut_edge(center, slot, v);
        touched.push(clone);
        self.reparent(&touched);

        SplitResult {
            kind: SplitResultKind::SplitEdge,
            vertex: Some(v),
            triangles: touched,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bordered() -> Triangulation2<f64> {
        Triangulation2::with_borders(Point2::from_vals([0.0, 0.0]), Point2::from_vals([4.0, 4.0]))
    }

    #[test]
    fn borders_are_linked_and_clockwise() {
        let t = bordered();
        assert!(t.validate().is_ok());
        for (i, _) in t.live_triangles() {
            let [a, b, c] = t.corners(i);
            assert!((c - a).cross(&(b - a)) > 0.0);
        }
    }

    #[test]
    fn interior_point_splits_face_into_three() {
        let mut t = bordered();
        let r = t.add_point(Point2::from_vals([1.0, 1.0]), 1e-8);
        assert_eq!(r.kind, SplitResultKind::SplitFace);
        assert_eq!(r.vertex, Some(4));
        assert_eq!(t.triangles.len(), 4);
        assert!(t.validate().is_ok());
    }

    #[test]
    fn point_on_shared_edge_splits_both_sides() {
        let mut t = bordered();
        // diagonal from (4,0) to (0,4)
        let r = t.add_point(Point2::from_vals([2.0, 2.0]), 1e-8);
        assert_eq!(r.kind, SplitResultKind::SplitEdge);
        assert_eq!(r.triangles.len(), 4);
        assert_eq!(t.triangles.len(), 4);
        assert!(t.validate().is_ok());
        for (i, _) in t.live_triangles() {
            assert!(t.triangles[i].has_vertex(4));
        }
    }

    #[test]
    fn point_on_outer_edge_splits_one_triangle() {
        let mut t = bordered();
        let r = t.add_point(Point2::from_vals([2.0, 0.0]), 1e-8);
        assert_eq!(r.kind, SplitResultKind::SplitEdge);
        assert_eq!(t.triangles.len(), 3);
        assert!(t.validate().is_ok());
    }

    #[test]
    fn outside_point_is_ignored() {
        let mut t = bordered();
        let r = t.add_point(Point2::from_vals([5.0, 5.0]), 1e-8);
        assert_eq!(r, SplitResult::none());
        assert_eq!(t.points.len(), 4);
    }
}
