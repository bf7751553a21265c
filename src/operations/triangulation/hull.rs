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

use std::cmp::Ordering;

use tracing::debug;

use crate::{
    config::TriangulationOpts,
    geometry::{
        point::{Point, Point2, PointOps},
        vector::Cross2,
    },
    kernel::predicates::{Circle, circumcenter},
    mesh::basic_types::{GenTriangle, SplitResultKind, TriangleEdge, Triangulation2},
    numeric::scalar::Scalar,
    operations::triangulation::Triangulate2D,
};

struct Seed<T: Scalar> {
    /// Cloud indices, already in storage order.
    indices: [usize; 3],
    circle: Circle<T, 2>,
}

#[inline(always)]
fn by_distance<T: Scalar>(from: &Point2<T>, a: &Point2<T>, b: &Point2<T>) -> Ordering {
    from.distance_squared_to(a)
        .partial_cmp(&from.distance_squared_to(b))
        .unwrap_or(Ordering::Equal)
}

/// Smallest circumcircle among triangles spanned by the point nearest the centroid and its
/// nearest neighbour.
fn select_seed<T: Scalar>(cloud: &[Point2<T>], eps: T) -> Option<Seed<T>> {
    let mean = Point::mean(cloud);
    let i0 = (0..cloud.len()).min_by(|&a, &b| by_distance(&mean, &cloud[a], &cloud[b]))?;
    let p0 = cloud[i0];

    let mut order: Vec<usize> = (0..cloud.len())
        .filter(|&i| i != i0 && p0.distance_squared_to(&cloud[i]) > eps)
        .collect();
    order.sort_by(|&a, &b| by_distance(&p0, &cloud[a], &cloud[b]));

    let (&i1, rest) = order.split_first()?;
    let p1 = cloud[i1];

    let mut best: Option<(usize, Circle<T, 2>)> = None;
    for &i in rest {
        let d = p0.distance_squared_to(&cloud[i]);
        if best.is_some_and(|(_, c)| c.radius_sq < d) {
            break;
        }
        let (center, valid) = circumcenter(&p0, &p1, &cloud[i], eps);
        if !valid {
            continue;
        }
        let radius_sq = center.distance_squared_to(&p0);
        if best.is_none_or(|(_, c)| radius_sq < c.radius_sq) {
            best = Some((i, Circle { center, radius_sq }));
        }
    }

    let (i2, circle) = best?;
    let p2 = cloud[i2];
    let indices = if (p2 - p0).cross(&(p1 - p0)) < T::zero() {
        [i1, i0, i2]
    } else {
        [i2, i0, i1]
    };
    Some(Seed { indices, circle })
}

/// Longest cyclic run of `true`, as `(start, count)`. `None` when nothing or everything is
/// visible.
fn longest_visible_run(visible: &[bool]) -> Option<(usize, usize)> {
    let n = visible.len();
    if visible.iter().all(|&v| v) {
        return None;
    }

    let mut best: Option<(usize, usize)> = None;
    for start in (0..n).filter(|&i| visible[i] && !visible[(i + n - 1) % n]) {
        let count = (0..n).take_while(|&k| visible[(start + k) % n]).count();
        if best.is_none_or(|(_, c)| count > c) {
            best = Some((start, count));
        }
    }
    best
}

impl<T: Scalar> Triangulation2<T> {
    #[inline(always)]
    fn edge_visible(&self, edge: &TriangleEdge, p: &Point2<T>, visibility: T) -> bool {
        let (prev, next) = self.triangles[edge.triangle].edge(edge.slot);
        let (prev, next) = (self.points[prev], self.points[next]);
        (next - prev).cross(&(*p - prev)) > visibility
    }

    /// Fans `p` over `count` hull edges starting at `start` and splices the two new outer
    /// edges into `hull` in their place.
    fn grow_hull(&mut self, hull: &mut Vec<TriangleEdge>, p: Point2<T>, start: usize, count: usize) {
        let n = hull.len();
        let v = self.push_point(p);

        let mut next_hull = Vec::with_capacity(n - count + 2);
        let mut prev_fan: Option<usize> = None;

        for k in 0..count {
            let edge = hull[(start + k) % n];
            let (a, b) = self.triangles[edge.triangle].edge(edge.slot);
            let idx = self.triangles.len();

            let mut tri = GenTriangle::new(a, v, b);
            tri.adjs[1] = Some(edge.triangle);
            self.triangles[edge.triangle].adjs[edge.slot] = Some(idx);

            match prev_fan {
                Some(pf) => {
                    tri.adjs[2] = Some(pf);
                    self.triangles[pf].adjs[0] = Some(idx);
                }
                None => next_hull.push(TriangleEdge::new(idx, 2)),
            }

            self.triangles.push(tri);
            prev_fan = Some(idx);
        }

        if let Some(last) = prev_fan {
            next_hull.push(TriangleEdge::new(last, 0));
        }
        next_hull.extend((count..n).map(|k| hull[(start + k) % n]));
        *hull = next_hull;
    }
}

impl<T: Scalar> Triangulate2D<T> for Triangulation2<T> {
    /// Incremental convex hull triangulation.
    ///
    /// Seeds with the smallest circumcircle near the cloud's centroid, then adds points in
    /// order of distance from that circle's center, fanning each one over the hull edges it
    /// can see. Points that see no hull edge are inserted with [`Self::add_point`]. Only
    /// points that end up in a triangle are stored, in insertion order; every triangle has
    /// `(p2 - p0) x (p1 - p0) >= 0`.
    fn triangulate(cloud: &[Point2<T>], opts: &TriangulationOpts<T>) -> Self {
        let tol = &opts.tolerances;
        let mut out = Self::new();

        if cloud.len() < 3 {
            debug!(points = cloud.len(), "too few points to triangulate");
            return out;
        }
        let Some(seed) = select_seed(cloud, tol.epsilon) else {
            debug!(points = cloud.len(), "point cloud is collinear, nothing to triangulate");
            return out;
        };

        for i in seed.indices {
            out.push_point(cloud[i]);
        }
        out.push_triangle(GenTriangle::new(0, 1, 2));
        let mut hull: Vec<TriangleEdge> = (0..3).map(|s| TriangleEdge::new(0, s)).collect();

        let mut remaining: Vec<usize> = (0..cloud.len())
            .filter(|i| !seed.indices.contains(i))
            .collect();
        let center = seed.circle.center;
        remaining.sort_by(|&a, &b| by_distance(&center, &cloud[b], &cloud[a]));

        let mut taken = 0;
        while let Some(i) = remaining.pop() {
            if opts.max_insertions.is_some_and(|max| taken >= max) {
                debug!(taken, left = remaining.len() + 1, "insertion cap reached");
                break;
            }
            taken += 1;

            let p = cloud[i];
            let visible: Vec<bool> = hull
                .iter()
                .map(|e| out.edge_visible(e, &p, tol.visibility))
                .collect();

            match longest_visible_run(&visible) {
                Some((start, count)) => out.grow_hull(&mut hull, p, start, count),
                None => {
                    if out.add_point(p, tol.epsilon).kind != SplitResultKind::NoSplit {
                        hull = out.hull_edges();
                    }
                }
            }
        }

        debug!(
            points = out.points.len(),
            triangles = out.triangles.len(),
            "planar triangulation built"
        );
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_visible_run() {
        assert_eq!(longest_visible_run(&[false, true, true, false]), Some((1, 2)));
    }

    #[test]
    fn run_wraps_around_the_end() {
        assert_eq!(longest_visible_run(&[true, false, false, true, true]), Some((3, 3)));
    }

    #[test]
    fn longest_of_several_runs_wins() {
        assert_eq!(
            longest_visible_run(&[true, false, true, true, false, false]),
            Some((2, 2))
        );
    }

    #[test]
    fn nothing_or_everything_visible() {
        assert_eq!(longest_visible_run(&[false, false, false]), None);
        assert_eq!(longest_visible_run(&[true, true, true]), None);
    }
}
