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

//! Convex decomposition of a closed boundary loop.
//!
//! The loop is fanned from its first point. Whenever the next boundary point cannot be
//! reached without leaving the interior, the skipped concave stretch is decomposed first,
//! with its own first point as the fan center, and the two fans are stitched together.

use tracing::error;

use crate::{
    config::Tolerances,
    error::{DecompositionError, DecompositionResult},
    geometry::{
        intersection::triangle_intersects_segment,
        point::Point3,
        vector::{Cross3, Vector3, VectorOps},
    },
    mesh::basic_types::{GenTriangle, Triangulation3},
    numeric::scalar::Scalar,
};

/// Ordered boundary points with one normal (and optionally one tangent) per point.
///
/// Normals point towards the side the surface faces and live in the same frame as the
/// points.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryLoop<T: Scalar> {
    pub points: Vec<Point3<T>>,
    pub normals: Vec<Vector3<T>>,
    pub tangents: Option<Vec<Vector3<T>>>,
    pub closed: bool,
}

impl<T: Scalar> BoundaryLoop<T> {
    #[must_use]
    pub fn closed(points: Vec<Point3<T>>, normals: Vec<Vector3<T>>) -> Self {
        Self {
            points,
            normals,
            tangents: None,
            closed: true,
        }
    }

    /// Closed loop with the same normal at every point.
    #[must_use]
    pub fn planar(points: Vec<Point3<T>>, normal: Vector3<T>) -> Self {
        let normals = vec![normal; points.len()];
        Self::closed(points, normals)
    }

    #[must_use]
    pub fn with_tangents(mut self, tangents: Vec<Vector3<T>>) -> Self {
        self.tangents = Some(tangents);
        self
    }

    #[must_use]
    pub fn open(mut self) -> Self {
        self.closed = false;
        self
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Rejects open loops, too few points and per-point attributes of the wrong length.
    pub fn check(&self) -> DecompositionResult<()> {
        let n = self.points.len();
        if n < 3 {
            return Err(DecompositionError::TooFewPoints(n));
        }
        if !self.closed {
            return Err(DecompositionError::OpenBoundary);
        }
        if self.normals.len() != n {
            return Err(DecompositionError::AttributeCount {
                attribute: "normals",
                points: n,
                len: self.normals.len(),
            });
        }
        if let Some(tangents) = &self.tangents {
            if tangents.len() != n {
                return Err(DecompositionError::AttributeCount {
                    attribute: "tangents",
                    points: n,
                    len: tangents.len(),
                });
            }
        }
        Ok(())
    }

    /// Stored tangent, or the central difference of the two neighbouring points.
    pub fn tangent(&self, i: usize) -> Vector3<T> {
        if let Some(t) = self.tangents.as_ref().and_then(|t| t.get(i)) {
            return *t;
        }
        let n = self.points.len();
        if n == 0 {
            return Vector3::zero();
        }
        let next = self.points[(i + 1) % n];
        let prev = self.points[(i + n - 1) % n];
        next - prev
    }
}

/// Indices into the boundary of one convex sub-polygon, in boundary order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConvexRegion {
    pub vertices: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Decomposition<T: Scalar> {
    /// Triangles over the boundary points, linked through shared diagonals.
    pub triangulation: Triangulation3<T>,
    pub regions: Vec<ConvexRegion>,
    /// Number of concave stretches that had to be decomposed separately.
    pub concave_recursions: usize,
}

/// Stateful driver; keeps whatever was built when a run fails.
pub struct ConvexDecomposer<'a, T: Scalar> {
    boundary: &'a BoundaryLoop<T>,
    tolerances: Tolerances<T>,
    out: Decomposition<T>,
}

impl<'a, T: Scalar> ConvexDecomposer<'a, T> {
    pub fn new(boundary: &'a BoundaryLoop<T>, tolerances: Tolerances<T>) -> DecompositionResult<Self> {
        boundary.check()?;
        Ok(Self {
            boundary,
            tolerances,
            out: Decomposition {
                triangulation: Triangulation3::with_points(boundary.points.clone()),
                regions: Vec::new(),
                concave_recursions: 0,
            },
        })
    }

    /// Decomposes the whole loop, fanning from point 0.
    pub fn run(&mut self) -> DecompositionResult<()> {
        let last = self.boundary.len() - 1;
        self.build_convex(0, last)
    }

    /// Output so far. Complete only after a successful [`run`](Self::run).
    pub fn finish(self) -> Decomposition<T> {
        self.out
    }

    #[inline(always)]
    fn guarded(&self, at: usize, core: &Point3<T>) -> Point3<T> {
        let p = self.boundary.points[at];
        p + (p - *core).clamped_to_max_norm(self.tolerances.guard_length)
    }

    /// Can `(core, anchor, probe)` be cut off without leaving the interior?
    ///
    /// The probe has to lie on the inner side of `core -> anchor`, and no boundary segment
    /// between `anchor` and `last` may cross the triangle. The segments touching `anchor`
    /// and `probe` start from a point pushed away from `core` so they do not register as
    /// crossings at the shared corners.
    fn is_valid_ear(&self, core: usize, anchor: usize, probe: usize, last: usize) -> bool {
        let points = &self.boundary.points;
        let normals = &self.boundary.normals;
        let (c, a, p) = (points[core], points[anchor], points[probe]);

        let plane = (normals[anchor] + normals[core]).cross(&(a - c));
        if (p - c).dot(&plane) <= T::zero() {
            return false;
        }

        let n = points.len();
        let eps = self.tolerances.epsilon;
        let mut collide = anchor;
        let mut prev = self.guarded(anchor, &c);
        while collide != last {
            collide = (collide + 1) % n;
            if collide == probe {
                prev = self.guarded(probe, &c);
                continue;
            }
            let next = points[collide];
            if triangle_intersects_segment(&c, &a, &p, &prev, &next, eps) {
                return false;
            }
            prev = next;
        }
        true
    }

    fn build_convex(&mut self, core: usize, to: usize) -> DecompositionResult<()> {
        let n = self.boundary.len();
        let mut anchor = (core + 1) % n;
        let mut region = ConvexRegion {
            vertices: vec![core, anchor],
        };
        let mut prev_ear: Option<usize> = None;

        while anchor != to {
            let mut probe = anchor;
            loop {
                probe = (probe + 1) % n;
                if self.is_valid_ear(core, anchor, probe, to) {
                    break;
                }
                if probe == to {
                    return Err(DecompositionError::Infeasible { core, anchor, to });
                }
            }

            let before = self.out.triangulation.triangles.len();
            if probe != (anchor + 1) % n {
                self.out.concave_recursions += 1;
                self.build_convex(anchor, probe)?;
            }

            let tris = &mut self.out.triangulation.triangles;
            let index = tris.len();
            let mut ear = GenTriangle::new(anchor, core, probe);

            if let Some(prev) = prev_ear {
                tris[prev].adjs[0] = Some(index);
                ear.adjs[2] = Some(prev);
            }
            if index > before {
                if let Some(stitched) = tris.last_mut() {
                    stitched.adjs[0] = Some(index);
                    ear.adjs[1] = Some(index - 1);
                }
            }

            tris.push(ear);
            prev_ear = Some(index);
            anchor = probe;
            region.vertices.push(probe);
        }

        if region.vertices.len() > 2 {
            self.out.regions.push(region);
        }
        Ok(())
    }
}

/// Triangulates the interior of `boundary` into convex regions.
///
/// Fails on open or malformed loops and when some stretch of the boundary admits no valid
/// ear, typically because the loop intersects itself.
pub fn decompose<T: Scalar>(
    boundary: &BoundaryLoop<T>,
    tolerances: Tolerances<T>,
) -> DecompositionResult<Decomposition<T>> {
    let mut decomposer = ConvexDecomposer::new(boundary, tolerances)?;
    if let Err(err) = decomposer.run() {
        error!(points = boundary.len(), %err, "failed building convex decomposition");
        return Err(err);
    }
    Ok(decomposer.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::spatial_element::SpatialElement;

    fn up() -> Vector3<f64> {
        Vector3::from_vals([0.0, 0.0, 1.0])
    }

    fn flat(xy: &[(f64, f64)]) -> BoundaryLoop<f64> {
        let points = xy.iter().map(|&(x, y)| Point3::from_vals([x, y, 0.0])).collect();
        BoundaryLoop::planar(points, up())
    }

    #[test]
    fn triangle_is_one_ear() {
        let boundary = flat(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]);
        let d = decompose(&boundary, Tolerances::default()).unwrap();
        assert_eq!(d.triangulation.triangles.len(), 1);
        assert_eq!(d.triangulation.triangles[0].verts, [1, 0, 2]);
        assert_eq!(d.regions, vec![ConvexRegion { vertices: vec![0, 1, 2] }]);
    }

    #[test]
    fn check_rejects_bad_loops() {
        let boundary = flat(&[(0.0, 0.0), (1.0, 0.0)]);
        assert_eq!(boundary.check(), Err(DecompositionError::TooFewPoints(2)));

        let mut boundary = flat(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]);
        boundary.normals.pop();
        assert_eq!(
            boundary.check(),
            Err(DecompositionError::AttributeCount { attribute: "normals", points: 3, len: 2 })
        );
    }

    #[test]
    fn central_difference_tangent() {
        let boundary = flat(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)]);
        assert_eq!(boundary.tangent(0), Vector3::from_vals([2.0, -2.0, 0.0]));
        assert_eq!(boundary.tangent(1), Vector3::from_vals([2.0, 2.0, 0.0]));
    }
}
