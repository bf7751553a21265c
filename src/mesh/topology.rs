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

use ahash::AHashMap;
use smallvec::SmallVec;

use crate::{
    error::{TopologyError, TopologyResult},
    geometry::point::Point,
    impl_triangulation,
    kernel::predicates::{self, Circle},
    mesh::basic_types::{GenTriangle, TriangleEdge},
};

#[inline(always)]
fn push_unique(set: &mut SmallVec<[usize; 16]>, t: usize) {
    if !set.contains(&t) {
        set.push(t);
    }
}

#[inline(always)]
fn edge_key(a: usize, b: usize) -> (usize, usize) {
    if a < b { (a, b) } else { (b, a) }
}

impl_triangulation! {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_points(points: Vec<Point<T, N>>) -> Self {
        Self { points, triangles: Vec::new() }
    }

    /// Builds triangles from index triples and links them through shared edges.
    pub fn from_parts(points: Vec<Point<T, N>>, triples: &[[usize; 3]]) -> Self {
        let mut out = Self {
            points,
            triangles: triples
                .iter()
                .map(|&[a, b, c]| GenTriangle::new(a, b, c))
                .collect(),
        };
        out.reparent_all();
        out
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    #[inline(always)]
    pub fn push_triangle(&mut self, triangle: GenTriangle) -> usize {
        self.triangles.push(triangle);
        self.triangles.len() - 1
    }

    #[inline(always)]
    pub fn push_point(&mut self, p: Point<T, N>) -> usize {
        self.points.push(p);
        self.points.len() - 1
    }

    pub fn live_triangles(&self) -> impl Iterator<Item = (usize, &GenTriangle)> + '_ {
        self.triangles.iter().enumerate().filter(|(_, t)| t.enabled)
    }

    pub fn live_count(&self) -> usize {
        self.triangles.iter().filter(|t| t.enabled).count()
    }

    /// Flat `[a0, b0, c0, a1, ...]` vertex indices of the live triangles.
    pub fn index_buffer(&self) -> Vec<usize> {
        self.live_triangles().flat_map(|(_, t)| t.verts).collect()
    }

    #[inline(always)]
    pub fn corners(&self, t: usize) -> [Point<T, N>; 3] {
        let [a, b, c] = self.triangles[t].verts;
        [self.points[a], self.points[b], self.points[c]]
    }

    pub fn centroid(&self, t: usize) -> Point<T, N> {
        let [a, b, c] = self.corners(t);
        predicates::centroid(&a, &b, &c)
    }

    pub fn circumcircle(&self, t: usize, eps: T) -> Circle<T, N> {
        let [a, b, c] = self.corners(t);
        predicates::circumcircle(&a, &b, &c, eps)
    }

    /// Relinks `indices` against each other and against every live triangle they currently
    /// link to. The given triangles lose their old links first.
    ///
    /// Quadratic in the size of the neighbourhood; out of range links are dropped.
    pub fn reparent(&mut self, indices: &[usize]) {
        let len = self.triangles.len();
        let mut working: SmallVec<[usize; 16]> = SmallVec::new();

        for &t in indices {
            if t >= len {
                continue;
            }
            push_unique(&mut working, t);
            for adj in self.triangles[t].adjs.into_iter().flatten() {
                if adj < len && self.triangles[adj].enabled {
                    push_unique(&mut working, adj);
                }
            }
            self.triangles[t].clear_adjs();
        }

        for i in 0..working.len() {
            let mine = working[i];
            if !self.triangles[mine].enabled {
                continue;
            }
            for &your in &working[i + 1..] {
                let (a, b) = (self.triangles[mine], self.triangles[your]);
                if !b.enabled {
                    continue;
                }
                let (Some(sa), Some(sb)) = (a.opposite_of(&b), b.opposite_of(&a)) else {
                    continue;
                };
                self.triangles[mine].adjs[sa] = Some(your);
                self.triangles[your].adjs[sb] = Some(mine);
            }
        }
    }

    /// Rebuilds every live link from shared edges.
    ///
    /// An edge claimed by more than two triangles is paired in encounter order.
    pub fn reparent_all(&mut self) {
        let mut open: AHashMap<(usize, usize), (usize, usize)> =
            AHashMap::with_capacity(self.triangles.len() * 3);

        for t in self.triangles.iter_mut().filter(|t| t.enabled) {
            t.clear_adjs();
        }

        for ti in 0..self.triangles.len() {
            if !self.triangles[ti].enabled {
                continue;
            }
            for slot in 0..3 {
                let (a, b) = self.triangles[ti].edge(slot);
                let key = edge_key(a, b);
                match open.remove(&key) {
                    Some((other, other_slot)) if other != ti => {
                        self.triangles[ti].adjs[slot] = Some(other);
                        self.triangles[other].adjs[other_slot] = Some(ti);
                    }
                    _ => {
                        open.insert(key, (ti, slot));
                    }
                }
            }
        }
    }

    /// Checks index ranges, link symmetry and slot placement of every live triangle.
    pub fn validate(&self) -> TopologyResult<()> {
        let points = self.points.len();
        let len = self.triangles.len();

        for (ti, tri) in self.live_triangles() {
            if let Some(&v) = tri.verts.iter().find(|&&v| v >= points) {
                return Err(TopologyError::InvalidIndex { triangle: ti, index: v, len: points });
            }

            for (slot, adj) in tri.adjs.iter().enumerate() {
                let Some(n) = *adj else { continue };
                if n >= len {
                    return Err(TopologyError::InvalidIndex { triangle: ti, index: n, len });
                }
                let other = &self.triangles[n];
                if !other.enabled {
                    continue;
                }
                let Some(expected) = tri.opposite_of(other) else {
                    return Err(TopologyError::MissingOpposite { triangle: ti, neighbour: n });
                };
                if expected != slot {
                    return Err(TopologyError::MisplacedLink {
                        triangle: ti,
                        neighbour: n,
                        slot,
                        expected,
                    });
                }
                if !other.adjs.contains(&Some(ti)) {
                    return Err(TopologyError::AsymmetricLink { triangle: ti, neighbour: n });
                }
            }
        }
        Ok(())
    }

    /// Unlinked edges of the live triangles, chained so that each edge ends where the next
    /// one starts.
    ///
    /// Follows the first chain found; a triangulation with holes or several components
    /// yields only the outer ring of its lowest-indexed boundary edge.
    pub fn hull_edges(&self) -> Vec<TriangleEdge> {
        let mut by_start: AHashMap<usize, TriangleEdge> = AHashMap::new();
        let mut first = None;

        for (ti, tri) in self.live_triangles() {
            for slot in 0..3 {
                if tri.adjs[slot].is_some() {
                    continue;
                }
                let edge = TriangleEdge::new(ti, slot);
                by_start.insert(tri.edge(slot).0, edge);
                first.get_or_insert(edge);
            }
        }

        let Some(first) = first else {
            return Vec::new();
        };

        let mut chain = vec![first];
        let mut current = first;
        while chain.len() < by_start.len() {
            let end = self.triangles[current.triangle].edge(current.slot).1;
            let Some(&next) = by_start.get(&end) else { break };
            if next == first {
                break;
            }
            chain.push(next);
            current = next;
        }
        chain
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        error::TopologyError,
        geometry::{point::Point2, spatial_element::SpatialElement},
        mesh::basic_types::{GenTriangle, Triangulation2},
    };

    fn quad() -> Triangulation2<f64> {
        let points = vec![
            Point2::from_vals([0.0, 0.0]),
            Point2::from_vals([1.0, 0.0]),
            Point2::from_vals([1.0, 1.0]),
            Point2::from_vals([0.0, 1.0]),
        ];
        Triangulation2::from_parts(points, &[[0, 1, 2], [0, 2, 3]])
    }

    #[test]
    fn from_parts_links_shared_edge() {
        let t = quad();
        assert_eq!(t.triangles[0].adjs, [None, Some(1), None]);
        assert_eq!(t.triangles[1].adjs, [None, None, Some(0)]);
        assert!(t.validate().is_ok());
    }

    #[test]
    fn reparent_restores_cleared_links() {
        let mut t = quad();
        t.triangles[0].clear_adjs();
        t.triangles[1].adjs = [None, None, Some(0)];
        t.reparent(&[1]);
        assert_eq!(t.triangles[0].adjs[1], Some(1));
        assert_eq!(t.triangles[1].adjs[2], Some(0));
        assert!(t.validate().is_ok());
    }

    #[test]
    fn validate_reports_one_sided_link() {
        let mut t = quad();
        t.triangles[1].clear_adjs();
        assert_eq!(
            t.validate(),
            Err(TopologyError::AsymmetricLink { triangle: 0, neighbour: 1 })
        );
    }

    #[test]
    fn validate_reports_link_in_wrong_slot() {
        let mut t = quad();
        t.triangles.push(GenTriangle::new(1, 2, 3));
        t.triangles[2].adjs[0] = Some(0);
        t.triangles[0].adjs[0] = Some(2);
        assert_eq!(
            t.validate(),
            Err(TopologyError::MisplacedLink { triangle: 2, neighbour: 0, slot: 0, expected: 2 })
        );
    }

    #[test]
    fn validate_reports_link_without_shared_edge() {
        let mut t = quad();
        t.triangles.push(GenTriangle::new(1, 4, 5));
        t.points.push(Point2::from_vals([2.0, 0.0]));
        t.points.push(Point2::from_vals([2.0, 1.0]));
        t.triangles[0].adjs[0] = Some(2);
        assert_eq!(
            t.validate(),
            Err(TopologyError::MissingOpposite { triangle: 0, neighbour: 2 })
        );
    }

    #[test]
    fn disabled_triangles_are_ignored() {
        let mut t = quad();
        t.triangles[1].enabled = false;
        t.reparent_all();
        assert_eq!(t.live_count(), 1);
        assert_eq!(t.triangles[0].adjs, [None; 3]);
        assert_eq!(t.index_buffer(), vec![0, 1, 2]);
    }

    #[test]
    fn hull_chain_is_closed() {
        let t = quad();
        let hull = t.hull_edges();
        assert_eq!(hull.len(), 4);
        for (i, e) in hull.iter().enumerate() {
            let next = hull[(i + 1) % hull.len()];
            let end = t.triangles[e.triangle].edge(e.slot).1;
            let start = t.triangles[next.triangle].edge(next.slot).0;
            assert_eq!(end, start);
        }
    }
}
