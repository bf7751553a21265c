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

use tracing::{debug, warn};

use crate::{
    config::LegalizeOpts,
    error::{TopologyError, TopologyResult},
    impl_triangulation,
    kernel::predicates::Circle,
    mesh::basic_types::{Triangulation2, Triangulation3},
    numeric::scalar::Scalar,
    operations::triangulation::{Legalize, LegalizeReport},
};

/// Neighbour across slot `e` of `index` together with the slot of its far vertex.
struct Across {
    adj: usize,
    far: usize,
}

impl_triangulation! {
    fn across(&self, index: usize, e: usize) -> TopologyResult<Option<Across>> {
        let Some(adj) = self.triangles[index].adjs[e] else {
            return Ok(None);
        };
        if adj >= self.triangles.len() || !self.triangles[adj].enabled {
            return Ok(None);
        }
        let far = self.triangles[adj]
            .opposite_of(&self.triangles[index])
            .ok_or(TopologyError::MissingOpposite { triangle: adj, neighbour: index })?;
        Ok(Some(Across { adj, far }))
    }

    /// Moves the diagonal shared by `index` and `adj` onto their two far vertices.
    ///
    /// `index` keeps `verts[e + 2]` and gains the far vertex of `adj` in place of
    /// `verts[e + 1]`; `adj` gains `verts[e]` of `index` in place of the vertex `index`
    /// kept. Links are not touched.
    fn flip_vertices(&mut self, index: usize, e: usize, adj: usize, far: usize) {
        let mine = self.triangles[index];
        let your = self.triangles[adj];
        let kept = mine.verts[(e + 2) % 3];
        let swapped = your.verts.iter().position(|&v| v == kept).unwrap_or((far + 1) % 3);

        self.triangles[index].verts[(e + 1) % 3] = your.verts[far];
        self.triangles[adj].verts[swapped] = mine.verts[e];
    }

    fn sweep_cap(&self, opts: &LegalizeOpts<T>) -> usize {
        opts.max_iterations.unwrap_or(self.triangles.len())
    }
}

impl<T: Scalar> Triangulation2<T> {
    /// Rewires the four slots around a freshly flipped pair and repoints the two outer
    /// triangles that changed sides.
    fn relink_flip(&mut self, index: usize, e: usize, adj: usize, f: usize) -> TopologyResult<()> {
        let e2 = (e + 2) % 3;
        let f2 = (f + 2) % 3;

        let mine_outer = self.triangles[index].adjs[e2];
        let your_outer = self.triangles[adj].adjs[f2];

        self.triangles[adj].adjs[f] = mine_outer;
        self.triangles[index].adjs[e2] = Some(adj);
        self.triangles[index].adjs[e] = your_outer;
        self.triangles[adj].adjs[f2] = Some(index);

        self.repoint_outer(your_outer, index)?;
        self.repoint_outer(mine_outer, adj)
    }

    fn repoint_outer(&mut self, outer: Option<usize>, to: usize) -> TopologyResult<()> {
        let Some(outer) = outer else {
            return Ok(());
        };
        if outer >= self.triangles.len() {
            return Err(TopologyError::InvalidIndex {
                triangle: to,
                index: outer,
                len: self.triangles.len(),
            });
        }
        let slot = self.triangles[outer]
            .opposite_of(&self.triangles[to])
            .ok_or(TopologyError::MissingOpposite { triangle: outer, neighbour: to })?;
        self.triangles[outer].adjs[slot] = Some(to);
        Ok(())
    }
}

impl<T: Scalar> Legalize<T> for Triangulation2<T> {
    /// Flips every edge whose far vertex lies inside the cached circumcircle of the near
    /// triangle, shrunk by `opts.epsilon`, until a sweep makes no flip or the sweep cap is
    /// reached.
    fn legalize(&mut self, opts: &LegalizeOpts<T>) -> TopologyResult<LegalizeReport> {
        let eps = opts.epsilon;
        let mut circles: Vec<Circle<T, 2>> = (0..self.triangles.len())
            .map(|t| self.circumcircle(t, eps))
            .collect();
        let mut report = LegalizeReport::default();
        let mut settled = false;

        for _ in 0..self.sweep_cap(opts) {
            report.sweeps += 1;
            let mut flipped = false;

            for index in 0..self.triangles.len() {
                if !self.triangles[index].enabled {
                    continue;
                }
                for e in 0..3 {
                    let Some(Across { adj, far }) = self.across(index, e)? else {
                        continue;
                    };
                    let d = self.points[self.triangles[adj].verts[far]];
                    if !circles[index].contains(&d, eps) {
                        continue;
                    }

                    self.flip_vertices(index, e, adj, far);
                    self.relink_flip(index, e, adj, far)?;
                    circles[index] = self.circumcircle(index, eps);
                    circles[adj] = self.circumcircle(adj, eps);

                    report.flips += 1;
                    flipped = true;
                    break;
                }
            }

            if !flipped {
                settled = true;
                break;
            }
        }

        if !settled && report.sweeps > 0 {
            warn!(sweeps = report.sweeps, flips = report.flips, "legalization stopped at sweep cap");
        }
        report.changed = report.flips > 0;
        debug!(sweeps = report.sweeps, flips = report.flips, "planar legalization finished");
        Ok(report)
    }
}

impl<T: Scalar> Legalize<T> for Triangulation3<T> {
    /// Same flip criterion measured in 3D against freshly computed circumcircles; links
    /// around each flipped pair are rebuilt with [`reparent`](Triangulation3::reparent).
    ///
    /// A local improvement for surface patches, not a certified Delaunay pass.
    fn legalize(&mut self, opts: &LegalizeOpts<T>) -> TopologyResult<LegalizeReport> {
        let eps = opts.epsilon;
        let mut report = LegalizeReport::default();
        let mut settled = false;

        for _ in 0..self.sweep_cap(opts) {
            report.sweeps += 1;
            let mut flipped = false;

            for index in 0..self.triangles.len() {
                if !self.triangles[index].enabled {
                    continue;
                }
                for e in 0..3 {
                    let Some(Across { adj, far }) = self.across(index, e)? else {
                        continue;
                    };
                    let d = self.points[self.triangles[adj].verts[far]];
                    if !self.circumcircle(index, eps).contains(&d, eps) {
                        continue;
                    }

                    self.flip_vertices(index, e, adj, far);
                    self.reparent(&[index, adj]);

                    report.flips += 1;
                    flipped = true;
                    break;
                }
            }

            if !flipped {
                settled = true;
                break;
            }
        }

        if !settled && report.sweeps > 0 {
            warn!(sweeps = report.sweeps, flips = report.flips, "legalization stopped at sweep cap");
        }
        report.changed = report.flips > 0;
        debug!(sweeps = report.sweeps, flips = report.flips, "surface legalization finished");
        Ok(report)
    }
}
