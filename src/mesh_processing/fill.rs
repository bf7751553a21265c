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

//! Surface fill for a closed boundary loop: a top cap, and for slabs a mirrored bottom cap,
//! the rim strip joining them and convex collision point clouds.

use tracing::{debug, info};

use crate::{
    config::{LegalizeOpts, Tolerances},
    error::FillResult,
    geometry::{
        point::Point3,
        vector::{Cross3, Vector3, VectorOps},
    },
    mesh::basic_types::Triangulation3,
    numeric::scalar::Scalar,
    operations::{
        decomposition::{BoundaryLoop, ConvexRegion, Decomposition, decompose},
        triangulation::Legalize,
    },
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillParams<T: Scalar> {
    /// Run the surface legalization pass over the top cap.
    pub delaunay: bool,
    /// Distance of the bottom cap from the top cap along the negated boundary normals.
    pub thickness: T,
    /// Additional offset subtracted from every bottom cap point.
    pub extrude: Vector3<T>,
    pub tolerances: Tolerances<T>,
}

impl<T: Scalar> Default for FillParams<T> {
    fn default() -> Self {
        Self {
            delaunay: true,
            thickness: T::zero(),
            extrude: Vector3::zero(),
            tolerances: Tolerances::default(),
        }
    }
}

impl<T: Scalar> FillParams<T> {
    /// Slab of the given thickness.
    #[must_use]
    pub fn slab(thickness: T) -> Self {
        Self {
            thickness,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_extrude(mut self, extrude: Vector3<T>) -> Self {
        self.extrude = extrude;
        self
    }

    #[must_use]
    pub fn without_delaunay(mut self) -> Self {
        self.delaunay = false;
        self
    }

    fn is_slab(&self) -> bool {
        let eps = self.tolerances.epsilon;
        self.thickness > eps || self.extrude.norm_squared() > eps
    }
}

/// Triangles plus one normal and tangent per point.
#[derive(Debug, Clone, PartialEq)]
pub struct TriangleMesh<T: Scalar> {
    pub triangulation: Triangulation3<T>,
    pub normals: Vec<Vector3<T>>,
    pub tangents: Vec<Vector3<T>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FillMeshes<T: Scalar> {
    pub top: TriangleMesh<T>,
    pub bottom: Option<TriangleMesh<T>>,
    pub rim: Option<TriangleMesh<T>>,
    /// Top and bottom points of every convex region, one cloud per collision shape.
    pub collision: Vec<Vec<Point3<T>>>,
    pub regions: Vec<ConvexRegion>,
    pub concave_recursions: usize,
}

/// Fills `boundary` and, when `params` asks for thickness or extrusion, closes it into a
/// slab.
pub fn generate_fill<T: Scalar>(
    boundary: &BoundaryLoop<T>,
    params: &FillParams<T>,
) -> FillResult<FillMeshes<T>> {
    let Decomposition {
        mut triangulation,
        regions,
        concave_recursions,
    } = decompose(boundary, params.tolerances)?;

    if params.delaunay {
        let opts = LegalizeOpts {
            epsilon: params.tolerances.epsilon,
            ..Default::default()
        };
        let report = triangulation.legalize(&opts)?;
        debug!(flips = report.flips, "top cap legalized");
    }

    let top = TriangleMesh {
        triangulation,
        normals: boundary.normals.clone(),
        tangents: (0..boundary.len()).map(|i| boundary.tangent(i)).collect(),
    };

    let mut out = FillMeshes {
        top,
        bottom: None,
        rim: None,
        collision: Vec::new(),
        regions,
        concave_recursions,
    };

    if params.is_slab() {
        let bottom = mirror(&out.top, params);
        out.rim = Some(rim(&out.top, &bottom));
        out.collision = collision_clouds(&out.regions, &out.top, &bottom);
        out.bottom = Some(bottom);
    }

    info!(
        points = boundary.len(),
        triangles = out.top.triangulation.triangles.len(),
        regions = out.regions.len(),
        slab = out.bottom.is_some(),
        "fill generated"
    );
    Ok(out)
}

/// Bottom cap: flipped normals, points pushed down by `thickness` and back by `extrude`,
/// winding reversed with links kept.
fn mirror<T: Scalar>(top: &TriangleMesh<T>, params: &FillParams<T>) -> TriangleMesh<T> {
    let mut bottom = top.clone();

    for (p, n) in bottom
        .triangulation
        .points
        .iter_mut()
        .zip(bottom.normals.iter_mut())
    {
        *n = -*n;
        *p = *p + *n * params.thickness - params.extrude;
    }

    for tri in &mut bottom.triangulation.triangles {
        tri.verts.swap(0, 1);
        tri.adjs.swap(0, 1);
    }
    bottom
}

/// Two triangles per boundary edge between the caps. Quads do not share points, so each
/// edge keeps its own hard normals.
fn rim<T: Scalar>(top: &TriangleMesh<T>, bottom: &TriangleMesh<T>) -> TriangleMesh<T> {
    let n = top.triangulation.points.len();
    let mut points = Vec::with_capacity(n * 4);
    let mut normals = Vec::with_capacity(n * 4);
    let mut tangents = Vec::with_capacity(n * 4);
    let mut triples = Vec::with_capacity(n * 2);

    for a in 0..n {
        let b = (a + 1) % n;
        let (ap, bp) = (top.triangulation.points[a], top.triangulation.points[b]);
        let (cp, dp) = (bottom.triangulation.points[a], bottom.triangulation.points[b]);
        let (ta, tb) = (top.tangents[a], bottom.tangents[b]);

        let na = ta.cross(&(ap - cp)).safe_normal();
        let nb = tb.cross(&(bp - dp)).safe_normal();

        let base = points.len();
        points.extend([ap, bp, cp, dp]);
        normals.extend([na, nb, na, nb]);
        tangents.extend([ta, tb, ta, tb]);
        triples.push([base, base + 1, base + 2]);
        triples.push([base + 1, base + 3, base + 2]);
    }

    TriangleMesh {
        triangulation: Triangulation3::from_parts(points, &triples),
        normals,
        tangents,
    }
}

fn collision_clouds<T: Scalar>(
    regions: &[ConvexRegion],
    top: &TriangleMesh<T>,
    bottom: &TriangleMesh<T>,
) -> Vec<Vec<Point3<T>>> {
    regions
        .iter()
        .map(|region| {
            region
                .vertices
                .iter()
                .flat_map(|&v| [bottom.triangulation.points[v], top.triangulation.points[v]])
                .collect::<Vec<_>>()
        })
        .filter(|cloud| cloud.len() >= 6)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::spatial_element::SpatialElement;

    fn square() -> BoundaryLoop<f64> {
        let points = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]
            .iter()
            .map(|&(x, y)| Point3::from_vals([x, y, 0.0]))
            .collect();
        BoundaryLoop::planar(points, Vector3::from_vals([0.0, 0.0, 1.0]))
    }

    #[test]
    fn flat_fill_has_only_a_top_cap() {
        let fill = generate_fill(&square(), &FillParams::default()).unwrap();
        assert_eq!(fill.top.triangulation.triangles.len(), 2);
        assert!(fill.bottom.is_none());
        assert!(fill.rim.is_none());
        assert!(fill.collision.is_empty());
    }

    #[test]
    fn mirror_reverses_winding_and_keeps_links() {
        let fill = generate_fill(&square(), &FillParams::slab(2.0)).unwrap();
        let top = &fill.top.triangulation;
        let bottom = &fill.bottom.as_ref().unwrap().triangulation;

        for (t, b) in top.triangles.iter().zip(&bottom.triangles) {
            assert_eq!(b.verts, [t.verts[1], t.verts[0], t.verts[2]]);
        }
        assert!(bottom.validate().is_ok());
        for p in &bottom.points {
            assert_eq!(p[2], -2.0);
        }
    }
}
