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

//! Adjacency-tracked triangle meshes for procedural surface generation.
//!
//! - planar incremental triangulation of point clouds with Delaunay edge flips
//!   ([`Triangulate2D`], [`Legalize`]),
//! - point insertion into an existing planar triangulation
//!   ([`Triangulation2::add_point`]),
//! - convex decomposition of closed boundary loops ([`decompose`]) and slab fills built on
//!   top of it ([`generate_fill`]).
//!
//! All geometry is generic over a floating-point [`Scalar`] and uses epsilon thresholds
//! rather than exact predicates.

pub mod config;
pub mod error;
pub mod geometry;
pub mod kernel;
pub mod mesh;
pub mod mesh_processing;
pub mod numeric;
pub mod operations;

pub use config::{LegalizeOpts, Tolerances, TriangulationOpts};
pub use error::{DecompositionError, FillError, TopologyError};
pub use geometry::{Point, Point2, Point3, Vector, Vector2, Vector3};
pub use mesh::{GenTriangle, Triangulation, Triangulation2, Triangulation3};
pub use mesh_processing::{
    fill::{FillMeshes, FillParams, TriangleMesh, generate_fill},
    sampling::{jittered_grid, jittered_grid_seeded},
};
pub use numeric::Scalar;
pub use operations::{
    BoundaryLoop, ConvexDecomposer, ConvexRegion, Decomposition, Legalize, LegalizeReport,
    Triangulate2D, decompose,
};
