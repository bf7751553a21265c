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

//! Planar incremental triangulation, point insertion and edge-flip legalization.

pub mod hull;
pub mod insertion;
pub mod legalize;

use crate::{
    config::{LegalizeOpts, TriangulationOpts},
    error::TopologyResult,
    geometry::point::Point2,
    numeric::scalar::Scalar,
};

/// Builds a triangulation of a planar point cloud.
pub trait Triangulate2D<T: Scalar>: Sized {
    fn triangulate(cloud: &[Point2<T>], opts: &TriangulationOpts<T>) -> Self;
}

/// Edge-flip pass that moves a triangulation towards the Delaunay condition.
pub trait Legalize<T: Scalar> {
    fn legalize(&mut self, opts: &LegalizeOpts<T>) -> TopologyResult<LegalizeReport>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LegalizeReport {
    /// Sweeps over the triangle array, including the final one without flips.
    pub sweeps: usize,
    pub flips: usize,
    pub changed: bool,
}
