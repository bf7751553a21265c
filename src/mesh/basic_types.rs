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

use smallvec::SmallVec;

use crate::{
    geometry::point::Point,
    numeric::scalar::Scalar,
};

/// Triangle with neighbour links.
///
/// Slot `i` of `adjs` is the triangle across the edge opposite `verts[i]`, i.e. the edge
/// `verts[i + 1] -> verts[i + 2]` (indices mod 3).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenTriangle {
    pub verts: [usize; 3],
    pub adjs: [Option<usize>; 3],
    /// Soft-delete marker. Disabled triangles stay in the array and are skipped by relinking.
    pub enabled: bool,
}

impl Default for GenTriangle {
    fn default() -> Self {
        Self {
            verts: [0; 3],
            adjs: [None; 3],
            enabled: true,
        }
    }
}

/// Boundary edge `(triangle, slot)`: the edge opposite `verts[slot]` of `triangle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TriangleEdge {
    pub triangle: usize,
    pub slot: usize,
}

impl TriangleEdge {
    pub fn new(triangle: usize, slot: usize) -> Self {
        Self { triangle, slot }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitResultKind {
    NoSplit,
    SplitFace,
    SplitEdge,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitResult {
    pub kind: SplitResultKind,
    /// Index of the inserted point; `None` when nothing was inserted.
    pub vertex: Option<usize>,
    /// Triangles created or rewritten by the split.
    pub triangles: SmallVec<[usize; 4]>,
}

impl SplitResult {
    pub fn none() -> Self {
        Self {
            kind: SplitResultKind::NoSplit,
            vertex: None,
            triangles: SmallVec::new(),
        }
    }
}

/// Triangles over a shared point array.
///
/// Points are only ever appended, so vertex indices stay valid for the lifetime of the
/// instance. Triangles are never removed either; see [`GenTriangle::enabled`].
#[derive(Debug, Clone, PartialEq)]
pub struct Triangulation<T: Scalar, const N: usize> {
    pub points: Vec<Point<T, N>>,
    pub triangles: Vec<GenTriangle>,
}

impl<T: Scalar, const N: usize> Default for Triangulation<T, N> {
    fn default() -> Self {
        Self {
            points: Vec::new(),
            triangles: Vec::new(),
        }
    }
}

pub type Triangulation2<T> = Triangulation<T, 2>;
pub type Triangulation3<T> = Triangulation<T, 3>;
